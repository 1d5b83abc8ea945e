use crate::error::BalanceError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Target pack shape: `series` groups of `parallel` cells each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PackTopology {
    pub series: usize,
    pub parallel: usize,
}

impl PackTopology {
    /// Create a topology, rejecting zero in either dimension
    pub fn new(series: usize, parallel: usize) -> Result<Self, BalanceError> {
        if series == 0 || parallel == 0 {
            return Err(BalanceError::DegenerateConfig(format!(
                "{}S{}P has no cells",
                series, parallel
            )));
        }
        Ok(Self { series, parallel })
    }

    /// Parse `<S>S<P>P` notation, e.g. "4S5P" or "13s4p"
    pub fn parse(raw: &str) -> Result<Self, BalanceError> {
        let upper = raw.trim().to_ascii_uppercase();
        let invalid = || BalanceError::InvalidTopology(raw.to_string());

        let body = upper.strip_suffix('P').ok_or_else(invalid)?;
        let (series, parallel) = body.split_once('S').ok_or_else(invalid)?;
        let series = series.parse::<usize>().map_err(|_| invalid())?;
        let parallel = parallel.parse::<usize>().map_err(|_| invalid())?;

        Self::new(series, parallel)
    }

    /// Number of cells the pack needs
    pub fn required_cells(&self) -> usize {
        self.series * self.parallel
    }

    /// Block a calculation unless exactly `required_cells()` are supplied
    pub fn check(&self, cells: &[f64]) -> Result<(), BalanceError> {
        if cells.len() != self.required_cells() {
            return Err(BalanceError::CountMismatch {
                provided: cells.len(),
                required: self.required_cells(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for PackTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}S{}P", self.series, self.parallel)
    }
}

impl FromStr for PackTopology {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
