use serde::Serialize;

/// One series group of parallel cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    /// 1-based position, for display only
    pub(crate) index: usize,
    /// Capacities in assignment order
    pub(crate) members: Vec<f64>,
}

impl Group {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            members: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn members(&self) -> &[f64] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sum of member capacities (mAh)
    pub fn total(&self) -> f64 {
        self.members.iter().sum()
    }
}

/// Immutable outcome of a single partition run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartitionResult {
    pub(crate) groups: Vec<Group>,
    pub(crate) max_total: f64,
    pub(crate) min_total: f64,
    pub(crate) nominal_voltage: f64,
}

impl PartitionResult {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn series_count(&self) -> usize {
        self.groups.len()
    }

    pub fn max_total(&self) -> f64 {
        self.max_total
    }

    pub fn min_total(&self) -> f64 {
        self.min_total
    }

    /// Spread between the strongest and weakest group
    pub fn delta(&self) -> f64 {
        self.max_total - self.min_total
    }

    /// Nominal pack voltage: series count × nominal cell voltage
    pub fn pack_voltage(&self) -> f64 {
        self.groups.len() as f64 * self.nominal_voltage
    }

    /// Usable pack capacity, capped by the weakest series group
    pub fn pack_capacity(&self) -> f64 {
        self.min_total
    }

    pub fn nominal_voltage(&self) -> f64 {
        self.nominal_voltage
    }
}
