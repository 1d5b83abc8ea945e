/// Capacities accepted from raw text, plus whatever was thrown away
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCells {
    /// Positive finite capacities in input order
    pub cells: Vec<f64>,
    /// Raw tokens that were not a positive finite number
    pub rejected: Vec<String>,
}

impl ParsedCells {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Parse a comma and/or whitespace separated list of capacities
///
/// Tokens that fail to parse, are NaN or infinite, or are not strictly
/// positive end up in `rejected` instead of aborting the whole parse.
pub fn parse_cells(text: &str) -> ParsedCells {
    let mut parsed = ParsedCells::default();

    for token in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => parsed.cells.push(value),
            _ => parsed.rejected.push(token.to_string()),
        }
    }

    parsed
}
