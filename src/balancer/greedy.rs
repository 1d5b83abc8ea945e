use crate::balancer::types::{Group, PartitionResult};
use crate::balancer::NOMINAL_CELL_VOLTAGE;
use crate::error::BalanceError;

/// Balance `cells` into `series_count` groups using the nominal cell voltage.
///
/// # Panics
/// If `series_count` is zero or `cells` is empty.
pub fn partition(cells: &[f64], series_count: usize) -> PartitionResult {
    partition_with_voltage(cells, series_count, NOMINAL_CELL_VOLTAGE)
}

/// Same as [`partition`], reporting pack voltage against `nominal_voltage`.
pub fn partition_with_voltage(
    cells: &[f64],
    series_count: usize,
    nominal_voltage: f64,
) -> PartitionResult {
    assert!(
        series_count >= 1,
        "precondition violated: series_count must be at least 1"
    );
    assert!(
        !cells.is_empty(),
        "precondition violated: cells must not be empty"
    );

    balance(cells, series_count, nominal_voltage)
}

/// Checked variant of [`partition`] for callers that prefer an error.
pub fn try_partition(cells: &[f64], series_count: usize) -> Result<PartitionResult, BalanceError> {
    if series_count == 0 {
        return Err(BalanceError::DegenerateConfig(
            "series count must be at least 1".to_string(),
        ));
    }
    if cells.is_empty() {
        return Err(BalanceError::EmptyInput);
    }

    Ok(balance(cells, series_count, NOMINAL_CELL_VOLTAGE))
}

fn balance(cells: &[f64], series_count: usize, nominal_voltage: f64) -> PartitionResult {
    // 1. Largest first; stable so equal capacities keep input order
    let mut sorted = cells.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    // 2. Empty buckets
    let mut groups: Vec<Group> = (1..=series_count).map(Group::new).collect();
    let mut totals = vec![0.0_f64; series_count];

    // 3. Each cell goes to the currently weakest bucket
    for cap in sorted {
        let target = lowest_bucket(&totals);
        groups[target].members.push(cap);
        totals[target] += cap;
    }

    // 4. Spread
    let max_total = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_total = totals.iter().copied().fold(f64::INFINITY, f64::min);

    PartitionResult {
        groups,
        max_total,
        min_total,
        nominal_voltage,
    }
}

/// First bucket holding the strictly smallest total
fn lowest_bucket(totals: &[f64]) -> usize {
    let mut best = 0;
    for (i, &total) in totals.iter().enumerate().skip(1) {
        if total < totals[best] {
            best = i;
        }
    }
    best
}
