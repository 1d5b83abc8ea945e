mod greedy;
mod types;


pub use greedy::{partition, partition_with_voltage, try_partition};
pub use types::{Group, PartitionResult};

/// Nominal voltage of a single Li-ion cell (V)
pub const NOMINAL_CELL_VOLTAGE: f64 = 3.7;
