// Public API exports
pub mod balancer;
pub mod cells;
pub mod config;
pub mod error;
pub mod layout;

// Re-export main types for convenience
pub use balancer::{
    Group, NOMINAL_CELL_VOLTAGE, PartitionResult, partition, partition_with_voltage, try_partition,
};

pub use cells::{DEMO_CELLS, DEMO_TOPOLOGY, PackTopology, ParsedCells, parse_cells};

pub use config::BalancerConfig;

pub use error::BalanceError;

pub use layout::{GroupMark, LayoutReport, export_text, fingerprint};
