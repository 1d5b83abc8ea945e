mod input;
mod topology;

#[cfg(test)]
mod tests;

pub use input::{ParsedCells, parse_cells};
pub use topology::PackTopology;

/// Demo pack layout
pub const DEMO_TOPOLOGY: PackTopology = PackTopology {
    series: 4,
    parallel: 5,
};

/// Twenty measured 18650 capacities (mAh) matching [`DEMO_TOPOLOGY`]
pub const DEMO_CELLS: [f64; 20] = [
    2501.0, 2480.0, 2550.0, 2390.0, 2410.0, 2455.0, 2510.0, 2495.0, 2420.0, 2580.0, 2370.0, 2440.0,
    2525.0, 2460.0, 2395.0, 2505.0, 2475.0, 2430.0, 2540.0, 2400.0,
];
