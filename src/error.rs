use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BalanceError {
    #[error("Cell count mismatch: {provided} provided, {required} required")]
    CountMismatch { provided: usize, required: usize },

    #[error("Degenerate configuration: {0}")]
    DegenerateConfig(String),

    #[error("No cells supplied")]
    EmptyInput,

    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
