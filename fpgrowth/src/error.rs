//! Error types for frequent itemset mining

use thiserror::Error;

/// Result type for mining operations
pub type Result<T> = std::result::Result<T, FpError>;

/// Errors that can occur before or during a mining run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FpError {
    /// Absolute support threshold below 1
    #[error("Invalid minimum support: {0} (must be at least 1)")]
    InvalidMinSupport(usize),

    /// Relative support threshold outside (0, 1]
    #[error("Invalid minimum support fraction: {0} (must be in (0, 1])")]
    InvalidMinSupportFraction(f64),

    /// Binary transaction matrix holds something other than 0 or 1
    #[error("Invalid matrix value {value} at row {row}, column {column} (expected 0 or 1)")]
    InvalidMatrixValue { row: usize, column: usize, value: i32 },
}
