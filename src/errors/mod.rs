use thiserror::Error;

/// Failures of the rating pipeline. Both are precondition violations on the
/// caller's input and are never recovered internally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingError {
    /// The scaling divisor handed to the probability estimator was zero
    #[error("scaling divisor k must be nonzero")]
    DivisionByZero,

    /// A matrix row does not have one cell per row
    #[error("comparison matrix must be square: row {row} has {actual} cells, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Add context to read errors
pub fn read_context(source: &str) -> String {
    format!("Failed to read from: {}", source)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
