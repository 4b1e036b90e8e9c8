//! Errors
//!
//! Custom error types used throughout the `arbor` crate.
use thiserror::Error;

/// Errors that can occur when fitting or applying a decision tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A label breaks the class-code contract.
    #[error("Invalid label {0}: labels must be finite, non-negative, integer-valued class codes.")]
    InvalidLabelEncoding(f64),
    /// First value names the input, second is the expected extent, third is what was passed.
    #[error("Shape mismatch for {0}: expected {1} but {2} provided.")]
    ShapeMismatch(String, usize, usize),
    /// Training data has no rows or no columns.
    #[error("Empty dataset: training requires at least one row and one column.")]
    EmptyDataset,
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read model from file.
    #[error("Unable to read model from a file {0}")]
    UnableToRead(String),
}
