use thiserror::Error;

/// Error types for the fallible transform operations.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    /// The rotation axis is too short to define a direction
    #[error("cannot compute a rotation from a zero length axis (norm {0})")]
    ZeroAxis(f64),

    /// Source and destination buffers must have the same length
    #[error("Mismatched buffer lengths: source ({0}) != destination ({1})")]
    MismatchedLengths(usize, usize),
}
