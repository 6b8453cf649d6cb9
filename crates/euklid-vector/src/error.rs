use thiserror::Error;

/// Error types for indexed vector access.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VectorError {
    /// The component index is not smaller than the vector dimension.
    #[error("index {index} out of bounds for a vector of dimension {dim}")]
    IndexOutOfBounds {
        /// The requested component index
        index: usize,
        /// The dimension of the vector
        dim: usize,
    },
}
