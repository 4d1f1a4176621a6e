//! Error types for compact matrix operations

use thiserror::Error;

/// Result type alias for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur when addressing a compact matrix
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Coordinate outside `[0, size)`, or a zero size at construction
    #[error("coordinate ({x}, {y}) is out of range for a {size}x{size} matrix")]
    OutOfRange {
        /// X coordinate of the rejected access
        x: usize,
        /// Y coordinate of the rejected access
        y: usize,
        /// Configured matrix size
        size: usize,
    },
}
