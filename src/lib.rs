//! compact_matrix - quarter-space square boolean matrix
//!
//! Stores a square boolean matrix in roughly a quarter of the space of a
//! one-byte-per-bool layout while keeping lookup and mutation O(1). The
//! matrix is split into four quadrants; the four cells sharing a reduced
//! position fold into a single byte-sized case code through a pair of
//! constant lookup tables.
//!
//! ```
//! use compact_matrix::CompactMatrix;
//!
//! let mut mat = CompactMatrix::new(5)?;
//! mat.all_false();
//! mat.set_true(4, 4)?;
//! assert!(mat.get(4, 4)?);
//! assert!(!mat.get(0, 0)?);
//! # Ok::<(), compact_matrix::MatrixError>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Error types (MatrixError and the crate Result alias)
pub mod error;
/// The compact matrix itself
pub mod matrix;

mod mapper;
mod tables;

pub use error::{MatrixError, Result};
pub use matrix::CompactMatrix;
