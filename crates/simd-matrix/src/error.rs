//! Error types for matrix operations.
//!
//! Lane alignment (`ROWS` not a multiple of the lane width) has no variant
//! here: it is rejected when the offending matrix type is instantiated.

use thiserror::Error;

/// Errors that can occur during matrix operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A buffer or literal list does not hold exactly `ROWS * COLS` elements.
    #[error("Shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch {
        /// Element count required by the matrix type.
        expected: usize,
        /// Element count that was supplied.
        actual: usize,
    },

    /// Element access outside the matrix bounds.
    #[error("Index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Row count of the matrix.
        rows: usize,
        /// Column count of the matrix.
        cols: usize,
    },

    /// Batched product called with differently sized operand slices.
    #[error("Batch sizes must match: A has {left} matrices, B has {right}")]
    BatchSizeMismatch {
        /// Number of left-hand matrices.
        left: usize,
        /// Number of right-hand matrices.
        right: usize,
    },
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
