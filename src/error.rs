//! Error types for precondition violations and non-converging closures

use thiserror::Error;

use crate::matrix::{MatrixIndex, Size};

/// A malformed matrix construction or growth request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("dense matrix has {got} rows, expected {expected}")]
    RowCount { expected: usize, got: usize },

    #[error("row {row} has length {got}, expected {expected}")]
    RowLength { row: usize, expected: usize, got: usize },

    #[error("index {index} out of bounds for size {size}")]
    IndexOutOfBounds { index: MatrixIndex, size: Size },

    #[error("duplicate index {0}")]
    DuplicateIndex(MatrixIndex),

    #[error("padding value must be the zero element")]
    NonZeroPadding,
}

/// A fixpoint iteration that did not stabilise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClosureError {
    #[error("closure did not converge after {iterations} iterations")]
    NotConverged { iterations: usize },
}
