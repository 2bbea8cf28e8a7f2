//! Utilities for converting between our matrix format and external libraries
//!
//! `sprs` and `ndarray` index from 0; [`Matrix`] indexes from 1.

use ndarray::Array2;
use sprs::CsMat;

use crate::matrix::{Matrix, MatrixIndex, Size};
use crate::semiring::HasZero;

/// Converts a matrix to sprs CsMat in CSR format
pub fn to_sprs<E>(matrix: &Matrix<E>) -> CsMat<E>
where
    E: Clone,
{
    let size = matrix.size();
    let mut row_ptr = Vec::with_capacity(size.rows + 1);
    let mut col_idx = Vec::with_capacity(matrix.nnz());
    let mut values = Vec::with_capacity(matrix.nnz());

    row_ptr.push(0);
    let mut entries = matrix.entries().iter().peekable();
    for row in 1..=size.rows {
        while let Some((ix, e)) = entries.next_if(|(ix, _)| ix.row == row) {
            col_idx.push(ix.col - 1);
            values.push(e.clone());
        }
        row_ptr.push(col_idx.len());
    }

    CsMat::new((size.rows, size.cols), row_ptr, col_idx, values)
}

/// Converts a sprs CsMat in either storage order, dropping explicit zeros
pub fn from_sprs<E>(matrix: &CsMat<E>) -> Matrix<E>
where
    E: HasZero + Clone,
{
    let (rows, cols) = matrix.shape();
    let mut entries = Vec::with_capacity(matrix.nnz());

    for (outer, lane) in matrix.outer_iterator().enumerate() {
        for (inner, e) in lane.iter() {
            let (i, j) = if matrix.is_csr() {
                (outer, inner)
            } else {
                (inner, outer)
            };
            entries.push((MatrixIndex::new(i + 1, j + 1), e.clone()));
        }
    }

    Matrix::from_index_list(Size::new(rows, cols), entries)
}

/// Expands a matrix to a dense ndarray
pub fn to_array2<E>(matrix: &Matrix<E>) -> Array2<E>
where
    E: HasZero + Clone,
{
    let size = matrix.size();
    let mut dense = Array2::from_shape_fn((size.rows, size.cols), |_| E::zero_element());
    for (ix, e) in matrix.entries() {
        dense[[ix.row - 1, ix.col - 1]] = e.clone();
    }
    dense
}

/// Sparsifies a dense ndarray, dropping zeros
pub fn from_array2<E>(dense: &Array2<E>) -> Matrix<E>
where
    E: HasZero + Clone,
{
    let (rows, cols) = dense.dim();
    let entries = dense
        .indexed_iter()
        .filter(|(_, e)| !e.is_zero_element())
        .map(|((i, j), e)| (MatrixIndex::new(i + 1, j + 1), e.clone()))
        .collect();
    Matrix::from_index_list(Size::new(rows, cols), entries)
}
