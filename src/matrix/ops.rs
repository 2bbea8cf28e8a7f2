//! Arithmetic on sparse matrices
//!
//! `add` and `intersect_with` are merge-joins over the sorted entry lists and
//! run in `O(n1 + n2)`. `mul` pairs every non-empty row of the left matrix
//! with every non-empty column of the right one and never materialises the
//! dense product.

use crate::error::MatrixError;
use crate::matrix::{Matrix, MatrixIndex, Size};
use crate::semiring::{HasZero, Semiring};
use crate::utils::{inter_assoc_with, union_assoc_with};

/// A sparse vector: `(position, value)` pairs sorted by position
pub(crate) type SparseVec<E> = Vec<(usize, E)>;

/// Inner product of two sparse vectors: `⊕` over `⊗` of matching positions
pub(crate) fn inner_product<S, E>(semiring: &S, v: &[(usize, E)], w: &[(usize, E)]) -> E
where
    S: Semiring<Element = E>,
    E: HasZero + Clone,
{
    inter_assoc_with(|a, b| semiring.sequence(a, b), v, w)
        .iter()
        .fold(semiring.zero(), |acc, (_, e)| semiring.combine(&acc, e))
}

/// One row of a product: `row` of the left matrix against every column
pub(crate) fn multiply_row<S, E>(
    semiring: &S,
    row: usize,
    v: &[(usize, E)],
    columns: &[(usize, SparseVec<E>)],
) -> Vec<(MatrixIndex, E)>
where
    S: Semiring<Element = E>,
    E: HasZero + Clone,
{
    columns
        .iter()
        .filter_map(|(col, w)| {
            let b = inner_product(semiring, v, w);
            (!semiring.is_zero(&b)).then(|| (MatrixIndex::new(row, *col), b))
        })
        .collect()
}

impl<E: HasZero + Clone> Matrix<E> {
    /// Pointwise sum
    ///
    /// The result has the componentwise maximum of both sizes. Cells whose
    /// combined value is zero are dropped.
    pub fn add<F>(&self, other: &Matrix<E>, combine: F) -> Matrix<E>
    where
        F: FnMut(&E, &E) -> E,
    {
        let mut entries = union_assoc_with(combine, self.entries(), other.entries());
        entries.retain(|(_, e)| !e.is_zero_element());
        Matrix::from_canonical(self.size().sup_size(other.size()), entries)
    }

    /// Pointwise combination of the cells stored in both matrices
    ///
    /// The result has the componentwise minimum of both sizes. Results are
    /// not checked for zero: `combine` must not produce the zero element on
    /// non-zero inputs, or the caller has to filter.
    pub fn intersect_with<F>(&self, other: &Matrix<E>, combine: F) -> Matrix<E>
    where
        F: FnMut(&E, &E) -> E,
    {
        let entries = inter_assoc_with(combine, self.entries(), other.entries());
        Matrix::from_canonical(self.size().inf_size(other.size()), entries)
    }

    /// Semiring product
    ///
    /// The result is `self.rows × other.cols`. The inner dimensions need not
    /// agree: missing cells behave as zero.
    pub fn mul<S>(&self, semiring: &S, other: &Matrix<E>) -> Matrix<E>
    where
        S: Semiring<Element = E>,
    {
        let size = Size::new(self.size().rows, other.size().cols);
        let columns = other.transpose().sparse_rows();

        let entries = self
            .sparse_rows()
            .iter()
            .flat_map(|(row, v)| multiply_row(semiring, *row, v, &columns))
            .collect();

        Matrix::from_canonical(size, entries)
    }

    /// Appends an empty row
    ///
    /// # Panics
    ///
    /// Panics if `zero` is not the zero element.
    pub fn add_row(&self, zero: E) -> Matrix<E> {
        self.try_add_row(zero).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Fallible twin of [`Matrix::add_row`]
    pub fn try_add_row(&self, zero: E) -> Result<Matrix<E>, MatrixError> {
        if !zero.is_zero_element() {
            return Err(MatrixError::NonZeroPadding);
        }
        let size = self.size();
        Ok(Matrix::from_canonical(
            Size::new(size.rows + 1, size.cols),
            self.entries().to_vec(),
        ))
    }

    /// Appends an empty column
    ///
    /// # Panics
    ///
    /// Panics if `zero` is not the zero element.
    pub fn add_column(&self, zero: E) -> Matrix<E> {
        self.try_add_column(zero).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Fallible twin of [`Matrix::add_column`]
    pub fn try_add_column(&self, zero: E) -> Result<Matrix<E>, MatrixError> {
        if !zero.is_zero_element() {
            return Err(MatrixError::NonZeroPadding);
        }
        let size = self.size();
        Ok(Matrix::from_canonical(
            Size::new(size.rows, size.cols + 1),
            self.entries().to_vec(),
        ))
    }
}
