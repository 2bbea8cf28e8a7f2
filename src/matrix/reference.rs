//! Reference semiring multiplication using a row accumulator
//!
//! This provides a baseline for correctness testing of [`Matrix::mul`].
//! It walks each row of A, scatters the products of row k of B into an
//! ordered accumulator and never looks at columns, so it shares no code
//! path with the column-pairing kernel.

use std::collections::BTreeMap;

use crate::matrix::{Matrix, MatrixIndex, Size};
use crate::semiring::{HasZero, Semiring};

/// Multiplies `a` by `b` row by row with an ordered accumulator
pub fn reference_mul<S, E>(semiring: &S, a: &Matrix<E>, b: &Matrix<E>) -> Matrix<E>
where
    S: Semiring<Element = E>,
    E: HasZero + Clone,
{
    let n_rows = a.size().rows;
    let n_cols = b.size().cols;
    let mut entries = Vec::new();

    // Process each row of A
    for i in 1..=n_rows {
        let mut accum: BTreeMap<usize, E> = BTreeMap::new();

        // For each entry (i, k) of A, every entry (k, j) of B contributes
        for (k, a_val) in a.row_iter(i) {
            for (j, b_val) in b.row_iter(k) {
                let product = semiring.sequence(a_val, b_val);
                let slot = accum.entry(j).or_insert_with(|| semiring.zero());
                *slot = semiring.combine(slot, &product);
            }
        }

        entries.extend(
            accum
                .into_iter()
                .filter(|(_, val)| !semiring.is_zero(val))
                .map(|(j, val)| (MatrixIndex::new(i, j), val)),
        );
    }

    Matrix::from_index_list(Size::new(n_rows, n_cols), entries)
}
