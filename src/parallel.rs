//! # Parallel semiring product
//!
//! Rows of a product are independent, so the non-empty rows of the left
//! matrix are spread over Rayon's thread pool. Each worker produces the
//! canonical entries of its row; concatenating the rows in order keeps the
//! result canonical without a final sort.

use log::debug;
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::matrix::ops::multiply_row;
use crate::matrix::{Matrix, MatrixIndex, Size};
use crate::semiring::{HasZero, Semiring};

/// Semiring product `a × b` with parallel row processing
///
/// Produces exactly the same matrix as [`Matrix::mul`]. Small products,
/// and any product under a single-threaded config, run sequentially.
///
/// # Examples
///
/// ```
/// use termgraph::{mul_parallel, EngineConfig, Matrix, NumSemiring, Size};
///
/// let a = Matrix::from_lists(Size::new(2, 2), vec![vec![1, 0], vec![0, 1]]);
/// let b = Matrix::from_lists(Size::new(2, 2), vec![vec![2, 3], vec![0, 4]]);
///
/// let s = NumSemiring::<i64>::new();
/// let c = mul_parallel(&s, &a, &b, &EngineConfig::default());
/// assert_eq!(c, a.mul(&s, &b));
/// ```
pub fn mul_parallel<S, E>(semiring: &S, a: &Matrix<E>, b: &Matrix<E>, config: &EngineConfig) -> Matrix<E>
where
    S: Semiring<Element = E> + Sync,
    E: HasZero + Clone + Send + Sync,
{
    let rows = a.sparse_rows();

    if !config.use_parallel(rows.len()) {
        debug!(
            "{} non-empty rows below parallel threshold {}, multiplying sequentially",
            rows.len(),
            config.parallel_row_threshold
        );
        return a.mul(semiring, b);
    }

    debug!(
        "multiplying {} × {} by {} × {} across {} non-empty rows",
        a.size().rows,
        a.size().cols,
        b.size().rows,
        b.size().cols,
        rows.len()
    );

    let size = Size::new(a.size().rows, b.size().cols);
    let columns = b.transpose().sparse_rows();

    let row_results: Vec<Vec<(MatrixIndex, E)>> = rows
        .into_par_iter()
        .map(|(row, v)| multiply_row(semiring, row, &v, &columns))
        .collect();

    Matrix::from_canonical(size, row_results.into_iter().flatten().collect())
}
