//! Conversion between dense row lists and sparse matrices

use crate::error::MatrixError;
use crate::matrix::{Matrix, MatrixIndex, Size};
use crate::semiring::HasZero;

impl<E: HasZero> Matrix<E> {
    /// Builds a matrix from dense rows
    ///
    /// # Panics
    ///
    /// Panics unless there are exactly `size.rows` rows, each of length
    /// `size.cols`.
    pub fn from_lists(size: Size, rows: Vec<Vec<E>>) -> Self {
        Self::try_from_lists(size, rows).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Fallible twin of [`Matrix::from_lists`]
    pub fn try_from_lists(size: Size, rows: Vec<Vec<E>>) -> Result<Self, MatrixError> {
        if rows.len() != size.rows {
            return Err(MatrixError::RowCount {
                expected: size.rows,
                got: rows.len(),
            });
        }

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size.cols) {
            return Err(MatrixError::RowLength {
                row: i + 1,
                expected: size.cols,
                got: row.len(),
            });
        }

        let entries = rows
            .into_iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.into_iter()
                    .enumerate()
                    .map(move |(j, e)| (MatrixIndex::new(i + 1, j + 1), e))
            })
            .collect();

        Self::try_from_index_list(size, entries)
    }
}

impl<E: HasZero + Clone> Matrix<E> {
    /// Expands to dense rows, filling absent cells with zero
    ///
    /// Always yields `rows` lists of length `cols`, even for an empty matrix.
    pub fn to_lists(&self) -> Vec<Vec<E>> {
        let size = self.size();
        let mut entries = self.entries().iter().peekable();
        let mut rows = Vec::with_capacity(size.rows);

        for i in 1..=size.rows {
            let mut row = Vec::with_capacity(size.cols);
            for j in 1..=size.cols {
                match entries.peek() {
                    Some((ix, e)) if *ix == MatrixIndex::new(i, j) => {
                        row.push(e.clone());
                        entries.next();
                    }
                    _ => row.push(E::zero_element()),
                }
            }
            rows.push(row);
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lists() {
        //    [1 2 0]
        //    [0 3 0]
        //    [4 0 5]
        let m = Matrix::from_lists(
            Size::new(3, 3),
            vec![vec![1, 2, 0], vec![0, 3, 0], vec![4, 0, 5]],
        );
        assert_eq!(m.nnz(), 5);
        assert_eq!(m.get(3, 1), Some(&4));
        assert!(m.matrix_invariant());
    }

    #[test]
    fn test_to_lists_roundtrip() {
        let rows = vec![vec![0, 0], vec![7, 0], vec![0, 9]];
        let m = Matrix::from_lists(Size::new(3, 2), rows.clone());
        assert_eq!(m.to_lists(), rows);
    }

    #[test]
    fn test_to_lists_empty_rows() {
        let m: Matrix<i32> = Matrix::zeros(Size::new(2, 3));
        assert_eq!(m.to_lists(), vec![vec![0, 0, 0], vec![0, 0, 0]]);

        let no_cols: Matrix<i32> = Matrix::zeros(Size::new(2, 0));
        assert_eq!(no_cols.to_lists(), vec![Vec::<i32>::new(), Vec::new()]);
    }

    #[test]
    fn test_wrong_row_count() {
        let err = Matrix::try_from_lists(Size::new(2, 1), vec![vec![1]]).unwrap_err();
        assert_eq!(err, MatrixError::RowCount { expected: 2, got: 1 });
    }

    #[test]
    #[should_panic(expected = "row 2 has length 1, expected 2")]
    fn test_wrong_row_length() {
        Matrix::from_lists(Size::new(2, 2), vec![vec![1, 2], vec![3]]);
    }
}
