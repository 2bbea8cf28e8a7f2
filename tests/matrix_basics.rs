//! Basic tests for matrix construction, access and display

use termgraph::{BoolSemiring, Matrix, MatrixError, MatrixIndex, NumSemiring, Size};

fn sample() -> Matrix<i64> {
    // [1 2 0]
    // [0 3 0]
    // [4 0 5]
    Matrix::from_lists(
        Size::new(3, 3),
        vec![vec![1, 2, 0], vec![0, 3, 0], vec![4, 0, 5]],
    )
}

#[test]
fn test_matrix_creation() {
    let matrix = sample();

    assert_eq!(matrix.size(), Size::new(3, 3));
    assert_eq!(matrix.nnz(), 5);
    assert!(matrix.matrix_invariant());

    // Check first row
    let first_row: Vec<_> = matrix.row_iter(1).collect();
    assert_eq!(first_row, vec![(1, &1), (2, &2)]);

    // Check second row
    let second_row: Vec<_> = matrix.row_iter(2).collect();
    assert_eq!(second_row, vec![(2, &3)]);

    // Check third row
    let third_row: Vec<_> = matrix.row_iter(3).collect();
    assert_eq!(third_row, vec![(1, &4), (3, &5)]);
}

#[test]
fn test_get() {
    let matrix = sample();
    assert_eq!(matrix.get(1, 2), Some(&2));
    assert_eq!(matrix.get(2, 1), None);
    assert_eq!(matrix.get(3, 3), Some(&5));
    assert_eq!(matrix.get(4, 1), None);
}

#[test]
fn test_index_list_is_sorted() {
    let ix = MatrixIndex::new;
    let m = Matrix::from_index_list(
        Size::new(2, 2),
        vec![(ix(2, 1), 7), (ix(1, 2), 0), (ix(1, 1), 3)],
    );
    assert_eq!(m.entries(), &[(ix(1, 1), 3), (ix(2, 1), 7)]);
    assert_eq!(m.to_lists(), vec![vec![3, 0], vec![7, 0]]);
}

#[test]
fn test_index_list_errors() {
    let ix = MatrixIndex::new;
    assert_eq!(
        Matrix::try_from_index_list(Size::new(2, 2), vec![(ix(3, 1), 1)]),
        Err(MatrixError::IndexOutOfBounds {
            index: ix(3, 1),
            size: Size::new(2, 2),
        })
    );
    assert_eq!(
        Matrix::try_from_index_list(Size::new(2, 2), vec![(ix(1, 1), 1), (ix(1, 1), 2)]),
        Err(MatrixError::DuplicateIndex(ix(1, 1)))
    );
    assert_eq!(
        Matrix::<i64>::try_from_index_list(Size::new(2, 2), vec![(ix(0, 1), 1)]),
        Err(MatrixError::IndexOutOfBounds {
            index: ix(0, 1),
            size: Size::new(2, 2),
        })
    );
}

#[test]
fn test_dense_shape_errors() {
    assert_eq!(
        Matrix::try_from_lists(Size::new(2, 1), vec![vec![1i64]]),
        Err(MatrixError::RowCount {
            expected: 2,
            got: 1
        })
    );
    assert_eq!(
        Matrix::try_from_lists(Size::new(1, 2), vec![vec![1i64, 2, 3]]),
        Err(MatrixError::RowLength {
            row: 1,
            expected: 2,
            got: 3
        })
    );
}

#[test]
#[should_panic(expected = "duplicate index (1, 1)")]
fn test_duplicate_index_panics() {
    let ix = MatrixIndex::new;
    Matrix::from_index_list(Size::new(1, 1), vec![(ix(1, 1), 1), (ix(1, 1), 2)]);
}

#[test]
fn test_identity() {
    let id = Matrix::identity(&NumSemiring::<i64>::new(), 3);
    assert_eq!(id.nnz(), 3);
    assert_eq!(id.diagonal(), vec![1, 1, 1]);

    let m = sample();
    assert_eq!(m.mul(&NumSemiring::<i64>::new(), &id), m);
    assert_eq!(id.mul(&NumSemiring::<i64>::new(), &m), m);

    let bool_id = Matrix::identity(&BoolSemiring, 2);
    assert_eq!(bool_id.to_lists(), vec![vec![true, false], vec![false, true]]);
}

#[test]
fn test_singleton() {
    let one = Matrix::from_lists(Size::new(1, 1), vec![vec![9i64]]);
    assert_eq!(one.is_singleton(), Some(9));

    let empty: Matrix<i64> = Matrix::zeros(Size::new(1, 1));
    assert_eq!(empty.is_singleton(), Some(0));

    assert_eq!(sample().is_singleton(), None);
}

#[test]
fn test_diagonal_of_rectangular() {
    let m = Matrix::from_lists(Size::new(2, 3), vec![vec![1i64, 2, 3], vec![4, 0, 6]]);
    assert_eq!(m.diagonal(), vec![1, 0]);

    let tall = m.transpose();
    assert_eq!(tall.size(), Size::new(3, 2));
    assert_eq!(tall.diagonal(), vec![1, 0]);
}

#[test]
fn test_display() {
    let m = Matrix::from_lists(Size::new(2, 2), vec![vec![0i64, 3], vec![4, 0]]);
    assert_eq!(m.to_string(), "[0 3]\n[4 0]");
}

#[test]
fn test_debug_summarises() {
    let debug = format!("{:?}", sample());
    assert!(debug.contains("3 × 3"));
    assert!(debug.contains("nnz: 5"));
}

#[test]
fn test_zero_sized() {
    let m: Matrix<i64> = Matrix::zeros(Size::new(0, 4));
    assert!(m.is_empty());
    assert!(m.matrix_invariant());
    assert_eq!(m.to_lists(), Vec::<Vec<i64>>::new());
    assert!(m.diagonal().is_empty());
    assert_eq!(m.transpose().size(), Size::new(4, 0));
}
