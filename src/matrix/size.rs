//! Matrix dimensions and cell indices

use std::fmt;

/// Dimensions of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Number of rows
    pub rows: usize,

    /// Number of columns
    pub cols: usize,
}

impl Size {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Componentwise maximum, the size of a sum
    pub fn sup_size(self, other: Size) -> Size {
        Size::new(self.rows.max(other.rows), self.cols.max(other.cols))
    }

    /// Componentwise minimum, the size of an intersection
    pub fn inf_size(self, other: Size) -> Size {
        Size::new(self.rows.min(other.rows), self.cols.min(other.cols))
    }

    pub fn is_square(self) -> bool {
        self.rows == self.cols
    }

    /// True when the matrix has no cells at all
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `index` names a cell of a matrix of this size
    pub fn contains(self, index: MatrixIndex) -> bool {
        (1..=self.rows).contains(&index.row) && (1..=self.cols).contains(&index.col)
    }

    /// Size with rows and columns swapped
    pub fn transpose(self) -> Size {
        Size::new(self.cols, self.rows)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.rows, self.cols)
    }
}

/// A cell position. Rows and columns are numbered from 1.
///
/// The derived ordering is lexicographic by row, then column, which is the
/// order matrix entries are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatrixIndex {
    pub row: usize,
    pub col: usize,
}

impl MatrixIndex {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn transpose(self) -> MatrixIndex {
        MatrixIndex::new(self.col, self.row)
    }
}

impl fmt::Display for MatrixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
