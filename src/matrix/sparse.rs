//! Association-list sparse matrix
//!
//! A [`Matrix`] stores only its non-zero entries, as `(MatrixIndex, value)`
//! pairs sorted by index. Every constructor and every operation returns a
//! matrix in this canonical form:
//!
//! 1. entries sorted strictly increasing by `(row, col)`, no duplicates
//! 2. every index inside `[1, rows] × [1, cols]`
//! 3. no entry holds the zero element
//!
//! Because the form is canonical, two matrices are equal exactly when they
//! denote the same partial function, so `==` is structural equality.

use std::fmt;

use crate::error::MatrixError;
use crate::matrix::{MatrixIndex, Size};
use crate::semiring::{HasZero, Semiring};

/// A sparse matrix in canonical association-list form
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<E> {
    size: Size,
    entries: Vec<(MatrixIndex, E)>,
}

impl<E> Matrix<E> {
    /// Wraps entries that are already canonical.
    pub(crate) fn from_canonical(size: Size, entries: Vec<(MatrixIndex, E)>) -> Self {
        Self { size, entries }
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(size: Size) -> Self {
        Self {
            size,
            entries: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The stored (non-zero) entries in index order
    pub fn entries(&self) -> &[(MatrixIndex, E)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(MatrixIndex, E)> {
        self.entries
    }

    /// Returns the number of stored entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.size.is_square()
    }

    /// Looks up a stored entry
    pub fn get(&self, row: usize, col: usize) -> Option<&E> {
        self.entries
            .binary_search_by_key(&MatrixIndex::new(row, col), |(ix, _)| *ix)
            .ok()
            .map(|pos| &self.entries[pos].1)
    }

    /// Iterates the entries of one row as `(col, value)` pairs
    pub fn row_iter(&self, row: usize) -> impl Iterator<Item = (usize, &E)> {
        let start = self.entries.partition_point(|(ix, _)| ix.row < row);
        let end = self.entries.partition_point(|(ix, _)| ix.row <= row);
        self.entries[start..end].iter().map(|(ix, e)| (ix.col, e))
    }
}

impl<E: HasZero> Matrix<E> {
    /// Checks the canonical-form invariants
    pub fn matrix_invariant(&self) -> bool {
        let sorted = self.entries.windows(2).all(|w| w[0].0 < w[1].0);
        let in_bounds = self.entries.iter().all(|(ix, _)| self.size.contains(*ix));
        let non_zero = self.entries.iter().all(|(_, e)| !e.is_zero_element());
        sorted && in_bounds && non_zero
    }

    /// Builds a matrix from explicit entries, sorting them and dropping zeros
    ///
    /// # Panics
    ///
    /// Panics if an index lies outside `size` or occurs twice.
    pub fn from_index_list(size: Size, entries: Vec<(MatrixIndex, E)>) -> Self {
        Self::try_from_index_list(size, entries).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Fallible twin of [`Matrix::from_index_list`]
    pub fn try_from_index_list(
        size: Size,
        mut entries: Vec<(MatrixIndex, E)>,
    ) -> Result<Self, MatrixError> {
        if let Some((index, _)) = entries.iter().find(|(ix, _)| !size.contains(*ix)) {
            return Err(MatrixError::IndexOutOfBounds { index: *index, size });
        }

        entries.sort_by_key(|(ix, _)| *ix);

        if let Some(w) = entries.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(MatrixError::DuplicateIndex(w[0].0));
        }

        entries.retain(|(_, e)| !e.is_zero_element());
        Ok(Self { size, entries })
    }

    /// Applies `f` to every stored entry, dropping results that are zero
    pub fn map_values<F, T>(&self, mut f: F) -> Matrix<T>
    where
        F: FnMut(&E) -> T,
        T: HasZero,
    {
        let entries = self
            .entries
            .iter()
            .map(|(ix, e)| (*ix, f(e)))
            .filter(|(_, e)| !e.is_zero_element())
            .collect();
        Matrix::from_canonical(self.size, entries)
    }
}

impl<E: HasZero + Clone> Matrix<E> {
    /// An `n × n` matrix with the semiring's `one` on the diagonal
    pub fn identity<S>(semiring: &S, n: usize) -> Self
    where
        S: Semiring<Element = E>,
    {
        let one = semiring.one();
        let entries = (1..=n)
            .map(|i| (MatrixIndex::new(i, i), one.clone()))
            .collect();
        Self::from_index_list(Size::new(n, n), entries)
    }

    /// Returns the value of a 1 × 1 matrix
    ///
    /// A 1 × 1 matrix without a stored entry yields the zero element; every
    /// other size yields `None`.
    pub fn is_singleton(&self) -> Option<E> {
        if self.size != Size::new(1, 1) {
            return None;
        }
        Some(
            self.entries
                .first()
                .map(|(_, e)| e.clone())
                .unwrap_or_else(E::zero_element),
        )
    }

    /// Entries on the main diagonal, zero-padded to `min(rows, cols)`
    pub fn diagonal(&self) -> Vec<E> {
        let n = self.size.rows.min(self.size.cols);
        let mut diag: Vec<E> = (0..n).map(|_| E::zero_element()).collect();
        for (ix, e) in &self.entries {
            if ix.row == ix.col {
                diag[ix.row - 1] = e.clone();
            }
        }
        diag
    }

    /// Swaps rows and columns
    ///
    /// This re-sorts the entries, so it costs `O(n log n)` in the number of
    /// stored entries.
    pub fn transpose(&self) -> Matrix<E> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(ix, e)| (ix.transpose(), e.clone()))
            .collect();
        entries.sort_by_key(|(ix, _)| *ix);
        Matrix::from_canonical(self.size.transpose(), entries)
    }

    /// Groups the entries by row, skipping empty rows
    ///
    /// Each item is `(row, [(col, value)])` in increasing order.
    pub fn sparse_rows(&self) -> Vec<(usize, Vec<(usize, E)>)> {
        let mut rows: Vec<(usize, Vec<(usize, E)>)> = Vec::new();
        for (ix, e) in &self.entries {
            match rows.last_mut() {
                Some((row, cells)) if *row == ix.row => cells.push((ix.col, e.clone())),
                _ => rows.push((ix.row, vec![(ix.col, e.clone())])),
            }
        }
        rows
    }
}

impl<E: fmt::Debug> fmt::Debug for Matrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {{")?;
        writeln!(f, "  dimensions: {}", self.size)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_entries_to_print = 8.min(self.entries.len());

        if max_entries_to_print > 0 {
            writeln!(f, "  entries:")?;

            for (ix, e) in &self.entries[..max_entries_to_print] {
                writeln!(f, "    {} => {:?}", ix, e)?;
            }

            if self.entries.len() > max_entries_to_print {
                writeln!(f, "    ... ({} more)", self.entries.len() - max_entries_to_print)?;
            }
        }

        write!(f, "}}")
    }
}

/// Dense rendering, one row per line
impl<E> fmt::Display for Matrix<E>
where
    E: fmt::Display + HasZero + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_lists().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|e| e.to_string()).collect();
            write!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}
