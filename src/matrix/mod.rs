// Sparse matrix data structures and operations

pub mod conversion;
pub mod ops;
pub mod reference;
pub mod size;
pub mod sparse;

pub use reference::reference_mul;
pub use size::{MatrixIndex, Size};
pub use sparse::Matrix;
