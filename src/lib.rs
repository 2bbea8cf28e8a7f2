//! # termgraph: semiring matrices and call-graph closure
//!
//! Building blocks for size-change termination checking: a sparse matrix
//! type parameterised by a semiring, and a labelled directed graph whose
//! transitive closure is computed under the same kind of semiring.
//!
//! ## Overview
//!
//! - [`Matrix`] stores only its non-zero cells, sorted by row then column,
//!   with 1-based indices. Every public operation keeps that form.
//! - [`Graph`] maps each node to its labelled successors. Labels combine
//!   with a caller-supplied function when parallel edges meet.
//! - [`transitive_closure`] closes a graph by processing its strongly
//!   connected components leaf-first; [`transitive_closure1`] is the simple
//!   whole-graph fixpoint it is checked against.
//! - [`OrderSemiring`] and [`non_decreasing_loops`] turn a call graph
//!   labelled with size-change orders into the set of functions whose
//!   recursion is not provably decreasing.
//!
//! ## Usage
//!
//! Multiplying two matrices over the natural numbers:
//!
//! ```
//! use termgraph::{Matrix, NumSemiring, Size};
//!
//! let a = Matrix::from_lists(Size::new(2, 2), vec![vec![1, 2], vec![0, 3]]);
//! let b = Matrix::from_lists(Size::new(2, 1), vec![vec![4], vec![5]]);
//!
//! let c = a.mul(&NumSemiring::<i64>::new(), &b);
//! assert_eq!(c.to_lists(), vec![vec![14], vec![15]]);
//! ```
//!
//! Closing a call graph:
//!
//! ```
//! use termgraph::{non_decreasing_loops, transitive_closure, Graph, Order, OrderSemiring};
//!
//! let calls = Graph::from_edges(vec![
//!     ("even", "odd", Order::lt()),
//!     ("odd", "even", Order::le()),
//!     ("loop", "loop", Order::le()),
//! ]);
//! let closed = transitive_closure(&OrderSemiring::default(), &calls);
//! assert_eq!(non_decreasing_loops(&closed).into_iter().collect::<Vec<_>>(), vec!["loop"]);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod order;
pub mod parallel;
pub mod semiring;
pub mod utils;

// Re-export primary components
pub use config::{EngineConfig, SystemParameters};
pub use error::{ClosureError, MatrixError};
pub use graph::{
    complete, complete_until_with, transitive_closure, transitive_closure1, try_complete,
    try_complete_until_with, try_transitive_closure, try_transitive_closure1, Edge, Graph, Scc,
};
pub use matrix::{reference_mul, Matrix, MatrixIndex, Size};
pub use order::{non_decreasing_loops, Order, OrderSemiring};
pub use parallel::mul_parallel;
pub use semiring::{BoolSemiring, HasZero, MinPlus, NumSemiring, Semiring, Tropical};
pub use utils::formats::{from_array2, from_sprs, to_array2, to_sprs};

/// Version information for the termgraph library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
