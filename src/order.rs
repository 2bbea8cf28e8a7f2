//! Size-change orders
//!
//! An [`Order`] labels a call site with how one argument relates to the
//! caller's parameter: `Decr(k)` means the argument is at least `k`
//! constructors smaller (`k < 0` means it may have grown by `-k`), and
//! `Unknown` means no relation is known.
//!
//! Orders are clamped to a finite window `[-cutoff, cutoff + 1]`, so every
//! closure over [`OrderSemiring`] reaches a fixpoint.

use std::collections::BTreeSet;
use std::fmt;

use crate::graph::Graph;
use crate::semiring::{HasZero, Semiring};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    Decr(i32),
    Unknown,
}

impl Order {
    /// Smart constructor honouring the cutoff window.
    ///
    /// Anything that grows by more than `cutoff` is `Unknown`; anything
    /// shrinking by more than `cutoff + 1` is recorded as `cutoff + 1`.
    pub fn decr(cutoff: i32, k: i32) -> Order {
        if k < -cutoff {
            Order::Unknown
        } else {
            Order::Decr(k.min(cutoff + 1))
        }
    }

    /// Strictly smaller.
    pub fn lt() -> Order {
        Order::Decr(1)
    }

    /// Smaller or equal.
    pub fn le() -> Order {
        Order::Decr(0)
    }

    pub fn is_decreasing(&self) -> bool {
        matches!(self, Order::Decr(k) if *k > 0)
    }
}

impl HasZero for Order {
    fn zero_element() -> Self {
        Order::Unknown
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Decr(0) => write!(f, "="),
            Order::Decr(1) => write!(f, "<"),
            Order::Decr(k) if *k < 0 => write!(f, "+{}", -k),
            Order::Decr(k) => write!(f, "-{}", k),
            Order::Unknown => write!(f, "?"),
        }
    }
}

/// The size-change semiring with a fixed cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSemiring {
    pub cutoff: i32,
}

impl OrderSemiring {
    pub fn new(cutoff: i32) -> Self {
        assert!(cutoff >= 0, "cutoff must be non-negative (got {})", cutoff);
        Self { cutoff }
    }
}

impl Default for OrderSemiring {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Semiring for OrderSemiring {
    type Element = Order;

    fn one(&self) -> Order {
        Order::le()
    }

    fn combine(&self, a: &Order, b: &Order) -> Order {
        match (a, b) {
            (Order::Unknown, o) | (o, Order::Unknown) => *o,
            (Order::Decr(k), Order::Decr(l)) => Order::decr(self.cutoff, (*k).max(*l)),
        }
    }

    fn sequence(&self, a: &Order, b: &Order) -> Order {
        match (a, b) {
            (Order::Decr(k), Order::Decr(l)) => Order::decr(self.cutoff, k.saturating_add(*l)),
            _ => Order::Unknown,
        }
    }
}

/// Nodes of a closed call graph whose self-loop does not decrease.
///
/// Each such node can call itself, possibly through other definitions,
/// without any argument getting smaller.
pub fn non_decreasing_loops<N>(closed: &Graph<N, Order>) -> BTreeSet<N>
where
    N: Ord + Clone,
{
    closed
        .diagonal()
        .into_iter()
        .filter(|edge| !edge.label.is_decreasing())
        .map(|edge| edge.source)
        .collect()
}
