//! Semirings over edge labels and matrix entries
//!
//! A semiring (⊕, ⊗) provides:
//! - ⊕ (`combine`): associative, commutative, identity `zero`
//! - ⊗ (`sequence`): associative, identity `one`
//!
//! The engines never check these laws. They only use `zero` to keep matrices
//! in canonical sparse form, and they rely on `combine` being idempotent when
//! computing closures of cyclic graphs.
//!
//! | Semiring       | ⊕ (combine)     | ⊗ (sequence)   | zero      | one        |
//! |----------------|-----------------|----------------|-----------|------------|
//! | `BoolSemiring` | OR              | AND            | `false`   | `true`     |
//! | `NumSemiring`  | +               | ×              | `0`       | `1`        |
//! | `MinPlus`      | min             | saturating +   | `Infinite`| `Finite(0)`|
//! | `OrderSemiring`| best decrease   | add decreases  | `Unknown` | `Decr(0)`  |

use std::fmt;
use std::marker::PhantomData;

use num_traits::Num;

/// Element types with a distinguished zero.
///
/// This zero is the value a sparse matrix never stores. Every [`Semiring`]
/// over the type must use the same value as its additive identity.
pub trait HasZero: PartialEq + Sized {
    fn zero_element() -> Self;

    fn is_zero_element(&self) -> bool {
        *self == Self::zero_element()
    }
}

impl HasZero for bool {
    fn zero_element() -> Self {
        false
    }
}

macro_rules! impl_has_zero_num {
    ($($t:ty),*) => {
        $(
            impl HasZero for $t {
                fn zero_element() -> Self {
                    0 as $t
                }
            }
        )*
    };
}

impl_has_zero_num!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// A semiring defines the algebraic operations for matrix products and
/// graph closures.
pub trait Semiring {
    /// The element type
    type Element: HasZero + Clone;

    /// Additive identity (0)
    fn zero(&self) -> Self::Element {
        Self::Element::zero_element()
    }

    /// Multiplicative identity (1)
    fn one(&self) -> Self::Element;

    /// Addition (⊕): aggregates alternative paths
    fn combine(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Multiplication (⊗): follows one step after another
    fn sequence(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn is_zero(&self, a: &Self::Element) -> bool {
        a.is_zero_element()
    }
}

/// Boolean reachability: OR combines, AND sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolSemiring;

impl Semiring for BoolSemiring {
    type Element = bool;

    fn one(&self) -> bool {
        true
    }

    fn combine(&self, a: &bool, b: &bool) -> bool {
        *a || *b
    }

    fn sequence(&self, a: &bool, b: &bool) -> bool {
        *a && *b
    }
}

/// Ordinary arithmetic over any `num_traits::Num` type.
///
/// `combine` is not idempotent, so this semiring is only meant for matrix
/// products, not for closures of cyclic graphs.
pub struct NumSemiring<T> {
    _marker: PhantomData<T>,
}

impl<T> NumSemiring<T> {
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for NumSemiring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NumSemiring<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for NumSemiring<T> {}

impl<T> fmt::Debug for NumSemiring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumSemiring<{}>", std::any::type_name::<T>())
    }
}

impl<T> Semiring for NumSemiring<T>
where
    T: Num + HasZero + Clone,
{
    type Element = T;

    fn zero(&self) -> T {
        T::zero()
    }

    fn one(&self) -> T {
        T::one()
    }

    fn combine(&self, a: &T, b: &T) -> T {
        a.clone() + b.clone()
    }

    fn sequence(&self, a: &T, b: &T) -> T {
        a.clone() * b.clone()
    }
}

/// Path weight in the tropical (min, +) semiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tropical {
    Finite(u64),
    Infinite,
}

impl Tropical {
    pub fn finite(self) -> Option<u64> {
        match self {
            Tropical::Finite(w) => Some(w),
            Tropical::Infinite => None,
        }
    }
}

impl HasZero for Tropical {
    fn zero_element() -> Self {
        Tropical::Infinite
    }
}

impl PartialOrd for Tropical {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tropical {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (Tropical::Finite(a), Tropical::Finite(b)) => a.cmp(b),
            (Tropical::Finite(_), Tropical::Infinite) => Ordering::Less,
            (Tropical::Infinite, Tropical::Finite(_)) => Ordering::Greater,
            (Tropical::Infinite, Tropical::Infinite) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Tropical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tropical::Finite(w) => write!(f, "{}", w),
            Tropical::Infinite => write!(f, "∞"),
        }
    }
}

/// Shortest paths: min combines, saturating addition sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinPlus;

impl Semiring for MinPlus {
    type Element = Tropical;

    fn one(&self) -> Tropical {
        Tropical::Finite(0)
    }

    fn combine(&self, a: &Tropical, b: &Tropical) -> Tropical {
        *a.min(b)
    }

    fn sequence(&self, a: &Tropical, b: &Tropical) -> Tropical {
        match (a, b) {
            (Tropical::Finite(x), Tropical::Finite(y)) => Tropical::Finite(x.saturating_add(*y)),
            _ => Tropical::Infinite,
        }
    }
}
