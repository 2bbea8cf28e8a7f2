//! Merge-join primitives over sorted association lists
//!
//! Both inputs must be sorted strictly increasing by key. The results are
//! sorted the same way, and each function runs in `O(n + m)`.

pub mod formats;

use std::cmp::Ordering;

/// Union of two association lists, combining values that share a key.
///
/// `f` receives the left value first.
pub fn union_assoc_with<K, V, F>(mut f: F, xs: &[(K, V)], ys: &[(K, V)]) -> Vec<(K, V)>
where
    K: Ord + Clone,
    V: Clone,
    F: FnMut(&V, &V) -> V,
{
    let mut result = Vec::with_capacity(xs.len() + ys.len());
    let (mut i, mut j) = (0, 0);

    while i < xs.len() && j < ys.len() {
        let (kx, vx) = &xs[i];
        let (ky, vy) = &ys[j];
        match kx.cmp(ky) {
            Ordering::Less => {
                result.push((kx.clone(), vx.clone()));
                i += 1;
            }
            Ordering::Greater => {
                result.push((ky.clone(), vy.clone()));
                j += 1;
            }
            Ordering::Equal => {
                result.push((kx.clone(), f(vx, vy)));
                i += 1;
                j += 1;
            }
        }
    }

    result.extend_from_slice(&xs[i..]);
    result.extend_from_slice(&ys[j..]);
    result
}

/// Intersection of two association lists, combining values that share a key.
///
/// Keys present in only one list are dropped.
pub fn inter_assoc_with<K, A, B, C, F>(mut f: F, xs: &[(K, A)], ys: &[(K, B)]) -> Vec<(K, C)>
where
    K: Ord + Clone,
    F: FnMut(&A, &B) -> C,
{
    let mut result = Vec::with_capacity(xs.len().min(ys.len()));
    let (mut i, mut j) = (0, 0);

    while i < xs.len() && j < ys.len() {
        let (kx, vx) = &xs[i];
        let (ky, vy) = &ys[j];
        match kx.cmp(ky) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result.push((kx.clone(), f(vx, vy)));
                i += 1;
                j += 1;
            }
        }
    }

    result
}
