//! Transitive closure under a semiring
//!
//! The closure of a graph has an edge `s → t` for every non-empty path from
//! `s` to `t`, labelled with the `combine` of the `sequence` of the labels
//! along every such path.
//!
//! Two algorithms compute it:
//!
//! - [`transitive_closure`] decomposes the graph into strongly connected
//!   components and closes them leaf-first. Only cyclic components need a
//!   fixpoint iteration, and that iteration is confined to the component.
//! - [`transitive_closure1`] iterates `g ∪ g;g` over the whole graph until
//!   nothing changes. It is slower and serves as the reference the SCC
//!   version is checked against.
//!
//! Both require `combine` to be an idempotent commutative monoid and
//! `sequence` to distribute over it; otherwise cyclic graphs need not reach
//! a fixpoint. The iteration cap in [`EngineConfig`] turns that case into a
//! [`ClosureError`] instead of a hang.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::error::ClosureError;
use crate::graph::scc::Scc;
use crate::graph::{compose_adjacency, insert_with, union_adjacency, Adjacency, Graph};
use crate::semiring::Semiring;

/// Iterates `g ∪ g;g` until `done(old, new)` holds
///
/// # Panics
///
/// Panics if the default iteration cap is reached.
pub fn complete_until_with<N, E, D, Q, C>(
    graph: &Graph<N, E>,
    done: D,
    sequence: Q,
    combine: C,
) -> Graph<N, E>
where
    N: Ord + Clone,
    E: Clone,
    D: FnMut(&Graph<N, E>, &Graph<N, E>) -> bool,
    Q: FnMut(&E, &E) -> E,
    C: FnMut(&E, &E) -> E,
{
    try_complete_until_with(graph, done, sequence, combine, &EngineConfig::default())
        .unwrap_or_else(|err| panic!("{}", err))
}

/// Fallible twin of [`complete_until_with`]
pub fn try_complete_until_with<N, E, D, Q, C>(
    graph: &Graph<N, E>,
    mut done: D,
    mut sequence: Q,
    mut combine: C,
    config: &EngineConfig,
) -> Result<Graph<N, E>, ClosureError>
where
    N: Ord + Clone,
    E: Clone,
    D: FnMut(&Graph<N, E>, &Graph<N, E>) -> bool,
    Q: FnMut(&E, &E) -> E,
    C: FnMut(&E, &E) -> E,
{
    let mut current = graph.clone();
    let mut iterations = 0;

    loop {
        if config.exceeds_cap(iterations) {
            warn!("whole-graph closure gave up after {} iterations", iterations);
            return Err(ClosureError::NotConverged { iterations });
        }
        iterations += 1;

        let grown = grow(current.adjacency(), &mut sequence, &mut combine);
        let next = Graph::from_adjacency(grown);

        if done(&current, &next) {
            trace!("whole-graph closure stable after {} iterations", iterations);
            return Ok(next);
        }
        current = next;
    }
}

/// One round of path doubling: `g ∪ g;g`
fn grow<N, E, Q, C>(adjacency: &Adjacency<N, E>, sequence: &mut Q, combine: &mut C) -> Adjacency<N, E>
where
    N: Ord + Clone,
    E: Clone,
    Q: FnMut(&E, &E) -> E,
    C: FnMut(&E, &E) -> E,
{
    let doubled = compose_adjacency(adjacency, adjacency, &mut *sequence, &mut *combine);
    union_adjacency(adjacency, &doubled, &mut *combine)
}

/// Whole-graph fixpoint closure, stopping at structural equality
///
/// # Panics
///
/// Panics if the default iteration cap is reached.
pub fn transitive_closure1<S, N>(semiring: &S, graph: &Graph<N, S::Element>) -> Graph<N, S::Element>
where
    S: Semiring,
    N: Ord + Clone,
{
    try_transitive_closure1(semiring, graph, &EngineConfig::default())
        .unwrap_or_else(|err| panic!("{}", err))
}

/// Fallible twin of [`transitive_closure1`]
pub fn try_transitive_closure1<S, N>(
    semiring: &S,
    graph: &Graph<N, S::Element>,
    config: &EngineConfig,
) -> Result<Graph<N, S::Element>, ClosureError>
where
    S: Semiring,
    N: Ord + Clone,
{
    try_complete_until_with(
        graph,
        |old, new| old == new,
        |a, b| semiring.sequence(a, b),
        |a, b| semiring.combine(a, b),
        config,
    )
}

/// Closure by growing until two rounds agree modulo [`Graph::clean`]
///
/// The result is cleaned, so it equals `transitive_closure1(g).clean()`.
///
/// # Panics
///
/// Panics if the default iteration cap is reached.
pub fn complete<S, N>(semiring: &S, graph: &Graph<N, S::Element>) -> Graph<N, S::Element>
where
    S: Semiring,
    N: Ord + Clone,
{
    try_complete(semiring, graph, &EngineConfig::default()).unwrap_or_else(|err| panic!("{}", err))
}

/// Fallible twin of [`complete`]
pub fn try_complete<S, N>(
    semiring: &S,
    graph: &Graph<N, S::Element>,
    config: &EngineConfig,
) -> Result<Graph<N, S::Element>, ClosureError>
where
    S: Semiring,
    N: Ord + Clone,
{
    let closed = try_complete_until_with(
        &graph.clone().clean(),
        |old, new| old.clone().clean() == new.clone().clean(),
        |a, b| semiring.sequence(a, b),
        |a, b| semiring.combine(a, b),
        config,
    )?;
    Ok(closed.clean())
}

/// SCC-based closure
///
/// # Panics
///
/// Panics if the default iteration cap is reached inside a component.
pub fn transitive_closure<S, N>(semiring: &S, graph: &Graph<N, S::Element>) -> Graph<N, S::Element>
where
    S: Semiring,
    N: Ord + Clone,
{
    try_transitive_closure(semiring, graph, &EngineConfig::default())
        .unwrap_or_else(|err| panic!("{}", err))
}

/// Fallible twin of [`transitive_closure`]
pub fn try_transitive_closure<S, N>(
    semiring: &S,
    graph: &Graph<N, S::Element>,
    config: &EngineConfig,
) -> Result<Graph<N, S::Element>, ClosureError>
where
    S: Semiring,
    N: Ord + Clone,
{
    let sccs = graph.sccs();
    debug!(
        "closing graph: {} nodes, {} edges, {} components ({} cyclic)",
        graph.nodes().len(),
        graph.edge_count(),
        sccs.len(),
        sccs.iter().filter(|scc| scc.is_cyclic()).count()
    );

    let original = graph.adjacency();
    let mut closed = original.clone();

    // Leaf components come first, so every edge leaving the current
    // component points at nodes whose images in `closed` are final.
    for scc in &sccs {
        match scc {
            Scc::Acyclic(v) => {
                let out = exits(semiring, original, &closed, v, None);
                if !out.is_empty() {
                    closed.insert(v.clone(), out);
                }
            }
            Scc::Cyclic(members) => {
                close_component(semiring, original, &mut closed, members, config)?;
            }
        }
    }

    Ok(Graph::from_adjacency(closed))
}

/// Closed image of the edges leaving `v`, skipping targets in `inside`
///
/// Each edge `v → x` contributes itself plus `v → x → t` for every edge
/// `x → t` of the already-closed image of `x`.
fn exits<S, N>(
    semiring: &S,
    original: &Adjacency<N, S::Element>,
    closed: &Adjacency<N, S::Element>,
    v: &N,
    inside: Option<&BTreeSet<N>>,
) -> BTreeMap<N, S::Element>
where
    S: Semiring,
    N: Ord + Clone,
{
    let mut combine = |new: &S::Element, old: &S::Element| semiring.combine(old, new);
    let mut out = BTreeMap::new();

    let image = match original.get(v) {
        Some(image) => image,
        None => return out,
    };

    for (x, e) in image {
        if inside.map_or(false, |set| set.contains(x)) {
            continue;
        }
        insert_with(&mut out, x.clone(), e.clone(), &mut combine);
        if let Some(beyond) = closed.get(x) {
            for (t, e2) in beyond {
                insert_with(&mut out, t.clone(), semiring.sequence(e, e2), &mut combine);
            }
        }
    }

    out
}

/// Closes one cyclic component in place
///
/// First the edges inside the component are closed by path doubling. Then
/// each member `v` gets its internal closure, its own exits, and the exits
/// of every member `w` it reaches internally, sequenced after `v → w`.
fn close_component<S, N>(
    semiring: &S,
    original: &Adjacency<N, S::Element>,
    closed: &mut Adjacency<N, S::Element>,
    members: &[N],
    config: &EngineConfig,
) -> Result<(), ClosureError>
where
    S: Semiring,
    N: Ord + Clone,
{
    let inside: BTreeSet<N> = members.iter().cloned().collect();

    let mut internal: Adjacency<N, S::Element> = members
        .iter()
        .filter_map(|v| {
            let image: BTreeMap<N, S::Element> = original
                .get(v)?
                .iter()
                .filter(|(t, _)| inside.contains(*t))
                .map(|(t, e)| (t.clone(), e.clone()))
                .collect();
            Some((v.clone(), image))
        })
        .collect();

    let mut sequence = |a: &S::Element, b: &S::Element| semiring.sequence(a, b);
    let mut combine = |a: &S::Element, b: &S::Element| semiring.combine(a, b);

    let mut iterations = 0;
    loop {
        if config.exceeds_cap(iterations) {
            warn!(
                "closure of a {}-node component gave up after {} iterations",
                members.len(),
                iterations
            );
            return Err(ClosureError::NotConverged { iterations });
        }
        iterations += 1;

        let next = grow(&internal, &mut sequence, &mut combine);
        if next == internal {
            break;
        }
        internal = next;
    }
    trace!(
        "{}-node component stable after {} iterations",
        members.len(),
        iterations
    );

    let exits_of: BTreeMap<&N, BTreeMap<N, S::Element>> = members
        .iter()
        .map(|w| (w, exits(semiring, original, closed, w, Some(&inside))))
        .collect();

    let mut combine_new = |new: &S::Element, old: &S::Element| semiring.combine(old, new);

    for v in members {
        let mut out = internal.get(v).cloned().unwrap_or_default();

        for (t, e) in &exits_of[v] {
            insert_with(&mut out, t.clone(), e.clone(), &mut combine_new);
        }

        if let Some(reached) = internal.get(v) {
            for (w, e) in reached {
                for (t, e2) in &exits_of[w] {
                    insert_with(&mut out, t.clone(), semiring.sequence(e, e2), &mut combine_new);
                }
            }
        }

        if !out.is_empty() {
            closed.insert(v.clone(), out);
        }
    }

    Ok(())
}
