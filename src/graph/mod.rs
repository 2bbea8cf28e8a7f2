//! Directed graphs with labelled edges
//!
//! A [`Graph`] maps each source node to a map from target node to label, so
//! there is at most one edge per ordered pair of nodes. Inserting a second
//! edge between the same pair combines the labels instead.
//!
//! A source node may be present with an empty image. That records a node
//! that is known but has no outgoing edges, e.g. a definition that makes no
//! recursive calls. [`Graph::clean`] drops such entries.
//!
//! Operations that edit a single graph consume it and return the edited
//! graph; binary operations borrow both operands.

pub mod closure;
pub mod scc;

use std::collections::{BTreeMap, BTreeSet, VecDeque};

pub use closure::{
    complete, complete_until_with, transitive_closure, transitive_closure1, try_complete,
    try_complete_until_with, try_transitive_closure, try_transitive_closure1,
};
pub use scc::Scc;

/// Raw adjacency representation shared with the closure algorithms
pub(crate) type Adjacency<N, E> = BTreeMap<N, BTreeMap<N, E>>;

/// A labelled edge
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N, E> {
    pub source: N,
    pub target: N,
    pub label: E,
}

impl<N, E> Edge<N, E> {
    pub fn new(source: N, target: N, label: E) -> Self {
        Self {
            source,
            target,
            label,
        }
    }
}

impl<N, E> From<(N, N, E)> for Edge<N, E> {
    fn from((source, target, label): (N, N, E)) -> Self {
        Edge::new(source, target, label)
    }
}

/// A directed graph with at most one labelled edge per ordered node pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N, E> {
    graph: Adjacency<N, E>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self {
            graph: BTreeMap::new(),
        }
    }
}

/// Inserts `label` at `target`, combining with an existing label as
/// `combine(new, old)`
pub(crate) fn insert_with<N, E, F>(image: &mut BTreeMap<N, E>, target: N, label: E, combine: &mut F)
where
    N: Ord,
    F: FnMut(&E, &E) -> E,
{
    match image.get_mut(&target) {
        Some(old) => *old = combine(&label, old),
        None => {
            image.insert(target, label);
        }
    }
}

/// Union of two adjacency maps; `combine` receives the left label first
pub(crate) fn union_adjacency<N, E, F>(
    left: &Adjacency<N, E>,
    right: &Adjacency<N, E>,
    mut combine: F,
) -> Adjacency<N, E>
where
    N: Ord + Clone,
    E: Clone,
    F: FnMut(&E, &E) -> E,
{
    let mut result = left.clone();
    for (s, image) in right {
        let merged = result.entry(s.clone()).or_default();
        for (t, e) in image {
            match merged.get_mut(t) {
                Some(old) => *old = combine(old, e),
                None => {
                    merged.insert(t.clone(), e.clone());
                }
            }
        }
    }
    result
}

/// Relational composition: an edge `s → t` for every `s → u` in `left` and
/// `u → t` in `right`, labelled `sequence(e1, e2)`
///
/// Parallel contributions are folded with `combine(new, old)`. Sources
/// without any composite edge are not included.
pub(crate) fn compose_adjacency<N, E, Q, C>(
    left: &Adjacency<N, E>,
    right: &Adjacency<N, E>,
    mut sequence: Q,
    mut combine: C,
) -> Adjacency<N, E>
where
    N: Ord + Clone,
    E: Clone,
    Q: FnMut(&E, &E) -> E,
    C: FnMut(&E, &E) -> E,
{
    let mut result = BTreeMap::new();
    for (s, image) in left {
        let mut out = BTreeMap::new();
        for (u, e1) in image {
            if let Some(next) = right.get(u) {
                for (t, e2) in next {
                    insert_with(&mut out, t.clone(), sequence(e1, e2), &mut combine);
                }
            }
        }
        if !out.is_empty() {
            result.insert(s.clone(), out);
        }
    }
    result
}

impl<N, E> Graph<N, E>
where
    N: Ord + Clone,
    E: Clone,
{
    /// The empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_adjacency(graph: Adjacency<N, E>) -> Self {
        Self { graph }
    }

    pub(crate) fn adjacency(&self) -> &Adjacency<N, E> {
        &self.graph
    }

    /// A graph with a single edge
    pub fn singleton(source: N, target: N, label: E) -> Self {
        Self::new().insert_edge(source, target, label)
    }

    /// Builds a graph from edges; a later edge between the same pair wins
    pub fn from_edges<I, T>(edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Edge<N, E>>,
    {
        Self::from_edges_with(edges, |new, _| new.clone())
    }

    /// Builds a graph from edges, combining duplicates as `combine(new, old)`
    pub fn from_edges_with<I, T, F>(edges: I, mut combine: F) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Edge<N, E>>,
        F: FnMut(&E, &E) -> E,
    {
        let mut graph = Adjacency::new();
        for edge in edges {
            let Edge {
                source,
                target,
                label,
            } = edge.into();
            insert_with(graph.entry(source).or_default(), target, label, &mut combine);
        }
        Self { graph }
    }

    /// A graph of isolated nodes
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        Self {
            graph: nodes.into_iter().map(|n| (n, BTreeMap::new())).collect(),
        }
    }

    pub fn from_node_set(nodes: &BTreeSet<N>) -> Self {
        Self::from_nodes(nodes.iter().cloned())
    }

    /// Every node mentioned by the graph, as source key or as edge target
    pub fn nodes(&self) -> BTreeSet<N> {
        let mut nodes = self.source_nodes();
        nodes.extend(self.target_nodes());
        nodes
    }

    /// Nodes stored as sources, including those with an empty image
    pub fn source_nodes(&self) -> BTreeSet<N> {
        self.graph.keys().cloned().collect()
    }

    /// Nodes with at least one incoming edge
    pub fn target_nodes(&self) -> BTreeSet<N> {
        self.graph
            .values()
            .flat_map(|image| image.keys().cloned())
            .collect()
    }

    /// Nodes with neither outgoing nor incoming edges
    pub fn isolated_nodes(&self) -> BTreeSet<N> {
        let targets = self.target_nodes();
        self.graph
            .iter()
            .filter(|(n, image)| image.is_empty() && !targets.contains(*n))
            .map(|(n, _)| n.clone())
            .collect()
    }

    /// All edges, ordered by source then target
    pub fn edges(&self) -> Vec<Edge<N, E>> {
        self.graph
            .iter()
            .flat_map(|(s, image)| {
                image
                    .iter()
                    .map(move |(t, e)| Edge::new(s.clone(), t.clone(), e.clone()))
            })
            .collect()
    }

    /// Edges leaving any of `sources`
    pub fn edges_from(&self, sources: &[N]) -> Vec<Edge<N, E>> {
        sources
            .iter()
            .flat_map(|s| {
                self.neighbours(s)
                    .into_iter()
                    .map(move |(t, e)| Edge::new(s.clone(), t, e))
            })
            .collect()
    }

    /// Edges entering any of `targets`
    pub fn edges_to(&self, targets: &[N]) -> Vec<Edge<N, E>> {
        let wanted: BTreeSet<&N> = targets.iter().collect();
        self.edges()
            .into_iter()
            .filter(|edge| wanted.contains(&edge.target))
            .collect()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.graph.values().map(BTreeMap::len).sum()
    }

    pub fn lookup(&self, source: &N, target: &N) -> Option<&E> {
        self.graph.get(source).and_then(|image| image.get(target))
    }

    /// Outgoing edges of `node` as `(target, label)`, ordered by target
    pub fn neighbours(&self, node: &N) -> Vec<(N, E)> {
        self.graph
            .get(node)
            .map(|image| image.iter().map(|(t, e)| (t.clone(), e.clone())).collect())
            .unwrap_or_default()
    }

    /// Self-loops
    pub fn diagonal(&self) -> Vec<Edge<N, E>> {
        self.graph
            .iter()
            .filter_map(|(n, image)| image.get(n).map(|e| Edge::new(n.clone(), n.clone(), e.clone())))
            .collect()
    }

    /// Breadth-first distances (in edges) of every node reachable from `start`
    ///
    /// `start` itself is included at distance 0.
    pub fn reachable_from(&self, start: &N) -> BTreeMap<N, usize> {
        let mut dist = BTreeMap::new();
        let mut queue = VecDeque::new();
        dist.insert(start.clone(), 0);
        queue.push_back(start.clone());

        while let Some(n) = queue.pop_front() {
            let d = dist[&n];
            if let Some(image) = self.graph.get(&n) {
                for t in image.keys() {
                    if !dist.contains_key(t) {
                        dist.insert(t.clone(), d + 1);
                        queue.push_back(t.clone());
                    }
                }
            }
        }

        dist
    }

    /// True when no node reaches itself
    pub fn is_acyclic(&self) -> bool {
        self.sccs().iter().all(|scc| !scc.is_cyclic())
    }

    /// Strongly connected components in reverse topological order
    pub fn sccs(&self) -> Vec<Scc<N>> {
        scc::tarjan_scc(self)
    }

    /// Inserts an edge, replacing any existing label
    pub fn insert_edge(self, source: N, target: N, label: E) -> Self {
        self.insert_edge_with(|new, _| new.clone(), source, target, label)
    }

    /// Inserts an edge; an existing label `old` becomes `combine(new, old)`
    pub fn insert_edge_with<F>(mut self, mut combine: F, source: N, target: N, label: E) -> Self
    where
        F: FnMut(&E, &E) -> E,
    {
        insert_with(self.graph.entry(source).or_default(), target, label, &mut combine);
        self
    }

    /// Registers a node without edges; existing edges are kept
    pub fn insert_node(mut self, node: N) -> Self {
        self.graph.entry(node).or_default();
        self
    }

    /// Union keeping the left label on conflicts
    pub fn union(&self, other: &Graph<N, E>) -> Graph<N, E> {
        self.union_with(other, |left, _| left.clone())
    }

    /// Union combining conflicting labels as `combine(left, right)`
    pub fn union_with<F>(&self, other: &Graph<N, E>, combine: F) -> Graph<N, E>
    where
        F: FnMut(&E, &E) -> E,
    {
        Self::from_adjacency(union_adjacency(&self.graph, &other.graph, combine))
    }

    /// Edges present in both graphs, labelled `combine(left, right)`
    ///
    /// Sources stored in both graphs stay registered even when their images
    /// share no target.
    pub fn intersect_with<F>(&self, other: &Graph<N, E>, mut combine: F) -> Graph<N, E>
    where
        F: FnMut(&E, &E) -> E,
    {
        let graph = self
            .graph
            .iter()
            .filter_map(|(s, left)| {
                let right = other.graph.get(s)?;
                let image = left
                    .iter()
                    .filter_map(|(t, e1)| right.get(t).map(|e2| (t.clone(), combine(e1, e2))))
                    .collect();
                Some((s.clone(), image))
            })
            .collect();
        Self { graph }
    }

    /// Left-to-right union of many graphs
    pub fn unions_with<I, F>(graphs: I, mut combine: F) -> Graph<N, E>
    where
        I: IntoIterator<Item = Graph<N, E>>,
        F: FnMut(&E, &E) -> E,
    {
        graphs
            .into_iter()
            .fold(Self::new(), |acc, g| acc.union_with(&g, &mut combine))
    }

    /// Relational composition of `self` followed by `other`
    pub fn compose_with<Q, C>(&self, other: &Graph<N, E>, sequence: Q, combine: C) -> Graph<N, E>
    where
        Q: FnMut(&E, &E) -> E,
        C: FnMut(&E, &E) -> E,
    {
        Self::from_adjacency(compose_adjacency(&self.graph, &other.graph, sequence, combine))
    }

    /// Removes a node and every edge touching it
    pub fn remove_node(mut self, node: &N) -> Self {
        self.graph.remove(node);
        for image in self.graph.values_mut() {
            image.remove(node);
        }
        self
    }

    /// Removes one edge; the source stays registered
    pub fn remove_edge(mut self, source: &N, target: &N) -> Self {
        if let Some(image) = self.graph.get_mut(source) {
            image.remove(target);
        }
        self
    }

    /// Keeps the edges satisfying `keep`
    pub fn filter_edges<F>(mut self, mut keep: F) -> Self
    where
        F: FnMut(&N, &N, &E) -> bool,
    {
        for (s, image) in self.graph.iter_mut() {
            image.retain(|t, e| keep(s, t, e));
        }
        self
    }

    /// Relabels every edge
    pub fn map_labels<F, T>(&self, mut f: F) -> Graph<N, T>
    where
        F: FnMut(&E) -> T,
    {
        Graph {
            graph: self
                .graph
                .iter()
                .map(|(s, image)| {
                    let image = image.iter().map(|(t, e)| (t.clone(), f(e))).collect();
                    (s.clone(), image)
                })
                .collect(),
        }
    }

    /// Reverses every edge
    pub fn transpose(&self) -> Graph<N, E> {
        let mut graph = Adjacency::new();
        for (s, image) in &self.graph {
            for (t, e) in image {
                graph
                    .entry(t.clone())
                    .or_insert_with(BTreeMap::new)
                    .insert(s.clone(), e.clone());
            }
        }
        Self { graph }
    }

    /// Drops source nodes whose image is empty
    ///
    /// Only the top level is pruned; targets are left alone.
    pub fn clean(mut self) -> Self {
        self.graph.retain(|_, image| !image.is_empty());
        self
    }
}
