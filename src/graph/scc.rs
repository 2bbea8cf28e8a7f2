//! Strongly connected components
//!
//! Tarjan's algorithm, run with an explicit call stack so deep call chains
//! cannot overflow the native stack. Nodes are numbered in `Ord` order first,
//! so the decomposition is deterministic. Time and space are `O(V + E)`.

use std::collections::BTreeMap;

use crate::graph::Graph;

/// A strongly connected component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scc<N> {
    /// A single node without a self-loop
    Acyclic(N),
    /// Nodes that all reach each other, in ascending order; a single node
    /// lands here when it has a self-loop
    Cyclic(Vec<N>),
}

impl<N> Scc<N> {
    pub fn is_cyclic(&self) -> bool {
        matches!(self, Scc::Cyclic(_))
    }

    pub fn members(&self) -> &[N] {
        match self {
            Scc::Acyclic(n) => std::slice::from_ref(n),
            Scc::Cyclic(ns) => ns,
        }
    }
}

/// Computes the SCCs of `graph` in reverse topological order
///
/// Every edge that leaves a component points into a component that appears
/// earlier in the result.
pub(crate) fn tarjan_scc<N, E>(graph: &Graph<N, E>) -> Vec<Scc<N>>
where
    N: Ord + Clone,
    E: Clone,
{
    let nodes: Vec<N> = graph.nodes().into_iter().collect();
    let ids: BTreeMap<&N, usize> = nodes.iter().enumerate().map(|(i, n)| (n, i)).collect();
    let adj: Vec<Vec<usize>> = nodes
        .iter()
        .map(|n| {
            graph
                .adjacency()
                .get(n)
                .map(|image| image.keys().map(|t| ids[t]).collect())
                .unwrap_or_default()
        })
        .collect();

    let num_nodes = nodes.len();
    const UNDEFINED: usize = usize::MAX;
    let mut index = vec![UNDEFINED; num_nodes];
    let mut lowlink = vec![0usize; num_nodes];
    let mut on_stack = vec![false; num_nodes];
    let mut stack: Vec<usize> = Vec::new();
    let mut current_index = 0usize;
    let mut components: Vec<Vec<usize>> = Vec::new();

    // (node, position of the next neighbour to visit)
    let mut call_stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..num_nodes {
        if index[start] != UNDEFINED {
            continue;
        }

        index[start] = current_index;
        lowlink[start] = current_index;
        current_index += 1;
        stack.push(start);
        on_stack[start] = true;
        call_stack.push((start, 0));

        while let Some(frame) = call_stack.last_mut() {
            let v = frame.0;

            if frame.1 < adj[v].len() {
                let w = adj[v][frame.1];
                frame.1 += 1;

                if index[w] == UNDEFINED {
                    // Tree edge: descend into w
                    index[w] = current_index;
                    lowlink[w] = current_index;
                    current_index += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    call_stack.push((w, 0));
                } else if on_stack[w] {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
            } else {
                if lowlink[v] == index[v] {
                    let mut members = Vec::new();
                    while let Some(w) = stack.pop() {
                        on_stack[w] = false;
                        members.push(w);
                        if w == v {
                            break;
                        }
                    }
                    components.push(members);
                }

                call_stack.pop();
                if let Some(&(parent, _)) = call_stack.last() {
                    lowlink[parent] = lowlink[parent].min(lowlink[v]);
                }
            }
        }
    }

    components
        .into_iter()
        .map(|mut members| {
            if members.len() == 1 && !adj[members[0]].contains(&members[0]) {
                Scc::Acyclic(nodes[members[0]].clone())
            } else {
                members.sort_unstable();
                Scc::Cyclic(members.into_iter().map(|i| nodes[i].clone()).collect())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position<N: PartialEq>(sccs: &[Scc<N>], node: &N) -> usize {
        sccs.iter()
            .position(|scc| scc.members().contains(node))
            .expect("node belongs to some component")
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph<u32, ()> = Graph::new();
        assert!(g.sccs().is_empty());
    }

    #[test]
    fn test_single_node_no_cycle() {
        let g: Graph<u32, ()> = Graph::from_nodes(vec![0]);
        assert_eq!(g.sccs(), vec![Scc::Acyclic(0)]);
        assert!(g.is_acyclic());
    }

    #[test]
    fn test_self_loop_is_cyclic() {
        let g = Graph::singleton(0u32, 0, ());
        assert_eq!(g.sccs(), vec![Scc::Cyclic(vec![0])]);
        assert!(!g.is_acyclic());
    }

    #[test]
    fn test_three_cycle() {
        let g = Graph::from_edges(vec![(0u32, 1, ()), (1, 2, ()), (2, 0, ())]);
        assert_eq!(g.sccs(), vec![Scc::Cyclic(vec![0, 1, 2])]);
    }

    #[test]
    fn test_reverse_topological_order() {
        // 1 → {2 ⇄ 3} → 4, plus 5 → 4
        let g = Graph::from_edges(vec![
            (1u32, 2, ()),
            (2, 3, ()),
            (3, 2, ()),
            (3, 4, ()),
            (5, 4, ()),
        ]);
        let sccs = g.sccs();
        assert_eq!(sccs.len(), 4);
        assert!(sccs.contains(&Scc::Cyclic(vec![2, 3])));

        for edge in g.edges() {
            let from = position(&sccs, &edge.source);
            let to = position(&sccs, &edge.target);
            assert!(to <= from, "edge {:?} points forward", edge);
        }
    }

    #[test]
    fn test_target_only_nodes_are_components() {
        let g = Graph::singleton("a", "b", ());
        assert_eq!(g.sccs(), vec![Scc::Acyclic("b"), Scc::Acyclic("a")]);
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let edges: Vec<_> = (0u32..100_000).map(|i| (i, i + 1, ())).collect();
        let g = Graph::from_edges(edges);
        let sccs = g.sccs();
        assert_eq!(sccs.len(), 100_001);
        assert_eq!(sccs[0], Scc::Acyclic(100_000));
    }
}
