//! Closure tests: worked examples plus agreement between the SCC-based and
//! whole-graph algorithms


use generators::{arb_bool_graph, arb_order_graph, arb_tropical_graph};
use proptest::prelude::*;
use termgraph::{
    complete, non_decreasing_loops, transitive_closure, transitive_closure1,
    try_transitive_closure, BoolSemiring, ClosureError, EngineConfig, Graph, MinPlus, NumSemiring,
    Order, OrderSemiring, Semiring, Tropical,
};

#[test]
fn test_false_cycle_closes_with_false_labels() {
    let g = Graph::from_edges(vec![(1u32, 2, false), (2, 1, false)]);
    let closed = transitive_closure(&BoolSemiring, &g);
    assert_eq!(closed.edge_count(), 4);
    assert!(closed.edges().iter().all(|edge| !edge.label));
}

#[test]
fn test_true_cycle_closes_with_true_labels() {
    let g = Graph::from_edges(vec![(1u32, 2, true), (2, 1, true)]);
    let closed = transitive_closure(&BoolSemiring, &g);
    assert_eq!(closed.edge_count(), 4);
    assert!(closed.edges().iter().all(|edge| edge.label));
}

#[test]
fn test_dag_closure_adds_no_loops() {
    let g = Graph::from_edges(vec![(1u32, 6, false), (6, 8, true), (8, 3, false)]);
    let closed = transitive_closure(&BoolSemiring, &g);
    assert_eq!(closed.lookup(&1, &8), Some(&false));
    assert_eq!(closed.lookup(&1, &3), Some(&false));
    assert_eq!(closed.lookup(&6, &3), Some(&false));
    assert!(closed.diagonal().is_empty());
    assert_eq!(closed.edge_count(), 6);
}

#[test]
fn test_closure_is_idempotent() {
    let g = Graph::from_edges(vec![(1u32, 2, true), (2, 3, false), (3, 1, true), (3, 4, true)]);
    let once = transitive_closure(&BoolSemiring, &g);
    assert_eq!(transitive_closure(&BoolSemiring, &once), once);
}

#[test]
fn test_mutual_recursion_detection() {
    // even/odd shrink their argument, spin calls itself unchanged through
    // a helper, and main calls everything with unknown arguments
    let calls = Graph::from_edges(vec![
        ("main", "even", Order::Unknown),
        ("main", "spin", Order::Unknown),
        ("even", "odd", Order::lt()),
        ("odd", "even", Order::lt()),
        ("spin", "helper", Order::le()),
        ("helper", "spin", Order::le()),
    ]);
    let closed = transitive_closure(&OrderSemiring::default(), &calls);

    assert_eq!(closed.lookup(&"even", &"even"), Some(&Order::lt()));
    assert_eq!(closed.lookup(&"spin", &"spin"), Some(&Order::le()));
    assert_eq!(closed.lookup(&"main", &"odd"), Some(&Order::Unknown));

    let looping: Vec<_> = non_decreasing_loops(&closed).into_iter().collect();
    assert_eq!(looping, vec!["helper", "spin"]);
}

#[test]
fn test_cutoff_widens_the_window() {
    let g = Graph::from_edges(vec![("f", "g", Order::lt()), ("g", "h", Order::lt())]);

    let narrow = transitive_closure(&OrderSemiring::new(0), &g);
    assert_eq!(narrow.lookup(&"f", &"h"), Some(&Order::Decr(1)));

    let wide = transitive_closure(&OrderSemiring::new(2), &g);
    assert_eq!(wide.lookup(&"f", &"h"), Some(&Order::Decr(2)));
}

#[test]
fn test_shortest_paths() {
    let f = Tropical::Finite;
    let g = Graph::from_edges(vec![
        ('a', 'b', f(4)),
        ('a', 'c', f(1)),
        ('c', 'b', f(1)),
        ('b', 'd', f(1)),
        ('d', 'a', f(10)),
    ]);
    let closed = transitive_closure(&MinPlus, &g);
    assert_eq!(closed.lookup(&'a', &'b'), Some(&f(2)));
    assert_eq!(closed.lookup(&'a', &'d'), Some(&f(3)));
    assert_eq!(closed.lookup(&'a', &'a'), Some(&f(13)));
    assert_eq!(closed.lookup(&'d', &'b'), Some(&f(12)));
}

#[test]
fn test_non_idempotent_combine_is_reported() {
    let g = Graph::from_edges(vec![(1u32, 2, 1u64), (2, 3, 1), (3, 1, 1)]);
    let config = EngineConfig {
        max_closure_iterations: Some(3),
        ..EngineConfig::default()
    };
    let result = try_transitive_closure(&NumSemiring::<u64>::new(), &g, &config);
    assert_eq!(result, Err(ClosureError::NotConverged { iterations: 3 }));
    assert_eq!(
        result.unwrap_err().to_string(),
        "closure did not converge after 3 iterations"
    );
}

#[test]
fn test_unbounded_config_still_converges() {
    let g = Graph::from_edges(vec![(1u32, 2, true), (2, 1, true)]);
    let closed = try_transitive_closure(&BoolSemiring, &g, &EngineConfig::unbounded());
    assert_eq!(closed.map(|c| c.edge_count()), Ok(4));
}

#[test]
fn test_complete_on_isolated_nodes() {
    let g = Graph::from_nodes(vec![1u32, 2, 3]).insert_edge(1, 2, true);
    let completed = complete(&BoolSemiring, &g);
    assert_eq!(completed.edge_count(), 1);
    assert_eq!(completed.source_nodes().len(), 1);
}

/// Label-wise check that `closed` has an edge for exactly the pairs joined
/// by a non-empty path
fn check_reachability<E: Clone>(g: &Graph<u8, E>, closed: &Graph<u8, E>) -> Result<(), String> {
    for s in g.nodes() {
        let mut reached: Vec<u8> = g
            .neighbours(&s)
            .into_iter()
            .flat_map(|(t, _)| g.reachable_from(&t).into_keys())
            .collect();
        reached.sort_unstable();
        reached.dedup();

        let closed_targets: Vec<u8> = closed.neighbours(&s).into_iter().map(|(t, _)| t).collect();
        if reached != closed_targets {
            return Err(format!(
                "node {}: reachable {:?}, closure has {:?}",
                s, reached, closed_targets
            ));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Both closure algorithms agree on boolean graphs
    #[test]
    fn bool_closures_agree(g in arb_bool_graph()) {
        let closed = transitive_closure(&BoolSemiring, &g);
        prop_assert_eq!(&closed, &transitive_closure1(&BoolSemiring, &g));
        prop_assert!(check_reachability(&g, &closed).is_ok());
    }

    /// Both closure algorithms agree on shortest paths
    #[test]
    fn tropical_closures_agree(g in arb_tropical_graph()) {
        prop_assert_eq!(transitive_closure(&MinPlus, &g), transitive_closure1(&MinPlus, &g));
    }

    /// Both closure algorithms agree on size-change orders
    #[test]
    fn order_closures_agree(g in arb_order_graph()) {
        let s = OrderSemiring::new(1);
        let closed = transitive_closure(&s, &g);
        prop_assert_eq!(&closed, &transitive_closure1(&s, &g));
        prop_assert_eq!(non_decreasing_loops(&closed), non_decreasing_loops(&transitive_closure1(&s, &g)));
    }

    /// `complete` is the cleaned whole-graph closure
    #[test]
    fn complete_is_clean_closure(g in arb_bool_graph()) {
        prop_assert_eq!(complete(&BoolSemiring, &g), transitive_closure1(&BoolSemiring, &g).clean());
    }

    /// Closing twice adds nothing
    #[test]
    fn closure_idempotent(g in arb_tropical_graph()) {
        let once = transitive_closure(&MinPlus, &g);
        prop_assert_eq!(transitive_closure(&MinPlus, &once), once);
    }

    /// The closure contains the original edges, possibly with better labels
    #[test]
    fn closure_extends_graph(g in arb_tropical_graph()) {
        let closed = transitive_closure(&MinPlus, &g);
        for edge in g.edges() {
            let label = closed.lookup(&edge.source, &edge.target);
            prop_assert!(label.is_some());
            prop_assert_eq!(MinPlus.combine(label.unwrap(), &edge.label), *label.unwrap());
        }
    }
}
