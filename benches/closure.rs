//! Benchmarks for graph closure: SCC-based against whole-graph iteration

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use termgraph::{transitive_closure, transitive_closure1, Graph, Order, OrderSemiring};

/// A call graph made of `clusters` mutually recursive rings chained together
fn create_call_graph(clusters: usize, ring: usize) -> Graph<usize, Order> {
    let mut edges = Vec::new();
    for c in 0..clusters {
        let base = c * ring;
        for k in 0..ring {
            let label = if k % 3 == 0 { Order::lt() } else { Order::le() };
            edges.push((base + k, base + (k + 1) % ring, label));
        }
        if c + 1 < clusters {
            edges.push((base, base + ring, Order::Unknown));
        }
    }
    Graph::from_edges(edges)
}

fn bench_closure(c: &mut Criterion) {
    let semiring = OrderSemiring::default();

    let mut group = c.benchmark_group("closure");
    group.sample_size(20);
    for &clusters in &[4usize, 16, 32] {
        let g = create_call_graph(clusters, 4);

        group.bench_with_input(BenchmarkId::new("scc", clusters), &clusters, |bench, _| {
            bench.iter(|| black_box(transitive_closure(&semiring, &g)))
        });

        group.bench_with_input(BenchmarkId::new("whole_graph", clusters), &clusters, |bench, _| {
            bench.iter(|| black_box(transitive_closure1(&semiring, &g)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_closure);
criterion_main!(benches);
