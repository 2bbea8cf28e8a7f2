use termgraph::{
    mul_parallel, non_decreasing_loops, transitive_closure, EngineConfig, Graph, Matrix,
    NumSemiring, Order, OrderSemiring, Size,
};

fn main() {
    env_logger::init();

    println!("termgraph {}", termgraph::VERSION);

    // A small call graph: ack recurses on a smaller first argument,
    // while ping and pong call each other without shrinking anything
    let calls = Graph::from_edges(vec![
        ("ack", "ack", Order::lt()),
        ("ack", "ping", Order::Unknown),
        ("ping", "pong", Order::le()),
        ("pong", "ping", Order::le()),
        ("pong", "log", Order::lt()),
    ]);

    println!("\nCall graph:");
    for edge in calls.edges() {
        println!("  {} -> {} [{}]", edge.source, edge.target, edge.label);
    }

    println!("\nComponents (leaves first):");
    for scc in calls.sccs() {
        println!("  {:?}", scc);
    }

    let semiring = OrderSemiring::default();
    let closed = transitive_closure(&semiring, &calls);

    println!("\nClosed call graph:");
    for edge in closed.edges() {
        println!("  {} -> {} [{}]", edge.source, edge.target, edge.label);
    }

    let looping = non_decreasing_loops(&closed);
    if looping.is_empty() {
        println!("\nEvery recursive call decreases.");
    } else {
        println!("\nPossibly non-terminating:");
        for name in &looping {
            println!("  {}", name);
        }
    }

    // Matrix product over the naturals
    let a = Matrix::from_lists(
        Size::new(3, 3),
        vec![vec![1, 2, 0], vec![0, 3, 0], vec![4, 0, 5]],
    );
    let b = Matrix::from_lists(
        Size::new(3, 3),
        vec![vec![7, 0, 8], vec![9, 0, 0], vec![0, 10, 0]],
    );

    println!("\nMatrix A:");
    println!("{}", a);
    println!("\nMatrix B:");
    println!("{}", b);

    let config = EngineConfig::default();
    println!("\nThreads: {}", config.system_params.n_threads);

    let c = mul_parallel(&NumSemiring::<i64>::new(), &a, &b, &config);
    println!("\nA × B:");
    println!("{}", c);
    println!("{:?}", c);
}
