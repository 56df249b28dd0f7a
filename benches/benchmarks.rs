//! Criterion benchmarks for the weighted graph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use weighted_graph::graph::{Graph, VisitOrder};

/// Build a random graph with integer identifiers and `edges_per_vertex`
/// outgoing edges per vertex.
fn make_random_graph(vertex_count: u32, edges_per_vertex: usize) -> Graph<u32, u32> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();

    for id in 0..vertex_count {
        graph.add_vertex(id, id).unwrap();
    }
    for id in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            graph
                .add_directed_edge(&id, &target, rng.gen_range(1..100))
                .unwrap();
        }
    }

    graph
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = make_random_graph(10_000, 3);

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let src = rng.gen_range(0..10_000u32);
            let tgt = rng.gen_range(0..10_000u32);
            let _ = graph.add_directed_edge(&src, &tgt, 1);
        })
    });
}

fn bench_bfs(c: &mut Criterion) {
    let graph = make_random_graph(100_000, 3);
    let start = 0u32;

    c.bench_function("bfs_100k", |b| {
        b.iter(|| {
            let mut order = VisitOrder::new();
            let _ = graph.breadth_first(&start, &mut order);
            order.len()
        })
    });
}

fn bench_dfs(c: &mut Criterion) {
    let graph = make_random_graph(100_000, 3);
    let start = 0u32;

    c.bench_function("dfs_100k", |b| {
        b.iter(|| {
            let mut order = VisitOrder::new();
            let _ = graph.depth_first(&start, &mut order);
            order.len()
        })
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = make_random_graph(100_000, 3);
    let mut rng = rand::thread_rng();

    c.bench_function("dijkstra_100k", |b| {
        b.iter(|| {
            let start = rng.gen_range(0..100_000u32);
            let end = rng.gen_range(0..100_000u32);
            let _ = graph.shortest_path(&start, &end);
        })
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_bfs,
    bench_dfs,
    bench_shortest_path,
);
criterion_main!(benches);
