//! Benchmarks for graph algorithms on ontology-shaped DAGs.
//!
//! These benchmarks measure:
//! - transitive ancestor queries from a leaf term
//! - full acyclicity checks
//! - topological ordering
//! - diameter computation

// Benchmark code - performance of the benchmark setup is not critical
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphmaster::{Direction, Graph};

/// Build a layered DAG resembling an ontology.
///
/// Each term in layer `k` gets `is_a` edges to two terms of layer `k - 1`
/// and a `part_of` edge to a third, so ancestor sets overlap heavily.
/// ```text
/// layer 0:   0   1   2   ...
///            ▲ ▲ ▲ ▲
/// layer 1:   w   w+1 ...
/// ```
fn layered_ontology(width: u32, layers: u32) -> Graph<u32> {
    let mut g = Graph::with_capacity((width * layers) as usize, (width * layers * 3) as usize);
    for n in 0..width {
        g.add_node(n);
    }
    for layer in 1..layers {
        for i in 0..width {
            let node = layer * width + i;
            let above = (layer - 1) * width;
            g.add_edge(node, above + i, Some("is_a"));
            g.add_edge(node, above + (i + 1) % width, Some("is_a"));
            g.add_edge(node, above + (i * 7 + 3) % width, Some("part_of"));
        }
    }
    g
}

fn bench_transitive(c: &mut Criterion) {
    let mut group = c.benchmark_group("transitive_ancestors");

    for layers in [10_u32, 50, 100] {
        let width = 200;
        let g = layered_ontology(width, layers);
        let leaf = (layers - 1) * width;

        group.throughput(Throughput::Elements(g.node_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(layers), &leaf, |b, leaf| {
            b.iter(|| {
                g.transitive(black_box(leaf), Direction::Outgoing, false)
                    .map(|set| set.len())
            });
        });
    }

    group.finish();
}

fn bench_whole_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("whole_graph");

    for nodes in [1_000_u32, 10_000, 40_000] {
        let width = 200;
        let g = layered_ontology(width, nodes / width);

        group.throughput(Throughput::Elements(g.edge_count() as u64));
        group.bench_with_input(BenchmarkId::new("is_acyclic", nodes), &g, |b, g| {
            b.iter(|| black_box(g.is_acyclic()));
        });
        group.bench_with_input(BenchmarkId::new("topological_order", nodes), &g, |b, g| {
            b.iter(|| g.topological_order().map(|order| order.len()));
        });
        group.bench_with_input(BenchmarkId::new("max_depth", nodes), &g, |b, g| {
            b.iter(|| g.max_depth(None));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transitive, bench_whole_graph);
criterion_main!(benches);
