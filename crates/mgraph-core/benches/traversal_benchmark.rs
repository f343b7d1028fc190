//! Benchmark walks, search strategies and path grouping.
//!
//! Run with: `cargo bench --bench traversal_benchmark`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mgraph_core::graph::{
    edge_attribute_equals_to, find_all, find_first, go_over_edge, Graph, SearchAlgorithm,
    TraversingStrategy, VertexId, VertexRef,
};

type Vtx<'g> = VertexRef<'g, u32, &'static str>;

/// Complete tree with the given fan-out and depth; payload is the creation index.
fn tree(fan_out: usize, depth: usize) -> (Graph<u32, &'static str>, VertexId) {
    let mut graph = Graph::new();
    let root = graph.add_vertex(0);
    let mut level = vec![root];
    let mut next_payload = 1_u32;

    for _ in 0..depth {
        let mut next = Vec::with_capacity(level.len() * fan_out);
        for &parent in &level {
            for _ in 0..fan_out {
                let child = graph.add_vertex(next_payload);
                next_payload += 1;
                let attribute = if next_payload % 2 == 0 { "even" } else { "odd" };
                graph
                    .connect_to_with(parent, child, attribute)
                    .expect("vertices exist");
                next.push(child);
            }
        }
        level = next;
    }
    (graph, root)
}

fn bench_walks(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for depth in &[4, 6, 8] {
        let (graph, root) = tree(3, *depth);
        let start = graph.vertex(root).expect("root exists");

        group.bench_with_input(BenchmarkId::new("depth_first", depth), depth, |bencher, _| {
            bencher.iter(|| black_box(start.walk(SearchAlgorithm::DepthFirst).count()));
        });

        group.bench_with_input(BenchmarkId::new("breadth_first", depth), depth, |bencher, _| {
            bencher.iter(|| black_box(start.walk(SearchAlgorithm::BreadthFirst).count()));
        });
    }

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy");
    let (graph, root) = tree(4, 6);
    let start = graph.vertex(root).expect("root exists");
    let last = u32::try_from(graph.vertex_count() - 1).expect("fits in u32");

    let first_dfs = find_first(SearchAlgorithm::DepthFirst, |v: Vtx<'_>| *v.data() == last);
    let first_bfs = find_first(SearchAlgorithm::BreadthFirst, |v: Vtx<'_>| *v.data() == last);
    let all_even = find_all(|v: Vtx<'_>| *v.data() % 2 == 0);

    group.bench_function("find_first_dfs", |bencher| {
        bencher.iter(|| black_box(first_dfs.search(start).len()));
    });
    group.bench_function("find_first_bfs", |bencher| {
        bencher.iter(|| black_box(first_bfs.search(start).len()));
    });
    group.bench_function("find_all", |bencher| {
        bencher.iter(|| black_box(all_even.search(start).len()));
    });

    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");
    let (graph, root) = tree(8, 3);
    let start = graph.vertex(root).expect("root exists");

    group.bench_function("outgoing_by_attribute", |bencher| {
        bencher.iter(|| black_box(start.grouped_outgoing_by(|edge| *edge.attributes()).len()));
    });

    let grouper = go_over_edge(edge_attribute_equals_to("even"))
        .go_over_edge(edge_attribute_equals_to("odd"))
        .group_vertexes_with(|v: Vtx<'_>| vec![u8::from(*v.data() % 3 == 0)]);
    group.bench_function("two_hop_path", |bencher| {
        bencher.iter(|| black_box(start.group_vertexes(&grouper).len()));
    });

    group.finish();
}

criterion_group!(benches, bench_walks, bench_strategies, bench_grouping);
criterion_main!(benches);
