use criterion::{black_box, criterion_group, criterion_main, Criterion};
use labgraph::algo::dijkstra::dijkstra;
use labgraph::algo::hamiltonian::{hamiltonian_cycle, HamiltonianConfig};
use labgraph::algo::metrics::graph_metrics;
use labgraph::algo::predefined_graphs::{
    create_binary_tree, create_random_hamiltonian_graph, create_random_weighted_graph,
};
use labgraph::algo::traversal::{PreOrderBfs, PreOrderDfs};
use labgraph::ImmutableGraphContainer;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_preorder_bfs_bintree_16(criterion: &mut Criterion) {
    let graph = create_binary_tree(16).unwrap();
    let root = graph.node_index(&0).unwrap();
    let mut traversal = PreOrderBfs::new(&graph, root);

    criterion.bench_function("bfs_bintree_16", |b| {
        b.iter(|| {
            traversal.reset(root);
            for node in &mut traversal {
                black_box(node);
            }
        })
    });
}

fn bench_preorder_dfs_bintree_16(criterion: &mut Criterion) {
    let graph = create_binary_tree(16).unwrap();
    let root = graph.node_index(&0).unwrap();
    let mut traversal = PreOrderDfs::new(&graph, root);

    criterion.bench_function("dfs_bintree_16", |b| {
        b.iter(|| {
            traversal.reset(root);
            for node in &mut traversal {
                black_box(node);
            }
        })
    });
}

fn bench_dijkstra_random_1000(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let graph = create_random_weighted_graph(1000, 0.01, 100, &mut random).unwrap();

    criterion.bench_function("dijkstra_random_1000", |b| {
        b.iter(|| black_box(dijkstra(&graph, &0).unwrap()))
    });
}

fn bench_metrics_bintree_10(criterion: &mut Criterion) {
    let graph = create_binary_tree(10).unwrap();

    criterion.bench_function("metrics_bintree_10", |b| {
        b.iter(|| black_box(graph_metrics(&graph)))
    });
}

fn bench_hamiltonian_cycle_random_18(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let graph = create_random_hamiltonian_graph(18, 0.2, &mut random).unwrap();
    let config = HamiltonianConfig::default();

    criterion.bench_function("hamiltonian_cycle_random_18", |b| {
        b.iter(|| black_box(hamiltonian_cycle(&graph, &config)))
    });
}

criterion_group!(
    traversal,
    bench_preorder_bfs_bintree_16,
    bench_preorder_dfs_bintree_16
);
criterion_group!(
    analysis,
    bench_dijkstra_random_1000,
    bench_metrics_bintree_10,
    bench_hamiltonian_cycle_random_18
);
criterion_main!(traversal, analysis);
