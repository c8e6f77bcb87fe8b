use divan::{black_box, Bencher};
use fastrand::Rng;

use netview::{
    core::Coord,
    infra::testing::create_grid,
    storage::MemoryNetwork,
    view::GraphView,
};

const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

fn main() {
    divan::main();
}

fn random_network(node_count: usize, link_count: usize, rng: &mut Rng) -> MemoryNetwork {
    let mut network = MemoryNetwork::with_capacity(node_count, link_count);

    for i in 0..node_count {
        let coord = Coord::new(rng.f64() * 1000.0, rng.f64() * 1000.0);
        network.add_node(format!("n{i}"), coord);
    }

    for i in 0..link_count {
        let from = format!("n{}", rng.usize(..node_count));
        let to = format!("n{}", rng.usize(..node_count));
        network.add_link(format!("l{i}"), &from, &to);
    }

    network
}

#[divan::bench(consts = [100, 1000])]
fn node_lookup_by_key<const N: usize>(bencher: Bencher) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let network = random_network(N, 4 * N, &mut rng);
    let graph = GraphView::new("bench", &network);

    let keys = (0..N)
        .map(|_| format!("n{}", rng.usize(..N)))
        .collect::<Vec<_>>();

    bencher.bench_local(|| {
        for key in keys.iter() {
            black_box(graph.node_by_key(key).is_ok());
        }
    });
}

#[divan::bench(consts = [100, 1000])]
fn edge_positional_access<const N: usize>(bencher: Bencher) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let network = random_network(N, 4 * N, &mut rng);
    let graph = GraphView::new("bench", &network);

    bencher.bench_local(|| {
        for i in 0..graph.edge_count() {
            black_box(graph.edge_at(i).is_ok());
        }
    });
}

#[divan::bench(args = [10, 30])]
fn incident_edges_grid(bencher: Bencher, size: usize) {
    let network = create_grid(size, size);
    let graph = GraphView::new("bench", &network);

    bencher.bench_local(|| {
        let mut total = 0;

        for node in graph.nodes() {
            total += node.edges().count();
        }

        black_box(total)
    });
}

#[divan::bench(args = [10, 30])]
fn edge_between_grid(bencher: Bencher, size: usize) {
    let network = create_grid(size, size);
    let graph = GraphView::new("bench", &network);
    let nodes = graph.nodes().collect::<Vec<_>>();

    bencher.bench_local(|| {
        for pair in nodes.windows(2) {
            black_box(pair[0].edge_between(&pair[1]).is_some());
        }
    });
}
