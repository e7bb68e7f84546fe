use graph_search::{EdgeKind, Graph};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Random graph with `n` vertices and `m` edges of the given kind.
pub fn random_graph(seed: u64, n: usize, m: usize, kind: EdgeKind) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = Graph::new(n).unwrap();

    for _ in 0..m {
        let u = rng.random_range(1..=n);
        let v = rng.random_range(1..=n);
        graph.add_edge(u, v, kind).unwrap();
    }

    graph
}

pub fn setup() -> Vec<Graph> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut graphs = vec![];
    for seed in 0..5 {
        for (n, m) in [(1, 0), (10, 5), (20, 40), (50, 200)] {
            graphs.push(random_graph(seed, n, m, EdgeKind::Directed));
            graphs.push(random_graph(seed, n, m, EdgeKind::Undirected));
        }
    }
    graphs
}
