use crate::error::Result;
use crate::implementation::Graph;
use rand::Rng;

/// Creates a cycle on the nodes `0..node_amount`, connecting each node `i` to `i + 1` and the last node to node `0`.
/// With less than three nodes, no closing edge is added, so the result is a path.
pub fn create_cycle_graph(node_amount: usize) -> Result<Graph<usize>> {
    let mut edges: Vec<_> = (1..node_amount).map(|node| (node - 1, node)).collect();
    if node_amount >= 3 {
        edges.push((node_amount - 1, 0));
    }
    Graph::build(0..node_amount, edges)
}

/// Creates a path on the nodes `0..node_amount`, connecting each node `i` to `i + 1`.
pub fn create_path_graph(node_amount: usize) -> Result<Graph<usize>> {
    Graph::build(0..node_amount, (1..node_amount).map(|node| (node - 1, node)))
}

/// Creates a complete graph on the nodes `0..node_amount`.
pub fn create_complete_graph(node_amount: usize) -> Result<Graph<usize>> {
    let edges = (0..node_amount).flat_map(|a| (a + 1..node_amount).map(move |b| (a, b)));
    Graph::build(0..node_amount, edges)
}

/// Creates a star with center `0` and the leaves `1..=leaf_amount`.
pub fn create_star_graph(leaf_amount: usize) -> Result<Graph<usize>> {
    Graph::build(0..=leaf_amount, (1..=leaf_amount).map(|leaf| (0, leaf)))
}

/// Creates a binary tree whose root is node `0`, where the children of node `i` are `2i + 1` and `2i + 2`.
/// A depth of 0 creates just the root, a depth of 1 the root and its children, and so on.
pub fn create_binary_tree(depth: u32) -> Result<Graph<usize>> {
    let node_amount = (1usize << (depth + 1)) - 1;
    Graph::build(
        0..node_amount,
        (1..node_amount).map(|node| ((node - 1) / 2, node)),
    )
}

/// Creates a random graph on the nodes `0..node_amount` where each pair of distinct nodes is connected with the given probability.
pub fn create_random_graph<Random: Rng>(
    node_amount: usize,
    edge_probability: f64,
    random: &mut Random,
) -> Result<Graph<usize>> {
    let mut edges = Vec::new();
    for a in 0..node_amount {
        for b in a + 1..node_amount {
            if random.gen_bool(edge_probability) {
                edges.push((a, b));
            }
        }
    }
    Graph::build(0..node_amount, edges)
}

/// Creates a random graph like [create_random_graph], but with each edge weighted by an integer drawn uniformly from `1..=max_weight`.
pub fn create_random_weighted_graph<Random: Rng>(
    node_amount: usize,
    edge_probability: f64,
    max_weight: u32,
    random: &mut Random,
) -> Result<Graph<usize>> {
    let mut edges = Vec::new();
    for a in 0..node_amount {
        for b in a + 1..node_amount {
            if random.gen_bool(edge_probability) {
                edges.push((a, b, f64::from(random.gen_range(1..=max_weight.max(1)))));
            }
        }
    }
    Graph::build(0..node_amount, edges)
}

/// Creates a random graph that contains the Hamiltonian cycle `0, 1, ..., node_amount - 1, 0`,
/// plus each other pair of nodes connected with the given probability.
pub fn create_random_hamiltonian_graph<Random: Rng>(
    node_amount: usize,
    edge_probability: f64,
    random: &mut Random,
) -> Result<Graph<usize>> {
    let mut edges = Vec::new();
    for a in 0..node_amount {
        for b in a + 1..node_amount {
            let on_cycle = b == a + 1 || (a == 0 && b == node_amount - 1 && node_amount >= 3);
            if on_cycle || random.gen_bool(edge_probability) {
                edges.push((a, b));
            }
        }
    }
    Graph::build(0..node_amount, edges)
}
