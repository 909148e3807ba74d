use crate::algo::components::is_connected;
use crate::index::{GraphIndex, NodeIndex};
use crate::interface::StaticGraph;
use bitvector::BitVector;
use log::{trace, warn};

/// The default node limit of [HamiltonianConfig].
pub const DEFAULT_HAMILTONIAN_NODE_LIMIT: usize = 20;

/// Configuration of the Hamiltonian search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HamiltonianConfig {
    /// Graphs with more nodes than this are searched anyways, but the result carries a [SizeAdvisory].
    pub node_limit: usize,
}

impl Default for HamiltonianConfig {
    fn default() -> Self {
        Self {
            node_limit: DEFAULT_HAMILTONIAN_NODE_LIMIT,
        }
    }
}

/// Notes that a Hamiltonian search ran on a graph larger than the configured node limit, and may hence take exponential time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeAdvisory {
    /// The amount of nodes of the searched graph.
    pub node_count: usize,
    /// The configured node limit.
    pub node_limit: usize,
}

/// The outcome of a Hamiltonian search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HamiltonianResult<Node> {
    /// The first Hamiltonian cycle or path found, or `None` if there is none.
    /// A cycle repeats its first node at the end.
    pub walk: Option<Vec<Node>>,
    /// Present if the graph exceeded the node limit.
    pub advisory: Option<SizeAdvisory>,
}

impl<Node> HamiltonianResult<Node> {
    /// Returns true if a Hamiltonian cycle or path was found.
    pub fn is_found(&self) -> bool {
        self.walk.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    Cycle,
    Path,
}

/// Searches for a Hamiltonian cycle by backtracking.
///
/// Candidates are tried in canonical order and the first cycle found is returned, starting and ending at the canonically first node.
/// Since a Hamiltonian cycle visits every node, trying further start nodes after the first cannot find anything new.
/// Self-loops are never used. A graph with a single node has no Hamiltonian cycle, and two adjacent nodes `a` and `b` give `[a, b, a]`.
pub fn hamiltonian_cycle<Graph: StaticGraph>(
    graph: &Graph,
    config: &HamiltonianConfig,
) -> HamiltonianResult<Graph::Node> {
    search(graph, config, Goal::Cycle)
}

/// Searches for a Hamiltonian path by backtracking.
///
/// Start nodes and candidates are tried in canonical order and the first path found is returned.
pub fn hamiltonian_path<Graph: StaticGraph>(
    graph: &Graph,
    config: &HamiltonianConfig,
) -> HamiltonianResult<Graph::Node> {
    search(graph, config, Goal::Path)
}

fn search<Graph: StaticGraph>(
    graph: &Graph,
    config: &HamiltonianConfig,
    goal: Goal,
) -> HamiltonianResult<Graph::Node> {
    let advisory = if graph.node_count() > config.node_limit {
        warn!(
            "Searching a Hamiltonian {:?} in a graph with {} nodes, which is more than the limit of {}. This may take a long time.",
            goal,
            graph.node_count(),
            config.node_limit
        );
        Some(SizeAdvisory {
            node_count: graph.node_count(),
            node_limit: config.node_limit,
        })
    } else {
        None
    };

    // Hamiltonian structures cannot span multiple components.
    let walk = if is_connected(graph) {
        let start_amount = match goal {
            Goal::Cycle => 1,
            Goal::Path => graph.node_count(),
        };
        graph
            .node_indices()
            .take(start_amount)
            .find_map(|start| backtrack(graph, start, goal))
            .map(|walk| graph.node_labels(walk))
    } else {
        None
    };

    HamiltonianResult { walk, advisory }
}

/// Extends a path from `start` depth first through unvisited neighbors, using an explicit stack of frames.
/// Each frame is a node on the path together with the position of the next neighbor to try.
fn backtrack<Graph: StaticGraph>(
    graph: &Graph,
    start: NodeIndex,
    goal: Goal,
) -> Option<Vec<NodeIndex>> {
    let node_count = graph.node_count();
    let mut on_path = BitVector::new(node_count);
    let mut path = vec![start];
    let mut next_candidate = vec![0usize];
    on_path.insert(start.as_usize());

    while let Some(&last) = path.last() {
        if path.len() == node_count {
            match goal {
                Goal::Path => return Some(path),
                Goal::Cycle if node_count > 1 && graph.contains_edge_between(last, start) => {
                    path.push(start);
                    return Some(path);
                }
                Goal::Cycle => {}
            }
        } else {
            let neighbors = graph.neighbors(last);
            let position = next_candidate.last_mut()?;
            let candidate = neighbors[*position..]
                .iter()
                .position(|neighbor| !on_path.contains(neighbor.node_id.as_usize()));

            if let Some(offset) = candidate {
                let next = neighbors[*position + offset].node_id;
                *position += offset + 1;
                trace!("Extending {:?} by {:?}", path, next);
                on_path.insert(next.as_usize());
                path.push(next);
                next_candidate.push(0);
                continue;
            }
        }

        path.pop();
        next_candidate.pop();
        on_path.remove(last.as_usize());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::{hamiltonian_cycle, hamiltonian_path, HamiltonianConfig, SizeAdvisory};
    use crate::algo::predefined_graphs::{
        create_cycle_graph, create_path_graph, create_random_hamiltonian_graph, create_star_graph,
    };
    use crate::implementation::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn petersen_graph() -> Graph<usize> {
        let mut edges = Vec::new();
        for node in 0..5 {
            edges.push((node, (node + 1) % 5));
            edges.push((node, node + 5));
            edges.push((node + 5, (node + 2) % 5 + 5));
        }
        Graph::build(0..10, edges).unwrap()
    }

    #[test]
    fn test_cycle_graph() {
        let config = HamiltonianConfig::default();
        let result = hamiltonian_cycle(&create_cycle_graph(5).unwrap(), &config);
        assert_eq!(result.walk, Some(vec![0, 1, 2, 3, 4, 0]));
        assert_eq!(result.advisory, None);

        let result = hamiltonian_path(&create_cycle_graph(5).unwrap(), &config);
        assert_eq!(result.walk, Some(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_path_and_star_graphs() {
        let config = HamiltonianConfig::default();
        let path = create_path_graph(4).unwrap();
        assert!(!hamiltonian_cycle(&path, &config).is_found());
        assert_eq!(hamiltonian_path(&path, &config).walk, Some(vec![0, 1, 2, 3]));

        let star = create_star_graph(2).unwrap();
        assert_eq!(hamiltonian_path(&star, &config).walk, Some(vec![1, 0, 2]));
        let star = create_star_graph(3).unwrap();
        assert!(!hamiltonian_path(&star, &config).is_found());
    }

    #[test]
    fn test_petersen_graph() {
        let graph = petersen_graph();
        let config = HamiltonianConfig::default();
        assert!(!hamiltonian_cycle(&graph, &config).is_found());

        let path = hamiltonian_path(&graph, &config).walk.unwrap();
        assert_eq!(path.len(), 10);
        for window in path.windows(2) {
            assert!(graph.weight(&window[0], &window[1]).is_some());
        }
    }

    #[test]
    fn test_tiny_graphs() {
        let config = HamiltonianConfig::default();
        let empty: Graph<u32> = Graph::build(Vec::new(), Vec::<(u32, u32)>::new()).unwrap();
        assert!(!hamiltonian_cycle(&empty, &config).is_found());
        assert!(!hamiltonian_path(&empty, &config).is_found());

        let single: Graph<u32> = Graph::build(vec![7], vec![(7, 7)]).unwrap();
        assert!(!hamiltonian_cycle(&single, &config).is_found());
        assert_eq!(hamiltonian_path(&single, &config).walk, Some(vec![7]));

        let pair: Graph<u32> = Graph::build(vec![1, 2], vec![(1, 2)]).unwrap();
        assert_eq!(hamiltonian_cycle(&pair, &config).walk, Some(vec![1, 2, 1]));

        let disconnected: Graph<u32> = Graph::build(vec![1, 2, 3], vec![(1, 2)]).unwrap();
        assert!(!hamiltonian_path(&disconnected, &config).is_found());
    }

    #[test]
    fn test_node_limit_advisory() {
        let config = HamiltonianConfig { node_limit: 3 };
        let result = hamiltonian_cycle(&create_cycle_graph(5).unwrap(), &config);
        assert_eq!(
            result.advisory,
            Some(SizeAdvisory {
                node_count: 5,
                node_limit: 3
            })
        );
        assert_eq!(result.walk, Some(vec![0, 1, 2, 3, 4, 0]));
    }

    #[test]
    fn test_random_hamiltonian_graphs() {
        let mut random = StdRng::seed_from_u64(5);
        let config = HamiltonianConfig::default();
        for node_amount in 3..14 {
            let graph = create_random_hamiltonian_graph(node_amount, 0.3, &mut random).unwrap();
            let cycle = hamiltonian_cycle(&graph, &config).walk.unwrap();

            assert_eq!(cycle.len(), node_amount + 1);
            assert_eq!(cycle.first(), cycle.last());
            let mut inner = cycle[..node_amount].to_vec();
            inner.sort_unstable();
            assert_eq!(inner, (0..node_amount).collect::<Vec<_>>());
            for window in cycle.windows(2) {
                assert!(graph.weight(&window[0], &window[1]).is_some());
            }
        }
    }
}
