use crate::algo::dijkstra::shortest_path_tree;
use crate::algo::traversal::resolve_start_node;
use crate::index::{GraphIndex, NodeIndex};
use crate::interface::StaticGraph;
use bitvector::BitVector;
use log::debug;
use std::collections::BTreeMap;

/// Colors the nodes of the graph such that no two adjacent nodes share a color.
///
/// Nodes are processed by descending degree, with ties broken canonically,
/// and each node gets the smallest color not used by an already colored neighbor.
/// Self-loops are ignored. This is a heuristic, the amount of colors is not necessarily minimal.
pub fn greedy_coloring<Graph: StaticGraph>(graph: &Graph) -> BTreeMap<Graph::Node, usize> {
    let mut order: Vec<_> = graph.node_indices().collect();
    // Stable, so equal degrees stay in canonical order.
    order.sort_by_key(|&node| std::cmp::Reverse(graph.degree(node)));

    let mut colors: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut used = Vec::new();
    for node in order {
        used.clear();
        used.extend(
            graph
                .proper_neighbors(node)
                .filter_map(|neighbor| colors[neighbor.node_id.as_usize()]),
        );
        used.sort_unstable();
        used.dedup();

        // The first gap in the sorted used colors.
        let color = used
            .iter()
            .enumerate()
            .find(|&(candidate, &color)| candidate != color)
            .map(|(candidate, _)| candidate)
            .unwrap_or(used.len());
        colors[node.as_usize()] = Some(color);
    }

    graph
        .node_indices()
        .zip(colors)
        .map(|(node, color)| (graph.node_label(node).clone(), color.unwrap_or(0)))
        .collect()
}

/// Returns the amount of distinct colors of a coloring.
pub fn color_count<Node>(coloring: &BTreeMap<Node, usize>) -> usize {
    coloring.values().max().map(|&max| max + 1).unwrap_or(0)
}

/// A visiting order built by [nearest_neighbor_tour].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour<Node> {
    /// The nodes in visiting order, each exactly once.
    pub order: Vec<Node>,
    /// False if the tour stopped because no unvisited node was reachable anymore.
    pub complete: bool,
}

/// Builds a visiting order by repeatedly moving to the nearest unvisited node.
///
/// Among the unvisited neighbors of the current node, the one with the minimum edge weight is chosen, with ties broken canonically.
/// If there is no unvisited neighbor, the unvisited node with the smallest hop distance is chosen,
/// and the unvisited nodes on a shortest path to it are appended to the tour.
/// If no unvisited node is reachable, the tour stops and is marked incomplete.
///
/// If `start` is not part of the graph, the canonically first node is used instead.
/// The tour of the empty graph is empty and complete.
pub fn nearest_neighbor_tour<Graph: StaticGraph>(
    graph: &Graph,
    start: &Graph::Node,
) -> Tour<Graph::Node> {
    let start = match resolve_start_node(graph, start) {
        Some(start) => start,
        None => {
            return Tour {
                order: Vec::new(),
                complete: true,
            }
        }
    };

    let mut visited = BitVector::new(graph.node_count());
    let mut order = vec![start];
    visited.insert(start.as_usize());
    let mut current = start;

    while order.len() < graph.node_count() {
        let mut best: Option<(Graph::Weight, NodeIndex)> = None;
        for neighbor in graph.neighbors(current) {
            if visited.contains(neighbor.node_id.as_usize()) {
                continue;
            }
            let weight = graph.edge(neighbor.edge_id).weight;
            // Neighbors come in canonical order, so only strictly smaller weights replace the best.
            if best.map_or(true, |(best_weight, _)| weight < best_weight) {
                best = Some((weight, neighbor.node_id));
            }
        }

        if let Some((_, next)) = best {
            visited.insert(next.as_usize());
            order.push(next);
            current = next;
            continue;
        }

        let path = match path_to_nearest_unvisited(graph, current, &visited) {
            Some(path) => path,
            None => {
                debug!(
                    "Nearest neighbor tour stops at {:?} with {} of {} nodes visited",
                    graph.node_label(current),
                    order.len(),
                    graph.node_count()
                );
                return Tour {
                    order: graph.node_labels(order),
                    complete: false,
                };
            }
        };

        debug!(
            "No unvisited neighbor of {:?}, following a shortest path of {} hops",
            graph.node_label(current),
            path.len()
        );
        for node in path {
            if visited.insert(node.as_usize()) {
                order.push(node);
            }
            current = node;
        }
    }

    Tour {
        order: graph.node_labels(order),
        complete: true,
    }
}

/// Returns the nodes after `source` on a shortest path in hops to the nearest unvisited node,
/// or `None` if no unvisited node is reachable.
/// Among equally near unvisited nodes, the canonically first one is chosen.
fn path_to_nearest_unvisited<Graph: StaticGraph>(
    graph: &Graph,
    source: NodeIndex,
    visited: &BitVector,
) -> Option<Vec<NodeIndex>> {
    let tree = shortest_path_tree(graph, source, |_| 1usize);
    let target = graph
        .node_indices()
        .filter_map(|node| {
            if visited.contains(node.as_usize()) {
                None
            } else {
                tree.distances[node.as_usize()].map(|distance| (distance, node))
            }
        })
        .min()
        .map(|(_, node)| node)?;

    let mut path = vec![target];
    let mut current = target;
    while let Some(predecessor) = Option::<NodeIndex>::from(tree.predecessors[current]) {
        if predecessor == source {
            break;
        }
        path.push(predecessor);
        current = predecessor;
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::{color_count, greedy_coloring, nearest_neighbor_tour, Tour};
    use crate::algo::predefined_graphs::{
        create_complete_graph, create_cycle_graph, create_random_graph, create_star_graph,
    };
    use crate::implementation::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_coloring_star_and_complete_graph() {
        let star = create_star_graph(5).unwrap();
        let coloring = greedy_coloring(&star);
        assert_eq!(coloring[&0], 0);
        assert!((1..=5).all(|leaf| coloring[&leaf] == 1));
        assert_eq!(color_count(&coloring), 2);

        let complete = create_complete_graph(6).unwrap();
        assert_eq!(color_count(&greedy_coloring(&complete)), 6);
    }

    #[test]
    fn test_coloring_order_by_degree() {
        // Node 4 has the highest degree and is colored first.
        let graph: Graph<u32> =
            Graph::build(1..=5, vec![(4, 1), (4, 2), (4, 3), (1, 2), (5, 5)]).unwrap();
        let coloring = greedy_coloring(&graph);
        assert_eq!(coloring[&4], 0);
        assert_eq!(coloring[&1], 1);
        assert_eq!(coloring[&2], 2);
        assert_eq!(coloring[&3], 1);
        assert_eq!(coloring[&5], 0);
    }

    #[test]
    fn test_coloring_is_proper_on_random_graphs() {
        let mut random = StdRng::seed_from_u64(23);
        for _ in 0..20 {
            let graph = create_random_graph(30, 0.2, &mut random).unwrap();
            let coloring = greedy_coloring(&graph);
            assert_eq!(coloring.len(), 30);
            for (a, b, _) in graph.edges() {
                assert_ne!(coloring[a], coloring[b], "edge ({}, {})", a, b);
            }
        }
        assert!(greedy_coloring(&create_cycle_graph(0).unwrap()).is_empty());
    }

    #[test]
    fn test_tour_prefers_light_edges() {
        let graph: Graph<u32> = Graph::build(
            1..=5,
            vec![(1, 2, 2.0), (1, 3, 5.0), (2, 4, 1.0), (3, 4, 2.0), (4, 5, 3.0)],
        )
        .unwrap();
        assert_eq!(
            nearest_neighbor_tour(&graph, &1),
            Tour {
                order: vec![1, 2, 4, 3, 5],
                complete: true
            }
        );
    }

    #[test]
    fn test_tour_follows_shortest_path_at_dead_end() {
        // At 2, all neighbors are visited, so the tour walks back through 1 to reach 3.
        let graph: Graph<u32> = Graph::build(1..=4, vec![(1, 2), (1, 3), (3, 4)]).unwrap();
        let tour = nearest_neighbor_tour(&graph, &1);
        assert_eq!(tour.order, vec![1, 2, 3, 4]);
        assert!(tour.complete);

        let star = create_star_graph(3).unwrap();
        let tour = nearest_neighbor_tour(&star, &1);
        assert_eq!(tour.order, vec![1, 0, 2, 3]);
        assert!(tour.complete);
    }

    #[test]
    fn test_tour_stops_at_component_boundary() {
        let graph: Graph<u32> = Graph::build(1..=4, vec![(1, 2), (3, 4)]).unwrap();
        let tour = nearest_neighbor_tour(&graph, &1);
        assert_eq!(tour.order, vec![1, 2]);
        assert!(!tour.complete);

        let tour = nearest_neighbor_tour(&graph, &99);
        assert_eq!(tour.order, vec![1, 2]);

        let empty: Graph<u32> = Graph::build(Vec::new(), Vec::<(u32, u32)>::new()).unwrap();
        assert_eq!(nearest_neighbor_tour(&empty, &1).order, Vec::<u32>::new());
    }

    #[test]
    fn test_tour_visits_each_node_once() {
        let mut random = StdRng::seed_from_u64(4);
        for _ in 0..20 {
            let graph = create_random_graph(20, 0.15, &mut random).unwrap();
            let tour = nearest_neighbor_tour(&graph, &0);
            let mut sorted = tour.order.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), tour.order.len());
            assert_eq!(tour.complete, tour.order.len() == 20);
        }
    }
}
