use crate::algo::traversal::PreOrderBfs;
use crate::error::{ErrorKind, Result};
use crate::index::{GraphIndex, NodeIndex};
use crate::interface::StaticGraph;
use bitvector::BitVector;
use log::trace;

/// Returns the nodes with odd degree in canonical order.
pub fn odd_degree_nodes<Graph: StaticGraph>(graph: &Graph) -> Vec<Graph::Node> {
    graph.node_labels(odd_degree_node_indices(graph))
}

fn odd_degree_node_indices<Graph: StaticGraph>(graph: &Graph) -> Vec<NodeIndex> {
    graph
        .node_indices()
        .filter(|&node| graph.degree(node) % 2 == 1)
        .collect()
}

/// Returns true if all nodes with positive degree lie in the same connected component.
fn edges_are_connected<Graph: StaticGraph>(graph: &Graph) -> bool {
    let mut active_nodes = graph.node_indices().filter(|&node| graph.degree(node) > 0);
    let start = match active_nodes.next() {
        Some(start) => start,
        None => return true,
    };

    let bfs = PreOrderBfs::new(graph, start);
    let reached = bfs.filter(|&node| graph.degree(node) > 0).count();
    reached == 1 + active_nodes.count()
}

/// Returns true if the graph has an Eulerian circuit.
///
/// Only the subgraph induced by the nodes with positive degree is considered.
/// If that subgraph is empty, the graph is Eulerian.
/// Otherwise it is Eulerian if it is connected and every node has even degree.
pub fn is_eulerian<Graph: StaticGraph>(graph: &Graph) -> bool {
    graph.node_indices().all(|node| graph.degree(node) % 2 == 0) && edges_are_connected(graph)
}

/// Returns true if the graph has an open Eulerian trail, i.e. if exactly two nodes have odd degree
/// and the subgraph induced by the nodes with positive degree is connected.
pub fn has_eulerian_trail<Graph: StaticGraph>(graph: &Graph) -> bool {
    odd_degree_node_indices(graph).len() == 2 && edges_are_connected(graph)
}

/// Computes an Eulerian circuit as a sequence of edge traversals `(from, to)`.
///
/// The circuit starts and ends at the canonically first node with positive degree.
/// If the graph has no edges, the circuit is empty.
/// Fails with [ErrorKind::NotEulerian] if [is_eulerian] does not hold.
pub fn eulerian_circuit<Graph: StaticGraph>(
    graph: &Graph,
) -> Result<Vec<(Graph::Node, Graph::Node)>> {
    if !is_eulerian(graph) {
        return Err(ErrorKind::NotEulerian.into());
    }

    Ok(match graph.node_indices().find(|&node| graph.degree(node) > 0) {
        Some(start) => label_walk(graph, hierholzer(graph, start)),
        None => Vec::new(),
    })
}

/// Computes an open Eulerian trail as a sequence of edge traversals `(from, to)`.
///
/// The trail starts at the canonically first node with odd degree and ends at the other one.
/// Fails with [ErrorKind::NoEulerianTrail] if [has_eulerian_trail] does not hold.
pub fn eulerian_trail<Graph: StaticGraph>(
    graph: &Graph,
) -> Result<Vec<(Graph::Node, Graph::Node)>> {
    if !has_eulerian_trail(graph) {
        return Err(ErrorKind::NoEulerianTrail.into());
    }

    let start = odd_degree_node_indices(graph)[0];
    Ok(label_walk(graph, hierholzer(graph, start)))
}

fn label_walk<Graph: StaticGraph>(
    graph: &Graph,
    walk: Vec<(NodeIndex, NodeIndex)>,
) -> Vec<(Graph::Node, Graph::Node)> {
    walk.into_iter()
        .map(|(from, to)| (graph.node_label(from).clone(), graph.node_label(to).clone()))
        .collect()
}

/// Hierholzer's algorithm with an explicit stack.
///
/// The stack holds the current walk, each node together with the node it was entered from.
/// Whenever the top node has no unused edge left, it is popped and the edge it was entered by is prepended to the result.
/// This splices the sub-circuits found at dead ends into the final walk.
/// The caller must ensure that an Eulerian walk from `start` exists.
fn hierholzer<Graph: StaticGraph>(graph: &Graph, start: NodeIndex) -> Vec<(NodeIndex, NodeIndex)> {
    let mut used_edges = BitVector::new(graph.edge_count());
    let mut next_neighbor = vec![0usize; graph.node_count()];
    let mut stack: Vec<(NodeIndex, Option<NodeIndex>)> = vec![(start, None)];
    let mut walk = Vec::with_capacity(graph.edge_count());

    while let Some(&(node, entered_from)) = stack.last() {
        let neighbors = graph.neighbors(node);
        let position = &mut next_neighbor[node.as_usize()];
        while *position < neighbors.len()
            && used_edges.contains(neighbors[*position].edge_id.as_usize())
        {
            *position += 1;
        }

        if let Some(neighbor) = neighbors.get(*position) {
            used_edges.insert(neighbor.edge_id.as_usize());
            trace!("Extending walk by {:?} -> {:?}", node, neighbor.node_id);
            stack.push((neighbor.node_id, Some(node)));
        } else {
            stack.pop();
            if let Some(from) = entered_from {
                walk.push((from, node));
            }
        }
    }

    walk.reverse();
    debug_assert_eq!(walk.len(), graph.edge_count());
    walk
}

#[cfg(test)]
mod tests {
    use super::{
        eulerian_circuit, eulerian_trail, has_eulerian_trail, is_eulerian, odd_degree_nodes,
    };
    use crate::algo::predefined_graphs::{create_complete_graph, create_cycle_graph, create_path_graph};
    use crate::error::ErrorKind;
    use crate::implementation::Graph;
    use crate::interface::NodeLabel;
    use std::collections::HashSet;

    fn assert_uses_every_edge_once<N: NodeLabel>(graph: &Graph<N>, walk: &[(N, N)]) {
        assert_eq!(walk.len(), graph.edges().count());
        for window in walk.windows(2) {
            assert_eq!(window[0].1, window[1].0);
        }
        let used: HashSet<_> = walk
            .iter()
            .map(|(a, b)| if a <= b { (a.clone(), b.clone()) } else { (b.clone(), a.clone()) })
            .collect();
        assert_eq!(used.len(), walk.len());
        for (a, b) in &used {
            assert!(graph.weight(a, b).is_some());
        }
    }

    #[test]
    fn test_four_cycle_is_eulerian() {
        let graph: Graph<u32> =
            Graph::build(vec![1, 2, 3, 4], vec![(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();

        assert!(is_eulerian(&graph));
        assert!(!has_eulerian_trail(&graph));
        let circuit = eulerian_circuit(&graph).unwrap();
        assert_eq!(circuit, vec![(1, 2), (2, 3), (3, 4), (4, 1)]);
        assert_uses_every_edge_once(&graph, &circuit);
    }

    #[test]
    fn test_circuit_splices_sub_circuits() {
        // Two triangles sharing node 1, plus a self-loop on 3.
        let graph: Graph<u32> = Graph::build(
            vec![1, 2, 3, 4, 5],
            vec![(1, 2), (2, 3), (3, 1), (1, 4), (4, 5), (5, 1), (3, 3)],
        )
        .unwrap();

        assert!(is_eulerian(&graph));
        let circuit = eulerian_circuit(&graph).unwrap();
        assert_uses_every_edge_once(&graph, &circuit);
        assert_eq!(circuit.first().unwrap().0, 1);
        assert_eq!(circuit.last().unwrap().1, 1);
    }

    #[test]
    fn test_complete_graphs() {
        for node_amount in 3..9 {
            let graph = create_complete_graph(node_amount).unwrap();
            assert_eq!(is_eulerian(&graph), node_amount % 2 == 1);
            if node_amount % 2 == 1 {
                let circuit = eulerian_circuit(&graph).unwrap();
                assert_uses_every_edge_once(&graph, &circuit);
                assert_eq!(circuit.first().unwrap().0, circuit.last().unwrap().1);
            } else {
                assert!(matches!(
                    eulerian_circuit(&graph).unwrap_err().kind(),
                    ErrorKind::NotEulerian
                ));
            }
        }
    }

    #[test]
    fn test_isolated_nodes_are_ignored() {
        let graph: Graph<u32> =
            Graph::build(vec![1, 2, 3, 4, 9], vec![(2, 3), (3, 4), (4, 2)]).unwrap();
        assert!(is_eulerian(&graph));
        assert_eq!(eulerian_circuit(&graph).unwrap().first().unwrap().0, 2);

        let edgeless: Graph<u32> = Graph::build(vec![1, 2], Vec::<(u32, u32)>::new()).unwrap();
        assert!(is_eulerian(&edgeless));
        assert!(eulerian_circuit(&edgeless).unwrap().is_empty());
    }

    #[test]
    fn test_disconnected_even_graph_is_not_eulerian() {
        let graph: Graph<u32> = Graph::build(
            1..=6,
            vec![(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)],
        )
        .unwrap();
        assert!(!is_eulerian(&graph));
        assert!(eulerian_circuit(&graph).is_err());
    }

    #[test]
    fn test_eulerian_trail() {
        let graph = create_path_graph(5).unwrap();
        assert!(!is_eulerian(&graph));
        assert!(has_eulerian_trail(&graph));
        assert_eq!(odd_degree_nodes(&graph), vec![0, 4]);
        let trail = eulerian_trail(&graph).unwrap();
        assert_eq!(trail, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);

        let house: Graph<char> = Graph::build(
            vec!['a', 'b', 'c', 'd', 'e'],
            vec![('a', 'b'), ('b', 'c'), ('c', 'd'), ('d', 'a'), ('a', 'c'), ('c', 'e'), ('e', 'd')],
        )
        .unwrap();
        assert_eq!(odd_degree_nodes(&house), vec!['a', 'd']);
        let trail = eulerian_trail(&house).unwrap();
        assert_uses_every_edge_once(&house, &trail);
        assert_eq!(trail.first().unwrap().0, 'a');
        assert_eq!(trail.last().unwrap().1, 'd');

        assert!(matches!(
            eulerian_trail(&create_cycle_graph(4).unwrap()).unwrap_err().kind(),
            ErrorKind::NoEulerianTrail
        ));
    }
}
