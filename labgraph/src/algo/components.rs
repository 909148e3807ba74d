use crate::algo::traversal::PreOrderBfs;
use crate::index::{GraphIndex, NodeIndex};
use crate::interface::StaticGraph;

/// Returns the connected components of the graph as lists of node indices.
///
/// Components are ordered by their canonically first node, and the nodes of each component are listed in breadth first order from that node.
/// The components partition the node set.
pub fn connected_component_indices<Graph: StaticGraph>(graph: &Graph) -> Vec<Vec<NodeIndex>> {
    let mut components = Vec::new();
    let mut bfs = PreOrderBfs::new_without_start(graph);

    for node in graph.node_indices() {
        if bfs.is_discovered(node) {
            continue;
        }

        bfs.continue_traversal_from(node);
        components.push(bfs.by_ref().collect());
    }

    components
}

/// Returns the connected components of the graph as lists of node labels, each sorted canonically.
/// Components are ordered by their canonically first node.
pub fn connected_components<Graph: StaticGraph>(graph: &Graph) -> Vec<Vec<Graph::Node>> {
    connected_component_indices(graph)
        .into_iter()
        .map(|mut component| {
            component.sort_unstable();
            graph.node_labels(component)
        })
        .collect()
}

/// Returns a vector that maps each node to the position of its component in [connected_component_indices].
pub fn component_ids<Graph: StaticGraph>(graph: &Graph) -> Vec<usize> {
    let mut result = vec![0; graph.node_count()];
    for (component_id, component) in connected_component_indices(graph).iter().enumerate() {
        for node in component {
            result[node.as_usize()] = component_id;
        }
    }
    result
}

/// Returns true if the graph is connected.
/// The empty graph is not connected, a graph with a single node is.
pub fn is_connected<Graph: StaticGraph>(graph: &Graph) -> bool {
    match graph.node_indices().next() {
        Some(start) => PreOrderBfs::new(graph, start).count() == graph.node_count(),
        None => false,
    }
}
