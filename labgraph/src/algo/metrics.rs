use crate::algo::components::connected_component_indices;
use crate::index::{GraphIndex, NodeIndex};
use crate::interface::StaticGraph;
use std::collections::VecDeque;

/// The metrics of a single connected component, computed on the subgraph induced by its nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentMetrics<Node> {
    /// The nodes of the component in canonical order.
    pub nodes: Vec<Node>,
    /// The eccentricity of each node of the component, in canonical order.
    pub eccentricity: Vec<(Node, usize)>,
    /// The minimum eccentricity.
    pub radius: usize,
    /// The maximum eccentricity.
    pub diameter: usize,
    /// The nodes whose eccentricity equals the radius, in canonical order.
    pub center: Vec<Node>,
    /// The mean hop distance over all pairs of distinct nodes, or `None` for a singleton component.
    pub average_shortest_path_length: Option<f64>,
}

/// The metrics of a whole graph.
///
/// Distance based metrics are only reported per component, as they are not defined for disconnected graphs.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphMetrics<Node> {
    /// The amount of nodes.
    pub num_nodes: usize,
    /// The amount of edges.
    pub num_edges: usize,
    /// The degree of each node in canonical order, where a self-loop counts twice.
    pub degrees: Vec<(Node, usize)>,
    /// The local clustering coefficient of each node in canonical order.
    pub clustering: Vec<(Node, f64)>,
    /// The mean local clustering coefficient, or zero for the empty graph.
    pub average_clustering: f64,
    /// The metrics of each connected component, ordered by their canonically first node.
    pub components: Vec<ComponentMetrics<Node>>,
}

impl<Node> GraphMetrics<Node> {
    /// Returns the amount of connected components.
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Returns the radius of the graph, or `None` if the graph is not connected.
    pub fn radius(&self) -> Option<usize> {
        self.single_component().map(|component| component.radius)
    }

    /// Returns the diameter of the graph, or `None` if the graph is not connected.
    pub fn diameter(&self) -> Option<usize> {
        self.single_component()
            .map(|component| component.diameter)
    }

    fn single_component(&self) -> Option<&ComponentMetrics<Node>> {
        match self.components.as_slice() {
            [component] => Some(component),
            _ => None,
        }
    }
}

/// Computes all metrics of the given graph.
pub fn graph_metrics<Graph: StaticGraph>(graph: &Graph) -> GraphMetrics<Graph::Node> {
    let label = |node: NodeIndex| graph.node_label(node).clone();

    let degrees = graph
        .node_indices()
        .map(|node| (label(node), graph.degree(node)))
        .collect();
    let clustering = graph
        .node_indices()
        .map(|node| (label(node), clustering_coefficient(graph, node)))
        .collect();

    let components = connected_component_indices(graph)
        .into_iter()
        .map(|mut component| {
            component.sort_unstable();
            component_metrics(graph, &component)
        })
        .collect();

    GraphMetrics {
        num_nodes: graph.node_count(),
        num_edges: graph.edge_count(),
        degrees,
        clustering,
        average_clustering: average_clustering(graph),
        components,
    }
}

fn component_metrics<Graph: StaticGraph>(
    graph: &Graph,
    component: &[NodeIndex],
) -> ComponentMetrics<Graph::Node> {
    let mut eccentricity = Vec::with_capacity(component.len());
    let mut distance_sum = 0usize;
    for &node in component {
        let distances = hop_distances(graph, node);
        let reachable = distances.iter().flatten();
        eccentricity.push(reachable.clone().copied().max().unwrap_or(0));
        distance_sum += reachable.sum::<usize>();
    }

    let radius = eccentricity.iter().copied().min().unwrap_or(0);
    let diameter = eccentricity.iter().copied().max().unwrap_or(0);
    let center = component
        .iter()
        .zip(&eccentricity)
        .filter(|(_, &eccentricity)| eccentricity == radius)
        .map(|(&node, _)| node);
    let pair_count = component.len() * component.len().saturating_sub(1);

    ComponentMetrics {
        nodes: graph.node_labels(component.iter().copied()),
        center: graph.node_labels(center),
        eccentricity: component
            .iter()
            .zip(eccentricity)
            .map(|(&node, eccentricity)| (graph.node_label(node).clone(), eccentricity))
            .collect(),
        radius,
        diameter,
        average_shortest_path_length: if pair_count > 0 {
            Some(distance_sum as f64 / pair_count as f64)
        } else {
            None
        },
    }
}

/// Returns the hop distance from `source` to each node, or `None` for nodes in other components.
pub fn hop_distances<Graph: StaticGraph>(graph: &Graph, source: NodeIndex) -> Vec<Option<usize>> {
    let mut distances = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();
    distances[source.as_usize()] = Some(0);
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        let distance = distances[node.as_usize()].unwrap_or(0) + 1;
        for neighbor in graph.neighbors(node) {
            let entry = &mut distances[neighbor.node_id.as_usize()];
            if entry.is_none() {
                *entry = Some(distance);
                queue.push_back(neighbor.node_id);
            }
        }
    }

    distances
}

/// Returns the eccentricity of the given node, i.e. its maximum hop distance to any node in its component.
/// A singleton has eccentricity zero.
pub fn eccentricity<Graph: StaticGraph>(graph: &Graph, node: NodeIndex) -> usize {
    hop_distances(graph, node)
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0)
}

/// Returns the local clustering coefficient of the given node.
///
/// This is the amount of edges between neighbors of the node divided by the amount of pairs of neighbors.
/// Self-loops are ignored, and nodes with less than two neighbors have coefficient zero.
pub fn clustering_coefficient<Graph: StaticGraph>(graph: &Graph, node: NodeIndex) -> f64 {
    let neighbors: Vec<_> = graph
        .proper_neighbors(node)
        .map(|neighbor| neighbor.node_id)
        .collect();
    let degree = neighbors.len();
    if degree < 2 {
        return 0.0;
    }

    let mut links = 0usize;
    for (position, &a) in neighbors.iter().enumerate() {
        for &b in &neighbors[position + 1..] {
            if graph.contains_edge_between(a, b) {
                links += 1;
            }
        }
    }

    links as f64 / (degree * (degree - 1) / 2) as f64
}

/// Returns the mean local clustering coefficient over all nodes, or zero for the empty graph.
pub fn average_clustering<Graph: StaticGraph>(graph: &Graph) -> f64 {
    if graph.is_empty() {
        return 0.0;
    }

    graph
        .node_indices()
        .map(|node| clustering_coefficient(graph, node))
        .sum::<f64>()
        / graph.node_count() as f64
}

#[cfg(test)]
mod tests {
    use super::{average_clustering, clustering_coefficient, eccentricity, graph_metrics};
    use crate::algo::predefined_graphs::{create_complete_graph, create_cycle_graph, create_star_graph};
    use crate::implementation::Graph;
    use crate::interface::ImmutableGraphContainer;

    #[test]
    fn test_single_node_metrics() {
        let graph: Graph<u32> = Graph::build(vec![1], Vec::<(u32, u32)>::new()).unwrap();
        let metrics = graph_metrics(&graph);

        assert_eq!(metrics.num_nodes, 1);
        assert_eq!(metrics.num_edges, 0);
        assert_eq!(metrics.num_components(), 1);
        assert_eq!(metrics.radius(), Some(0));
        assert_eq!(metrics.diameter(), Some(0));
        assert_eq!(metrics.average_clustering, 0.0);
        assert_eq!(metrics.components[0].center, vec![1]);
        assert_eq!(metrics.components[0].average_shortest_path_length, None);
    }

    #[test]
    fn test_empty_graph_metrics() {
        let graph: Graph<u32> = Graph::build(Vec::new(), Vec::<(u32, u32)>::new()).unwrap();
        let metrics = graph_metrics(&graph);

        assert_eq!(metrics.num_nodes, 0);
        assert_eq!(metrics.num_components(), 0);
        assert_eq!(metrics.radius(), None);
        assert_eq!(metrics.average_clustering, 0.0);
        assert!(metrics.degrees.is_empty());
    }

    #[test]
    fn test_cycle_metrics() {
        let graph = create_cycle_graph(6).unwrap();
        let metrics = graph_metrics(&graph);
        let component = &metrics.components[0];

        assert_eq!(metrics.num_edges, 6);
        assert_eq!(metrics.radius(), Some(3));
        assert_eq!(metrics.diameter(), Some(3));
        assert_eq!(component.center, (0..6).collect::<Vec<_>>());
        // Distances from each node: 1, 1, 2, 2, 3.
        assert_eq!(component.average_shortest_path_length, Some(1.8));
        assert_eq!(metrics.average_clustering, 0.0);
        assert!(metrics.degrees.iter().all(|&(_, degree)| degree == 2));
    }

    #[test]
    fn test_star_metrics() {
        let graph = create_star_graph(4).unwrap();
        let metrics = graph_metrics(&graph);

        assert_eq!(metrics.radius(), Some(1));
        assert_eq!(metrics.diameter(), Some(2));
        assert_eq!(metrics.components[0].center, vec![0]);
        assert_eq!(eccentricity(&graph, graph.node_index(&3).unwrap()), 2);
    }

    #[test]
    fn test_disconnected_metrics_per_component() {
        let graph: Graph<&str> = Graph::build(
            vec!["a", "b", "c", "x", "y"],
            vec![("a", "b"), ("b", "c"), ("x", "y")],
        )
        .unwrap();
        let metrics = graph_metrics(&graph);

        assert_eq!(metrics.num_components(), 2);
        assert_eq!(metrics.radius(), None);
        assert_eq!(metrics.diameter(), None);
        assert_eq!(metrics.components[0].nodes, vec!["a", "b", "c"]);
        assert_eq!(metrics.components[0].diameter, 2);
        assert_eq!(metrics.components[0].center, vec!["b"]);
        assert_eq!(
            metrics.components[0].eccentricity,
            vec![("a", 2), ("b", 1), ("c", 2)]
        );
        assert_eq!(metrics.components[1].radius, 1);
        assert_eq!(metrics.components[1].average_shortest_path_length, Some(1.0));
    }

    #[test]
    fn test_clustering() {
        let graph: Graph<u32> = Graph::build(
            vec![1, 2, 3, 4],
            vec![(1, 2), (1, 3), (2, 3), (1, 4), (1, 1)],
        )
        .unwrap();
        let node = |label| graph.node_index(&label).unwrap();

        assert!((clustering_coefficient(&graph, node(1)) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(clustering_coefficient(&graph, node(2)), 1.0);
        assert_eq!(clustering_coefficient(&graph, node(4)), 0.0);
        assert!((average_clustering(&graph) - (1.0 / 3.0 + 2.0) / 4.0).abs() < 1e-12);

        assert_eq!(average_clustering(&create_complete_graph(5).unwrap()), 1.0);
    }
}
