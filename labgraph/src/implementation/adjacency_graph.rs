use crate::error::{ErrorKind, Result};
use crate::index::{EdgeIndex, GraphIndex, GraphIndices, NodeIndex};
use crate::interface::{
    Edge, EdgeSpec, EdgeWeight, GraphBase, ImmutableGraphContainer, NavigableGraph, Neighbor,
    NodeLabel,
};
use log::debug;
use std::collections::HashMap;

/// An immutable undirected graph stored as adjacency lists.
///
/// Nodes are indexed in ascending order of their labels, edges in ascending order of their endpoint indices.
/// The adjacency list of each node is sorted by neighbor index.
/// Self-loops are allowed, duplicate edges are not.
#[derive(Debug, Clone)]
pub struct Graph<Node, Weight = f64> {
    nodes: Vec<Node>,
    node_index: HashMap<Node, NodeIndex>,
    edges: Vec<Edge<Weight>>,
    adjacency: Vec<Vec<Neighbor>>,
}

impl<Node: NodeLabel, Weight: EdgeWeight> Graph<Node, Weight> {
    /// Builds a graph from a node list and an edge list.
    ///
    /// Edges without a weight get the weight one.
    /// Fails if the node list contains duplicates, if an edge references a node that is not in the node list,
    /// if an edge is given twice (in any orientation) or if a weight is negative or not comparable.
    pub fn build<Nodes, Edges, E>(nodes: Nodes, edges: Edges) -> Result<Self>
    where
        Nodes: IntoIterator<Item = Node>,
        Edges: IntoIterator<Item = E>,
        E: Into<EdgeSpec<Node, Weight>>,
    {
        let mut nodes: Vec<_> = nodes.into_iter().collect();
        nodes.sort();
        if let Some(window) = nodes.windows(2).find(|window| window[0] == window[1]) {
            return Err(ErrorKind::DuplicateNode(format!("{:?}", window[0])).into());
        }

        let node_index: HashMap<_, _> = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.clone(), NodeIndex::from(index)))
            .collect();

        let mut edge_list = Vec::new();
        for edge in edges {
            let EdgeSpec { from, to, weight } = edge.into();
            let a = *node_index
                .get(&from)
                .ok_or_else(|| ErrorKind::UnknownNode(format!("{:?}", from)))?;
            let b = *node_index
                .get(&to)
                .ok_or_else(|| ErrorKind::UnknownNode(format!("{:?}", to)))?;
            let weight = weight.unwrap_or_else(Weight::one);
            if !weight.is_valid_weight() {
                return Err(ErrorKind::InvalidWeight(
                    format!("{:?}", from),
                    format!("{:?}", to),
                    format!("{:?}", weight),
                )
                .into());
            }

            edge_list.push(Edge {
                from_node: a.min(b),
                to_node: a.max(b),
                weight,
            });
        }

        edge_list.sort_by_key(|edge| (edge.from_node, edge.to_node));
        if let Some(window) = edge_list.windows(2).find(|window| {
            window[0].from_node == window[1].from_node && window[0].to_node == window[1].to_node
        }) {
            return Err(ErrorKind::DuplicateEdge(
                format!("{:?}", nodes[window[0].from_node]),
                format!("{:?}", nodes[window[0].to_node]),
            )
            .into());
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        for (index, edge) in edge_list.iter().enumerate() {
            let edge_id = EdgeIndex::from(index);
            adjacency[edge.from_node].push(Neighbor {
                edge_id,
                node_id: edge.to_node,
            });
            if !edge.is_self_loop() {
                adjacency[edge.to_node].push(Neighbor {
                    edge_id,
                    node_id: edge.from_node,
                });
            }
        }
        for neighbors in &mut adjacency {
            neighbors.sort_by_key(|neighbor| neighbor.node_id);
        }

        debug!(
            "Built graph with {} nodes and {} edges",
            nodes.len(),
            edge_list.len()
        );
        Ok(Self {
            nodes,
            node_index,
            edges: edge_list,
            adjacency,
        })
    }

    /// Returns an iterator over the node labels in canonical order.
    /// The iterator can be recreated any number of times and always yields the same sequence.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Returns an iterator over the edges as `(a, b, weight)` with `a <= b`, in canonical order.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node, Weight)> + '_ {
        self.edges.iter().map(move |edge| {
            (
                &self.nodes[edge.from_node],
                &self.nodes[edge.to_node],
                edge.weight,
            )
        })
    }

    /// Returns the neighbors of the given node in canonical order.
    /// If the node is not part of the graph, the iterator is empty.
    pub fn neighbors_of(&self, node: &Node) -> impl Iterator<Item = &Node> + '_ {
        let neighbors: &[Neighbor] = match self.node_index.get(node) {
            Some(&node_id) => &self.adjacency[node_id],
            None => &[],
        };
        neighbors
            .iter()
            .map(move |neighbor| &self.nodes[neighbor.node_id])
    }

    /// Returns the weight of the edge `{a, b}`, or `None` if there is no such edge.
    pub fn weight(&self, a: &Node, b: &Node) -> Option<Weight> {
        let a = self.node_index(a)?;
        let b = self.node_index(b)?;
        self.edge_between(a, b)
            .map(|edge_id| self.edges[edge_id].weight)
    }

    /// Returns the degree of the given node, where a self-loop counts twice.
    /// Nodes that are not part of the graph have degree zero.
    pub fn degree_of(&self, node: &Node) -> usize {
        self.node_index(node)
            .map(|node_id| self.degree(node_id))
            .unwrap_or(0)
    }
}

impl<Node: NodeLabel, Weight: EdgeWeight> GraphBase for Graph<Node, Weight> {
    type Node = Node;
    type Weight = Weight;
}

impl<Node: NodeLabel, Weight: EdgeWeight> ImmutableGraphContainer for Graph<Node, Weight> {
    fn node_indices(&self) -> GraphIndices<NodeIndex> {
        GraphIndices::from((0, self.nodes.len()))
    }

    fn edge_indices(&self) -> GraphIndices<EdgeIndex> {
        GraphIndices::from((0, self.edges.len()))
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn node_label(&self, node_id: NodeIndex) -> &Node {
        &self.nodes[node_id]
    }

    fn node_index(&self, label: &Node) -> Option<NodeIndex> {
        self.node_index.get(label).copied()
    }

    fn edge(&self, edge_id: EdgeIndex) -> &Edge<Weight> {
        &self.edges[edge_id]
    }

    fn edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        let neighbors = &self.adjacency[a];
        neighbors
            .binary_search_by_key(&b, |neighbor| neighbor.node_id)
            .ok()
            .map(|position| neighbors[position].edge_id)
    }
}

impl<Node: NodeLabel, Weight: EdgeWeight> NavigableGraph for Graph<Node, Weight> {
    fn neighbors(&self, node_id: NodeIndex) -> &[Neighbor] {
        debug_assert!(node_id.as_usize() < self.nodes.len());
        &self.adjacency[node_id]
    }
}
