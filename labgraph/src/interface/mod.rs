//! The graph traits.
//!
//! The traits are roughly split up by different access types:
//!  - queries for nodes and edges by index (`ImmutableGraphContainer`)
//!  - iterating over the neighbors of a node (`NavigableGraph`)
//!
//! All graphs in this crate are undirected and read-only once built.
//! Node indices are assigned in the canonical order of the node labels, and neighbors are always reported in ascending index order.
//! Hence every algorithm that iterates nodes or neighbors by index does so in canonical order.

use crate::index::{EdgeIndex, GraphIndices, NodeIndex};
use num_traits::{One, Zero};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Sub};

/// An opaque node identifier.
/// Its `Ord` implementation is the canonical ordering used for all tie-breaking.
pub trait NodeLabel: Clone + Ord + Hash + Debug {}
impl<T: Clone + Ord + Hash + Debug> NodeLabel for T {}

/// A numeric edge weight.
pub trait EdgeWeight:
    Copy + PartialOrd + Debug + Zero + One + Add<Output = Self> + Sub<Output = Self>
{
    /// Returns true if this weight can be stored in a graph, i.e. if it is non-negative and finite.
    fn is_valid_weight(&self) -> bool {
        // Both comparisons are false for NaN, and the difference is NaN for infinities.
        *self >= Self::zero() && *self - *self == Self::zero()
    }
}
impl<T: Copy + PartialOrd + Debug + Zero + One + Add<Output = T> + Sub<Output = T>> EdgeWeight
    for T
{
}

/// Contains the associated types of a graph.
pub trait GraphBase {
    /// The identifier type of the nodes.
    type Node: NodeLabel;
    /// The weight type of the edges.
    type Weight: EdgeWeight;
}

/// A container that contains a set of nodes and edges.
///
/// Graphs that implement this trait must have their nodes and edges indexed consecutively,
/// with node indices following the canonical order of the node labels.
pub trait ImmutableGraphContainer: GraphBase {
    /// Returns an iterator over the node indices in this graph.
    fn node_indices(&self) -> GraphIndices<NodeIndex>;

    /// Returns an iterator over the edge indices in this graph.
    fn edge_indices(&self) -> GraphIndices<EdgeIndex>;

    /// Returns the amount of nodes in this graph.
    fn node_count(&self) -> usize;

    /// Returns the amount of edges in this graph.
    fn edge_count(&self) -> usize;

    /// Returns the label of the given node.
    fn node_label(&self, node_id: NodeIndex) -> &Self::Node;

    /// Returns the index of the node with the given label, or `None` if there is no such node.
    fn node_index(&self, label: &Self::Node) -> Option<NodeIndex>;

    /// Returns the endpoints and weight of an edge.
    fn edge(&self, edge_id: EdgeIndex) -> &Edge<Self::Weight>;

    /// Returns the edge between the two given nodes, or `None` if there is no such edge.
    fn edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex>;

    /// Returns true if the graph contains an edge `{a, b}`.
    fn contains_edge_between(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.edge_between(a, b).is_some()
    }

    /// Returns true if the graph contains a node with the given label.
    fn contains_node(&self, label: &Self::Node) -> bool {
        self.node_index(label).is_some()
    }

    /// Returns the labels of the given nodes in the same order.
    fn node_labels<Nodes: IntoIterator<Item = NodeIndex>>(&self, nodes: Nodes) -> Vec<Self::Node> {
        nodes
            .into_iter()
            .map(|node_id| self.node_label(node_id).clone())
            .collect()
    }

    /// Returns true if the graph is empty, i.e. contains no nodes or edges.
    fn is_empty(&self) -> bool {
        // Zero nodes must imply zero edges.
        debug_assert!(self.node_count() != 0 || self.edge_count() == 0);
        self.node_count() == 0
    }
}

/// A graph that can be navigated, i.e. that can iterate the neighbors of its nodes.
pub trait NavigableGraph: ImmutableGraphContainer {
    /// Returns the neighbors of the given node, ordered ascending by node index.
    /// A self-loop is listed once.
    fn neighbors(&self, node_id: NodeIndex) -> &[Neighbor];

    /// Returns the degree of a node, where a self-loop counts twice.
    fn degree(&self, node_id: NodeIndex) -> usize {
        let neighbors = self.neighbors(node_id);
        neighbors.len()
            + neighbors
                .iter()
                .filter(|neighbor| neighbor.node_id == node_id)
                .count()
    }

    /// Returns true if the given node has an edge to itself.
    fn has_self_loop(&self, node_id: NodeIndex) -> bool {
        self.neighbors(node_id)
            .binary_search_by_key(&node_id, |neighbor| neighbor.node_id)
            .is_ok()
    }

    /// Returns an iterator over the neighbors of the given node, skipping the node itself.
    fn proper_neighbors(&self, node_id: NodeIndex) -> ProperNeighbors<'_> {
        ProperNeighbors {
            node_id,
            neighbors: self.neighbors(node_id).iter(),
        }
    }
}

/// A graph implementing all common graph traits.
/// This is a useful shortcut for generic type bounds.
pub trait StaticGraph: ImmutableGraphContainer + NavigableGraph {}
impl<T: ImmutableGraphContainer + NavigableGraph> StaticGraph for T {}

/// An undirected edge represented as a pair of node indices with `from_node <= to_node`, together with its weight.
#[derive(Debug, PartialEq, Clone)]
pub struct Edge<Weight> {
    /// The endpoint with the smaller index.
    pub from_node: NodeIndex,
    /// The endpoint with the larger index.
    pub to_node: NodeIndex,
    /// The weight of this edge.
    pub weight: Weight,
}

impl<Weight> Edge<Weight> {
    /// Returns the endpoint of this edge that is not `node_id`.
    /// For a self-loop, this is `node_id` itself.
    pub fn opposite(&self, node_id: NodeIndex) -> NodeIndex {
        debug_assert!(node_id == self.from_node || node_id == self.to_node);
        if node_id == self.from_node {
            self.to_node
        } else {
            self.from_node
        }
    }

    /// Returns true if this edge connects a node to itself.
    pub fn is_self_loop(&self) -> bool {
        self.from_node == self.to_node
    }
}

/// The neighbor of a node, given as the edge used to reach the neighbor node as well as the neighbor node itself.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Neighbor {
    /// The edge used to reach the neighboring node.
    pub edge_id: EdgeIndex,
    /// The neighboring node.
    pub node_id: NodeIndex,
}

/// Iterator over the neighbors of a node that are not the node itself.
pub struct ProperNeighbors<'a> {
    node_id: NodeIndex,
    neighbors: std::slice::Iter<'a, Neighbor>,
}

impl<'a> Iterator for ProperNeighbors<'a> {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        let node_id = self.node_id;
        self.neighbors
            .by_ref()
            .find(|neighbor| neighbor.node_id != node_id)
            .copied()
    }
}

/// An edge as given to [`Graph::build`](crate::Graph::build), with labels instead of indices and an optional weight.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec<Node, Weight> {
    /// One endpoint.
    pub from: Node,
    /// The other endpoint.
    pub to: Node,
    /// The weight, or `None` for the default weight of one.
    pub weight: Option<Weight>,
}

impl<Node, Weight> EdgeSpec<Node, Weight> {
    /// Creates a new edge specification.
    pub fn new(from: Node, to: Node, weight: Option<Weight>) -> Self {
        Self { from, to, weight }
    }
}

impl<Node, Weight> From<(Node, Node)> for EdgeSpec<Node, Weight> {
    fn from((from, to): (Node, Node)) -> Self {
        Self::new(from, to, None)
    }
}

impl<Node, Weight> From<(Node, Node, Weight)> for EdgeSpec<Node, Weight> {
    fn from((from, to, weight): (Node, Node, Weight)) -> Self {
        Self::new(from, to, Some(weight))
    }
}
