use crate::index::{GraphIndex, NodeIndex, OptionalNodeIndex};
use crate::interface::{ImmutableGraphContainer, Neighbor, StaticGraph};
use bitvector::BitVector;
use log::debug;
use std::collections::VecDeque;
use std::marker::PhantomData;

/// A preorder breadth first search.
pub type PreOrderBfs<'a, Graph> = PreOrderTraversal<'a, Graph, BfsQueueStrategy>;
/// A preorder depth first search that visits the neighbors of each node in canonical order.
pub type PreOrderDfs<'a, Graph> = PreOrderTraversal<'a, Graph, DfsQueueStrategy>;

/// A generic preorder graph traversal.
/// The traversal is generic over the graph implementation and the order of processing (`QueueStrategy`).
///
/// Moreover, the traversal computes the preorder rank of each visited node.
/// Each node is returned at most once, and only nodes in the connected components of the start nodes are returned.
pub struct PreOrderTraversal<'a, Graph, QueueStrategy> {
    graph: &'a Graph,
    queue: VecDeque<NodeIndex>,
    discovered: BitVector,
    rank: Vec<OptionalNodeIndex>,
    current_rank: usize,
    queue_strategy: PhantomData<QueueStrategy>,
}

impl<'a, Graph: StaticGraph, QueueStrategy: TraversalQueueStrategy>
    PreOrderTraversal<'a, Graph, QueueStrategy>
{
    /// Creates a new traversal that operates on the given graph starting from the given node.
    pub fn new(graph: &'a Graph, start: NodeIndex) -> Self {
        let mut traversal = Self::new_without_start(graph);
        traversal.continue_traversal_from(start);
        traversal
    }

    /// Creates a new traversal that operates on the given graph.
    /// Does not start the traversal.
    pub fn new_without_start(graph: &'a Graph) -> Self {
        Self {
            graph,
            queue: VecDeque::new(),
            discovered: BitVector::new(graph.node_count()),
            rank: vec![OptionalNodeIndex::new_none(); graph.node_count()],
            current_rank: 0,
            queue_strategy: Default::default(),
        }
    }

    /// Resets the traversal to start from the given node.
    pub fn reset(&mut self, start: NodeIndex) {
        self.queue.clear();
        self.discovered.clear();
        for rank in &mut self.rank {
            *rank = OptionalNodeIndex::new_none();
        }
        self.current_rank = 0;
        self.continue_traversal_from(start);
    }

    /// Continues the traversal from the given node without resetting the visited nodes.
    /// Should only be called once the traversal has returned `None`.
    pub fn continue_traversal_from(&mut self, start: NodeIndex) {
        debug_assert!(self.queue.is_empty());
        QueueStrategy::push_start(&mut self.queue, &mut self.discovered, start);
    }

    /// Returns the preorder rank of the given node, or `None` if the node has not yet been visited.
    pub fn rank_of(&self, node: NodeIndex) -> Option<usize> {
        self.rank[node].as_usize()
    }

    /// Returns true if the given node has been visited or is scheduled to be visited.
    pub fn is_discovered(&self, node: NodeIndex) -> bool {
        self.discovered.contains(node.as_usize())
    }
}

impl<'a, Graph: StaticGraph, QueueStrategy: TraversalQueueStrategy> Iterator
    for PreOrderTraversal<'a, Graph, QueueStrategy>
{
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let node = QueueStrategy::pop_next(&mut self.queue, &mut self.discovered)?;
        self.rank[node] = OptionalNodeIndex::from(NodeIndex::from(self.current_rank));
        self.current_rank += 1;
        QueueStrategy::push_neighbors(
            &mut self.queue,
            &mut self.discovered,
            self.graph.neighbors(node),
        );
        Some(node)
    }
}

/// A type that defines the order of node processing in a traversal, i.e. queue-based or stack-based.
pub trait TraversalQueueStrategy {
    /// Schedule the start node of a traversal.
    fn push_start(queue: &mut VecDeque<NodeIndex>, discovered: &mut BitVector, start: NodeIndex);

    /// Remove and return the next node to visit.
    fn pop_next(queue: &mut VecDeque<NodeIndex>, discovered: &mut BitVector)
        -> Option<NodeIndex>;

    /// Schedule the neighbors of a node that was just visited.
    /// The neighbors are given in canonical order.
    fn push_neighbors(
        queue: &mut VecDeque<NodeIndex>,
        discovered: &mut BitVector,
        neighbors: &[Neighbor],
    );
}

/// A queue strategy that works by the first-in first-out principle.
/// Nodes are marked when they are enqueued, so each node is enqueued at most once.
pub struct BfsQueueStrategy;

impl TraversalQueueStrategy for BfsQueueStrategy {
    fn push_start(queue: &mut VecDeque<NodeIndex>, discovered: &mut BitVector, start: NodeIndex) {
        if discovered.insert(start.as_usize()) {
            queue.push_back(start);
        }
    }

    fn pop_next(queue: &mut VecDeque<NodeIndex>, _: &mut BitVector) -> Option<NodeIndex> {
        queue.pop_front()
    }

    fn push_neighbors(
        queue: &mut VecDeque<NodeIndex>,
        discovered: &mut BitVector,
        neighbors: &[Neighbor],
    ) {
        for neighbor in neighbors {
            if discovered.insert(neighbor.node_id.as_usize()) {
                queue.push_back(neighbor.node_id);
            }
        }
    }
}

/// A queue strategy that works by the last-in first-out principle.
///
/// Nodes are marked when they are popped, and neighbors are pushed in reverse canonical order.
/// This yields exactly the order of a recursive depth first search that descends into the neighbors in canonical order.
pub struct DfsQueueStrategy;

impl TraversalQueueStrategy for DfsQueueStrategy {
    fn push_start(queue: &mut VecDeque<NodeIndex>, discovered: &mut BitVector, start: NodeIndex) {
        if !discovered.contains(start.as_usize()) {
            queue.push_back(start);
        }
    }

    fn pop_next(queue: &mut VecDeque<NodeIndex>, discovered: &mut BitVector) -> Option<NodeIndex> {
        while let Some(node) = queue.pop_back() {
            // Nodes may be on the stack multiple times, only the topmost occurrence counts.
            if discovered.insert(node.as_usize()) {
                return Some(node);
            }
        }
        None
    }

    fn push_neighbors(
        queue: &mut VecDeque<NodeIndex>,
        discovered: &mut BitVector,
        neighbors: &[Neighbor],
    ) {
        for neighbor in neighbors.iter().rev() {
            if !discovered.contains(neighbor.node_id.as_usize()) {
                queue.push_back(neighbor.node_id);
            }
        }
    }
}

/// Returns the index of `start`, or of the canonically first node if `start` is not part of the graph.
/// Returns `None` only if the graph is empty.
pub fn resolve_start_node<Graph: ImmutableGraphContainer>(
    graph: &Graph,
    start: &Graph::Node,
) -> Option<NodeIndex> {
    graph.node_index(start).or_else(|| {
        let fallback = graph.node_indices().next();
        if let Some(fallback) = fallback {
            debug!(
                "Start node {:?} is not part of the graph, starting from {:?} instead",
                start,
                graph.node_label(fallback)
            );
        }
        fallback
    })
}

/// Returns the nodes of the connected component of `start` in breadth first order.
///
/// Neighbors are enqueued in canonical order.
/// If `start` is not part of the graph, the canonically first node is used instead.
/// If the graph is empty, the result is empty.
pub fn bfs<Graph: StaticGraph>(graph: &Graph, start: &Graph::Node) -> Vec<Graph::Node> {
    match resolve_start_node(graph, start) {
        Some(start) => graph.node_labels(PreOrderBfs::new(graph, start)),
        None => Vec::new(),
    }
}

/// Returns the nodes of the connected component of `start` in depth first preorder, using an explicit stack.
///
/// The result is identical to [dfs_recursive].
/// If `start` is not part of the graph, the canonically first node is used instead.
pub fn dfs_iterative<Graph: StaticGraph>(graph: &Graph, start: &Graph::Node) -> Vec<Graph::Node> {
    match resolve_start_node(graph, start) {
        Some(start) => graph.node_labels(PreOrderDfs::new(graph, start)),
        None => Vec::new(),
    }
}

/// Returns the nodes of the connected component of `start` in depth first preorder, using recursion.
///
/// The recursion depth is bounded by the size of the component of `start`.
/// If `start` is not part of the graph, the canonically first node is used instead.
pub fn dfs_recursive<Graph: StaticGraph>(graph: &Graph, start: &Graph::Node) -> Vec<Graph::Node> {
    let start = match resolve_start_node(graph, start) {
        Some(start) => start,
        None => return Vec::new(),
    };

    let mut visited = BitVector::new(graph.node_count());
    let mut order = Vec::new();
    dfs_recursive_visit(graph, start, &mut visited, &mut order);
    graph.node_labels(order)
}

fn dfs_recursive_visit<Graph: StaticGraph>(
    graph: &Graph,
    node: NodeIndex,
    visited: &mut BitVector,
    order: &mut Vec<NodeIndex>,
) {
    visited.insert(node.as_usize());
    order.push(node);
    for neighbor in graph.neighbors(node) {
        if !visited.contains(neighbor.node_id.as_usize()) {
            dfs_recursive_visit(graph, neighbor.node_id, visited, order);
        }
    }
}
