use crate::error::{ErrorKind, Result};
use crate::index::{GraphIndex, NodeIndex, OptionalNodeIndex};
use crate::interface::{Edge, StaticGraph};
use log::trace;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};
use std::fmt::Debug;

mod dijkstra_weight_implementations;

/// A weight type usable in Dijkstra's algorithm.
///
/// Only a partial order is required, such that floating point weights can be used.
/// Graphs never contain NaN weights, so in practice the order is total.
pub trait DijkstraWeight: Copy + PartialOrd + Debug {
    /// The infinity value of this type.
    fn infinity() -> Self;

    /// The zero value of this type.
    fn zero() -> Self;

    /// Adds two weights, clamping at the largest value of the type instead of overflowing.
    fn saturating_add(self, other: Self) -> Self;
}

/// An entry of the priority queue, ordered such that the max-heap `BinaryHeap` pops the smallest distance first.
/// Ties are broken by canonical node order.
#[derive(Debug, Clone, Copy)]
struct QueueEntry<WeightType> {
    distance: WeightType,
    node: NodeIndex,
}

impl<WeightType: PartialOrd> Ord for QueueEntry<WeightType> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<WeightType: PartialOrd> PartialOrd for QueueEntry<WeightType> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<WeightType: PartialOrd> PartialEq for QueueEntry<WeightType> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<WeightType: PartialOrd> Eq for QueueEntry<WeightType> {}

/// The shortest path tree of a single source on the index level.
pub(crate) struct ShortestPathTree<WeightType> {
    /// The distance of each node from the source, `None` if unreachable.
    pub distances: Vec<Option<WeightType>>,
    /// The predecessor of each node on a shortest path from the source, none for the source and unreachable nodes.
    pub predecessors: Vec<OptionalNodeIndex>,
}

/// Runs Dijkstra's algorithm from `source` with the given edge weights.
pub(crate) fn shortest_path_tree<
    Graph: StaticGraph,
    WeightType: DijkstraWeight,
    WeightFunction: Fn(&Edge<Graph::Weight>) -> WeightType,
>(
    graph: &Graph,
    source: NodeIndex,
    weight_of: WeightFunction,
) -> ShortestPathTree<WeightType> {
    let mut distances = vec![None; graph.node_count()];
    let mut predecessors = vec![OptionalNodeIndex::new_none(); graph.node_count()];
    let mut queue = BinaryHeap::new();

    distances[source.as_usize()] = Some(WeightType::zero());
    queue.push(QueueEntry {
        distance: WeightType::zero(),
        node: source,
    });

    while let Some(QueueEntry { distance, node }) = queue.pop() {
        // Skip stale entries of nodes that were already settled with a smaller distance.
        if distances[node.as_usize()].map_or(false, |settled| settled < distance) {
            continue;
        }
        trace!("Settled {:?} at distance {:?}", node, distance);

        for neighbor in graph.neighbors(node) {
            let new_distance = distance.saturating_add(weight_of(graph.edge(neighbor.edge_id)));
            let neighbor_distance = &mut distances[neighbor.node_id.as_usize()];
            if neighbor_distance.map_or(true, |old_distance| new_distance < old_distance) {
                *neighbor_distance = Some(new_distance);
                predecessors[neighbor.node_id] = OptionalNodeIndex::from(node);
                queue.push(QueueEntry {
                    distance: new_distance,
                    node: neighbor.node_id,
                });
            }
        }
    }

    ShortestPathTree {
        distances,
        predecessors,
    }
}

/// The result of a single source shortest path computation.
///
/// Holds the distance of every node of the graph, where unreachable nodes have distance infinity,
/// as well as the predecessor of every reachable node except the source.
/// Integer distances that do not fit the weight type are clamped to its maximum,
/// so reachability is decided by the predecessors and not by comparing against infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<Node, WeightType> {
    source: Node,
    distances: BTreeMap<Node, WeightType>,
    predecessors: BTreeMap<Node, Node>,
}

impl<Node: Ord + Clone, WeightType: DijkstraWeight> ShortestPaths<Node, WeightType> {
    /// Returns the source of the computation.
    pub fn source(&self) -> &Node {
        &self.source
    }

    /// Returns the distance of every node in canonical order.
    /// Unreachable nodes have distance [DijkstraWeight::infinity].
    pub fn distances(&self) -> &BTreeMap<Node, WeightType> {
        &self.distances
    }

    /// Returns the predecessor of every reachable node except the source.
    pub fn predecessors(&self) -> &BTreeMap<Node, Node> {
        &self.predecessors
    }

    /// Returns the distance from the source to the given node, or `None` if the node is unreachable or not part of the graph.
    pub fn distance(&self, node: &Node) -> Option<WeightType> {
        if self.is_reachable(node) {
            self.distances.get(node).copied()
        } else {
            None
        }
    }

    /// Returns true if the given node is reachable from the source.
    pub fn is_reachable(&self, node: &Node) -> bool {
        *node == self.source || self.predecessors.contains_key(node)
    }
}

/// Computes the shortest paths from `source` to all nodes, using the edge weights of the graph.
/// Fails with [ErrorKind::NodeNotFound] if `source` is not part of the graph.
pub fn dijkstra<Graph: StaticGraph>(
    graph: &Graph,
    source: &Graph::Node,
) -> Result<ShortestPaths<Graph::Node, Graph::Weight>>
where
    Graph::Weight: DijkstraWeight,
{
    dijkstra_by(graph, source, |edge| edge.weight)
}

/// Computes the shortest paths from `source` to all nodes, counting each edge as one hop.
/// Fails with [ErrorKind::NodeNotFound] if `source` is not part of the graph.
pub fn dijkstra_hops<Graph: StaticGraph>(
    graph: &Graph,
    source: &Graph::Node,
) -> Result<ShortestPaths<Graph::Node, usize>> {
    dijkstra_by(graph, source, |_| 1)
}

/// Computes the shortest paths from `source` to all nodes, using the weights given by `weight_of`.
/// The weights returned by `weight_of` must be non-negative.
/// Fails with [ErrorKind::NodeNotFound] if `source` is not part of the graph.
pub fn dijkstra_by<
    Graph: StaticGraph,
    WeightType: DijkstraWeight,
    WeightFunction: Fn(&Edge<Graph::Weight>) -> WeightType,
>(
    graph: &Graph,
    source: &Graph::Node,
    weight_of: WeightFunction,
) -> Result<ShortestPaths<Graph::Node, WeightType>> {
    let source_index = graph
        .node_index(source)
        .ok_or_else(|| ErrorKind::NodeNotFound(format!("{:?}", source)))?;
    let tree = shortest_path_tree(graph, source_index, weight_of);

    let distances = graph
        .node_indices()
        .zip(tree.distances)
        .map(|(node, distance)| {
            (
                graph.node_label(node).clone(),
                distance.unwrap_or_else(WeightType::infinity),
            )
        })
        .collect();
    let predecessors = graph
        .node_indices()
        .zip(tree.predecessors)
        .filter_map(|(node, predecessor)| {
            Option::<NodeIndex>::from(predecessor).map(|predecessor| {
                (
                    graph.node_label(node).clone(),
                    graph.node_label(predecessor).clone(),
                )
            })
        })
        .collect();

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
    })
}

/// Walks the predecessors backwards from `target` to the source of `shortest_paths`.
///
/// Returns `Ok(None)` if `target` is unreachable, and the single node path if `target` is the source.
/// Fails with [ErrorKind::NodeNotFound] if `target` is not part of the graph.
pub fn reconstruct_path<Node: Ord + Clone + Debug, WeightType: DijkstraWeight>(
    shortest_paths: &ShortestPaths<Node, WeightType>,
    target: &Node,
) -> Result<Option<Vec<Node>>> {
    if !shortest_paths.distances.contains_key(target) {
        return Err(ErrorKind::NodeNotFound(format!("{:?}", target)).into());
    }
    if !shortest_paths.is_reachable(target) {
        return Ok(None);
    }

    let mut path = vec![target.clone()];
    let mut current = target;
    while *current != shortest_paths.source {
        match shortest_paths.predecessors.get(current) {
            Some(predecessor) => {
                path.push(predecessor.clone());
                current = predecessor;
            }
            None => return Ok(None),
        }
    }
    path.reverse();
    Ok(Some(path))
}

/// Computes a shortest path from `source` to `target` together with its length.
///
/// Returns `Ok(None)` if `target` is unreachable from `source`.
/// Fails with [ErrorKind::NodeNotFound] if `source` or `target` is not part of the graph.
pub fn shortest_path<Graph: StaticGraph>(
    graph: &Graph,
    source: &Graph::Node,
    target: &Graph::Node,
) -> Result<Option<(Graph::Weight, Vec<Graph::Node>)>>
where
    Graph::Weight: DijkstraWeight,
{
    let shortest_paths = dijkstra(graph, source)?;
    let path = reconstruct_path(&shortest_paths, target)?;
    Ok(path.and_then(|path| {
        shortest_paths
            .distance(target)
            .map(|distance| (distance, path))
    }))
}
