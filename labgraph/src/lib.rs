//! Analysis of small undirected graphs.
//!
//! A [Graph] is built once from a node list and an edge list and is read-only afterwards.
//! All algorithms in [algo] take a graph by reference and return owned results that do not borrow from the graph.
//!
//! Nodes are identified by arbitrary labels that are ordered, hashable and debug-printable.
//! Whenever an algorithm has to make a choice, e.g. which neighbor to visit first, it picks the canonically smallest label.
//! This makes all results reproducible.
//!
//! ```
//! use labgraph::algo::traversal::{bfs, dfs_iterative};
//! use labgraph::Graph;
//!
//! let graph: Graph<u32> = Graph::build(
//!     1..=6,
//!     vec![(1, 2), (1, 3), (2, 4), (3, 5), (4, 6), (5, 6)],
//! )
//! .unwrap();
//! assert_eq!(bfs(&graph, &1), vec![1, 2, 3, 4, 5, 6]);
//! assert_eq!(dfs_iterative(&graph, &1), vec![1, 2, 4, 6, 5, 3]);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate error_chain;

/// Contains the graph algorithms.
pub mod algo;
/// The error type of this crate.
pub mod error;
/// The graph implementation.
pub mod implementation;
/// Strongly typed node and edge indices.
pub mod index;
/// The graph traits.
pub mod interface;

pub use implementation::Graph;
pub use index::{EdgeIndex, GraphIndex, GraphIndices, NodeIndex, OptionalNodeIndex};
pub use interface::{
    Edge, EdgeSpec, EdgeWeight, GraphBase, ImmutableGraphContainer, NavigableGraph, Neighbor,
    NodeLabel, StaticGraph,
};
