/// The adjacency list graph that backs all analyses.
pub mod adjacency_graph;

pub use adjacency_graph::Graph;
