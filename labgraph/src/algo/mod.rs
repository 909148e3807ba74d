/// Connected components and connectivity checks.
pub mod components;
/// Dijkstra's shortest path algorithm.
pub mod dijkstra;
/// Algorithms related to Eulerian graphs, i.e. checking for and constructing Eulerian circuits and trails.
pub mod eulerian;
/// Greedy heuristics: vertex coloring and nearest neighbor tours.
pub mod greedy;
/// Backtracking search for Hamiltonian cycles and paths.
pub mod hamiltonian;
/// Distance and clustering metrics of a graph and its components.
pub mod metrics;
/// Algorithms to create certain parameterisable graph classes, like cycles or random graphs.
pub mod predefined_graphs;
/// Algorithms for graph traversals, i.e. preorder breadth and depth first search.
pub mod traversal;
