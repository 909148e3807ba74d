use crate::input::{load_graph, GraphInput};
use crate::util::{format_list, format_map, log_heading};
use crate::CliOptions;
use clap::Parser;
use labgraph::algo::dijkstra::{dijkstra, reconstruct_path};
use labgraph::{Graph, NodeLabel};
use log::info;
use std::fmt::Display;

#[derive(Parser)]
pub struct ShortestPathCommand {
    #[clap(flatten)]
    pub input: GraphInput,

    #[clap(short, long, help = "The source node")]
    pub source: String,

    #[clap(
        short,
        long,
        help = "The target node. If not given, the distances to all nodes are printed"
    )]
    pub target: Option<String>,
}

/// Logs the distances from `source` to all nodes, and the shortest path to `target` if given.
pub fn log_shortest_paths<Node: NodeLabel + Display>(
    graph: &Graph<Node>,
    source: &Node,
    target: Option<&Node>,
) -> crate::Result<()> {
    log_heading("Shortest paths");
    let shortest_paths = dijkstra(graph, source)?;

    info!(
        "Distances from {}: {}",
        source,
        format_map(shortest_paths.distances().iter().map(|(node, distance)| {
            let distance = if distance.is_finite() {
                distance.to_string()
            } else {
                "unreachable".to_string()
            };
            (node, distance)
        }))
    );

    if let Some(target) = target {
        match reconstruct_path(&shortest_paths, target)? {
            Some(path) => info!(
                "Shortest path from {} to {} of length {}: {}",
                source,
                target,
                shortest_paths.distance(target).unwrap_or_default(),
                format_list(&path)
            ),
            None => info!("There is no path from {} to {}", source, target),
        }
    }
    Ok(())
}

pub fn compute_shortest_path(
    _options: &CliOptions,
    subcommand: &ShortestPathCommand,
) -> crate::Result<()> {
    let loaded = load_graph(&subcommand.input)?;
    log_shortest_paths(&loaded.graph, &subcommand.source, subcommand.target.as_ref())
}
