use crate::input::{load_graph, GraphInput};
use crate::util::{format_list, log_heading};
use crate::CliOptions;
use clap::Parser;
use labgraph::algo::traversal::{bfs, dfs_iterative, dfs_recursive};
use labgraph::{Graph, NodeLabel};
use log::info;
use std::fmt::Display;

#[derive(Parser)]
pub struct BfsCommand {
    #[clap(flatten)]
    pub input: GraphInput,

    #[clap(
        short,
        long,
        help = "The start node. Defaults to the first listed node, and falls back to the smallest node if not part of the graph"
    )]
    pub start: Option<String>,
}

#[derive(Parser)]
pub struct DfsCommand {
    #[clap(flatten)]
    pub input: GraphInput,

    #[clap(
        short,
        long,
        help = "The start node. Defaults to the first listed node, and falls back to the smallest node if not part of the graph"
    )]
    pub start: Option<String>,

    #[clap(long, help = "Use the recursive instead of the stack based depth first search")]
    pub recursive: bool,
}

pub fn log_traversals<Node: NodeLabel + Display>(graph: &Graph<Node>, start: &Node) {
    log_heading("Traversals");
    info!("BFS from {}: {}", start, format_list(bfs(graph, start)));
    info!(
        "DFS iterative from {}: {}",
        start,
        format_list(dfs_iterative(graph, start))
    );
    info!(
        "DFS recursive from {}: {}",
        start,
        format_list(dfs_recursive(graph, start))
    );
}

pub fn breadth_first_search(_options: &CliOptions, subcommand: &BfsCommand) -> crate::Result<()> {
    let loaded = load_graph(&subcommand.input)?;
    let start = loaded.start_or_first(&subcommand.start);
    info!(
        "BFS from {}: {}",
        start,
        format_list(bfs(&loaded.graph, &start))
    );
    Ok(())
}

pub fn depth_first_search(_options: &CliOptions, subcommand: &DfsCommand) -> crate::Result<()> {
    let loaded = load_graph(&subcommand.input)?;
    let start = loaded.start_or_first(&subcommand.start);
    let order = if subcommand.recursive {
        dfs_recursive(&loaded.graph, &start)
    } else {
        dfs_iterative(&loaded.graph, &start)
    };
    info!("DFS from {}: {}", start, format_list(order));
    Ok(())
}
