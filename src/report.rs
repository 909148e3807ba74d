use crate::euler::log_eulerian;
use crate::greedy::log_greedy;
use crate::hamiltonian::log_hamiltonian;
use crate::input::{load_graph, GraphInput};
use crate::metrics::log_metrics;
use crate::traverse::log_traversals;
use crate::CliOptions;
use clap::Parser;
use labgraph::algo::hamiltonian::{HamiltonianConfig, DEFAULT_HAMILTONIAN_NODE_LIMIT};
use labgraph::{Graph, NodeLabel};
use std::fmt::Display;

#[derive(Parser)]
pub struct ReportCommand {
    #[clap(flatten)]
    pub input: GraphInput,

    #[clap(
        long,
        default_value_t = DEFAULT_HAMILTONIAN_NODE_LIMIT,
        help = "Graphs with more nodes are still searched for Hamiltonian cycles and paths, but a warning is emitted"
    )]
    pub node_limit: usize,
}

/// Runs all analyses on the graph, using `start` for traversals and the nearest neighbor tour.
pub fn log_report<Node: NodeLabel + Display>(
    graph: &Graph<Node>,
    start: &Node,
    config: &HamiltonianConfig,
) -> crate::Result<()> {
    log_traversals(graph, start);
    log_metrics(graph);
    log_eulerian(graph)?;
    log_hamiltonian(graph, config);
    log_greedy(graph, start);
    Ok(())
}

pub fn report(_options: &CliOptions, subcommand: &ReportCommand) -> crate::Result<()> {
    let loaded = load_graph(&subcommand.input)?;
    let start = loaded.start_or_first(&None);
    log_report(
        &loaded.graph,
        &start,
        &HamiltonianConfig {
            node_limit: subcommand.node_limit,
        },
    )
}
