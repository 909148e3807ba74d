use crate::input::{load_graph, GraphInput};
use crate::util::{format_list, log_heading};
use crate::CliOptions;
use clap::Parser;
use colored::Colorize;
use labgraph::algo::hamiltonian::{
    hamiltonian_cycle, hamiltonian_path, HamiltonianConfig, HamiltonianResult,
    DEFAULT_HAMILTONIAN_NODE_LIMIT,
};
use labgraph::{Graph, NodeLabel};
use log::{info, warn};
use std::fmt::Display;

#[derive(Parser)]
pub struct HamiltonianCommand {
    #[clap(flatten)]
    pub input: GraphInput,

    #[clap(long, help = "Search for a Hamiltonian path instead of a cycle")]
    pub path: bool,

    #[clap(
        long,
        default_value_t = DEFAULT_HAMILTONIAN_NODE_LIMIT,
        help = "Graphs with more nodes are still searched, but a warning is emitted since the search may take exponential time"
    )]
    pub node_limit: usize,
}

fn log_advisory<Node>(result: &HamiltonianResult<Node>) {
    if let Some(advisory) = &result.advisory {
        warn!(
            "{}",
            format!(
                "The graph has {} nodes, more than the limit of {}. The search may take very long.",
                advisory.node_count, advisory.node_limit
            )
            .yellow()
        );
    }
}

/// Searches for a Hamiltonian cycle, and for a Hamiltonian path if there is no cycle.
pub fn log_hamiltonian<Node: NodeLabel + Display>(graph: &Graph<Node>, config: &HamiltonianConfig) {
    log_heading("Hamiltonian");

    let cycle = hamiltonian_cycle(graph, config);
    log_advisory(&cycle);
    if let Some(cycle) = cycle.walk {
        info!("Hamiltonian cycle: {}", format_list(&cycle));
        return;
    }

    let path = hamiltonian_path(graph, config);
    match path.walk {
        Some(path) => info!("Hamiltonian path, but no cycle: {}", format_list(&path)),
        None => info!("{}", "No Hamiltonian cycle or path exists".yellow()),
    }
}

pub fn search_hamiltonian(_options: &CliOptions, subcommand: &HamiltonianCommand) -> crate::Result<()> {
    let loaded = load_graph(&subcommand.input)?;
    let config = HamiltonianConfig {
        node_limit: subcommand.node_limit,
    };

    let (kind, result) = if subcommand.path {
        ("path", hamiltonian_path(&loaded.graph, &config))
    } else {
        ("cycle", hamiltonian_cycle(&loaded.graph, &config))
    };
    log_advisory(&result);
    match result.walk {
        Some(walk) => info!("Hamiltonian {}: {}", kind, format_list(&walk)),
        None => info!("No Hamiltonian {} exists", kind),
    }
    Ok(())
}
