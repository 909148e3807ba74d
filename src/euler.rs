use crate::input::{load_graph, GraphInput};
use crate::util::{format_list, format_walk, log_heading};
use crate::CliOptions;
use clap::Parser;
use colored::Colorize;
use labgraph::algo::eulerian::{
    eulerian_circuit, eulerian_trail, has_eulerian_trail, is_eulerian, odd_degree_nodes,
};
use labgraph::{Graph, NodeLabel};
use log::info;
use std::fmt::Display;

#[derive(Parser)]
pub struct EulerCommand {
    #[clap(flatten)]
    pub input: GraphInput,
}

pub fn log_eulerian<Node: NodeLabel + Display>(graph: &Graph<Node>) -> crate::Result<()> {
    log_heading("Eulerian");

    if is_eulerian(graph) {
        info!("The graph is {}", "Eulerian".green());
        info!("Eulerian circuit: {}", format_walk(&eulerian_circuit(graph)?));
        return Ok(());
    }

    info!("The graph is {}", "not Eulerian".yellow());
    let odd_nodes = odd_degree_nodes(graph);
    if !odd_nodes.is_empty() {
        info!("Nodes with odd degree: {}", format_list(&odd_nodes));
    }
    if has_eulerian_trail(graph) {
        info!("Eulerian trail: {}", format_walk(&eulerian_trail(graph)?));
    } else if odd_nodes.len() <= 2 {
        info!("The edges are not connected");
    }
    Ok(())
}

pub fn check_eulerian(_options: &CliOptions, subcommand: &EulerCommand) -> crate::Result<()> {
    let loaded = load_graph(&subcommand.input)?;
    log_eulerian(&loaded.graph)
}
