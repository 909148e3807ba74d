use crate::input::{load_graph, GraphInput};
use crate::util::{format_list, format_map, log_heading};
use crate::CliOptions;
use clap::Parser;
use colored::Colorize;
use labgraph::algo::greedy::{color_count, greedy_coloring, nearest_neighbor_tour};
use labgraph::{Graph, NodeLabel};
use log::info;
use std::fmt::Display;

#[derive(Parser)]
pub struct ColorCommand {
    #[clap(flatten)]
    pub input: GraphInput,
}

#[derive(Parser)]
pub struct TourCommand {
    #[clap(flatten)]
    pub input: GraphInput,

    #[clap(
        short,
        long,
        help = "The start node. Defaults to the first listed node, and falls back to the smallest node if not part of the graph"
    )]
    pub start: Option<String>,
}

pub fn log_coloring<Node: NodeLabel + Display>(graph: &Graph<Node>) {
    let coloring = greedy_coloring(graph);
    info!(
        "Greedy coloring with {} colors: {}",
        color_count(&coloring),
        format_map(&coloring)
    );
}

pub fn log_tour<Node: NodeLabel + Display>(graph: &Graph<Node>, start: &Node) {
    let tour = nearest_neighbor_tour(graph, start);
    if tour.complete {
        info!("Nearest neighbor tour: {}", format_list(&tour.order));
    } else {
        info!(
            "Nearest neighbor tour: {} {}",
            format_list(&tour.order),
            "(incomplete, the remaining nodes are unreachable)".yellow()
        );
    }
}

pub fn log_greedy<Node: NodeLabel + Display>(graph: &Graph<Node>, start: &Node) {
    log_heading("Greedy heuristics");
    log_coloring(graph);
    log_tour(graph, start);
}

pub fn color(_options: &CliOptions, subcommand: &ColorCommand) -> crate::Result<()> {
    let loaded = load_graph(&subcommand.input)?;
    log_coloring(&loaded.graph);
    Ok(())
}

pub fn tour(_options: &CliOptions, subcommand: &TourCommand) -> crate::Result<()> {
    let loaded = load_graph(&subcommand.input)?;
    let start = loaded.start_or_first(&subcommand.start);
    log_tour(&loaded.graph, &start);
    Ok(())
}
