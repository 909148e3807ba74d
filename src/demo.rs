use crate::euler::log_eulerian;
use crate::hamiltonian::log_hamiltonian;
use crate::metrics::log_metrics;
use crate::shortest_path::log_shortest_paths;
use crate::traverse::log_traversals;
use crate::CliOptions;
use clap::Parser;
use colored::Colorize;
use labgraph::algo::hamiltonian::HamiltonianConfig;
use labgraph::algo::predefined_graphs::create_cycle_graph;
use labgraph::Graph;
use log::info;

#[derive(Parser)]
pub struct DemoCommand {}

fn log_example(title: &str) {
    info!("");
    info!("{}", format!("##### {} #####", title).cyan().bold());
}

/// Runs the laboratory examples on hardcoded graphs.
pub fn run_demo(_options: &CliOptions, _subcommand: &DemoCommand) -> crate::Result<()> {
    log_example("Traversals of a six node graph");
    let graph: Graph<u32> = Graph::build(
        1..=6,
        vec![(1, 2), (1, 3), (2, 4), (3, 5), (4, 6), (5, 6)],
    )?;
    log_traversals(&graph, &1);

    log_example("Metrics of the cycle on six nodes");
    log_metrics(&create_cycle_graph(6)?);

    log_example("Euler on the cycle on four nodes");
    let graph: Graph<u32> = Graph::build(1..=4, vec![(1, 2), (2, 3), (3, 4), (4, 1)])?;
    log_eulerian(&graph)?;

    log_example("Hamiltonian cycle on the cycle on five nodes");
    log_hamiltonian(&create_cycle_graph(5)?, &HamiltonianConfig::default());

    log_example("Dijkstra on a weighted five node graph");
    let graph: Graph<u32> = Graph::build(
        1..=5,
        vec![
            (1, 2, 2.0),
            (1, 3, 5.0),
            (2, 4, 1.0),
            (3, 4, 2.0),
            (4, 5, 3.0),
        ],
    )?;
    log_shortest_paths(&graph, &1, Some(&5))?;

    Ok(())
}
