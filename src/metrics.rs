use crate::input::{load_graph, GraphInput};
use crate::util::{format_list, format_map, log_heading};
use crate::CliOptions;
use clap::Parser;
use labgraph::algo::metrics::graph_metrics;
use labgraph::{Graph, NodeLabel};
use log::info;
use std::fmt::Display;

#[derive(Parser)]
pub struct MetricsCommand {
    #[clap(flatten)]
    pub input: GraphInput,
}

pub fn log_metrics<Node: NodeLabel + Display>(graph: &Graph<Node>) {
    log_heading("Metrics");
    let metrics = graph_metrics(graph);

    info!("Nodes: {}", metrics.num_nodes);
    info!("Edges: {}", metrics.num_edges);
    info!(
        "Degrees: {}",
        format_map(metrics.degrees.iter().map(|(node, degree)| (node, degree)))
    );
    if !metrics.degrees.is_empty() {
        let degrees: Vec<_> = metrics
            .degrees
            .iter()
            .map(|&(_, degree)| degree as f64)
            .collect();
        info!(
            "Mean degree: {:.2}, median degree: {}",
            statistical::mean(&degrees),
            statistical::median(&degrees)
        );
    }

    info!("Connected components: {}", metrics.num_components());
    if let (Some(radius), Some(diameter)) = (metrics.radius(), metrics.diameter()) {
        info!("The graph is connected with radius {} and diameter {}", radius, diameter);
    }
    for (index, component) in metrics.components.iter().enumerate() {
        info!(
            " Component {}: {} nodes {}",
            index + 1,
            component.nodes.len(),
            format_list(&component.nodes)
        );
        info!(
            "  radius {}, diameter {}, center {}",
            component.radius,
            component.diameter,
            format_list(&component.center)
        );
        info!(
            "  eccentricity {}",
            format_map(component.eccentricity.iter().map(|(node, e)| (node, e)))
        );
        match component.average_shortest_path_length {
            Some(length) => info!("  average shortest path length {:.4}", length),
            None => info!("  average shortest path length undefined for a single node"),
        }
    }

    info!("Average clustering: {:.4}", metrics.average_clustering);
    info!(
        "Clustering per node: {}",
        format_map(
            metrics
                .clustering
                .iter()
                .map(|(node, coefficient)| (node, format!("{:.4}", coefficient)))
        )
    );
}

pub fn compute_metrics(_options: &CliOptions, subcommand: &MetricsCommand) -> crate::Result<()> {
    let loaded = load_graph(&subcommand.input)?;
    log_metrics(&loaded.graph);
    Ok(())
}
