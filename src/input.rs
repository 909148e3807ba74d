use crate::parse::parse_graph_notation;
use clap::Args;
use labgraph::{Graph, ImmutableGraphContainer};
use log::info;
use std::io::Read;

#[derive(Args)]
pub struct GraphInput {
    #[clap(
        short,
        long,
        conflicts_with = "input",
        help = "The graph in bracketed notation, e.g. \"{{v1, v2, v3},{(v1, v2), (v2, v3, 2.5)}}\". If neither --graph nor --input is given, the notation is read from stdin"
    )]
    pub graph: Option<String>,

    #[clap(short, long, help = "A file containing the graph in bracketed notation")]
    pub input: Option<String>,
}

/// A graph loaded from the command line, together with the node that was listed first.
pub struct LoadedGraph {
    pub graph: Graph<String>,
    pub first_listed_node: Option<String>,
}

impl LoadedGraph {
    /// Returns `node` if given, and the first listed node otherwise.
    pub fn start_or_first(&self, node: &Option<String>) -> String {
        node.clone()
            .or_else(|| self.first_listed_node.clone())
            .unwrap_or_default()
    }
}

pub fn load_graph(input: &GraphInput) -> crate::Result<LoadedGraph> {
    let raw = if let Some(graph) = &input.graph {
        graph.clone()
    } else if let Some(file) = &input.input {
        info!("Reading graph from {:?}", file);
        std::fs::read_to_string(file)?
    } else {
        info!("Reading graph from stdin");
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        raw
    };

    let parsed = parse_graph_notation(&raw)?;
    let first_listed_node = parsed.nodes.first().cloned();
    let graph = parsed.build()?;
    info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(LoadedGraph {
        graph,
        first_listed_node,
    })
}
