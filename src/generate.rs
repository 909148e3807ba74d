use crate::parse::format_graph_notation;
use crate::CliOptions;
use clap::{ArgEnum, Parser};
use labgraph::algo::predefined_graphs::{
    create_complete_graph, create_cycle_graph, create_path_graph, create_random_graph,
    create_random_weighted_graph, create_star_graph,
};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufWriter, Write};

#[derive(ArgEnum, Clone, Copy, Debug)]
pub enum GraphClass {
    Cycle,
    Path,
    Complete,
    Star,
    Random,
}

#[derive(Parser)]
pub struct GenerateCommand {
    #[clap(arg_enum, help = "The class of the generated graph")]
    pub class: GraphClass,

    #[clap(
        short,
        long,
        help = "The amount of nodes. For stars, the amount of leaves"
    )]
    pub nodes: usize,

    #[clap(
        short,
        long,
        default_value_t = 0.5,
        help = "The probability of each edge in a random graph"
    )]
    pub probability: f64,

    #[clap(
        long,
        help = "The maximum weight of an edge in a random graph. If not given, the graph is unweighted"
    )]
    pub max_weight: Option<u32>,

    #[clap(long, default_value_t = 0, help = "The seed of the random generator")]
    pub seed: u64,

    #[clap(
        short,
        long,
        help = "The file the graph is written to in bracketed notation. If not given, it is written to stdout"
    )]
    pub output: Option<String>,
}

pub fn generate(_options: &CliOptions, subcommand: &GenerateCommand) -> crate::Result<()> {
    if !(0.0..=1.0).contains(&subcommand.probability) {
        error!(
            "The probability must be between 0 and 1, but is {}",
            subcommand.probability
        );
        return Err(crate::ErrorKind::Parameter.into());
    }

    let mut random = StdRng::seed_from_u64(subcommand.seed);
    let node_amount = subcommand.nodes;
    let graph = match (subcommand.class, subcommand.max_weight) {
        (GraphClass::Cycle, _) => create_cycle_graph(node_amount)?,
        (GraphClass::Path, _) => create_path_graph(node_amount)?,
        (GraphClass::Complete, _) => create_complete_graph(node_amount)?,
        (GraphClass::Star, _) => create_star_graph(node_amount)?,
        (GraphClass::Random, None) => {
            create_random_graph(node_amount, subcommand.probability, &mut random)?
        }
        (GraphClass::Random, Some(max_weight)) => create_random_weighted_graph(
            node_amount,
            subcommand.probability,
            max_weight,
            &mut random,
        )?,
    };
    info!("Generated a {:?} graph", subcommand.class);

    let notation = format_graph_notation(&graph);
    if let Some(output) = &subcommand.output {
        info!("Writing graph to {:?}", output);
        write_notation(BufWriter::new(File::create(output)?), &notation)?;
    } else {
        println!("{}", notation);
    }
    Ok(())
}

/// Writes the notation as a single line and flushes, such that write errors are not lost when the writer is dropped.
fn write_notation<W: Write>(mut output: W, notation: &str) -> std::io::Result<()> {
    writeln!(output, "{}", notation)?;
    output.flush()
}
