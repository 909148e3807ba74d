#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod demo;
mod euler;
mod generate;
mod greedy;
mod hamiltonian;
mod input;
mod metrics;
mod parse;
mod report;
mod shortest_path;
mod traverse;
mod util;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    links {
        Graph(labgraph::error::Error, labgraph::error::ErrorKind);
        Notation(parse::Error, parse::ErrorKind);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }
    }
}

#[derive(Parser)]
#[clap(name = "labgraph", version = env!("CARGO_PKG_VERSION"), author = "Sebastian Schmidt <sebastian.schmidt@helsinki.fi>")]
pub struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
pub enum Command {
    #[clap(
        about = "Runs all analyses on the input graph: traversals, metrics, Eulerian check, Hamiltonian search and greedy heuristics."
    )]
    Report(report::ReportCommand),
    #[clap(about = "Prints the breadth first order of the component of the start node.")]
    Bfs(traverse::BfsCommand),
    #[clap(about = "Prints the depth first preorder of the component of the start node.")]
    Dfs(traverse::DfsCommand),
    #[clap(
        about = "Prints node and edge counts, degrees, components with their radius, diameter, center and eccentricities, and clustering coefficients."
    )]
    Metrics(metrics::MetricsCommand),
    #[clap(about = "Checks if the input graph is Eulerian and prints an Eulerian circuit or trail.")]
    Euler(euler::EulerCommand),
    #[clap(about = "Searches for a Hamiltonian cycle or path by backtracking.")]
    Hamiltonian(hamiltonian::HamiltonianCommand),
    #[clap(about = "Computes shortest paths from a source node with Dijkstra's algorithm.")]
    ShortestPath(shortest_path::ShortestPathCommand),
    #[clap(about = "Colors the input graph greedily, processing nodes by descending degree.")]
    Color(greedy::ColorCommand),
    #[clap(about = "Builds a nearest neighbor tour from the start node.")]
    Tour(greedy::TourCommand),
    /// Runs the laboratory examples on hardcoded graphs.
    Demo(demo::DemoCommand),
    /// Generates a graph of a parameterisable class in bracketed notation.
    Generate(generate::GenerateCommand),
}

// The main is unpacked from an error-chain macro.
// Using just the macro makes IntelliJ complain that there would be no main.
// The real main (programmed manually) is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) {
    // Fails only if a logger was initialised before.
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Could not initialise logging: {}", error);
    }

    info!("Logging initialised successfully");
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level);

    match &options.subcommand {
        Command::Report(subcommand) => report::report(options, subcommand),
        Command::Bfs(subcommand) => traverse::breadth_first_search(options, subcommand),
        Command::Dfs(subcommand) => traverse::depth_first_search(options, subcommand),
        Command::Metrics(subcommand) => metrics::compute_metrics(options, subcommand),
        Command::Euler(subcommand) => euler::check_eulerian(options, subcommand),
        Command::Hamiltonian(subcommand) => hamiltonian::search_hamiltonian(options, subcommand),
        Command::ShortestPath(subcommand) => {
            shortest_path::compute_shortest_path(options, subcommand)
        }
        Command::Color(subcommand) => greedy::color(options, subcommand),
        Command::Tour(subcommand) => greedy::tour(options, subcommand),
        Command::Demo(subcommand) => demo::run_demo(options, subcommand),
        Command::Generate(subcommand) => generate::generate(options, subcommand),
    }?;

    info!("Done");
    Ok(())
}
