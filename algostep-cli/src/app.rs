use algostep::Algorithm;
use clap::{Parser, Subcommand};

/// algostep - step-by-step traces of classic graph algorithms
#[derive(Debug, Parser)]
#[command(name = "algostep", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available algorithms and preset graphs.
    List,

    /// Run an algorithm on a preset graph and print its trace.
    Run {
        /// Algorithm name, e.g. dijkstra, bridges, topological-kahn.
        #[arg(value_name = "ALGORITHM")]
        algorithm: Algorithm,

        /// Preset graph to run on (see `algostep list`).
        #[arg(short, long, value_name = "NAME")]
        preset: String,

        /// Start vertex id (defaults to 0).
        #[arg(short, long, value_name = "N")]
        start: Option<usize>,

        /// Abort if the trace grows beyond N steps.
        #[arg(long, value_name = "N")]
        max_steps: Option<usize>,

        /// Let Dijkstra run on negative weights instead of rejecting the graph.
        #[arg(long)]
        allow_negative: bool,

        /// Print only the outcome, not every step.
        #[arg(long)]
        summary: bool,
    },
}
