//! Reverb Taps CLI - delay-line sizing for a comb/allpass reverb.

mod commands;
mod logging;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reverb-taps")]
#[command(author, version, about = "Reverb delay-line sizing", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the frame count of every delay line and the running total (default)
    Plan(commands::plan::PlanArgs),

    /// Print headroom-sized buffer lengths for every delay line
    Buffers(commands::buffers::BuffersArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli
        .command
        .unwrap_or_else(|| Commands::Plan(commands::plan::PlanArgs::default()))
    {
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Buffers(args) => commands::buffers::run(args),
    }
}
