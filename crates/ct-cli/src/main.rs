//! CLI frontend for the combat tracker.

mod commands;
mod roster;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "ct",
    about = "Combat tracker for tabletop encounters",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log every action and roll to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that rolls initiative.
#[derive(Args)]
struct RollOptions {
    /// Roster file (JSON)
    roster: PathBuf,

    /// RNG seed for deterministic rolls (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Combatants sharing a definition share one roll
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    group: bool,

    /// Advantage rule: definition, always, never
    #[arg(long, default_value = "definition")]
    advantage: String,

    /// Sides on the initiative die
    #[arg(long, default_value = "20")]
    die: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll initiative for a roster and print the turn order
    Roll {
        #[command(flatten)]
        options: RollOptions,

        /// Print the running encounter as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run an interactive combat from a roster
    Run {
        #[command(flatten)]
        options: RollOptions,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll { options, json } => commands::roll::run(&options, json),
        Commands::Run { options } => commands::run::run(&options),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

