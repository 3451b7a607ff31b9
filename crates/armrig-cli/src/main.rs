//! armrig CLI - Command-line interface for arm roll joint twist plans
//!
//! This binary evaluates rig files and prints how a driver joint's twist is
//! distributed across roll joints.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use armrig_cli::commands;
use armrig_core::{DEFAULT_MAX_FRACTION, DEFAULT_MIN_FRACTION};

/// armrig - Roll joint twist distribution
#[derive(Parser)]
#[command(name = "armrig")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the twist plan for a rig file
    Distribute {
        /// Path to the rig file (JSON)
        #[arg(short, long)]
        rig: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the fraction sequence for a roll joint count
    Fractions {
        /// Number of roll joints
        #[arg(short, long)]
        count: usize,

        /// Upper fraction bound
        #[arg(long, default_value_t = DEFAULT_MAX_FRACTION, allow_hyphen_values = true)]
        max: f64,

        /// Lower fraction bound
        #[arg(long, default_value_t = DEFAULT_MIN_FRACTION, allow_hyphen_values = true)]
        min: f64,

        /// Print in pairing order (smallest first)
        #[arg(long)]
        reverse: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a rig file and list its roll joints
    Validate {
        /// Path to the rig file (JSON)
        #[arg(short, long)]
        rig: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Distribute { rig, json, pretty } => {
            commands::distribute::run(&rig, json, pretty)
        }
        Commands::Fractions {
            count,
            max,
            min,
            reverse,
            json,
        } => commands::fractions::run(count, max, min, reverse, json),
        Commands::Validate { rig, json } => commands::validate::run(&rig, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
