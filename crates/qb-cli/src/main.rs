//! CLI frontend for the Questboard trivia board game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(
    name = "qb",
    about = "Questboard — a trivia board game in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Topic to load questions for
        topic: String,

        /// Directory containing `<topic>.json` bank files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Score needed to win
        #[arg(short, long, default_value = "50")]
        target: u32,

        /// RNG seed for a reproducible game
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// List available topics with their question counts
    Topics {
        /// Directory containing `<topic>.json` bank files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show a topic's categories and content findings
    Show {
        /// Topic name
        topic: String,

        /// Directory containing `<topic>.json` bank files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Lint one bank, or every bank in the directory
    Check {
        /// Topic name (default: all topics)
        topic: Option<String>,

        /// Directory containing `<topic>.json` bank files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Print the standard board layout
    Board,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            topic,
            dir,
            target,
            seed,
        } => commands::play::run(&dir, &topic, target, seed),
        Commands::Topics { dir } => commands::topics::run(&dir),
        Commands::Show { topic, dir } => commands::show::run(&dir, &topic),
        Commands::Check { topic, dir } => commands::check::run(&dir, topic.as_deref()),
        Commands::Board => commands::board::run(),
    };

    if let Err(message) = result {
        eprintln!("{}", message.red());
        process::exit(1);
    }
}
