//! CLI frontend for the Scheideweg branching-narrative engine.

mod commands;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sw",
    about = "Scheideweg — a branching-narrative engine for story graphs",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story on the terminal
    Play {
        /// Story file to play
        story: PathBuf,

        /// Skip the typewriter effect and all pacing delays
        #[arg(long)]
        fast: bool,

        /// Start from a specific scene instead of the story's start
        #[arg(long, value_name = "ID")]
        from: Option<u32>,

        /// End the session when input closes instead of picking option 1
        #[arg(long)]
        halt_on_eof: bool,
    },

    /// Validate a story's structure and report findings
    Check {
        /// Story file to check
        story: PathBuf,
    },

    /// List all scenes in a story
    List {
        /// Story file to list
        story: PathBuf,
    },

    /// Display the choice graph as ASCII
    Graph {
        /// Story file to render
        story: PathBuf,
    },

    /// Write a starter story file
    Init {
        /// Name of the story to create (writes <name>.json)
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            story,
            fast,
            from,
            halt_on_eof,
        } => commands::play::run(&story, fast, from, halt_on_eof),
        Commands::Check { story } => commands::check::run(&story),
        Commands::List { story } => commands::list::run(&story),
        Commands::Graph { story } => commands::graph::run(&story),
        Commands::Init { name } => commands::init::run(&name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
