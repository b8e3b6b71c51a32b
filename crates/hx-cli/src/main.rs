//! Terminal frontend for the Hexagram text adventure.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Save file used when `--save` is not given.
const DEFAULT_SAVE: &str = "hexagram-save.json";

#[derive(Parser)]
#[command(
    name = "hexagram",
    about = "Hexagram: restore the broken disk of six symbols",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively on stdin/stdout
    Play {
        /// Save file to resume from and write to
        #[arg(short, long, default_value = DEFAULT_SAVE)]
        save: PathBuf,

        /// Keep progress in memory only; nothing is written to disk
        #[arg(long)]
        no_save: bool,

        /// Start a new game even if a save file exists
        #[arg(long)]
        fresh: bool,
    },

    /// Delete the save file
    Reset {
        /// Save file to delete
        #[arg(short, long, default_value = DEFAULT_SAVE)]
        save: PathBuf,
    },

    /// Show where a saved game stands
    Status {
        /// Save file to inspect
        #[arg(short, long, default_value = DEFAULT_SAVE)]
        save: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            save,
            no_save,
            fresh,
        } => commands::play::run(&save, no_save, fresh),
        Commands::Reset { save } => commands::reset::run(&save),
        Commands::Status { save } => commands::status::run(&save),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
