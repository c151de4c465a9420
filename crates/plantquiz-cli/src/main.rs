//! plantquiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "plantquiz",
    version,
    about = "Plant species recognition quiz"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz round in the terminal
    Play {
        /// Only quiz plants you previously got wrong
        #[arg(long)]
        practice: bool,

        /// Path to the plant catalog CSV
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Directory for progress and mistake files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Root directory of the per-plant image folders
        #[arg(long)]
        images_dir: Option<PathBuf>,

        /// Minimum similarity (0-100) for an answer to count
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the high score and session history
    Stats {
        /// Directory for progress and mistake files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List or reset the plants you got wrong
    Mistakes {
        /// Directory for progress and mistake files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Forget all recorded mistakes
        #[arg(long)]
        clear: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check one answer against accepted names
    Check {
        /// The answer to check
        #[arg(long)]
        input: String,

        /// An accepted name (repeatable)
        #[arg(long, required = true)]
        accepted: Vec<String>,

        /// Minimum similarity (0-100) for a match
        #[arg(long, default_value = "85", value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: u8,
    },

    /// Validate a plant catalog CSV
    Validate {
        /// Path to the plant catalog CSV
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Create a starter config and example catalog
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("plantquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            practice,
            catalog,
            data_dir,
            images_dir,
            threshold,
            config,
        } => commands::play::execute(practice, catalog, data_dir, images_dir, threshold, config),
        Commands::Stats {
            data_dir,
            format,
            config,
        } => commands::stats::execute(data_dir, format, config),
        Commands::Mistakes {
            data_dir,
            clear,
            config,
        } => commands::mistakes::execute(data_dir, clear, config),
        Commands::Check {
            input,
            accepted,
            threshold,
        } => commands::check::execute(input, accepted, threshold),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
