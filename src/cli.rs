//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use storypoints::output::OutputMode;

/// storypoints - Story point badges and totals for board exports
#[derive(Parser, Debug)]
#[command(
    name = "storypoints",
    version,
    about = "Story point badges and totals for Trello board exports",
    long_about = "Read story point tokens from card titles and render badges and totals.\n\n\
                  Estimates live in parentheses: (5), (2.5), (?)\n\
                  Used points live in brackets: [3], [?]"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a board export and show badges and per-list totals
    Scan {
        /// Path to a board export JSON file
        board: PathBuf,

        /// Only show the list with this name
        #[arg(short, long)]
        list: Option<String>,
    },

    /// Parse story points from a single card title
    Parse {
        /// The card title
        title: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Scan { board, list }) => commands::scan(&board, list.as_deref(), output_mode),
        Some(Command::Parse { title }) => commands::parse(&title, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("storypoints v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("storypoints v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'storypoints --help' for usage");
                println!("Run 'storypoints scan <export.json>' to annotate a board");
            }
            Ok(())
        },
    }
}
