//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use citylist::output::OutputMode;
use citylist::seed::DEFAULT_SEED_FILE;

/// citylist - Query an in-memory registry of cities
#[derive(Parser, Debug)]
#[command(
    name = "citylist",
    version,
    about = "Query an in-memory registry of cities",
    long_about = "Load cities from a TOML seed file and query them.\n\n\
                  Cities are unique by name and province, and are listed\n\
                  alphabetically by name. The seed file is never modified."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Seed file to load cities from
    #[arg(short, long, global = true, default_value = DEFAULT_SEED_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List cities sorted by name
    List,

    /// Count cities
    Count,

    /// Check whether a city is registered
    Has {
        /// City name
        city: String,

        /// Province name
        province: String,
    },

    /// Report duplicate entries in the seed file
    Validate,

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
        Some(Command::List) => commands::list(&cli.file, output_mode),
        Some(Command::Count) => commands::count(&cli.file, output_mode),
        Some(Command::Has { city, province }) => {
            commands::has(&cli.file, &city, &province, output_mode)
        },
        Some(Command::Validate) => commands::validate(&cli.file, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("citylist v{}", env!("CARGO_PKG_VERSION"));
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
                println!("citylist v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'citylist --help' for usage");
            }
            Ok(())
        },
    }
}
