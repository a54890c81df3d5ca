//! CLI Adapter.

mod build;
mod catalog;
mod check;
mod compose;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::app::config::ConfigOptions;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "mjp")]
#[command(version)]
#[command(
    about = "Compose Midjourney prompts from a catalog of prompt fragments",
    long_about = None
)]
struct Cli {
    /// Directory containing prompts.yaml and parameters.yaml
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,
    /// Settings file (default: ./mjp.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a prompt from fragment selectors and parameters
    #[clap(visible_alias = "b")]
    Build(build::BuildArgs),
    /// Browse categories, fragments, parameters and examples
    #[clap(visible_alias = "ls")]
    Catalog {
        #[command(subcommand)]
        command: catalog::CatalogCommands,
    },
    /// Validate prompts.yaml and parameters.yaml
    Check {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Build a prompt interactively
    #[clap(visible_alias = "c")]
    Compose,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = ConfigOptions { config_dir: cli.config_dir, settings: cli.settings };

    let result: Result<i32, AppError> = match cli.command {
        Commands::Build(args) => build::run_build(&config, args).map(|_| 0),
        Commands::Catalog { command } => catalog::run_catalog(&config, command).map(|_| 0),
        Commands::Check { strict } => check::run_check(&config, strict),
        Commands::Compose => compose::run_compose(&config).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
