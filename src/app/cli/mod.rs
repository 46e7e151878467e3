//! CLI Adapter.

mod detect;
mod doctor;
mod install;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::config::LOG_ENV;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "ghflow")]
#[command(version)]
#[command(
    about = "Install GitHub workflow commands into a project's .claude/ directory",
    long_about = None
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install commands, hooks and settings into the current project
    #[clap(visible_alias = "i")]
    Install {
        /// Checkout of the command bundle (defaults to $GHFLOW_SOURCE, then the embedded bundle)
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Directory to start the project search from
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Default branch written to settings.toml
        #[arg(long)]
        default_branch: Option<String>,
    },
    /// Check an existing installation
    Doctor {
        /// Directory to start the project search from
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Show the project types detected for the current project
    #[clap(visible_alias = "d")]
    Detect {
        /// Directory to start the project search from
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Install { source, path, default_branch } => {
            install::run_install(source, path, default_branch).map(|_| 0)
        }
        Commands::Doctor { path, strict } => doctor::run_doctor(path, strict),
        Commands::Detect { path, json } => detect::run_detect(path, json).map(|_| 0),
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
