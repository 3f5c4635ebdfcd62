//! # distkit-cli
//!
//! Command-line front end for the distkit manifest toolkit. Parses the
//! command line, sets up logging, and dispatches to the command handlers.

use clap::{Parser, Subcommand};
use distkit_core::error::DistResult;
use std::path::PathBuf;
use tracing::{error, info};

mod commands;
mod output;

use commands::CommandContext;

/// Declarative distribution manifest toolkit
#[derive(Parser)]
#[command(name = "distkit", version, about = "Parse, validate, and emit distribution metadata")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter dist.toml in the current directory
    Init,
    /// Validate and fully resolve the manifest
    Check,
    /// Print a summary of the resolved metadata
    Show,
    /// Emit the JSON metadata document
    Emit {
        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the package name
        #[arg(long = "set-name", value_name = "NAME")]
        set_name: Option<String>,
        /// Override the package version
        #[arg(long = "set-version", value_name = "VERSION")]
        set_version: Option<String>,
        /// Override the package summary
        #[arg(long = "set-summary", value_name = "TEXT")]
        set_summary: Option<String>,
    },
    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting distkit v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run_cli(cli) {
        let formatter = output::errors::ErrorFormatter::new();
        eprintln!("{}", formatter.format_error(&err));
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> DistResult<()> {
    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        distkit_core::error::DistError::io("Failed to create async runtime".to_string(), e)
    })?;

    rt.block_on(async {
        let ctx = CommandContext::new()?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("distkit encountered an unexpected error: {}", panic_info);
        eprintln!("distkit crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/distkit-rs/distkit/issues");
        eprintln!("Error: {}", panic_info);
    }));
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "distkit={level},distkit_core={level},distkit_manifest={level}"
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
