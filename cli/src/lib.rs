//! Shared plumbing for the two classifier entry points
//!
//! Both binaries differ only in which scenario they run; argument parsing
//! and logging setup live here.

pub mod scenario;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Command-line arguments shared by both entry points
///
/// With no arguments the built-in reference scenario runs, matching the
/// original wrapper behavior.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// JSON scenario file overriding the built-in reference scenario
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the pickled model file path
    #[arg(long)]
    pub model_file: Option<String>,

    /// Enable debug logging (stderr; stdout carries only the verdict line)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initialize stderr logging
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug level.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
