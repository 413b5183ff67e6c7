//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stratum - Granular template hierarchy resolution for page requests.
#[derive(Debug, Parser)]
#[command(name = "stratum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .stratum/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the template selected for a request
    Resolve(RequestArgs),

    /// Show every evaluated view, its candidates and the recorded hierarchy
    Explain(RequestArgs),
}

/// Arguments shared by the request-driven commands.
#[derive(Debug, Clone, clap::Args)]
pub struct RequestArgs {
    /// Request description file (YAML)
    #[arg(value_name = "REQUEST")]
    pub request: PathBuf,

    /// Treat these templates as present instead of probing the template
    /// directories (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub available: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
