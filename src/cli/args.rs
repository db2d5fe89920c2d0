//! CLI argument definitions.
//!
//! This module defines the CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// envcheck - Fail fast when required environment variables are missing.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "envcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Variable names that must have a non-empty value
    #[arg(value_name = "NAME", conflicts_with = "all")]
    pub names: Vec<String>,

    /// Only check names (and source keys) starting with this prefix
    #[arg(short, long, env = "ENVCHECK_PREFIX")]
    pub prefix: Option<String>,

    /// Check against a dotenv file instead of the process environment
    #[arg(short = 'f', long, env = "ENVCHECK_ENV_FILE", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Require every key of the source to have a value
    #[arg(short, long)]
    pub all: bool,

    /// Report missing variables as a warning and exit 0
    #[arg(short, long)]
    pub warn_only: bool,

    /// Print the result as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
