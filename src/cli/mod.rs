//! Command-line interface for envcheck.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The check command built on the library entry points

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::{CheckCommand, CommandResult};

/// Exit status for usage and env file errors.
pub const ERROR_EXIT_CODE: u8 = 2;
