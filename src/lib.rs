//! envcheck - Fail fast when required environment variables are missing.
//!
//! Checks that a list of required names all have non-empty values in a
//! source (the process environment by default), reports the ones that
//! don't, and optionally ends the process with status 1.
//!
//! # Modules
//!
//! - [`check`] - Checker, options, results and the `check_env*` entry points
//! - [`cli`] - Command-line interface and argument parsing
//! - [`env_file`] - dotenv files as check sources
//! - [`error`] - Error types and result aliases
//! - [`report`] - Diagnostic formatting and sinks
//! - [`source`] - Key-value sources and source resolution
//!
//! # Example
//!
//! ```
//! use envcheck::{check_env_safe, CheckOptions, Source};
//!
//! let source: Source = [("API_KEY", "k")].into_iter().collect();
//! let result = check_env_safe(
//!     ["API_KEY", "DATABASE_URL"],
//!     &CheckOptions::new().source(source),
//! );
//!
//! assert!(!result.success());
//! assert_eq!(result.missing(), ["DATABASE_URL"]);
//! ```
//!
//! At the top of `main`, [`check_env`] with default options reads the
//! process environment and exits with status 1 if anything is missing:
//!
//! ```no_run
//! envcheck::check_env(["DATABASE_URL", "API_KEY"], &envcheck::CheckOptions::new());
//! ```

pub mod check;
pub mod cli;
pub mod env_file;
pub mod error;
pub mod report;
pub mod source;

pub use check::{
    check_env, check_env_safe, check_env_source, evaluate, CheckOptions, CheckResult, Checker,
    Verdict, MISSING_EXIT_CODE,
};
pub use env_file::{load_env_file, parse_env_str};
pub use error::{EnvcheckError, Result};
pub use report::{
    report, DiagnosticSink, Disposition, MemorySink, ReportFormat, StderrSink, TracingSink,
};
pub use source::{resolve_source, Source};
