//! The check command.
//!
//! Maps parsed arguments onto the library entry points:
//! plain names use [`Checker::check`], `--warn-only` uses
//! [`Checker::check_safe`] and `--all` uses [`Checker::check_source`].

use std::io::Write;

use crate::check::{CheckOptions, CheckResult, Checker, Verdict};
use crate::cli::args::Cli;
use crate::env_file::load_env_file;
use crate::error::Result;
use crate::report::DiagnosticSink;
use crate::source::Source;

/// Result of command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Derive the result from a check verdict.
    pub fn from_verdict(verdict: &Verdict) -> Self {
        match verdict.exit_status() {
            0 => Self::success(),
            code => Self::failure(code),
        }
    }
}

/// Runs a check described by command-line arguments.
#[derive(Debug)]
pub struct CheckCommand<'a> {
    args: &'a Cli,
}

impl<'a> CheckCommand<'a> {
    /// Create the command for parsed arguments.
    pub fn new(args: &'a Cli) -> Self {
        Self { args }
    }

    fn options(&self) -> CheckOptions {
        let mut options = CheckOptions::new().exit_on_error(!self.args.warn_only);
        if let Some(prefix) = &self.args.prefix {
            options = options.prefix(prefix.clone());
        }
        options
    }

    /// Execute the check.
    ///
    /// Diagnostics go to `sink`; the JSON result, when requested, to `out`.
    /// Missing variables are a failed [`CommandResult`], not an `Err`.
    pub fn execute(
        &self,
        sink: &mut dyn DiagnosticSink,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        let file_source = self
            .args
            .env_file
            .as_deref()
            .map(load_env_file)
            .transpose()?;
        let mut options = self.options();
        let mut checker = Checker::new(sink);

        let verdict = if self.args.all {
            let source = file_source.unwrap_or_else(Source::from_env);
            checker.check_source(&source, &options)
        } else {
            if let Some(source) = file_source {
                options = options.source(source);
            }
            if self.args.warn_only {
                checker.check_safe(&self.args.names, &options)
            } else {
                checker.check(&self.args.names, &options)
            }
        };

        let outcome = CommandResult::from_verdict(&verdict);
        if self.args.json {
            if let Err(e) = write_json(out, verdict.result()) {
                // A failed check keeps its exit status over a stdout failure.
                if outcome.success {
                    return Err(e);
                }
                tracing::warn!("Failed to write JSON result: {}", e);
            }
        }

        Ok(outcome)
    }
}

fn write_json(out: &mut dyn Write, result: &CheckResult) -> Result<()> {
    writeln!(out, "{}", to_json(result)?)?;
    Ok(())
}

fn to_json(result: &CheckResult) -> Result<String> {
    serde_json::to_string(result).map_err(|e| anyhow::Error::from(e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnvcheckError;
    use crate::report::MemorySink;
    use std::fs;
    use tempfile::TempDir;

    fn env_file(content: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    fn run(args: &Cli) -> (Result<CommandResult>, MemorySink, String) {
        let mut sink = MemorySink::new();
        let mut out = Vec::new();
        let result = CheckCommand::new(args).execute(&mut sink, &mut out);
        (result, sink, String::from_utf8(out).unwrap())
    }

    #[test]
    fn passing_file_check_succeeds_silently() {
        let (_temp, path) = env_file("API_KEY=k\nDATABASE_URL=u\n");
        let args = Cli {
            names: vec!["API_KEY".into(), "DATABASE_URL".into()],
            env_file: Some(path),
            ..Default::default()
        };

        let (result, sink, out) = run(&args);
        assert_eq!(result.unwrap(), CommandResult::success());
        assert!(sink.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn missing_name_fails_with_exit_code_one() {
        let (_temp, path) = env_file("API_KEY=k\n");
        let args = Cli {
            names: vec!["API_KEY".into(), "DATABASE_URL".into()],
            env_file: Some(path),
            ..Default::default()
        };

        let (result, sink, _) = run(&args);
        assert_eq!(result.unwrap(), CommandResult::failure(1));
        assert!(sink.errors()[0].contains("DATABASE_URL"));
    }

    #[test]
    fn warn_only_succeeds_with_warning() {
        let (_temp, path) = env_file("API_KEY=k\n");
        let args = Cli {
            names: vec!["DATABASE_URL".into()],
            env_file: Some(path),
            warn_only: true,
            ..Default::default()
        };

        let (result, sink, _) = run(&args);
        assert!(result.unwrap().success);
        assert!(sink.errors().is_empty());
        assert_eq!(sink.warnings().len(), 1);
    }

    #[test]
    fn all_checks_every_file_key() {
        let (_temp, path) = env_file("API_KEY=k\nSECRET=\n");
        let args = Cli {
            env_file: Some(path),
            all: true,
            warn_only: true,
            json: true,
            ..Default::default()
        };

        let (result, _, out) = run(&args);
        assert!(result.unwrap().success);
        let json: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(json, serde_json::json!({"missing": ["SECRET"], "success": false}));
    }

    #[test]
    fn prefix_drops_other_names() {
        let (_temp, path) = env_file("NEXT_API_URL=u\n");
        let args = Cli {
            names: vec!["NEXT_API_URL".into(), "OTHER_VAR".into()],
            prefix: Some("NEXT_".into()),
            env_file: Some(path),
            ..Default::default()
        };

        let (result, sink, _) = run(&args);
        assert!(result.unwrap().success);
        assert!(sink.is_empty());
    }

    #[test]
    fn no_names_succeeds() {
        let (result, sink, _) = run(&Cli::default());
        assert!(result.unwrap().success);
        assert!(sink.is_empty());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn json_write_failure_keeps_missing_exit_status() {
        let (_temp, path) = env_file("API_KEY=k\n");
        let args = Cli {
            names: vec!["DATABASE_URL".into()],
            env_file: Some(path),
            json: true,
            ..Default::default()
        };

        let mut sink = MemorySink::new();
        let result = CheckCommand::new(&args).execute(&mut sink, &mut ClosedPipe);
        assert_eq!(result.unwrap(), CommandResult::failure(1));
        assert_eq!(sink.errors().len(), 1);
    }

    #[test]
    fn json_write_failure_on_passing_check_is_error() {
        let (_temp, path) = env_file("API_KEY=k\n");
        let args = Cli {
            names: vec!["API_KEY".into()],
            env_file: Some(path),
            json: true,
            ..Default::default()
        };

        let mut sink = MemorySink::new();
        let result = CheckCommand::new(&args).execute(&mut sink, &mut ClosedPipe);
        assert!(matches!(result, Err(EnvcheckError::Io(_))));
    }

    #[test]
    fn unreadable_env_file_is_error() {
        let temp = TempDir::new().unwrap();
        let args = Cli {
            names: vec!["API_KEY".into()],
            env_file: Some(temp.path().join("absent.env")),
            ..Default::default()
        };

        let (result, sink, _) = run(&args);
        assert!(matches!(result, Err(EnvcheckError::EnvFileRead { .. })));
        assert!(sink.is_empty());
    }
}
