//! Required-variable checking.
//!
//! The [`Checker`] resolves a source, evaluates the required names against
//! it and reports anything missing to its [`DiagnosticSink`]. It always
//! hands back a [`Verdict`]; only [`Verdict::enforce`] ends the process.
//!
//! The free functions [`check_env`], [`check_env_safe`] and
//! [`check_env_source`] wrap a checker writing to stderr.

pub mod result;

pub use result::{evaluate, CheckResult};

use std::process::ExitCode;

use crate::report::{report, DiagnosticSink, Disposition, ReportFormat, StderrSink};
use crate::source::{resolve_source, Source};

/// Exit status used when required variables are missing.
pub const MISSING_EXIT_CODE: u8 = 1;

/// Options for a check.
///
/// # Example
///
/// ```
/// use envcheck::{CheckOptions, Source};
///
/// let options = CheckOptions::new()
///     .prefix("NEXT_")
///     .source(Source::new())
///     .exit_on_error(false);
///
/// assert_eq!(options.prefix.as_deref(), Some("NEXT_"));
/// assert!(!options.exit_on_error);
/// assert!(CheckOptions::default().exit_on_error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Only names (and source keys) starting with this are considered.
    pub prefix: Option<String>,
    /// Explicit source; the process environment is used when `None`.
    pub source: Option<Source>,
    /// Terminate the process with status 1 when anything is missing.
    pub exit_on_error: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            source: None,
            exit_on_error: true,
        }
    }
}

impl CheckOptions {
    /// Default options: no prefix, process environment, exit on error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix filter.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Check against an explicit source instead of the environment.
    pub fn source(mut self, source: impl Into<Source>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set whether a failed check terminates the process.
    pub fn exit_on_error(mut self, exit_on_error: bool) -> Self {
        self.exit_on_error = exit_on_error;
        self
    }
}

/// A check result together with what reporting decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    result: CheckResult,
    disposition: Disposition,
}

impl Verdict {
    /// The check result.
    pub fn result(&self) -> &CheckResult {
        &self.result
    }

    /// What reporting decided.
    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Whether the process should terminate.
    pub fn should_exit(&self) -> bool {
        self.disposition.should_exit()
    }

    /// Numeric exit status matching the disposition: 1 on abort, else 0.
    pub fn exit_status(&self) -> u8 {
        if self.should_exit() {
            MISSING_EXIT_CODE
        } else {
            0
        }
    }

    /// Process exit code matching the disposition, for returning from `main`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::process::ExitCode;
    /// use envcheck::{CheckOptions, Checker};
    ///
    /// fn main() -> ExitCode {
    ///     let verdict = Checker::default().check_safe(["PATH"], &CheckOptions::new());
    ///     verdict.exit_code()
    /// }
    /// ```
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Take the check result without enforcing anything.
    pub fn into_check_result(self) -> CheckResult {
        self.result
    }

    /// Terminate with status 1 if the check aborted, otherwise return the result.
    pub fn enforce(self) -> CheckResult {
        if self.should_exit() {
            tracing::debug!(
                missing = self.result.missing().len(),
                "Exiting after failed environment check"
            );
            std::process::exit(i32::from(MISSING_EXIT_CODE));
        }
        self.result
    }
}

/// Checks required variables and reports to a sink.
///
/// # Example
///
/// ```
/// use envcheck::{CheckOptions, Checker, Disposition, MemorySink, Source};
///
/// let source: Source = [("API_KEY", "k")].into_iter().collect();
/// let options = CheckOptions::new().source(source);
///
/// let mut sink = MemorySink::new();
/// let verdict = Checker::new(&mut sink).check(["API_KEY", "DATABASE_URL"], &options);
///
/// assert_eq!(verdict.disposition(), Disposition::Abort);
/// assert_eq!(verdict.result().missing(), ["DATABASE_URL"]);
/// assert!(sink.errors()[0].contains("DATABASE_URL"));
/// ```
#[derive(Debug)]
pub struct Checker<S> {
    sink: S,
    format: ReportFormat,
}

impl<S: DiagnosticSink> Checker<S> {
    /// Create a checker that reports to `sink` with the default wording.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            format: ReportFormat::default(),
        }
    }

    /// Use different wording for the diagnostic block.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Check `required` honoring `options.exit_on_error`.
    pub fn check<I, N>(&mut self, required: I, options: &CheckOptions) -> Verdict
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        self.run(
            required,
            options.source.as_ref(),
            options.prefix.as_deref(),
            options.exit_on_error,
        )
    }

    /// Check `required` without ever asking to terminate.
    pub fn check_safe<I, N>(&mut self, required: I, options: &CheckOptions) -> Verdict
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        self.run(
            required,
            options.source.as_ref(),
            options.prefix.as_deref(),
            false,
        )
    }

    /// Check that every key of `source` has a value.
    ///
    /// Any source set in `options` is ignored.
    pub fn check_source(&mut self, source: &Source, options: &CheckOptions) -> Verdict {
        self.run(
            source.keys(),
            Some(source),
            options.prefix.as_deref(),
            options.exit_on_error,
        )
    }

    /// The sink this checker reports to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the checker, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn run<I, N>(
        &mut self,
        required: I,
        source: Option<&Source>,
        prefix: Option<&str>,
        exit_on_error: bool,
    ) -> Verdict
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let resolved = resolve_source(source, prefix);
        let result = evaluate(required, &resolved, prefix);
        let disposition = report(result.missing(), exit_on_error, &self.format, &mut self.sink);
        Verdict {
            result,
            disposition,
        }
    }
}

impl Default for Checker<StderrSink> {
    fn default() -> Self {
        Self::new(StderrSink)
    }
}

/// Check that every name in `required` has a non-empty value.
///
/// Missing names are reported on stderr. With `exit_on_error` set (the
/// default) the process then exits with status 1 and this never returns.
///
/// # Example
///
/// ```
/// use envcheck::{check_env, CheckOptions, Source};
///
/// let source: Source = [("API_KEY", "k"), ("DATABASE_URL", "u")]
///     .into_iter()
///     .collect();
/// let result = check_env(["API_KEY", "DATABASE_URL"], &CheckOptions::new().source(source));
///
/// assert!(result.success());
/// ```
pub fn check_env<I, N>(required: I, options: &CheckOptions) -> CheckResult
where
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    Checker::default().check(required, options).enforce()
}

/// Like [`check_env`] but never terminates, whatever `exit_on_error` says.
///
/// Missing names are reported on stderr as a warning.
pub fn check_env_safe<I, N>(required: I, options: &CheckOptions) -> CheckResult
where
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    Checker::default().check_safe(required, options).into_check_result()
}

/// Check that every key in `source` has a non-empty value.
///
/// Behaves like [`check_env`] with `source` as both the required list and
/// the source; any source in `options` is ignored.
///
/// # Example
///
/// ```
/// use envcheck::{check_env_source, CheckOptions, Source};
///
/// let mut source = Source::new();
/// source.set("API_KEY", "k");
/// source.set_unset("SECRET");
///
/// let result = check_env_source(&source, &CheckOptions::new().exit_on_error(false));
/// assert_eq!(result.missing(), ["SECRET"]);
/// ```
pub fn check_env_source(source: &Source, options: &CheckOptions) -> CheckResult {
    Checker::default().check_source(source, options).enforce()
}
