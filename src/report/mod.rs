//! Reporting of missing variables.
//!
//! This module provides:
//! - [`DiagnosticSink`] trait for the error and warning channels
//! - [`ReportFormat`] for the wording of the diagnostic block
//! - [`report`] which picks the channel and decides the [`Disposition`]
//!
//! Reporting never terminates the process. Termination is left to
//! [`Verdict::enforce`](crate::Verdict::enforce).

pub mod format;
pub mod sink;

pub use format::ReportFormat;
pub use sink::{MemorySink, StderrSink, TracingSink};

/// Destination for diagnostic blocks.
///
/// Each call receives one complete multi-line block.
pub trait DiagnosticSink {
    /// Emit a block on the error channel.
    fn error(&mut self, block: &str);

    /// Emit a block on the warning channel.
    fn warning(&mut self, block: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn error(&mut self, block: &str) {
        (**self).error(block);
    }

    fn warning(&mut self, block: &str) {
        (**self).warning(block);
    }
}

/// What reporting decided for a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Nothing missing, nothing emitted.
    Pass,
    /// Names missing, reported on the warning channel.
    Warned,
    /// Names missing, reported on the error channel; the process should exit.
    Abort,
}

impl Disposition {
    /// Whether the process should terminate.
    pub fn should_exit(self) -> bool {
        matches!(self, Self::Abort)
    }
}

/// Report `missing` on the channel selected by `exit_on_error`.
///
/// Emits nothing when `missing` is empty.
pub fn report<S: DiagnosticSink + ?Sized>(
    missing: &[String],
    exit_on_error: bool,
    format: &ReportFormat,
    sink: &mut S,
) -> Disposition {
    if missing.is_empty() {
        return Disposition::Pass;
    }

    let block = format.render(missing);
    if exit_on_error {
        sink.error(&block);
        Disposition::Abort
    } else {
        sink.warning(&block);
        Disposition::Warned
    }
}
