//! Diagnostic sink implementations.

use std::io::Write;

use console::Style;

use super::DiagnosticSink;

/// Writes diagnostic blocks to standard error.
///
/// Each block goes out in a single write on a locked handle, so it is never
/// interleaved with other output. Errors are red and warnings yellow when
/// stderr supports colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    fn emit(&self, block: &str, style: Style) {
        let text = format!("{}\n", style.for_stderr().apply_to(block));
        let mut handle = std::io::stderr().lock();
        if let Err(e) = handle.write_all(text.as_bytes()).and_then(|()| handle.flush()) {
            tracing::debug!("Failed to write diagnostic to stderr: {}", e);
        }
    }
}

impl DiagnosticSink for StderrSink {
    fn error(&mut self, block: &str) {
        self.emit(block, Style::new().red());
    }

    fn warning(&mut self, block: &str) {
        self.emit(block, Style::new().yellow());
    }
}

/// Routes diagnostic blocks through `tracing` at error and warn level.
///
/// Use this when the application already installs a subscriber and wants
/// check failures in the same log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn error(&mut self, block: &str) {
        tracing::error!("{}", block);
    }

    fn warning(&mut self, block: &str) {
        tracing::warn!("{}", block);
    }
}

/// Captures diagnostic blocks in memory.
///
/// # Example
///
/// ```
/// use envcheck::{CheckOptions, Checker, MemorySink, Source};
///
/// let mut sink = MemorySink::new();
/// let options = CheckOptions::new().source(Source::new());
/// let verdict = Checker::new(&mut sink).check_safe(["API_KEY"], &options);
///
/// assert!(!verdict.result().success());
/// assert_eq!(sink.warnings().len(), 1);
/// assert!(sink.errors().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks emitted on the error channel.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Blocks emitted on the warning channel.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Whether nothing was emitted on either channel.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn error(&mut self, block: &str) {
        self.errors.push(block.to_string());
    }

    fn warning(&mut self, block: &str) {
        self.warnings.push(block.to_string());
    }
}
