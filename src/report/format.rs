//! Diagnostic block formatting.

/// Wording of the diagnostic block emitted for missing variables.
///
/// The block is a banner, a separator, one marked line per missing name,
/// and the same separator again.
///
/// # Example
///
/// ```
/// use envcheck::ReportFormat;
///
/// let block = ReportFormat::default().render(&["DATABASE_URL".to_string()]);
/// let lines: Vec<&str> = block.lines().collect();
///
/// assert_eq!(lines.len(), 4);
/// assert_eq!(lines[1], lines[3]);
/// assert!(lines[2].ends_with("DATABASE_URL"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    /// First line of the block.
    pub banner: String,
    /// Line placed above and below the list of names.
    pub separator: String,
    /// Prefix for each missing name.
    pub marker: String,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            banner: "Missing required environment variables:".to_string(),
            separator: "=".repeat(48),
            marker: "✗".to_string(),
        }
    }
}

impl ReportFormat {
    /// Replace the banner line.
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Replace the separator line.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replace the per-name marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Render the block for `missing`, without a trailing newline.
    pub fn render(&self, missing: &[String]) -> String {
        let mut lines = Vec::with_capacity(missing.len() + 3);
        lines.push(self.banner.clone());
        lines.push(self.separator.clone());
        for name in missing {
            lines.push(format!("{} {}", self.marker, name));
        }
        lines.push(self.separator.clone());
        lines.join("\n")
    }
}
