//! Check results and the evaluation routine that produces them.

use serde::Serialize;

use crate::error::{EnvcheckError, Result};
use crate::source::Source;

/// The outcome of checking a list of required names.
///
/// `success` is derived from `missing` on construction, so the two always
/// agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    missing: Vec<String>,
    success: bool,
}

impl CheckResult {
    /// Build a result from the names that were missing.
    pub fn from_missing(missing: Vec<String>) -> Self {
        let success = missing.is_empty();
        Self { missing, success }
    }

    /// A result with nothing missing.
    pub fn passed() -> Self {
        Self::from_missing(Vec::new())
    }

    /// Names that were absent or empty, in required-list order.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Whether every checked name had a value.
    pub fn success(&self) -> bool {
        self.success
    }

    /// Convert into a `Result`, failing when anything is missing.
    ///
    /// # Example
    ///
    /// ```
    /// use envcheck::{evaluate, Source};
    ///
    /// let source: Source = [("API_KEY", "k")].into_iter().collect();
    /// let err = evaluate(["API_KEY", "DATABASE_URL"], &source, None)
    ///     .into_result()
    ///     .unwrap_err();
    /// assert!(err.to_string().contains("DATABASE_URL"));
    /// ```
    pub fn into_result(self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(EnvcheckError::MissingVariables {
                missing: self.missing,
            })
        }
    }
}

/// Find which required names lack a value in `source`.
///
/// When `prefix` is set and non-empty, required names that do not start with
/// it are dropped before checking and are never reported. A name is missing
/// when it is absent, declared without a value, or set to the empty string.
///
/// # Example
///
/// ```
/// use envcheck::{evaluate, Source};
///
/// let source: Source = [("API_KEY", "k")].into_iter().collect();
/// let result = evaluate(["API_KEY", "DATABASE_URL"], &source, None);
///
/// assert!(!result.success());
/// assert_eq!(result.missing(), ["DATABASE_URL"]);
/// ```
pub fn evaluate<I, S>(required: I, source: &Source, prefix: Option<&str>) -> CheckResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = prefix.filter(|p| !p.is_empty());
    let mut checked = 0usize;
    let mut missing = Vec::new();

    for name in required {
        let name = name.as_ref();
        if let Some(prefix) = prefix {
            if !name.starts_with(prefix) {
                continue;
            }
        }

        checked += 1;
        if source.get(name).map_or(true, str::is_empty) {
            missing.push(name.to_string());
        }
    }

    tracing::debug!(checked, missing = missing.len(), "Evaluated required variables");
    CheckResult::from_missing(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, &str)]) -> Source {
        pairs.iter().copied().collect()
    }

    #[test]
    fn all_present_succeeds() {
        let src = source(&[("API_KEY", "k"), ("DATABASE_URL", "u")]);
        let result = evaluate(["API_KEY", "DATABASE_URL"], &src, None);

        assert!(result.success());
        assert!(result.missing().is_empty());
    }

    #[test]
    fn absent_name_is_missing() {
        let src = source(&[("API_KEY", "k")]);
        let result = evaluate(["API_KEY", "DATABASE_URL"], &src, None);

        assert!(!result.success());
        assert_eq!(result.missing(), ["DATABASE_URL"]);
    }

    #[test]
    fn empty_value_is_missing() {
        let src = source(&[("API_KEY", "")]);
        let result = evaluate(["API_KEY"], &src, None);
        assert_eq!(result.missing(), ["API_KEY"]);
    }

    #[test]
    fn unset_value_is_missing() {
        let mut src = Source::new();
        src.set_unset("SECRET");
        let result = evaluate(["SECRET"], &src, None);
        assert_eq!(result.missing(), ["SECRET"]);
    }

    #[test]
    fn whitespace_value_counts_as_present() {
        let src = source(&[("PADDING", " ")]);
        assert!(evaluate(["PADDING"], &src, None).success());
    }

    #[test]
    fn missing_preserves_required_order() {
        let src = source(&[("B", "b")]);
        let result = evaluate(["D", "A", "B", "C"], &src, None);
        assert_eq!(result.missing(), ["D", "A", "C"]);
    }

    #[test]
    fn duplicates_are_reported_twice() {
        let result = evaluate(["TOKEN", "TOKEN"], &Source::new(), None);
        assert_eq!(result.missing(), ["TOKEN", "TOKEN"]);
    }

    #[test]
    fn prefix_drops_non_matching_required_names() {
        let src = source(&[("NEXT_API_URL", "u")]);
        let result = evaluate(["NEXT_API_URL", "OTHER_VAR"], &src, Some("NEXT_"));

        assert!(result.success());
    }

    #[test]
    fn prefix_still_reports_matching_missing_names() {
        let result = evaluate(["NEXT_API_URL", "OTHER_VAR"], &Source::new(), Some("NEXT_"));
        assert_eq!(result.missing(), ["NEXT_API_URL"]);
    }

    #[test]
    fn empty_prefix_checks_everything() {
        let result = evaluate(["A", "B"], &Source::new(), Some(""));
        assert_eq!(result.missing(), ["A", "B"]);
    }

    #[test]
    fn empty_required_list_succeeds() {
        let result = evaluate(Vec::<String>::new(), &Source::new(), None);
        assert_eq!(result, CheckResult::passed());
    }

    #[test]
    fn success_tracks_missing() {
        assert!(CheckResult::from_missing(vec![]).success());
        assert!(!CheckResult::from_missing(vec!["X".into()]).success());
    }

    #[test]
    fn into_result_ok_when_nothing_missing() {
        assert!(CheckResult::passed().into_result().is_ok());
    }

    #[test]
    fn into_result_carries_missing_names() {
        let err = CheckResult::from_missing(vec!["A".into(), "B".into()])
            .into_result()
            .unwrap_err();
        match err {
            EnvcheckError::MissingVariables { missing } => assert_eq!(missing, ["A", "B"]),
            other => panic!("Expected MissingVariables, got {other:?}"),
        }
    }

    #[test]
    fn serializes_missing_and_success() {
        let json = serde_json::to_value(CheckResult::from_missing(vec!["SECRET".into()])).unwrap();
        assert_eq!(json, serde_json::json!({"missing": ["SECRET"], "success": false}));
    }
}
