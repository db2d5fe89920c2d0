//! Key-value sources to check against.
//!
//! A [`Source`] is the map a check inspects: either an explicit map built by
//! the caller or a snapshot of the process environment. Values are optional
//! so that a key can be declared without a value.

use std::collections::{BTreeMap, HashMap};

/// A snapshot of variables to check.
///
/// Iteration is in ascending key order.
///
/// # Example
///
/// ```
/// use envcheck::Source;
///
/// let mut source = Source::new();
/// source.set("DATABASE_URL", "postgres://localhost/db");
/// source.set_unset("SECRET");
///
/// assert_eq!(source.get("DATABASE_URL"), Some("postgres://localhost/db"));
/// assert_eq!(source.get("SECRET"), None);
/// assert!(source.contains("SECRET"));
/// assert_eq!(source.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    vars: BTreeMap<String, Option<String>>,
}

impl Source {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Keys that are not valid Unicode are skipped. Values that are not
    /// valid Unicode are converted lossily and so still count as present.
    pub fn from_env() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| {
                let key = key.into_string().ok()?;
                Some((key, Some(value.to_string_lossy().into_owned())))
            })
            .collect();
        Self { vars }
    }

    /// Set a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), Some(value.into()));
    }

    /// Declare a variable without a value.
    pub fn set_unset(&mut self, key: impl Into<String>) {
        self.vars.insert(key.into(), None);
    }

    /// Get the value of a variable, if it has one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).and_then(|value| value.as_deref())
    }

    /// Check if the key is present, with or without a value.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Entries in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.vars
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Narrow to keys starting with `prefix`.
    ///
    /// Matching is case-sensitive. An empty prefix keeps every key.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        let vars = self
            .vars
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self { vars }
    }
}

/// Produce the source a check should inspect.
///
/// Uses `explicit` when given, otherwise snapshots the process environment,
/// then narrows to `prefix` when one is set and non-empty.
///
/// # Example
///
/// ```
/// use envcheck::{resolve_source, Source};
///
/// let source: Source = [("NEXT_API_URL", "u"), ("OTHER_VAR", "o")]
///     .into_iter()
///     .collect();
///
/// let resolved = resolve_source(Some(&source), Some("NEXT_"));
/// assert_eq!(resolved.keys().collect::<Vec<_>>(), ["NEXT_API_URL"]);
/// ```
pub fn resolve_source(explicit: Option<&Source>, prefix: Option<&str>) -> Source {
    let base = match explicit {
        Some(source) => source.clone(),
        None => Source::from_env(),
    };

    let resolved = match prefix.filter(|p| !p.is_empty()) {
        Some(prefix) => base.with_prefix(prefix),
        None => base,
    };

    tracing::debug!(
        keys = resolved.len(),
        explicit = explicit.is_some(),
        "Resolved check source"
    );
    resolved
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Source {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(key, value)| (key.into(), Some(value.into())))
            .collect();
        Self { vars }
    }
}

impl From<BTreeMap<String, Option<String>>> for Source {
    fn from(vars: BTreeMap<String, Option<String>>) -> Self {
        Self { vars }
    }
}

impl From<HashMap<String, Option<String>>> for Source {
    fn from(vars: HashMap<String, Option<String>>) -> Self {
        Self {
            vars: vars.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, String>> for Source {
    fn from(vars: HashMap<String, String>) -> Self {
        vars.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Source {
    fn from(vars: BTreeMap<String, String>) -> Self {
        vars.into_iter().collect()
    }
}
