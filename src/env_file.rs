//! dotenv file sources.
//!
//! Loads a `.env`-style file into a [`Source`] so it can be checked before
//! it is used. Nothing is written to the process environment.
//!
//! Unquoted and double-quoted values expand `$VAR` and `${VAR}` from the
//! checking process's environment; an unset reference expands to the empty
//! string and so is reported missing. Single-quoted values are literal.

use std::path::Path;

use crate::error::{EnvcheckError, Result};
use crate::source::Source;

/// Label used in errors for content that did not come from a file.
const INLINE_ORIGIN: &str = "<inline>";

/// Load and parse an env file from a path.
///
/// `KEY=` lines become empty values, which a check reports as missing.
///
/// # Example
///
/// ```no_run
/// use envcheck::{check_env_source, load_env_file, CheckOptions};
/// use std::path::Path;
///
/// let source = load_env_file(Path::new(".env.production")).unwrap();
/// check_env_source(&source, &CheckOptions::new());
/// ```
pub fn load_env_file(path: &Path) -> Result<Source> {
    let content = std::fs::read_to_string(path).map_err(|source| EnvcheckError::EnvFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let vars = parse(&content, path)?;
    tracing::debug!(path = %path.display(), keys = vars.len(), "Loaded env file");
    Ok(vars)
}

/// Parse env file content.
///
/// # Example
///
/// ```
/// use envcheck::parse_env_str;
///
/// let content = r#"
/// ## Database config
/// DATABASE_URL=postgres://localhost/db
/// DEBUG="true"
/// EMPTY=
/// "#;
///
/// let source = parse_env_str(content).unwrap();
/// assert_eq!(source.get("DATABASE_URL"), Some("postgres://localhost/db"));
/// assert_eq!(source.get("DEBUG"), Some("true"));
/// assert_eq!(source.get("EMPTY"), Some(""));
/// ```
pub fn parse_env_str(content: &str) -> Result<Source> {
    parse(content, Path::new(INLINE_ORIGIN))
}

fn parse(content: &str, origin: &Path) -> Result<Source> {
    let mut source = Source::new();
    for item in dotenvy::from_read_iter(content.as_bytes()) {
        let (key, value) = item.map_err(|e| EnvcheckError::EnvFileParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        source.set(key, value);
    }
    Ok(source)
}
