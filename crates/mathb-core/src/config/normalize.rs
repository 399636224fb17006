//! Directory path normalization.

use std::path::{is_separator, Path, MAIN_SEPARATOR};

use crate::error::{ConfigError, Result};

/// Returns `path` with exactly one trailing separator.
///
/// Runs of trailing separators collapse to one, so `/srv/x//` becomes
/// `/srv/x/` and `/` stays `/`. Empty input and embedded NUL bytes are rejected.
pub fn with_trailing_separator(path: &str) -> Result<String> {
    if path.is_empty() {
        return Err(ConfigError::InvalidArgument(
            "directory path must not be empty".to_string(),
        ));
    }
    if path.contains('\0') {
        return Err(ConfigError::InvalidArgument(format!(
            "directory path contains a NUL byte: {path:?}"
        )));
    }
    let mut normalized = path.trim_end_matches(is_separator).to_string();
    normalized.push(MAIN_SEPARATOR);
    Ok(normalized)
}

/// Parent of the document root, as PHP-style `dirname` would give it:
/// `/var/www/html` gives `/var/www`, `/` gives `/`, `html` gives `.`.
pub(crate) fn document_root_parent(document_root: &Path) -> &Path {
    match document_root.parent() {
        None => document_root,
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
    }
}
