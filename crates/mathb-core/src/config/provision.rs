//! Owner-only directory creation.

use std::fs::DirBuilder;
use std::io;
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Mode for created directories (and any missing parents): rwx for the owner only.
pub const DIRECTORY_MODE: u32 = 0o700;

/// Creates `path` and its missing parents if it is not already a directory.
///
/// Another process may create the directory between the check and the
/// create call; an `AlreadyExists` error for a path that is now a directory
/// counts as success. Existing directories keep their permissions.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        tracing::debug!("directory already present: {}", path.display());
        return Ok(());
    }

    match builder().create(path) {
        Ok(()) => {
            tracing::info!("created directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
            tracing::debug!("directory created concurrently: {}", path.display());
            Ok(())
        }
        Err(source) => Err(ConfigError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(unix)]
fn builder() -> DirBuilder {
    use std::os::unix::fs::DirBuilderExt;

    let mut builder = DirBuilder::new();
    builder.recursive(true).mode(DIRECTORY_MODE);
    builder
}

#[cfg(not(unix))]
fn builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    builder
}
