//! Error type for configuration, path provisioning and blacklist loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Empty or malformed argument passed to a path setter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No document root was available to derive the default content directory.
    #[error("document root is not set (DOCUMENT_ROOT) and no content directory was configured")]
    MissingDocumentRoot,

    /// A content or cache directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A blacklist entry is not a valid regular expression.
    #[error("invalid blacklist pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid host URL {url:?}: {reason}")]
    InvalidHostUrl { url: String, reason: String },

    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not resolve XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}
