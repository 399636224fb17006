//! Runtime configuration of a MathB deployment.
//!
//! [`Configuration`] owns the content directory (post files and the shared
//! count file), the cache directory (rendered previews) and the client IP
//! blacklist. Directory paths always carry exactly one trailing separator,
//! so derived file paths are plain concatenations.
//!
//! Build one instance at startup and hand it to request handlers by
//! reference, or through [`SharedConfiguration`] when it must be reloaded.

mod file;
mod normalize;
mod provision;
mod shared;

pub use file::{config_path, load_or_init, FileConfig};
pub use normalize::with_trailing_separator;
pub use provision::{ensure_directory, DIRECTORY_MODE};
pub use shared::SharedConfiguration;

use std::ffi::OsString;
use std::path::Path;

use serde::Serialize;

use crate::blacklist::IpBlacklist;
use crate::error::{ConfigError, Result};
use crate::host_url::HostUrl;

/// Environment variable holding the web server's document root.
pub const DOCUMENT_ROOT_VAR: &str = "DOCUMENT_ROOT";

/// Name of the content directory created next to the document root.
pub const CONTENT_DIRECTORY_NAME: &str = "mathb-content";

/// Cache directory used unless overridden.
pub const DEFAULT_CACHE_DIRECTORY: &str = "/tmp/mathb-cache/";

/// File in the content directory that tracks the number of posts.
pub const COUNT_FILE_NAME: &str = "count.dat";

/// Extension of post content files.
pub const POST_FILE_EXTENSION: &str = ".txt";

#[derive(Debug, Clone, Serialize)]
pub struct Configuration {
    content_directory_path: String,
    cache_directory_path: String,
    ip_blacklist: IpBlacklist,
}

impl Configuration {
    /// Configuration rooted at `content_directory`, with the default cache
    /// directory and an empty blacklist. No I/O is performed.
    pub fn new(content_directory: &str) -> Result<Self> {
        Ok(Self {
            content_directory_path: with_trailing_separator(content_directory)?,
            cache_directory_path: DEFAULT_CACHE_DIRECTORY.to_string(),
            ip_blacklist: IpBlacklist::new(),
        })
    }

    /// Defaults derived from the document root: the content directory is
    /// `mathb-content/` next to it (`/var/www/html` gives `/var/www/mathb-content/`).
    pub fn with_document_root(document_root: impl AsRef<Path>) -> Result<Self> {
        let document_root = document_root.as_ref();
        if document_root.as_os_str().is_empty() {
            return Err(ConfigError::MissingDocumentRoot);
        }
        let parent = normalize::document_root_parent(document_root);
        let parent = parent.to_str().ok_or_else(|| {
            ConfigError::InvalidArgument(format!(
                "document root is not valid UTF-8: {}",
                document_root.display()
            ))
        })?;
        let mut content = with_trailing_separator(parent)?;
        content.push_str(CONTENT_DIRECTORY_NAME);
        Self::new(&content)
    }

    /// Defaults derived from `$DOCUMENT_ROOT`. Fails with
    /// [`ConfigError::MissingDocumentRoot`] when it is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_document_root_var(std::env::var_os(DOCUMENT_ROOT_VAR))
    }

    pub(crate) fn from_document_root_var(value: Option<OsString>) -> Result<Self> {
        match value {
            Some(root) if !root.is_empty() => Self::with_document_root(root),
            _ => Err(ConfigError::MissingDocumentRoot),
        }
    }

    pub fn set_content_directory_path(&mut self, path: &str) -> Result<()> {
        self.content_directory_path = with_trailing_separator(path)?;
        Ok(())
    }

    pub fn set_cache_directory_path(&mut self, path: &str) -> Result<()> {
        self.cache_directory_path = with_trailing_separator(path)?;
        Ok(())
    }

    pub fn content_directory_path(&self) -> &str {
        &self.content_directory_path
    }

    pub fn cache_directory_path(&self) -> &str {
        &self.cache_directory_path
    }

    pub fn ip_blacklist(&self) -> &IpBlacklist {
        &self.ip_blacklist
    }

    pub fn set_ip_blacklist(&mut self, blacklist: IpBlacklist) {
        self.ip_blacklist = blacklist;
    }

    /// Creates the content and cache directories (and missing parents) with
    /// owner-only permissions. Safe to call repeatedly.
    ///
    /// Not transactional: if the cache directory fails, a content directory
    /// created just before stays in place.
    pub fn create_directories(&self) -> Result<()> {
        ensure_directory(Path::new(&self.content_directory_path))?;
        ensure_directory(Path::new(&self.cache_directory_path))?;
        Ok(())
    }

    /// `<content dir><id>.txt`. The id is used verbatim; callers must make
    /// sure it is safe as a file name.
    pub fn post_file_path(&self, id: &str) -> String {
        format!("{}{}{}", self.content_directory_path, id, POST_FILE_EXTENSION)
    }

    /// `<content dir>count.dat`.
    pub fn count_file_path(&self) -> String {
        format!("{}{}", self.content_directory_path, COUNT_FILE_NAME)
    }

    /// `<host url><id>`, followed by `?key=<key>` when a non-empty key is given.
    pub fn post_url<H: HostUrl + ?Sized>(&self, host: &H, id: &str, key: Option<&str>) -> String {
        let mut url = host.host_url();
        url.push_str(id);
        if let Some(key) = key.filter(|k| !k.is_empty()) {
            url.push_str("?key=");
            url.push_str(key);
        }
        url
    }

    /// True if any blacklist pattern matches `ip`.
    pub fn client_is_blacklisted(&self, ip: &str) -> bool {
        self.ip_blacklist.is_blacklisted(ip)
    }

    /// The first blacklist pattern matching `ip`, if any.
    pub fn blacklist_match(&self, ip: &str) -> Option<&str> {
        self.ip_blacklist.first_match(ip)
    }
}
