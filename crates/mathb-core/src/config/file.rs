//! On-disk configuration at `~/.config/mathb/config.toml`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Configuration, DOCUMENT_ROOT_VAR};
use crate::blacklist::IpBlacklist;
use crate::error::{ConfigError, Result};
use crate::host_url::FixedHostUrl;

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Web server document root; `$DOCUMENT_ROOT` is used when unset.
    #[serde(default)]
    pub document_root: Option<PathBuf>,
    /// Overrides the content directory derived from the document root.
    #[serde(default)]
    pub content_directory: Option<String>,
    #[serde(default)]
    pub cache_directory: Option<String>,
    /// Regular expressions matched against client IPs, in order.
    #[serde(default)]
    pub ip_blacklist: Vec<String>,
    /// Base URL for post links, e.g. `https://mathb.in/`.
    #[serde(default)]
    pub host_url: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&data)?)
    }

    /// Builds a [`Configuration`], taking the document root from
    /// `$DOCUMENT_ROOT` when the file does not set one.
    pub fn to_configuration(&self) -> Result<Configuration> {
        self.to_configuration_with(std::env::var_os(DOCUMENT_ROOT_VAR))
    }

    /// Like [`FileConfig::to_configuration`] with an explicit fallback
    /// document root. A configured `content_directory` makes the document
    /// root optional. Blacklist patterns are compiled here.
    pub fn to_configuration_with(&self, env_document_root: Option<OsString>) -> Result<Configuration> {
        let document_root = self
            .document_root
            .clone()
            .map(OsString::from)
            .or(env_document_root)
            .filter(|root| !root.is_empty());

        let mut cfg = match (&self.content_directory, document_root) {
            (Some(content), _) => Configuration::new(content)?,
            (None, Some(root)) => Configuration::with_document_root(root)?,
            (None, None) => return Err(ConfigError::MissingDocumentRoot),
        };
        if let Some(cache) = &self.cache_directory {
            cfg.set_cache_directory_path(cache)?;
        }
        cfg.set_ip_blacklist(IpBlacklist::from_patterns(&self.ip_blacklist)?);
        Ok(cfg)
    }

    /// Parsed `host_url`, if configured.
    pub fn host_url(&self) -> Result<Option<FixedHostUrl>> {
        self.host_url.as_deref().map(FixedHostUrl::parse).transpose()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mathb")?;
    xdg_dirs
        .place_config_file("config.toml")
        .map_err(|source| ConfigError::Io {
            path: xdg_dirs.get_config_home(),
            source,
        })
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FileConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

pub(crate) fn load_or_init_at(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        let default_cfg = FileConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, toml).map_err(io_err)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    FileConfig::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let cfg: FileConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, FileConfig::default());
        assert!(cfg.ip_blacklist.is_empty());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            document_root = "/var/www/html"
            cache_directory = "/var/cache/mathb"
            ip_blacklist = ['^10\.', '^192\.168\.']
            host_url = "https://mathb.in/"
        "#;
        let file: FileConfig = toml::from_str(toml).unwrap();
        let cfg = file.to_configuration_with(None).unwrap();
        assert_eq!(cfg.content_directory_path(), "/var/www/mathb-content/");
        assert_eq!(cfg.cache_directory_path(), "/var/cache/mathb/");
        assert!(cfg.client_is_blacklisted("10.0.0.5"));
        assert!(!cfg.client_is_blacklisted("8.8.8.8"));
        assert_eq!(
            file.host_url().unwrap().unwrap().as_str(),
            "https://mathb.in/"
        );
    }

    #[test]
    fn env_document_root_is_fallback() {
        let cfg = FileConfig::default()
            .to_configuration_with(Some("/srv/site/public".into()))
            .unwrap();
        assert_eq!(cfg.content_directory_path(), "/srv/site/mathb-content/");

        let file = FileConfig {
            document_root: Some("/var/www/html".into()),
            ..FileConfig::default()
        };
        let cfg = file
            .to_configuration_with(Some("/srv/site/public".into()))
            .unwrap();
        assert_eq!(cfg.content_directory_path(), "/var/www/mathb-content/");
    }

    #[test]
    fn content_directory_makes_document_root_optional() {
        let file = FileConfig {
            content_directory: Some("/srv/mathb/content".to_string()),
            ..FileConfig::default()
        };
        let cfg = file.to_configuration_with(None).unwrap();
        assert_eq!(cfg.content_directory_path(), "/srv/mathb/content/");
        assert_eq!(cfg.count_file_path(), "/srv/mathb/content/count.dat");
    }

    #[test]
    fn missing_document_root_fails_fast() {
        assert!(matches!(
            FileConfig::default().to_configuration_with(None),
            Err(ConfigError::MissingDocumentRoot)
        ));
        assert!(matches!(
            FileConfig::default().to_configuration_with(Some(OsString::new())),
            Err(ConfigError::MissingDocumentRoot)
        ));
    }

    #[test]
    fn bad_blacklist_pattern_fails_load() {
        let file = FileConfig {
            content_directory: Some("/srv/mathb".to_string()),
            ip_blacklist: vec!["^10\\.".to_string(), "(".to_string()],
            ..FileConfig::default()
        };
        assert!(matches!(
            file.to_configuration_with(None),
            Err(ConfigError::Pattern { .. })
        ));
    }

    #[test]
    fn empty_cache_directory_is_invalid() {
        let file = FileConfig {
            content_directory: Some("/srv/mathb".to_string()),
            cache_directory: Some(String::new()),
            ..FileConfig::default()
        };
        assert!(matches!(
            file.to_configuration_with(None),
            Err(ConfigError::InvalidArgument(_))
        ));
    }

    #[test]
    fn load_or_init_writes_default_then_reads_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let first = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(first, FileConfig::default());

        fs::write(&path, "content_directory = \"/srv/x\"\n").unwrap();
        let second = load_or_init_at(&path).unwrap();
        assert_eq!(second.content_directory.as_deref(), Some("/srv/x"));
    }

    #[test]
    fn load_reports_missing_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        match FileConfig::load(&path) {
            Err(ConfigError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
