//! Base URL of the running service, used to build post links.

use url::Url;

use crate::error::{ConfigError, Result};

/// Resolves the service's base URL. The returned string is expected to end
/// with `/` so that a post id can be appended directly.
pub trait HostUrl {
    fn host_url(&self) -> String;
}

impl<F> HostUrl for F
where
    F: Fn() -> String,
{
    fn host_url(&self) -> String {
        self()
    }
}

/// Host URL fixed at startup (e.g. `https://mathb.in/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHostUrl(String);

impl FixedHostUrl {
    /// Accepts an absolute `http` or `https` URL. A missing trailing `/` is added.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: String| ConfigError::InvalidHostUrl {
            url: raw.to_string(),
            reason,
        };
        let parsed = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }
        let mut base = parsed.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self(base))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl HostUrl for FixedHostUrl {
    fn host_url(&self) -> String {
        self.0.clone()
    }
}
