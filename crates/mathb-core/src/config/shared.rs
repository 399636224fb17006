//! Process-wide configuration handle with whole-instance reload.

use std::sync::{Arc, PoisonError, RwLock};

use super::Configuration;

/// Readers take an `Arc` snapshot with [`current`](Self::current) and keep
/// using it for the rest of the request. A reload builds a fresh
/// [`Configuration`] and installs it with [`replace`](Self::replace); the
/// installed instance is never mutated in place.
#[derive(Debug)]
pub struct SharedConfiguration {
    inner: RwLock<Arc<Configuration>>,
}

impl SharedConfiguration {
    pub fn new(cfg: Configuration) -> Self {
        Self {
            inner: RwLock::new(Arc::new(cfg)),
        }
    }

    pub fn current(&self) -> Arc<Configuration> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Installs `cfg` and returns the snapshot it replaced.
    pub fn replace(&self, cfg: Configuration) -> Arc<Configuration> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, Arc::new(cfg));
        tracing::debug!(
            "configuration replaced: content={} cache={}",
            guard.content_directory_path(),
            guard.cache_directory_path()
        );
        previous
    }
}

impl From<Configuration> for SharedConfiguration {
    fn from(cfg: Configuration) -> Self {
        Self::new(cfg)
    }
}
