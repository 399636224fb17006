//! Ordered client IP blacklist.
//!
//! Patterns are regular expressions compiled when they are added, so a bad
//! entry fails configuration loading instead of a request. Matching is an
//! unanchored search: `10\.` matches `10.0.0.5` and also `110.0.0.1`; write
//! `^10\.` to pin the prefix.

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default)]
pub struct IpBlacklist {
    patterns: Vec<Regex>,
}

impl IpBlacklist {
    /// Empty blacklist: no client is ever denied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles every pattern in order. Stops at the first invalid one.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for pattern in patterns {
            list.push(pattern.as_ref())?;
        }
        Ok(list)
    }

    /// Appends a pattern after the existing ones.
    pub fn push(&mut self, pattern: &str) -> Result<()> {
        let re = Regex::new(pattern).map_err(|source| ConfigError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.patterns.push(re);
        Ok(())
    }

    /// Returns the first pattern (in insertion order) that matches `ip`.
    /// Later patterns are not evaluated.
    pub fn first_match(&self, ip: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|re| re.is_match(ip))
            .map(Regex::as_str)
    }

    pub fn is_blacklisted(&self, ip: &str) -> bool {
        self.first_match(ip).is_some()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Serialize for IpBlacklist {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.patterns())
    }
}
