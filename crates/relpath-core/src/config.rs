//! Cache configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Environment variable overriding [`CacheConfig::intern_capacity`]
pub const INTERN_CAPACITY_ENV: &str = "RELPATH_INTERN_CAPACITY";

/// Environment variable overriding [`CacheConfig::index_capacity`]
pub const INDEX_CAPACITY_ENV: &str = "RELPATH_INDEX_CAPACITY";

const DEFAULT_INTERN_CAPACITY: NonZeroUsize = match NonZeroUsize::new(65_536) {
    Some(n) => n,
    None => panic!("default intern capacity must be non-zero"),
};

const DEFAULT_INDEX_CAPACITY: usize = 4096;

/// Largest accepted [`CacheConfig::index_capacity`]
///
/// The index preallocates this many slots up front, so larger hints are
/// refused instead of attempting a huge allocation.
pub const MAX_INDEX_CAPACITY: usize = 1 << 24;

/// Sizing for the interning and index caches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Maximum number of paths the interner keeps before evicting the least
    /// recently used. Only a bound: entries are allocated as they arrive.
    pub intern_capacity: NonZeroUsize,

    /// Number of index slots to preallocate, at most [`MAX_INDEX_CAPACITY`];
    /// the index grows past this freely
    pub index_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            intern_capacity: DEFAULT_INTERN_CAPACITY,
            index_capacity: DEFAULT_INDEX_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `RELPATH_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(INTERN_CAPACITY_ENV) {
            config.intern_capacity = parse_var(INTERN_CAPACITY_ENV, &value)?;
        }
        if let Some(value) = lookup(INDEX_CAPACITY_ENV) {
            config.index_capacity = parse_var(INDEX_CAPACITY_ENV, &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check every field is within its accepted range
    pub fn validate(&self) -> Result<()> {
        if self.index_capacity > MAX_INDEX_CAPACITY {
            return Err(Error::Config(format!(
                "index_capacity {} exceeds maximum {}",
                self.index_capacity, MAX_INDEX_CAPACITY
            )));
        }
        Ok(())
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("{}={:?}: {}", key, value, e)))
}
