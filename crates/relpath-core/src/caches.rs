//! Path cache service shared by all callers of a process

use crate::config::CacheConfig;
use crate::error::Result;
use crate::index::PathIndex;
use crate::interner::PathInterner;
use crate::path::RelPath;
use crate::types::DenseIndex;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared handle to a [`PathCaches`]
pub type SharedPathCaches = Arc<PathCaches>;

static GLOBAL: Lazy<SharedPathCaches> = Lazy::new(|| {
    let config = CacheConfig::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "invalid path cache configuration, using defaults");
        CacheConfig::default()
    });
    Arc::new(PathCaches::new(config))
});

/// Interner and permanent index for canonical paths
///
/// Construct one per process (or per test) and pass it around by
/// [`SharedPathCaches`] handle. [`PathCaches::global`] offers a lazily
/// initialised process-wide instance for callers without a handle.
pub struct PathCaches {
    interner: PathInterner,
    index: PathIndex,
}

impl PathCaches {
    /// Create caches sized by `config`
    pub fn new(config: CacheConfig) -> Self {
        debug!(
            intern_capacity = config.intern_capacity.get(),
            index_capacity = config.index_capacity,
            "initialising path caches"
        );
        Self {
            interner: PathInterner::from_config(&config),
            index: PathIndex::with_capacity(config.index_capacity),
        }
    }

    /// Create caches behind a shared handle
    pub fn shared(config: CacheConfig) -> SharedPathCaches {
        Arc::new(Self::new(config))
    }

    /// The process-wide instance, configured from the environment on first use
    pub fn global() -> &'static SharedPathCaches {
        &GLOBAL
    }

    /// The interning cache
    #[inline]
    pub fn interner(&self) -> &PathInterner {
        &self.interner
    }

    /// The permanent index
    #[inline]
    pub fn index(&self) -> &PathIndex {
        &self.index
    }

    /// Intern and validate a path string
    #[inline]
    pub fn intern(&self, s: &str) -> Result<RelPath> {
        self.interner.intern(s)
    }

    /// Permanent index of `path`
    #[inline]
    pub fn index_of(&self, path: &RelPath) -> Result<DenseIndex> {
        self.index.get_index(path)
    }

    /// Intern `s` and return its permanent index
    pub fn index_of_str(&self, s: &str) -> Result<DenseIndex> {
        let path = self.intern(s)?;
        self.index_of(&path)
    }

    /// Resolve a permanent index back to its path
    #[inline]
    pub fn resolve_index(&self, index: DenseIndex) -> Result<RelPath> {
        self.index.get_by_index(index)
    }

    /// Intern and index a batch of path strings in parallel
    ///
    /// The result lines up with `paths`. Indices for paths seen for the first
    /// time are assigned in whatever order the workers reach them. Fails on
    /// the first invalid path; paths committed before the failure keep their
    /// indices.
    pub fn index_all<S>(&self, paths: &[S]) -> Result<Vec<DenseIndex>>
    where
        S: AsRef<str> + Sync,
    {
        paths
            .par_iter()
            .map(|s| self.index_of_str(s.as_ref()))
            .collect()
    }
}

impl Default for PathCaches {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
