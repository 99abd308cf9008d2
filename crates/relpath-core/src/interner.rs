//! Bounded path interner for deduplicating path strings

use crate::config::CacheConfig;
use crate::error::Result;
use crate::path::RelPath;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Hit/miss/eviction counters for a [`PathInterner`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Lookups answered from the cache, including entries a concurrent
    /// caller installed while this one was validating
    pub hits: u64,
    /// Lookups that inserted a new path or failed validation
    pub misses: u64,
    /// Entries dropped to make room for newer ones
    pub evictions: u64,
}

/// Thread-safe interner handing out shared [`RelPath`] instances
///
/// Entries are reclaimable: once `capacity` paths are cached the least
/// recently used one is dropped. Eviction only reduces sharing; a later
/// request for the same string builds an equal path again. Memory is
/// taken as entries arrive, never preallocated for the full capacity.
pub struct PathInterner {
    cache: Mutex<LruCache<Arc<str>, RelPath>>,
    capacity: NonZeroUsize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl PathInterner {
    /// Create an interner with the default capacity
    pub fn new() -> Self {
        Self::from_config(&CacheConfig::default())
    }

    /// Create an interner holding at most `capacity` paths
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        debug!(capacity = capacity.get(), "creating path interner");
        Self {
            cache: Mutex::new(LruCache::unbounded()),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Create an interner sized by `config`
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_capacity(config.intern_capacity)
    }

    /// Intern a path string, validating it on first sight
    ///
    /// Validation runs without the lock held, so concurrent callers may
    /// each build a path for the same string. Whichever instance is cached
    /// first is the one handed out afterwards; all of them are equal.
    pub fn intern(&self, s: &str) -> Result<RelPath> {
        if s.is_empty() {
            return Ok(RelPath::empty());
        }

        // Fast path: already cached
        let cached = self.cache.lock().get(s).cloned();
        if let Some(path) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(path);
        }

        let path = match RelPath::new(s) {
            Ok(path) => path,
            Err(err) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return Err(err);
            }
        };

        let mut cache = self.cache.lock();

        // Another thread may have installed an equal path meanwhile
        if let Some(existing) = cache.get(s).cloned() {
            drop(cache);
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(existing);
        }

        cache.put(Arc::clone(path.shared_str()), path.clone());
        let evicted = if cache.len() > self.capacity.get() {
            cache.pop_lru()
        } else {
            None
        };
        drop(cache);

        self.misses.fetch_add(1, Ordering::Relaxed);
        if let Some((evicted, _)) = evicted {
            self.evictions.fetch_add(1, Ordering::Relaxed);
            trace!(path = %evicted, "evicted interned path");
        }

        Ok(path)
    }

    /// Get current number of cached paths
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the interner is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Maximum number of cached paths
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Snapshot of the hit/miss/eviction counters
    pub fn stats(&self) -> InternerStats {
        InternerStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

impl Default for PathInterner {
    fn default() -> Self {
        Self::new()
    }
}
