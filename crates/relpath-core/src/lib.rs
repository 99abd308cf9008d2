//! # relpath core
//!
//! Canonical relative paths for large in-memory artifact indexes.
//!
//! This library provides:
//! - **[`RelPath`]**, a `/`-separated path value that compares the same on
//!   every host and rejects absolute, trailing-separator, empty and dot
//!   components up front
//! - **[`PathInterner`]**, a bounded LRU cache sharing `RelPath` instances
//!   for frequently seen strings
//! - **[`BidirectionalIndexCache`]**, an append-only map assigning every
//!   distinct path a dense, permanent [`DenseIndex`] for graph and bitmap
//!   storage
//! - **[`PathCaches`]**, the service object bundling both caches
//!
//! ## Example
//!
//! ```
//! use relpath_core::{CacheConfig, PathCaches, RelPath};
//!
//! # fn example() -> relpath_core::Result<()> {
//! let caches = PathCaches::shared(CacheConfig::default());
//!
//! let path = caches.intern("src/lib.rs")?;
//! let index = caches.index_of(&path)?;
//! assert_eq!(caches.resolve_index(index)?, path);
//!
//! assert!(path.starts_with(&RelPath::new("src")?));
//! assert!(RelPath::new("src/../lib.rs").is_err());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod caches;
pub mod config;
pub mod error;
pub mod index;
pub mod interner;
pub mod path;
pub mod platform;
pub mod traits;
pub mod types;

pub use caches::{PathCaches, SharedPathCaches};
pub use config::CacheConfig;
pub use error::{Error, ErrorKind, Result};
pub use index::{BidirectionalIndexCache, PathIndex};
pub use interner::{InternerStats, PathInterner};
pub use path::RelPath;
pub use platform::{NativePaths, SeparatorStyle};
pub use traits::PlatformPaths;
pub use types::{DenseIndex, InvalidPathReason};

