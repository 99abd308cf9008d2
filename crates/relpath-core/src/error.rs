//! Error types for relpath-core

use crate::types::{DenseIndex, InvalidPathReason};
use thiserror::Error;

/// Result type alias for relpath operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for relpath operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input violates a canonical path invariant
    #[error("Invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The rejected input, as received
        path: String,
        /// Which invariant the input broke
        reason: InvalidPathReason,
    },

    /// Reverse lookup of an index that was never committed
    #[error("Index {index} out of range: {len} values indexed")]
    IndexOutOfRange {
        /// The requested index
        index: DenseIndex,
        /// Number of committed indices at the time of the lookup
        len: usize,
    },

    /// Every `u32` index has been handed out
    #[error("Index space exhausted after {len} values")]
    IndexSpaceExhausted {
        /// Number of committed indices
        len: usize,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid_path(path: impl Into<String>, reason: InvalidPathReason) -> Self {
        Error::InvalidPath {
            path: path.into(),
            reason,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(format!("JSON error: {}", err))
    }
}

/// Fieldless error category for zero-cost pattern matching.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Invalid path error
    InvalidPath,
    /// Index never committed
    IndexOutOfRange,
    /// Index space exhausted
    IndexSpaceExhausted,
    /// Configuration error
    Config,
}

impl Error {
    /// Get the error kind — zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPath { .. } => ErrorKind::InvalidPath,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::IndexSpaceExhausted { .. } => ErrorKind::IndexSpaceExhausted,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// The invalid-path reason, if this is a path validation failure.
    #[inline]
    pub const fn invalid_path_reason(&self) -> Option<InvalidPathReason> {
        match self {
            Error::InvalidPath { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
