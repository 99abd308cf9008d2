//! Core type definitions shared by the path value and the caches

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense index handle - a permanent identity assigned by an index cache
///
/// This is Copy-able and has zero overhead. Indices start at 0 and are
/// assigned without gaps, so they can address arrays and bitmaps directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DenseIndex(pub(crate) u32);

impl DenseIndex {
    /// Wrap a raw index, e.g. one read back out of a bitmap
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw `u32` value
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The index as a `usize`, for slice addressing
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<DenseIndex> for u32 {
    #[inline]
    fn from(index: DenseIndex) -> Self {
        index.0
    }
}

impl From<DenseIndex> for usize {
    #[inline]
    fn from(index: DenseIndex) -> Self {
        index.as_usize()
    }
}

impl fmt::Display for DenseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a string was rejected as a canonical relative path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum InvalidPathReason {
    /// Leading separator, root or drive prefix
    Absolute,
    /// Ends with a separator
    TrailingSeparator,
    /// Two consecutive separators
    EmptyComponent,
    /// A `.` component
    CurrentDir,
    /// A `..` component
    ParentDir,
    /// Native path is not valid UTF-8
    NonUtf8,
    /// A component cannot be written as a single component on the target
    /// platform
    Unrepresentable,
}

impl InvalidPathReason {
    /// Get string representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Absolute => "absolute path",
            Self::TrailingSeparator => "trailing separator",
            Self::EmptyComponent => "empty component",
            Self::CurrentDir => "'.' component",
            Self::ParentDir => "'..' component",
            Self::NonUtf8 => "not valid UTF-8",
            Self::Unrepresentable => "not representable on this platform",
        }
    }
}

impl fmt::Display for InvalidPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
