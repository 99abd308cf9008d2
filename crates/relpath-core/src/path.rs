//! Canonical relative path value
//!
//! A [`RelPath`] is a `/`-separated sequence of non-empty components, or the
//! empty path. It never starts or ends with a separator and never contains
//! `.` or `..` components, so two structurally identical paths always have
//! the same string form. Equality, ordering and hashing are defined on that
//! string alone.

use crate::error::{Error, Result};
use crate::platform::NativePaths;
use crate::traits::PlatformPaths;
use crate::types::InvalidPathReason;
use memchr::{memchr_iter, memrchr};
use once_cell::sync::Lazy;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Separator used by the canonical form, independent of the host
pub const SEPARATOR: char = '/';

const SEPARATOR_BYTE: u8 = b'/';

static EMPTY: Lazy<RelPath> = Lazy::new(|| RelPath(Arc::from("")));

/// Immutable canonical relative path, cheap to clone and share across threads
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelPath(Arc<str>);

/// Check `s` against every canonical path invariant
pub(crate) fn validate(s: &str) -> std::result::Result<(), InvalidPathReason> {
    let bytes = s.as_bytes();
    match (bytes.first(), bytes.last()) {
        (None, _) => return Ok(()),
        (Some(&SEPARATOR_BYTE), _) => return Err(InvalidPathReason::Absolute),
        (_, Some(&SEPARATOR_BYTE)) => return Err(InvalidPathReason::TrailingSeparator),
        _ => {}
    }

    for component in s.split(SEPARATOR) {
        match component {
            "" => return Err(InvalidPathReason::EmptyComponent),
            "." => return Err(InvalidPathReason::CurrentDir),
            ".." => return Err(InvalidPathReason::ParentDir),
            _ => {}
        }
    }
    Ok(())
}

impl RelPath {
    /// Validate `s` and build a path from it
    pub fn new(s: &str) -> Result<Self> {
        validate(s).map_err(|reason| Error::invalid_path(s, reason))?;
        if s.is_empty() {
            return Ok(Self::empty());
        }
        Ok(Self(Arc::from(s)))
    }

    /// Convert a platform-native path to canonical form and validate it
    pub fn from_platform<P>(platform: &P, path: &P::Path) -> Result<Self>
    where
        P: PlatformPaths + ?Sized,
    {
        let canonical = platform.to_canonical(path)?;
        Self::new(&canonical)
    }

    /// Convert a `std::path::Path` relative to some root
    pub fn from_std_path(path: &Path) -> Result<Self> {
        Self::from_platform(&NativePaths, path)
    }

    /// The empty path, identity element for [`RelPath::resolve`]
    #[inline]
    pub fn empty() -> Self {
        EMPTY.clone()
    }

    /// Check if this is the empty path
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The canonical string form
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The shared string backing this path
    #[inline]
    pub(crate) fn shared_str(&self) -> &Arc<str> {
        &self.0
    }

    /// Iterate over the components, yielding nothing for the empty path
    pub fn components(&self) -> impl Iterator<Item = &str> + '_ {
        (!self.is_empty())
            .then(|| self.0.split(SEPARATOR))
            .into_iter()
            .flatten()
    }

    /// Number of components
    pub fn component_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            memchr_iter(SEPARATOR_BYTE, self.0.as_bytes()).count() + 1
        }
    }

    /// Component-wise prefix test
    ///
    /// The empty path and the path itself are always prefixes. A textual
    /// prefix that stops inside a component is not: `a/b` is not a prefix
    /// of `a/bc`.
    pub fn starts_with(&self, prefix: &RelPath) -> bool {
        let (s, p) = (self.as_str(), prefix.as_str());
        p.is_empty()
            || s == p
            || (s.len() > p.len()
                && s.as_bytes()[p.len()] == SEPARATOR_BYTE
                && s.starts_with(p))
    }

    /// Remove `prefix`, returning `None` when it is not a component-wise prefix
    pub fn strip_prefix(&self, prefix: &RelPath) -> Option<RelPath> {
        if prefix.is_empty() {
            return Some(self.clone());
        }
        if !self.starts_with(prefix) {
            return None;
        }
        if self.0.len() == prefix.0.len() {
            return Some(Self::empty());
        }
        Some(Self(Arc::from(&self.0[prefix.0.len() + 1..])))
    }

    /// Join `other` onto this path
    ///
    /// Both operands are already canonical so no validation is repeated.
    pub fn resolve(&self, other: &RelPath) -> RelPath {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut joined = String::with_capacity(self.0.len() + 1 + other.0.len());
        joined.push_str(&self.0);
        joined.push(SEPARATOR);
        joined.push_str(&other.0);
        Self(Arc::from(joined))
    }

    /// Validate `other` and join it onto this path
    pub fn join(&self, other: &str) -> Result<RelPath> {
        Ok(self.resolve(&RelPath::new(other)?))
    }

    /// The final component, or the whole path if it has a single component
    pub fn name(&self) -> RelPath {
        match memrchr(SEPARATOR_BYTE, self.0.as_bytes()) {
            Some(idx) => Self(Arc::from(&self.0[idx + 1..])),
            None => self.clone(),
        }
    }

    /// Everything before the final component, or the empty path
    pub fn dirname(&self) -> RelPath {
        match memrchr(SEPARATOR_BYTE, self.0.as_bytes()) {
            Some(idx) => Self(Arc::from(&self.0[..idx])),
            None => Self::empty(),
        }
    }

    /// Extension of the final component, without the dot
    ///
    /// A leading dot (`.gitignore`) does not start an extension.
    pub fn extension(&self) -> Option<&str> {
        let name = match memrchr(SEPARATOR_BYTE, self.0.as_bytes()) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0[..],
        };
        match memrchr(b'.', name.as_bytes()) {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    /// Rebuild a platform-native path with the platform's joining rules
    ///
    /// Fails with [`InvalidPathReason::Unrepresentable`] when a component
    /// would read back differently on `platform`, such as `a\b` on a
    /// platform using `\` as separator. A path returned here always
    /// converts back to `self` through [`RelPath::from_platform`].
    pub fn to_platform<P>(&self, platform: &P) -> Result<<P::Path as ToOwned>::Owned>
    where
        P: PlatformPaths + ?Sized,
    {
        platform
            .from_components(self.components())
            .map_err(|reason| Error::invalid_path(self.as_str(), reason))
    }

    /// Rebuild as a host `PathBuf`
    pub fn to_path_buf(&self) -> Result<PathBuf> {
        self.to_platform(&NativePaths)
    }
}

impl Default for RelPath {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RelPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RelPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for RelPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for RelPath {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for RelPath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        if let Err(reason) = validate(&s) {
            return Err(Error::InvalidPath { path: s, reason });
        }
        if s.is_empty() {
            return Ok(Self::empty());
        }
        Ok(Self(Arc::from(s)))
    }
}

impl Serialize for RelPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RelPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RelPath::try_from(s).map_err(de::Error::custom)
    }
}
