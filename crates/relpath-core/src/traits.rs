//! Trait definitions for the seams to external collaborators

use crate::error::Result;
use crate::types::InvalidPathReason;
use std::borrow::Cow;

/// A platform's native hierarchical path representation
///
/// Implemented by whatever filesystem abstraction hands paths to the
/// canonical layer. Canonical paths use `/`; the platform decides how its
/// own paths are split and joined.
pub trait PlatformPaths {
    /// Borrowed native path type (`std::path::Path`, `str`, ...)
    type Path: ?Sized + ToOwned;

    /// Rewrite a relative native path into `/`-separated form.
    ///
    /// Must reject rooted or prefixed paths with
    /// [`InvalidPathReason::Absolute`](crate::types::InvalidPathReason::Absolute).
    /// The result is validated by the caller, so it may still contain
    /// empty or dot components.
    fn to_canonical<'a>(&self, path: &'a Self::Path) -> Result<Cow<'a, str>>;

    /// Build a native path from canonical components using the platform's
    /// joining rules. No components yields the platform's empty path.
    ///
    /// Must fail with [`InvalidPathReason::Unrepresentable`] for any component
    /// that would not read back as that same single component through
    /// [`PlatformPaths::to_canonical`], e.g. one holding a native separator.
    fn from_components<'a, I>(
        &self,
        components: I,
    ) -> std::result::Result<<Self::Path as ToOwned>::Owned, InvalidPathReason>
    where
        I: IntoIterator<Item = &'a str>;
}
