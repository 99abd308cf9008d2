//! Platform-specific path interop

use crate::error::{Error, Result};
use crate::path::SEPARATOR;
use crate::traits::PlatformPaths;
use crate::types::InvalidPathReason;
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Host paths through `std::path`
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePaths;

impl PlatformPaths for NativePaths {
    type Path = Path;

    fn to_canonical<'a>(&self, path: &'a Path) -> Result<Cow<'a, str>> {
        let rooted = path.is_absolute()
            || path
                .components()
                .any(|c| matches!(c, Component::Prefix(_) | Component::RootDir));
        if rooted {
            return Err(Error::invalid_path(
                path.to_string_lossy(),
                InvalidPathReason::Absolute,
            ));
        }

        let s = path.to_str().ok_or_else(|| {
            Error::invalid_path(path.to_string_lossy(), InvalidPathReason::NonUtf8)
        })?;

        if MAIN_SEPARATOR == SEPARATOR || !s.contains(MAIN_SEPARATOR) {
            Ok(Cow::Borrowed(s))
        } else {
            Ok(Cow::Owned(s.replace(MAIN_SEPARATOR, "/")))
        }
    }

    fn from_components<'a, I>(
        &self,
        components: I,
    ) -> std::result::Result<PathBuf, InvalidPathReason>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = PathBuf::new();
        for component in components {
            // Must parse back as exactly this one normal component
            let mut parsed = Path::new(component).components();
            match (parsed.next(), parsed.next()) {
                (Some(Component::Normal(c)), None) if c == OsStr::new(component) => {
                    out.push(component)
                }
                _ => return Err(InvalidPathReason::Unrepresentable),
            }
        }
        Ok(out)
    }
}

/// String paths with a fixed separator convention, independent of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorStyle {
    separator: char,
    alt_separator: Option<char>,
    drive_prefixes: bool,
}

impl SeparatorStyle {
    /// `/`-separated paths
    pub const POSIX: Self = Self {
        separator: '/',
        alt_separator: None,
        drive_prefixes: false,
    };

    /// `\`-separated paths; `/` is accepted on input and `C:` prefixes are rooted
    pub const WINDOWS: Self = Self {
        separator: '\\',
        alt_separator: Some('/'),
        drive_prefixes: true,
    };

    /// Get the separator used when joining
    #[inline]
    pub const fn separator(&self) -> char {
        self.separator
    }

    #[inline]
    fn is_separator(&self, c: char) -> bool {
        c == self.separator || Some(c) == self.alt_separator
    }

    fn has_drive_prefix(&self, path: &str) -> bool {
        let bytes = path.as_bytes();
        self.drive_prefixes
            && bytes.len() >= 2
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
    }

    fn is_rooted(&self, path: &str) -> bool {
        path.starts_with(|c: char| self.is_separator(c)) || self.has_drive_prefix(path)
    }
}

impl PlatformPaths for SeparatorStyle {
    type Path = str;

    fn to_canonical<'a>(&self, path: &'a str) -> Result<Cow<'a, str>> {
        if self.is_rooted(path) {
            return Err(Error::invalid_path(path, InvalidPathReason::Absolute));
        }

        if self.separator == SEPARATOR && self.alt_separator.is_none() {
            return Ok(Cow::Borrowed(path));
        }
        if !path.contains(|c: char| c != SEPARATOR && self.is_separator(c)) {
            return Ok(Cow::Borrowed(path));
        }
        Ok(Cow::Owned(
            path.chars()
                .map(|c| if self.is_separator(c) { SEPARATOR } else { c })
                .collect(),
        ))
    }

    fn from_components<'a, I>(
        &self,
        components: I,
    ) -> std::result::Result<String, InvalidPathReason>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = String::new();
        for (i, component) in components.into_iter().enumerate() {
            if component.contains(|c: char| self.is_separator(c)) {
                return Err(InvalidPathReason::Unrepresentable);
            }
            if i > 0 {
                out.push(self.separator);
            } else if self.has_drive_prefix(component) {
                // Would read back as a drive root
                return Err(InvalidPathReason::Unrepresentable);
            }
            out.push_str(component);
        }
        Ok(out)
    }
}
