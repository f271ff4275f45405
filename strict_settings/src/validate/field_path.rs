//! Qualified key of a field inside a settings record.

use std::fmt;

/// Dot-separated path to a field, outermost key first.
///
/// The empty path refers to the value that was validated itself; it is what
/// leaf types such as `String` or `u16` report when they hold their default.
///
/// # Examples
///
/// ```rust
/// use strict_settings::FieldPath;
///
/// let path = FieldPath::leaf("movies").within("path").within("remote");
/// assert_eq!(path.to_string(), "remote.path.movies");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Path referring to the validated value itself.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Path with a single key.
    #[must_use]
    pub fn leaf(key: impl Into<String>) -> Self {
        Self {
            segments: vec![key.into()],
        }
    }

    /// Places this path under the parent field `key`.
    #[must_use]
    pub fn within(mut self, key: impl Into<String>) -> Self {
        self.segments.insert(0, key.into());
        self
    }

    /// Keys from the outermost record inwards.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` when the path refers to the validated value itself.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        f.write_str(&self.segments.join("."))
    }
}

impl PartialEq<str> for FieldPath {
    fn eq(&self, other: &str) -> bool {
        let mut parts = other.split('.');
        !self.is_root()
            && self
                .segments
                .iter()
                .all(|segment| parts.next() == Some(segment.as_str()))
            && parts.next().is_none()
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
