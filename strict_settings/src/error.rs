//! Error type returned by the settings loader.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::FieldPath;

/// Result alias used throughout the crate.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors that can occur while locating, decoding or validating settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// None of the candidate paths exists.
    #[error("no configuration file found; checked: {}", CandidateList(candidates))]
    MissingFile {
        /// Every candidate that was checked, in priority order.
        candidates: Vec<PathBuf>,
    },

    /// The resolved file exists but could not be read.
    #[error("failed to read configuration file '{}': {source}", path.display())]
    Unreadable {
        /// Path that was resolved.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid YAML for the target record.
    #[error("failed to decode configuration file '{}': {source}", path.display())]
    Malformed {
        /// Path that was resolved.
        path: PathBuf,
        /// Parser or extraction failure reported by Figment.
        #[source]
        source: Box<figment::Error>,
    },

    /// A field is still at its default value after decoding.
    #[error("field '{field}' in the configuration must not be empty")]
    Incomplete {
        /// Qualified key of the first unset field.
        field: FieldPath,
    },
}

impl SettingsError {
    /// Builds a [`SettingsError::Malformed`] for `path`.
    pub(crate) fn malformed(path: impl Into<PathBuf>, source: figment::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Returns the qualified key of the unset field for
    /// [`SettingsError::Incomplete`].
    #[must_use]
    pub const fn unset_field(&self) -> Option<&FieldPath> {
        match self {
            Self::Incomplete { field } => Some(field),
            _ => None,
        }
    }
}

struct CandidateList<'a>(&'a [PathBuf]);

impl fmt::Display for CandidateList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(no candidates)");
        }
        for (idx, path) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", path.display())?;
        }
        Ok(())
    }
}
