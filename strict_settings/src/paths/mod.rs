//! Candidate locations of the settings file and their resolution.
//!
//! [`ConfigPaths`] is built once by the application from its name and lists
//! the locations in priority order:
//!
//! 1. `./settings.yaml` for local overrides,
//! 2. `/usr/local/etc/<app_name>/settings.yaml` for system installations,
//! 3. `/config/settings.yaml` for container deployments.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::{SettingsError, SettingsResult};

mod builder;

pub use builder::ConfigPathsBuilder;

/// File name searched in every location unless overridden.
pub const DEFAULT_FILE_NAME: &str = "settings.yaml";

/// Ordered candidate locations of the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    app_name: String,
    candidates: Vec<PathBuf>,
}

impl ConfigPaths {
    /// Candidate list for `app_name` using the default locations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::path::PathBuf;
    /// use strict_settings::ConfigPaths;
    ///
    /// let paths = ConfigPaths::new("remote-sync");
    /// assert_eq!(
    ///     paths.candidates(),
    ///     [
    ///         PathBuf::from("./settings.yaml"),
    ///         PathBuf::from("/usr/local/etc/remote-sync/settings.yaml"),
    ///         PathBuf::from("/config/settings.yaml"),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self::builder(app_name).build()
    }

    /// Creates a builder initialised for `app_name`.
    #[must_use]
    pub fn builder(app_name: impl Into<String>) -> ConfigPathsBuilder {
        ConfigPathsBuilder::new(app_name)
    }

    /// Keeps the first occurrence of every non-empty location.
    fn from_locations(locations: impl IntoIterator<Item = PathBuf>, app_name: String) -> Self {
        let mut seen = HashSet::new();
        let candidates = locations
            .into_iter()
            .filter(|path| !path.as_os_str().is_empty())
            .filter(|path| seen.insert(path.clone()))
            .collect();
        Self {
            app_name,
            candidates,
        }
    }

    /// Name of the application the system location is derived from.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Returns the candidates in priority order.
    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Returns the first candidate that exists.
    ///
    /// # Errors
    ///
    /// See [`resolve_path`].
    pub fn resolve(&self) -> SettingsResult<PathBuf> {
        resolve_path(&self.candidates)
    }
}

/// Returns the first of `candidates` that exists on disk.
///
/// Only existence is checked; the file is not opened.
///
/// # Errors
///
/// Returns [`SettingsError::MissingFile`] listing every candidate when none
/// of them exists.
///
/// # Examples
///
/// ```rust
/// use std::path::PathBuf;
/// use strict_settings::{SettingsError, resolve_path};
///
/// let candidates = [PathBuf::from("/nonexistent/settings.yaml")];
/// let err = resolve_path(&candidates).expect_err("nothing exists");
/// assert!(matches!(err, SettingsError::MissingFile { .. }));
/// ```
pub fn resolve_path<P: AsRef<Path>>(candidates: &[P]) -> SettingsResult<PathBuf> {
    for candidate in candidates {
        let path = candidate.as_ref();
        if path.exists() {
            tracing::debug!(path = %path.display(), "using configuration file");
            return Ok(path.to_path_buf());
        }
        tracing::debug!(path = %path.display(), "configuration candidate not found");
    }

    tracing::error!("please provide a configuration file");
    tracing::error!("the configuration file can be placed at:");
    for candidate in candidates {
        tracing::error!(" -> {}", candidate.as_ref().display());
    }
    Err(SettingsError::MissingFile {
        candidates: candidates
            .iter()
            .map(|candidate| candidate.as_ref().to_path_buf())
            .collect(),
    })
}
