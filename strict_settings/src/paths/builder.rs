//! Builder for [`ConfigPaths`].
//!
//! The builder lets deployments relocate the three base directories or
//! rename the settings file before producing the candidate list. The
//! priority order (local, system, container) never changes.

use std::path::PathBuf;

use super::{ConfigPaths, DEFAULT_FILE_NAME};

/// Builder for [`ConfigPaths`].
///
/// # Examples
///
/// ```rust
/// use std::path::PathBuf;
/// use strict_settings::ConfigPaths;
///
/// let paths = ConfigPaths::builder("remote-sync")
///     .file_name("remote.yaml")
///     .container_dir("/srv/config")
///     .build();
/// assert_eq!(
///     paths.candidates(),
///     [
///         PathBuf::from("./remote.yaml"),
///         PathBuf::from("/usr/local/etc/remote-sync/remote.yaml"),
///         PathBuf::from("/srv/config/remote.yaml"),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ConfigPathsBuilder {
    app_name: String,
    file_name: String,
    local_dir: PathBuf,
    system_root: PathBuf,
    container_dir: PathBuf,
}

impl ConfigPathsBuilder {
    /// Creates a builder initialised for `app_name` with the default
    /// locations.
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            file_name: String::from(DEFAULT_FILE_NAME),
            local_dir: PathBuf::from("."),
            system_root: PathBuf::from("/usr/local/etc"),
            container_dir: PathBuf::from("/config"),
        }
    }

    /// Overrides the settings file name searched in every location.
    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Overrides the directory searched first (`.` by default).
    #[must_use]
    pub fn local_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.local_dir = dir.into();
        self
    }

    /// Overrides the root under which `<app_name>/` is searched second
    /// (`/usr/local/etc` by default).
    #[must_use]
    pub fn system_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.system_root = root.into();
        self
    }

    /// Overrides the directory searched last (`/config` by default).
    #[must_use]
    pub fn container_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.container_dir = dir.into();
        self
    }

    /// Finalises the builder into a [`ConfigPaths`].
    #[must_use]
    pub fn build(self) -> ConfigPaths {
        let app_name = self.app_name.trim();
        let system_dir = if app_name.is_empty() {
            self.system_root
        } else {
            self.system_root.join(app_name)
        };
        ConfigPaths::from_locations(
            [
                self.local_dir.join(&self.file_name),
                system_dir.join(&self.file_name),
                self.container_dir.join(&self.file_name),
            ],
            self.app_name,
        )
    }
}
