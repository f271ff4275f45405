//! Reading, decoding and validating a settings file.
//!
//! Decoding layers the YAML document over the target's current values, so
//! keys missing from the file leave the corresponding fields untouched.
//! Validation then reports the first field that is still unset.

mod yaml;

pub use yaml::SaphyrYaml;

use std::path::Path;

use figment::Figment;
use figment::providers::Serialized;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ConfigPaths, SettingsError, SettingsResult, Validate, validate};

/// Loads settings from the first existing candidate into a default record.
///
/// # Errors
///
/// See [`load_settings_into`].
///
/// # Examples
///
/// ```rust,no_run
/// use serde::{Deserialize, Serialize};
/// use strict_settings::{ConfigPaths, Validate, load_settings};
///
/// #[derive(Default, Deserialize, Serialize, Validate)]
/// struct Remote {
///     host: String,
///     port: u16,
/// }
///
/// # fn run() -> strict_settings::SettingsResult<()> {
/// let remote: Remote = load_settings(&ConfigPaths::new("remote-sync"))?;
/// # Ok(())
/// # }
/// ```
pub fn load_settings<T>(paths: &ConfigPaths) -> SettingsResult<T>
where
    T: Default + Serialize + DeserializeOwned + Validate,
{
    let mut settings = T::default();
    load_settings_into(paths, &mut settings)?;
    Ok(settings)
}

/// Resolves the settings file from `paths`, decodes it over `target` and
/// validates the result.
///
/// # Errors
///
/// - [`SettingsError::MissingFile`] when no candidate exists.
/// - [`SettingsError::Unreadable`] when the resolved file cannot be read.
/// - [`SettingsError::Malformed`] when the YAML cannot be decoded into `T`;
///   `target` is left unchanged.
/// - [`SettingsError::Incomplete`] when a field is unset after decoding.
pub fn load_settings_into<T>(paths: &ConfigPaths, target: &mut T) -> SettingsResult<()>
where
    T: Serialize + DeserializeOwned + Validate,
{
    let path = paths.resolve()?;
    load_settings_from(&path, target)
}

/// Reads, decodes and validates the settings file at an already resolved
/// `path`.
///
/// # Errors
///
/// As [`load_settings_into`], except that no candidate resolution happens.
pub fn load_settings_from<T>(path: &Path, target: &mut T) -> SettingsResult<()>
where
    T: Serialize + DeserializeOwned + Validate,
{
    let contents = std::fs::read_to_string(path).map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "failed to read configuration file");
        SettingsError::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    })?;
    *target = decode(path, &contents, target)?;
    tracing::debug!(path = %path.display(), "decoded configuration file");
    validate(target)
}

fn decode<T>(path: &Path, contents: &str, current: &T) -> SettingsResult<T>
where
    T: Serialize + DeserializeOwned,
{
    Figment::from(Serialized::defaults(current))
        .merge(SaphyrYaml::string(path, contents))
        .extract()
        .map_err(|err| {
            tracing::error!(path = %path.display(), error = %err, "failed to decode configuration file");
            SettingsError::malformed(path, err)
        })
}
