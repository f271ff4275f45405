//! Core crate for the `strict_settings` loader.
//!
//! The loader looks for a `settings.yaml` file in a fixed set of candidate
//! locations, decodes the first one it finds into a caller-supplied record,
//! and rejects the result when any field is still at its default value.
//!
//! ```rust,no_run
//! use serde::{Deserialize, Serialize};
//! use strict_settings::{ConfigPaths, Validate, load_settings};
//!
//! #[derive(Debug, Default, Deserialize, Serialize, Validate)]
//! struct Remote {
//!     host: String,
//!     port: u16,
//! }
//!
//! # fn run() -> strict_settings::SettingsResult<()> {
//! let paths = ConfigPaths::new("remote-sync");
//! let remote: Remote = load_settings(&paths)?;
//! assert!(!remote.host.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! The companion `strict_settings_macros` crate provides
//! `#[derive(Validate)]`; it is re-exported here.

extern crate self as strict_settings;

pub use strict_settings_macros::Validate;

mod error;
mod load;
mod paths;
mod validate;

pub use error::{SettingsError, SettingsResult};
pub use load::{SaphyrYaml, load_settings, load_settings_from, load_settings_into};
pub use paths::{ConfigPaths, ConfigPathsBuilder, DEFAULT_FILE_NAME, resolve_path};
pub use validate::{FieldPath, Validate, validate};
