//! Error type for the `remote-sync` demo.
//!
//! Settings failures are passed through untouched so `main` can render the
//! loader's message, including the list of checked paths.

use thiserror::Error;

/// Errors raised by the demo application.
#[derive(Debug, Error)]
pub enum RemoteSyncError {
    /// Locating, decoding or validating the settings failed.
    #[error(transparent)]
    Settings(#[from] strict_settings::SettingsError),
    /// Writing the summary to standard output failed.
    #[error("failed to write summary: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for the demo.
pub type Result<T> = std::result::Result<T, RemoteSyncError>;
