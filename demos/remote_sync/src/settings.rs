//! Settings record consumed by the demo.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use strict_settings::{ConfigPaths, Validate, load_settings};

use crate::error::Result;

/// Library directories on the remote host.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LibraryPaths {
    /// Directory holding movies.
    pub movies: String,
    /// Directory holding shows.
    pub shows: String,
    /// Directory holding animes.
    pub animes: String,
}

/// Connection to the remote host.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Remote {
    /// Host name or address.
    pub host: String,
    /// SSH port.
    pub port: u16,
    /// Login user.
    pub user: String,
    /// Login password.
    pub pass: String,
    /// Library directories.
    pub path: LibraryPaths,
    /// Seconds between two synchronisation runs.
    pub reload: u32,
}

/// Top-level settings document.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RemoteSettings {
    /// The remote media library.
    pub remote: Remote,
}

impl RemoteSettings {
    /// Loads the settings from the first existing candidate in `paths`.
    ///
    /// # Errors
    ///
    /// Returns the loader's error when no file exists, the file cannot be
    /// read or decoded, or a field is left empty.
    pub fn load(paths: &ConfigPaths) -> Result<Self> {
        Ok(load_settings(paths)?)
    }
}

/// Writes a summary of `settings` to `out`. The password is never printed.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing fails.
pub fn write_summary<W: Write>(out: &mut W, settings: &RemoteSettings) -> io::Result<()> {
    let remote = &settings.remote;
    writeln!(
        out,
        "syncing {}@{}:{} every {}s",
        remote.user, remote.host, remote.port, remote.reload
    )?;
    for (kind, dir) in [
        ("movies", &remote.path.movies),
        ("shows", &remote.path.shows),
        ("animes", &remote.path.animes),
    ] {
        writeln!(out, "  {kind}: {dir}")?;
    }
    Ok(())
}

/// Prints the summary to standard output.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing to standard output fails.
pub fn print_summary(settings: &RemoteSettings) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_summary(&mut stdout, settings)
}
