//! Temporary mirror of the three settings locations.
//!
//! Tests point a `ConfigPaths` builder at [`CandidateLayout::local_dir`],
//! [`CandidateLayout::system_root`] and [`CandidateLayout::container_dir`],
//! then write settings files into whichever locations the scenario needs.
//! Scenarios that rely on the relative `./settings.yaml` candidate call
//! [`CandidateLayout::enter_local_dir`].

use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use parking_lot::{Mutex, MutexGuard};
use tempfile::TempDir;

/// The working directory is process-global; every layout that enters its
/// local directory holds this lock until the guard drops.
static WORKING_DIR: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// One of the candidate locations, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Working-directory override.
    Local,
    /// System installation under `<root>/<app_name>/`.
    System,
    /// Container deployment.
    Container,
}

impl Location {
    /// All locations from highest to lowest priority.
    pub const ALL: [Self; 3] = [Self::Local, Self::System, Self::Container];
}

/// Temporary directory laid out like a host with the three locations.
#[derive(Debug)]
pub struct CandidateLayout {
    _root: TempDir,
    base: Utf8PathBuf,
    app_name: String,
    file_name: String,
}

impl CandidateLayout {
    /// Creates an empty layout for `app_name` using `settings.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created or its
    /// path is not UTF-8.
    pub fn new(app_name: impl Into<String>) -> Result<Self> {
        let root = tempfile::tempdir().context("create layout root")?;
        let base = Utf8PathBuf::from_path_buf(root.path().to_path_buf())
            .map_err(|path| anyhow!("layout root is not UTF-8: {}", path.display()))?;
        Ok(Self {
            _root: root,
            base,
            app_name: app_name.into(),
            file_name: String::from("settings.yaml"),
        })
    }

    /// Application name used for the system location.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Stand-in for the working directory.
    #[must_use]
    pub fn local_dir(&self) -> Utf8PathBuf {
        self.base.join("work")
    }

    /// Stand-in for `/usr/local/etc`.
    #[must_use]
    pub fn system_root(&self) -> Utf8PathBuf {
        self.base.join("usr/local/etc")
    }

    /// Stand-in for `/config`.
    #[must_use]
    pub fn container_dir(&self) -> Utf8PathBuf {
        self.base.join("config")
    }

    /// Full path of the settings file at `location`.
    #[must_use]
    pub fn file_path(&self, location: Location) -> Utf8PathBuf {
        let dir = match location {
            Location::Local => self.local_dir(),
            Location::System => self.system_root().join(&self.app_name),
            Location::Container => self.container_dir(),
        };
        dir.join(&self.file_name)
    }

    /// Writes `contents` to the settings file at `location`, creating parent
    /// directories, and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn write(&self, location: Location, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.file_path(location);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Creates a directory where the settings file at `location` would be,
    /// producing a candidate that exists but cannot be read as a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn block_with_directory(&self, location: Location) -> Result<Utf8PathBuf> {
        let path = self.file_path(location);
        std::fs::create_dir_all(&path).with_context(|| format!("create {path}"))?;
        Ok(path)
    }

    /// Creates the local directory if needed and makes it the process
    /// working directory until the returned guard drops.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or entered, or
    /// the current directory cannot be read.
    pub fn enter_local_dir(&self) -> Result<LocalDirGuard<'_>> {
        let lock = WORKING_DIR.lock();
        let local = self.local_dir();
        std::fs::create_dir_all(&local).with_context(|| format!("create {local}"))?;
        let previous = std::env::current_dir().context("read working directory")?;
        std::env::set_current_dir(&local).with_context(|| format!("enter {local}"))?;
        Ok(LocalDirGuard {
            _layout: self,
            previous,
            _lock: lock,
        })
    }
}

/// Keeps a layout's local directory as the working directory.
///
/// Borrowing the layout keeps its temporary directory alive for as long as
/// the process sits inside it.
#[must_use = "dropping the guard leaves the local directory immediately"]
pub struct LocalDirGuard<'layout> {
    _layout: &'layout CandidateLayout,
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl Drop for LocalDirGuard<'_> {
    fn drop(&mut self) {
        // Nothing useful can be done with a failure while unwinding.
        let _ignored = std::env::set_current_dir(&self.previous);
    }
}
