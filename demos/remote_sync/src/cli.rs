//! Command-line interface of the demo.

use std::path::PathBuf;

use clap::Parser;
use strict_settings::ConfigPaths;

/// Command-line arguments for `remote-sync`.
#[derive(Debug, Clone, Parser)]
#[command(name = "remote-sync", version, about = "Synchronise a remote media library")]
pub struct Cli {
    /// Application name used for `/usr/local/etc/<app-name>/settings.yaml`.
    #[arg(long, default_value = "remote-sync")]
    pub app_name: String,
    /// Replaces `/usr/local/etc` when looking for the system file.
    #[arg(long, hide = true)]
    pub system_root: Option<PathBuf>,
    /// Replaces `/config` when looking for the container file.
    #[arg(long, hide = true)]
    pub container_dir: Option<PathBuf>,
}

impl Cli {
    /// Candidate settings locations for this invocation.
    #[must_use]
    pub fn config_paths(&self) -> ConfigPaths {
        let mut builder = ConfigPaths::builder(self.app_name.as_str());
        if let Some(root) = &self.system_root {
            builder = builder.system_root(root);
        }
        if let Some(dir) = &self.container_dir {
            builder = builder.container_dir(dir);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn app_name_defaults_to_binary_name() {
        let cli = Cli::try_parse_from(["remote-sync"]).expect("parse defaults");
        assert_eq!(cli.app_name, "remote-sync");
    }

    #[rstest]
    fn app_name_can_be_overridden() {
        let cli = Cli::try_parse_from(["remote-sync", "--app-name", "media"])
            .expect("parse override");
        assert_eq!(cli.app_name, "media");
    }

    #[rstest]
    fn default_locations_are_used_without_overrides() {
        let cli = Cli::try_parse_from(["remote-sync"]).expect("parse defaults");
        assert_eq!(
            cli.config_paths().candidates(),
            ConfigPaths::new("remote-sync").candidates()
        );
    }

    #[rstest]
    fn hidden_overrides_move_system_and_container_files() {
        let cli = Cli::try_parse_from([
            "remote-sync",
            "--system-root",
            "/tmp/etc",
            "--container-dir",
            "/tmp/config",
        ])
        .expect("parse overrides");
        assert_eq!(
            cli.config_paths().candidates(),
            [
                PathBuf::from("./settings.yaml"),
                PathBuf::from("/tmp/etc/remote-sync/settings.yaml"),
                PathBuf::from("/tmp/config/settings.yaml"),
            ]
        );
    }
}
