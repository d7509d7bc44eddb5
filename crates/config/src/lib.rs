mod types;

use std::path::{Path, PathBuf};

use merge2::Merge;

pub use clap::Parser;
pub use directories::ProjectDirs;
pub use types::*;

#[inline]
pub(crate) fn swap_option<T>(left: &mut Option<T>, right: &mut Option<T>) {
    if left.is_none() || right.is_some() {
        core::mem::swap(left, right);
    }
}

pub fn write_default(path: impl AsRef<Path>) {
    // Failing to write the default config is fatal
    std::fs::write(path, toml::to_string_pretty(&Config::default()).unwrap()).unwrap();
}

/// Resolve the config path, load the file if it exists and merge the CLI
/// arguments over it. CLI values win; a malformed file is ignored.
pub fn get_config(args: &mut Config, project: Option<&ProjectDirs>) -> (PathBuf, Config) {
    let path = match (args.config.take(), project) {
        (Some(path), _) => {
            tracing::trace!("loading custom config path");
            path
        }
        (None, Some(project)) => {
            let dir = project.config_dir();
            _ = std::fs::create_dir_all(dir);
            dir.join("config.toml")
        }
        (None, None) => PathBuf::from("tinge.toml"),
    };
    tracing::info!("reading config from {path:?}");

    let mut config = match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!("ignoring malformed config file: {err}");
            Config::default()
        }),
        Err(_) => Config::default(),
    };
    config.merge(args);

    (path, config)
}
