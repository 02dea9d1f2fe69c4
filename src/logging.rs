//! File logging. The terminal belongs to the game, so records go to
//! `<cache_dir>/copter/copter.log` instead of stderr.

use crate::core::{LOG_ENV_VAR, LOG_FILE_NAME};
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Default log location, if the platform has a cache directory.
pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "copter").map(|dirs| dirs.cache_dir().join(LOG_FILE_NAME))
}

/// Install the global logger writing to `path`. The filter comes from
/// `COPTER_LOG` and defaults to `info`.
pub fn init_at(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV_VAR, "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}

/// Best-effort setup: the game runs without a log when the file can't be opened.
pub fn init() -> Option<PathBuf> {
    let path = log_path()?;
    init_at(&path).ok()?;
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_ends_with_file_name() {
        if let Some(path) = log_path() {
            assert!(path.ends_with(LOG_FILE_NAME));
        }
    }
}
