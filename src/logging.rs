//! File-backed logging. The terminal belongs to the UI, so records never go to stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

pub const DEFAULT_LEVEL: &str = "info";

/// Install the global logger writing to `path`.
///
/// `RUST_LOG` wins over `level`, which wins over `DEFAULT_LEVEL`.
pub fn init(path: &Path, level: Option<&str>) -> std::io::Result<PathBuf> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let level = level
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LEVEL);
    let mut builder = Builder::from_env(Env::default().default_filter_or(level));
    builder
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis();

    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
    Ok(path.to_path_buf())
}
