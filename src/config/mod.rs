use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

mod runtime;

pub use runtime::{
    parse_runtime_script, render_runtime_script, resolve, ConfigInputs, ConfigSource,
    RuntimeConfig, API_URL_ENV, DEFAULT_API_URL,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid runtime script: {0}")]
    Script(String),
    #[error("invalid runtime config payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Runtime-injected API base URL
    #[serde(default)]
    pub api_url: Option<String>,

    #[serde(default)]
    pub airport_code: Option<String>,

    #[serde(default)]
    pub airport_name: Option<String>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Outcome of looking for a config file. A broken file is carried in `error`
/// so the caller can report it once logging is up.
#[derive(Debug, Default)]
pub struct Loaded {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub error: Option<ConfigError>,
}

/// Load `explicit` or the default config file, falling back to defaults.
/// A missing default file is not an error; a missing explicit one is.
pub fn load(explicit: Option<&Path>) -> Loaded {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_path) else {
        return Loaded::default();
    };
    if explicit.is_none() && !path.exists() {
        return Loaded {
            path: Some(path),
            ..Loaded::default()
        };
    }
    match load_from(&path) {
        Ok(config) => Loaded {
            config,
            path: Some(path),
            error: None,
        },
        Err(err) => Loaded {
            config: Config::default(),
            path: Some(path),
            error: Some(err),
        },
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = read(path)?;
    Ok(toml::from_str::<Config>(&content)?)
}

/// Read a `config.js` style runtime script and return its `apiUrl`
pub fn load_runtime_script(path: &Path) -> Result<Option<String>, ConfigError> {
    let content = read(path)?;
    parse_runtime_script(&content)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("RUNWAY_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("runway-watcher").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("runway-watcher").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "runwaywatcher", "runway-watcher")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("runway-watcher"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("runway-watcher"));
    }
    directories::ProjectDirs::from("io", "runwaywatcher", "runway-watcher")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("runway-watcher.log"))
}

pub fn exports_dir() -> PathBuf {
    data_dir()
        .map(|dir| dir.join("exports"))
        .unwrap_or_else(|| PathBuf::from(".runway-watcher").join("exports"))
}
