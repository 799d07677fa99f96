//! Optional TOML settings.
//!
//! Every field has a default, so a missing file or a file that sets only
//! some keys is fine. Command-line flags are applied on top in
//! `commands::Context::resolve`.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::generator::DEFAULT_LENGTH;

const CONFIG_ENV: &str = "LAZYPASS_CONFIG";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Location of the JSON data file. Relative paths resolve against the
    /// working directory.
    pub data_file: PathBuf,
    pub password_length: usize,
    /// Seconds before a copied password is cleared. 0 leaves it in place.
    pub clipboard_clear_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data.json"),
            password_length: DEFAULT_LENGTH,
            clipboard_clear_secs: 10,
        }
    }
}

impl Config {
    /// Load from `explicit`, else `$LAZYPASS_CONFIG`, else the user config
    /// directory. A file that does not exist means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let Some(path) = explicit.map(Path::to_path_buf).or_else(resolve_config_path) else {
            return Ok(Config::default());
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        let config: Config = toml::from_str(&raw).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

fn resolve_config_path() -> Option<PathBuf> {
    config_path_from(env::var_os(CONFIG_ENV), dirs::config_dir())
}

fn config_path_from(env_path: Option<OsString>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    match env_path {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => config_dir.map(|base| base.join("lazypass").join("config.toml")),
    }
}
