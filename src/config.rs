//! Optional on-disk configuration.
//!
//! A small JSON file choosing the theme and the starting inputs:
//!
//! ```json
//! { "theme": "light", "inputs": { "hours_per_week": 20, "using_data_tool": true } }
//! ```
//!
//! Every key is optional. A missing file means built-in defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{Inputs, ThemeName};

/// Config filename within the config directory.
const CONFIG_FILENAME: &str = "config.json";

/// Settings loaded from the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
    /// Starting inputs. Clamped when handed to the state holder.
    pub inputs: Inputs,
}

/// Returns the default config file location.
///
/// On Linux: ~/.config/roi-calc/config.json
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roi-calc")
        .join(CONFIG_FILENAME)
}

/// Load config from `path`, falling back to defaults if the file is absent.
pub fn load_config(path: &Path) -> Result<Config> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(Error::ConfigRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config: Config = serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), theme = %config.theme, "loaded config");
    Ok(config)
}

// ============================================================================
// TESTS
// ============================================================================
