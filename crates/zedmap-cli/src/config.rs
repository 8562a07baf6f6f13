//! Optional TOML configuration for the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

/// Game mode folder used when neither flag, prompt nor config names one.
pub const DEFAULT_MODE: &str = "Survivor";

/// Settings read from a TOML file.
///
/// Everything is optional; a missing or malformed file degrades to
/// defaults with a logged warning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Replaces the `<home>/Zomboid/Saves` root.
    pub saves_root: Option<PathBuf>,
    /// Replaces the default game mode folder.
    pub default_mode: Option<String>,
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                debug!("Config file not found or unreadable: {}", e);
                return None;
            }
        };

        match toml::from_str::<CliConfig>(&content) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("Failed to parse config file: {}", e);
                None
            }
        }
    }
}
