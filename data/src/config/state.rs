use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Theme;

const STATE_DIR: &str = "pace-chart";
const STATE_FILE: &str = "state.json";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("no config directory available")]
    NoConfigDir,
}

/// Persisted user preferences. Unknown or missing fields fall back to
/// defaults so older state files keep loading.
#[derive(Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct State {
    pub selected_theme: Theme,
    pub custom_theme: Option<Theme>,
}

impl State {
    pub fn path() -> Result<PathBuf, ConfigError> {
        dirs_next::config_dir()
            .map(|dir| dir.join(STATE_DIR).join(STATE_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// A missing or unreadable state file is not an error; it logs and
    /// yields defaults.
    pub fn load() -> State {
        let contents = match Self::path().and_then(|path| Ok(fs::read_to_string(path)?)) {
            Ok(contents) => contents,
            Err(err) => {
                log::info!("no saved state, using defaults: {err}");
                return State::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(state) => state,
            Err(err) => {
                log::warn!("failed to parse saved state, using defaults: {err}");
                State::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
