use crate::error::{Result, StacksError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// User preferences, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Wait for Enter after each books-menu action
    #[serde(default = "default_true")]
    pub pause_after_action: bool,

    /// Use ANSI colors when the terminal supports them
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            pause_after_action: true,
            color: true,
        }
    }
}

impl LibraryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StacksError::Io)?;
        let config: LibraryConfig =
            serde_json::from_str(&content).map_err(StacksError::Serialization)?;
        Ok(config)
    }
}
