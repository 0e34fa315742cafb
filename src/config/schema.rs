//! Configuration schema definitions

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Main configuration for vocli
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocliConfig {
    /// Interactive editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

impl VocliConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.editor.prompt.trim().is_empty() {
            bail!("Editor prompt must not be empty");
        }

        let level = self.log.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            bail!(
                "Log level '{}' must be one of {}",
                self.log.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Editor settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Prompt shown before each command (default: "voice> ")
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print a summary of the voice when a session starts (default: true)
    #[serde(default = "default_banner")]
    pub banner: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: default_banner(),
        }
    }
}

fn default_prompt() -> String { "voice> ".to_string() }
fn default_banner() -> bool { true }

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level used when RUST_LOG is not set (default: warn)
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String { "warn".to_string() }
