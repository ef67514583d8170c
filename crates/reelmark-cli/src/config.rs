//! CLI configuration, loaded from TOML with flag overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Player configuration
    #[serde(default)]
    pub player: PlayerConfig,

    /// Picker configuration
    #[serde(default)]
    pub picker: PickerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// External player configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// mpv binary name or path
    #[serde(default = "default_player_binary")]
    pub binary: String,

    /// Extra arguments passed to mpv before the file path
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            binary: default_player_binary(),
            extra_args: Vec::new(),
        }
    }
}

/// File picker configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Directory the next picker invocation starts in; follows the most
    /// recently linked file
    pub start_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level when no flag is given (off, error, warn, info,
    /// debug, trace)
    pub level: Option<String>,
}

fn default_player_binary() -> String {
    "mpv".to_string()
}

impl CliConfig {
    /// Load configuration with CLI overrides.
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn load(config_path: Option<PathBuf>, mpv_path: Option<String>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => Self::default_config_path()?,
        };

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        } else {
            Self::default()
        };

        // Override with CLI args (highest priority)
        if let Some(binary) = mpv_path {
            config.player.binary = binary;
        }

        Ok(config)
    }

    /// Get default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("reelmark");
        Ok(config_dir.join("config.toml"))
    }

    /// Persist the picker start directory for the next invocation.
    pub fn remember_start_dir(&mut self, dir: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
        self.picker.start_dir = Some(dir);
        let path = match config_path {
            Some(p) => p,
            None => Self::default_config_path()?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Directory the picker starts in: the remembered one, else the user's
    /// home, else the current directory.
    pub fn start_dir(&self) -> PathBuf {
        self.picker
            .start_dir
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
