//! Launcher settings
//!
//! Read from `<config_dir>/fountain-launcher/config.toml` when present,
//! or from an explicit `--config` path. Every key is optional:
//!
//! ```toml
//! macos-behavior = "silent"   # or "notice"
//! launch-mode = "detach"      # or "wait"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::host::LaunchMode;

/// What to do on macOS, where there is no Fountain build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MacosBehavior {
    /// Print a red "not supported" notice
    #[default]
    Notice,
    /// Exit quietly
    Silent,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    pub macos_behavior: MacosBehavior,
    pub launch_mode: LaunchMode,
}

impl Settings {
    /// Default settings file location, if the OS has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fountain-launcher").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load_default() -> Result<Self, SettingsError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
