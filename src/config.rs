//! Application configuration module
//!
//! Settings are loaded with `confy` from the OS-specific config directory.
//! They only seed the input fields; results are never written back.

use crate::constant::{
    APP_NAME, DEFAULT_DPI_SENSITIVITY, DEFAULT_FONT_SIZE, DEFAULT_NEW_DPI, DEFAULT_OLD_DPI,
    DEFAULT_PSA_SENSITIVITY,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Body text size in points
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(default)]
    pub psa: PsaDefaults,

    #[serde(default)]
    pub dpi: DpiDefaults,
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            psa: PsaDefaults::default(),
            dpi: DpiDefaults::default(),
        }
    }
}

/// Initial value of the PSA input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsaDefaults {
    pub initial_sensitivity: f64,
}

impl Default for PsaDefaults {
    fn default() -> Self {
        Self {
            initial_sensitivity: DEFAULT_PSA_SENSITIVITY,
        }
    }
}

/// Initial values of the DPI converter fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DpiDefaults {
    pub sensitivity: f64,
    pub old_dpi: u32,
    pub new_dpi: u32,
}

impl Default for DpiDefaults {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_DPI_SENSITIVITY,
            old_dpi: DEFAULT_OLD_DPI,
            new_dpi: DEFAULT_NEW_DPI,
        }
    }
}
