// SPDX-License-Identifier: MPL-2.0
//! Persisted banner appearance overrides, loaded from a `settings.toml` file.
//!
//! Every field is optional; anything left unset falls back to the design
//! token defaults. `Config::metrics()` resolves the overrides into the
//! [`BannerMetrics`] injected at banner construction.
//!
//! # Examples
//!
//! ```no_run
//! use iced_whisper::config::{self, Config};
//!
//! // Load existing overrides (or defaults when no file exists)
//! let mut config = config::load().unwrap_or_default();
//!
//! // Taller banner lines
//! config.line_height = Some(32.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! let metrics = config.metrics();
//! assert_eq!(metrics.line_height, 32.0);
//! ```

use crate::error::{Error, Result};
use crate::ui::banner::BannerMetrics;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "iced_whisper";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub line_height: Option<f32>,
    #[serde(default)]
    pub image_size: Option<f32>,
    #[serde(default)]
    pub loader_title_offset: Option<f32>,
    #[serde(default)]
    pub label_total_margins: Option<f32>,
    #[serde(default)]
    pub center_shift_with_icon: Option<f32>,
    #[serde(default)]
    pub title_font_size: Option<f32>,
    #[serde(default)]
    pub char_height_approx: Option<f32>,
    #[serde(default)]
    pub animation_cycle_seconds: Option<f32>,
}

impl Config {
    /// Resolves the overrides against the design token defaults.
    #[must_use]
    pub fn metrics(&self) -> BannerMetrics {
        let defaults = BannerMetrics::default();
        BannerMetrics {
            line_height: self.line_height.unwrap_or(defaults.line_height),
            image_size: self.image_size.unwrap_or(defaults.image_size),
            loader_title_offset: self
                .loader_title_offset
                .unwrap_or(defaults.loader_title_offset),
            label_total_margins: self
                .label_total_margins
                .unwrap_or(defaults.label_total_margins),
            center_shift_with_icon: self
                .center_shift_with_icon
                .unwrap_or(defaults.center_shift_with_icon),
            title_font_size: self.title_font_size.unwrap_or(defaults.title_font_size),
            char_height_approx: self
                .char_height_approx
                .unwrap_or(defaults.char_height_approx),
            // Persisted files are user-editable; a negative, NaN, or infinite
            // cycle falls back to the token default instead of panicking.
            animation_cycle: self
                .animation_cycle_seconds
                .and_then(|secs| Duration::try_from_secs_f32(secs).ok())
                .unwrap_or(defaults.animation_cycle),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the default configuration when no file exists yet.
pub fn load() -> Result<Config> {
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Loads the configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    let path = default_config_path()
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    save_to_path(config, &path)
}

/// Saves the configuration to a specific path, creating parent directories
/// as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
