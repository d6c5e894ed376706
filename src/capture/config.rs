//! Capture tuning loaded from RON.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Default location of the capture config file.
pub const CAPTURE_CONFIG_PATH: &str = "assets/data/capture.ron";

fn default_max_line_length() -> f32 {
    5.0
}

fn default_sample_interval() -> f32 {
    0.1
}

fn default_ghost_threshold() -> u32 {
    3
}

fn default_grave_threshold() -> u32 {
    5
}

fn default_min_shrink_ratio() -> f32 {
    0.6
}

fn default_dragon_damage() -> u32 {
    1
}

/// Tuning for the lasso line and capture thresholds.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct CaptureConfig {
    /// Longest the drawn line may get, in world units
    #[serde(default = "default_max_line_length")]
    pub max_line_length: f32,
    /// Minimum distance between stored samples
    #[serde(default = "default_sample_interval")]
    pub sample_interval: f32,
    /// Loops needed for ghosts that don't carry their own threshold
    #[serde(default = "default_ghost_threshold")]
    pub ghost_threshold: u32,
    #[serde(default = "default_grave_threshold")]
    pub grave_threshold: u32,
    /// Scale a ghost reaches just before capture
    #[serde(default = "default_min_shrink_ratio")]
    pub min_shrink_ratio: f32,
    /// Damage per loop around the dragon
    #[serde(default = "default_dragon_damage")]
    pub dragon_damage: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            sample_interval: default_sample_interval(),
            ghost_threshold: default_ghost_threshold(),
            grave_threshold: default_grave_threshold(),
            min_shrink_ratio: default_min_shrink_ratio(),
            dragon_damage: default_dragon_damage(),
        }
    }
}

impl CaptureConfig {
    /// Reject values that would break per-frame logic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ghost_threshold == 0 {
            return Err(ConfigError::NonPositiveThreshold {
                category: "ghost",
                value: self.ghost_threshold,
            });
        }
        if self.grave_threshold == 0 {
            return Err(ConfigError::NonPositiveThreshold {
                category: "grave",
                value: self.grave_threshold,
            });
        }
        // Four samples are the minimum for a loop
        if !(self.sample_interval > 0.0 && self.max_line_length >= self.sample_interval * 4.0) {
            return Err(ConfigError::InvalidLineLimits {
                interval: self.sample_interval,
                max_length: self.max_line_length,
            });
        }
        if !(self.min_shrink_ratio > 0.0 && self.min_shrink_ratio <= 1.0) {
            return Err(ConfigError::InvalidShrinkRatio(self.min_shrink_ratio));
        }
        Ok(())
    }

    /// Parse and validate a config from RON text.
    pub fn from_ron(source: &str, path: &str) -> Result<Self, ConfigError> {
        let config: CaptureConfig = ron::from_str(source).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file. `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;
        Self::from_ron(&contents, &display).map(Some)
    }
}

/// Startup system: load the capture config, falling back to defaults.
pub fn load_capture_config(mut commands: Commands) {
    let config = match CaptureConfig::load(Path::new(CAPTURE_CONFIG_PATH)) {
        Ok(Some(config)) => {
            info!("Loaded capture config from {}", CAPTURE_CONFIG_PATH);
            config
        }
        Ok(None) => {
            warn!("Capture config not found at {}, using defaults", CAPTURE_CONFIG_PATH);
            CaptureConfig::default()
        }
        Err(e) => {
            error!("{}; using default capture config", e);
            CaptureConfig::default()
        }
    };
    commands.insert_resource(config);
}
