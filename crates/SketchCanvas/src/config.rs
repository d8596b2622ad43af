//! # Configuration
//!
//! This module defines the configuration struct for the Sketchpad.

use glam::Vec4;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration parameters for the Sketchpad.
///
/// These settings allow the host application to tune the feel of the canvas interactions.
/// Every field has a default, so a config file only needs the keys it overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Scale added or removed per scroll click. Also the minimum scale. Default: 0.1.
    pub zoom_step: f64,
    /// Multiplier for panning speed. Default: 1.0.
    pub pan_speed: f64,
    /// Distance in screen pixels within which endpoints snap to terminals and nodes. Default: 10.0.
    pub snap_radius: f64,
    /// Radius of a free node marker at scale 1.0. Default: 5.0.
    pub node_radius: f32,
    /// Width of stored segments in pixels. Default: 5.0.
    pub segment_width: f32,
    /// Width of the segment being drawn. Default: 2.0.
    pub preview_width: f32,
    /// Visual styling configuration.
    pub style: SketchStyle,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            zoom_step: 0.1,
            pan_speed: 1.0,
            snap_radius: 10.0,
            node_radius: 5.0,
            segment_width: 5.0,
            preview_width: 2.0,
            style: SketchStyle::default(),
        }
    }
}

impl SketchConfig {
    /// Parses a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Rejects values that would break the camera or snapping invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zoom_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom_step must be positive, got {}",
                self.zoom_step
            )));
        }
        if !(self.snap_radius >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "snap_radius must not be negative, got {}",
                self.snap_radius
            )));
        }
        if !(self.pan_speed.is_finite()) {
            return Err(ConfigError::Invalid("pan_speed must be finite".to_string()));
        }
        Ok(())
    }
}

/// Colors used by the painter (RGBA, 0.0 - 1.0).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchStyle {
    pub background_color: Vec4,
    /// Stored segments.
    pub segment_color: Vec4,
    /// The segment following the pointer while drawing.
    pub preview_color: Vec4,
    pub node_color: Vec4,
    /// Free node that is being dragged or hovered in drag mode.
    pub node_highlight_color: Vec4,
    pub terminal_color: Vec4,
    pub battery_color: Vec4,
    pub led_off_color: Vec4,
    pub led_on_color: Vec4,
    pub label_color: Vec4,
}

impl Default for SketchStyle {
    fn default() -> Self {
        Self {
            background_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            segment_color: Vec4::new(0.0, 1.0, 0.0, 1.0),
            preview_color: Vec4::new(1.0, 0.0, 0.0, 1.0),
            node_color: Vec4::new(0.0, 0.0, 1.0, 1.0),
            node_highlight_color: Vec4::new(0.4, 0.6, 1.0, 1.0),
            terminal_color: Vec4::new(0.8, 0.8, 0.8, 1.0),
            battery_color: Vec4::new(0.3, 0.3, 0.3, 1.0),
            led_off_color: Vec4::new(0.3, 0.1, 0.1, 1.0),
            led_on_color: Vec4::new(1.0, 0.2, 0.2, 1.0),
            label_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}
