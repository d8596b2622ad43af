//! # Camera
//!
//! This module handles the "infinite canvas" mathematics.
//! It provides utilities to transform between World Space (where segments and nodes live)
//! and Screen Space (the pixels on the monitor), plus the pan and zoom controls.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Represents where we are looking (offset) and how close (scale).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Camera {
    /// Screen-space translation added after scaling.
    pub offset: DVec2,
    /// The scale factor.
    /// - 1.0 = 100% scale.
    /// - Greater than 1.0 = Zoomed In.
    /// - Never below `zoom_step`.
    pub scale: f64,
    /// Amount added or removed by a single zoom step.
    pub zoom_step: f64,
    /// Multiplier applied to pan movement.
    pub pan_speed: f64,
    dragging: bool,
    anchor: Option<DVec2>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.1, 1.0)
    }
}

impl Camera {
    /// Creates a camera at the origin with scale 1.0.
    ///
    /// A non-positive `zoom_step` would let the scale reach zero, so it is
    /// replaced with the default of 0.1.
    pub fn new(zoom_step: f64, pan_speed: f64) -> Self {
        let zoom_step = if zoom_step > 0.0 { zoom_step } else { 0.1 };
        Self {
            offset: DVec2::ZERO,
            scale: 1.0,
            zoom_step,
            pan_speed,
            dragging: false,
            anchor: None,
        }
    }

    /// Converts a point from **World Space** to **Screen Space**.
    ///
    /// Formula: `Screen = (World * Scale) + Offset`
    pub fn world_to_screen(&self, world_pos: DVec2) -> DVec2 {
        world_pos * self.scale + self.offset
    }

    /// Converts a point from **Screen Space** to **World Space**.
    ///
    /// Formula: `World = (Screen - Offset) / Scale`
    pub fn screen_to_world(&self, screen_pos: DVec2) -> DVec2 {
        (screen_pos - self.offset) / self.scale
    }

    /// Converts a pixel distance into world units at the current scale.
    pub fn screen_distance_to_world(&self, distance: f64) -> f64 {
        distance / self.scale
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn start_drag(&mut self, pointer: DVec2) {
        self.dragging = true;
        self.anchor = Some(pointer);
        tracing::debug!(?pointer, "Camera drag started");
    }

    /// Advances the offset by the pointer movement since the last call,
    /// divided by the current scale. No-op unless a drag is active.
    pub fn drag(&mut self, pointer: DVec2) {
        if !self.dragging {
            return;
        }
        if let Some(anchor) = self.anchor {
            self.offset += (pointer - anchor) / self.scale * self.pan_speed;
            self.anchor = Some(pointer);
        }
    }

    pub fn stop_drag(&mut self) {
        if self.dragging {
            tracing::debug!(offset = ?self.offset, "Camera drag stopped");
        }
        self.dragging = false;
        self.anchor = None;
    }

    /// Zooms in for a positive `direction`, out for a negative one.
    ///
    /// Zooming out is clamped at `zoom_step`. Returns true if the scale changed.
    pub fn zoom(&mut self, direction: f64) -> bool {
        let old_scale = self.scale;
        if direction > 0.0 {
            self.scale += self.zoom_step;
        } else if direction < 0.0 {
            self.scale = (self.scale - self.zoom_step).max(self.zoom_step);
        }

        let changed = (self.scale - old_scale).abs() > f64::EPSILON;
        if changed {
            tracing::debug!(scale = self.scale, "Camera zoomed");
        }
        changed
    }

    /// Back to the origin at scale 1.0. Also ends any drag.
    pub fn reset(&mut self) {
        self.offset = DVec2::ZERO;
        self.scale = 1.0;
        self.stop_drag();
    }
}
