//! # Rendering System
//!
//! Instead of drawing directly, the Sketchpad outputs a display list of `DrawCommand`s.
//! The host application (macroquad, egui, ...) is responsible for interpreting these commands and drawing pixels.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// A single drawing primitive.
///
/// Coordinates are in **Screen Space** (Pixels).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A filled rectangle with an optional stroke.
    Rect {
        /// Top-left position in screen pixels.
        pos: Vec2,
        /// Size in screen pixels.
        size: Vec2,
        /// Fill color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Width of the border stroke in pixels.
        stroke_width: f32,
        /// Color of the border stroke.
        stroke_color: Option<Vec4>,
    },
    /// A straight line segment.
    Line {
        /// Start point in screen pixels.
        start: Vec2,
        /// End point in screen pixels.
        end: Vec2,
        /// Line color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Line thickness in pixels.
        width: f32,
    },
    /// A filled circle.
    Circle {
        /// Center in screen pixels.
        center: Vec2,
        /// Radius in screen pixels.
        radius: f32,
        /// Fill color (RGBA, 0.0 - 1.0).
        color: Vec4,
    },
    /// Text to be rendered.
    Text {
        /// Baseline-left position in screen pixels.
        pos: Vec2,
        text: String,
        color: Vec4,
        /// Font size in pixels (approximate).
        size: f32,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
