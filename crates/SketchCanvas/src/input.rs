//! # Input Protocol
//!
//! This module defines the input state that the host application must pass to the Sketchpad every frame.
//! It includes mouse position, the buttons the Sketchpad reacts to, scroll delta, and the keys pressed this frame.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// State of mouse buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseButtons {
    /// Left mouse button is pressed. Draws segments or drags nodes.
    pub left: bool,
    /// Middle mouse button is pressed. Pans the camera.
    pub middle: bool,
}

/// Keyboard keys that the Sketchpad cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Remove the most recent segment.
    Delete,
    /// Same as `Delete`.
    Backspace,
    /// Remove every segment and free node.
    End,
    /// Reset the camera.
    Home,
    /// Switch between draw and drag mode.
    Tab,
}

/// The input state for a single frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputState {
    /// Current position of the mouse cursor in Screen Space (pixels).
    pub mouse_pos: DVec2,
    /// State of mouse buttons.
    pub mouse_buttons: MouseButtons,
    /// Vertical scroll delta this frame (positive = up / zoom in).
    pub scroll_delta: f64,
    /// Keys pressed *this frame*, in the order they were pressed.
    pub pressed_keys: Vec<Key>,
}
