//! # SketchCanvas
//!
//! `sketch_canvas` is a headless sketchpad core. It handles camera state, segment
//! drawing with endpoint snapping, free node dragging, and wiring a battery to an
//! LED, while delegating windowing and pixel drawing to the host application.
//!
//! ## Core Architecture
//! - **Model (`src/model.rs`)**: Segments and free nodes drawn by the user.
//! - **Board (`src/board.rs`)**: The circuit graph and where its terminals sit.
//! - **Camera (`src/camera.rs`)**: Coordinate transformation (World <-> Screen), pan and zoom.
//! - **Interaction (`src/interaction.rs`)**: The pointer gesture state machine.
//! - **Render (`src/render.rs`)**: Outputs a list of `DrawCommand`s for the host to render.

pub mod board;
pub mod camera;
pub mod config;
pub mod input;
pub mod interaction;
pub mod model;
pub mod painter;
pub mod render;
pub mod snap;

use glam::DVec2;
use input::{InputState, Key, MouseButtons};
use render::RenderList;

pub use board::{Board, BoardLayout, Terminal};
pub use camera::Camera;
pub use config::{ConfigError, SketchConfig};
pub use interaction::{EditMode, InteractionMode, LogicEvent};
pub use model::{Anchor, FreeNodeId, Segment, Sketch};

use interaction::EditContext;

/// The main entry point for the library.
///
/// The `Sketchpad` holds the transient editor state (camera, gesture, mode).
/// The drawing itself lives in a `Sketch` and the circuit in a `Board`; both are
/// owned by the host and passed in, so the host can read them for its own purposes
/// between frames.
pub struct Sketchpad {
    /// Configuration settings.
    pub config: SketchConfig,
    /// Pan and zoom.
    pub camera: Camera,
    /// Whether the left button draws or drags.
    pub edit_mode: EditMode,
    /// Current pointer gesture.
    pub interaction: InteractionMode,
    previous_buttons: MouseButtons,
}

/// Builds an `EditContext` from the `Sketchpad` fields a gesture reads.
fn edit_context<'a>(
    camera: &'a Camera,
    config: &SketchConfig,
    sketch: &'a mut Sketch,
    board: &'a mut Board,
    terminals: &'a [Terminal],
) -> EditContext<'a> {
    EditContext {
        camera,
        snap_radius: config.snap_radius,
        sketch,
        board,
        terminals,
    }
}

impl Sketchpad {
    /// Creates a new Sketchpad with the given configuration.
    pub fn new(config: SketchConfig) -> Self {
        let camera = Camera::new(config.zoom_step, config.pan_speed);
        Self {
            config,
            camera,
            edit_mode: EditMode::Draw,
            interaction: InteractionMode::Idle,
            previous_buttons: MouseButtons::default(),
        }
    }

    /// Left button pressed at `pointer` (Screen Space).
    pub fn pointer_down(&mut self, pointer: DVec2, sketch: &mut Sketch, board: &mut Board) -> Vec<LogicEvent> {
        let mut events = Vec::new();
        let terminals = board.terminals();
        let mut ctx = edit_context(&self.camera, &self.config, sketch, board, &terminals);
        interaction::pointer_down(&mut self.interaction, self.edit_mode, &mut ctx, pointer, &mut events);
        events
    }

    /// Pointer moved to `pointer` (Screen Space).
    pub fn pointer_move(&mut self, pointer: DVec2, sketch: &mut Sketch, board: &mut Board) -> Vec<LogicEvent> {
        let mut events = Vec::new();
        let terminals = board.terminals();
        let mut ctx = edit_context(&self.camera, &self.config, sketch, board, &terminals);
        interaction::pointer_move(&mut self.interaction, self.edit_mode, &mut ctx, pointer, &mut events);
        events
    }

    /// Left button released at `pointer` (Screen Space).
    pub fn pointer_up(&mut self, pointer: DVec2, sketch: &mut Sketch, board: &mut Board) -> Vec<LogicEvent> {
        let mut events = Vec::new();
        let terminals = board.terminals();
        let mut ctx = edit_context(&self.camera, &self.config, sketch, board, &terminals);
        interaction::pointer_up(&mut self.interaction, &mut ctx, pointer, &mut events);
        events
    }

    /// Removes the most recently drawn segment and the wiring it provided.
    pub fn delete_last(&mut self, sketch: &mut Sketch, board: &mut Board) -> Vec<LogicEvent> {
        let mut events = Vec::new();
        let terminals = board.terminals();
        let mut ctx = edit_context(&self.camera, &self.config, sketch, board, &terminals);
        interaction::delete_last(&mut ctx, &mut events);
        events
    }

    /// Removes every segment, free node and wire.
    pub fn clear_all(&mut self, sketch: &mut Sketch, board: &mut Board) -> Vec<LogicEvent> {
        let mut events = Vec::new();
        let terminals = board.terminals();
        let mut ctx = edit_context(&self.camera, &self.config, sketch, board, &terminals);
        interaction::clear_all(&mut self.interaction, &mut ctx, &mut events);
        events
    }

    /// Switches between draw and drag mode, dropping any gesture in progress.
    ///
    /// A terminal or node already moved stays where it was left.
    pub fn toggle_mode(&mut self, sketch: &mut Sketch) -> EditMode {
        interaction::abort(&mut self.interaction, sketch);
        sketch.clear_flag(model::NodeFlags::HOVERED);
        self.edit_mode = self.edit_mode.toggled();
        tracing::info!(mode = ?self.edit_mode, "Edit mode changed");
        self.edit_mode
    }

    /// The core update loop.
    ///
    /// This function should be called every frame. It applies all of this frame's input
    /// to the camera, sketch and board, then returns the drawing commands for the
    /// resulting state together with the events that occurred.
    pub fn update(&mut self, input: &InputState, sketch: &mut Sketch, board: &mut Board) -> (RenderList, Vec<LogicEvent>) {
        let mut events = Vec::new();

        // 1. Keyboard Shortcuts
        for key in &input.pressed_keys {
            match key {
                Key::Delete | Key::Backspace => events.extend(self.delete_last(sketch, board)),
                Key::End => events.extend(self.clear_all(sketch, board)),
                Key::Home => {
                    self.camera.reset();
                    events.push(LogicEvent::CameraReset);
                    events.push(LogicEvent::RepaintNeeded);
                }
                Key::Tab => {
                    let mode = self.toggle_mode(sketch);
                    events.push(LogicEvent::ModeChanged(mode));
                    events.push(LogicEvent::RepaintNeeded);
                }
            }
        }

        // 2. Zooming via Scroll
        if input.scroll_delta != 0.0 && self.camera.zoom(input.scroll_delta) {
            events.push(LogicEvent::RepaintNeeded);
        }

        // 3. Panning via Middle Button
        let buttons = input.mouse_buttons;
        if buttons.middle && !self.previous_buttons.middle {
            self.camera.start_drag(input.mouse_pos);
        } else if !buttons.middle && self.previous_buttons.middle {
            self.camera.stop_drag();
        }
        if self.camera.is_dragging() {
            let before = self.camera.offset;
            self.camera.drag(input.mouse_pos);
            if self.camera.offset != before {
                events.push(LogicEvent::RepaintNeeded);
            }
        }

        // 4. Pointer Gesture
        if buttons.left && !self.previous_buttons.left {
            if !self.camera.is_dragging() {
                events.extend(self.pointer_down(input.mouse_pos, sketch, board));
            }
        } else if !buttons.left && self.previous_buttons.left {
            events.extend(self.pointer_up(input.mouse_pos, sketch, board));
        } else {
            events.extend(self.pointer_move(input.mouse_pos, sketch, board));
        }
        self.previous_buttons = buttons;

        // 5. Render
        let draw_list = painter::Painter::draw_sketch(&self.camera, &self.config, sketch, board, &self.interaction);

        (draw_list, events)
    }
}
