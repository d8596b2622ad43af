use glam::{DVec2, Vec2};

use crate::board::Board;
use crate::camera::Camera;
use crate::config::SketchConfig;
use crate::interaction::InteractionMode;
use crate::model::{NodeFlags, Sketch};
use crate::render::{DrawCommand, RenderList};

/// Converts the sketch and board into drawing commands.
///
/// Paint order (back to front):
/// - Board components (battery, LED lit or unlit)
/// - Terminal markers (highlighted while dragged)
/// - Stored segments, oldest first
/// - The segment being drawn
/// - Free nodes
pub struct Painter;

impl Painter {
    /// Generates a list of draw commands for the whole frame.
    pub fn draw_sketch(
        camera: &Camera,
        config: &SketchConfig,
        sketch: &Sketch,
        board: &Board,
        interaction_mode: &InteractionMode,
    ) -> RenderList {
        let mut draw_list = Vec::new();
        let style = &config.style;
        let to_screen = |p: DVec2| camera.world_to_screen(p).as_vec2();

        // 1. Components
        let body = (board.layout.body_size() * camera.scale).as_vec2();
        let led_color = if board.is_illuminated() {
            style.led_on_color
        } else {
            style.led_off_color
        };
        for (center, color, label) in [
            (board.layout.battery, style.battery_color, "BAT"),
            (board.layout.led, led_color, "LED"),
        ] {
            let center = to_screen(center);
            draw_list.push(DrawCommand::Rect {
                pos: center - body * 0.5,
                size: body,
                color,
                stroke_width: 1.0,
                stroke_color: Some(style.terminal_color),
            });
            draw_list.push(DrawCommand::Text {
                pos: center - Vec2::new(body.x * 0.3, -4.0),
                text: label.to_string(),
                color: style.label_color,
                size: 14.0,
            });
        }

        // 2. Terminals and battery polarity
        let marker_radius = config.node_radius * camera.scale as f32;
        let dragged = match interaction_mode {
            InteractionMode::DraggingTerminal { entity } => Some(*entity),
            _ => None,
        };
        for terminal in board.terminals() {
            let center = to_screen(terminal.position);
            draw_list.push(DrawCommand::Circle {
                center,
                radius: marker_radius,
                color: if dragged == Some(terminal.entity) {
                    style.node_highlight_color
                } else {
                    style.terminal_color
                },
            });

            let polarity = if terminal.entity == board.circuit.battery_positive {
                Some("+")
            } else if terminal.entity == board.circuit.battery_negative {
                Some("-")
            } else {
                None
            };
            if let Some(label) = polarity {
                draw_list.push(DrawCommand::Text {
                    pos: center + Vec2::new(-4.0, -marker_radius - 4.0),
                    text: label.to_string(),
                    color: style.label_color,
                    size: 16.0,
                });
            }
        }

        // 3. Stored segments
        for segment in sketch.segments() {
            draw_list.push(DrawCommand::Line {
                start: to_screen(segment.start),
                end: to_screen(segment.end),
                color: style.segment_color,
                width: config.segment_width,
            });
        }

        // 4. Active segment
        if let InteractionMode::Drawing { start, preview } = interaction_mode {
            draw_list.push(DrawCommand::Line {
                start: to_screen(start.position),
                end: to_screen(preview.position),
                color: style.preview_color,
                width: config.preview_width,
            });
        }

        // 5. Free nodes
        for node in sketch.free_nodes() {
            let color = if node.flags.intersects(NodeFlags::SELECTED | NodeFlags::HOVERED) {
                style.node_highlight_color
            } else {
                style.node_color
            };
            draw_list.push(DrawCommand::Circle {
                center: to_screen(node.position),
                radius: marker_radius,
                color,
            });
        }

        draw_list
    }
}
