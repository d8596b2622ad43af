use std::path::Path;

use anyhow::Context;
use glam::{DVec2, Vec4};
use macroquad::miniquad::{CursorIcon, window::set_mouse_cursor};
use macroquad::prelude as mq;
use serde::Deserialize;
use sketch_canvas::input::{InputState, Key, MouseButtons};
use sketch_canvas::render::DrawCommand;
use sketch_canvas::{Board, BoardLayout, EditMode, LogicEvent, Sketch, SketchConfig, Sketchpad};
use tracing_subscriber::EnvFilter;

/// Contents of the optional YAML file passed as the first argument.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PlaygroundConfig {
    sketch: SketchConfig,
    board: BoardLayout,
}

impl PlaygroundConfig {
    fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.sketch.validate()?;
        Ok(config)
    }
}

fn window_conf() -> mq::Conf {
    mq::Conf {
        window_title: "Sketchpad".to_owned(),
        window_width: 1280,
        window_height: 1024,
        ..Default::default()
    }
}

fn color(c: Vec4) -> mq::Color {
    mq::Color::new(c.x, c.y, c.z, c.w)
}

fn read_input() -> InputState {
    let (mx, my) = mq::mouse_position();

    let buttons = MouseButtons {
        left: mq::is_mouse_button_down(mq::MouseButton::Left),
        middle: mq::is_mouse_button_down(mq::MouseButton::Middle),
    };

    let mut pressed_keys = Vec::new();
    for (code, key) in [
        (mq::KeyCode::Delete, Key::Delete),
        (mq::KeyCode::Backspace, Key::Backspace),
        (mq::KeyCode::End, Key::End),
        (mq::KeyCode::Home, Key::Home),
        (mq::KeyCode::Tab, Key::Tab),
    ] {
        if mq::is_key_pressed(code) {
            pressed_keys.push(key);
        }
    }

    InputState {
        mouse_pos: DVec2::new(mx as f64, my as f64),
        mouse_buttons: buttons,
        scroll_delta: mq::mouse_wheel().1 as f64,
        pressed_keys,
    }
}

/// Hand cursor while dragging nodes, arrow while drawing.
fn mode_cursor(mode: EditMode) -> CursorIcon {
    match mode {
        EditMode::Draw => CursorIcon::Default,
        EditMode::Drag => CursorIcon::Pointer,
    }
}

fn draw(draw_list: Vec<DrawCommand>) {
    for cmd in draw_list {
        match cmd {
            DrawCommand::Rect {
                pos,
                size,
                color: fill,
                stroke_width,
                stroke_color,
            } => {
                mq::draw_rectangle(pos.x, pos.y, size.x, size.y, color(fill));
                if let Some(sc) = stroke_color {
                    mq::draw_rectangle_lines(pos.x, pos.y, size.x, size.y, stroke_width, color(sc));
                }
            }
            DrawCommand::Line {
                start,
                end,
                color: c,
                width,
            } => {
                mq::draw_line(start.x, start.y, end.x, end.y, width, color(c));
            }
            DrawCommand::Circle { center, radius, color: c } => {
                mq::draw_circle(center.x, center.y, radius, color(c));
            }
            DrawCommand::Text {
                pos,
                text,
                color: c,
                size,
            } => {
                mq::draw_text(&text, pos.x, pos.y, size, color(c));
            }
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => PlaygroundConfig::load(Path::new(&path)).unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{e:#}"), "Falling back to default config");
            PlaygroundConfig::default()
        }),
        None => PlaygroundConfig::default(),
    };

    let background = color(config.sketch.style.background_color);
    let mut pad = Sketchpad::new(config.sketch);
    let mut sketch = Sketch::new();
    let mut board = Board::new(config.board).context("installing the LED circuit")?;
    set_mouse_cursor(mode_cursor(pad.edit_mode));
    tracing::info!("Sketchpad ready. Tab toggles draw/drag, Delete undoes the last segment, End clears, Home resets the view");

    loop {
        let input = read_input();
        let (draw_list, events) = pad.update(&input, &mut sketch, &mut board);

        for event in &events {
            match event {
                LogicEvent::Connected { .. } | LogicEvent::Disconnected { .. } | LogicEvent::Cleared => {
                    tracing::info!(lit = board.is_illuminated(), "Circuit changed");
                }
                LogicEvent::ModeChanged(mode) => {
                    set_mouse_cursor(mode_cursor(*mode));
                    tracing::info!(?mode, "Mode");
                }
                _ => {}
            }
        }

        mq::clear_background(background);
        draw(draw_list);

        mq::next_frame().await
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %format!("{e:#}"), "Playground exited");
    }
}
