use glam::DVec2;
use sketch_canvas::input::{InputState, Key, MouseButtons};
use sketch_canvas::{Board, BoardLayout, Sketch, SketchConfig, Sketchpad};

fn frame(pos: (f64, f64), left: bool, keys: &[Key]) -> InputState {
    InputState {
        mouse_pos: DVec2::new(pos.0, pos.1),
        mouse_buttons: MouseButtons {
            left,
            ..Default::default()
        },
        pressed_keys: keys.to_vec(),
        ..Default::default()
    }
}

fn main() {
    println!("=== Sketchpad Headless Demo ===");

    // 1. Initialize Sketchpad and Board
    let mut pad = Sketchpad::new(SketchConfig::default());
    let mut sketch = Sketch::new();
    let mut board = match Board::new(BoardLayout::default()) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Failed to build board: {e}");
            return;
        }
    };

    let layout = board.layout.clone();
    let to_tuple = |p: DVec2| (p.x, p.y);
    println!("Battery + at {}, - at {}", layout.battery_positive(), layout.battery_negative());
    println!("LED anode at {}, cathode at {}", layout.led_anode(), layout.led_cathode());

    // 2. Scripted frames: wire + to anode, cathode to -, then delete and clear
    let script = vec![
        frame(to_tuple(layout.battery_positive()), true, &[]),
        frame(to_tuple(layout.led_anode()), true, &[]),
        frame(to_tuple(layout.led_anode()), false, &[]),
        frame(to_tuple(layout.led_cathode()), true, &[]),
        frame(to_tuple(layout.battery_negative()), true, &[]),
        frame(to_tuple(layout.battery_negative()), false, &[]),
        frame((0.0, 0.0), false, &[Key::Delete]),
        frame((0.0, 0.0), false, &[Key::End]),
    ];

    for (i, input) in script.iter().enumerate() {
        println!("\n--- Frame {} ---", i);
        let (draw_list, events) = pad.update(input, &mut sketch, &mut board);
        println!("  Segments: {}", sketch.segments().len());
        println!("  LED lit: {}", board.is_illuminated());
        println!("  Draw commands: {}", draw_list.len());
        println!("  Logic Events: {:?}", events);
    }

    println!("\nDemo Complete.");
}
