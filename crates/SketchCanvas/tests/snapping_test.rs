use glam::DVec2;
use sketch_canvas::snap::{self, Snap};
use sketch_canvas::{Anchor, Board, BoardLayout, Sketch};

/// Battery + at (100, 100), battery - at (160, 100), anode at (370, 100), cathode at (430, 100).
fn test_board() -> Board {
    Board::new(BoardLayout {
        battery: DVec2::new(130.0, 100.0),
        led: DVec2::new(400.0, 100.0),
        terminal_spacing: 60.0,
    })
    .unwrap()
}

#[test]
fn test_terminal_positions_follow_layout() {
    let board = test_board();
    let terminals = board.terminals();

    assert_eq!(terminals.len(), 4);
    assert_eq!(terminals[0].entity, board.circuit.battery_positive);
    assert_eq!(terminals[0].position, DVec2::new(100.0, 100.0));
    assert_eq!(terminals[1].position, DVec2::new(160.0, 100.0));
    assert_eq!(terminals[2].entity, board.circuit.led_anode);
    assert_eq!(terminals[2].position, DVec2::new(370.0, 100.0));
    assert_eq!(terminals[3].position, DVec2::new(430.0, 100.0));
}

#[test]
fn test_terminal_beats_closer_free_node() {
    let board = test_board();
    let mut sketch = Sketch::new();
    let node = sketch.add_free_node(DVec2::new(102.0, 100.0));

    // Closer to the free node, but within tolerance of both
    let snap = snap::resolve(DVec2::new(103.0, 100.0), 10.0, &board.terminals(), &sketch);
    assert_eq!(snap.position, DVec2::new(100.0, 100.0));
    assert_eq!(snap.anchor, Some(Anchor::Terminal(board.circuit.battery_positive)));

    // Out of the terminal's reach the node wins
    let snap = snap::resolve(DVec2::new(111.0, 100.0), 10.0, &board.terminals(), &sketch);
    assert_eq!(snap.position, DVec2::new(102.0, 100.0));
    assert_eq!(snap.anchor, Some(Anchor::Node(node)));
}

#[test]
fn test_free_nodes_tie_break_by_creation_order() {
    let mut sketch = Sketch::new();
    let first = sketch.add_free_node(DVec2::new(500.0, 500.0));
    let _second = sketch.add_free_node(DVec2::new(506.0, 500.0));

    // Nearer to the second node, still resolves to the first
    let snap = snap::resolve(DVec2::new(505.0, 500.0), 10.0, &[], &sketch);
    assert_eq!(snap.anchor, Some(Anchor::Node(first)));
    assert_eq!(snap::hit_free_node(DVec2::new(505.0, 500.0), 10.0, &sketch), Some(first));
}

#[test]
fn test_raw_fallback() {
    let board = test_board();
    let sketch = Sketch::new();

    let pointer = DVec2::new(250.0, 250.0);
    let snap = snap::resolve(pointer, 10.0, &board.terminals(), &sketch);
    assert_eq!(snap, Snap::raw(pointer));
    assert!(snap.is_raw());
}

#[test]
fn test_tolerance_is_inclusive() {
    let board = test_board();
    let sketch = Sketch::new();

    let snap = snap::resolve(DVec2::new(110.0, 100.0), 10.0, &board.terminals(), &sketch);
    assert_eq!(snap.position, DVec2::new(100.0, 100.0));

    let snap = snap::resolve(DVec2::new(110.5, 100.0), 10.0, &board.terminals(), &sketch);
    assert!(snap.is_raw());
}

#[test]
fn test_battery_terminals_take_precedence_over_led() {
    // Overlapping terminals: battery - sits on top of the anode
    let board = Board::new(BoardLayout {
        battery: DVec2::new(0.0, 0.0),
        led: DVec2::new(80.0, 0.0),
        terminal_spacing: 80.0,
    })
    .unwrap();
    let sketch = Sketch::new();

    let snap = snap::resolve(DVec2::new(40.0, 2.0), 10.0, &board.terminals(), &sketch);
    assert_eq!(snap.anchor, Some(Anchor::Terminal(board.circuit.battery_negative)));
}
