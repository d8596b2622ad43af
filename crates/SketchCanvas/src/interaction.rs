use circuit_graph::{CircuitGraph, EntityId};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Terminal};
use crate::camera::Camera;
use crate::model::{Anchor, FreeNodeId, NodeFlags, Segment, Sketch};
use crate::snap::{self, Snap};

/// Events emitted by the Sketchpad logic to the host application.
#[derive(Clone, Debug, PartialEq)]
pub enum LogicEvent {
    /// A segment was appended at `index`.
    SegmentAdded { index: usize },
    /// The segment at `index` (the last one) was removed.
    SegmentRemoved { index: usize },
    /// A free node was created where a segment ended on empty canvas.
    FreeNodeAdded { id: FreeNodeId },
    /// A free node was dragged to a new world position.
    NodeMoved { id: FreeNodeId, position: DVec2 },
    /// A terminal was dragged to a new world position.
    TerminalMoved { entity: EntityId, position: DVec2 },
    /// Two terminals were wired together.
    Connected { a: EntityId, b: EntityId },
    /// A terminal lost its wired connections.
    Disconnected { entity: EntityId },
    /// Every segment, free node and wire was removed.
    Cleared,
    /// The camera went back to the origin at scale 1.0.
    CameraReset,
    /// Draw/drag mode switched.
    ModeChanged(EditMode),
    /// The visual state has changed, requiring a repaint.
    RepaintNeeded,
}

/// What the left button does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    /// Press, drag and release to draw a segment.
    #[default]
    Draw,
    /// Press on a terminal or free node and drag to move it.
    Drag,
}

impl EditMode {
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Draw => EditMode::Drag,
            EditMode::Drag => EditMode::Draw,
        }
    }
}

/// The current state of the pointer gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InteractionMode {
    /// No active gesture.
    #[default]
    Idle,
    /// User is drawing a segment.
    Drawing {
        /// Resolved start point (World Space) and its attachment.
        start: Snap,
        /// Resolved position under the pointer, for the preview line.
        preview: Snap,
    },
    /// User is moving a free node.
    DraggingNode {
        /// The node being dragged.
        node: FreeNodeId,
    },
    /// User is moving a board terminal.
    DraggingTerminal {
        /// The terminal being dragged.
        entity: EntityId,
    },
}

/// Everything a gesture handler needs to read or mutate.
pub struct EditContext<'a> {
    pub camera: &'a Camera,
    /// Snap radius in screen pixels.
    pub snap_radius: f64,
    pub sketch: &'a mut Sketch,
    pub board: &'a mut Board,
    /// Terminal positions at the start of this call, in precedence order.
    pub terminals: &'a [Terminal],
}

impl EditContext<'_> {
    /// Snap radius converted to world units.
    pub fn tolerance(&self) -> f64 {
        self.camera.screen_distance_to_world(self.snap_radius)
    }

    fn resolve(&self, pointer_world: DVec2) -> Snap {
        snap::resolve(pointer_world, self.tolerance(), self.terminals, &*self.sketch)
    }
}

/// Handles a left button press at `pointer` (Screen Space).
///
/// - Draw mode: resolves the start point and transitions to `Drawing`.
/// - Drag mode: picks the first terminal under the pointer, else the first free node,
///   and transitions to `DraggingTerminal` or `DraggingNode`. Unanchored endpoints
///   lying on the picked point are claimed so they follow the drag.
pub fn pointer_down(
    mode: &mut InteractionMode,
    edit_mode: EditMode,
    ctx: &mut EditContext<'_>,
    pointer: DVec2,
    events: &mut Vec<LogicEvent>,
) {
    if *mode != InteractionMode::Idle {
        return;
    }
    let world = ctx.camera.screen_to_world(pointer);

    match edit_mode {
        EditMode::Draw => {
            let start = ctx.resolve(world);
            tracing::debug!(start = ?start.position, anchor = ?start.anchor, "Segment started");
            *mode = InteractionMode::Drawing {
                start,
                preview: start,
            };
            events.push(LogicEvent::RepaintNeeded);
        }
        EditMode::Drag => {
            let tolerance = ctx.tolerance();
            if let Some(terminal) = snap::hit_terminal(world, tolerance, ctx.terminals) {
                let anchor = Anchor::Terminal(terminal.entity);
                let adopted = ctx.sketch.adopt_endpoints(anchor, terminal.position, tolerance);
                tracing::debug!(entity = ?terminal.entity, adopted, "Terminal drag started");
                *mode = InteractionMode::DraggingTerminal {
                    entity: terminal.entity,
                };
                events.push(LogicEvent::RepaintNeeded);
            } else if let Some(node) = snap::hit_free_node(world, tolerance, ctx.sketch) {
                let mut adopted = 0;
                if let Some(free) = ctx.sketch.free_node_mut(node) {
                    free.flags.insert(NodeFlags::SELECTED);
                    let position = free.position;
                    adopted = ctx.sketch.adopt_endpoints(Anchor::Node(node), position, tolerance);
                }
                tracing::debug!(?node, adopted, "Node drag started");
                *mode = InteractionMode::DraggingNode { node };
                events.push(LogicEvent::RepaintNeeded);
            }
        }
    }
}

/// Handles pointer movement at `pointer` (Screen Space).
///
/// Updates the preview while drawing, moves the dragged node or terminal (and the
/// segment endpoints anchored to it) while dragging, and tracks hover in drag mode
/// otherwise. Dragging never changes wiring.
pub fn pointer_move(
    mode: &mut InteractionMode,
    edit_mode: EditMode,
    ctx: &mut EditContext<'_>,
    pointer: DVec2,
    events: &mut Vec<LogicEvent>,
) {
    let world = ctx.camera.screen_to_world(pointer);

    match mode {
        InteractionMode::Drawing { preview, .. } => {
            let next = ctx.resolve(world);
            if *preview != next {
                *preview = next;
                events.push(LogicEvent::RepaintNeeded);
            }
        }
        InteractionMode::DraggingNode { node } => {
            let node = *node;
            if ctx.sketch.move_free_node(node, world).is_some() {
                events.push(LogicEvent::NodeMoved {
                    id: node,
                    position: world,
                });
                events.push(LogicEvent::RepaintNeeded);
            } else {
                // Node vanished under us (cleared mid-drag)
                *mode = InteractionMode::Idle;
            }
        }
        InteractionMode::DraggingTerminal { entity } => {
            let entity = *entity;
            if ctx.board.move_terminal(entity, world) {
                ctx.sketch.move_anchored(Anchor::Terminal(entity), world);
                events.push(LogicEvent::TerminalMoved {
                    entity,
                    position: world,
                });
                events.push(LogicEvent::RepaintNeeded);
            } else {
                *mode = InteractionMode::Idle;
            }
        }
        InteractionMode::Idle => {
            if edit_mode == EditMode::Drag {
                let hovered = snap::hit_free_node(world, ctx.tolerance(), ctx.sketch);
                let previous = ctx
                    .sketch
                    .free_nodes()
                    .find(|n| n.flags.contains(NodeFlags::HOVERED))
                    .map(|n| n.id);
                if hovered != previous {
                    ctx.sketch.clear_flag(NodeFlags::HOVERED);
                    if let Some(node) = hovered.and_then(|id| ctx.sketch.free_node_mut(id)) {
                        node.flags.insert(NodeFlags::HOVERED);
                    }
                    events.push(LogicEvent::RepaintNeeded);
                }
            }
        }
    }
}

/// Handles a left button release at `pointer` (Screen Space).
///
/// Finishing a draw appends the segment, creates a free node when the end did not
/// snap to anything, and wires two terminals together when the segment joins them.
pub fn pointer_up(
    mode: &mut InteractionMode,
    ctx: &mut EditContext<'_>,
    pointer: DVec2,
    events: &mut Vec<LogicEvent>,
) {
    match std::mem::take(mode) {
        InteractionMode::Drawing { start, .. } => {
            let world = ctx.camera.screen_to_world(pointer);
            let end = ctx.resolve(world);

            let end_ref = match end.anchor {
                Some(anchor) => Some(anchor),
                None => {
                    let id = ctx.sketch.add_free_node(end.position);
                    events.push(LogicEvent::FreeNodeAdded { id });
                    Some(Anchor::Node(id))
                }
            };

            let segment = Segment {
                start: start.position,
                end: end.position,
                start_ref: start.anchor,
                end_ref,
            };
            let pair = segment.terminal_pair();
            let index = ctx.sketch.push_segment(segment);
            tracing::info!(index, start = ?start.position, end = ?end.position, "Segment added");
            events.push(LogicEvent::SegmentAdded { index });

            if let Some((a, b)) = pair {
                match ctx.board.graph.connect(a, b) {
                    Ok(true) => events.push(LogicEvent::Connected { a, b }),
                    Ok(false) => {}
                    Err(e) => tracing::warn!(error = %e, "Segment joins unknown terminal"),
                }
            }
            events.push(LogicEvent::RepaintNeeded);
        }
        InteractionMode::DraggingNode { node } => {
            if let Some(free) = ctx.sketch.free_node_mut(node) {
                free.flags.remove(NodeFlags::SELECTED);
            }
            tracing::debug!(?node, "Node drag finished");
            events.push(LogicEvent::RepaintNeeded);
        }
        InteractionMode::DraggingTerminal { entity } => {
            tracing::debug!(?entity, "Terminal drag finished");
            events.push(LogicEvent::RepaintNeeded);
        }
        InteractionMode::Idle => {}
    }
}

/// Removes the most recent segment.
///
/// Every terminal the segment was attached to (or, for an unattached endpoint,
/// lies within tolerance of) has its connections cleared. Wires still present
/// on the canvas are then reconnected, so only the deleted wire is lost.
/// `Disconnected` is reported only for terminals that end up with fewer neighbours.
pub fn delete_last(ctx: &mut EditContext<'_>, events: &mut Vec<LogicEvent>) -> Option<Segment> {
    let index = ctx.sketch.segments().len().checked_sub(1)?;
    let segment = ctx.sketch.pop_segment()?;
    tracing::info!(index, "Removed last segment");
    events.push(LogicEvent::SegmentRemoved { index });

    let tolerance = ctx.tolerance();
    let mut touched: Vec<EntityId> = Vec::new();
    for (point, anchor) in [
        (segment.start, segment.start_ref),
        (segment.end, segment.end_ref),
    ] {
        let terminal = match anchor {
            Some(Anchor::Terminal(id)) => Some(id),
            Some(Anchor::Node(_)) => None,
            None => snap::terminal_near(point, tolerance, ctx.terminals),
        };
        if let Some(id) = terminal
            && !touched.contains(&id)
        {
            touched.push(id);
        }
    }

    let graph = &mut ctx.board.graph;
    let before: Vec<Vec<EntityId>> = touched.iter().map(|&e| graph.adjacency(e).to_vec()).collect();
    for &entity in &touched {
        if let Err(e) = graph.clear_connections(entity) {
            tracing::warn!(error = %e, "Cannot clear connections");
        }
    }

    rewire(ctx.sketch, graph, &touched);

    for (&entity, before) in touched.iter().zip(&before) {
        let after = graph.adjacency(entity);
        if before.iter().any(|n| !after.contains(n)) {
            events.push(LogicEvent::Disconnected { entity });
        }
    }
    events.push(LogicEvent::RepaintNeeded);
    Some(segment)
}

/// Reconnects terminal pairs joined by remaining segments that touch any of `entities`.
fn rewire(sketch: &Sketch, graph: &mut CircuitGraph, entities: &[EntityId]) {
    for segment in sketch.segments() {
        let Some((a, b)) = segment.terminal_pair() else {
            continue;
        };
        if entities.iter().any(|&e| segment.touches_terminal(e))
            && let Err(e) = graph.connect(a, b)
        {
            tracing::warn!(error = %e, "Cannot restore wire");
        }
    }
}

/// Removes every segment and free node and every wired connection.
pub fn clear_all(mode: &mut InteractionMode, ctx: &mut EditContext<'_>, events: &mut Vec<LogicEvent>) {
    *mode = InteractionMode::Idle;
    ctx.sketch.clear();
    ctx.board.graph.clear_all();
    tracing::info!("Cleared all segments and nodes");
    events.push(LogicEvent::Cleared);
    events.push(LogicEvent::RepaintNeeded);
}

/// Drops an in-progress gesture without committing it.
pub fn abort(mode: &mut InteractionMode, sketch: &mut Sketch) {
    if let InteractionMode::DraggingNode { node } = std::mem::take(mode)
        && let Some(free) = sketch.free_node_mut(node)
    {
        free.flags.remove(NodeFlags::SELECTED);
    }
}
