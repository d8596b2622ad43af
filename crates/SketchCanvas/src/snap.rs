//! # Snap Resolver
//!
//! Replaces a raw pointer position with a nearby terminal or free node.
//! Candidates are tried in a fixed precedence order (terminals, then free nodes
//! in creation order) and the first one within tolerance wins, even if a later
//! candidate is closer.

use circuit_graph::EntityId;
use glam::DVec2;

use crate::board::Terminal;
use crate::model::{Anchor, FreeNodeId, Sketch};

/// A resolved pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snap {
    /// World-space position after snapping.
    pub position: DVec2,
    /// What it snapped to. `None` means the raw position was kept.
    pub anchor: Option<Anchor>,
}

impl Snap {
    pub fn raw(position: DVec2) -> Self {
        Self {
            position,
            anchor: None,
        }
    }

    pub fn is_raw(&self) -> bool {
        self.anchor.is_none()
    }
}

/// Resolves `pointer` (world space) against `terminals` then the sketch's free nodes.
pub fn resolve(pointer: DVec2, tolerance: f64, terminals: &[Terminal], sketch: &Sketch) -> Snap {
    if let Some(terminal) = hit_terminal(pointer, tolerance, terminals) {
        return Snap {
            position: terminal.position,
            anchor: Some(Anchor::Terminal(terminal.entity)),
        };
    }

    if let Some(id) = hit_free_node(pointer, tolerance, sketch)
        && let Some(node) = sketch.free_node(id)
    {
        return Snap {
            position: node.position,
            anchor: Some(Anchor::Node(id)),
        };
    }

    Snap::raw(pointer)
}

/// First free node, in creation order, within `tolerance` of `pointer`.
pub fn hit_free_node(pointer: DVec2, tolerance: f64, sketch: &Sketch) -> Option<FreeNodeId> {
    sketch
        .free_nodes()
        .find(|n| n.position.distance(pointer) <= tolerance)
        .map(|n| n.id)
}

/// First terminal, in precedence order, within `tolerance` of `point`.
pub fn hit_terminal(point: DVec2, tolerance: f64, terminals: &[Terminal]) -> Option<Terminal> {
    terminals
        .iter()
        .find(|t| t.position.distance(point) <= tolerance)
        .copied()
}

/// Id of the first terminal within `tolerance` of `point`.
pub fn terminal_near(point: DVec2, tolerance: f64, terminals: &[Terminal]) -> Option<EntityId> {
    hit_terminal(point, tolerance, terminals).map(|t| t.entity)
}
