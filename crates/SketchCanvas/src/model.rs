//! # Sketch Model
//!
//! This module defines what the user has drawn: an ordered list of segments and a
//! set of free nodes. Free nodes live in a `SlotMap` with an explicit creation
//! order list, which is the order snapping and hit-testing walk them in.
//!
//! Segments remember what each endpoint was snapped to (`Anchor`) so later edits
//! (node drags, deletions) do not have to rediscover attachments by distance.
//! Endpoints drawn on empty canvas start unanchored; a drag only claims them
//! when it grabs a node or terminal lying on top of them.

use bitflags::bitflags;
use circuit_graph::EntityId;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a Free Node.
    pub struct FreeNodeId;
}

bitflags! {
    /// Bitflags representing transient UI states of a Free Node.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u8 {
        /// The node is being dragged.
        const SELECTED = 1 << 0;
        /// The pointer is over the node in drag mode.
        const HOVERED = 1 << 1;
    }
}

impl Serialize for NodeFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for NodeFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// What a segment endpoint is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    /// A circuit terminal on the board.
    Terminal(EntityId),
    /// A user-created free node.
    Node(FreeNodeId),
}

/// A user-created snap point. Pure geometry, no circuit meaning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FreeNode {
    /// Self-reference ID.
    pub id: FreeNodeId,
    /// World-space position.
    pub position: DVec2,
    /// UI state flags.
    pub flags: NodeFlags,
}

/// A drawn line between two world-space points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
    /// What `start` was snapped to when the segment was drawn.
    pub start_ref: Option<Anchor>,
    /// What `end` was snapped to (or the free node created for it).
    pub end_ref: Option<Anchor>,
}

impl Segment {
    /// A segment with no attachments.
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self {
            start,
            end,
            start_ref: None,
            end_ref: None,
        }
    }

    /// Both endpoints' terminal ids, if the segment joins two terminals.
    pub fn terminal_pair(&self) -> Option<(EntityId, EntityId)> {
        match (self.start_ref, self.end_ref) {
            (Some(Anchor::Terminal(a)), Some(Anchor::Terminal(b))) => Some((a, b)),
            _ => None,
        }
    }

    /// True if either endpoint is anchored to terminal `id`.
    pub fn touches_terminal(&self, id: EntityId) -> bool {
        self.start_ref == Some(Anchor::Terminal(id)) || self.end_ref == Some(Anchor::Terminal(id))
    }
}

/// Everything the user has drawn.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sketch {
    /// Insertion order is draw order: later segments render on top.
    segments: Vec<Segment>,
    nodes: SlotMap<FreeNodeId, FreeNode>,
    /// Creation order of free nodes.
    node_order: Vec<FreeNodeId>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Appends a segment and returns its index.
    pub fn push_segment(&mut self, segment: Segment) -> usize {
        self.segments.push(segment);
        self.segments.len() - 1
    }

    /// Removes the most recently drawn segment.
    pub fn pop_segment(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Registers a free node at `position` (world space).
    pub fn add_free_node(&mut self, position: DVec2) -> FreeNodeId {
        let id = self.nodes.insert_with_key(|key| FreeNode {
            id: key,
            position,
            flags: NodeFlags::default(),
        });
        self.node_order.push(id);
        id
    }

    pub fn free_node(&self, id: FreeNodeId) -> Option<&FreeNode> {
        self.nodes.get(id)
    }

    pub fn free_node_mut(&mut self, id: FreeNodeId) -> Option<&mut FreeNode> {
        self.nodes.get_mut(id)
    }

    /// Free nodes in creation order.
    pub fn free_nodes(&self) -> impl Iterator<Item = &FreeNode> {
        self.node_order.iter().filter_map(|&id| self.nodes.get(id))
    }

    /// World-space positions of all free nodes, in creation order.
    pub fn free_node_positions(&self) -> Vec<DVec2> {
        self.free_nodes().map(|n| n.position).collect()
    }

    pub fn free_node_count(&self) -> usize {
        self.node_order.len()
    }

    /// Removes every segment and free node.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.nodes.clear();
        self.node_order.clear();
    }

    /// Clears `flag` on every free node.
    pub fn clear_flag(&mut self, flag: NodeFlags) {
        for node in self.nodes.values_mut() {
            node.flags.remove(flag);
        }
    }

    /// Anchors every unanchored endpoint lying within `tolerance` of `position` to `anchor`.
    ///
    /// Called once when a drag grabs a node or terminal, so endpoints that merely
    /// coincide with it are carried along. Returns the number of endpoints adopted.
    pub fn adopt_endpoints(&mut self, anchor: Anchor, position: DVec2, tolerance: f64) -> usize {
        let mut adopted = 0;
        for segment in &mut self.segments {
            if segment.start_ref.is_none() && segment.start.distance(position) <= tolerance {
                segment.start_ref = Some(anchor);
                adopted += 1;
            }
            if segment.end_ref.is_none() && segment.end.distance(position) <= tolerance {
                segment.end_ref = Some(anchor);
                adopted += 1;
            }
        }
        adopted
    }

    /// Moves every endpoint anchored to `anchor` to `position`. Returns the number moved.
    pub fn move_anchored(&mut self, anchor: Anchor, position: DVec2) -> usize {
        let anchor = Some(anchor);
        let mut moved = 0;
        for segment in &mut self.segments {
            if segment.start_ref == anchor {
                segment.start = position;
                moved += 1;
            }
            if segment.end_ref == anchor {
                segment.end = position;
                moved += 1;
            }
        }
        moved
    }

    /// Moves free node `id` to `position` and drags its anchored segment endpoints along.
    ///
    /// Returns the number of endpoints moved, or `None` if the node does not exist.
    pub fn move_free_node(&mut self, id: FreeNodeId, position: DVec2) -> Option<usize> {
        self.nodes.get_mut(id)?.position = position;
        Some(self.move_anchored(Anchor::Node(id), position))
    }
}
