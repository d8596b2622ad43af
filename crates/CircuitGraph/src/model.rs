//! # Entity Model
//!
//! Entities are the fixed connection points of the circuit (battery poles,
//! LED legs). They are stored in a `SlotMap`, so ids stay valid and cheap to
//! copy without holding references into the arena.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for an Entity.
    pub struct EntityId;
}

/// Electrical role of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Where current leaves (battery positive).
    Source,
    /// Where current returns (battery negative).
    Sink,
    /// Anything in between (LED legs).
    Passive,
}

/// A named circuit terminal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Entity {
    /// Self-reference ID.
    pub id: EntityId,
    /// Human readable name, used in logs.
    pub label: String,
    /// Electrical role.
    pub kind: EntityKind,
    /// Wired neighbours, in the order they were connected.
    ///
    /// Always symmetric: if `b` is listed here, this entity is listed on `b`.
    pub(crate) adjacency: Vec<EntityId>,
}

impl Entity {
    /// Wired neighbours of this entity.
    pub fn adjacency(&self) -> &[EntityId] {
        &self.adjacency
    }

    /// True if `other` is a direct wired neighbour.
    pub fn is_adjacent(&self, other: EntityId) -> bool {
        self.adjacency.contains(&other)
    }
}
