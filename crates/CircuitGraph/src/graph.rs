use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::error::GraphError;
use crate::model::{Entity, EntityId, EntityKind};

/// The connectivity graph.
///
/// Holds every entity in a flat arena. Edges come in two flavours:
/// - **wired** edges, created by `connect` when the user draws a wire between
///   two terminals. These live in each entity's adjacency list and are what
///   `clear_connections` / `clear_all` remove.
/// - **internal** links, describing conduction inside a device (an LED's
///   anode and cathode). They are set up once and survive every clear.
///
/// Reachability follows both.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CircuitGraph {
    entities: SlotMap<EntityId, Entity>,
    internal_links: Vec<(EntityId, EntityId)>,
}

impl CircuitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new entity with an empty adjacency.
    pub fn add_entity(&mut self, label: impl Into<String>, kind: EntityKind) -> EntityId {
        let label = label.into();
        self.entities.insert_with_key(|key| Entity {
            id: key,
            label,
            kind,
            adjacency: Vec::new(),
        })
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Iterates all entities in arena order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Wired neighbours of `id`. Empty for unknown ids.
    pub fn adjacency(&self, id: EntityId) -> &[EntityId] {
        self.entities
            .get(id)
            .map(|e| e.adjacency.as_slice())
            .unwrap_or(&[])
    }

    fn label(&self, id: EntityId) -> &str {
        self.entities
            .get(id)
            .map(|e| e.label.as_str())
            .unwrap_or("?")
    }

    fn ensure(&self, id: EntityId) -> Result<(), GraphError> {
        if self.entities.contains_key(id) {
            Ok(())
        } else {
            Err(GraphError::UnknownEntity(id))
        }
    }

    /// Adds an undirected wired edge between `a` and `b`.
    ///
    /// Idempotent: returns `Ok(true)` only when the edge did not exist yet.
    /// Connecting an entity to itself is a no-op.
    pub fn connect(&mut self, a: EntityId, b: EntityId) -> Result<bool, GraphError> {
        self.ensure(a)?;
        self.ensure(b)?;
        if a == b {
            return Ok(false);
        }

        let mut added = false;
        if let Some(entity) = self.entities.get_mut(a)
            && !entity.adjacency.contains(&b)
        {
            entity.adjacency.push(b);
            added = true;
        }
        if let Some(entity) = self.entities.get_mut(b)
            && !entity.adjacency.contains(&a)
        {
            entity.adjacency.push(a);
            added = true;
        }

        tracing::info!(from = %self.label(a), to = %self.label(b), added, "Connected entities");
        Ok(added)
    }

    /// Removes the wired edge between `a` and `b` on both sides.
    pub fn disconnect(&mut self, a: EntityId, b: EntityId) -> Result<bool, GraphError> {
        self.ensure(a)?;
        self.ensure(b)?;

        let mut removed = false;
        if let Some(entity) = self.entities.get_mut(a) {
            let before = entity.adjacency.len();
            entity.adjacency.retain(|&n| n != b);
            removed |= entity.adjacency.len() != before;
        }
        if let Some(entity) = self.entities.get_mut(b) {
            let before = entity.adjacency.len();
            entity.adjacency.retain(|&n| n != a);
            removed |= entity.adjacency.len() != before;
        }

        if removed {
            tracing::info!(from = %self.label(a), to = %self.label(b), "Disconnected entities");
        }
        Ok(removed)
    }

    /// Records a device-internal conduction path between `a` and `b`.
    pub fn link_internal(&mut self, a: EntityId, b: EntityId) -> Result<(), GraphError> {
        self.ensure(a)?;
        self.ensure(b)?;
        let exists = self
            .internal_links
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a));
        if !exists {
            self.internal_links.push((a, b));
        }
        Ok(())
    }

    /// Removes every wired edge incident to `id`, including the back-edges
    /// stored on its former neighbours. Returns how many edges were removed.
    pub fn clear_connections(&mut self, id: EntityId) -> Result<usize, GraphError> {
        let neighbours = match self.entities.get_mut(id) {
            Some(entity) => std::mem::take(&mut entity.adjacency),
            None => return Err(GraphError::UnknownEntity(id)),
        };

        for &n in &neighbours {
            if let Some(other) = self.entities.get_mut(n) {
                other.adjacency.retain(|&x| x != id);
            }
        }

        if !neighbours.is_empty() {
            tracing::info!(entity = %self.label(id), removed = neighbours.len(), "Cleared connections");
        }
        Ok(neighbours.len())
    }

    /// Clears the wired adjacency of every entity. Internal links are kept.
    pub fn clear_all(&mut self) {
        for entity in self.entities.values_mut() {
            entity.adjacency.clear();
        }
        tracing::debug!("Cleared all wired connections");
    }

    /// True if `to` can be reached from `from` over wired edges and internal links.
    ///
    /// Reflexive. Walks with an explicit stack and a visited set, so cycles and
    /// long chains are both fine. Unknown ids are never connected to anything
    /// but themselves.
    pub fn is_connected_to(&self, from: EntityId, to: EntityId) -> bool {
        if from == to {
            return true;
        }
        if !self.contains(from) || !self.contains(to) {
            return false;
        }

        let mut visited = slotmap::SecondaryMap::new();
        let mut stack = vec![from];

        while let Some(current) = stack.pop() {
            if current == to {
                return true;
            }
            if visited.insert(current, ()).is_some() {
                continue;
            }
            for next in self.neighbours(current) {
                if !visited.contains_key(next) {
                    stack.push(next);
                }
            }
        }

        false
    }

    /// Wired neighbours followed by internal-link partners.
    fn neighbours(&self, id: EntityId) -> impl Iterator<Item = EntityId> + '_ {
        let wired = self.adjacency(id).iter().copied();
        let internal = self.internal_links.iter().filter_map(move |&(a, b)| {
            if a == id {
                Some(b)
            } else if b == id {
                Some(a)
            } else {
                None
            }
        });
        wired.chain(internal)
    }
}
