use crate::model::EntityId;
use thiserror::Error;

/// Errors returned by graph mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The id does not name an entity in this graph.
    #[error("unknown entity {0:?}")]
    UnknownEntity(EntityId),
}
