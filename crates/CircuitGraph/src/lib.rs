//! # CircuitGraph
//!
//! `circuit_graph` is the connectivity half of the sketchpad. It knows nothing
//! about pixels or pointers: it stores circuit entities (terminals) in a flat
//! arena, keeps an undirected adjacency between them, and answers
//! reachability questions.
//!
//! ## Core Architecture
//! - **Model (`src/model.rs`)**: Entity ids, kinds and the entity record.
//! - **Graph (`src/graph.rs`)**: The arena plus `connect`, `is_connected_to` and clearing.
//! - **Circuit (`src/circuit.rs`)**: The battery + LED evaluator used to light the LED.

pub mod circuit;
pub mod error;
pub mod graph;
pub mod model;

pub use circuit::LedCircuit;
pub use error::GraphError;
pub use graph::CircuitGraph;
pub use model::{Entity, EntityId, EntityKind};
