//! # Board
//!
//! The circuit side of the canvas: the connectivity graph, the battery + LED
//! terminals installed in it, and where those components sit in world space.
//! Terminal positions are derived from the layout on demand and handed to the
//! snapping code explicitly each frame. A terminal dragged in drag mode keeps
//! its own position, which takes priority over the layout.

use circuit_graph::{CircuitGraph, EntityId, GraphError, LedCircuit};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use slotmap::SecondaryMap;

/// World-space location of a circuit terminal for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Terminal {
    pub entity: EntityId,
    pub position: DVec2,
}

/// Placement of the board components in world space.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    /// Center of the battery body.
    pub battery: DVec2,
    /// Center of the LED body.
    pub led: DVec2,
    /// Distance between a component's two terminals.
    pub terminal_spacing: f64,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            battery: DVec2::new(300.0, 400.0),
            led: DVec2::new(800.0, 400.0),
            terminal_spacing: 80.0,
        }
    }
}

impl BoardLayout {
    fn half(&self) -> DVec2 {
        DVec2::new(self.terminal_spacing / 2.0, 0.0)
    }

    pub fn battery_positive(&self) -> DVec2 {
        self.battery - self.half()
    }

    pub fn battery_negative(&self) -> DVec2 {
        self.battery + self.half()
    }

    pub fn led_anode(&self) -> DVec2 {
        self.led - self.half()
    }

    pub fn led_cathode(&self) -> DVec2 {
        self.led + self.half()
    }

    /// Size of a component body drawn between its terminals.
    pub fn body_size(&self) -> DVec2 {
        DVec2::new(self.terminal_spacing * 0.6, self.terminal_spacing * 0.4)
    }
}

/// The circuit graph together with the component layout.
#[derive(Clone, Debug)]
pub struct Board {
    pub graph: CircuitGraph,
    pub circuit: LedCircuit,
    pub layout: BoardLayout,
    /// Terminals moved away from their layout position.
    moved: SecondaryMap<EntityId, DVec2>,
}

impl Board {
    /// A fresh graph with the battery and LED installed.
    pub fn new(layout: BoardLayout) -> Result<Self, GraphError> {
        let mut graph = CircuitGraph::new();
        let circuit = LedCircuit::install(&mut graph)?;
        Ok(Self {
            graph,
            circuit,
            layout,
            moved: SecondaryMap::new(),
        })
    }

    /// Terminals in snapping precedence order (battery +, battery -, anode, cathode).
    pub fn terminals(&self) -> Vec<Terminal> {
        let positions = [
            self.layout.battery_positive(),
            self.layout.battery_negative(),
            self.layout.led_anode(),
            self.layout.led_cathode(),
        ];
        self.circuit
            .terminals()
            .into_iter()
            .zip(positions)
            .map(|(entity, layout_position)| Terminal {
                entity,
                position: self.moved.get(entity).copied().unwrap_or(layout_position),
            })
            .collect()
    }

    /// Current position of terminal `entity`, or `None` if it is not one of the board's terminals.
    pub fn terminal_position(&self, entity: EntityId) -> Option<DVec2> {
        self.terminals()
            .into_iter()
            .find(|t| t.entity == entity)
            .map(|t| t.position)
    }

    /// Places terminal `entity` at `position` (world space). Wiring is unaffected.
    ///
    /// Returns `false` if `entity` is not one of the board's terminals.
    pub fn move_terminal(&mut self, entity: EntityId, position: DVec2) -> bool {
        if !self.circuit.terminals().contains(&entity) {
            return false;
        }
        self.moved.insert(entity, position);
        true
    }

    /// Whether the LED is wired into a complete loop.
    pub fn is_illuminated(&self) -> bool {
        self.circuit.is_illuminated(&self.graph)
    }
}
