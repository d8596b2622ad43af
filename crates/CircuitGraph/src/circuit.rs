//! # Circuit Evaluator
//!
//! A fixed battery + LED topology. The LED counts as lit when the battery's
//! positive pole reaches the anode and the cathode reaches the negative pole.
//! No voltages, currents or diode direction are modelled; this is purely a
//! reachability check run once per frame.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::CircuitGraph;
use crate::model::{EntityId, EntityKind};

/// Entity ids of the four terminals on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedCircuit {
    pub battery_positive: EntityId,
    pub battery_negative: EntityId,
    pub led_anode: EntityId,
    pub led_cathode: EntityId,
}

impl LedCircuit {
    /// Adds the battery and LED terminals to `graph` and shorts the LED's
    /// anode to its cathode as the device's internal path.
    pub fn install(graph: &mut CircuitGraph) -> Result<Self, GraphError> {
        let battery_positive = graph.add_entity("Battery+", EntityKind::Source);
        let battery_negative = graph.add_entity("Battery-", EntityKind::Sink);
        let led_anode = graph.add_entity("LED anode", EntityKind::Passive);
        let led_cathode = graph.add_entity("LED cathode", EntityKind::Passive);
        graph.link_internal(led_anode, led_cathode)?;

        Ok(Self {
            battery_positive,
            battery_negative,
            led_anode,
            led_cathode,
        })
    }

    /// Terminals in snapping precedence order: battery first, then the LED.
    pub fn terminals(&self) -> [EntityId; 4] {
        [
            self.battery_positive,
            self.battery_negative,
            self.led_anode,
            self.led_cathode,
        ]
    }

    /// True if `source` reaches the anode and the cathode reaches `sink`.
    pub fn is_complete(&self, graph: &CircuitGraph, source: EntityId, sink: EntityId) -> bool {
        graph.is_connected_to(source, self.led_anode) && graph.is_connected_to(self.led_cathode, sink)
    }

    /// Whether the LED should render as lit.
    pub fn is_illuminated(&self, graph: &CircuitGraph) -> bool {
        self.is_complete(graph, self.battery_positive, self.battery_negative)
    }
}
