use circuit_graph::{CircuitGraph, EntityKind, GraphError, LedCircuit};

fn chain(graph: &mut CircuitGraph, n: usize) -> Vec<circuit_graph::EntityId> {
    (0..n)
        .map(|i| graph.add_entity(format!("Node {i}"), EntityKind::Passive))
        .collect()
}

#[test]
fn test_connect_is_idempotent_and_symmetric() {
    let mut graph = CircuitGraph::new();
    let ids = chain(&mut graph, 2);
    let (a, b) = (ids[0], ids[1]);

    assert_eq!(graph.connect(a, b), Ok(true));
    assert_eq!(graph.connect(a, b), Ok(false));
    assert_eq!(graph.connect(b, a), Ok(false));

    assert_eq!(graph.adjacency(a), &[b]);
    assert_eq!(graph.adjacency(b), &[a]);
    assert!(graph.is_connected_to(a, b));
    assert!(graph.is_connected_to(b, a));
}

#[test]
fn test_self_connection_is_noop() {
    let mut graph = CircuitGraph::new();
    let a = graph.add_entity("A", EntityKind::Source);

    assert_eq!(graph.connect(a, a), Ok(false));
    assert!(graph.adjacency(a).is_empty());
    // Reflexive regardless of edges
    assert!(graph.is_connected_to(a, a));
}

#[test]
fn test_reachability_terminates_on_cycle() {
    let mut graph = CircuitGraph::new();
    let ids = chain(&mut graph, 4);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

    graph.connect(a, b).unwrap();
    graph.connect(b, c).unwrap();
    graph.connect(c, a).unwrap();

    assert!(graph.is_connected_to(a, c));
    assert!(graph.is_connected_to(c, b));
    // d is isolated: the walk has to exhaust the cycle and stop
    assert!(!graph.is_connected_to(a, d));
    assert!(!graph.is_connected_to(d, a));
}

#[test]
fn test_reachability_on_long_chain() {
    let mut graph = CircuitGraph::new();
    let ids = chain(&mut graph, 10_000);
    for pair in ids.windows(2) {
        graph.connect(pair[0], pair[1]).unwrap();
    }

    assert!(graph.is_connected_to(ids[0], ids[9_999]));
}

#[test]
fn test_clear_connections_removes_back_edges() {
    let mut graph = CircuitGraph::new();
    let ids = chain(&mut graph, 3);
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    graph.connect(a, b).unwrap();
    graph.connect(a, c).unwrap();
    graph.connect(b, c).unwrap();

    assert_eq!(graph.clear_connections(a), Ok(2));

    assert!(graph.adjacency(a).is_empty());
    assert_eq!(graph.adjacency(b), &[c]);
    assert_eq!(graph.adjacency(c), &[b]);
    assert!(!graph.is_connected_to(b, a));
    assert!(graph.is_connected_to(b, c));
}

#[test]
fn test_disconnect_single_edge() {
    let mut graph = CircuitGraph::new();
    let ids = chain(&mut graph, 3);
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    graph.connect(a, b).unwrap();
    graph.connect(b, c).unwrap();

    assert_eq!(graph.disconnect(b, a), Ok(true));
    assert_eq!(graph.disconnect(b, a), Ok(false));
    assert!(!graph.is_connected_to(a, c));
    assert!(graph.is_connected_to(b, c));
}

#[test]
fn test_unknown_entity_is_rejected() {
    let mut graph = CircuitGraph::new();
    let a = graph.add_entity("A", EntityKind::Source);

    let mut other = CircuitGraph::new();
    let _ = other.add_entity("X", EntityKind::Passive);
    let _ = other.add_entity("Y", EntityKind::Passive);
    let stranger = other.add_entity("Z", EntityKind::Passive);

    assert_eq!(graph.connect(a, stranger), Err(GraphError::UnknownEntity(stranger)));
    assert_eq!(graph.clear_connections(stranger), Err(GraphError::UnknownEntity(stranger)));
    assert!(!graph.is_connected_to(a, stranger));
}

#[test]
fn test_led_circuit_completion() {
    let mut graph = CircuitGraph::new();
    let led = LedCircuit::install(&mut graph).unwrap();

    assert!(!led.is_illuminated(&graph));

    graph.connect(led.battery_positive, led.led_anode).unwrap();
    assert!(!led.is_illuminated(&graph), "Half a loop is not enough");

    graph.connect(led.led_cathode, led.battery_negative).unwrap();
    assert!(led.is_illuminated(&graph));
    assert!(led.is_complete(&graph, led.battery_positive, led.battery_negative));

    graph.clear_connections(led.battery_negative).unwrap();
    assert!(!led.is_illuminated(&graph));
}

#[test]
fn test_clear_all_keeps_device_short() {
    let mut graph = CircuitGraph::new();
    let led = LedCircuit::install(&mut graph).unwrap();
    graph.connect(led.battery_positive, led.led_anode).unwrap();
    graph.connect(led.led_cathode, led.battery_negative).unwrap();

    graph.clear_all();

    for entity in graph.entities() {
        assert!(entity.adjacency().is_empty(), "{} kept edges", entity.label);
    }
    assert!(!led.is_illuminated(&graph));
    // The LED is still a device: anode and cathode conduct
    assert!(graph.is_connected_to(led.led_anode, led.led_cathode));

    graph.connect(led.battery_positive, led.led_anode).unwrap();
    graph.connect(led.led_cathode, led.battery_negative).unwrap();
    assert!(led.is_illuminated(&graph));
}

#[test]
fn test_terminal_precedence_order() {
    let mut graph = CircuitGraph::new();
    let led = LedCircuit::install(&mut graph).unwrap();

    let order = led.terminals();
    assert_eq!(order[0], led.battery_positive);
    assert_eq!(order[3], led.led_cathode);
    assert_eq!(graph.entity(order[0]).map(|e| e.kind), Some(EntityKind::Source));
    assert_eq!(graph.entity(order[1]).map(|e| e.kind), Some(EntityKind::Sink));
}
