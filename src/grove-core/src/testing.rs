//! Testing utilities and fixtures for grove-core.
//!
//! This module provides common graph shapes used across unit and
//! integration tests. Panicking on a malformed fixture is fine here; these
//! helpers never ship in a non-test code path.

use crate::graph::{Graph, Labelling, Orientation};

/// Build an undirected labelled graph from `(start, end, weight)` records,
/// creating nodes on first sight.
pub fn edge_list_graph(records: &[(&str, &str, f64)]) -> Graph<String, f64> {
    let mut graph = Graph::new(Orientation::Undirected, Labelling::Labelled);
    for (a, b, weight) in records {
        let _ = graph.add_node((*a).to_string());
        let _ = graph.add_node((*b).to_string());
        graph
            .add_edge((*a).to_string(), (*b).to_string(), Some(*weight))
            .unwrap();
    }
    graph
}

/// The weighted triangle `A-B:4, B-C:1, A-C:2`.
///
/// Its minimum spanning forest is `{B-C(1), A-C(2)}` with total weight 3.
pub fn weighted_triangle() -> Graph<String, f64> {
    edge_list_graph(&[("A", "B", 4.0), ("B", "C", 1.0), ("A", "C", 2.0)])
}

/// A star centred on `hub` with three weighted spokes.
pub fn star() -> Graph<String, f64> {
    edge_list_graph(&[("hub", "a", 1.0), ("hub", "b", 2.0), ("hub", "c", 3.0)])
}

/// Two separate components and one isolated node (three components total).
pub fn two_components_and_a_loner() -> Graph<String, f64> {
    let mut graph = edge_list_graph(&[("a", "b", 1.0), ("b", "c", 2.0), ("x", "y", 5.0)]);
    graph.add_node("lonely".to_string()).unwrap();
    graph
}
