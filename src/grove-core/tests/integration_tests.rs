//! Integration tests for grove-core.
//!
//! These cover cross-module behavior and property-based invariants without
//! duplicating the unit tests in individual modules.

use proptest::prelude::*;

use grove_core::testing::{edge_list_graph, star, two_components_and_a_loner, weighted_triangle};
use grove_core::{minimum_spanning_forest, Graph, Labelling, Orientation, PriorityQueue};

fn drain(queue: &mut PriorityQueue<i32, fn(&i32, &i32) -> std::cmp::Ordering>) -> Vec<i32> {
    let mut out = Vec::new();
    while !queue.is_empty() {
        out.push(queue.pop().unwrap());
    }
    out
}

fn assert_heap_order(layout: &[i32]) {
    for i in 1..layout.len() {
        assert!(
            layout[(i - 1) / 2] <= layout[i],
            "heap property violated at index {i}: {layout:?}"
        );
    }
}

#[test]
fn test_forest_end_to_end() {
    let graph = weighted_triangle();
    let forest = minimum_spanning_forest(&graph).unwrap();

    assert_eq!(forest.edge_count(), 2);
    assert_eq!(forest.node_count(), 3);
    assert_eq!(forest.total_weight(), 3.0);

    let b = "B".to_string();
    let c = "C".to_string();
    let a = "A".to_string();
    assert!(forest.edges().iter().any(|e| e.connects(&b, &c)));
    assert!(forest.edges().iter().any(|e| e.connects(&a, &c)));
}

#[test]
fn test_forest_per_component_edge_counts() {
    // connected: N - 1 edges
    let forest = minimum_spanning_forest(&star()).unwrap();
    assert_eq!(forest.edge_count(), 3);
    assert_eq!(forest.node_count(), 4);

    // k = 3 components: N - k edges
    let forest = minimum_spanning_forest(&two_components_and_a_loner()).unwrap();
    assert_eq!(forest.edge_count(), forest.node_count() - 3);
}

#[test]
fn test_forest_prefers_light_edges() {
    let graph = edge_list_graph(&[
        ("a", "b", 10.0),
        ("a", "c", 1.0),
        ("c", "b", 1.0),
        ("b", "d", 4.0),
    ]);
    let forest = minimum_spanning_forest(&graph).unwrap();
    assert_eq!(forest.total_weight(), 6.0);
    // the heavy a-b edge is never selected
    let a = "a".to_string();
    let b = "b".to_string();
    assert!(!forest.edges().iter().any(|e| e.connects(&a, &b)));
}

#[test]
fn test_graph_survives_rejected_operations() {
    let mut graph = weighted_triangle();
    let nodes = graph.node_count();
    let edges = graph.edge_count();

    assert!(graph.add_node("A".to_string()).is_err());
    assert!(graph
        .add_edge("A".to_string(), "B".to_string(), Some(9.0))
        .is_err());
    assert!(graph
        .add_edge("A".to_string(), "B".to_string(), None)
        .is_err());
    assert!(graph.remove_node(&"Z".to_string()).is_err());
    assert!(graph.remove_edge(&"A".to_string(), &"Z".to_string()).is_err());

    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), edges);
    // and the graph still computes the same forest
    let forest = minimum_spanning_forest(&graph).unwrap();
    assert_eq!(forest.total_weight(), 3.0);
}

#[test]
fn test_graph_serde_round_trip() {
    let graph = weighted_triangle();
    let json = serde_json::to_string(&graph).unwrap();
    let restored: Graph<String, f64> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.node_count(), graph.node_count());
    assert_eq!(restored.edge_count(), graph.edge_count());
    assert!(restored.contains_edge(&"B".to_string(), &"C".to_string()));
    assert_eq!(
        restored.label(&"A".to_string(), &"B".to_string()).unwrap(),
        &4.0
    );

    let forest = minimum_spanning_forest(&restored).unwrap();
    assert_eq!(forest.total_weight(), 3.0);
}

#[test]
fn test_directed_graph_counts() {
    let mut graph: Graph<i32, f64> = Graph::new(Orientation::Directed, Labelling::Labelled);
    for v in 0..4 {
        graph.add_node(v).unwrap();
    }
    graph.add_edge(0, 1, Some(1.0)).unwrap();
    graph.add_edge(1, 0, Some(2.0)).unwrap(); // opposite direction is a distinct edge
    graph.add_edge(1, 2, Some(3.0)).unwrap();
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.label(&0, &1).unwrap(), &1.0);
    assert_eq!(graph.label(&1, &0).unwrap(), &2.0);

    graph.remove_node(&1).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 0);
}

proptest! {
    #[test]
    fn prop_pop_yields_non_decreasing_order(values in prop::collection::hash_set(any::<i32>(), 0..64)) {
        let mut queue = PriorityQueue::natural();
        for v in &values {
            queue.push(*v).unwrap();
        }
        let drained = drain(&mut queue);

        let mut expected: Vec<i32> = values.into_iter().collect();
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn prop_membership_matches_heap_contents(
        values in prop::collection::hash_set(any::<i32>(), 1..64),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..16),
    ) {
        let mut queue = PriorityQueue::natural();
        for v in &values {
            queue.push(*v).unwrap();
        }

        let pool: Vec<i32> = values.iter().copied().collect();
        for index in removals {
            let candidate = pool[index.index(pool.len())];
            let was_present = queue.contains(&candidate);
            prop_assert_eq!(queue.remove(&candidate).is_ok(), was_present);
        }

        let layout: Vec<i32> = queue.iter().copied().collect();
        assert_heap_order(&layout);
        for v in &pool {
            prop_assert_eq!(queue.contains(v), layout.contains(v));
        }

        // what remains still drains in sorted order
        let drained = drain(&mut queue);
        let mut expected = layout;
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn prop_chain_forest_spans_every_node(n in 1usize..32) {
        let mut graph: Graph<usize, f64> =
            Graph::new(Orientation::Undirected, Labelling::Labelled);
        for v in 0..n {
            graph.add_node(v).unwrap();
        }
        for v in 1..n {
            graph.add_edge(v - 1, v, Some(v as f64)).unwrap();
        }

        let forest = minimum_spanning_forest(&graph).unwrap();
        prop_assert_eq!(forest.edge_count(), n - 1);
        prop_assert_eq!(forest.node_count(), n);
    }
}
