//! Minimum spanning forest construction.
//!
//! Prim's algorithm generalized to disconnected graphs: every unvisited
//! node in the outer enumeration seeds a new tree, and the frontier queue
//! is drained per component. Correctness rests on the standard cut-property
//! argument applied independently to each component.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use common_error::{GroveError, GroveResult};

use crate::graph::{Edge, Graph};
use crate::queue::PriorityQueue;

/// A minimum spanning forest: the selected edges plus the number of nodes
/// they span (isolated nodes included).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forest<V, L> {
    edges: Vec<Edge<V, L>>,
    node_count: usize,
}

impl<V, L> Forest<V, L> {
    /// Get the selected edges.
    pub fn edges(&self) -> &[Edge<V, L>] {
        &self.edges
    }

    /// Get the number of edges in the forest.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of nodes the forest spans.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Consume the forest, yielding its edges.
    pub fn into_edges(self) -> Vec<Edge<V, L>> {
        self.edges
    }
}

impl<V, L: Copy + Into<f64>> Forest<V, L> {
    /// Sum of the edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges
            .iter()
            .filter_map(Edge::label)
            .map(|label| (*label).into())
            .sum()
    }
}

/// Compute a minimum spanning forest of `graph` — one tree per connected
/// component, following the connectivity `neighbours` reports (out-edges
/// only for a directed graph; the result is meaningful for undirected
/// graphs).
///
/// Edge labels are the weights. Ties in weight break arbitrarily by heap
/// order; incomparable weights compare as equal. The total weight of the
/// forest is invariant across any valid tie-break. O(E log E).
///
/// Fails when the graph is unlabelled, since there is nothing to minimize.
pub fn minimum_spanning_forest<V, L>(graph: &Graph<V, L>) -> GroveResult<Forest<V, L>>
where
    V: Clone + Eq + Hash,
    L: Clone + PartialOrd,
{
    if !graph.is_labelled() {
        return Err(GroveError::invalid_parameter(
            "spanning forest construction needs weighted edges, the graph is unlabelled",
        ));
    }

    let by_weight = |a: &Edge<V, L>, b: &Edge<V, L>| {
        a.label()
            .partial_cmp(&b.label())
            .unwrap_or(Ordering::Equal)
    };

    let mut visited: HashSet<V> = HashSet::new();
    let mut edges: Vec<Edge<V, L>> = Vec::new();
    let mut queue = PriorityQueue::with_comparator(by_weight);

    for node in graph.nodes() {
        if visited.contains(node) {
            continue;
        }
        // start a new tree at this component
        visited.insert(node.clone());
        for next in graph.neighbours(node) {
            let label = graph.label(node, next)?.clone();
            queue.push(Edge::new(node.clone(), next.clone(), Some(label)))?;
        }
        while !queue.is_empty() {
            let edge = queue.pop()?;
            if visited.contains(edge.end()) {
                continue;
            }
            let current = edge.end().clone();
            visited.insert(current.clone());
            edges.push(edge);
            for next in graph.neighbours(&current) {
                if !visited.contains(next) {
                    let label = graph.label(&current, next)?.clone();
                    queue.push(Edge::new(current.clone(), next.clone(), Some(label)))?;
                }
            }
        }
    }

    Ok(Forest {
        edges,
        node_count: visited.len(),
    })
}
