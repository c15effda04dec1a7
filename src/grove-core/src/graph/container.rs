//! Graph container.
//!
//! `Graph` owns two parallel maps keyed by node: an adjacency map holding
//! direction-aware neighbor identities, and an incidence map holding the
//! labelled edge records originating at each node. Undirected graphs
//! materialize both mirrored directions but count each edge once.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use common_error::{graph_err, GroveError, GroveResult};

use super::Edge;

/// Whether edges are one-way or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Edges run from start to end only.
    Directed,
    /// Every edge is materialized in both directions.
    Undirected,
}

/// Whether edges carry labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Labelling {
    /// Every edge must carry a label.
    Labelled,
    /// No edge may carry a label.
    Unlabelled,
}

/// A mutable graph over node type `V` with edge labels of type `L`.
///
/// Nodes are opaque caller-supplied values; identity is value equality.
/// All validation failures are non-fatal: the operation returns an
/// `Err` carrying the diagnostic and the graph keeps its last valid state.
///
/// Invariants:
/// - every node keyed in `adjacency` is keyed in `incidence`, and vice versa
/// - for an undirected graph, `b ∈ adjacency[a] ⇔ a ∈ adjacency[b]`, and an
///   edge `(a, b, l)` in `incidence[a]` has a mirror `(b, a, l)` in
///   `incidence[b]`
/// - an ordered node pair carries at most one edge
/// - labels are present on every edge iff the graph is labelled
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de> + Eq + Hash, L: Deserialize<'de>"))]
pub struct Graph<V, L> {
    orientation: Orientation,
    labelling: Labelling,
    adjacency: HashMap<V, HashSet<V>>,
    incidence: HashMap<V, HashSet<Edge<V, L>>>,
    node_count: usize,
    edge_count: usize,
}

impl<V, L> Graph<V, L>
where
    V: Clone + Eq + Hash,
    L: Clone,
{
    /// Create a new empty graph with fixed orientation and labelling.
    pub fn new(orientation: Orientation, labelling: Labelling) -> Self {
        Self {
            orientation,
            labelling,
            adjacency: HashMap::new(),
            incidence: HashMap::new(),
            node_count: 0,
            edge_count: 0,
        }
    }

    /// Check if the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    /// Check if the graph is labelled.
    pub fn is_labelled(&self) -> bool {
        self.labelling == Labelling::Labelled
    }

    /// Check if the graph has no nodes and no edges.
    pub fn is_empty(&self) -> bool {
        self.node_count == 0 && self.edge_count == 0
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Get the number of edges in the graph.
    ///
    /// An undirected edge is counted once even though it is stored twice.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add a node to the graph.
    ///
    /// Rejects a node that is already present.
    pub fn add_node(&mut self, v: V) -> GroveResult<()> {
        if self.contains_node(&v) {
            graph_err!("the node is already in the graph");
        }
        self.adjacency.insert(v.clone(), HashSet::new());
        self.incidence.insert(v, HashSet::new());
        self.node_count += 1;
        Ok(())
    }

    /// Add an edge from `a` to `b`.
    ///
    /// Both endpoints must already be in the graph, the ordered pair must
    /// not already carry an edge, and `label` must agree with the graph's
    /// labelling. Undirected graphs mirror the insertion as `(b, a, label)`
    /// but the edge count still increases by one.
    pub fn add_edge(&mut self, a: V, b: V, label: Option<L>) -> GroveResult<()> {
        if !self.contains_node(&a) {
            graph_err!("the first endpoint is not in the graph");
        }
        if !self.contains_node(&b) {
            graph_err!("the second endpoint is not in the graph");
        }
        if self.contains_edge(&a, &b) {
            graph_err!("the edge is already in the graph");
        }
        if self.is_labelled() && label.is_none() {
            graph_err!("the graph is labelled, the edge needs a label");
        }
        if !self.is_labelled() && label.is_some() {
            graph_err!("the graph is unlabelled, the edge cannot carry a label");
        }

        if self.orientation == Orientation::Undirected {
            if let Some(bucket) = self.incidence.get_mut(&b) {
                bucket.insert(Edge::new(b.clone(), a.clone(), label.clone()));
            }
            if let Some(adjacent) = self.adjacency.get_mut(&b) {
                adjacent.insert(a.clone());
            }
        }
        if let Some(bucket) = self.incidence.get_mut(&a) {
            bucket.insert(Edge::new(a.clone(), b.clone(), label));
        }
        if let Some(adjacent) = self.adjacency.get_mut(&a) {
            adjacent.insert(b);
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Check if a node is in the graph.
    pub fn contains_node(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Check if the edge `a → b` is in the graph.
    ///
    /// Direction-sensitive; effectively direction-agnostic on undirected
    /// graphs since both directions are stored.
    pub fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.adjacency.get(a).is_some_and(|set| set.contains(b))
    }

    /// Remove a node and every edge incident on it.
    ///
    /// For an undirected graph each neighbor's mirrored records are dropped
    /// and the edge count decreases once per neighbor. For a directed graph
    /// the out-edges vanish with the node's own bucket and the in-edges are
    /// found by scanning the remaining nodes.
    pub fn remove_node(&mut self, v: &V) -> GroveResult<()> {
        if !self.contains_node(v) {
            graph_err!("the node is not in the graph");
        }
        match self.orientation {
            Orientation::Undirected => {
                let neighbours: Vec<V> = self
                    .adjacency
                    .get(v)
                    .map(|set| set.iter().cloned().collect())
                    .unwrap_or_default();
                for n in &neighbours {
                    if n != v {
                        if let Some(bucket) = self.incidence.get_mut(n) {
                            bucket.remove(&Edge::new(n.clone(), v.clone(), None));
                        }
                        if let Some(adjacent) = self.adjacency.get_mut(n) {
                            adjacent.remove(v);
                        }
                    }
                    self.edge_count -= 1;
                }
            }
            Orientation::Directed => {
                let out_edges = self.incidence.get(v).map_or(0, HashSet::len);
                self.edge_count -= out_edges;
                let sources: Vec<V> = self
                    .adjacency
                    .iter()
                    .filter(|(n, targets)| *n != v && targets.contains(v))
                    .map(|(n, _)| n.clone())
                    .collect();
                for n in &sources {
                    if let Some(bucket) = self.incidence.get_mut(n) {
                        bucket.remove(&Edge::new(n.clone(), v.clone(), None));
                    }
                    if let Some(adjacent) = self.adjacency.get_mut(n) {
                        adjacent.remove(v);
                    }
                    self.edge_count -= 1;
                }
            }
        }
        self.incidence.remove(v);
        self.adjacency.remove(v);
        self.node_count -= 1;
        Ok(())
    }

    /// Remove the edge `a → b` (and its mirror when undirected).
    pub fn remove_edge(&mut self, a: &V, b: &V) -> GroveResult<()> {
        if !self.contains_node(a) {
            graph_err!("the first endpoint is not in the graph");
        }
        if !self.contains_node(b) {
            graph_err!("the second endpoint is not in the graph");
        }
        if !self.contains_edge(a, b) {
            graph_err!("the edge is not in the graph");
        }
        if let Some(bucket) = self.incidence.get_mut(a) {
            bucket.remove(&Edge::new(a.clone(), b.clone(), None));
        }
        if let Some(adjacent) = self.adjacency.get_mut(a) {
            adjacent.remove(b);
        }
        if self.orientation == Orientation::Undirected && a != b {
            if let Some(bucket) = self.incidence.get_mut(b) {
                bucket.remove(&Edge::new(b.clone(), a.clone(), None));
            }
            if let Some(adjacent) = self.adjacency.get_mut(b) {
                adjacent.remove(a);
            }
        }
        self.edge_count -= 1;
        Ok(())
    }

    /// Get all nodes, unordered.
    pub fn nodes(&self) -> Vec<&V> {
        self.adjacency.keys().collect()
    }

    /// Get all stored edge records.
    ///
    /// An undirected graph yields both mirrored directions as distinct
    /// entries; callers needing a true undirected edge set must dedupe by
    /// unordered pair.
    pub fn edges(&self) -> Vec<&Edge<V, L>> {
        self.incidence.values().flatten().collect()
    }

    /// Get the neighbours of `v`, or an empty collection if `v` is absent.
    pub fn neighbours(&self, v: &V) -> Vec<&V> {
        self.adjacency
            .get(v)
            .map(|set| set.iter().collect())
            .unwrap_or_default()
    }

    /// Get the label of the edge `a → b`.
    ///
    /// Fails when the graph is unlabelled or the edge is absent. Scans `a`'s
    /// incidence bucket, O(degree(a)).
    pub fn label(&self, a: &V, b: &V) -> GroveResult<&L> {
        if !self.is_labelled() {
            graph_err!("the graph is unlabelled");
        }
        if !self.contains_edge(a, b) {
            graph_err!("the edge is not in the graph");
        }
        self.incidence
            .get(a)
            .and_then(|bucket| bucket.iter().find(|edge| edge.end() == b))
            .and_then(Edge::label)
            .ok_or_else(|| GroveError::graph("the edge is not in the graph"))
    }
}
