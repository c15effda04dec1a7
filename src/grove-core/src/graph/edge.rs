//! Edge representation.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An immutable edge record `(start, end, label)`.
///
/// The label is present iff the owning graph is labelled. For storage
/// purposes two edges are equal when their endpoints match; the label never
/// participates in equality or hashing. This is what keeps an adjacency
/// bucket from holding two records for the same ordered pair, and it lets
/// the label be a type without total equality (such as an `f64` weight).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<V, L> {
    start: V,
    end: V,
    label: Option<L>,
}

impl<V, L> Edge<V, L> {
    /// Create a new edge.
    pub fn new(start: V, end: V, label: Option<L>) -> Self {
        Self { start, end, label }
    }

    /// Get the edge's start node.
    pub fn start(&self) -> &V {
        &self.start
    }

    /// Get the edge's end node.
    pub fn end(&self) -> &V {
        &self.end
    }

    /// Get the edge's label, if the owning graph is labelled.
    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    /// Get the endpoints as a tuple `(start, end)`.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.start, &self.end)
    }
}

impl<V: PartialEq, L> Edge<V, L> {
    /// Check if this edge connects two nodes (in either direction).
    pub fn connects(&self, a: &V, b: &V) -> bool {
        (self.start == *a && self.end == *b) || (self.start == *b && self.end == *a)
    }
}

impl<V: PartialEq, L> PartialEq for Edge<V, L> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<V: Eq, L> Eq for Edge<V, L> {}

impl<V: Hash, L> Hash for Edge<V, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl<V: fmt::Display, L: fmt::Display> fmt::Display for Edge<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{},{},{}", self.start, self.end, label),
            None => write!(f, "{},{}", self.start, self.end),
        }
    }
}
