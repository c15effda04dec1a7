//! Core data structures for Grove minimum spanning forests.
//!
//! This crate provides the interacting pieces that make generalized Prim
//! correct and efficient:
//! - `Graph` and `Edge` for adjacency-based graph storage
//! - `PriorityQueue` for the indexable binary min-heap of frontier edges
//! - `minimum_spanning_forest` for the forest construction itself

pub mod forest;
pub mod graph;
pub mod queue;
pub mod testing;

// Re-export commonly used types
pub use forest::{minimum_spanning_forest, Forest};
pub use graph::{Edge, Graph, Labelling, Orientation};
pub use queue::PriorityQueue;
