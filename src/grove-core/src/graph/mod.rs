//! Graph data model.
//!
//! This module provides the adjacency-based graph primitives:
//! - `Edge` for immutable `(start, end, label)` records
//! - `Graph` for the mutable node/edge container

mod container;
mod edge;

pub use container::{Graph, Labelling, Orientation};
pub use edge::Edge;
