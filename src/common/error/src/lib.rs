//! Error types and result aliases for Grove.
//!
//! Every fallible operation in the workspace reports through `GroveError`;
//! validation failures are ordinary return values, never panics.

mod error;

pub use error::{GroveError, GroveResult};
