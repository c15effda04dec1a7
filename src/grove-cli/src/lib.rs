//! Loader and presenter glue around grove-core.
//!
//! The core exposes graph and forest operations; this crate supplies the
//! thin I/O around them:
//! - `loader` reads `start,end,weight` records into a graph
//! - `report` formats a computed forest for the console or as JSON

pub mod loader;
pub mod report;

pub use loader::{load_graph, parse_record};
pub use report::{forest_to_json, print_forest, print_header, print_summary};
