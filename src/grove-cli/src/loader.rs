//! Delimited edge-list loading.
//!
//! One edge per line, fields in the order `start,end,weight`, no header
//! row. Nodes are created on first sight; a record whose edge is rejected
//! (a duplicate, typically) is skipped with a warning and never corrupts
//! the partially-built graph. A malformed weight aborts the load with the
//! offending line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use common_error::{GroveError, GroveResult};
use grove_core::{Graph, Labelling, Orientation};

/// Parse one record into `(start, end, weight)`.
pub fn parse_record(line: &str, delimiter: char) -> GroveResult<(String, String, f64)> {
    let mut fields = line.split(delimiter);
    let (Some(start), Some(end), Some(weight)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(GroveError::parse(format!(
            "expected 3 fields separated by '{delimiter}', got '{line}'"
        )));
    };
    if fields.next().is_some() {
        return Err(GroveError::parse(format!(
            "expected 3 fields separated by '{delimiter}', got '{line}'"
        )));
    }
    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| GroveError::parse(format!("invalid weight '{}'", weight.trim())))?;
    Ok((start.trim().to_string(), end.trim().to_string(), weight))
}

/// Load an undirected weighted graph from a delimited edge-list file.
pub fn load_graph<P: AsRef<Path>>(path: P, delimiter: char) -> GroveResult<Graph<String, f64>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut graph = Graph::new(Orientation::Undirected, Labelling::Labelled);

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (start, end, weight) = match parse_record(&line, delimiter) {
            Ok(record) => record,
            Err(GroveError::ParseError(msg)) => {
                return Err(GroveError::parse(format!("line {}: {msg}", number + 1)))
            }
            Err(err) => return Err(err),
        };
        // the same node shows up across many records
        let _ = graph.add_node(start.clone());
        let _ = graph.add_node(end.clone());
        if let Err(err) = graph.add_edge(start, end, Some(weight)) {
            warn!("skipping record at line {}: {err}", number + 1);
        }
    }
    Ok(graph)
}
