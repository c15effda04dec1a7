//! Console and JSON presentation of a computed forest.

use serde::Serialize;

use common_error::GroveResult;
use grove_core::{Edge, Forest};

/// Print a section header.
pub fn print_header(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print the forest's edges, one interchange-format record per line.
pub fn print_forest(forest: &Forest<String, f64>) {
    for edge in forest.edges() {
        println!("{edge}");
    }
}

/// Print the summary block: edge count, node count, and the total weight
/// divided by `scale` (e.g. 1000 to report meters as kilometers).
pub fn print_summary(forest: &Forest<String, f64>, scale: f64) {
    print_header("Summary");
    println!("Number of edges in forest: {}", forest.edge_count());
    println!("Number of nodes in forest: {}", forest.node_count());
    println!("Total weight of forest: {:.3}", forest.total_weight() / scale);
}

#[derive(Debug, Serialize)]
struct ForestReport<'a> {
    edges: &'a [Edge<String, f64>],
    edge_count: usize,
    node_count: usize,
    total_weight: f64,
}

/// Render the forest and its summary as a JSON document.
pub fn forest_to_json(forest: &Forest<String, f64>, scale: f64) -> GroveResult<String> {
    let report = ForestReport {
        edges: forest.edges(),
        edge_count: forest.edge_count(),
        node_count: forest.node_count(),
        total_weight: forest.total_weight() / scale,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grove_core::minimum_spanning_forest;
    use grove_core::testing::weighted_triangle;

    #[test]
    fn test_forest_to_json() {
        let forest = minimum_spanning_forest(&weighted_triangle()).unwrap();
        let json = forest_to_json(&forest, 1.0).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["edge_count"], 2);
        assert_eq!(value["node_count"], 3);
        assert_eq!(value["total_weight"], 3.0);
        assert_eq!(value["edges"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_json_applies_scale() {
        let forest = minimum_spanning_forest(&weighted_triangle()).unwrap();
        let json = forest_to_json(&forest, 1000.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_weight"], 0.003);
    }
}
