use alloc::string::String;
use core::fmt::{Debug, Display, Write};
use core::hash::Hash;

use crate::graph::wugraph::WUGraph;

/// Format the whole graph, one vertex per line in insertion order.
///
/// Each line is the label followed by `(neighbor, weight) ` for every
/// incident edge, so an isolated vertex renders as `A: `.
#[must_use]
pub fn format_graph<T>(graph: &WUGraph<T>) -> String
where
    T: Hash + Eq + Clone + Debug + Display,
{
    let mut output = String::from("Current Graph:\n");
    for vertex in graph.vertices() {
        let _ = write!(output, "{}: ", vertex.label);
        for edge in &vertex.edges {
            let _ = write!(output, "({}, {}) ", edge.target, edge.weight);
        }
        output.push('\n');
    }
    output
}

/// Format a path as `A -> B -> C`.
#[must_use]
pub fn format_path<T>(path: &[T]) -> String
where
    T: Display,
{
    let mut output = String::new();
    for (i, label) in path.iter().enumerate() {
        if i > 0 {
            output.push_str(" -> ");
        }
        let _ = write!(output, "{label}");
    }
    output
}
