use std::io::Write;

use dyngraph_core::display::{format_graph, format_path};
use dyngraph_core::error::Error as GraphError;
use dyngraph_core::{ShortestPath, Vertex, WUGraph, Weight};
use serde_json::{json, Value};

use crate::error::Error;
use crate::menu::MenuChoice;

/// Everything the session reports back to the user.
#[derive(Debug)]
pub enum Outcome<'a> {
    VertexAdded(&'a str),
    VertexRemoved {
        label: &'a str,
        detached: usize,
    },
    EdgeAdded {
        a: &'a str,
        b: &'a str,
        weight: Weight,
    },
    EdgeRemoved {
        a: &'a str,
        b: &'a str,
        weight: Weight,
    },
    Path(ShortestPath<String>),
    Graph(&'a WUGraph<String>),
    /// The graph refused the operation.
    Rejected {
        choice: MenuChoice,
        error: GraphError<String>,
    },
    InvalidChoice(&'a str),
    InvalidWeight(&'a str),
    Exit,
}

impl Outcome<'_> {
    /// Human-readable rendering, without a trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::VertexAdded(label) => format!("Added vertex \"{label}\"."),
            Self::VertexRemoved { label, .. } => {
                format!("Removed vertex \"{label}\" and its incident edges.")
            }
            Self::EdgeAdded { a, b, weight } => format!("Added edge ({a}–{b}, weight={weight})."),
            Self::EdgeRemoved { a, b, .. } => format!("Removed edge between \"{a}\" and \"{b}\"."),
            Self::Path(found) => format!(
                "Shortest path (Cost: {}): {}",
                found.cost,
                format_path(&found.path)
            ),
            Self::Graph(graph) => format_graph(*graph).trim_end_matches('\n').to_owned(),
            Self::Rejected { error, .. } => error.to_string(),
            Self::InvalidChoice(_) => "Invalid choice, try again.".to_owned(),
            Self::InvalidWeight(input) => format!("Invalid weight \"{input}\"."),
            Self::Exit => "Exiting program.".to_owned(),
        }
    }

    /// Machine-readable rendering as a single JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::VertexAdded(label) => json!({
                "ok": true,
                "op": MenuChoice::AddVertex.op(),
                "label": label,
            }),
            Self::VertexRemoved { label, detached } => json!({
                "ok": true,
                "op": MenuChoice::RemoveVertex.op(),
                "label": label,
                "detached_edges": detached,
            }),
            Self::EdgeAdded { a, b, weight } => json!({
                "ok": true,
                "op": MenuChoice::AddEdge.op(),
                "a": a,
                "b": b,
                "weight": weight,
            }),
            Self::EdgeRemoved { a, b, weight } => json!({
                "ok": true,
                "op": MenuChoice::RemoveEdge.op(),
                "a": a,
                "b": b,
                "weight": weight,
            }),
            Self::Path(found) => json!({
                "ok": true,
                "op": MenuChoice::ShortestPath.op(),
                "cost": found.cost,
                "path": found.path,
            }),
            Self::Graph(graph) => {
                let vertices: Vec<&Vertex<String>> = graph.vertices().collect();
                json!({
                    "ok": true,
                    "op": MenuChoice::PrintGraph.op(),
                    "vertices": vertices,
                })
            }
            Self::Rejected { choice, error } => json!({
                "ok": false,
                "op": choice.op(),
                "error": error,
                "message": error.to_string(),
            }),
            Self::InvalidChoice(input) => json!({
                "ok": false,
                "op": "menu",
                "input": input,
                "message": self.to_text(),
            }),
            Self::InvalidWeight(input) => json!({
                "ok": false,
                "op": MenuChoice::AddEdge.op(),
                "input": input,
                "message": self.to_text(),
            }),
            Self::Exit => json!({
                "ok": true,
                "op": MenuChoice::Exit.op(),
            }),
        }
    }

    /// Write this outcome as one line of text or JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or the JSON cannot be encoded.
    pub fn write_to<W>(&self, out: &mut W, json: bool) -> Result<(), Error>
    where
        W: Write,
    {
        if json {
            serde_json::to_writer(&mut *out, &self.to_json())?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", self.to_text())?;
        }
        Ok(())
    }
}
