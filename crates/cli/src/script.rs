use std::io::{self, Write};

use dyngraph_testgen::generator::GeneratedGraph;

use crate::error::Error;
use crate::menu::MenuChoice;

/// Write `generated` as pretty JSON when `json` is set, otherwise as a
/// replayable menu script.
///
/// # Errors
///
/// Returns an error if writing fails or the JSON cannot be encoded.
pub fn write_generated<W>(
    generated: &GeneratedGraph,
    out: &mut W,
    json: bool,
) -> Result<(), Error>
where
    W: Write,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, generated)?;
        writeln!(out)?;
    } else {
        write_script(generated, out)?;
    }
    Ok(())
}

/// Write menu input that rebuilds `generated`, prints it and exits.
///
/// One token per line: a menu number followed by its arguments. Feeding the
/// script to `dyngraph menu --quiet` reproduces the graph exactly.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_script<W>(generated: &GeneratedGraph, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    for label in generated.get_vertices() {
        writeln!(out, "{}", MenuChoice::AddVertex.number())?;
        writeln!(out, "{label}")?;
    }
    for (a, b, weight) in generated.get_edges() {
        writeln!(out, "{}", MenuChoice::AddEdge.number())?;
        writeln!(out, "{a}")?;
        writeln!(out, "{b}")?;
        writeln!(out, "{weight}")?;
    }
    writeln!(out, "{}", MenuChoice::PrintGraph.number())?;
    writeln!(out, "{}", MenuChoice::Exit.number())?;
    Ok(())
}
