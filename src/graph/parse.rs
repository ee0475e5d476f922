//! Field-level helpers for the text graph format.
//!
//! The format is shared by both representations: vertex count on the first
//! non-blank line, declared edge count on the second, then one edge per line.
//! These helpers validate individual fields; the per-representation `parse`
//! constructors own the line loop and the final declared-versus-parsed count
//! check.

use crate::Result;

/// Parses one of the two leading count lines.
pub(crate) fn parse_count(line: Option<&str>, what: &str) -> Result<usize> {
    let Some(line) = line else {
        return Err(read_format_error!("missing {} line", what));
    };
    line.parse::<usize>()
        .map_err(|_| read_format_error!("invalid {} '{}'", what, line))
}

/// Parses a single vertex field of an edge line and range-checks it.
pub(crate) fn parse_vertex(field: Option<&str>, vertices: usize, line: &str) -> Result<usize> {
    let Some(field) = field else {
        return Err(read_format_error!("incomplete edge line '{}'", line));
    };
    let vertex = field
        .parse::<usize>()
        .map_err(|_| read_format_error!("invalid vertex '{}' in edge line '{}'", field, line))?;
    if vertex >= vertices {
        return Err(read_format_error!(
            "vertex {} is outside 0..{} in edge line '{}'",
            vertex,
            vertices,
            line
        ));
    }
    Ok(vertex)
}

/// Parses the weight field of an edge line.
pub(crate) fn parse_weight(field: Option<&str>, line: &str) -> Result<f64> {
    let Some(field) = field else {
        return Err(read_format_error!("missing weight in edge line '{}'", line));
    };
    field
        .parse::<f64>()
        .map_err(|_| read_format_error!("invalid weight '{}' in edge line '{}'", field, line))
}
