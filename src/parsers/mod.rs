//! Genome description parsing: link lines and node tokens.

pub mod edge;
pub mod node;

pub use edge::{parse_edge, parse_weight};
pub use node::NodeClassifier;

use log::debug;

use crate::error::ParseError;
use crate::syntax::types::Edge;

/// Parse every link line of a genome description.
///
/// Blank lines are skipped. Returns `(line_number, edge)` pairs with 1-based
/// line numbers; the first malformed line aborts the whole description.
pub fn parse_genome<'a, I>(lines: I) -> Result<Vec<(usize, Edge)>, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut edges = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let number = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let edge = parse_edge(line).map_err(|e| e.at_line(number))?;
        edges.push((number, edge));
    }
    debug!(edges = edges.len(); "Parsed genome description");
    Ok(edges)
}
