//! Link line parser.
//!
//! A link line has three fields separated by ` - ` and ` -> `:
//!
//! ```text
//! B(1) - (1.00, -0.50) -> H(4, sin)
//! ```
//!
//! Fields are positional: source id, weight, destination id.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseError, ParseErrorKind};
use crate::syntax::types::{Edge, NodeId, Weight};

// ─── Patterns ────────────────────────────────────────────────────────────────

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<from>.+?)\s+(?:->|-)\s+(?P<weight>.+?)\s+(?:->|-)\s+(?P<to>.+?)$")
        .expect("link pattern is valid")
});

static WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\s*(?P<re>[^,()]*?)\s*,\s*(?P<im>[^,()]*?)\s*\)$")
        .expect("weight pattern is valid")
});

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("decimal pattern is valid")
});

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse one link line into an [`Edge`].
///
/// Surrounding whitespace on the line and on each field is ignored. The
/// returned error carries no line number; callers reading a file attach it.
pub fn parse_edge(line: &str) -> Result<Edge, ParseError> {
    let trimmed = line.trim();
    let caps = LINK
        .captures(trimmed)
        .ok_or_else(|| ParseError::new(trimmed, ParseErrorKind::MissingSeparator))?;

    let weight = parse_weight(caps["weight"].trim()).map_err(|kind| ParseError::new(trimmed, kind))?;

    Ok(Edge {
        from: NodeId::new(caps["from"].trim()),
        to: NodeId::new(caps["to"].trim()),
        weight,
    })
}

/// Parse `(<real>, <imaginary>)` into a [`Weight`].
pub fn parse_weight(text: &str) -> Result<Weight, ParseErrorKind> {
    let caps = WEIGHT
        .captures(text.trim())
        .ok_or(ParseErrorKind::MalformedWeight)?;
    let re = parse_decimal(&caps["re"])?;
    let im = parse_decimal(&caps["im"])?;
    Ok(Weight::new(re, im))
}

fn parse_decimal(text: &str) -> Result<f64, ParseErrorKind> {
    if !DECIMAL.is_match(text) {
        return Err(ParseErrorKind::InvalidNumber(text.to_string()));
    }
    text.parse::<f64>()
        .map_err(|_| ParseErrorKind::InvalidNumber(text.to_string()))
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_edge.rs"]
mod tests;
