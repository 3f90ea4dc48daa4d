//! Data structures for genome graph descriptions.
//!
//! A genome file is a list of links `<from> - (<re>, <im>) -> <to>`.
//! Node ids are kept verbatim as [`NodeId`]; the category a token encodes is
//! resolved once, right after parsing, into a [`NodeKind`].

use std::borrow::Borrow;
use std::fmt;

// ─── NodeId ──────────────────────────────────────────────────────────────────

/// Opaque node token, e.g. `B(1)` or `H(7, sin)`.
///
/// Equality is string equality: two links naming the same text refer to the
/// same logical node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── NodeKind ────────────────────────────────────────────────────────────────

/// Role of a computed node, taken from the single-letter prefix of its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComputedKind {
    Hidden, // H(..)
    Output, // O(..)
}

impl ComputedKind {
    /// Map a token prefix letter to its role. Only `H` and `O` are known.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "H" => Some(Self::Hidden),
            "O" => Some(Self::Output),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::Hidden => 'H',
            Self::Output => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Bias, state variable or parameter; never computed from other nodes.
    Input,
    Computed(ComputedKind),
}

impl NodeKind {
    pub fn is_input(self) -> bool {
        matches!(self, Self::Input)
    }
}

/// Classification of one node: its kind plus the text drawn inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeClass {
    pub kind: NodeKind,
    pub label: String,
}

impl NodeClass {
    pub fn input(label: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Input,
            label: label.into(),
        }
    }

    pub fn computed(kind: ComputedKind, label: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Computed(kind),
            label: label.into(),
        }
    }
}

// ─── Weight ──────────────────────────────────────────────────────────────────

/// Complex link weight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Weight {
    pub re: f64,
    pub im: f64,
}

impl Weight {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Text drawn next to an edge: `"<re>, <im>i"`.
    pub fn edge_label(&self) -> String {
        format!("{}, {}i", format_component(self.re), format_component(self.im))
    }
}

/// Serialises in the genome grammar, `(<re>, <im>)`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            format_component(self.re),
            format_component(self.im)
        )
    }
}

/// Shortest exact decimal form; integral values keep one fractional digit.
pub fn format_component(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Serialises as one genome line, `<from> - (<re>, <im>) -> <to>`.
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} -> {}", self.from, self.weight, self.to)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
