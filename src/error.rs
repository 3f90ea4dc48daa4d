//! Error types for genome processing.
//!
//! Parse and classification failures abort the file they occur in; the batch
//! driver records them per file and moves on. Degenerate graphs are not errors
//! at all, see [`GraphWarning`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ─── Line-level errors ───────────────────────────────────────────────────────

/// What was wrong with a genome line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected `<from> - <weight> -> <to>`")]
    MissingSeparator,

    #[error("weight is not of the form `(<real>, <imaginary>)`")]
    MalformedWeight,

    #[error("`{0}` is not a decimal number")]
    InvalidNumber(String),
}

/// A malformed link line.
///
/// `line` is 1-based; it is 0 when the text was parsed outside of a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}: {text:?}")]
pub struct ParseError {
    pub line: usize,
    pub text: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(text: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            line: 0,
            text: text.into(),
            kind,
        }
    }

    /// Attach the 1-based line number the text came from.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

/// A non-input token that does not follow `<Kind>(<id>, <function>)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot extract a label from node `{node}`")]
pub struct LabelExtractionError {
    pub node: String,
}

// ─── Crate error ─────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GenomeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error at {0}")]
    Parse(#[from] ParseError),

    #[error("line {line}: {source}")]
    Label {
        line: usize,
        #[source]
        source: LabelExtractionError,
    },

    #[error("configuration error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl GenomeError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

// ─── Warnings ────────────────────────────────────────────────────────────────

/// Non-fatal condition found while laying out a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphWarning {
    /// The graph renders, but only as an empty or single-layer diagram.
    Degenerate(DegenerateReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    NoEdges,
    /// No computed node is reachable from any input node.
    NoReachableDepth,
}

impl std::fmt::Display for GraphWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Degenerate(DegenerateReason::NoEdges) => f.write_str("graph has no edges"),
            Self::Degenerate(DegenerateReason::NoReachableDepth) => {
                f.write_str("no computed node is reachable from an input")
            }
        }
    }
}
