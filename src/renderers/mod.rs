//! Renderer boundary.
//!
//! The core hands a drawing backend a [`RenderInput`]: the links, the node
//! and edge labels, and the computed positions. Pixel sizes, fonts and the
//! output target are the backend's business.

pub mod svg;

pub use svg::SvgRenderer;

use std::collections::BTreeMap;

use crate::graph::GraphModel;
use crate::layout::types::PositionMap;
use crate::syntax::types::{Edge, NodeId, NodeKind};

/// Trait for diagram renderers.
pub trait Renderer {
    /// Render a laid-out genome to a document string.
    fn render(&self, input: &RenderInput) -> String;
}

// ─── RenderInput ─────────────────────────────────────────────────────────────

/// Everything a backend needs to draw one genome.
#[derive(Debug, Clone, Default)]
pub struct RenderInput {
    pub instance: u32,
    pub edges: Vec<Edge>,
    pub node_labels: BTreeMap<NodeId, String>,
    pub node_kinds: BTreeMap<NodeId, NodeKind>,
    /// `(from, to)` → `"<re>, <im>i"`.
    pub edge_labels: BTreeMap<(NodeId, NodeId), String>,
    pub positions: PositionMap,
}

impl RenderInput {
    pub fn new(instance: u32, graph: &GraphModel, positions: PositionMap) -> Self {
        let mut node_labels = BTreeMap::new();
        let mut node_kinds = BTreeMap::new();
        for node in graph.nodes() {
            node_labels.insert(node.id.clone(), node.label().to_string());
            node_kinds.insert(node.id.clone(), node.kind());
        }

        let edges = graph.edges();
        let edge_labels = edges
            .iter()
            .map(|e| ((e.from.clone(), e.to.clone()), e.weight.edge_label()))
            .collect();

        Self {
            instance,
            edges,
            node_labels,
            node_kinds,
            edge_labels,
            positions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers.rs"]
mod tests;
