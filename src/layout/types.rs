//! Layout types: Point, DepthMap, PositionMap.

use std::collections::{BTreeMap, HashMap};

use crate::syntax::types::NodeId;

// ─── Point ───────────────────────────────────────────────────────────────────

/// Position in layout units. `y` grows upwards: depth 0 is the bottom layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One position per node.
pub type PositionMap = BTreeMap<NodeId, Point>;

// ─── DepthMap ────────────────────────────────────────────────────────────────

/// Node depths and the layers they induce.
///
/// Within a layer, nodes keep the order they were assigned in. That order
/// only decides left-to-right placement and carries no other meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthMap {
    depths: HashMap<NodeId, usize>,
    layers: BTreeMap<usize, Vec<NodeId>>,
}

impl DepthMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the depth of `id`. A node already present keeps its first depth.
    pub fn insert(&mut self, id: NodeId, depth: usize) {
        if self.depths.contains_key(&id) {
            return;
        }
        self.layers.entry(depth).or_default().push(id.clone());
        self.depths.insert(id, depth);
    }

    pub fn depth(&self, id: &str) -> Option<usize> {
        self.depths.get(id).copied()
    }

    /// Non-empty layers, lowest depth first.
    pub fn layers(&self) -> impl Iterator<Item = (usize, &[NodeId])> {
        self.layers.iter().map(|(&d, nodes)| (d, nodes.as_slice()))
    }

    /// Number of distinct depths present.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.layers.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
