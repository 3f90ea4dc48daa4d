//! GraphModel: the genome as a petgraph DiGraph.
//!
//! Nodes are registered implicitly by the links that mention them and are
//! classified once, on first sight. The graph may contain cycles and several
//! components. It is written once while a file is read and only queried
//! afterwards.

use std::collections::HashMap;

use log::trace;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::{GenomeError, LabelExtractionError};
use crate::parsers::NodeClassifier;
use crate::syntax::types::{Edge, NodeClass, NodeId, NodeKind, Weight};

// ─── Data types ──────────────────────────────────────────────────────────────

/// Node data stored in the DiGraph.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub id: NodeId,
    pub class: NodeClass,
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        self.class.kind
    }

    pub fn label(&self) -> &str {
        &self.class.label
    }
}

/// Edge data stored in the DiGraph.
#[derive(Debug, Clone, Copy)]
pub struct EdgeData {
    pub weight: Weight,
}

/// Directed genome graph.
///
/// Holds the DiGraph for path algorithms and a `HashMap<NodeId, NodeIndex>`
/// for lookup by token. Node indices follow first-encounter order.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    pub digraph: DiGraph<NodeData, EdgeData>,
    pub node_index: HashMap<NodeId, NodeIndex>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from numbered link lines.
    ///
    /// A token that fails classification aborts the build; the error names
    /// the line that introduced it.
    pub fn build(edges: &[(usize, Edge)], classifier: &NodeClassifier) -> Result<Self, GenomeError> {
        let mut graph = Self::new();
        for (line, edge) in edges {
            graph
                .add_edge(edge, classifier)
                .map_err(|source| GenomeError::Label {
                    line: *line,
                    source,
                })?;
        }
        Ok(graph)
    }

    // ─── Mutation ────────────────────────────────────────────────────────────

    /// Insert `edge`, registering both endpoints first.
    ///
    /// Re-adding a link between the same two nodes keeps a single link and
    /// replaces its weight, so the last weight read wins. Returns `true` if
    /// the link was new.
    pub fn add_edge(
        &mut self,
        edge: &Edge,
        classifier: &NodeClassifier,
    ) -> Result<bool, LabelExtractionError> {
        let from = self.ensure_node(&edge.from, classifier)?;
        let to = self.ensure_node(&edge.to, classifier)?;
        if let Some(existing) = self.digraph.find_edge(from, to) {
            trace!(from = edge.from.as_str(), to = edge.to.as_str(); "Repeated link, weight replaced");
            self.digraph[existing].weight = edge.weight;
            return Ok(false);
        }
        self.digraph.add_edge(from, to, EdgeData {
            weight: edge.weight,
        });
        Ok(true)
    }

    /// Return the index of `id`, classifying and inserting it if absent.
    pub fn ensure_node(
        &mut self,
        id: &NodeId,
        classifier: &NodeClassifier,
    ) -> Result<NodeIndex, LabelExtractionError> {
        if let Some(&idx) = self.node_index.get(id) {
            return Ok(idx);
        }
        let class = classifier.classify(id)?;
        let idx = self.digraph.add_node(NodeData {
            id: id.clone(),
            class,
        });
        self.node_index.insert(id.clone(), idx);
        Ok(idx)
    }

    // ─── Queries ─────────────────────────────────────────────────────────────

    /// All nodes in first-encounter order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeData> {
        self.digraph.node_indices().map(|idx| &self.digraph[idx])
    }

    /// All links in insertion order.
    pub fn edges(&self) -> Vec<Edge> {
        self.digraph
            .edge_indices()
            .filter_map(|eidx| {
                let (a, b) = self.digraph.edge_endpoints(eidx)?;
                Some(Edge {
                    from: self.digraph[a].id.clone(),
                    to: self.digraph[b].id.clone(),
                    weight: self.digraph[eidx].weight,
                })
            })
            .collect()
    }

    /// Indices of the input nodes, in first-encounter order.
    pub fn input_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.digraph
            .node_indices()
            .filter(|&idx| self.digraph[idx].kind().is_input())
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Returns true if the graph has no recurrent links.
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_graph.rs"]
mod tests;
