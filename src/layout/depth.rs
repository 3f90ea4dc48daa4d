//! Depth assignment by longest simple path.
//!
//! The depth of a computed node is the node count of the longest simple path
//! reaching it from any input node. Inputs, and nodes no input reaches, sit at
//! depth 0.
//!
//! Paths are enumerated exhaustively, which is exponential in the worst case.
//! Evolved genomes have at most a few hundred nodes and links.
//! `LayoutConfig::max_path_nodes` bounds the enumeration for larger graphs;
//! depths past the bound are no longer exact. A node an input reaches only
//! through paths longer than the bound is placed one past the bound, so it
//! never falls into the input layer. Bounds below 2 act as 2, the shortest
//! possible path.

use log::{debug, warn};
use petgraph::algo::{all_simple_paths, has_path_connecting};
use petgraph::graph::NodeIndex;

use super::types::DepthMap;
use crate::config::LayoutConfig;
use crate::graph::GraphModel;

#[derive(Debug, Clone, Copy, Default)]
pub struct DepthAnalyzer {
    max_path_nodes: Option<usize>,
}

impl DepthAnalyzer {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            max_path_nodes: config.max_path_nodes,
        }
    }

    /// Depth of every node, grouped into layers in first-encounter order.
    pub fn analyze(&self, graph: &GraphModel) -> DepthMap {
        let mut map = DepthMap::new();
        for idx in graph.digraph.node_indices() {
            let depth = self.depth_of_index(graph, idx);
            map.insert(graph.digraph[idx].id.clone(), depth);
        }
        debug!(nodes = map.len(), layers = map.layer_count(); "Assigned depths");
        map
    }

    /// Depth of a single node; 0 if `id` is not in the graph.
    pub fn depth(&self, graph: &GraphModel, id: &str) -> usize {
        graph
            .node_index
            .get(id)
            .map_or(0, |&idx| self.depth_of_index(graph, idx))
    }

    fn depth_of_index(&self, graph: &GraphModel, target: NodeIndex) -> usize {
        if graph.digraph[target].kind().is_input() {
            return 0;
        }
        graph
            .input_indices()
            .filter_map(|input| self.longest_path(graph, input, target))
            .max()
            .unwrap_or(0)
    }

    /// Node count of the longest simple path `from → to`, or `None` if there
    /// is no path.
    fn longest_path(&self, graph: &GraphModel, from: NodeIndex, to: NodeIndex) -> Option<usize> {
        let bound = self.max_path_nodes.map(|n| n.max(2));
        let longest = all_simple_paths::<Vec<NodeIndex>, _>(
            &graph.digraph,
            from,
            to,
            0,
            bound.map(|n| n - 2),
        )
        .map(|path| path.len())
        .max();

        match (longest, bound) {
            (Some(len), _) => Some(len),
            (None, Some(n)) if has_path_connecting(&graph.digraph, from, to, None) => {
                warn!(
                    from = graph.digraph[from].id.as_str(),
                    to = graph.digraph[to].id.as_str(),
                    max_path_nodes = n;
                    "Every path exceeds the bound, depth is approximate"
                );
                Some(n + 1)
            }
            (None, _) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_depth.rs"]
mod tests;
