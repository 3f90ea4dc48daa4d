//! Node classification.
//!
//! Input tokens are matched exactly against a configured table. Every other
//! token must follow `<Kind>(<id>, <function>)`; its label is the function.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ClassifierConfig;
use crate::error::LabelExtractionError;
use crate::syntax::types::{ComputedKind, NodeClass, NodeId};

static COMPUTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<kind>[A-Z])\((?P<id>[0-9]+),\s*(?P<function>\S.*?)\s*\)$")
        .expect("computed node pattern is valid")
});

/// Decides Input vs Computed and derives display labels.
#[derive(Debug, Clone)]
pub struct NodeClassifier {
    inputs: BTreeMap<String, String>,
}

impl NodeClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            inputs: config.inputs.clone(),
        }
    }

    pub fn classify(&self, id: &NodeId) -> Result<NodeClass, LabelExtractionError> {
        if let Some(label) = self.inputs.get(id.as_str()) {
            return Ok(NodeClass::input(label.clone()));
        }
        let error = || LabelExtractionError {
            node: id.to_string(),
        };
        let caps = COMPUTED.captures(id.as_str()).ok_or_else(error)?;
        let kind = ComputedKind::from_letter(&caps["kind"]).ok_or_else(error)?;
        Ok(NodeClass::computed(kind, &caps["function"]))
    }
}

impl Default for NodeClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_node.rs"]
mod tests;
