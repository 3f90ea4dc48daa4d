pub mod types;

pub use types::{ComputedKind, Edge, NodeClass, NodeId, NodeKind, Weight};
