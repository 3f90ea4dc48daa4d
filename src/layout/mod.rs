//! Layout: depth layering and coordinate assignment.

pub mod corrections;
pub mod depth;
pub mod layered;
pub mod types;

pub use corrections::{Correction, CorrectionPreset, CorrectionTable, load_corrections};
pub use depth::DepthAnalyzer;
pub use layered::LayoutEngine;
pub use types::{DepthMap, Point, PositionMap};
