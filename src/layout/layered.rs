//! Layered coordinate assignment.
//!
//! Layers are stacked bottom-up by depth, one `vertical_spacing` apart, and the
//! whole stack is centred on y = 0. Nodes of a layer are spread
//! `horizontal_spacing` apart and centred on x = 0. A [`CorrectionTable`]
//! entry for the (instance, depth) pair then shifts the layer or changes its
//! spacing.

use log::trace;

use super::corrections::CorrectionTable;
use super::types::{DepthMap, Point, PositionMap};
use crate::config::LayoutConfig;

#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'a> {
    horizontal_spacing: f64,
    vertical_spacing: f64,
    corrections: &'a CorrectionTable,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(config: &LayoutConfig, corrections: &'a CorrectionTable) -> Self {
        Self {
            horizontal_spacing: config.horizontal_spacing,
            vertical_spacing: config.vertical_spacing,
            corrections,
        }
    }

    /// Place every node of `depths`. An empty map gives an empty layout.
    pub fn layout(&self, instance: u32, depths: &DepthMap) -> PositionMap {
        let mut positions = PositionMap::new();
        let start_y = -(depths.layer_count() as f64 * self.vertical_spacing) / 2.0;

        for (depth, nodes) in depths.layers() {
            let spacing = self
                .corrections
                .spacing(instance, depth, self.horizontal_spacing);
            let y = start_y
                + depth as f64 * self.vertical_spacing
                + self.corrections.y_offset(instance, depth);
            let start_x = -((nodes.len() as f64 - 1.0) * spacing) / 2.0
                + self.corrections.x_offset(instance, depth);

            trace!(depth, nodes = nodes.len(), spacing, y; "Placing layer");
            for (i, id) in nodes.iter().enumerate() {
                positions.insert(id.clone(), Point::new(start_x + i as f64 * spacing, y));
            }
        }
        positions
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_layered.rs"]
mod tests;
