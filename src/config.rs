//! Configuration for the rendering pipeline.
//!
//! Every section deserializes from TOML and falls back to its defaults for
//! anything left out, so an empty file is a valid configuration:
//!
//! ```toml
//! [classifier.inputs]
//! "B(1)" = "1"
//! "I(2)" = "z"
//! "I(3)" = "c"
//!
//! [layout]
//! horizontal_spacing = 1.0
//! vertical_spacing = 1.0
//!
//! [render]
//! width = 1500
//! height = 1500
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::error::GenomeError;

// ─── AppConfig ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub classifier: ClassifierConfig,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
    pub files: FileConfig,
}

impl AppConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }
}

// ─── Sections ────────────────────────────────────────────────────────────────

/// Input tokens and the labels drawn for them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub inputs: BTreeMap<String, String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        let inputs = [("B(1)", "1"), ("I(2)", "z"), ("I(3)", "c")]
            .into_iter()
            .map(|(token, label)| (token.to_string(), label.to_string()))
            .collect();
        Self { inputs }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between neighbouring nodes of one layer.
    pub horizontal_spacing: f64,
    /// Distance between consecutive layers.
    pub vertical_spacing: f64,
    /// Upper bound on the nodes of an enumerated path. `None` enumerates every
    /// simple path; setting it trades exact depths for bounded running time.
    pub max_path_nodes: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 1.0,
            vertical_spacing: 1.0,
            max_path_nodes: None,
        }
    }
}

/// Knobs of the SVG renderer. Sizes are in pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub margin: f64,
    pub node_radius: f64,
    pub font_size: u32,
    pub edge_font_size: u32,
    pub node_fill: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 1500,
            margin: 60.0,
            node_radius: 30.0,
            font_size: 14,
            edge_font_size: 12,
            node_fill: "white".to_string(),
        }
    }
}

/// Genome file discovery and output naming.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Regex with a `number` group holding the graph instance id.
    pub pattern: String,
    /// Output file name; `{number}` is replaced by the instance id.
    pub output: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            pattern: r"^mandelbrot-(?P<number>[0-9]+)-network\.txt$".to_string(),
            output: "mandelbrot-{number}-network-graph.svg".to_string(),
        }
    }
}

impl FileConfig {
    pub fn output_name(&self, instance: u32) -> String {
        self.output.replace("{number}", &instance.to_string())
    }
}

// ─── Loading ─────────────────────────────────────────────────────────────────

/// Load the configuration from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, GenomeError> {
    let Some(path) = path else {
        debug!("No configuration file given, using defaults");
        return Ok(AppConfig::default());
    };
    info!(path = path.display().to_string(); "Loading configuration");
    let content = fs::read_to_string(path)?;
    AppConfig::from_toml_str(&content).map_err(|e| GenomeError::config(path, e.to_string()))
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
