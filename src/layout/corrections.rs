//! Per-instance layer corrections.
//!
//! Centred layering overlaps nodes on irregular genomes. Corrections nudge
//! one layer of one graph instance: shift it horizontally, shift it
//! vertically, or change the distance between its nodes. They are tuning
//! data, loaded from TOML:
//!
//! ```toml
//! [[correction]]
//! instance = 4
//! depth = 2
//! y = -0.5
//! spacing = 0.5
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use serde::Deserialize;

use crate::error::GenomeError;

/// Tuning values for the genome exports of the Mandelbrot selection runs.
pub const DEFAULT_CORRECTIONS_TOML: &str = include_str!("../../data/mandelbrot-corrections.toml");

/// Tuning values for the earlier Mandelbrot exports, keyed by their own
/// instance numbering.
pub const LEGACY_CORRECTIONS_TOML: &str =
    include_str!("../../data/mandelbrot-legacy-corrections.toml");

// ─── Correction ──────────────────────────────────────────────────────────────

/// Nudges for one (instance, depth) layer. Absent fields leave the layer as is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Correction {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub spacing: Option<f64>,
}

impl Correction {
    /// Overlay `other` on `self`; fields set in `other` win.
    fn merge(&mut self, other: Correction) {
        self.x = other.x.or(self.x);
        self.y = other.y.or(self.y);
        self.spacing = other.spacing.or(self.spacing);
    }
}

#[derive(Debug, Deserialize)]
struct CorrectionEntry {
    instance: u32,
    depth: usize,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    spacing: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CorrectionFile {
    #[serde(default)]
    correction: Vec<CorrectionEntry>,
}

// ─── CorrectionTable ─────────────────────────────────────────────────────────

/// Read-only lookup from (instance, depth) to a [`Correction`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorrectionTable {
    entries: HashMap<(u32, usize), Correction>,
}

impl CorrectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML table. Entries repeating a key override earlier ones field
    /// by field.
    pub fn from_toml_str(src: &str) -> Result<Self, toml::de::Error> {
        let file: CorrectionFile = toml::from_str(src)?;
        let mut table = Self::new();
        for entry in file.correction {
            let correction = Correction {
                x: entry.x,
                y: entry.y,
                spacing: entry.spacing,
            };
            table.insert(entry.instance, entry.depth, correction);
        }
        Ok(table)
    }

    /// The bundled Mandelbrot tuning table.
    pub fn mandelbrot() -> Result<Self, toml::de::Error> {
        Self::from_toml_str(DEFAULT_CORRECTIONS_TOML)
    }

    /// The bundled table for the earlier Mandelbrot exports.
    pub fn mandelbrot_legacy() -> Result<Self, toml::de::Error> {
        Self::from_toml_str(LEGACY_CORRECTIONS_TOML)
    }

    pub fn insert(&mut self, instance: u32, depth: usize, correction: Correction) {
        self.entries
            .entry((instance, depth))
            .or_default()
            .merge(correction);
    }

    pub fn get(&self, instance: u32, depth: usize) -> Option<&Correction> {
        self.entries.get(&(instance, depth))
    }

    /// Horizontal shift of the layer; 0 when absent.
    pub fn x_offset(&self, instance: u32, depth: usize) -> f64 {
        self.get(instance, depth).and_then(|c| c.x).unwrap_or(0.0)
    }

    /// Vertical shift of the layer; 0 when absent.
    pub fn y_offset(&self, instance: u32, depth: usize) -> f64 {
        self.get(instance, depth).and_then(|c| c.y).unwrap_or(0.0)
    }

    /// Distance between nodes of the layer. A missing or zero override yields
    /// `base`.
    pub fn spacing(&self, instance: u32, depth: usize, base: f64) -> f64 {
        self.get(instance, depth)
            .and_then(|c| c.spacing)
            .filter(|&s| s != 0.0)
            .unwrap_or(base)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─── Presets ─────────────────────────────────────────────────────────────────

/// Bundled correction tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrectionPreset {
    #[default]
    Mandelbrot,
    MandelbrotLegacy,
    /// No corrections: every layer stays centred.
    None,
}

impl CorrectionPreset {
    pub fn name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::MandelbrotLegacy => "mandelbrot-legacy",
            Self::None => "none",
        }
    }

    pub fn table(self) -> Result<CorrectionTable, GenomeError> {
        let parsed = match self {
            Self::Mandelbrot => CorrectionTable::mandelbrot(),
            Self::MandelbrotLegacy => CorrectionTable::mandelbrot_legacy(),
            Self::None => return Ok(CorrectionTable::new()),
        };
        parsed.map_err(|e| GenomeError::config(format!("<bundled {}>", self.name()), e.to_string()))
    }
}

impl fmt::Display for CorrectionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CorrectionPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mandelbrot" => Ok(Self::Mandelbrot),
            "mandelbrot-legacy" => Ok(Self::MandelbrotLegacy),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown correction preset `{other}` (expected mandelbrot, mandelbrot-legacy or none)"
            )),
        }
    }
}

// ─── Loading ─────────────────────────────────────────────────────────────────

/// Load a correction table from `path`, or the `preset` table when no path is
/// given.
pub fn load_corrections(
    path: Option<&Path>,
    preset: CorrectionPreset,
) -> Result<CorrectionTable, GenomeError> {
    let Some(path) = path else {
        let table = preset.table()?;
        debug!(preset = preset.name(), entries = table.len(); "Using bundled correction table");
        return Ok(table);
    };
    let content = fs::read_to_string(path)?;
    let table = CorrectionTable::from_toml_str(&content)
        .map_err(|e| GenomeError::config(path, e.to_string()))?;
    info!(path = path.display().to_string(), entries = table.len(); "Loaded correction table");
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_corrections.rs"]
mod tests;
