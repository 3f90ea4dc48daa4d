//! genome-diagram: layered diagrams of evolved CPPN genomes.
//!
//! Public API: [`render_genome`] runs one genome description through the
//! pipeline; [`batch::process_directory`] does so for every genome file in a
//! directory.
//!
//! Pipeline: link lines → [`parsers`] → [`graph::GraphModel`] →
//! [`layout::DepthAnalyzer`] → [`layout::LayoutEngine`] →
//! [`renderers::RenderInput`].

pub mod batch;
pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;

use log::{info, warn};

use crate::config::AppConfig;
use crate::error::{DegenerateReason, GenomeError, GraphWarning};
use crate::graph::GraphModel;
use crate::layout::{CorrectionTable, DepthAnalyzer, DepthMap, LayoutEngine};
use crate::parsers::{NodeClassifier, parse_genome};
use crate::renderers::RenderInput;

/// One genome, laid out and ready for a renderer.
#[derive(Debug, Clone)]
pub struct RenderedGraph {
    pub instance: u32,
    pub input: RenderInput,
    pub depths: DepthMap,
    pub warnings: Vec<GraphWarning>,
}

/// Parse, classify, layer and position one genome description.
///
/// `instance` selects the rows of `corrections` that apply. Parse and
/// classification failures abort this genome only.
pub fn render_genome<'a, I>(
    instance: u32,
    lines: I,
    config: &AppConfig,
    corrections: &CorrectionTable,
) -> Result<RenderedGraph, GenomeError>
where
    I: IntoIterator<Item = &'a str>,
{
    let edges = parse_genome(lines)?;
    let classifier = NodeClassifier::new(&config.classifier);
    let graph = GraphModel::build(&edges, &classifier)?;

    let depths = DepthAnalyzer::new(&config.layout).analyze(&graph);
    let positions = LayoutEngine::new(&config.layout, corrections).layout(instance, &depths);

    let warnings = degenerate_warnings(&graph, &depths);
    for warning in &warnings {
        warn!(instance; "Degenerate genome: {warning}");
    }

    info!(
        instance,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        recurrent = !graph.is_dag(),
        layers = depths.layer_count();
        "Laid out genome"
    );

    Ok(RenderedGraph {
        instance,
        input: RenderInput::new(instance, &graph, positions),
        depths,
        warnings,
    })
}

/// [`render_genome`] over a whole description held in memory.
pub fn render_genome_str(
    instance: u32,
    src: &str,
    config: &AppConfig,
    corrections: &CorrectionTable,
) -> Result<RenderedGraph, GenomeError> {
    render_genome(instance, src.lines(), config, corrections)
}

fn degenerate_warnings(graph: &GraphModel, depths: &DepthMap) -> Vec<GraphWarning> {
    if graph.edge_count() == 0 {
        return vec![GraphWarning::Degenerate(DegenerateReason::NoEdges)];
    }
    if depths.max_depth().unwrap_or(0) == 0 {
        return vec![GraphWarning::Degenerate(DegenerateReason::NoReachableDepth)];
    }
    Vec::new()
}

#[cfg(test)]
#[path = "../tests/rust/test_pipeline.rs"]
mod tests;
