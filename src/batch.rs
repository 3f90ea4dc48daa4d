//! Batch processing of genome files.
//!
//! Files are discovered by a filename pattern whose `number` group is the
//! graph instance id. Each file is processed on its own: a file that fails to
//! parse is reported and skipped, and the rest of the batch carries on.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use regex::Regex;

use crate::config::{AppConfig, FileConfig};
use crate::error::GenomeError;
use crate::layout::CorrectionTable;
use crate::{RenderedGraph, render_genome_str};

// ─── Discovery ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeFile {
    pub path: PathBuf,
    pub instance: u32,
}

/// Genome files in `dir` matching the configured pattern, by instance id.
pub fn discover(dir: &Path, files: &FileConfig) -> Result<Vec<GenomeFile>, GenomeError> {
    let pattern = Regex::new(&files.pattern)?;
    if !pattern.capture_names().any(|name| name == Some("number")) {
        return Err(GenomeError::config(
            dir,
            format!("file pattern `{}` has no `number` group", files.pattern),
        ));
    }

    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(number) = pattern.captures(name).and_then(|caps| caps.name("number")) else {
            continue;
        };
        match number.as_str().parse::<u32>() {
            Ok(instance) => found.push(GenomeFile {
                path: path.clone(),
                instance,
            }),
            Err(e) => debug!(file = name, error = e.to_string(); "Ignoring file with unusable number"),
        }
    }
    found.sort_by(|a, b| (a.instance, &a.path).cmp(&(b.instance, &b.path)));
    debug!(dir = dir.display().to_string(), files = found.len(); "Discovered genome files");
    Ok(found)
}

// ─── Processing ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct SkippedFile {
    pub file: GenomeFile,
    pub error: GenomeError,
}

/// Outcome of a batch: what was laid out and what was skipped.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub rendered: Vec<(GenomeFile, RenderedGraph)>,
    pub skipped: Vec<SkippedFile>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

pub fn process_file(
    file: &GenomeFile,
    config: &AppConfig,
    corrections: &CorrectionTable,
) -> Result<RenderedGraph, GenomeError> {
    let src = fs::read_to_string(&file.path)?;
    render_genome_str(file.instance, &src, config, corrections)
}

/// Process `files`, or only those of instance `only` if given.
pub fn process_files(
    files: Vec<GenomeFile>,
    only: Option<u32>,
    config: &AppConfig,
    corrections: &CorrectionTable,
) -> BatchReport {
    let mut report = BatchReport::default();
    for file in files {
        if only.is_some_and(|n| n != file.instance) {
            continue;
        }
        info!(instance = file.instance; "Drawing graph {}", file.instance);
        match process_file(&file, config, corrections) {
            Ok(graph) => report.rendered.push((file, graph)),
            Err(error) => {
                warn!(
                    file = file.path.display().to_string(),
                    instance = file.instance;
                    "Skipping genome: {error}"
                );
                report.skipped.push(SkippedFile { file, error });
            }
        }
    }
    report
}

/// Discover and process every genome file in `dir`.
pub fn process_directory(
    dir: &Path,
    only: Option<u32>,
    config: &AppConfig,
    corrections: &CorrectionTable,
) -> Result<BatchReport, GenomeError> {
    let files = discover(dir, &config.files)?;
    Ok(process_files(files, only, config, corrections))
}

#[cfg(test)]
#[path = "../tests/rust/test_batch.rs"]
mod tests;
