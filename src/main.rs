//! genome-diagram CLI entry point.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use genome_diagram::RenderedGraph;
use genome_diagram::batch::{BatchReport, GenomeFile, SkippedFile, process_directory};
use genome_diagram::config::{AppConfig, load_config};
use genome_diagram::error::GenomeError;
use genome_diagram::layout::{CorrectionPreset, load_corrections};
use genome_diagram::renderers::{Renderer, SvgRenderer};

/// Draw genome network descriptions as layered SVG diagrams.
#[derive(Parser, Debug)]
#[command(
    name = "genome-diagram",
    version = env!("GENOME_DIAGRAM_VERSION"),
    about = "Generates graphs from the network descriptions in mandelbrot-[number]-network files"
)]
struct Cli {
    /// Directory containing the genome network files
    path: PathBuf,

    /// Write each diagram to stdout instead of saving it next to its genome
    #[arg(long = "to-screen")]
    to_screen: bool,

    /// Only process the genome with this instance number
    #[arg(long = "number")]
    number: Option<u32>,

    /// Configuration file (TOML)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Layer correction table (TOML); overrides --preset
    #[arg(long = "corrections")]
    corrections: Option<PathBuf>,

    /// Bundled correction table (mandelbrot, mandelbrot-legacy, none)
    #[arg(long = "preset", default_value = "mandelbrot")]
    preset: CorrectionPreset,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "Parsed arguments");

    match run(&cli) {
        Ok(report) => {
            for skipped in &report.skipped {
                error!(
                    "{}: {}",
                    skipped.file.path.display(),
                    skipped.error
                );
            }
            info!(
                rendered = report.rendered.len(),
                skipped = report.skipped.len();
                "Batch finished"
            );
            if !report.is_clean() {
                process::exit(1);
            }
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<BatchReport, GenomeError> {
    let config = load_config(cli.config.as_deref())?;
    let corrections = load_corrections(cli.corrections.as_deref(), cli.preset)?;
    let mut report = process_directory(&cli.path, cli.number, &config, &corrections)?;

    // Output failures are recorded per file like parse failures.
    let renderer = SvgRenderer::new(config.render.clone());
    for (file, graph) in std::mem::take(&mut report.rendered) {
        match emit(cli, &config, &renderer, &file, &graph) {
            Ok(()) => report.rendered.push((file, graph)),
            Err(error) => {
                warn!(instance = file.instance; "Could not write graph: {error}");
                report.skipped.push(SkippedFile { file, error });
            }
        }
    }
    Ok(report)
}

fn emit(
    cli: &Cli,
    config: &AppConfig,
    renderer: &SvgRenderer,
    file: &GenomeFile,
    graph: &RenderedGraph,
) -> Result<(), GenomeError> {
    let svg = renderer.render(&graph.input);
    if cli.to_screen {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{svg}")?;
        stdout.flush()?;
    } else {
        let output = output_path(&cli.path, config, file.instance);
        fs::write(&output, svg)?;
        info!(output = output.display().to_string(); "Saved graph {}", file.instance);
    }
    Ok(())
}

fn output_path(dir: &Path, config: &AppConfig, instance: u32) -> PathBuf {
    dir.join(config.files.output_name(instance))
}
