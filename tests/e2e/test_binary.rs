//! Integration tests for the genome-diagram binary.
//!
//! These tests copy the sample genomes from tests/data into a scratch
//! directory, run the compiled binary on it and inspect what it leaves behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the binary built by `cargo test`.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_genome-diagram"))
}

fn data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path
}

/// Scratch directory holding a copy of every sample genome.
fn sample_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Cannot create temp dir");
    for entry in fs::read_dir(data_dir()).expect("Cannot read tests/data").flatten() {
        let path = entry.path();
        let name = path.file_name().unwrap();
        fs::copy(&path, dir.path().join(name))
            .unwrap_or_else(|e| panic!("Cannot copy {:?}: {}", path, e));
    }
    dir
}

fn run_binary(dir: &Path, extra_args: &[&str]) -> Output {
    Command::new(binary_path())
        .arg(dir)
        .args(extra_args)
        .args(["--log-level", "warn"])
        .output()
        .expect("Failed to run binary")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn svg_outputs(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".svg"))
        .collect();
    names.sort();
    names
}

// ─── Batch output ────────────────────────────────────────────────────────────

#[test]
fn test_writes_one_svg_per_genome() {
    let dir = sample_dir();
    let output = run_binary(dir.path(), &[]);
    assert_success(&output);

    assert_eq!(
        svg_outputs(dir.path()),
        vec![
            "mandelbrot-13-network-graph.svg".to_string(),
            "mandelbrot-4-network-graph.svg".to_string(),
        ]
    );

    let svg = fs::read_to_string(dir.path().join("mandelbrot-4-network-graph.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">out</text>"));
    assert!(svg.contains(">gauss</text>"));
    assert!(svg.contains(">z</text>"));
    assert!(svg.contains(">2.0, 0.0i</text>"));
}

#[test]
fn test_number_selects_one_genome() {
    let dir = sample_dir();
    let output = run_binary(dir.path(), &["--number", "13"]);
    assert_success(&output);
    assert_eq!(
        svg_outputs(dir.path()),
        vec!["mandelbrot-13-network-graph.svg".to_string()]
    );
}

#[test]
fn test_to_screen_prints_instead_of_saving() {
    let dir = sample_dir();
    let output = run_binary(dir.path(), &["--to-screen", "--number", "4"]);
    assert_success(&output);

    let stdout = String::from_utf8(output.stdout).expect("Non-UTF8 output");
    assert_eq!(stdout.matches("<svg").count(), 1);
    assert!(stdout.contains(">0.25, -1.0i</text>"));
    assert!(svg_outputs(dir.path()).is_empty());
}

#[test]
fn test_output_is_deterministic() {
    let dir = sample_dir();
    let first = run_binary(dir.path(), &["--to-screen"]);
    let second = run_binary(dir.path(), &["--to-screen"]);
    assert_success(&first);
    assert_eq!(first.stdout, second.stdout);
}

// ─── Failures ────────────────────────────────────────────────────────────────

#[test]
fn test_malformed_genome_is_reported_and_skipped() {
    let dir = sample_dir();
    fs::write(
        dir.path().join("mandelbrot-7-network.txt"),
        "B(1) - (1.0, 0.0) -> O(0, x)\ngarbage text\n",
    )
    .unwrap();

    let output = run_binary(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mandelbrot-7-network.txt"), "stderr: {stderr}");
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
    assert!(stderr.contains("garbage text"), "stderr: {stderr}");

    // The other genomes are still drawn.
    assert_eq!(svg_outputs(dir.path()).len(), 2);
}

#[test]
fn test_unwritable_output_is_reported_and_skipped() {
    let dir = sample_dir();
    // A directory where the SVG for instance 4 should go.
    fs::create_dir(dir.path().join("mandelbrot-4-network-graph.svg")).unwrap();

    let output = run_binary(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mandelbrot-4-network.txt"), "stderr: {stderr}");

    // Instance 13 comes after the failure and is still written.
    assert!(dir.path().join("mandelbrot-13-network-graph.svg").is_file());
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_binary(&dir.path().join("absent"), &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_bad_config_fails() {
    let dir = sample_dir();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[layout]\nvertical_spacing = \"wide\"\n").unwrap();

    let output = run_binary(dir.path(), &["--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(svg_outputs(dir.path()).is_empty());
}

// ─── Options ─────────────────────────────────────────────────────────────────

#[test]
fn test_config_changes_output_name_and_size() {
    let dir = sample_dir();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "[render]\nwidth = 640\nheight = 480\n\n[files]\noutput = \"genome-{number}.svg\"\n",
    )
    .unwrap();

    let output = run_binary(
        dir.path(),
        &["--number", "4", "--config", config.to_str().unwrap()],
    );
    assert_success(&output);

    let svg = fs::read_to_string(dir.path().join("genome-4.svg")).unwrap();
    assert!(svg.contains("width=\"640\" height=\"480\""));
}

#[test]
fn test_bundled_corrections_apply_by_default() {
    let dir = sample_dir();
    let default = run_binary(dir.path(), &["--to-screen", "--number", "4"]);
    let named = run_binary(dir.path(), &["--to-screen", "--number", "4", "--preset", "mandelbrot"]);
    let none = run_binary(dir.path(), &["--to-screen", "--number", "4", "--preset", "none"]);
    assert_success(&default);
    assert_success(&none);

    // Instance 4 has tuned layers, so turning the table off moves nodes.
    assert_eq!(default.stdout, named.stdout);
    assert_ne!(default.stdout, none.stdout);
}

#[test]
fn test_corrections_file_overrides_preset() {
    let dir = sample_dir();
    let table = dir.path().join("corrections.toml");
    fs::write(&table, "").unwrap();

    let from_file = run_binary(
        dir.path(),
        &["--to-screen", "--number", "4", "--corrections", table.to_str().unwrap()],
    );
    let none = run_binary(dir.path(), &["--to-screen", "--number", "4", "--preset", "none"]);
    assert_success(&from_file);
    assert_eq!(from_file.stdout, none.stdout);
}

#[test]
fn test_unknown_preset_is_rejected() {
    let dir = sample_dir();
    let output = run_binary(dir.path(), &["--preset", "julia"]);
    assert!(!output.status.success());
    assert!(svg_outputs(dir.path()).is_empty());
}

#[test]
fn test_version_flag() {
    let output = Command::new(binary_path())
        .arg("--version")
        .output()
        .expect("Failed to run binary");
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("genome-diagram "));
}
