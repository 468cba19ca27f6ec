use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use boxsieve_nms::{SuppressionConfig, Suppressor};
use clap::Parser;
use log::info;

mod parser;

/// Drop redundant overlapping bounding boxes.
///
/// Boxes are visited from the largest `y2` down; a box is kept when
/// its IoU with every box kept so far is below the threshold.
#[derive(Parser)]
#[command(name = "boxsieve")]
struct Cli {
    /// JSON file with boxes as [x1, y1, x2, y2] arrays ("-" for stdin).
    input: PathBuf,

    /// Output file (defaults to stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// IoU at or above which a box is a duplicate (default 0.5).
    #[arg(long)]
    threshold: Option<f64>,

    /// Reject inverted or non-finite boxes instead of filtering them.
    #[arg(long)]
    strict: bool,

    /// JSON suppression config; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => parser::load_config(path)?,
        None => SuppressionConfig::default(),
    };

    let request = parser::load_request(&cli.input)?;

    if let Some(threshold) = cli.threshold.or(request.threshold) {
        config.threshold = threshold;
    }
    if cli.strict {
        config.strict = true;
    }

    let suppressor = Suppressor::new(config);
    let kept = suppressor
        .run(request.boxes.as_slice())
        .context("Suppression failed")?;

    info!(
        "kept {} of {} boxes (threshold {}, strict {})",
        kept.len(),
        request.boxes.len(),
        config.threshold,
        config.strict
    );

    parser::write_boxes(&kept, cli.output.as_deref(), cli.pretty)
}
