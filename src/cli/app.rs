//! Main CLI application structure

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::output::{Output, OutputFormat};
use crate::domain;

#[derive(Parser)]
#[command(name = "shapesum")]
#[command(author, version, about = "Sum the areas of geometric shapes described in JSON")]
pub struct Cli {
    /// Path to the input JSON file
    #[arg(long, short = 'f')]
    pub file: PathBuf,

    /// Path of the artifact file receiving the total-area line
    #[arg(long, default_value = "area.txt")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("shapesum starting");
    output.verbose_ctx("read", &format!("Reading input file: {}", cli.file.display()));

    let raw = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file: {}", cli.file.display()))?;

    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).with_context(|| {
        format!(
            "Input is not a JSON array of shape records: {}",
            cli.file.display()
        )
    })?;

    output.verbose_ctx("read", &format!("Decoded {} records", records.len()));

    let report = domain::aggregate(&records);

    for skip in &report.skipped {
        output.verbose_ctx("skip", &format!("record {}: {}", skip.index, skip.reason));
        output.warn(&format!("Skipping invalid shape: {}", skip.reason));
    }

    if output.is_json() {
        let counts: Vec<_> = report
            .counts
            .iter()
            .map(|(kind, count)| {
                serde_json::json!({
                    "kind": kind.tag(),
                    "count": count,
                })
            })
            .collect();
        output.data(&serde_json::json!({
            "total_area": report.total_area,
            "counts": counts,
            "skipped": report.skipped.len(),
        }));
    } else {
        println!("{}", report.total_line());
        for (kind, count) in &report.counts {
            println!("{}: {}", kind, count);
        }
    }

    fs::write(&cli.output, format!("{}\n", report.total_line()))
        .with_context(|| format!("Failed to write artifact file: {}", cli.output.display()))?;
    output.verbose_ctx("write", &format!("Wrote total to {}", cli.output.display()));

    Ok(())
}
