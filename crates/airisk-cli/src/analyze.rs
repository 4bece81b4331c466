//! # Analyze CLI — Assess a request file.
//!
//! Reads an analysis request (JSON, or YAML by extension), runs the engine
//! and prints either the full result or a short summary.
//!
//! With `--strict`, any vocabulary value the engine would score at its
//! default is reported and the command exits 2 without analyzing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use airisk_core::AnalysisRequest;
use airisk_engine::RiskAnalysisResult;
use airisk_pack::loader::load_document;

use crate::{build_engine, print_document, OutputFormat};

/// Exit code when `--strict` rejects a request.
pub const EXIT_STRICT_VIOLATION: u8 = 2;

/// Analyze subcommand arguments.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Request file (`.json`, `.yaml` or `.yml`).
    pub file: PathBuf,

    /// Reject unrecognized vocabulary values instead of scoring defaults.
    #[arg(long)]
    pub strict: bool,

    /// Print score, tier and recommendation headlines only.
    #[arg(long)]
    pub summary: bool,

    /// Output format for the full result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Execute the analyze subcommand.
pub fn run_analyze(args: &AnalyzeArgs, data_dir: Option<&Path>) -> Result<u8> {
    let payload: serde_json::Value = load_document(&args.file)
        .with_context(|| format!("failed to read request {}", args.file.display()))?;

    if args.strict {
        let request: AnalysisRequest = serde_json::from_value(payload.clone())
            .with_context(|| format!("{} is not an analysis request", args.file.display()))?;
        let violations = request.strict_violations();
        if !violations.is_empty() {
            for violation in &violations {
                eprintln!("  {violation}");
            }
            eprintln!("{} unrecognized value(s)", violations.len());
            return Ok(EXIT_STRICT_VIOLATION);
        }
    }

    let engine = build_engine(data_dir)?;
    let result = engine.analyze_value(payload)?;

    if args.summary {
        print_summary(&result);
    } else {
        print_document(&result, args.format)?;
    }
    Ok(0)
}

fn print_summary(result: &RiskAnalysisResult) {
    println!(
        "Risk: {} ({}/100)",
        result.risk_level.label(),
        result.total_score
    );
    println!("  {}", result.risk_description);
    println!();
    println!("Applicable regulations: {}", result.applicable_regulations.len());
    for regulation in &result.applicable_regulations {
        println!("  {:<16} {}", regulation.id, regulation.name);
    }
    println!();
    println!("Recommendations:");
    for recommendation in &result.recommendations {
        println!(
            "  [{}] {}: {}",
            recommendation.priority.as_str(),
            recommendation.category,
            recommendation.action
        );
    }
}
