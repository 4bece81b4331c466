//! # Catalog CLI — Regions, search and the risk framework.
//!
//! Read-only views over the loaded knowledge bases, printed the way an
//! operator reads them in a terminal.

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;

use airisk_core::catalog_key;

use crate::{build_engine, print_document, OutputFormat};

/// Regions subcommand arguments.
#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Region code (e.g. EU, usa, California). Lists all regions if absent.
    pub code: Option<String>,

    /// Output format for a single region.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Search subcommand arguments.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Case-insensitive text to look for in each regulation.
    pub query: String,
}

/// Framework subcommand arguments.
#[derive(Args, Debug)]
pub struct FrameworkArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Execute the regions subcommand.
pub fn run_regions(args: &RegionsArgs, data_dir: Option<&Path>) -> Result<u8> {
    let engine = build_engine(data_dir)?;

    let Some(code) = &args.code else {
        let summaries = engine.region_summaries();
        println!("{:<12} {:<20} {:<16} REGULATIONS", "CODE", "NAME", "PRIMARY");
        for s in &summaries {
            println!(
                "{:<12} {:<20} {:<16} {}",
                s.code, s.name, s.primary_regulation, s.regulation_count
            );
        }
        println!();
        println!("Total: {} regions", summaries.len());
        return Ok(0);
    };

    match engine.region(code) {
        Some(region) => {
            print_document(region, args.format)?;
            Ok(0)
        }
        None => {
            eprintln!("unknown region: {} (canonical {})", code, catalog_key(code));
            Ok(1)
        }
    }
}

/// Execute the search subcommand.
pub fn run_search(args: &SearchArgs, data_dir: Option<&Path>) -> Result<u8> {
    if args.query.trim().is_empty() {
        bail!("search query must not be empty");
    }
    let engine = build_engine(data_dir)?;
    let hits = engine.search(&args.query);
    for hit in &hits {
        println!(
            "{:<12} {:<16} {}",
            hit.region, hit.regulation.id, hit.regulation.name
        );
    }
    println!();
    println!("Total: {} regulations", hits.len());
    Ok(0)
}

/// Execute the framework subcommand.
pub fn run_framework(args: &FrameworkArgs, data_dir: Option<&Path>) -> Result<u8> {
    let engine = build_engine(data_dir)?;
    print_document(engine.framework(), args.format)?;
    Ok(0)
}
