//! # Validate CLI — Check a knowledge base before deploying it.
//!
//! Loads both documents, runs every structural check and the engine's
//! program check, and prints the digest the API will report. Each
//! validation issue is printed on its own line.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use airisk_engine::RiskEngine;
use airisk_pack::{KnowledgeBase, PackError};

/// Validate subcommand arguments.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Print only the digest on success.
    #[arg(long)]
    pub quiet: bool,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, data_dir: Option<&Path>) -> Result<u8> {
    let source = data_dir.map_or_else(|| "bundled".to_string(), |d| d.display().to_string());

    let loaded = match data_dir {
        Some(dir) => KnowledgeBase::load_dir(dir),
        None => KnowledgeBase::bundled(),
    };
    let kb = match loaded {
        Ok(kb) => kb,
        Err(PackError::Invalid { issues }) => {
            eprintln!("FAIL  {source}: {} issue(s)", issues.len());
            for issue in &issues {
                eprintln!("  {issue}");
            }
            return Ok(1);
        }
        Err(e) => {
            eprintln!("FAIL  {source}: {e}");
            return Ok(1);
        }
    };

    let regions = kb.catalog.len();
    let regulations: usize = kb.catalog.regions().map(|(_, r)| r.regulations.len()).sum();
    let programs = kb.framework.compliance_requirements_matrix.len();
    let digest = kb.digest().clone();

    if let Err(e) = RiskEngine::new(Arc::new(kb)) {
        eprintln!("FAIL  {source}: {e}");
        return Ok(1);
    }

    if args.quiet {
        println!("{digest}");
    } else {
        println!("OK    {source}");
        println!("  regions:     {regions}");
        println!("  regulations: {regulations}");
        println!("  programs:    {programs}");
        println!("  digest:      {digest}");
    }
    Ok(0)
}
