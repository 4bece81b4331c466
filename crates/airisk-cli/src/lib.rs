//! # airisk-cli — CLI Tool for airisk
//!
//! Provides the `airisk` command-line interface over the same engine the
//! API serves.
//!
//! ## Subcommands
//!
//! - `airisk analyze <request>`: Assess a request file (JSON or YAML).
//! - `airisk regions [CODE]`: List regions, or print one catalog entry.
//! - `airisk search <QUERY>`: Substring search over regulations.
//! - `airisk framework`: Print the Risk Framework document.
//! - `airisk validate`: Load and validate the knowledge bases.
//!
//! Every subcommand reads the bundled knowledge bases unless the global
//! `--data-dir` names a directory of operator-authored ones.
//!
//! ```bash
//! airisk analyze request.json --summary
//! airisk --data-dir /srv/airisk/kb validate
//! ```

pub mod analyze;
pub mod catalog;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use airisk_engine::RiskEngine;
use airisk_pack::KnowledgeBase;

/// Output encoding for documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Load the knowledge base from `data_dir`, or the bundled one.
pub fn load_knowledge_base(data_dir: Option<&Path>) -> Result<KnowledgeBase> {
    match data_dir {
        Some(dir) => KnowledgeBase::load_dir(dir)
            .with_context(|| format!("failed to load knowledge base from {}", dir.display())),
        None => KnowledgeBase::bundled().context("failed to load bundled knowledge base"),
    }
}

/// Load the knowledge base and build an engine over it.
pub fn build_engine(data_dir: Option<&Path>) -> Result<RiskEngine> {
    let kb = load_knowledge_base(data_dir)?;
    RiskEngine::new(Arc::new(kb)).context("knowledge base cannot drive the engine")
}

/// Print a document to stdout in the requested format.
pub fn print_document<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    println!("{}", text.trim_end());
    Ok(())
}
