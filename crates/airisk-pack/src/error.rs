//! # Pack Errors
//!
//! Every failure to produce a usable [`crate::KnowledgeBase`]. All of them
//! are fatal at startup: the transports log the error and exit before
//! serving any request.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationIssue;

/// Result alias for knowledge-base operations.
pub type PackResult<T> = Result<T, PackError>;

/// Error loading, parsing or validating a knowledge base.
#[derive(Error, Debug)]
pub enum PackError {
    /// The document could not be read from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// No document with the expected stem exists in the data directory.
    #[error("no {stem}.json, {stem}.yaml or {stem}.yml found in {}", .dir.display())]
    MissingDocument {
        /// Directory that was searched.
        dir: PathBuf,
        /// Expected file stem.
        stem: &'static str,
    },

    /// The file extension is neither JSON nor YAML.
    #[error("unsupported knowledge-base format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The document is not valid JSON for its model.
    #[error("invalid JSON in {document}: {source}")]
    Json {
        /// Document name (file path or "bundled regulations").
        document: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The document is not valid YAML for its model.
    #[error("invalid YAML in {document}: {source}")]
    Yaml {
        /// Document name.
        document: String,
        /// Underlying parse error.
        source: serde_yaml::Error,
    },

    /// The documents parsed but violate structural invariants.
    #[error("knowledge base failed validation with {} issue(s): {}", .issues.len(), join_issues(.issues))]
    Invalid {
        /// Every issue found, in check order.
        issues: Vec<ValidationIssue>,
    },

    /// Canonical serialization for digest computation failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
