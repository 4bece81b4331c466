//! # Engine Errors
//!
//! Two classes. [`EngineError`] is raised once, when a knowledge base is
//! handed to [`crate::RiskEngine::new`] without something the rules need.
//! [`AnalysisError`] is the per-request class: the engine does not
//! distinguish failure subtypes for callers, every one is reported as
//! `analysis failed: <underlying message>`.

use thiserror::Error;

/// Construction-time failure.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The requirement matrix lacks a program a compliance rule selects.
    #[error("knowledge base has no compliance program {program:?} (required by rule {rule:?})")]
    MissingProgram {
        program: &'static str,
        rule: &'static str,
    },
}

/// Per-request analysis failure.
#[derive(Error, Debug)]
#[error("analysis failed: {message}")]
pub struct AnalysisError {
    message: String,
}

impl AnalysisError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying message without the `analysis failed:` prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}
