//! # Error Types
//!
//! Errors raised by strict parsing of the enumerated vocabularies.
//! The risk engine never surfaces these: it uses the lenient lookups and
//! falls back to defaults. Tooling that wants to reject typos (the CLI's
//! `--strict` mode, knowledge-base validation) parses strictly.

use thiserror::Error;

/// Top-level error type for airisk-core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A vocabulary term was not one of the enumerated values.
    #[error("unknown {vocabulary} value: {value:?}")]
    UnknownValue {
        /// Name of the vocabulary (e.g. "use-case category").
        vocabulary: &'static str,
        /// The rejected input, verbatim.
        value: String,
    },
}

impl CoreError {
    pub(crate) fn unknown(vocabulary: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            vocabulary,
            value: value.to_string(),
        }
    }
}
