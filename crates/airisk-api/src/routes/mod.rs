//! # API Route Modules
//!
//! - `analyze`: `POST /v1/analyze`, the risk analysis itself.
//! - `regions`: region summaries and single-region catalog entries.
//! - `framework`: the Risk Framework document as loaded.
//! - `search`: case-insensitive substring search over regulations.
//!
//! Handlers only translate between HTTP and [`airisk_engine::RiskEngine`].

pub mod analyze;
pub mod framework;
pub mod regions;
pub mod search;
