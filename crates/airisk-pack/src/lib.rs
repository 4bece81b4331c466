//! # airisk-pack — Knowledge Bases
//!
//! The two immutable structures the risk engine is constructed with:
//!
//! - **Regulatory Catalog** (`catalog.rs`): regulations grouped by
//!   jurisdiction, with tiered risk categories, flat provisions, AI-specific
//!   requirements and penalties.
//!
//! - **Risk Framework** (`framework.rs`): scoring factor weights and
//!   category tables, jurisdiction and data-sensitivity tables, the
//!   transparency decision table, risk-level descriptions and the
//!   compliance-requirement matrix.
//!
//! [`KnowledgeBase`] pairs them. It is loaded once, validated once
//! (`validation.rs`) and never mutated afterwards; the engine shares it
//! behind an `Arc` across concurrent requests.
//!
//! ## Sources
//!
//! - [`KnowledgeBase::bundled`]: the reference data compiled into this
//!   crate from `data/`.
//! - [`KnowledgeBase::load_dir`]: operator-supplied `regulations` and
//!   `risk_framework` documents in JSON or YAML.
//!
//! ## Crate Policy
//!
//! - Depends only on `airisk-core` internally.
//! - A knowledge base that fails validation is never handed out.

pub mod catalog;
pub mod digest;
pub mod error;
pub mod framework;
pub mod loader;
pub mod validation;

pub use catalog::{Region, RegulatoryCatalog, Regulation, RiskTiers, TieredRiskCategory};
pub use digest::KnowledgeBaseDigest;
pub use error::{PackError, PackResult};
pub use framework::{
    RequirementRecord, RiskFramework, RiskLevel, RiskLevels, ScoreCategory, ScoringDefaults,
    ScoringFactor, ScoringFactors, TransparencyScoring,
};
pub use loader::{DocumentFormat, KnowledgeBase};
pub use validation::ValidationIssue;
