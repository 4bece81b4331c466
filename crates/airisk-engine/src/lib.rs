//! # airisk-engine — Regulatory Risk Engine
//!
//! Deterministic assessment of an AI use case against the two knowledge
//! bases in `airisk-pack`. For a fixed knowledge base, `request → result`
//! is a pure function.
//!
//! ## Pipeline
//!
//! | Stage | Module |
//! |-------|--------|
//! | Five score calculators | [`scoring`] |
//! | Weighted total and tier | [`aggregate`] |
//! | Applicable regulations, provisions, penalties | [`matcher`] |
//! | Mandatory compliance blocks | [`requirements`] |
//! | Prioritized action plan | [`recommendations`] |
//! | Phased timeline | [`timeline`] |
//! | Official sources and authorities | [`references`] |
//!
//! Provision extraction, compliance resolution and recommendation
//! generation share one mechanism, the ordered `(predicate, effect)` table
//! in [`rules`].
//!
//! ## Crate Policy
//!
//! - No I/O. Knowledge bases arrive already loaded and validated.
//! - No shared mutable state; concurrency safety is "never mutate the
//!   knowledge base after construction".
//! - Unknown vocabulary values are never errors. The only per-request
//!   failure is a structurally invalid payload ([`AnalysisError`]).

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod recommendations;
pub mod references;
pub mod requirements;
pub mod rules;
pub mod scoring;
pub mod timeline;

pub use aggregate::{aggregate, RiskAssessment};
pub use engine::{RegionSummary, RiskAnalysisResult, RiskEngine, ScoreBreakdown, SearchHit};
pub use error::{AnalysisError, EngineError};
pub use matcher::{ApplicableRegulation, Provision};
pub use recommendations::{DetailKind, Recommendation, RecommendationDetails};
pub use references::Reference;
pub use requirements::ComplianceRequirement;
pub use scoring::ComponentScores;
pub use timeline::{Timeline, TimelineBucket};
