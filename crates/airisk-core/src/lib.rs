//! # airisk-core — Foundational Types
//!
//! The leaf of the airisk dependency DAG. Defines the vocabulary that the
//! knowledge bases, the risk engine, and both transports agree on.
//!
//! ## Key Design Principles
//!
//! 1. **Closed vocabularies, open wire format.** Use-case categories,
//!    decision impacts, industries, data types and jurisdictions are enums
//!    with exhaustive `match`. The request keeps the raw strings, because an
//!    unrecognized value is not an error: it degrades to a documented
//!    default inside the engine.
//!
//! 2. **One canonicalization function per key space.** Every
//!    case-folding/separator rule lives in [`canonical`]. No other module
//!    lowercases or replaces separators on its own.
//!
//! 3. **Closed-above tier thresholds.** [`RiskTier::from_score`] is the only
//!    place that maps a total score to a tier.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `airisk-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod jurisdiction;
pub mod request;
pub mod tier;
pub mod vocabulary;

pub use canonical::{catalog_key, data_type_key, jurisdiction_scoring_key};
pub use error::CoreError;
pub use jurisdiction::Jurisdiction;
pub use request::AnalysisRequest;
pub use tier::{Priority, RiskTier};
pub use vocabulary::{DataType, DecisionImpact, Industry, UseCaseCategory};
