//! # Analysis Request
//!
//! The per-call description of an AI use case. Enumerated fields are kept
//! as raw strings on the wire: the engine resolves them leniently and
//! scores unknown values at the framework's documented defaults.
//!
//! Structural requirements are enforced by deserialization. `jurisdictions`
//! and `dataTypes` must be present (as lists); a payload that omits either
//! fails to deserialize and is reported as an analysis failure.
//! `useCaseCategory`, `decisionImpact` and `industry` may be absent, and
//! the two posture flags default to `false`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::jurisdiction::Jurisdiction;
use crate::vocabulary::{DataType, DecisionImpact, Industry, UseCaseCategory};

/// A request to assess one AI use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Functional purpose, e.g. `"credit-scoring"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_case_category: Option<String>,
    /// Jurisdictions of operation, e.g. `["EU", "USA"]`.
    pub jurisdictions: Vec<String>,
    /// Data categories processed, e.g. `["financial_data"]`.
    pub data_types: Vec<String>,
    /// Consequence of the system's decisions, e.g. `"significant-economic"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_impact: Option<String>,
    /// Whether a human reviews or can override decisions.
    #[serde(default)]
    pub has_human_oversight: bool,
    /// Whether affected persons are told an AI system is involved.
    #[serde(default)]
    pub is_transparent: bool,
    /// Industry sector of the deployer, e.g. `"financial-services"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl AnalysisRequest {
    /// The use-case category, if present and recognized.
    pub fn use_case(&self) -> Option<UseCaseCategory> {
        self.use_case_category
            .as_deref()
            .and_then(UseCaseCategory::parse_lenient)
    }

    /// The decision impact, if present and recognized.
    pub fn impact(&self) -> Option<DecisionImpact> {
        self.decision_impact
            .as_deref()
            .and_then(DecisionImpact::parse_lenient)
    }

    /// The industry, if present and recognized.
    pub fn industry_sector(&self) -> Option<Industry> {
        self.industry.as_deref().and_then(Industry::parse_lenient)
    }

    /// Recognized jurisdictions, in request order. Unknown entries are skipped.
    pub fn known_jurisdictions(&self) -> Vec<Jurisdiction> {
        self.jurisdictions
            .iter()
            .filter_map(|j| Jurisdiction::resolve(j))
            .collect()
    }

    /// True if any requested jurisdiction resolves to `jurisdiction`.
    pub fn operates_in(&self, jurisdiction: Jurisdiction) -> bool {
        self.jurisdictions
            .iter()
            .any(|j| Jurisdiction::resolve(j) == Some(jurisdiction))
    }

    /// Strict check that every enumerated field is a known vocabulary term.
    ///
    /// The engine never calls this; it exists for tooling that prefers to
    /// reject typos instead of scoring them at defaults. Returns every
    /// unknown value, not just the first.
    pub fn strict_violations(&self) -> Vec<CoreError> {
        let mut errors = Vec::new();
        if let Some(raw) = &self.use_case_category {
            if let Err(e) = raw.parse::<UseCaseCategory>() {
                errors.push(e);
            }
        }
        if let Some(raw) = &self.decision_impact {
            if let Err(e) = raw.parse::<DecisionImpact>() {
                errors.push(e);
            }
        }
        if let Some(raw) = &self.industry {
            if let Err(e) = raw.parse::<Industry>() {
                errors.push(e);
            }
        }
        for raw in &self.jurisdictions {
            if let Err(e) = raw.parse::<Jurisdiction>() {
                errors.push(e);
            }
        }
        for raw in &self.data_types {
            if let Err(e) = crate::canonical::data_type_key(raw).parse::<DataType>() {
                errors.push(e);
            }
        }
        errors
    }
}
