//! # Score Calculators
//!
//! Five pure functions, one per input dimension, each mapping the request
//! onto a 0–100 severity using the Risk Framework's tables. None of them
//! fails. Inputs the tables do not know are scored at a documented default
//! rather than zero, and the two multi-valued dimensions take the worst case
//! (maximum) across their values:
//!
//! | Dimension | Lookup | On no match |
//! |-----------|--------|-------------|
//! | use case | factor category listing the term | `defaultCategory` (moderate) |
//! | jurisdictions | `jurisdictionScoring[<key>_operations]`, max | `scoringDefaults.jurisdiction` |
//! | data types | `dataSensitivityScoring[<key>]`, max | `scoringDefaults.dataSensitivity` |
//! | decision impact | factor category listing the term | `defaultCategory` (limited impact) |
//! | transparency | oversight × disclosure table | always matches |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use airisk_core::{data_type_key, jurisdiction_scoring_key, AnalysisRequest};
use airisk_pack::{RiskFramework, ScoringFactor};

/// Score of a categorical factor: the category listing `term`, else the
/// factor's default category.
fn categorical_score(factor: &ScoringFactor, dimension: &str, term: Option<&str>) -> u32 {
    let term = term.map(str::trim).filter(|t| !t.is_empty());
    if let Some((_, category)) = term.and_then(|t| factor.category_of(t)) {
        return category.score;
    }
    if let Some(unknown) = term {
        tracing::warn!(dimension, value = unknown, "unrecognized value, scoring at default");
    }
    factor
        .default_band()
        .map(|(_, category)| category.score)
        .unwrap_or_default()
}

/// Worst-case score over `keys` in `table`, or `default` if none match.
fn max_or_default(
    table: &BTreeMap<String, u32>,
    keys: impl Iterator<Item = String>,
    default: u32,
) -> u32 {
    keys.filter_map(|key| table.get(&key).copied())
        .max()
        .unwrap_or(default)
}

/// Severity of the use-case category. Unknown or missing categories score
/// at the moderate band.
pub fn use_case_score(framework: &RiskFramework, category: Option<&str>) -> u32 {
    categorical_score(
        &framework.scoring_factors.use_case_category,
        "useCaseCategory",
        category,
    )
}

/// Worst-case severity across the requested jurisdictions.
pub fn jurisdiction_score<S: AsRef<str>>(framework: &RiskFramework, jurisdictions: &[S]) -> u32 {
    max_or_default(
        &framework.jurisdiction_scoring,
        jurisdictions
            .iter()
            .map(|j| jurisdiction_scoring_key(j.as_ref())),
        framework.scoring_defaults.jurisdiction,
    )
}

/// Worst-case sensitivity across the processed data types.
pub fn data_score<S: AsRef<str>>(framework: &RiskFramework, data_types: &[S]) -> u32 {
    max_or_default(
        &framework.data_sensitivity_scoring,
        data_types.iter().map(|d| data_type_key(d.as_ref())),
        framework.scoring_defaults.data_sensitivity,
    )
}

/// Severity of the decision impact. Unknown or missing impacts score at
/// the limited-impact band.
pub fn impact_score(framework: &RiskFramework, impact: Option<&str>) -> u32 {
    categorical_score(
        &framework.scoring_factors.decision_impact,
        "decisionImpact",
        impact,
    )
}

/// The oversight × disclosure decision table. `(true, true)` is the best
/// outcome, `(false, false)` the worst.
pub fn transparency_score(
    framework: &RiskFramework,
    has_human_oversight: bool,
    is_transparent: bool,
) -> u32 {
    let table = &framework.transparency_scoring;
    match (has_human_oversight, is_transparent) {
        (true, true) => table.full_transparency,
        (true, false) => table.substantial_transparency,
        (false, true) => table.basic_transparency,
        (false, false) => table.opaque_transparency,
    }
}

/// The five component scores of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub use_case_category: u32,
    pub jurisdiction: u32,
    pub data_sensitivity: u32,
    pub decision_impact: u32,
    pub transparency: u32,
}

impl ComponentScores {
    /// Run all five calculators against a request.
    pub fn score(framework: &RiskFramework, request: &AnalysisRequest) -> Self {
        Self {
            use_case_category: use_case_score(framework, request.use_case_category.as_deref()),
            jurisdiction: jurisdiction_score(framework, &request.jurisdictions),
            data_sensitivity: data_score(framework, &request.data_types),
            decision_impact: impact_score(framework, request.decision_impact.as_deref()),
            transparency: transparency_score(
                framework,
                request.has_human_oversight,
                request.is_transparent,
            ),
        }
    }

    /// Scores in aggregation order, matching [`airisk_pack::ScoringFactors::named`].
    pub fn as_array(&self) -> [u32; 5] {
        [
            self.use_case_category,
            self.jurisdiction,
            self.data_sensitivity,
            self.decision_impact,
            self.transparency,
        ]
    }
}
