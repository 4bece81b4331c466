//! # Risk Framework
//!
//! The scoring configuration the engine interprets. Every variant-to-score
//! mapping lives here as data: which use-case categories are high risk,
//! what each decision impact is worth, how severe each jurisdiction and
//! data category is, and the weights that combine them.
//!
//! ## Document shape
//!
//! ```text
//! scoringFactors
//!   useCaseCategory / jurisdiction / dataSensitivity / decisionImpact / transparency
//!     weight            integer percentage, the five sum to 100
//!     categories        name → { score, description, members[] }
//!     defaultCategory   category used when no member matches
//! jurisdictionScoring     "<jurisdiction>_operations" → score
//! dataSensitivityScoring  "<data_type>" → score
//! transparencyScoring     full / substantial / basic / opaque → score
//! scoringDefaults         fallback jurisdiction and data-sensitivity scores
//! riskLevels              critical / high / medium / low → description, actions
//! complianceRequirementsMatrix  program → [ { requirement, timeline? } ]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use airisk_core::RiskTier;

/// The complete Risk Framework document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFramework {
    /// Free-form revision label of the framework document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// The five weighted scoring factors.
    pub scoring_factors: ScoringFactors,
    /// Normalized jurisdiction key → severity.
    pub jurisdiction_scoring: BTreeMap<String, u32>,
    /// Normalized data-type key → severity.
    pub data_sensitivity_scoring: BTreeMap<String, u32>,
    /// Oversight × transparency decision table.
    pub transparency_scoring: TransparencyScoring,
    /// Scores used when a multi-valued dimension matches nothing.
    #[serde(default)]
    pub scoring_defaults: ScoringDefaults,
    /// Descriptions and canned next steps per tier.
    pub risk_levels: RiskLevels,
    /// Named compliance program → ordered requirement records.
    pub compliance_requirements_matrix: BTreeMap<String, Vec<RequirementRecord>>,
}

impl RiskFramework {
    /// Requirement records for a compliance program, if the matrix has it.
    pub fn program(&self, name: &str) -> Option<&[RequirementRecord]> {
        self.compliance_requirements_matrix
            .get(name)
            .map(Vec::as_slice)
    }
}

/// The five scoring factors, one per input dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringFactors {
    pub use_case_category: ScoringFactor,
    pub jurisdiction: ScoringFactor,
    pub data_sensitivity: ScoringFactor,
    pub decision_impact: ScoringFactor,
    pub transparency: ScoringFactor,
}

impl ScoringFactors {
    /// Factors paired with their document keys, in aggregation order.
    pub fn named(&self) -> [(&'static str, &ScoringFactor); 5] {
        [
            ("useCaseCategory", &self.use_case_category),
            ("jurisdiction", &self.jurisdiction),
            ("dataSensitivity", &self.data_sensitivity),
            ("decisionImpact", &self.decision_impact),
            ("transparency", &self.transparency),
        ]
    }

    /// Sum of the five weights. A valid framework sums to exactly 100.
    pub fn total_weight(&self) -> u32 {
        self.named().iter().map(|(_, f)| f.weight).sum()
    }
}

/// One weighted scoring factor and its named categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringFactor {
    /// Integer percentage contribution to the total score.
    pub weight: u32,
    #[serde(default)]
    pub description: String,
    /// Category name → severity.
    pub categories: BTreeMap<String, ScoreCategory>,
    /// Category applied when the input is absent or matches no member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
}

impl ScoringFactor {
    /// The category listing `member`, if any.
    pub fn category_of(&self, member: &str) -> Option<(&str, &ScoreCategory)> {
        self.categories
            .iter()
            .find(|(_, category)| category.members.iter().any(|m| m == member))
            .map(|(name, category)| (name.as_str(), category))
    }

    /// The default category, if configured and present.
    pub fn default_band(&self) -> Option<(&str, &ScoreCategory)> {
        let name = self.default_category.as_deref()?;
        self.categories
            .get_key_value(name)
            .map(|(name, category)| (name.as_str(), category))
    }
}

/// A named severity band within a factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCategory {
    /// Severity, 0–100.
    pub score: u32,
    #[serde(default)]
    pub description: String,
    /// Vocabulary terms that fall into this band.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

/// The 2×2 oversight/transparency decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransparencyScoring {
    /// Human oversight and disclosure.
    pub full_transparency: u32,
    /// Human oversight without disclosure.
    pub substantial_transparency: u32,
    /// Disclosure without human oversight.
    pub basic_transparency: u32,
    /// Neither.
    pub opaque_transparency: u32,
}

impl TransparencyScoring {
    /// Entries paired with their document keys.
    pub fn named(&self) -> [(&'static str, u32); 4] {
        [
            ("fullTransparency", self.full_transparency),
            ("substantialTransparency", self.substantial_transparency),
            ("basicTransparency", self.basic_transparency),
            ("opaqueTransparency", self.opaque_transparency),
        ]
    }
}

/// Fallback scores for dimensions where no requested value is in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringDefaults {
    #[serde(default = "default_jurisdiction_score")]
    pub jurisdiction: u32,
    #[serde(default = "default_data_sensitivity_score")]
    pub data_sensitivity: u32,
}

fn default_jurisdiction_score() -> u32 {
    10
}

fn default_data_sensitivity_score() -> u32 {
    20
}

impl Default for ScoringDefaults {
    fn default() -> Self {
        Self {
            jurisdiction: default_jurisdiction_score(),
            data_sensitivity: default_data_sensitivity_score(),
        }
    }
}

/// Descriptions and next steps for the four tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskLevels {
    pub critical: RiskLevel,
    pub high: RiskLevel,
    pub medium: RiskLevel,
    pub low: RiskLevel,
}

impl RiskLevels {
    /// The level record for a tier.
    pub fn get(&self, tier: RiskTier) -> &RiskLevel {
        match tier {
            RiskTier::Critical => &self.critical,
            RiskTier::High => &self.high,
            RiskTier::Medium => &self.medium,
            RiskTier::Low => &self.low,
        }
    }
}

/// One tier's static description and canned next steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskLevel {
    /// Informational lower bound; tier mapping uses fixed thresholds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u32>,
    pub description: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

/// One obligation within a compliance program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRecord {
    pub requirement: String,
    /// Timeline tag, e.g. "Before deployment", "Ongoing", "Within 6 months".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor() -> ScoringFactor {
        serde_json::from_value(serde_json::json!({
            "weight": 30,
            "defaultCategory": "moderate",
            "categories": {
                "high": { "score": 100, "members": ["credit-scoring"] },
                "moderate": { "score": 50, "members": ["customer-service"] }
            }
        }))
        .unwrap()
    }

    #[test]
    fn category_of_finds_member() {
        let f = factor();
        let (name, category) = f.category_of("credit-scoring").unwrap();
        assert_eq!(name, "high");
        assert_eq!(category.score, 100);
        assert!(f.category_of("astrology").is_none());
    }

    #[test]
    fn default_category_resolves() {
        let f = factor();
        let (name, category) = f.default_band().unwrap();
        assert_eq!(name, "moderate");
        assert_eq!(category.score, 50);
    }

    #[test]
    fn default_category_absent_when_misnamed() {
        let mut f = factor();
        f.default_category = Some("nonexistent".into());
        assert!(f.default_band().is_none());
        f.default_category = None;
        assert!(f.default_band().is_none());
    }

    #[test]
    fn scoring_defaults_fill_in_when_omitted() {
        let d: ScoringDefaults = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(d, ScoringDefaults::default());
        assert_eq!(d.jurisdiction, 10);
        assert_eq!(d.data_sensitivity, 20);
    }

    #[test]
    fn requirement_timeline_is_optional() {
        let r: RequirementRecord =
            serde_json::from_value(serde_json::json!({ "requirement": "Notify breaches" }))
                .unwrap();
        assert!(r.timeline.is_none());
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("timeline").is_none());
    }
}
