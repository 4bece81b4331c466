//! # Risk Engine
//!
//! [`RiskEngine`] owns a shared, immutable [`KnowledgeBase`] and runs the
//! full pipeline per request:
//!
//! ```text
//! request ─► five score calculators ─► aggregator ─┬─► regulation matcher ──────┐
//!                                                  └─► requirement resolver ─┐   │
//!                                                                            ▼   ▼
//!                                                        recommendation generator
//!                                                                    │
//!                                         timeline estimator + reference resolver
//!                                                                    │
//!                                                                 result
//! ```
//!
//! Nothing is cached or mutated between calls. The engine is `Send + Sync`
//! and cheap to clone, so transports hand one copy to every worker.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use airisk_core::{AnalysisRequest, RiskTier};
use airisk_pack::{KnowledgeBase, KnowledgeBaseDigest, Region, Regulation, RiskFramework};

use crate::aggregate::{aggregate, RiskAssessment};
use crate::error::{AnalysisError, EngineError};
use crate::matcher::{match_regulations, ApplicableRegulation};
use crate::recommendations::{generate_recommendations, Recommendation, RecommendationContext};
use crate::references::{resolve_references, Reference};
use crate::requirements::{resolve_requirements, ComplianceRequirement, REQUIREMENT_RULES};
use crate::scoring::ComponentScores;
use crate::timeline::{estimate_timeline, Timeline};

/// Component scores plus the unrounded weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    #[serde(flatten)]
    pub components: ComponentScores,
    pub weighted_score: f64,
}

/// The complete assessment of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysisResult {
    pub total_score: u32,
    pub risk_level: RiskTier,
    pub risk_description: String,
    pub breakdown: ScoreBreakdown,
    pub applicable_regulations: Vec<ApplicableRegulation>,
    pub compliance_requirements: Vec<ComplianceRequirement>,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: Vec<String>,
    pub timeline: Timeline,
    pub references: Vec<Reference>,
}

/// One row of the region listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub code: String,
    pub name: String,
    pub primary_regulation: String,
    pub regulation_count: usize,
}

/// A regulation whose serialized text contains the search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub region: String,
    pub jurisdiction: String,
    pub regulation: Regulation,
}

/// The regulatory risk engine.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    kb: Arc<KnowledgeBase>,
}

impl RiskEngine {
    /// Build an engine over a validated knowledge base.
    ///
    /// Fails if the requirement matrix lacks a program that a compliance
    /// rule selects.
    pub fn new(kb: Arc<KnowledgeBase>) -> Result<Self, EngineError> {
        for rule in REQUIREMENT_RULES {
            if kb.framework.program(rule.then.program).is_none() {
                return Err(EngineError::MissingProgram {
                    program: rule.then.program,
                    rule: rule.name,
                });
            }
        }
        tracing::debug!(
            regions = kb.catalog.len(),
            digest = %kb.digest(),
            "risk engine ready"
        );
        Ok(Self { kb })
    }

    /// The knowledge base this engine was built with.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Digest of the knowledge base.
    pub fn digest(&self) -> &KnowledgeBaseDigest {
        self.kb.digest()
    }

    /// Assess one request. Total: unknown vocabulary values are scored at
    /// their defaults and unknown jurisdictions match nothing.
    pub fn analyze(&self, request: &AnalysisRequest) -> RiskAnalysisResult {
        let framework = &self.kb.framework;

        let components = ComponentScores::score(framework, request);
        tracing::debug!(?components, "component scores");
        let assessment: RiskAssessment = aggregate(framework, components);

        let applicable_regulations = match_regulations(&self.kb.catalog, request);
        let compliance_requirements = resolve_requirements(framework, request);
        tracing::debug!(
            regulations = applicable_regulations.len(),
            requirements = compliance_requirements.len(),
            "matched regulations and requirements"
        );

        let recommendations = generate_recommendations(&RecommendationContext {
            request,
            assessment: &assessment,
            regulations: &applicable_regulations,
            requirements: &compliance_requirements,
        });
        let timeline = estimate_timeline(&compliance_requirements);
        let references = resolve_references(&applicable_regulations);

        let level = framework.risk_levels.get(assessment.tier);
        tracing::info!(
            total_score = assessment.total_score,
            tier = %assessment.tier,
            recommendations = recommendations.len(),
            "analysis complete"
        );

        RiskAnalysisResult {
            total_score: assessment.total_score,
            risk_level: assessment.tier,
            risk_description: level.description.clone(),
            breakdown: ScoreBreakdown {
                components: assessment.components,
                weighted_score: assessment.weighted_score,
            },
            applicable_regulations,
            compliance_requirements,
            recommendations,
            next_steps: level.actions.clone(),
            timeline,
            references,
        }
    }

    /// Assess an untyped payload. A payload that is not a structurally
    /// valid request (for example one missing `jurisdictions`) is an
    /// [`AnalysisError`].
    pub fn analyze_value(&self, payload: serde_json::Value) -> Result<RiskAnalysisResult, AnalysisError> {
        let request: AnalysisRequest = serde_json::from_value(payload).map_err(|e| {
            tracing::warn!(error = %e, "rejected analysis payload");
            AnalysisError::from(e)
        })?;
        Ok(self.analyze(&request))
    }

    /// One region's catalog entry, by any spelling of its code.
    pub fn region(&self, code: &str) -> Option<&Region> {
        self.kb.catalog.region(code)
    }

    /// Every region, in code order.
    pub fn region_summaries(&self) -> Vec<RegionSummary> {
        self.kb
            .catalog
            .regions()
            .map(|(code, region)| RegionSummary {
                code: code.to_string(),
                name: region.name.clone(),
                primary_regulation: region.primary_regulation.clone(),
                regulation_count: region.regulations.len(),
            })
            .collect()
    }

    /// The full Risk Framework document.
    pub fn framework(&self) -> &RiskFramework {
        &self.kb.framework
    }

    /// Regulations whose serialized JSON contains `query`, ignoring case.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut hits = Vec::new();
        for (code, region) in self.kb.catalog.regions() {
            for regulation in &region.regulations {
                let text = match serde_json::to_string(regulation) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!(id = %regulation.id, error = %e, "skipping unserializable regulation");
                        continue;
                    }
                };
                if text.to_lowercase().contains(&needle) {
                    hits.push(SearchHit {
                        region: code.to_string(),
                        jurisdiction: region.name.clone(),
                        regulation: regulation.clone(),
                    });
                }
            }
        }
        tracing::debug!(query, hits = hits.len(), "search complete");
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RiskEngine {
        RiskEngine::new(Arc::new(KnowledgeBase::bundled().unwrap())).unwrap()
    }

    #[test]
    fn engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RiskEngine>();
    }

    #[test]
    fn missing_program_is_rejected() {
        let mut kb = KnowledgeBase::bundled().unwrap();
        kb.framework
            .compliance_requirements_matrix
            .remove("china_generative_ai");
        match RiskEngine::new(Arc::new(kb)) {
            Err(EngineError::MissingProgram { program, rule }) => {
                assert_eq!(program, "china_generative_ai");
                assert_eq!(rule, "china-generative-ai");
            }
            other => panic!("expected MissingProgram, got {other:?}"),
        }
    }

    #[test]
    fn region_lookup_is_case_insensitive() {
        let e = engine();
        assert_eq!(e.region("eu").unwrap().name, "European Union");
        assert_eq!(e.region("California").unwrap().primary_regulation, "ccpa-cpra");
        assert!(e.region("Mars").is_none());
    }

    #[test]
    fn region_summaries_cover_catalog() {
        let summaries = engine().region_summaries();
        assert_eq!(summaries.len(), 7);
        let eu = summaries.iter().find(|s| s.code == "EU").unwrap();
        assert_eq!(eu.regulation_count, 2);
        assert_eq!(eu.primary_regulation, "eu-ai-act");
        let codes: Vec<_> = summaries.iter().map(|s| s.code.as_str()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let e = engine();
        let hits = e.search("GDPR");
        assert!(hits.iter().any(|h| h.regulation.id == "gdpr"));
        assert!(hits.iter().any(|h| h.regulation.id == "uk-gdpr"));
        assert_eq!(e.search("gdpr").len(), hits.len());
        assert!(e.search("zzzz-no-such-text").is_empty());
        assert!(e.search("   ").is_empty());
    }

    #[test]
    fn analyze_value_rejects_missing_lists() {
        let err = engine()
            .analyze_value(serde_json::json!({
                "useCaseCategory": "credit-scoring",
                "dataTypes": []
            }))
            .unwrap_err();
        assert!(err.to_string().starts_with("analysis failed: "));
        assert!(err.message().contains("jurisdictions"));
    }

    #[test]
    fn framework_accessor_returns_loaded_document() {
        let e = engine();
        assert_eq!(e.framework().scoring_factors.total_weight(), 100);
        assert_eq!(e.digest(), e.knowledge_base().digest());
    }
}
