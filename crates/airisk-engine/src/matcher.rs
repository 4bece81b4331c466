//! # Regulation Matcher
//!
//! Intersects the requested jurisdictions with the Regulatory Catalog. Each
//! requested jurisdiction is canonicalized to a catalog key and contributes
//! its region's regulations in catalog order; unknown jurisdictions
//! contribute nothing. Requested jurisdictions are walked in request order
//! and a jurisdiction listed twice contributes twice.
//!
//! Every matched regulation is annotated with:
//!
//! - **provisions**, from the ordered extraction table [`provision_rules`];
//! - **penalties**: flat `penalties`, else every tier's penalties joined by
//!   `"; "` in catalog order, else [`PENALTY_FALLBACK`];
//! - **compliance deadline**: `full_compliance_date`, else `effective_date`.

use serde::{Deserialize, Serialize};

use airisk_core::{catalog_key, AnalysisRequest, UseCaseCategory};
use airisk_pack::catalog::{HIGH_RISK_TIER, LIMITED_RISK_TIER};
use airisk_pack::{Regulation, RegulatoryCatalog};

use crate::rules::{fire, Rule};

/// Penalty text when a regulation states none.
pub const PENALTY_FALLBACK: &str = "Penalties vary by jurisdiction and violation severity";

/// Use cases that pull a tiered regime's high-risk requirements.
pub const HIGH_RISK_USE_CASES: [UseCaseCategory; 5] = [
    UseCaseCategory::CreditScoring,
    UseCaseCategory::EmploymentDecisions,
    UseCaseCategory::EducationAssessment,
    UseCaseCategory::LawEnforcement,
    UseCaseCategory::CriticalInfrastructure,
];

/// A labelled block of obligations extracted from one regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provision {
    pub category: String,
    pub requirements: Vec<String>,
}

/// A catalog regulation that applies to the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicableRegulation {
    pub id: String,
    pub name: String,
    /// Display name of the region the regulation was matched through.
    pub jurisdiction: String,
    pub status: String,
    pub summary: String,
    pub compliance_deadline: String,
    pub relevant_provisions: Vec<Provision>,
    pub penalties: String,
}

/// What provision predicates see.
pub struct ProvisionContext<'a> {
    pub regulation: &'a Regulation,
    pub use_case: Option<UseCaseCategory>,
}

/// A provision block a rule contributes: its label and how to pull the
/// requirement texts out of the regulation.
#[derive(Debug, Clone, Copy)]
pub struct ProvisionBlock {
    pub category: &'static str,
    pub extract: fn(&Regulation) -> Vec<String>,
}

fn is_high_risk_use_case(ctx: &ProvisionContext<'_>) -> bool {
    ctx.regulation.tier(HIGH_RISK_TIER).is_some()
        && ctx
            .use_case
            .is_some_and(|u| HIGH_RISK_USE_CASES.contains(&u))
}

fn has_limited_risk_tier(ctx: &ProvisionContext<'_>) -> bool {
    ctx.regulation.tier(LIMITED_RISK_TIER).is_some()
}

fn has_key_provisions(ctx: &ProvisionContext<'_>) -> bool {
    ctx.regulation.key_provisions.is_some()
}

fn has_ai_requirements(ctx: &ProvisionContext<'_>) -> bool {
    ctx.regulation.ai_specific_requirements.is_some()
}

fn high_risk_requirements(regulation: &Regulation) -> Vec<String> {
    regulation
        .tier(HIGH_RISK_TIER)
        .map(|t| t.requirements.clone())
        .unwrap_or_default()
}

fn limited_risk_requirements(regulation: &Regulation) -> Vec<String> {
    regulation
        .tier(LIMITED_RISK_TIER)
        .map(|t| t.requirements.clone())
        .unwrap_or_default()
}

fn key_provisions(regulation: &Regulation) -> Vec<String> {
    regulation.key_provisions.clone().unwrap_or_default()
}

fn ai_requirements(regulation: &Regulation) -> Vec<String> {
    regulation.ai_specific_requirements.clone().unwrap_or_default()
}

/// Provision extraction, in output order. Additive: one regulation may
/// yield several blocks.
pub fn provision_rules<'a>() -> [Rule<ProvisionContext<'a>, ProvisionBlock>; 4] {
    [
        Rule::new(
            "tiered-high-risk",
            is_high_risk_use_case,
            ProvisionBlock {
                category: "High-Risk AI Requirements",
                extract: high_risk_requirements,
            },
        ),
        Rule::new(
            "tiered-limited-risk",
            has_limited_risk_tier,
            ProvisionBlock {
                category: "Transparency Obligations",
                extract: limited_risk_requirements,
            },
        ),
        Rule::new(
            "key-provisions",
            has_key_provisions,
            ProvisionBlock {
                category: "Data Protection Requirements",
                extract: key_provisions,
            },
        ),
        Rule::new(
            "ai-specific",
            has_ai_requirements,
            ProvisionBlock {
                category: "AI-Specific Requirements",
                extract: ai_requirements,
            },
        ),
    ]
}

/// Provision blocks for one regulation under the request's use case.
pub fn extract_provisions(
    regulation: &Regulation,
    use_case: Option<UseCaseCategory>,
) -> Vec<Provision> {
    let ctx = ProvisionContext {
        regulation,
        use_case,
    };
    let rules = provision_rules();
    fire(&rules, &ctx)
        .into_iter()
        .map(|block| Provision {
            category: block.category.to_string(),
            requirements: (block.extract)(regulation),
        })
        .collect()
}

/// Penalty text for one regulation.
pub fn penalties(regulation: &Regulation) -> String {
    if let Some(flat) = &regulation.penalties {
        return flat.clone();
    }
    let tiered = regulation
        .risk_categories
        .iter()
        .flat_map(|tiers| tiers.iter())
        .filter_map(|(_, tier)| tier.penalties.as_deref())
        .collect::<Vec<_>>();
    if tiered.is_empty() {
        PENALTY_FALLBACK.to_string()
    } else {
        tiered.join("; ")
    }
}

/// Regulations applicable to the request, annotated for the result.
pub fn match_regulations(
    catalog: &RegulatoryCatalog,
    request: &AnalysisRequest,
) -> Vec<ApplicableRegulation> {
    let use_case = request.use_case();
    let mut matched = Vec::new();
    for requested in &request.jurisdictions {
        let Some(region) = catalog.region(requested) else {
            tracing::debug!(
                jurisdiction = %requested,
                key = %catalog_key(requested),
                "jurisdiction not in catalog"
            );
            continue;
        };
        for regulation in &region.regulations {
            matched.push(ApplicableRegulation {
                id: regulation.id.clone(),
                name: regulation.name.clone(),
                jurisdiction: region.name.clone(),
                status: regulation.status.clone(),
                summary: regulation.summary.clone(),
                compliance_deadline: regulation.compliance_deadline().to_string(),
                relevant_provisions: extract_provisions(regulation, use_case),
                penalties: penalties(regulation),
            });
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use airisk_pack::KnowledgeBase;

    fn catalog() -> RegulatoryCatalog {
        KnowledgeBase::bundled().unwrap().catalog
    }

    fn request(use_case: &str, jurisdictions: &[&str]) -> AnalysisRequest {
        AnalysisRequest {
            use_case_category: Some(use_case.into()),
            jurisdictions: jurisdictions.iter().map(|j| j.to_string()).collect(),
            data_types: vec![],
            decision_impact: None,
            has_human_oversight: false,
            is_transparent: false,
            industry: None,
        }
    }

    fn regulation(json: serde_json::Value) -> Regulation {
        serde_json::from_value(json).unwrap()
    }

    fn categories(reg: &ApplicableRegulation) -> Vec<&str> {
        reg.relevant_provisions
            .iter()
            .map(|p| p.category.as_str())
            .collect()
    }

    #[test]
    fn eu_credit_scoring_matches_ai_act_and_gdpr() {
        let matched = match_regulations(&catalog(), &request("credit-scoring", &["EU"]));
        let ids: Vec<_> = matched.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["eu-ai-act", "gdpr"]);

        let ai_act = &matched[0];
        assert_eq!(ai_act.jurisdiction, "European Union");
        assert_eq!(ai_act.compliance_deadline, "2026-08-02");
        assert_eq!(
            categories(ai_act),
            vec!["High-Risk AI Requirements", "Transparency Obligations"]
        );

        let gdpr = &matched[1];
        assert_eq!(
            categories(gdpr),
            vec!["Data Protection Requirements", "AI-Specific Requirements"]
        );
        assert!(gdpr.penalties.contains("4%"));
    }

    #[test]
    fn non_high_risk_use_case_skips_high_risk_block() {
        let matched = match_regulations(&catalog(), &request("customer-service", &["eu"]));
        assert_eq!(categories(&matched[0]), vec!["Transparency Obligations"]);
    }

    #[test]
    fn tiered_penalties_are_joined_in_catalog_order() {
        let matched = match_regulations(&catalog(), &request("credit-scoring", &["EU"]));
        let ai_act = &matched[0];
        // minimal_risk carries no penalties
        assert_eq!(
            ai_act.penalties,
            "Up to EUR 35 million or 7% of worldwide annual turnover for prohibited practices; \
             Up to EUR 15 million or 3% of worldwide annual turnover for non-compliance with high-risk obligations; \
             Up to EUR 7.5 million or 1% of worldwide annual turnover for supplying incorrect information"
        );
    }

    #[test]
    fn unknown_jurisdiction_contributes_nothing() {
        assert!(match_regulations(&catalog(), &request("credit-scoring", &["Mars"])).is_empty());
        let matched = match_regulations(&catalog(), &request("credit-scoring", &["Mars", "UK"]));
        assert!(matched.iter().all(|r| r.jurisdiction == "United Kingdom"));
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn penalty_fallback_when_none_stated() {
        let reg = regulation(serde_json::json!({
            "id": "x", "name": "X", "status": "s", "effective_date": "2020-01-01", "summary": "s"
        }));
        assert_eq!(penalties(&reg), PENALTY_FALLBACK);

        let tiered_without_penalties = regulation(serde_json::json!({
            "id": "x", "name": "X", "status": "s", "effective_date": "2020-01-01", "summary": "s",
            "risk_categories": { "minimal_risk": { "description": "none" } }
        }));
        assert_eq!(penalties(&tiered_without_penalties), PENALTY_FALLBACK);
    }

    #[test]
    fn flat_penalties_win_over_tiered() {
        let reg = regulation(serde_json::json!({
            "id": "x", "name": "X", "status": "s", "effective_date": "d", "summary": "s",
            "penalties": "flat",
            "risk_categories": { "high_risk": { "penalties": "tiered" } }
        }));
        assert_eq!(penalties(&reg), "flat");
    }

    #[test]
    fn extraction_is_additive() {
        let reg = regulation(serde_json::json!({
            "id": "x", "name": "X", "status": "s", "effective_date": "d", "summary": "s",
            "risk_categories": {
                "high_risk": { "requirements": ["risk management"] },
                "limited_risk": { "requirements": ["disclose"] }
            },
            "key_provisions": ["lawful basis"],
            "ai_specific_requirements": ["explain"]
        }));
        let provisions = extract_provisions(&reg, Some(UseCaseCategory::LawEnforcement));
        let got: Vec<_> = provisions
            .iter()
            .map(|p| (p.category.as_str(), p.requirements.clone()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("High-Risk AI Requirements", vec!["risk management".to_string()]),
                ("Transparency Obligations", vec!["disclose".to_string()]),
                ("Data Protection Requirements", vec!["lawful basis".to_string()]),
                ("AI-Specific Requirements", vec!["explain".to_string()]),
            ]
        );
    }

    #[test]
    fn duplicate_jurisdiction_matches_twice() {
        let matched = match_regulations(&catalog(), &request("credit-scoring", &["EU", "eu"]));
        assert_eq!(matched.len(), 4);
    }
}
