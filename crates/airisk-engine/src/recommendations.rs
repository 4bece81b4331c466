//! # Recommendation Generator
//!
//! A fixed, ordered table of guarded recommendation blocks. Every block
//! whose guard holds is appended; order is the table order and callers may
//! rely on it for display. Blocks are never merged or deduplicated.
//!
//! | # | Guard | Priority | Category |
//! |---|-------|----------|----------|
//! | 1 | tier is Critical or High | IMMEDIATE | Legal Review |
//! | 2 | tier is Critical or High | IMMEDIATE | Impact Assessment |
//! | 3 | a data type mentions biometric, health or genetic | HIGH | Data Governance |
//! | 4 | not transparent | HIGH | Transparency |
//! | 5 | no human oversight and tier is not Low | HIGH | Human Oversight |
//! | 6 | always | IMMEDIATE if elevated, else MEDIUM | Documentation |
//! | 7 | always | MEDIUM | Monitoring |
//! | 8 | a matched regulation is from the European Union | HIGH | EU Conformity |
//! | 9 | a matched regulation is from China | HIGH | China Filing |
//! | 10 | always | MEDIUM | Training |

use serde::{Deserialize, Serialize};

use airisk_core::{data_type_key, AnalysisRequest, Priority, RiskTier};

use crate::aggregate::RiskAssessment;
use crate::matcher::ApplicableRegulation;
use crate::requirements::ComplianceRequirement;
use crate::rules::{fire, Rule};

/// Data-type fragments that mark special-category data.
pub const SENSITIVE_DATA_MARKERS: [&str; 3] = ["biometric", "health", "genetic"];

/// One block of the action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub category: String,
    pub action: String,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<RecommendationDetails>,
}

/// A structured sub-list attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDetails {
    pub kind: DetailKind,
    pub items: Vec<String>,
}

/// What a recommendation's sub-list enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailKind {
    Checklist,
    Measures,
    Actions,
    Documents,
    Systems,
    Steps,
    Topics,
}

impl RecommendationDetails {
    fn new(kind: DetailKind, items: &[&str]) -> Self {
        Self {
            kind,
            items: items.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Everything a guard or block builder may look at.
pub struct RecommendationContext<'a> {
    pub request: &'a AnalysisRequest,
    pub assessment: &'a RiskAssessment,
    pub regulations: &'a [ApplicableRegulation],
    pub requirements: &'a [ComplianceRequirement],
}

impl RecommendationContext<'_> {
    fn tier(&self) -> RiskTier {
        self.assessment.tier
    }

    fn has_regulation_from(&self, region: &str) -> bool {
        self.regulations
            .iter()
            .any(|r| r.jurisdiction.contains(region))
    }
}

type Build = fn(&RecommendationContext<'_>) -> Recommendation;

// ---------------------------------------------------------------------------
// Fixed content
// ---------------------------------------------------------------------------

const IMPACT_ASSESSMENT_CHECKLIST: [&str; 5] = [
    "Describe the system's purpose, context and intended users",
    "Assess necessity and proportionality of the processing",
    "Identify risks to fundamental rights, including discrimination",
    "Define mitigating measures and residual risk acceptance",
    "Record consultation with the data protection officer and affected groups",
];

const DATA_GOVERNANCE_MEASURES: [&str; 5] = [
    "Encrypt special-category data at rest and in transit",
    "Restrict access on a least-privilege basis with audit logging",
    "Document the legal basis and explicit consent for special-category processing",
    "Apply data minimisation and defined retention periods",
    "Test training data for representativeness and bias",
];

const TRANSPARENCY_ACTIONS: [&str; 4] = [
    "Notify users before they interact with the AI system",
    "Publish a plain-language explanation of how decisions are made",
    "Label AI-generated content",
    "Provide a channel to request an explanation of individual decisions",
];

const HUMAN_OVERSIGHT_MEASURES: [&str; 5] = [
    "Route high-impact decisions to a qualified human reviewer",
    "Give reviewers authority to override or reverse outputs",
    "Provide reviewers with the information needed to interpret outputs",
    "Define escalation paths for contested decisions",
    "Train reviewers to recognise automation bias",
];

const DOCUMENTATION_DOCUMENTS: [&str; 7] = [
    "System architecture and design specification",
    "Training, validation and test data description",
    "Model performance and accuracy metrics",
    "Risk management file",
    "Human oversight procedures",
    "Instructions for use",
    "Change log and version history",
];

const MONITORING_SYSTEMS: [&str; 6] = [
    "Model performance and drift monitoring",
    "Bias and fairness metrics by protected group",
    "Automatic event logging",
    "Incident detection and reporting workflow",
    "Periodic internal compliance audit",
    "User complaint tracking",
];

const EU_CONFORMITY_STEPS: [&str; 5] = [
    "Classify the system against Annex III of the AI Act",
    "Select the conformity assessment procedure",
    "Compile the Annex IV technical documentation",
    "Issue the EU declaration of conformity and affix CE marking",
    "Register the system in the EU database",
];

const CHINA_FILING_STEPS: [&str; 5] = [
    "Determine whether the service has public opinion attributes",
    "Prepare the algorithm self-assessment report",
    "File the algorithm with the CAC algorithm registry",
    "Complete the generative AI security assessment",
    "Display the filing number in the service",
];

const TRAINING_TOPICS: [&str; 6] = [
    "Applicable AI regulations and obligations",
    "Responsible AI principles",
    "Data protection and privacy",
    "Bias recognition and mitigation",
    "Incident reporting procedures",
    "Human oversight responsibilities",
];

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

fn elevated(ctx: &RecommendationContext<'_>) -> bool {
    ctx.tier().is_elevated()
}

fn processes_sensitive_data(ctx: &RecommendationContext<'_>) -> bool {
    ctx.request.data_types.iter().any(|raw| {
        let key = data_type_key(raw);
        SENSITIVE_DATA_MARKERS.iter().any(|m| key.contains(m))
    })
}

fn not_transparent(ctx: &RecommendationContext<'_>) -> bool {
    !ctx.request.is_transparent
}

fn lacks_oversight(ctx: &RecommendationContext<'_>) -> bool {
    !ctx.request.has_human_oversight && ctx.tier() != RiskTier::Low
}

fn always(_: &RecommendationContext<'_>) -> bool {
    true
}

fn eu_regulated(ctx: &RecommendationContext<'_>) -> bool {
    ctx.has_regulation_from("European Union")
}

fn china_regulated(ctx: &RecommendationContext<'_>) -> bool {
    ctx.has_regulation_from("China")
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

fn legal_review(ctx: &RecommendationContext<'_>) -> Recommendation {
    Recommendation {
        priority: Priority::Immediate,
        category: "Legal Review".into(),
        action: "Engage legal counsel specialising in AI regulation before deployment".into(),
        rationale: format!(
            "A risk score of {} places this use case in the {} tier",
            ctx.assessment.total_score,
            ctx.tier().label()
        ),
        details: None,
    }
}

fn impact_assessment(ctx: &RecommendationContext<'_>) -> Recommendation {
    Recommendation {
        priority: Priority::Immediate,
        category: "Impact Assessment".into(),
        action: "Conduct a fundamental rights and data protection impact assessment".into(),
        rationale: format!(
            "Mandatory for high-risk AI systems; {} compliance requirement set(s) apply",
            ctx.requirements.len()
        ),
        details: Some(RecommendationDetails::new(
            DetailKind::Checklist,
            &IMPACT_ASSESSMENT_CHECKLIST,
        )),
    }
}

fn data_governance(_: &RecommendationContext<'_>) -> Recommendation {
    Recommendation {
        priority: Priority::High,
        category: "Data Governance".into(),
        action: "Implement enhanced safeguards for special-category data".into(),
        rationale: "Biometric, health and genetic data carry the strictest processing conditions"
            .into(),
        details: Some(RecommendationDetails::new(
            DetailKind::Measures,
            &DATA_GOVERNANCE_MEASURES,
        )),
    }
}

fn transparency(_: &RecommendationContext<'_>) -> Recommendation {
    Recommendation {
        priority: Priority::High,
        category: "Transparency".into(),
        action: "Disclose the use of AI to affected individuals".into(),
        rationale: "Most jurisdictions require that people know when an AI system affects them"
            .into(),
        details: Some(RecommendationDetails::new(
            DetailKind::Actions,
            &TRANSPARENCY_ACTIONS,
        )),
    }
}

fn human_oversight(_: &RecommendationContext<'_>) -> Recommendation {
    Recommendation {
        priority: Priority::High,
        category: "Human Oversight".into(),
        action: "Establish meaningful human oversight of automated decisions".into(),
        rationale: "Solely automated decisions with legal or similarly significant effects \
                    require human intervention rights"
            .into(),
        details: Some(RecommendationDetails::new(
            DetailKind::Measures,
            &HUMAN_OVERSIGHT_MEASURES,
        )),
    }
}

fn documentation(ctx: &RecommendationContext<'_>) -> Recommendation {
    let priority = if ctx.tier().is_elevated() {
        Priority::Immediate
    } else {
        Priority::Medium
    };
    Recommendation {
        priority,
        category: "Documentation".into(),
        action: "Prepare and maintain technical documentation for the AI system".into(),
        rationale: "Documentation is the evidence base for audits and regulator inquiries".into(),
        details: Some(RecommendationDetails::new(
            DetailKind::Documents,
            &DOCUMENTATION_DOCUMENTS,
        )),
    }
}

fn monitoring(_: &RecommendationContext<'_>) -> Recommendation {
    Recommendation {
        priority: Priority::Medium,
        category: "Monitoring".into(),
        action: "Set up continuous monitoring and periodic audits".into(),
        rationale: "Model behaviour drifts after deployment and obligations are ongoing".into(),
        details: Some(RecommendationDetails::new(
            DetailKind::Systems,
            &MONITORING_SYSTEMS,
        )),
    }
}

fn eu_conformity(_: &RecommendationContext<'_>) -> Recommendation {
    Recommendation {
        priority: Priority::High,
        category: "EU Conformity".into(),
        action: "Prepare for EU AI Act conformity assessment".into(),
        rationale: "Operations in the European Union fall under the AI Act".into(),
        details: Some(RecommendationDetails::new(
            DetailKind::Steps,
            &EU_CONFORMITY_STEPS,
        )),
    }
}

fn china_filing(_: &RecommendationContext<'_>) -> Recommendation {
    Recommendation {
        priority: Priority::High,
        category: "China Filing".into(),
        action: "Complete algorithm filing with the Cyberspace Administration of China".into(),
        rationale: "Algorithmic and generative AI services offered in China require registration"
            .into(),
        details: Some(RecommendationDetails::new(
            DetailKind::Steps,
            &CHINA_FILING_STEPS,
        )),
    }
}

fn training(_: &RecommendationContext<'_>) -> Recommendation {
    Recommendation {
        priority: Priority::Medium,
        category: "Training".into(),
        action: "Train staff on AI compliance obligations".into(),
        rationale: "Operators and reviewers must understand the system and its obligations".into(),
        details: Some(RecommendationDetails::new(
            DetailKind::Topics,
            &TRAINING_TOPICS,
        )),
    }
}

/// The generator's rule table, in output order.
pub fn recommendation_rules<'a>() -> [Rule<RecommendationContext<'a>, Build>; 10] {
    [
        Rule::new("legal-review", elevated, legal_review as Build),
        Rule::new("impact-assessment", elevated, impact_assessment as Build),
        Rule::new("data-governance", processes_sensitive_data, data_governance as Build),
        Rule::new("transparency", not_transparent, transparency as Build),
        Rule::new("human-oversight", lacks_oversight, human_oversight as Build),
        Rule::new("documentation", always, documentation as Build),
        Rule::new("monitoring", always, monitoring as Build),
        Rule::new("eu-conformity", eu_regulated, eu_conformity as Build),
        Rule::new("china-filing", china_regulated, china_filing as Build),
        Rule::new("training", always, training as Build),
    ]
}

/// The prioritized action plan for one assessed request.
pub fn generate_recommendations(ctx: &RecommendationContext<'_>) -> Vec<Recommendation> {
    let rules = recommendation_rules();
    fire(&rules, ctx).into_iter().map(|build| build(ctx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ComponentScores;

    fn assessment(tier: RiskTier, total_score: u32) -> RiskAssessment {
        RiskAssessment {
            components: ComponentScores {
                use_case_category: 0,
                jurisdiction: 0,
                data_sensitivity: 0,
                decision_impact: 0,
                transparency: 0,
            },
            weighted_score: f64::from(total_score),
            total_score,
            tier,
        }
    }

    fn request(data_types: &[&str], oversight: bool, transparent: bool) -> AnalysisRequest {
        AnalysisRequest {
            use_case_category: None,
            jurisdictions: vec![],
            data_types: data_types.iter().map(|d| d.to_string()).collect(),
            decision_impact: None,
            has_human_oversight: oversight,
            is_transparent: transparent,
            industry: None,
        }
    }

    fn regulation_from(jurisdiction: &str) -> ApplicableRegulation {
        ApplicableRegulation {
            id: "x".into(),
            name: "X".into(),
            jurisdiction: jurisdiction.into(),
            status: "s".into(),
            summary: "s".into(),
            compliance_deadline: "d".into(),
            relevant_provisions: vec![],
            penalties: "p".into(),
        }
    }

    fn categories(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.category.as_str()).collect()
    }

    #[test]
    fn elevated_tier_opaque_system_gets_full_plan() {
        let req = request(&["health_data"], false, false);
        let a = assessment(RiskTier::Critical, 92);
        let regs = [regulation_from("European Union"), regulation_from("China")];
        let ctx = RecommendationContext {
            request: &req,
            assessment: &a,
            regulations: &regs,
            requirements: &[],
        };
        let recs = generate_recommendations(&ctx);
        assert_eq!(
            categories(&recs),
            vec![
                "Legal Review",
                "Impact Assessment",
                "Data Governance",
                "Transparency",
                "Human Oversight",
                "Documentation",
                "Monitoring",
                "EU Conformity",
                "China Filing",
                "Training",
            ]
        );
        assert_eq!(recs[0].priority, Priority::Immediate);
        assert!(recs[0].rationale.contains("92"));
        assert_eq!(recs[5].priority, Priority::Immediate);
    }

    #[test]
    fn low_tier_transparent_overseen_system_gets_baseline() {
        let req = request(&["public_data"], true, true);
        let a = assessment(RiskTier::Low, 20);
        let ctx = RecommendationContext {
            request: &req,
            assessment: &a,
            regulations: &[],
            requirements: &[],
        };
        let recs = generate_recommendations(&ctx);
        assert_eq!(categories(&recs), vec!["Documentation", "Monitoring", "Training"]);
        assert!(recs.iter().all(|r| r.priority == Priority::Medium));
    }

    #[test]
    fn oversight_block_is_suppressed_at_low_tier() {
        let req = request(&[], false, true);
        let a = assessment(RiskTier::Low, 10);
        let ctx = RecommendationContext {
            request: &req,
            assessment: &a,
            regulations: &[],
            requirements: &[],
        };
        assert!(!categories(&generate_recommendations(&ctx)).contains(&"Human Oversight"));

        let a = assessment(RiskTier::Medium, 50);
        let ctx = RecommendationContext {
            assessment: &a,
            ..ctx
        };
        assert!(categories(&generate_recommendations(&ctx)).contains(&"Human Oversight"));
    }

    #[test]
    fn sensitive_data_markers_match_any_spelling() {
        for spelling in ["biometric_data", "Genetic-Data", "mental health records"] {
            let req = request(&[spelling], true, true);
            let a = assessment(RiskTier::Low, 0);
            let ctx = RecommendationContext {
                request: &req,
                assessment: &a,
                regulations: &[],
                requirements: &[],
            };
            assert!(
                categories(&generate_recommendations(&ctx)).contains(&"Data Governance"),
                "{spelling} should trigger data governance"
            );
        }
    }

    #[test]
    fn fixed_list_sizes() {
        let req = request(&["biometric_data"], false, false);
        let a = assessment(RiskTier::High, 75);
        let regs = [regulation_from("European Union"), regulation_from("China")];
        let ctx = RecommendationContext {
            request: &req,
            assessment: &a,
            regulations: &regs,
            requirements: &[],
        };
        let sizes: Vec<_> = generate_recommendations(&ctx)
            .iter()
            .map(|r| r.details.as_ref().map_or(0, |d| d.items.len()))
            .collect();
        assert_eq!(sizes, vec![0, 5, 5, 4, 5, 7, 6, 5, 5, 6]);
    }

    #[test]
    fn details_serialize_with_kind() {
        let req = request(&[], true, true);
        let a = assessment(RiskTier::Low, 0);
        let ctx = RecommendationContext {
            request: &req,
            assessment: &a,
            regulations: &[],
            requirements: &[],
        };
        let json = serde_json::to_value(generate_recommendations(&ctx)).unwrap();
        assert_eq!(json[0]["priority"], "MEDIUM");
        assert_eq!(json[0]["details"]["kind"], "documents");
        assert_eq!(json[2]["details"]["kind"], "topics");
    }
}
