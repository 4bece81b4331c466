//! # Compliance Requirement Resolver
//!
//! Five independent predicates over the request's jurisdictions, use case
//! and industry. Each one that holds appends a mandatory requirement block
//! copied verbatim from the framework's requirement matrix. Any subset may
//! fire, including none or all.
//!
//! | # | Predicate | Block | Program |
//! |---|-----------|-------|---------|
//! | 1 | EU ∧ use case ∈ high-risk set | EU High-Risk AI Compliance | `high_risk_ai_eu` |
//! | 2 | EU ∧ use case ∈ automated-decision set | GDPR Automated Decision-Making | `gdpr_automated_decisions` |
//! | 3 | (USA ∨ California) ∧ financial services | US Financial Services AI Compliance | `us_financial_services` |
//! | 4 | healthcare | Healthcare AI Compliance | `healthcare_ai` |
//! | 5 | China ∧ customer service | China Generative AI Compliance | `china_generative_ai` |

use serde::{Deserialize, Serialize};

use airisk_core::{AnalysisRequest, Industry, Jurisdiction, UseCaseCategory};
use airisk_pack::{RequirementRecord, RiskFramework};

use crate::matcher::HIGH_RISK_USE_CASES;
use crate::rules::{fire, Rule};

/// Use cases that trigger the GDPR automated decision-making block.
pub const AUTOMATED_DECISION_USE_CASES: [UseCaseCategory; 4] = [
    UseCaseCategory::CreditScoring,
    UseCaseCategory::EmploymentDecisions,
    UseCaseCategory::InsuranceUnderwriting,
    UseCaseCategory::EducationAssessment,
];

/// A named requirement block a rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementBlock {
    pub name: &'static str,
    /// Key into `complianceRequirementsMatrix`.
    pub program: &'static str,
}

/// A selected, mandatory set of obligations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRequirement {
    pub name: String,
    pub program: String,
    pub mandatory: bool,
    pub requirements: Vec<RequirementRecord>,
}

fn uses(request: &AnalysisRequest, set: &[UseCaseCategory]) -> bool {
    request.use_case().is_some_and(|u| set.contains(&u))
}

fn eu_high_risk(request: &AnalysisRequest) -> bool {
    request.operates_in(Jurisdiction::Eu) && uses(request, &HIGH_RISK_USE_CASES)
}

fn gdpr_automated_decisions(request: &AnalysisRequest) -> bool {
    request.operates_in(Jurisdiction::Eu) && uses(request, &AUTOMATED_DECISION_USE_CASES)
}

fn us_financial_services(request: &AnalysisRequest) -> bool {
    (request.operates_in(Jurisdiction::Usa) || request.operates_in(Jurisdiction::California))
        && request.industry_sector() == Some(Industry::FinancialServices)
}

fn healthcare(request: &AnalysisRequest) -> bool {
    request.industry_sector() == Some(Industry::Healthcare)
}

fn china_customer_service(request: &AnalysisRequest) -> bool {
    request.operates_in(Jurisdiction::China) && uses(request, &[UseCaseCategory::CustomerService])
}

/// The resolver's rule table, in output order.
pub const REQUIREMENT_RULES: &[Rule<AnalysisRequest, RequirementBlock>] = &[
    Rule::new(
        "eu-high-risk",
        eu_high_risk,
        RequirementBlock {
            name: "EU High-Risk AI Compliance",
            program: "high_risk_ai_eu",
        },
    ),
    Rule::new(
        "gdpr-automated-decisions",
        gdpr_automated_decisions,
        RequirementBlock {
            name: "GDPR Automated Decision-Making",
            program: "gdpr_automated_decisions",
        },
    ),
    Rule::new(
        "us-financial-services",
        us_financial_services,
        RequirementBlock {
            name: "US Financial Services AI Compliance",
            program: "us_financial_services",
        },
    ),
    Rule::new(
        "healthcare-ai",
        healthcare,
        RequirementBlock {
            name: "Healthcare AI Compliance",
            program: "healthcare_ai",
        },
    ),
    Rule::new(
        "china-generative-ai",
        china_customer_service,
        RequirementBlock {
            name: "China Generative AI Compliance",
            program: "china_generative_ai",
        },
    ),
];

/// Requirement blocks selected for the request, in rule order.
///
/// A program absent from the matrix is skipped. [`crate::RiskEngine::new`]
/// refuses knowledge bases missing any program, so through the engine every
/// fired rule yields a block.
pub fn resolve_requirements(
    framework: &RiskFramework,
    request: &AnalysisRequest,
) -> Vec<ComplianceRequirement> {
    fire(REQUIREMENT_RULES, request)
        .into_iter()
        .filter_map(|block| {
            let records = framework.program(block.program)?;
            Some(ComplianceRequirement {
                name: block.name.to_string(),
                program: block.program.to_string(),
                mandatory: true,
                requirements: records.to_vec(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use airisk_pack::KnowledgeBase;

    fn framework() -> RiskFramework {
        KnowledgeBase::bundled().unwrap().framework
    }

    fn request(use_case: &str, jurisdictions: &[&str], industry: Option<&str>) -> AnalysisRequest {
        AnalysisRequest {
            use_case_category: Some(use_case.into()),
            jurisdictions: jurisdictions.iter().map(|j| j.to_string()).collect(),
            data_types: vec![],
            decision_impact: None,
            has_human_oversight: false,
            is_transparent: false,
            industry: industry.map(Into::into),
        }
    }

    fn names(reqs: &[ComplianceRequirement]) -> Vec<&str> {
        reqs.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn eu_credit_scoring_fires_rules_one_and_two() {
        let reqs = resolve_requirements(
            &framework(),
            &request("credit-scoring", &["EU"], Some("financial-services")),
        );
        assert_eq!(
            names(&reqs),
            vec!["EU High-Risk AI Compliance", "GDPR Automated Decision-Making"]
        );
        assert!(reqs.iter().all(|r| r.mandatory));
        assert_eq!(
            reqs[0].requirements,
            framework().program("high_risk_ai_eu").unwrap()
        );
    }

    #[test]
    fn insurance_underwriting_only_fires_gdpr() {
        let reqs = resolve_requirements(&framework(), &request("insurance-underwriting", &["EU"], None));
        assert_eq!(names(&reqs), vec!["GDPR Automated Decision-Making"]);
    }

    #[test]
    fn law_enforcement_only_fires_eu_high_risk() {
        let reqs = resolve_requirements(&framework(), &request("law-enforcement", &["eu"], None));
        assert_eq!(names(&reqs), vec!["EU High-Risk AI Compliance"]);
    }

    #[test]
    fn us_financial_services_needs_us_or_california() {
        let f = framework();
        let fs = Some("financial-services");
        assert_eq!(
            names(&resolve_requirements(&f, &request("fraud-detection", &["USA"], fs))),
            vec!["US Financial Services AI Compliance"]
        );
        assert_eq!(
            names(&resolve_requirements(&f, &request("fraud-detection", &["California"], fs))),
            vec!["US Financial Services AI Compliance"]
        );
        assert!(resolve_requirements(&f, &request("fraud-detection", &["UK"], fs)).is_empty());
    }

    #[test]
    fn healthcare_is_jurisdiction_independent() {
        let reqs = resolve_requirements(
            &framework(),
            &request("medical-diagnosis", &["Mars"], Some("healthcare")),
        );
        assert_eq!(names(&reqs), vec!["Healthcare AI Compliance"]);
    }

    #[test]
    fn china_customer_service_fires_generative_ai_block() {
        let reqs = resolve_requirements(&framework(), &request("customer-service", &["China"], None));
        assert_eq!(names(&reqs), vec!["China Generative AI Compliance"]);
    }

    #[test]
    fn rules_combine_additively() {
        let reqs = resolve_requirements(
            &framework(),
            &request("credit-scoring", &["EU", "USA", "China"], Some("financial-services")),
        );
        assert_eq!(reqs.len(), 3);
        let reqs = resolve_requirements(
            &framework(),
            &request("customer-service", &["China"], Some("healthcare")),
        );
        assert_eq!(
            names(&reqs),
            vec!["Healthcare AI Compliance", "China Generative AI Compliance"]
        );
    }

    #[test]
    fn nothing_fires_for_low_risk_use() {
        let reqs = resolve_requirements(&framework(), &request("content-generation", &["UK"], Some("retail")));
        assert!(reqs.is_empty());
    }

    #[test]
    fn missing_program_is_skipped() {
        let mut f = framework();
        f.compliance_requirements_matrix.remove("healthcare_ai");
        let reqs = resolve_requirements(&f, &request("medical-diagnosis", &[], Some("healthcare")));
        assert!(reqs.is_empty());
    }
}
