//! # Enumerated Vocabularies
//!
//! The closed value sets an analysis request draws from. Each vocabulary
//! is a plain enum with a kebab-case or snake_case wire identifier,
//! `all()` in canonical order, `as_str()`, `Display` and strict `FromStr`.
//!
//! Score buckets are deliberately NOT encoded here. Which bucket a
//! use-case category or decision impact falls into is configuration owned
//! by the Risk Framework (`airisk-pack`), so the table can be tested and
//! revised without touching code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, $serde_case:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = $serde_case)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every value in canonical order.
            pub fn all() -> &'static [$name] {
                &[ $( Self::$variant, )+ ]
            }

            /// The wire identifier, matching the serde representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            /// Lenient parse: `None` for anything outside the vocabulary.
            pub fn parse_lenient(raw: &str) -> Option<Self> {
                raw.trim().parse().ok()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(CoreError::unknown($label, other)),
                }
            }
        }
    };
}

vocabulary! {
    /// Functional purpose of the AI system being assessed.
    UseCaseCategory, "use-case category", "kebab-case" {
        /// Creditworthiness evaluation of natural persons.
        CreditScoring => "credit-scoring",
        /// Recruitment, promotion, termination, task allocation.
        EmploymentDecisions => "employment-decisions",
        /// Admission, grading, proctoring.
        EducationAssessment => "education-assessment",
        /// Policing, evidence evaluation, recidivism prediction.
        LawEnforcement => "law-enforcement",
        /// Safety components of energy, water, transport networks.
        CriticalInfrastructure => "critical-infrastructure",
        /// Remote biometric identification and categorisation.
        BiometricIdentification => "biometric-identification",
        /// Life and health insurance pricing.
        InsuranceUnderwriting => "insurance-underwriting",
        /// Diagnostic or triage support.
        MedicalDiagnosis => "medical-diagnosis",
        /// Transaction and identity fraud screening.
        FraudDetection => "fraud-detection",
        /// Automated moderation of user content.
        ContentModeration => "content-moderation",
        /// Chatbots and support assistants.
        CustomerService => "customer-service",
        /// Product and content recommendation.
        RecommendationSystems => "recommendation-systems",
        /// Targeted marketing and personalisation.
        MarketingPersonalization => "marketing-personalization",
        /// Text, image and code generation.
        ContentGeneration => "content-generation",
        /// Back-office workflow automation.
        ProcessAutomation => "process-automation",
    }
}

vocabulary! {
    /// How consequential the system's output is for the affected person.
    DecisionImpact, "decision impact", "kebab-case" {
        /// Decisions affecting life, health or physical safety.
        LifeCritical => "life-critical",
        /// Decisions affecting legal status or fundamental rights.
        LegalRights => "legal-rights",
        /// Decisions with significant economic consequences.
        SignificantEconomic => "significant-economic",
        /// Decisions gating access to essential services.
        AccessToServices => "access-to-services",
        /// Advisory output with limited consequences.
        LimitedImpact => "limited-impact",
        /// No material effect on individuals.
        MinimalImpact => "minimal-impact",
    }
}

vocabulary! {
    /// Industry sector of the deploying organisation.
    Industry, "industry", "kebab-case" {
        FinancialServices => "financial-services",
        Healthcare => "healthcare",
        Insurance => "insurance",
        Technology => "technology",
        Retail => "retail",
        Manufacturing => "manufacturing",
        Government => "government",
        Education => "education",
        Transportation => "transportation",
        Other => "other",
    }
}

vocabulary! {
    /// Category of data the system processes.
    DataType, "data type", "snake_case" {
        PersonalData => "personal_data",
        BiometricData => "biometric_data",
        HealthData => "health_data",
        GeneticData => "genetic_data",
        FinancialData => "financial_data",
        ChildrenData => "children_data",
        CriminalRecords => "criminal_records",
        LocationData => "location_data",
        BehavioralData => "behavioral_data",
        PublicData => "public_data",
        AnonymizedData => "anonymized_data",
    }
}

impl DataType {
    /// Special-category data that triggers enhanced data-governance measures.
    pub fn is_special_category(&self) -> bool {
        matches!(
            self,
            Self::BiometricData | Self::HealthData | Self::GeneticData
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn use_case_vocabulary_has_fifteen_values() {
        assert_eq!(UseCaseCategory::all().len(), 15);
    }

    #[test]
    fn decision_impact_vocabulary_has_six_values() {
        assert_eq!(DecisionImpact::all().len(), 6);
    }

    #[test]
    fn wire_identifiers_are_unique() {
        let ids: HashSet<_> = UseCaseCategory::all().iter().map(|u| u.as_str()).collect();
        assert_eq!(ids.len(), UseCaseCategory::all().len());
        let ids: HashSet<_> = DataType::all().iter().map(|d| d.as_str()).collect();
        assert_eq!(ids.len(), DataType::all().len());
    }

    #[test]
    fn as_str_roundtrips_through_from_str() {
        for u in UseCaseCategory::all() {
            assert_eq!(u.as_str().parse::<UseCaseCategory>().unwrap(), *u);
        }
        for d in DecisionImpact::all() {
            assert_eq!(d.as_str().parse::<DecisionImpact>().unwrap(), *d);
        }
        for i in Industry::all() {
            assert_eq!(i.as_str().parse::<Industry>().unwrap(), *i);
        }
        for d in DataType::all() {
            assert_eq!(d.as_str().parse::<DataType>().unwrap(), *d);
        }
    }

    #[test]
    fn serde_format_matches_as_str() {
        for u in UseCaseCategory::all() {
            assert_eq!(serde_json::to_string(u).unwrap(), format!("\"{}\"", u.as_str()));
        }
        for d in DataType::all() {
            assert_eq!(serde_json::to_string(d).unwrap(), format!("\"{}\"", d.as_str()));
        }
        for i in Industry::all() {
            assert_eq!(serde_json::to_string(i).unwrap(), format!("\"{}\"", i.as_str()));
        }
    }

    #[test]
    fn strict_parse_rejects_unknown_values() {
        let err = "astrology".parse::<UseCaseCategory>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown use-case category value: \"astrology\""
        );
        assert!("Credit-Scoring".parse::<UseCaseCategory>().is_err());
        assert!("".parse::<Industry>().is_err());
    }

    #[test]
    fn lenient_parse_trims_and_returns_none_on_unknown() {
        assert_eq!(
            UseCaseCategory::parse_lenient(" credit-scoring "),
            Some(UseCaseCategory::CreditScoring)
        );
        assert_eq!(DecisionImpact::parse_lenient("catastrophic"), None);
    }

    #[test]
    fn special_category_data_types() {
        let special: Vec<_> = DataType::all()
            .iter()
            .filter(|d| d.is_special_category())
            .collect();
        assert_eq!(
            special,
            vec![
                &DataType::BiometricData,
                &DataType::HealthData,
                &DataType::GeneticData
            ]
        );
    }
}
