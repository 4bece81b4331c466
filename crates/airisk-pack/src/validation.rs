//! # Knowledge-Base Validation
//!
//! Structural checks run once at load time. The engine assumes every
//! invariant checked here and does not re-check per request:
//!
//! - the five factor weights sum to exactly 100;
//! - every score in every table lies in [0, 100];
//! - the use-case and decision-impact factors name a default category
//!   that exists, and no vocabulary term is listed in two categories;
//! - every region key is already canonical and its primary regulation is
//!   one of its regulations, with regulation ids unique per region;
//! - every compliance program lists at least one requirement.
//!
//! Validators collect every issue instead of stopping at the first, so an
//! operator fixing a knowledge base sees the whole list at once.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use airisk_core::catalog_key;

use crate::catalog::RegulatoryCatalog;
use crate::framework::{RiskFramework, ScoringFactor};

/// Upper bound of every severity score.
pub const MAX_SCORE: u32 = 100;
/// Required sum of the five factor weights.
pub const TOTAL_WEIGHT: u32 = 100;

/// One structural problem in a knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Dotted path to the offending node, e.g. `scoringFactors.transparency`.
    pub location: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

fn check_score(issues: &mut Vec<ValidationIssue>, location: String, score: u32) {
    if score > MAX_SCORE {
        issues.push(ValidationIssue::new(
            location,
            format!("score {score} exceeds {MAX_SCORE}"),
        ));
    }
}

fn check_factor(
    issues: &mut Vec<ValidationIssue>,
    name: &str,
    factor: &ScoringFactor,
    requires_default: bool,
) {
    let location = format!("scoringFactors.{name}");
    if factor.categories.is_empty() {
        issues.push(ValidationIssue::new(&location, "factor has no categories"));
    }
    for (category_name, category) in &factor.categories {
        check_score(
            issues,
            format!("{location}.categories.{category_name}"),
            category.score,
        );
    }

    match factor.default_category.as_deref() {
        Some(default) if !factor.categories.contains_key(default) => {
            issues.push(ValidationIssue::new(
                &location,
                format!("defaultCategory {default:?} is not one of its categories"),
            ));
        }
        None if requires_default => {
            issues.push(ValidationIssue::new(&location, "defaultCategory is required"));
        }
        _ => {}
    }

    let mut seen = HashSet::new();
    for category in factor.categories.values() {
        for member in &category.members {
            if !seen.insert(member.as_str()) {
                issues.push(ValidationIssue::new(
                    &location,
                    format!("{member:?} is listed in more than one category"),
                ));
            }
        }
    }
}

/// Check a Risk Framework, returning every issue found.
pub fn validate_framework(framework: &RiskFramework) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let factors = &framework.scoring_factors;

    let total = factors.total_weight();
    if total != TOTAL_WEIGHT {
        issues.push(ValidationIssue::new(
            "scoringFactors",
            format!("weights sum to {total}, expected {TOTAL_WEIGHT}"),
        ));
    }

    for (name, factor) in factors.named() {
        let requires_default = matches!(name, "useCaseCategory" | "decisionImpact");
        check_factor(&mut issues, name, factor, requires_default);
    }

    for (key, score) in &framework.jurisdiction_scoring {
        check_score(&mut issues, format!("jurisdictionScoring.{key}"), *score);
    }
    for (key, score) in &framework.data_sensitivity_scoring {
        check_score(&mut issues, format!("dataSensitivityScoring.{key}"), *score);
    }
    for (key, score) in framework.transparency_scoring.named() {
        check_score(&mut issues, format!("transparencyScoring.{key}"), score);
    }
    check_score(
        &mut issues,
        "scoringDefaults.jurisdiction".into(),
        framework.scoring_defaults.jurisdiction,
    );
    check_score(
        &mut issues,
        "scoringDefaults.dataSensitivity".into(),
        framework.scoring_defaults.data_sensitivity,
    );

    for (program, records) in &framework.compliance_requirements_matrix {
        if records.is_empty() {
            issues.push(ValidationIssue::new(
                format!("complianceRequirementsMatrix.{program}"),
                "program lists no requirements",
            ));
        }
    }

    issues
}

/// Check a Regulatory Catalog, returning every issue found.
pub fn validate_catalog(catalog: &RegulatoryCatalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (code, region) in catalog.regions() {
        let location = format!("regions.{code}");
        let canonical = catalog_key(code);
        if canonical != code {
            issues.push(ValidationIssue::new(
                &location,
                format!("region key is not canonical, expected {canonical:?}"),
            ));
        }

        let mut ids = BTreeSet::new();
        for regulation in &region.regulations {
            if !ids.insert(regulation.id.as_str()) {
                issues.push(ValidationIssue::new(
                    &location,
                    format!("duplicate regulation id {:?}", regulation.id),
                ));
            }
        }

        if !ids.contains(region.primary_regulation.as_str()) {
            issues.push(ValidationIssue::new(
                &location,
                format!(
                    "primary regulation {:?} is not one of the region's regulations",
                    region.primary_regulation
                ),
            ));
        }
    }

    issues
}
