//! # Timeline Estimator
//!
//! Buckets every requirement record of the selected compliance blocks by its
//! timeline tag. Records without a tag are left out.
//!
//! | Tag | Bucket |
//! |-----|--------|
//! | contains `Before`, or exactly `Immediate` | immediate |
//! | exactly `Ongoing` | ongoing |
//! | anything else | medium term |
//!
//! No tag routes to the short-term bucket. It is still reported, with its
//! description and an empty list, so the result shape is fixed.

use serde::{Deserialize, Serialize};

use crate::requirements::ComplianceRequirement;

/// One phase of the compliance timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBucket {
    pub description: String,
    pub items: Vec<String>,
}

impl TimelineBucket {
    fn empty(description: &str) -> Self {
        Self {
            description: description.to_string(),
            items: Vec::new(),
        }
    }
}

/// The four-phase compliance timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub immediate: TimelineBucket,
    pub short_term: TimelineBucket,
    pub medium_term: TimelineBucket,
    pub ongoing: TimelineBucket,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            immediate: TimelineBucket::empty("Before deployment or immediately"),
            short_term: TimelineBucket::empty("Within 3 months"),
            medium_term: TimelineBucket::empty("Within 3 to 12 months"),
            ongoing: TimelineBucket::empty("Continuous obligations"),
        }
    }
}

/// Which bucket a timeline tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Immediate,
    MediumTerm,
    Ongoing,
}

impl Phase {
    pub fn of(tag: &str) -> Self {
        if tag.contains("Before") || tag == "Immediate" {
            Self::Immediate
        } else if tag == "Ongoing" {
            Self::Ongoing
        } else {
            Self::MediumTerm
        }
    }
}

/// Phase the requirement records of the selected compliance blocks.
pub fn estimate_timeline(requirements: &[ComplianceRequirement]) -> Timeline {
    let mut timeline = Timeline::default();
    for record in requirements.iter().flat_map(|r| &r.requirements) {
        let Some(tag) = record.timeline.as_deref() else {
            continue;
        };
        let bucket = match Phase::of(tag) {
            Phase::Immediate => &mut timeline.immediate,
            Phase::MediumTerm => &mut timeline.medium_term,
            Phase::Ongoing => &mut timeline.ongoing,
        };
        bucket.items.push(record.requirement.clone());
    }
    timeline
}
