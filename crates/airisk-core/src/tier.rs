//! # Risk Tiers and Priorities
//!
//! Four discrete severity tiers derived from the aggregate score, and the
//! three priority levels attached to recommendations.
//!
//! Thresholds are closed-above on the rounded total:
//!
//! ```text
//! score >= 90  → Critical
//! score >= 70  → High
//! score >= 40  → Medium
//! otherwise    → Low
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum rounded score for [`RiskTier::Critical`].
pub const CRITICAL_THRESHOLD: u32 = 90;
/// Minimum rounded score for [`RiskTier::High`].
pub const HIGH_THRESHOLD: u32 = 70;
/// Minimum rounded score for [`RiskTier::Medium`].
pub const MEDIUM_THRESHOLD: u32 = 40;

/// Regulatory risk tier of an assessed use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskTier {
    /// All tiers, most severe first.
    pub fn all() -> &'static [RiskTier] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    /// Map a rounded total score to its tier.
    pub fn from_score(score: u32) -> Self {
        if score >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Key of this tier in the framework's `riskLevels` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Display label ("Critical", "High", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Critical or High: the tiers that escalate recommendations to
    /// IMMEDIATE priority.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Priority of a recommendation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Immediate,
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "IMMEDIATE",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
