//! # Risk Aggregator
//!
//! `total = Σ score_i × weight_i / 100` over the five components, weights
//! from the framework. Weights are validated to sum to 100 when the
//! knowledge base loads, so the total stays within [0, 100]. The rounded
//! total selects the tier through the closed-above thresholds of
//! [`RiskTier::from_score`].

use serde::{Deserialize, Serialize};

use airisk_core::RiskTier;
use airisk_pack::RiskFramework;

use crate::scoring::ComponentScores;

/// Aggregated score and tier for one request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub components: ComponentScores,
    /// Unrounded weighted sum.
    pub weighted_score: f64,
    /// `weighted_score` rounded half away from zero.
    pub total_score: u32,
    pub tier: RiskTier,
}

/// Σ score × weight over the components, in hundredths of a point.
///
/// Kept in integers so an exact `.5` total is never perturbed below the
/// rounding boundary.
pub fn weighted_hundredths(framework: &RiskFramework, components: &ComponentScores) -> u64 {
    framework
        .scoring_factors
        .named()
        .iter()
        .zip(components.as_array())
        .map(|((_, factor), score)| u64::from(score) * u64::from(factor.weight))
        .sum()
}

/// Combine component scores into a total and map it to a tier.
pub fn aggregate(framework: &RiskFramework, components: ComponentScores) -> RiskAssessment {
    let hundredths = weighted_hundredths(framework, &components);
    let weighted_score = hundredths as f64 / 100.0;
    // Half away from zero; the sum is non-negative.
    let total_score = u32::try_from((hundredths + 50) / 100).unwrap_or(u32::MAX);
    let tier = RiskTier::from_score(total_score);
    tracing::debug!(weighted_score, total_score, tier = %tier, "aggregated risk score");
    RiskAssessment {
        components,
        weighted_score,
        total_score,
        tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airisk_pack::KnowledgeBase;
    use proptest::prelude::*;

    fn framework() -> RiskFramework {
        KnowledgeBase::bundled().unwrap().framework
    }

    fn components(values: [u32; 5]) -> ComponentScores {
        ComponentScores {
            use_case_category: values[0],
            jurisdiction: values[1],
            data_sensitivity: values[2],
            decision_impact: values[3],
            transparency: values[4],
        }
    }

    #[test]
    fn credit_scoring_in_eu_is_critical() {
        // high-risk use case, EU, financial data, significant economic
        // impact, no oversight, no disclosure
        let result = aggregate(&framework(), components([100, 90, 80, 80, 100]));
        assert_eq!(result.weighted_score, 90.0);
        assert_eq!(result.total_score, 90);
        assert_eq!(result.tier, RiskTier::Critical);
    }

    #[test]
    fn all_zero_is_low() {
        let result = aggregate(&framework(), components([0; 5]));
        assert_eq!(result.total_score, 0);
        assert_eq!(result.tier, RiskTier::Low);
    }

    #[test]
    fn all_max_is_critical_at_100() {
        let result = aggregate(&framework(), components([100; 5]));
        assert_eq!(result.total_score, 100);
        assert_eq!(result.tier, RiskTier::Critical);
    }

    #[test]
    fn rounding_decides_tier() {
        // 50*.3 + 60*.2 + 50*.2 + 30*.2 + 40*.1 = 15 + 12 + 10 + 6 + 4 = 47
        let result = aggregate(&framework(), components([50, 60, 50, 30, 40]));
        assert_eq!(result.total_score, 47);
        assert_eq!(result.tier, RiskTier::Medium);

        // 20*.3 + 50*.2 + 5*.2 + 10*.2 + 10*.1 = 6 + 10 + 1 + 2 + 1 = 20
        let result = aggregate(&framework(), components([20, 50, 5, 10, 10]));
        assert_eq!(result.total_score, 20);
        assert_eq!(result.tier, RiskTier::Low);
    }

    #[test]
    fn exact_half_rounds_up_into_critical() {
        // 83*30 + 96*20 + 99*20 + 78*20 + 100*10 = 8950, i.e. 89.5
        let result = aggregate(&framework(), components([83, 96, 99, 78, 100]));
        assert_eq!(result.weighted_score, 89.5);
        assert_eq!(result.total_score, 90);
        assert_eq!(result.tier, RiskTier::Critical);
    }

    #[test]
    fn exact_half_rounds_up_within_tier() {
        // 53*30 + 98*20 + 99*20 + 97*20 + 8*10 = 7550, i.e. 75.5
        let result = aggregate(&framework(), components([53, 98, 99, 97, 8]));
        assert_eq!(result.weighted_score, 75.5);
        assert_eq!(result.total_score, 76);
        assert_eq!(result.tier, RiskTier::High);
    }

    proptest! {
        #[test]
        fn total_is_rounded_weighted_sum(values in proptest::array::uniform5(0u32..=100)) {
            let f = framework();
            let c = components(values);
            let result = aggregate(&f, c);
            let hundredths = values[0] * 30
                + values[1] * 20
                + values[2] * 20
                + values[3] * 20
                + values[4] * 10;
            prop_assert_eq!(result.weighted_score, f64::from(hundredths) / 100.0);
            let floor = hundredths / 100;
            let expected = if hundredths % 100 >= 50 { floor + 1 } else { floor };
            prop_assert_eq!(result.total_score, expected);
            prop_assert!(result.total_score <= 100);
            prop_assert_eq!(result.tier, RiskTier::from_score(result.total_score));
        }
    }
}
