//! # Regulatory Catalog
//!
//! Regulations grouped by jurisdiction. Keys are canonical catalog keys
//! (`EU`, `USA`, `CALIFORNIA`, ...); lookups canonicalize the caller's
//! spelling first, so `"eu"` finds the `EU` region.
//!
//! A regulation may describe its obligations in any combination of three
//! shapes, and the engine extracts provisions from whichever are present:
//!
//! - `risk_categories`: a tiered regime (unacceptable / high / limited /
//!   minimal risk), each tier with its own requirements and penalties.
//! - `key_provisions`: flat data-protection obligations.
//! - `ai_specific_requirements`: flat obligations specific to AI systems.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use airisk_core::catalog_key;

/// Tier key whose requirements apply to designated high-risk use cases.
pub const HIGH_RISK_TIER: &str = "high_risk";
/// Tier key carrying transparency obligations for interactive systems.
pub const LIMITED_RISK_TIER: &str = "limited_risk";

/// Jurisdiction code → region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegulatoryCatalog {
    regions: BTreeMap<String, Region>,
}

impl RegulatoryCatalog {
    /// Build a catalog from already-keyed regions.
    pub fn new(regions: BTreeMap<String, Region>) -> Self {
        Self { regions }
    }

    /// Look up a region by any spelling of its code.
    pub fn region(&self, code: &str) -> Option<&Region> {
        self.regions.get(&catalog_key(code))
    }

    /// Regions keyed by canonical code, in key order.
    pub fn regions(&self) -> impl Iterator<Item = (&str, &Region)> {
        self.regions.iter().map(|(code, region)| (code.as_str(), region))
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True if the catalog has no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// A jurisdiction's entry in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Display name, e.g. "European Union".
    pub name: String,
    /// Id of the region's flagship regulation.
    pub primary_regulation: String,
    /// Regulations in catalog order.
    pub regulations: Vec<Regulation>,
}

/// One regulation, statute, or framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regulation {
    pub id: String,
    pub name: String,
    pub status: String,
    pub effective_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_compliance_date: Option<String>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_categories: Option<RiskTiers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_provisions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_specific_requirements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalties: Option<String>,
}

impl Regulation {
    /// The tier entry named `tier` in a tiered regime.
    pub fn tier(&self, tier: &str) -> Option<&TieredRiskCategory> {
        self.risk_categories.as_ref()?.get(tier)
    }

    /// Deadline for full compliance: the full-compliance date when the
    /// regulation phases in, else its effective date.
    pub fn compliance_deadline(&self) -> &str {
        self.full_compliance_date
            .as_deref()
            .unwrap_or(&self.effective_date)
    }
}

/// Tiers of a tiered regime, in the order the catalog lists them.
///
/// Catalogs list the most severe tier first, and penalty text is joined
/// in that order, so the entries are not re-sorted by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskTiers(Vec<(String, TieredRiskCategory)>);

impl RiskTiers {
    /// The tier named `name`.
    pub fn get(&self, name: &str) -> Option<&TieredRiskCategory> {
        self.0
            .iter()
            .find(|(tier, _)| tier == name)
            .map(|(_, category)| category)
    }

    /// Tier names and entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TieredRiskCategory)> {
        self.0.iter().map(|(tier, category)| (tier.as_str(), category))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for RiskTiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (tier, category) in &self.0 {
            map.serialize_entry(tier, category)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RiskTiers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TiersVisitor;

        impl<'de> Visitor<'de> for TiersVisitor {
            type Value = RiskTiers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of risk tier name to tier entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RiskTiers, A::Error> {
                let mut tiers: Vec<(String, TieredRiskCategory)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((tier, category)) =
                    access.next_entry::<String, TieredRiskCategory>()?
                {
                    if tiers.iter().any(|(seen, _)| *seen == tier) {
                        return Err(de::Error::custom(format_args!(
                            "duplicate risk tier `{tier}`"
                        )));
                    }
                    tiers.push((tier, category));
                }
                Ok(RiskTiers(tiers))
            }
        }

        deserializer.deserialize_map(TiersVisitor)
    }
}

/// One tier of a tiered regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredRiskCategory {
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalties: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regulation(json: serde_json::Value) -> Regulation {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn compliance_deadline_prefers_full_compliance_date() {
        let phased = regulation(serde_json::json!({
            "id": "eu-ai-act", "name": "AI Act", "status": "In force",
            "effective_date": "2024-08-01", "full_compliance_date": "2026-08-02",
            "summary": "s"
        }));
        assert_eq!(phased.compliance_deadline(), "2026-08-02");

        let flat = regulation(serde_json::json!({
            "id": "gdpr", "name": "GDPR", "status": "In force",
            "effective_date": "2018-05-25", "summary": "s"
        }));
        assert_eq!(flat.compliance_deadline(), "2018-05-25");
    }

    #[test]
    fn tier_lookup() {
        let reg = regulation(serde_json::json!({
            "id": "x", "name": "X", "status": "s", "effective_date": "d", "summary": "s",
            "risk_categories": {
                "high_risk": { "requirements": ["a"], "penalties": "p" }
            }
        }));
        assert_eq!(reg.tier(HIGH_RISK_TIER).unwrap().requirements, vec!["a"]);
        assert!(reg.tier(LIMITED_RISK_TIER).is_none());
    }

    #[test]
    fn tiers_keep_catalog_order() {
        let reg: Regulation = serde_json::from_str(
            r#"{
                "id": "x", "name": "X", "status": "s", "effective_date": "d", "summary": "s",
                "risk_categories": {
                    "unacceptable_risk": { "penalties": "most" },
                    "high_risk": { "penalties": "more" },
                    "limited_risk": { "penalties": "some" },
                    "minimal_risk": {}
                }
            }"#,
        )
        .unwrap();
        let tiers = reg.risk_categories.as_ref().unwrap();
        let names: Vec<_> = tiers.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["unacceptable_risk", "high_risk", "limited_risk", "minimal_risk"]
        );

        let text = serde_json::to_string(&reg).unwrap();
        let unacceptable = text.find("unacceptable_risk").unwrap();
        let high = text.find("\"high_risk").unwrap();
        assert!(unacceptable < high, "serialization re-sorted tiers: {text}");

        let yaml: Regulation = serde_yaml::from_str(&serde_yaml::to_string(&reg).unwrap()).unwrap();
        assert_eq!(yaml, reg);
    }

    #[test]
    fn duplicate_tier_is_rejected() {
        let err = serde_json::from_str::<RiskTiers>(
            r#"{ "high_risk": {}, "high_risk": {} }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate risk tier `high_risk`"));
    }

    #[test]
    fn region_lookup_canonicalizes_code() {
        let catalog: RegulatoryCatalog = serde_json::from_value(serde_json::json!({
            "UNITED_KINGDOM": { "name": "United Kingdom", "primary_regulation": "uk-gdpr", "regulations": [] }
        }))
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.region("united kingdom").is_some());
        assert!(catalog.region("UNITED_KINGDOM").is_some());
        assert!(catalog.region("Mars").is_none());
    }

    #[test]
    fn absent_optional_fields_are_not_serialized() {
        let reg = regulation(serde_json::json!({
            "id": "x", "name": "X", "status": "s", "effective_date": "d", "summary": "s"
        }));
        let json = serde_json::to_value(&reg).unwrap();
        for field in [
            "full_compliance_date",
            "risk_categories",
            "key_provisions",
            "ai_specific_requirements",
            "penalties",
        ] {
            assert!(json.get(field).is_none(), "{field} should be omitted");
        }
    }
}
