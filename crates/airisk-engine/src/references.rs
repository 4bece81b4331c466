//! # Reference Resolver
//!
//! Static citations for matched regulations: official sources and guidance
//! documents keyed by regulation id, and the regulatory authority keyed by
//! the region's display name. Ids and regions outside the tables fall back
//! to generic pointers.

use serde::{Deserialize, Serialize};

use crate::matcher::ApplicableRegulation;

/// Official source when a regulation id has no entry.
pub const OFFICIAL_SOURCE_FALLBACK: &str = "Consult official sources for the current text";
/// Guidance entry when a regulation id has no entry.
pub const GUIDANCE_FALLBACK: &str = "Consult official sources for current guidance";
/// Authority when a region has no entry.
pub const AUTHORITY_FALLBACK: &str = "Consult national regulatory authorities";

/// Citations for one matched regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub regulation_id: String,
    pub regulation: String,
    pub official_source: String,
    pub guidance_documents: Vec<String>,
    pub regulatory_authority: String,
}

struct SourceEntry {
    id: &'static str,
    official_source: &'static str,
    guidance: &'static [&'static str],
}

const SOURCES: &[SourceEntry] = &[
    SourceEntry {
        id: "eu-ai-act",
        official_source: "https://eur-lex.europa.eu/eli/reg/2024/1689/oj",
        guidance: &[
            "European Commission guidelines on the definition of an AI system",
            "European Commission guidelines on prohibited AI practices",
            "AI Office codes of practice for general-purpose AI models",
        ],
    },
    SourceEntry {
        id: "gdpr",
        official_source: "https://eur-lex.europa.eu/eli/reg/2016/679/oj",
        guidance: &[
            "EDPB Guidelines on automated individual decision-making and profiling (WP251 rev.01)",
            "EDPB Guidelines on data protection impact assessment (WP248 rev.01)",
            "EDPB Guidelines 4/2019 on data protection by design and by default",
        ],
    },
];

const AUTHORITIES: &[(&str, &str)] = &[
    (
        "European Union",
        "European AI Office and national market surveillance authorities; national data protection authorities",
    ),
    (
        "United States",
        "Federal Trade Commission, Consumer Financial Protection Bureau and sector regulators",
    ),
    ("California", "California Privacy Protection Agency"),
    ("China", "Cyberspace Administration of China"),
    ("United Kingdom", "Information Commissioner's Office and sector regulators"),
    ("Canada", "Office of the Privacy Commissioner of Canada"),
    (
        "Singapore",
        "Personal Data Protection Commission and Infocomm Media Development Authority",
    ),
];

/// Regulatory authority for a region display name.
pub fn regulatory_authority(jurisdiction: &str) -> &'static str {
    AUTHORITIES
        .iter()
        .find(|(name, _)| *name == jurisdiction)
        .map_or(AUTHORITY_FALLBACK, |&(_, authority)| authority)
}

/// One reference per matched regulation, in match order.
pub fn resolve_references(regulations: &[ApplicableRegulation]) -> Vec<Reference> {
    regulations
        .iter()
        .map(|regulation| {
            let source = SOURCES.iter().find(|s| s.id == regulation.id);
            Reference {
                regulation_id: regulation.id.clone(),
                regulation: regulation.name.clone(),
                official_source: source
                    .map_or(OFFICIAL_SOURCE_FALLBACK, |s| s.official_source)
                    .to_string(),
                guidance_documents: match source {
                    Some(s) => s.guidance.iter().map(|g| (*g).to_string()).collect(),
                    None => vec![GUIDANCE_FALLBACK.to_string()],
                },
                regulatory_authority: regulatory_authority(&regulation.jurisdiction).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(id: &str, jurisdiction: &str) -> ApplicableRegulation {
        ApplicableRegulation {
            id: id.into(),
            name: format!("{id} name"),
            jurisdiction: jurisdiction.into(),
            status: "In force".into(),
            summary: String::new(),
            compliance_deadline: "2026-08-02".into(),
            relevant_provisions: vec![],
            penalties: String::new(),
        }
    }

    #[test]
    fn populated_ids_resolve() {
        let refs = resolve_references(&[
            matched("eu-ai-act", "European Union"),
            matched("gdpr", "European Union"),
        ]);
        assert!(refs[0].official_source.contains("2024/1689"));
        assert!(refs[1].official_source.contains("2016/679"));
        assert_eq!(refs[1].guidance_documents.len(), 3);
        assert!(refs[0].regulatory_authority.contains("AI Office"));
    }

    #[test]
    fn unknown_id_falls_back() {
        let refs = resolve_references(&[matched("pipeda", "Canada")]);
        assert_eq!(refs[0].official_source, OFFICIAL_SOURCE_FALLBACK);
        assert_eq!(refs[0].guidance_documents, vec![GUIDANCE_FALLBACK]);
        assert_eq!(
            refs[0].regulatory_authority,
            "Office of the Privacy Commissioner of Canada"
        );
    }

    #[test]
    fn unknown_region_falls_back() {
        assert_eq!(regulatory_authority("Atlantis"), AUTHORITY_FALLBACK);
    }

    #[test]
    fn every_bundled_region_has_an_authority() {
        let kb = airisk_pack::KnowledgeBase::bundled().unwrap();
        for (_, region) in kb.catalog.regions() {
            assert_ne!(regulatory_authority(&region.name), AUTHORITY_FALLBACK, "{}", region.name);
        }
    }
}
