//! # Jurisdictions
//!
//! The jurisdictions the bundled knowledge bases know about. Requests carry
//! jurisdictions as raw strings: an unknown jurisdiction ("Mars") is scored
//! at the default and matches no regulations, but it is never rejected.
//! [`Jurisdiction`] is what rule predicates compare against once a raw
//! string has been canonicalized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::canonical::{catalog_key, jurisdiction_scoring_key};
use crate::error::CoreError;

/// A jurisdiction with AI-relevant regulation in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Jurisdiction {
    /// European Union.
    #[serde(rename = "EU")]
    Eu,
    /// United States (federal).
    #[serde(rename = "USA")]
    Usa,
    /// United Kingdom.
    #[serde(rename = "UK")]
    Uk,
    /// People's Republic of China.
    China,
    /// State of California.
    California,
    /// Canada.
    Canada,
    /// Singapore.
    Singapore,
}

impl Jurisdiction {
    /// Every known jurisdiction in canonical order.
    pub fn all() -> &'static [Jurisdiction] {
        &[
            Self::Eu,
            Self::Usa,
            Self::Uk,
            Self::China,
            Self::California,
            Self::Canada,
            Self::Singapore,
        ]
    }

    /// The request spelling, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eu => "EU",
            Self::Usa => "USA",
            Self::Uk => "UK",
            Self::China => "China",
            Self::California => "California",
            Self::Canada => "Canada",
            Self::Singapore => "Singapore",
        }
    }

    /// The Regulatory Catalog key for this jurisdiction.
    pub fn catalog_key(&self) -> &'static str {
        match self {
            Self::Eu => "EU",
            Self::Usa => "USA",
            Self::Uk => "UK",
            Self::China => "CHINA",
            Self::California => "CALIFORNIA",
            Self::Canada => "CANADA",
            Self::Singapore => "SINGAPORE",
        }
    }

    /// The Risk Framework jurisdiction-table key for this jurisdiction.
    pub fn scoring_key(&self) -> String {
        jurisdiction_scoring_key(self.as_str())
    }

    /// Resolve any spelling of a jurisdiction through its catalog key.
    ///
    /// `"eu"`, `"EU"` and `" Eu "` all resolve to [`Jurisdiction::Eu`].
    pub fn resolve(raw: &str) -> Option<Self> {
        let key = catalog_key(raw);
        Self::all().iter().copied().find(|j| j.catalog_key() == key)
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| CoreError::unknown("jurisdiction", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(Jurisdiction::resolve("eu"), Some(Jurisdiction::Eu));
        assert_eq!(Jurisdiction::resolve("CHINA"), Some(Jurisdiction::China));
        assert_eq!(Jurisdiction::resolve(" california "), Some(Jurisdiction::California));
    }

    #[test]
    fn resolve_unknown_is_none() {
        assert_eq!(Jurisdiction::resolve("Mars"), None);
        assert_eq!(Jurisdiction::resolve(""), None);
        assert!("Mars".parse::<Jurisdiction>().is_err());
    }

    #[test]
    fn every_jurisdiction_resolves_from_its_request_spelling() {
        for j in Jurisdiction::all() {
            assert_eq!(Jurisdiction::resolve(j.as_str()), Some(*j));
            assert_eq!(j.as_str().parse::<Jurisdiction>().unwrap(), *j);
        }
    }

    #[test]
    fn serde_uses_request_spelling() {
        for j in Jurisdiction::all() {
            assert_eq!(
                serde_json::to_string(j).unwrap(),
                format!("\"{}\"", j.as_str())
            );
        }
    }
}
