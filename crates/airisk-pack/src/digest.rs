//! # Knowledge-Base Digest
//!
//! A SHA-256 content identifier over both documents, reported with every
//! assessment so a result can be traced to the exact regulatory data that
//! produced it.
//!
//! The digest is computed over a domain prefix followed by the compact JSON
//! serialization of `{"catalog": ..., "framework": ...}`. Both documents pass
//! through `serde_json::Value`, whose objects are key-sorted, so the bytes
//! depend only on content: the same data loaded from JSON, YAML or the
//! bundled copy yields the same digest, and reordering the tiers of a regime
//! does not change it.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::catalog::RegulatoryCatalog;
use crate::error::PackResult;
use crate::framework::RiskFramework;

const DOMAIN_PREFIX: &[u8] = b"airisk-kb-v1\0";

/// Lowercase hex SHA-256 of a knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBaseDigest(String);

impl KnowledgeBaseDigest {
    /// Digest a catalog and framework pair.
    pub fn compute(catalog: &RegulatoryCatalog, framework: &RiskFramework) -> PackResult<Self> {
        let document = serde_json::json!({
            "catalog": serde_json::to_value(catalog)?,
            "framework": serde_json::to_value(framework)?,
        });
        let bytes = serde_json::to_vec(&document)?;

        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_PREFIX);
        hasher.update(&bytes);
        Ok(Self(format!("{:x}", hasher.finalize())))
    }

    /// The 64-character hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KnowledgeBaseDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", self.0)
    }
}
