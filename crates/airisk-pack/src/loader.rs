//! # Knowledge-Base Loading
//!
//! Reads the `regulations` and `risk_framework` documents, parses them as
//! JSON or YAML by extension, validates both, and computes the digest.
//! A [`KnowledgeBase`] only exists in validated form.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::catalog::RegulatoryCatalog;
use crate::digest::KnowledgeBaseDigest;
use crate::error::{PackError, PackResult};
use crate::framework::RiskFramework;
use crate::validation::{validate_catalog, validate_framework};

/// File stem of the Regulatory Catalog document.
pub const CATALOG_STEM: &str = "regulations";
/// File stem of the Risk Framework document.
pub const FRAMEWORK_STEM: &str = "risk_framework";

const EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

const BUNDLED_CATALOG: &str = include_str!("../data/regulations.json");
const BUNDLED_FRAMEWORK: &str = include_str!("../data/risk_framework.json");

/// Serialization format of a knowledge-base document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> PackResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Self::Yaml)
            }
            _ => Err(PackError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse `text` into `T`. `document` names the source in errors.
    pub fn parse<T: DeserializeOwned>(self, text: &str, document: &str) -> PackResult<T> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|source| PackError::Json {
                document: document.to_string(),
                source,
            }),
            Self::Yaml => serde_yaml::from_str(text).map_err(|source| PackError::Yaml {
                document: document.to_string(),
                source,
            }),
        }
    }
}

/// A validated Regulatory Catalog and Risk Framework pair.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub catalog: RegulatoryCatalog,
    pub framework: RiskFramework,
    digest: KnowledgeBaseDigest,
}

impl KnowledgeBase {
    /// Validate both documents and pair them.
    ///
    /// Fails with [`PackError::Invalid`] listing every framework issue
    /// followed by every catalog issue.
    pub fn new(catalog: RegulatoryCatalog, framework: RiskFramework) -> PackResult<Self> {
        let mut issues = validate_framework(&framework);
        issues.extend(validate_catalog(&catalog));
        if !issues.is_empty() {
            return Err(PackError::Invalid { issues });
        }
        let digest = KnowledgeBaseDigest::compute(&catalog, &framework)?;
        Ok(Self {
            catalog,
            framework,
            digest,
        })
    }

    /// The reference knowledge base compiled into this crate.
    pub fn bundled() -> PackResult<Self> {
        let catalog = DocumentFormat::Json.parse(BUNDLED_CATALOG, "bundled regulations")?;
        let framework = DocumentFormat::Json.parse(BUNDLED_FRAMEWORK, "bundled risk_framework")?;
        let kb = Self::new(catalog, framework)?;
        tracing::debug!(digest = %kb.digest, "loaded bundled knowledge base");
        Ok(kb)
    }

    /// Load `regulations.{json,yaml,yml}` and `risk_framework.{json,yaml,yml}`
    /// from `dir`. When several extensions exist for one stem, JSON wins,
    /// then `.yaml`, then `.yml`.
    pub fn load_dir(dir: impl AsRef<Path>) -> PackResult<Self> {
        let dir = dir.as_ref();
        let catalog: RegulatoryCatalog = load_document(&find_document(dir, CATALOG_STEM)?)?;
        let framework: RiskFramework = load_document(&find_document(dir, FRAMEWORK_STEM)?)?;
        let kb = Self::new(catalog, framework)?;
        tracing::info!(
            dir = %dir.display(),
            regions = kb.catalog.len(),
            digest = %kb.digest,
            "loaded knowledge base"
        );
        Ok(kb)
    }

    /// Content digest of both documents.
    pub fn digest(&self) -> &KnowledgeBaseDigest {
        &self.digest
    }
}

fn find_document(dir: &Path, stem: &'static str) -> PackResult<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|path| path.is_file())
        .ok_or_else(|| PackError::MissingDocument {
            dir: dir.to_path_buf(),
            stem,
        })
}

/// Read and parse a single document, choosing the format by extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> PackResult<T> {
    let format = DocumentFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| PackError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, "parsing knowledge-base document");
    format.parse(&text, &path.display().to_string())
}
