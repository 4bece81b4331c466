//! # Key Canonicalization
//!
//! The knowledge bases key their tables by normalized strings, while
//! callers send whatever spelling their UI produced ("EU", "eu",
//! "United Kingdom", "health-data", "Biometric Data"). A mis-normalized key
//! does not raise: it silently misses the table and the engine scores the
//! dimension at its default. Every normalization rule therefore lives here,
//! once, with tests over every enumerated input.
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`catalog_key`] | `"united kingdom"` | `"UNITED_KINGDOM"` |
//! | [`jurisdiction_scoring_key`] | `"EU"` | `"eu_operations"` |
//! | [`data_type_key`] | `"Health-Data"` | `"health_data"` |
//!
//! Blank input canonicalizes to the empty string, which matches no table.

/// Suffix appended to jurisdiction keys in the framework's jurisdiction table.
pub const JURISDICTION_SCORING_SUFFIX: &str = "_operations";

/// Split on whitespace and join the words with `_`.
fn underscore_words(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Canonical Regulatory Catalog key: trimmed, uppercased, runs of
/// whitespace replaced by a single `_`.
pub fn catalog_key(raw: &str) -> String {
    underscore_words(raw).to_uppercase()
}

/// Canonical key into the framework's jurisdiction scoring table:
/// lowercased, whitespace replaced by `_`, suffixed with `_operations`.
pub fn jurisdiction_scoring_key(raw: &str) -> String {
    let words = underscore_words(raw);
    if words.is_empty() {
        return String::new();
    }
    format!("{}{JURISDICTION_SCORING_SUFFIX}", words.to_lowercase())
}

/// Canonical key into the framework's data-sensitivity table: lowercased,
/// whitespace and hyphens replaced by `_`.
pub fn data_type_key(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}
