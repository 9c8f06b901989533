//! Raw label records from the openFDA endpoint.
//!
//! The source guarantees nothing: any field may be absent, and each clinical
//! field arrives as an ordered sequence of text blocks. Everything here
//! deserializes with defaults so a degenerate record is still a record.

use serde::Deserialize;

/// JSON envelope around label search results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelResponse {
    #[serde(default)]
    pub results: Vec<LabelResult>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Error object the endpoint returns instead of results.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    /// Whether this is the endpoint's "no matches" envelope rather than a
    /// real fault. The endpoint reports an empty result set as HTTP 404
    /// with this error object.
    pub fn is_no_matches(&self) -> bool {
        self.code.as_deref() == Some("NOT_FOUND")
            || self
                .message
                .as_deref()
                .is_some_and(|m| m.contains("No matches found"))
    }
}

/// One raw label record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelResult {
    #[serde(default)]
    pub openfda: OpenFdaFields,
    #[serde(default)]
    pub purpose: Vec<String>,
    #[serde(default)]
    pub indications_and_usage: Vec<String>,
    #[serde(default)]
    pub dosage_and_administration: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub adverse_reactions: Vec<String>,
    #[serde(default)]
    pub drug_interactions: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub active_ingredient: Vec<String>,
}

/// Name metadata nested under `openfda`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenFdaFields {
    #[serde(default)]
    pub brand_name: Vec<String>,
    #[serde(default)]
    pub generic_name: Vec<String>,
    #[serde(default)]
    pub manufacturer_name: Vec<String>,
    #[serde(default)]
    pub substance_name: Vec<String>,
}

/// First block with any visible text, trimmed.
///
/// A block that collapses to whitespace counts as absent, so fallback
/// chains can never land on an empty field.
pub(crate) fn first_block(blocks: &[String]) -> Option<&str> {
    blocks
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .find(|block| !block.is_empty())
}
