//! Raw CMS response shapes
//!
//! These mirror what the Prismic search API returns. The document payload
//! stays untyped until the normalizer validates it.

use serde::{Deserialize, Serialize};

/// A document as returned by the CMS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub last_publication_date: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl RawDocument {
    /// Best identifier for log and error messages
    pub fn label(&self) -> &str {
        self.uid
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("<unidentified>")
    }
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results_per_page: Option<u32>,
    #[serde(default)]
    pub results_size: Option<u32>,
    #[serde(default)]
    pub total_results_size: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub prev_page: Option<String>,
    #[serde(default)]
    pub results: Vec<RawDocument>,
}
