//! Input and output types for the websets tools.

use std::collections::BTreeMap;

use exa_websets::types::WebsetStatus;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const fn default_wait() -> bool {
    true
}

/// A post-processing extraction to run on every found item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrichmentInput {
    /// What to extract from each item, e.g. "Name of the CEO"
    pub description: String,
    /// Output format: text, date, number, options, email, phone or url
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Input for `create_webset`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebsetInput {
    /// What to search for, in natural language
    pub query: String,
    /// Number of items to find
    #[serde(default)]
    pub count: Option<u32>,
    /// Criterion every item must be verified against
    #[serde(default)]
    pub criteria: Option<String>,
    /// Expected entity type, e.g. company, person, article
    #[serde(default)]
    pub entity: Option<String>,
    /// Extractions to run on each item
    #[serde(default)]
    pub enrichments: Option<Vec<EnrichmentInput>>,
    /// Key/value metadata stored with the webset
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, String>>,
    /// Wait for the webset to finish and return its items (default true)
    #[serde(default = "default_wait")]
    pub wait_for_completion: bool,
}

impl CreateWebsetInput {
    /// Input with only a query; waits for completion.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            count: None,
            criteria: None,
            entity: None,
            enrichments: None,
            metadata: None,
            wait_for_completion: true,
        }
    }
}

/// Returned by `create_webset` when it does not wait.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebsetDispatched {
    /// Hint for the caller on how to follow up
    pub message: String,
    /// Identifier of the created webset
    pub webset_id: String,
    /// Always `running`
    pub status: WebsetStatus,
}

/// Result of `create_webset`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CreateWebsetOutput {
    /// The webset was created and left running.
    Dispatched(WebsetDispatched),
    /// The webset finished; the items payload exactly as the service sent it.
    Completed(serde_json::Value),
}

/// Input naming a single webset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebsetIdInput {
    /// Identifier returned by `create_webset`
    pub webset_id: String,
}

/// Input for `list_webset_items`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsInput {
    /// Identifier returned by `create_webset`
    pub webset_id: String,
    /// Page size
    #[serde(default)]
    pub limit: Option<u32>,
    /// `nextCursor` from a previous page
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Current state of a webset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebsetStatusOutput {
    /// Webset identifier
    pub webset_id: String,
    /// Status reported by the service
    pub status: WebsetStatus,
    /// Whether the status is final (completed, idle, failed or error)
    pub is_terminal: bool,
}
