//! Types for the `/websets/v0/websets` endpoints

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle state of a webset as reported by the service
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WebsetStatus {
    /// Accepted but not started; also assumed when a response omits the status
    #[default]
    Pending,
    /// Searches or enrichments in progress
    Running,
    /// Finished
    Completed,
    /// No work outstanding; reported once searches and enrichments finish
    Idle,
    /// Paused by the owner
    Paused,
    /// The job failed
    Failed,
    /// The job hit an internal error
    Error,
    /// A state this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl WebsetStatus {
    /// Statuses after which the items can be fetched
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Completed | Self::Idle)
    }

    /// Statuses that end the job without results
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed | Self::Error)
    }

    /// Whether no further transition will occur
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.is_complete() || self.is_failure()
    }

    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Idle => "idle",
            Self::Paused => "paused",
            Self::Failed => "failed",
            Self::Error => "error",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for WebsetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verification criterion items must satisfy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CriterionParam {
    /// Natural-language description of the criterion
    pub description: String,
}

/// The kind of entity a webset search looks for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityParam {
    /// Entity type such as `company`, `person` or `article`
    #[serde(rename = "type")]
    pub kind: String,
}

/// Search section of a webset creation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// What to search for
    pub query: String,

    /// Number of items to find
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    /// Criteria every item is verified against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Vec<CriterionParam>>,

    /// Expected entity type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityParam>,
}

/// An enrichment to run on every found item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichmentParam {
    /// What to extract
    pub description: String,
    /// Output format, e.g. `text`, `number`, `date`, `url`
    pub format: String,
}

/// Request body for `POST /websets/v0/websets/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebsetParams {
    /// Search definition
    pub search: SearchParams,

    /// Enrichments to apply to found items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<EnrichmentParam>>,

    /// Free-form key/value metadata stored with the webset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl CreateWebsetParams {
    /// Create a request with only a search query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            search: SearchParams {
                query: query.into(),
                count: None,
                criteria: None,
                entity: None,
            },
            enrichments: None,
            metadata: None,
        }
    }

    /// Set the number of items to find
    #[must_use]
    pub const fn with_count(mut self, count: u32) -> Self {
        self.search.count = Some(count);
        self
    }

    /// Add a verification criterion
    #[must_use]
    pub fn with_criterion(mut self, description: impl Into<String>) -> Self {
        self.search
            .criteria
            .get_or_insert_with(Vec::new)
            .push(CriterionParam {
                description: description.into(),
            });
        self
    }

    /// Set the expected entity type
    #[must_use]
    pub fn with_entity(mut self, kind: impl Into<String>) -> Self {
        self.search.entity = Some(EntityParam { kind: kind.into() });
        self
    }

    /// Add an enrichment
    #[must_use]
    pub fn with_enrichment(
        mut self,
        description: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        self.enrichments
            .get_or_insert_with(Vec::new)
            .push(EnrichmentParam {
                description: description.into(),
                format: format.into(),
            });
        self
    }

    /// Replace the metadata map; an empty map is not sent
    #[must_use]
    pub fn with_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = (!metadata.is_empty()).then_some(metadata);
        self
    }
}

/// A timestamp the service sent in an unexpected shape is dropped rather
/// than failing the whole response.
fn lenient_timestamp<'de, D>(de: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(de)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}

fn null_as_empty<'de, D>(de: D) -> Result<Vec<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<serde_json::Value>>::deserialize(de).map(Option::unwrap_or_default)
}

/// A webset as returned by create, get and cancel
///
/// Only `id` is required; creation may answer with nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webset {
    /// Webset identifier
    pub id: String,
    /// Object type, always `webset`
    #[serde(default)]
    pub object: Option<String>,
    /// Current status; `pending` when the response leaves it out
    #[serde(default)]
    pub status: WebsetStatus,
    /// Caller-supplied external identifier
    #[serde(default)]
    pub external_id: Option<String>,
    /// Searches attached to the webset
    #[serde(default, deserialize_with = "null_as_empty")]
    pub searches: Vec<serde_json::Value>,
    /// Enrichments attached to the webset
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enrichments: Vec<serde_json::Value>,
    /// Metadata stored with the webset
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    /// Creation time
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response from `GET /websets/v0/websets`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWebsetsResponse {
    /// Websets on this page
    pub data: Vec<Webset>,
    /// Whether more pages exist
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next page
    #[serde(default)]
    pub next_cursor: Option<String>,
}
