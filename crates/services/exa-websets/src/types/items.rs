//! Types for the `/websets/v0/websets/{id}/items` endpoints

use serde::{Deserialize, Serialize};

/// An item found by a webset
///
/// The item shape belongs to the service; fields this client does not model
/// are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsetItem {
    /// Item identifier
    pub id: String,
    /// Source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Page or entity title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Extracted content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Outcome of criteria verification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<serde_json::Value>,
    /// Enrichment results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<serde_json::Value>,
    /// Any other fields returned by the service
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response from `GET /websets/v0/websets/{id}/items`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWebsetItemsResponse {
    /// Items on this page
    pub data: Vec<WebsetItem>,
    /// Whether more pages exist
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next page
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_keeps_unmodelled_fields() {
        let item: WebsetItem = serde_json::from_value(json!({
            "id": "item_1",
            "url": "https://acme.example",
            "verification": { "status": "verified" },
            "properties": { "type": "company", "company": { "name": "Acme" } }
        }))
        .unwrap();

        assert_eq!(item.id, "item_1");
        assert_eq!(item.url.as_deref(), Some("https://acme.example"));
        assert!(item.title.is_none());
        assert_eq!(item.extra["properties"]["company"]["name"], "Acme");
    }

    #[test]
    fn list_defaults_pagination_fields() {
        let resp: ListWebsetItemsResponse =
            serde_json::from_value(json!({ "data": [{ "id": "a" }] })).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert!(!resp.has_more);
        assert!(resp.next_cursor.is_none());
    }
}
