//! Shared types used across WebSets endpoints

use serde::{Deserialize, Serialize};

/// Cursor pagination parameters for list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Cursor returned as `nextCursor` by a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Maximum number of entries per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListParams {
    /// Empty parameters: first page, server default size
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume after the given cursor
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_serialize_to_empty_query() {
        let v = serde_json::to_value(ListParams::new()).unwrap();
        assert_eq!(v, serde_json::json!({}));
    }

    #[test]
    fn params_use_camel_case_keys() {
        let v = serde_json::to_value(ListParams::new().with_cursor("c1").with_limit(25)).unwrap();
        assert_eq!(v, serde_json::json!({ "cursor": "c1", "limit": 25 }));
    }
}
