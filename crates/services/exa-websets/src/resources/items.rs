use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    types::{
        common::ListParams,
        items::{ListWebsetItemsResponse, WebsetItem},
    },
};

use super::{WEBSETS_PATH, segment};

/// API resource for the `/websets/v0/websets/{id}/items` endpoints
pub struct Items<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Items<'c, C> {
    /// Creates a new Items resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// List one page of the items a webset has found
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(
        &self,
        webset_id: &str,
        params: &ListParams,
    ) -> Result<ListWebsetItemsResponse, ExaError> {
        let webset_id = segment("webset id", webset_id)?;
        self.client
            .get_with_query(&format!("{WEBSETS_PATH}/{webset_id}/items"), params)
            .await
    }

    /// List one page of items as the untouched JSON payload
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list_raw(
        &self,
        webset_id: &str,
        params: &ListParams,
    ) -> Result<serde_json::Value, ExaError> {
        let webset_id = segment("webset id", webset_id)?;
        self.client
            .get_with_query(&format!("{WEBSETS_PATH}/{webset_id}/items"), params)
            .await
    }

    /// Fetch a single item
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, webset_id: &str, item_id: &str) -> Result<WebsetItem, ExaError> {
        let webset_id = segment("webset id", webset_id)?;
        let item_id = segment("item id", item_id)?;
        self.client
            .get(&format!("{WEBSETS_PATH}/{webset_id}/items/{item_id}"))
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Items API resource
    #[must_use]
    pub const fn items(&self) -> Items<'_, C> {
        Items::new(self)
    }
}
