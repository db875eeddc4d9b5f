use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    types::{
        common::ListParams,
        websets::{CreateWebsetParams, ListWebsetsResponse, Webset},
    },
};

use super::{WEBSETS_PATH, segment};

/// API resource for the `/websets/v0/websets` endpoints
pub struct Websets<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Websets<'c, C> {
    /// Creates a new Websets resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Create a webset; the search starts running on the server immediately
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(&self, req: CreateWebsetParams) -> Result<Webset, ExaError> {
        self.client.post(&format!("{WEBSETS_PATH}/"), req).await
    }

    /// Fetch a webset, including its current status
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, id: &str) -> Result<Webset, ExaError> {
        let id = segment("webset id", id)?;
        self.client.get(&format!("{WEBSETS_PATH}/{id}")).await
    }

    /// List websets, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(&self, params: &ListParams) -> Result<ListWebsetsResponse, ExaError> {
        self.client.get_with_query(WEBSETS_PATH, params).await
    }

    /// Cancel all running searches and enrichments of a webset
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn cancel(&self, id: &str) -> Result<Webset, ExaError> {
        let id = segment("webset id", id)?;
        self.client
            .post(&format!("{WEBSETS_PATH}/{id}/cancel"), serde_json::json!({}))
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Websets API resource
    #[must_use]
    pub const fn websets(&self) -> Websets<'_, C> {
        Websets::new(self)
    }
}
