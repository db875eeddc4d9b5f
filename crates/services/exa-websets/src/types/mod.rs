//! Request and response types for the Exa WebSets API

/// Shared types used across endpoints
pub mod common;
/// Webset item types
pub mod items;
/// Webset creation and status types
pub mod websets;

pub use common::*;
pub use items::{ListWebsetItemsResponse, WebsetItem};
pub use websets::{
    CreateWebsetParams, CriterionParam, EnrichmentParam, EntityParam,
    ListWebsetsResponse, SearchParams, Webset, WebsetStatus,
};
