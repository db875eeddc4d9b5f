//! Follow-up operations on an existing webset.

use exa_websets::types::ListParams;

use crate::WebsetTools;
use crate::error::WebsetError;
use crate::types::{ListItemsInput, WebsetIdInput, WebsetStatusOutput};

fn require_id(webset_id: &str) -> Result<&str, WebsetError> {
    let id = webset_id.trim();
    if id.is_empty() {
        return Err(WebsetError::InvalidInput("websetId must not be empty".into()));
    }
    Ok(id)
}

/// Report the current status of a webset.
///
/// # Errors
/// Returns [`WebsetError`] if the id is blank or the API call fails.
pub async fn webset_status(
    tools: &WebsetTools,
    input: WebsetIdInput,
) -> Result<WebsetStatusOutput, WebsetError> {
    let id = require_id(&input.webset_id)?;
    let webset = tools.exa.websets().get(id).await?;
    Ok(WebsetStatusOutput {
        webset_id: webset.id,
        status: webset.status,
        is_terminal: webset.status.is_terminal(),
    })
}

/// Fetch one page of a webset's items, passed through untouched.
///
/// # Errors
/// Returns [`WebsetError`] if the id is blank or the API call fails.
pub async fn list_items(
    tools: &WebsetTools,
    input: ListItemsInput,
) -> Result<serde_json::Value, WebsetError> {
    let id = require_id(&input.webset_id)?;
    let mut params = ListParams::new();
    if let Some(limit) = input.limit {
        params = params.with_limit(limit);
    }
    if let Some(cursor) = input.cursor {
        params = params.with_cursor(cursor);
    }
    Ok(tools.exa.items().list_raw(id, &params).await?)
}

/// Stop a running webset.
///
/// # Errors
/// Returns [`WebsetError`] if the id is blank or the API call fails.
pub async fn cancel_webset(
    tools: &WebsetTools,
    input: WebsetIdInput,
) -> Result<WebsetStatusOutput, WebsetError> {
    let id = require_id(&input.webset_id)?;
    let webset = tools.exa.websets().cancel(id).await?;
    tracing::info!(webset_id = %webset.id, status = %webset.status, "webset cancelled");
    Ok(WebsetStatusOutput {
        webset_id: webset.id,
        status: webset.status,
        is_terminal: webset.status.is_terminal(),
    })
}
