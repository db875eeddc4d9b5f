//! Create a webset, optionally wait for it, and fetch its items.

use exa_websets::config::Config;
use exa_websets::types::{CreateWebsetParams, ListParams, WebsetStatus};
use exa_websets::Client;
use tracing::{debug, info, warn};

use crate::error::WebsetError;
use crate::poll::PollOptions;
use crate::types::{CreateWebsetInput, CreateWebsetOutput, WebsetDispatched};
use crate::WebsetTools;

/// Submit a webset and, unless the input opts out, wait for its items.
///
/// The credential is checked before anything else so a missing key never
/// results in a request.
///
/// # Errors
/// Returns [`WebsetError`] describing the configuration problem, API failure,
/// failed job or timeout.
pub async fn submit_and_optionally_wait(
    tools: &WebsetTools,
    input: CreateWebsetInput,
) -> Result<CreateWebsetOutput, WebsetError> {
    tools.exa.config().validate_auth()?;

    let wait = input.wait_for_completion;
    let params = build_params(input)?;

    let webset = tools.exa.websets().create(params).await?;
    info!(webset_id = %webset.id, status = %webset.status, wait, "webset created");

    if !wait {
        return Ok(CreateWebsetOutput::Dispatched(WebsetDispatched {
            message: format!(
                "Webset created and running. Check progress with get_webset_status and fetch results with list_webset_items using websetId {}.",
                webset.id
            ),
            webset_id: webset.id,
            status: WebsetStatus::Running,
        }));
    }

    let items = wait_for_items(&tools.exa, &webset.id, tools.poll).await?;
    Ok(CreateWebsetOutput::Completed(items))
}

/// Turn tool input into a creation payload, leaving out everything unset.
///
/// # Errors
/// Returns [`WebsetError::InvalidInput`] for a blank query or a zero count.
pub fn build_params(input: CreateWebsetInput) -> Result<CreateWebsetParams, WebsetError> {
    let query = input.query.trim();
    if query.is_empty() {
        return Err(WebsetError::InvalidInput("query must not be empty".into()));
    }

    let mut params = CreateWebsetParams::new(query);

    if let Some(count) = input.count {
        if count == 0 {
            return Err(WebsetError::InvalidInput(
                "count must be a positive integer".into(),
            ));
        }
        params = params.with_count(count);
    }
    if let Some(criteria) = non_blank(input.criteria) {
        params = params.with_criterion(criteria);
    }
    if let Some(entity) = non_blank(input.entity) {
        params = params.with_entity(entity);
    }
    for enrichment in input.enrichments.unwrap_or_default() {
        params = params.with_enrichment(enrichment.description, enrichment.format);
    }
    if let Some(metadata) = input.metadata {
        params = params.with_metadata(metadata);
    }

    Ok(params)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Poll a webset until it completes, fails, or the attempts run out.
///
/// Sleeps `poll.interval` between consecutive status checks. A failed status
/// check is logged and retried; if the final check fails the error is carried
/// in the resulting timeout.
///
/// # Errors
/// [`WebsetError::JobFailed`] when the webset reports `failed` or `error`,
/// [`WebsetError::Timeout`] when no terminal state is seen in time, and
/// [`WebsetError::Api`] when fetching the items fails.
pub async fn wait_for_items<C: Config>(
    client: &Client<C>,
    webset_id: &str,
    poll: PollOptions,
) -> Result<serde_json::Value, WebsetError> {
    let attempts = poll.max_attempts.max(1);
    let mut last_error = None;

    for attempt in 1..=attempts {
        if attempt > 1 {
            tokio::time::sleep(poll.interval).await;
        }

        match client.websets().get(webset_id).await {
            Ok(webset) if webset.status.is_complete() => {
                info!(webset_id, attempt, status = %webset.status, "webset finished");
                let items = client
                    .items()
                    .list_raw(webset_id, &ListParams::new())
                    .await?;
                return Ok(items);
            }
            Ok(webset) if webset.status.is_failure() => {
                warn!(webset_id, attempt, status = %webset.status, "webset failed");
                return Err(WebsetError::JobFailed {
                    id: webset_id.to_string(),
                    status: webset.status,
                });
            }
            Ok(webset) => {
                debug!(webset_id, attempt, attempts, status = %webset.status, "webset still running");
                last_error = None;
            }
            Err(e) => {
                warn!(webset_id, attempt, attempts, error = %e, "webset status check failed");
                last_error = Some(e.to_string());
            }
        }
    }

    Err(WebsetError::Timeout {
        id: webset_id.to_string(),
        attempts,
        waited: poll.with_max_attempts(attempts).max_wait(),
        last_error,
    })
}
