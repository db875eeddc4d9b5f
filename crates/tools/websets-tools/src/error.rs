//! Failure categories of the webset workflow.

use std::time::Duration;

use exa_websets::ExaError;
use exa_websets::types::WebsetStatus;
use thiserror::Error;
use websets_tool_core::ToolError;

/// Everything that can end a webset call without a result.
#[derive(Debug, Error)]
pub enum WebsetError {
    /// Missing or unusable configuration; no request was sent.
    #[error("{0}")]
    Config(String),

    /// The request was rejected before reaching the service.
    #[error("{0}")]
    InvalidInput(String),

    /// A call to the service failed.
    #[error("Exa API error{}: {message}", status_suffix(.status))]
    Api {
        /// HTTP status, when the server answered
        status: Option<u16>,
        /// Server message, or the transport error text
        message: String,
    },

    /// The webset itself ended in a failure state.
    #[error("webset {id} ended with status '{status}'")]
    JobFailed {
        /// Webset identifier
        id: String,
        /// The reported failure status
        status: WebsetStatus,
    },

    /// The webset did not reach a terminal state in time.
    #[error(
        "webset {id} did not finish after {attempts} status checks over {}s{}",
        secs(.waited),
        last_error_suffix(.last_error)
    )]
    Timeout {
        /// Webset identifier
        id: String,
        /// Number of status checks made
        attempts: u32,
        /// Time spent waiting between checks
        waited: Duration,
        /// Failure of the final status check, if it failed
        last_error: Option<String>,
    },
}

const fn secs(d: &Duration) -> u64 {
    d.as_secs()
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map_or_else(String::new, |code| format!(" ({code})"))
}

fn last_error_suffix(last_error: &Option<String>) -> String {
    last_error
        .as_deref()
        .map_or_else(String::new, |e| format!("; last status check failed: {e}"))
}

impl WebsetError {
    /// Classify a client error.
    #[must_use]
    pub fn from_exa(err: &ExaError) -> Self {
        match err {
            ExaError::Config(msg) => Self::Config(msg.clone()),
            ExaError::InvalidArgument(msg) => Self::InvalidInput(msg.clone()),
            other => Self::Api {
                status: other.status_code(),
                message: other.detail(),
            },
        }
    }
}

impl From<ExaError> for WebsetError {
    fn from(err: ExaError) -> Self {
        Self::from_exa(&err)
    }
}

impl From<WebsetError> for ToolError {
    fn from(err: WebsetError) -> Self {
        match err {
            WebsetError::Config(_) => Self::config(err),
            WebsetError::InvalidInput(_) => Self::invalid_input(err),
            WebsetError::Api { .. } | WebsetError::JobFailed { .. } => Self::external(err),
            WebsetError::Timeout { .. } => Self::timeout(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_includes_status_when_known() {
        let err = WebsetError::Api {
            status: Some(429),
            message: "Rate limit exceeded".into(),
        };
        assert_eq!(err.to_string(), "Exa API error (429): Rate limit exceeded");

        let err = WebsetError::Api {
            status: None,
            message: "connection refused".into(),
        };
        assert_eq!(err.to_string(), "Exa API error: connection refused");
    }

    #[test]
    fn timeout_message_mentions_last_failure() {
        let err = WebsetError::Timeout {
            id: "ws_1".into(),
            attempts: 12,
            waited: Duration::from_secs(55),
            last_error: Some("502 bad gateway".into()),
        };
        assert_eq!(
            err.to_string(),
            "webset ws_1 did not finish after 12 status checks over 55s; last status check failed: 502 bad gateway"
        );
    }

    #[test]
    fn job_failure_names_status() {
        let err = WebsetError::JobFailed {
            id: "ws_1".into(),
            status: WebsetStatus::Failed,
        };
        assert_eq!(err.to_string(), "webset ws_1 ended with status 'failed'");
    }

    #[test]
    fn config_client_error_stays_config() {
        let err = WebsetError::from(ExaError::Config("set EXA_API_KEY".into()));
        assert!(matches!(err, WebsetError::Config(_)));
        assert!(matches!(ToolError::from(err), ToolError::Config(_)));
    }

    #[test]
    fn rejected_id_is_invalid_input() {
        let err = WebsetError::from(ExaError::InvalidArgument("webset id \"..\"".into()));
        assert!(matches!(err, WebsetError::InvalidInput(_)));
        assert!(matches!(ToolError::from(err), ToolError::InvalidInput(_)));
    }

    #[test]
    fn categories_map_to_tool_errors() {
        let timeout = WebsetError::Timeout {
            id: "ws".into(),
            attempts: 1,
            waited: Duration::ZERO,
            last_error: None,
        };
        assert!(matches!(ToolError::from(timeout), ToolError::Timeout(_)));

        let failed = WebsetError::JobFailed {
            id: "ws".into(),
            status: WebsetStatus::Error,
        };
        assert!(matches!(ToolError::from(failed), ToolError::External(_)));
    }
}
