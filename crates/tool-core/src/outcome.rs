//! Caller-facing result envelope.
//!
//! Every dispatched call ends in exactly one [`ToolOutcome`]: the tool's JSON
//! output on success, or `{"isError": true, "message": ...}` on failure.

use serde::Serialize;
use serde_json::Value;

use crate::error::ToolError;

/// Structured result of a dispatched tool call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    /// The tool's output, passed through as JSON.
    Success(Value),
    /// A failure marker plus a human-readable message.
    #[serde(rename_all = "camelCase")]
    Failure {
        /// Always `true`; lets callers branch on a single key.
        is_error: bool,
        /// Description of what went wrong.
        message: String,
    },
}

impl ToolOutcome {
    /// Build a failure outcome from a tool error.
    pub fn failure(err: &ToolError) -> Self {
        ToolOutcome::Failure {
            is_error: true,
            message: err.to_string(),
        }
    }

    /// Whether this outcome reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, ToolOutcome::Failure { .. })
    }

    /// Convert into a JSON value.
    pub fn into_json(self) -> Value {
        match self {
            ToolOutcome::Success(v) => v,
            ToolOutcome::Failure { is_error, message } => serde_json::json!({
                "isError": is_error,
                "message": message,
            }),
        }
    }
}

impl From<Result<Value, ToolError>> for ToolOutcome {
    fn from(result: Result<Value, ToolError>) -> Self {
        match result {
            Ok(v) => ToolOutcome::Success(v),
            Err(e) => ToolOutcome::failure(&e),
        }
    }
}
