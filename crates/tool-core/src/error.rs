//! Unified error type for tools.

use thiserror::Error;

/// Error type returned by tool operations.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Invalid input provided to the tool.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Missing or invalid configuration, such as an absent credential.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error during tool execution.
    #[error("internal error: {0}")]
    Internal(String),

    /// Error from an external service.
    #[error("external service error: {0}")]
    External(String),

    /// The operation did not finish in the allotted time.
    #[error("timed out: {0}")]
    Timeout(String),
}

impl ToolError {
    /// Create an invalid input error.
    pub fn invalid_input<S: ToString>(s: S) -> Self {
        ToolError::InvalidInput(s.to_string())
    }

    /// Create a configuration error.
    pub fn config<S: ToString>(s: S) -> Self {
        ToolError::Config(s.to_string())
    }

    /// Create an internal error.
    pub fn internal<S: ToString>(s: S) -> Self {
        ToolError::Internal(s.to_string())
    }

    /// Create an external service error.
    pub fn external<S: ToString>(s: S) -> Self {
        ToolError::External(s.to_string())
    }

    /// Create a timeout error.
    pub fn timeout<S: ToString>(s: S) -> Self {
        ToolError::Timeout(s.to_string())
    }
}
