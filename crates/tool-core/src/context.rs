//! Tool execution context.

/// Context passed to tool executions.
///
/// Carries the name of the surface that dispatched the call so tools can tag
/// their log lines with it.
#[derive(Clone, Debug)]
pub struct ToolContext {
    caller: &'static str,
}

impl Default for ToolContext {
    fn default() -> Self {
        Self { caller: "native" }
    }
}

impl ToolContext {
    /// Create a new default context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for calls arriving through the named surface (e.g. `cli`).
    pub fn for_caller(caller: &'static str) -> Self {
        Self { caller }
    }

    /// Name of the dispatching surface.
    pub fn caller(&self) -> &'static str {
        self.caller
    }
}
