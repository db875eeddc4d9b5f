//! Tool trait implementations and registry builder.

use std::sync::Arc;

use websets_tool_core::context::ToolContext;
use websets_tool_core::error::ToolError;
use websets_tool_core::tool::Tool;
use websets_tool_core::{BoxFuture, ToolRegistry};

use crate::WebsetTools;
use crate::types::{
    CreateWebsetInput, CreateWebsetOutput, ListItemsInput, WebsetIdInput, WebsetStatusOutput,
};

// ============================================================================
// CreateWebsetTool
// ============================================================================

/// Tool that creates a webset and by default waits for its items.
#[derive(Clone)]
pub struct CreateWebsetTool {
    tools: Arc<WebsetTools>,
}

impl CreateWebsetTool {
    /// Create a new `CreateWebsetTool` with shared state.
    #[must_use]
    pub const fn new(tools: Arc<WebsetTools>) -> Self {
        Self { tools }
    }
}

impl Tool for CreateWebsetTool {
    type Input = CreateWebsetInput;
    type Output = CreateWebsetOutput;

    const NAME: &'static str = "create_webset";
    const DESCRIPTION: &'static str = "Create an Exa WebSet: an asynchronous search that finds and verifies entities (companies, people, articles) matching a natural-language query, optionally verifying a criterion and running enrichments on each item. By default waits up to about a minute and returns the found items; set waitForCompletion=false to get the websetId back immediately.";

    fn call(
        &self,
        input: Self::Input,
        ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        let caller = ctx.caller();
        Box::pin(async move {
            tracing::debug!(caller, query = %input.query, "create_webset called");
            crate::workflow::submit_and_optionally_wait(&tools, input)
                .await
                .map_err(ToolError::from)
        })
    }
}

// ============================================================================
// WebsetStatusTool
// ============================================================================

/// Tool that reports a webset's current status.
#[derive(Clone)]
pub struct WebsetStatusTool {
    tools: Arc<WebsetTools>,
}

impl WebsetStatusTool {
    /// Create a new `WebsetStatusTool` with shared state.
    #[must_use]
    pub const fn new(tools: Arc<WebsetTools>) -> Self {
        Self { tools }
    }
}

impl Tool for WebsetStatusTool {
    type Input = WebsetIdInput;
    type Output = WebsetStatusOutput;

    const NAME: &'static str = "get_webset_status";
    const DESCRIPTION: &'static str = "Get the status of a webset created with create_webset. completed and idle mean the items are ready; failed and error mean it will not produce results.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        Box::pin(async move {
            crate::manage::webset_status(&tools, input)
                .await
                .map_err(ToolError::from)
        })
    }
}

// ============================================================================
// ListWebsetItemsTool
// ============================================================================

/// Tool that pages through the items of a webset.
#[derive(Clone)]
pub struct ListWebsetItemsTool {
    tools: Arc<WebsetTools>,
}

impl ListWebsetItemsTool {
    /// Create a new `ListWebsetItemsTool` with shared state.
    #[must_use]
    pub const fn new(tools: Arc<WebsetTools>) -> Self {
        Self { tools }
    }
}

impl Tool for ListWebsetItemsTool {
    type Input = ListItemsInput;
    type Output = serde_json::Value;

    const NAME: &'static str = "list_webset_items";
    const DESCRIPTION: &'static str = "List the items a webset has found so far, with verification results and enrichments. Pass nextCursor as cursor to get the next page.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        Box::pin(async move {
            crate::manage::list_items(&tools, input)
                .await
                .map_err(ToolError::from)
        })
    }
}

// ============================================================================
// CancelWebsetTool
// ============================================================================

/// Tool that stops a running webset.
#[derive(Clone)]
pub struct CancelWebsetTool {
    tools: Arc<WebsetTools>,
}

impl CancelWebsetTool {
    /// Create a new `CancelWebsetTool` with shared state.
    #[must_use]
    pub const fn new(tools: Arc<WebsetTools>) -> Self {
        Self { tools }
    }
}

impl Tool for CancelWebsetTool {
    type Input = WebsetIdInput;
    type Output = WebsetStatusOutput;

    const NAME: &'static str = "cancel_webset";
    const DESCRIPTION: &'static str = "Cancel a running webset. Items found before cancellation remain available through list_webset_items.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        Box::pin(async move {
            crate::manage::cancel_webset(&tools, input)
                .await
                .map_err(ToolError::from)
        })
    }
}

// ============================================================================
// Registry Builder
// ============================================================================

/// Build a `ToolRegistry` containing all websets tools.
pub fn build_registry(tools: Arc<WebsetTools>) -> ToolRegistry {
    ToolRegistry::builder()
        .register::<CreateWebsetTool, ()>(CreateWebsetTool::new(Arc::clone(&tools)))
        .register::<WebsetStatusTool, ()>(WebsetStatusTool::new(Arc::clone(&tools)))
        .register::<ListWebsetItemsTool, ()>(ListWebsetItemsTool::new(Arc::clone(&tools)))
        .register::<CancelWebsetTool, ()>(CancelWebsetTool::new(tools))
        .finish()
}
