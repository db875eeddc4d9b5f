//! Core tool traits for native-first tool definitions.

use crate::context::ToolContext;
use crate::error::ToolError;
use futures::future::BoxFuture;

/// Native-first Tool trait with NO serde bounds.
///
/// Serialization is handled separately by [`ToolCodec`] at the JSON boundary.
///
/// # Example
///
/// ```ignore
/// use websets_tool_core::{BoxFuture, Tool, ToolContext, ToolError};
///
/// #[derive(Clone)]
/// struct EchoStatus;
///
/// impl Tool for EchoStatus {
///     type Input = String;
///     type Output = String;
///     const NAME: &'static str = "echo_status";
///     const DESCRIPTION: &'static str = "Echo a webset id back";
///
///     fn call(&self, input: Self::Input, _ctx: &ToolContext)
///         -> BoxFuture<'static, Result<Self::Output, ToolError>>
///     {
///         Box::pin(async move { Ok(input) })
///     }
/// }
/// ```
pub trait Tool: Send + Sync + 'static {
    /// Input type for the tool (no serde bounds required).
    type Input: Send + 'static;

    /// Output type for the tool (no serde bounds required).
    type Output: Send + 'static;

    /// Unique name identifying the tool.
    const NAME: &'static str;

    /// Human-readable description of what the tool does.
    const DESCRIPTION: &'static str;

    /// Execute the tool with the given input and context.
    fn call(
        &self,
        input: Self::Input,
        ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>>;
}

/// Codec for converting tool inputs/outputs at the JSON boundary.
///
/// Serde and schemars bounds live here, not on [`Tool`].
/// Use `()` as the codec when `T::Input` and `T::Output` already implement
/// the required traits.
pub trait ToolCodec<T: Tool>: Send + Sync + 'static {
    /// Wire format for input (must be deserializable and have JSON schema).
    type WireIn: serde::de::DeserializeOwned + schemars::JsonSchema + Send + 'static;

    /// Wire format for output.
    type WireOut: serde::Serialize + Send + 'static;

    /// Decode wire input to native input.
    fn decode(wire: Self::WireIn) -> Result<T::Input, ToolError>;

    /// Encode native output to wire output.
    fn encode(native: T::Output) -> Result<Self::WireOut, ToolError>;
}

/// Identity codec: when Input/Output already have serde/schemars, use `()` as codec.
impl<T> ToolCodec<T> for ()
where
    T: Tool,
    T::Input: serde::de::DeserializeOwned + schemars::JsonSchema,
    T::Output: serde::Serialize,
{
    type WireIn = T::Input;
    type WireOut = T::Output;

    fn decode(wire: Self::WireIn) -> Result<T::Input, ToolError> {
        Ok(wire)
    }

    fn encode(native: T::Output) -> Result<Self::WireOut, ToolError> {
        Ok(native)
    }
}
