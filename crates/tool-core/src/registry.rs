//! Tool registry for JSON dispatch and type-safe native calls.

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::outcome::ToolOutcome;
use crate::tool::{Tool, ToolCodec};
use futures::future::BoxFuture;
use schemars::Schema;
use serde_json::Value;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Type-erased tool for dynamic dispatch.
pub trait ErasedTool: Send + Sync {
    /// Get the tool's name.
    fn name(&self) -> &'static str;

    /// Get the tool's description.
    fn description(&self) -> &'static str;

    /// Get the input JSON schema.
    fn input_schema(&self) -> Schema;

    /// Call the tool with JSON arguments.
    fn call_json(
        &self,
        args: Value,
        ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Value, ToolError>>;
}

/// Registry of tools, keyed by name.
pub struct ToolRegistry {
    map: BTreeMap<String, Arc<dyn ErasedTool>>,
}

impl ToolRegistry {
    /// Create a new registry builder.
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// List all tool names in the registry, sorted.
    pub fn list_names(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ErasedTool>> {
        self.map.get(name)
    }

    /// Dispatch a tool call using JSON arguments.
    pub async fn dispatch_json(
        &self,
        name: &str,
        args: Value,
        ctx: &ToolContext,
    ) -> Result<Value, ToolError> {
        let entry = self
            .map
            .get(name)
            .ok_or_else(|| ToolError::invalid_input(format!("Unknown tool: {name}")))?;
        entry.call_json(args, ctx).await
    }

    /// Dispatch a tool call and fold any error into a failure envelope.
    ///
    /// Never returns an error: every failure becomes
    /// [`ToolOutcome::Failure`] and is logged.
    pub async fn dispatch_outcome(&self, name: &str, args: Value, ctx: &ToolContext) -> ToolOutcome {
        let result = self.dispatch_json(name, args, ctx).await;
        if let Err(e) = &result {
            tracing::warn!(tool = name, caller = ctx.caller(), error = %e, "tool call failed");
        }
        ToolOutcome::from(result)
    }

    /// Check if a tool is registered by name.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Builder for constructing a [`ToolRegistry`].
#[derive(Default)]
pub struct ToolRegistryBuilder {
    items: Vec<(String, Arc<dyn ErasedTool>)>,
}

impl ToolRegistryBuilder {
    /// Register a tool with its codec.
    ///
    /// Use `()` as the codec when the tool's Input/Output types
    /// already implement serde and schemars traits.
    pub fn register<T, C>(mut self, tool: T) -> Self
    where
        T: Tool + Clone + 'static,
        C: ToolCodec<T> + 'static,
    {
        struct Impl<T: Tool + Clone, C: ToolCodec<T>> {
            tool: T,
            _codec: PhantomData<C>,
        }

        impl<T: Tool + Clone, C: ToolCodec<T>> ErasedTool for Impl<T, C> {
            fn name(&self) -> &'static str {
                T::NAME
            }

            fn description(&self) -> &'static str {
                T::DESCRIPTION
            }

            fn input_schema(&self) -> Schema {
                schemars::schema_for!(C::WireIn)
            }

            fn call_json(
                &self,
                args: Value,
                ctx: &ToolContext,
            ) -> BoxFuture<'static, Result<Value, ToolError>> {
                let wire_in: Result<C::WireIn, _> = serde_json::from_value(args);
                let ctx = ctx.clone();
                let tool = self.tool.clone();

                match wire_in {
                    Err(e) => Box::pin(async move { Err(ToolError::invalid_input(e.to_string())) }),
                    Ok(wire) => match C::decode(wire) {
                        Err(e) => Box::pin(async move { Err(e) }),
                        Ok(native_in) => {
                            let fut = tool.call(native_in, &ctx);
                            Box::pin(async move {
                                let out = fut.await?;
                                let wired = C::encode(out)?;
                                serde_json::to_value(wired)
                                    .map_err(|e| ToolError::internal(e.to_string()))
                            })
                        }
                    },
                }
            }
        }

        let erased: Arc<dyn ErasedTool> = Arc::new(Impl::<T, C> {
            tool,
            _codec: PhantomData,
        });
        self.items.push((T::NAME.to_string(), erased));
        self
    }

    /// Build the registry from registered tools.
    ///
    /// A later registration with a duplicate name replaces the earlier one.
    pub fn finish(self) -> ToolRegistry {
        ToolRegistry {
            map: self.items.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct LookupTool;

    impl Tool for LookupTool {
        type Input = String;
        type Output = String;
        const NAME: &'static str = "lookup";
        const DESCRIPTION: &'static str = "Look up a webset by id";

        fn call(
            &self,
            input: Self::Input,
            _ctx: &ToolContext,
        ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
            Box::pin(async move {
                if input.is_empty() {
                    return Err(ToolError::invalid_input("websetId must not be empty"));
                }
                Ok(format!("webset {input}"))
            })
        }
    }

    fn registry() -> ToolRegistry {
        ToolRegistry::builder()
            .register::<LookupTool, ()>(LookupTool)
            .finish()
    }

    #[test]
    fn builder_registers_by_name() {
        let registry = registry();
        assert!(registry.contains("lookup"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.list_names(), vec!["lookup"]);
        assert_eq!(
            registry.get("lookup").unwrap().description(),
            "Look up a webset by id"
        );
    }

    #[test]
    fn empty_builder_yields_empty_registry() {
        let empty = ToolRegistry::builder().finish();
        assert!(empty.is_empty());
        assert!(empty.list_names().is_empty());
    }

    #[test]
    fn input_schema_describes_wire_type() {
        let schema = registry().get("lookup").unwrap().input_schema();
        assert_eq!(schema.get("type"), Some(&serde_json::json!("string")));
    }

    #[tokio::test]
    async fn dispatch_json_round_trips_through_codec() {
        let out = registry()
            .dispatch_json("lookup", serde_json::json!("ws_1"), &ToolContext::new())
            .await
            .unwrap();
        assert_eq!(out, serde_json::json!("webset ws_1"));
    }

    #[tokio::test]
    async fn dispatch_json_rejects_bad_arguments() {
        let err = registry()
            .dispatch_json("lookup", serde_json::json!(42), &ToolContext::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn dispatch_outcome_wraps_errors() {
        let registry = registry();
        let ctx = ToolContext::for_caller("test");

        let outcome = registry
            .dispatch_outcome("lookup", serde_json::json!(""), &ctx)
            .await;
        assert!(outcome.is_error());

        let outcome = registry
            .dispatch_outcome("missing", serde_json::json!("x"), &ctx)
            .await;
        assert_eq!(
            outcome.into_json()["message"],
            "invalid input: Unknown tool: missing"
        );
    }
}
