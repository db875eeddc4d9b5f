//! Core traits and types shared by the websets tools.
//!
//! This crate provides:
//! - [`Tool`] trait: native-first tool definition with no serde bounds
//! - [`ToolCodec`] trait: serialization boundary for JSON dispatch
//! - [`ToolRegistry`]: tool storage with JSON dispatch
//! - [`ToolOutcome`]: the caller-facing success/failure envelope

pub mod context;
pub mod error;
pub mod outcome;
pub mod registry;
pub mod tool;

pub use context::ToolContext;
pub use error::ToolError;
pub use outcome::ToolOutcome;
pub use registry::{ErasedTool, ToolRegistry, ToolRegistryBuilder};
pub use tool::{Tool, ToolCodec};

// Re-export BoxFuture so tool crates don't need a direct futures dependency
pub use futures::future::BoxFuture;
