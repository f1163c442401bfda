//! Core types for static tool metadata.

use schemars::{JsonSchema, schema_for};
use serde_json::Value;

use crate::tools::ToolId;

/// Descriptor for a single tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolMetadata {
    pub tool: ToolId,
    pub description: &'static str,
    pub schema: Value,
}

impl ToolMetadata {
    pub fn name(&self) -> &'static str {
        self.tool.name()
    }
}

/// Helper to build schema from Args type.
pub fn build_schema<T: JsonSchema>() -> Value {
    serde_json::to_value(schema_for!(T)).unwrap_or(Value::Null)
}
