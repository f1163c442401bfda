//! The uniform result contract returned by every tool.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AdapterError;

/// Outcome of one tool invocation.
///
/// Success carries the backend payload in `data` plus a summary `message`.
/// Failure carries a human-readable `message`, an `error` category and,
/// for backend errors, the HTTP `statusCode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(
        rename = "statusCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<u16>,

    /// Tool-specific context such as `user_id` or `query`
    #[serde(flatten)]
    pub context: Map<String, Value>,
}

impl ResultEnvelope {
    pub fn success(data: Value, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            status_code: None,
            context: Map::new(),
        }
    }

    pub fn failure(err: &AdapterError) -> Self {
        Self {
            success: false,
            data: None,
            message: err.to_string(),
            error: Some(err.kind().to_string()),
            status_code: err.status_code(),
            context: Map::new(),
        }
    }

    pub fn with_context(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }

    /// Render as an MCP tool result: one pretty-printed JSON text block,
    /// flagged as an error when `success` is false.
    pub fn into_call_tool_result(self) -> CallToolResult {
        let text = match serde_json::to_string_pretty(&self) {
            Ok(text) => text,
            Err(e) => format!(r#"{{"success": false, "message": "failed to encode result: {e}"}}"#),
        };

        if self.success {
            CallToolResult::success(vec![Content::text(text)])
        } else {
            CallToolResult::error(vec![Content::text(text)])
        }
    }
}
