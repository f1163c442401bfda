//! Error taxonomy for tool invocations.
//!
//! Every variant is converted into a failure envelope at the dispatch
//! boundary; none of them terminate the process.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

use crate::tools::ToolId;

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for '{tool}': {reason}")]
    InvalidArguments { tool: ToolId, reason: String },

    #[error("'{0}' requires an authentication token, but AUTH_TOKEN is not configured")]
    MissingCredential(ToolId),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("{}", backend_message(.status, .detail))]
    Backend { status: u16, detail: String },

    #[error("{0}")]
    PolicyRejected(String),

    #[error("Unexpected backend response: {0}")]
    UnexpectedResponse(String),
}

impl AdapterError {
    /// Map a reqwest failure, separating timeouts from other transport errors.
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            AdapterError::Timeout(timeout)
        } else {
            AdapterError::Transport(err)
        }
    }

    /// HTTP status of the failed backend call, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AdapterError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable machine-readable category, reported as the envelope's `error`.
    pub fn kind(&self) -> &'static str {
        match self {
            AdapterError::UnknownTool(_) => "unknown_tool",
            AdapterError::InvalidArguments { .. } => "invalid_arguments",
            AdapterError::MissingCredential(_) => "missing_credential",
            AdapterError::Timeout(_) => "timeout",
            AdapterError::Transport(_) => "transport",
            AdapterError::Backend { status: 404, .. } => "not_found",
            AdapterError::Backend { status: 401, .. } => "unauthenticated",
            AdapterError::Backend { status: 403, .. } => "forbidden",
            AdapterError::Backend { .. } => "backend",
            AdapterError::PolicyRejected(_) => "policy_rejected",
            AdapterError::UnexpectedResponse(_) => "unexpected_response",
        }
    }
}

fn backend_message(status: &u16, detail: &str) -> String {
    match status {
        404 => format!("Resource not found: {detail}"),
        401 => format!("Authentication failed: {detail}"),
        403 => format!("Access denied: {detail}"),
        _ => format!("Backend request failed with status {status}: {detail}"),
    }
}

/// Best human-readable explanation for a non-2xx response.
///
/// Prefers the backend's `detail` field, then the raw body, then the
/// canonical reason phrase.
pub fn backend_detail(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body)
        && let Some(detail) = json.get("detail")
    {
        return match detail {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
