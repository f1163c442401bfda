use anyhow::Result;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    transport::stdio,
};
use std::sync::Arc;

use crate::config::{AdapterConfig, Variant};
use crate::error::AdapterError;
use crate::tools::Dispatcher;

/// MCP server exposing the prompt platform tools over stdio.
///
/// Protocol plumbing only; all tool semantics live in [`Dispatcher`].
pub struct PromptMcpServer {
    dispatcher: Dispatcher,
}

impl PromptMcpServer {
    pub fn new(config: AdapterConfig) -> Result<Self, AdapterError> {
        if config.variant.uses_credential() && config.credential().is_none() {
            log::warn!(
                "AUTH_TOKEN is not set; create_prompt and get_user_prompts will fail until it is configured"
            );
        }

        let dispatcher = Dispatcher::new(config)?;
        log::info!(
            "Prompt MCP server initialized ({} variant, {} tools, backend {})",
            dispatcher.variant(),
            dispatcher.list_tools().len(),
            dispatcher.config().base_url
        );

        Ok(Self { dispatcher })
    }

    /// Descriptors in MCP form, in registry order.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher
            .list_tools()
            .iter()
            .map(|meta| {
                // Convert schema Value to Arc<JsonObject>
                let schema_obj = match meta.schema.clone() {
                    serde_json::Value::Object(obj) => Arc::new(obj),
                    _ => Arc::new(serde_json::Map::new()),
                };
                Tool::new(meta.name(), meta.description, schema_obj)
            })
            .collect()
    }

    /// Serve the stdio server
    pub async fn serve_stdio(self) -> Result<()> {
        log::info!("Starting stdio server");

        let service = self.serve(stdio()).await.inspect_err(|e| {
            log::error!("serving error: {e:?}");
        })?;
        service.waiting().await?;

        log::info!("Stdio server stopped");
        Ok(())
    }
}

impl ServerHandler for PromptMcpServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = match self.dispatcher.variant() {
            Variant::Authenticated => {
                "Prompt library tools: search, read, and create prompts on behalf of the configured user."
            }
            Variant::Public => {
                "Prompt platform tools: browse featured, trending and public prompts (read-only)."
            }
        };

        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(instructions.to_string()),
            ..Default::default()
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let envelope = self
            .dispatcher
            .call_tool(&request.name, request.arguments)
            .await;
        Ok(envelope.into_call_tool_result())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.tools();
        log::debug!("Serving {} tools", tools.len());
        Ok(ListToolsResult::with_all_items(tools))
    }
}
