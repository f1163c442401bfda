//! Resolves invocations to tools and turns every outcome into an envelope.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::backend::BackendClient;
use crate::config::{AdapterConfig, Variant};
use crate::envelope::ResultEnvelope;
use crate::error::AdapterError;
use crate::stdio::metadata::{ToolMetadata, tool_metadata};
use crate::tools::ToolId;
use crate::tools::args::{
    CreatePromptArgs, FeaturedPromptsArgs, NoArgs, PlatformFeaturedArgs, PromptIdArgs,
    SearchFeaturedArgs, SearchPromptsArgs, TrendingArgs, UserPromptsArgs,
};

/// One dispatcher serves both variants; the variant decides which tools
/// resolve and whether the credential is ever sent.
///
/// Holds only read-only state, so concurrent calls need no locking.
#[derive(Debug)]
pub struct Dispatcher {
    pub(crate) config: AdapterConfig,
    pub(crate) backend: BackendClient,
}

impl Dispatcher {
    pub fn new(config: AdapterConfig) -> Result<Self, AdapterError> {
        let backend = BackendClient::new(&config.base_url, config.timeout)?;
        Ok(Self { config, backend })
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Descriptors for the active variant, in stable order.
    pub fn list_tools(&self) -> &'static [ToolMetadata] {
        tool_metadata(self.config.variant)
    }

    /// Run one invocation. Never fails: errors come back as failure envelopes.
    pub async fn call_tool(&self, name: &str, arguments: Option<Map<String, Value>>) -> ResultEnvelope {
        log::debug!("Dispatching tool call '{name}'");

        match self.dispatch(name, arguments).await {
            Ok(envelope) => envelope,
            Err(err) => {
                log::warn!("Tool '{name}' failed: {err}");
                ResultEnvelope::failure(&err)
            }
        }
    }

    fn resolve(&self, name: &str) -> Result<ToolId, AdapterError> {
        ToolId::from_name(name)
            .filter(|tool| self.list_tools().iter().any(|meta| meta.tool == *tool))
            .ok_or_else(|| AdapterError::UnknownTool(name.to_string()))
    }

    async fn dispatch(
        &self,
        name: &str,
        arguments: Option<Map<String, Value>>,
    ) -> Result<ResultEnvelope, AdapterError> {
        let tool = self.resolve(name)?;
        let args = Value::Object(arguments.unwrap_or_default());

        match tool {
            ToolId::SearchPrompts => {
                self.search_prompts(parse_args::<SearchPromptsArgs>(tool, args)?)
                    .await
            }
            ToolId::GetPromptById => {
                let args = parse_args::<PromptIdArgs>(tool, args)?;
                self.get_prompt_by_id(args.id).await
            }
            ToolId::GetCategories => {
                parse_args::<NoArgs>(tool, args)?;
                self.get_categories().await
            }
            ToolId::GetFeaturedPrompts => match self.config.variant {
                Variant::Authenticated => {
                    let args = parse_args::<FeaturedPromptsArgs>(tool, args)?;
                    self.get_featured_prompts(args.limit, None).await
                }
                Variant::Public => {
                    let args = parse_args::<PlatformFeaturedArgs>(tool, args)?;
                    self.get_featured_prompts(args.limit, args.category_id)
                        .await
                }
            },
            ToolId::CreatePrompt => {
                let args = parse_args::<CreatePromptArgs>(tool, args)?;
                let token = self.credential_for(tool)?;
                self.create_prompt(&args, token).await
            }
            ToolId::GetUserPrompts => {
                let args = parse_args::<UserPromptsArgs>(tool, args)?;
                let token = self.credential_for(tool)?;
                self.get_user_prompts(&args, token).await
            }
            ToolId::SearchFeaturedPrompts => {
                self.search_featured_prompts(parse_args::<SearchFeaturedArgs>(tool, args)?)
                    .await
            }
            ToolId::GetTrendingPrompts => {
                self.get_trending_prompts(parse_args::<TrendingArgs>(tool, args)?)
                    .await
            }
        }
    }

    fn credential_for(&self, tool: ToolId) -> Result<&str, AdapterError> {
        self.config
            .credential()
            .ok_or(AdapterError::MissingCredential(tool))
    }
}

fn parse_args<T: DeserializeOwned>(tool: ToolId, args: Value) -> Result<T, AdapterError> {
    serde_json::from_value(args).map_err(|e| AdapterError::InvalidArguments {
        tool,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Port 9 (discard) is never served in tests; any call that slipped
    // through validation would surface as a transport error instead.
    fn dispatcher(variant: Variant) -> Dispatcher {
        Dispatcher::new(AdapterConfig::new(variant, "http://127.0.0.1:9")).unwrap()
    }

    fn args(value: Value) -> Option<Map<String, Value>> {
        value.as_object().cloned()
    }

    #[tokio::test]
    async fn test_unknown_tool_is_named() {
        let envelope = dispatcher(Variant::Authenticated)
            .call_tool("drop_tables", None)
            .await;
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("unknown_tool"));
        assert!(envelope.message.contains("drop_tables"));
    }

    #[tokio::test]
    async fn test_tool_from_other_variant_is_unknown() {
        let envelope = dispatcher(Variant::Public)
            .call_tool("create_prompt", args(json!({ "name_zh": "a", "content": "b", "category_id": 1 })))
            .await;
        assert_eq!(envelope.error.as_deref(), Some("unknown_tool"));

        let envelope = dispatcher(Variant::Authenticated)
            .call_tool("get_trending_prompts", None)
            .await;
        assert_eq!(envelope.error.as_deref(), Some("unknown_tool"));
    }

    #[tokio::test]
    async fn test_invalid_arguments_rejected_before_network() {
        let envelope = dispatcher(Variant::Authenticated)
            .call_tool("search_prompts", args(json!({ "page": 1 })))
            .await;
        assert_eq!(envelope.error.as_deref(), Some("invalid_arguments"));
        assert!(envelope.message.contains("query"));

        let envelope = dispatcher(Variant::Authenticated)
            .call_tool("get_prompt_by_id", args(json!({ "id": "abc" })))
            .await;
        assert_eq!(envelope.error.as_deref(), Some("invalid_arguments"));
    }

    #[tokio::test]
    async fn test_missing_credential_fails_fast() {
        let envelope = dispatcher(Variant::Authenticated)
            .call_tool(
                "create_prompt",
                args(json!({ "name_zh": "a", "content": "b", "category_id": 1 })),
            )
            .await;
        assert_eq!(envelope.error.as_deref(), Some("missing_credential"));
        assert_eq!(envelope.status_code, None);

        let envelope = dispatcher(Variant::Authenticated)
            .call_tool("get_user_prompts", None)
            .await;
        assert_eq!(envelope.error.as_deref(), Some("missing_credential"));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let envelope = dispatcher(Variant::Authenticated)
            .call_tool("get_categories", None)
            .await;
        assert!(!envelope.success);
        assert!(matches!(envelope.error.as_deref(), Some("transport") | Some("timeout")));
        assert_eq!(envelope.status_code, None);
    }
}
