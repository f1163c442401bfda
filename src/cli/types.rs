use clap::Parser;
use std::time::Duration;

use crate::config::{AdapterConfig, DEFAULT_API_BASE_URL, Variant};

/// Prompt MCP Server - prompt library tools for AI agents
///
/// Variants:
/// - authenticated: search, read and create prompts as the AUTH_TOKEN user
/// - public: read-only access to featured, trending and public prompts
#[derive(Parser, Debug)]
#[command(name = "prompt-mcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tool surface to expose
    #[arg(long, value_enum, default_value_t = Variant::Authenticated)]
    pub variant: Variant,

    /// Base URL of the prompt platform backend
    #[arg(
        long,
        value_name = "URL",
        env = "API_BASE_URL",
        default_value = DEFAULT_API_BASE_URL
    )]
    pub api_base_url: String,

    /// Bearer token used by the authenticated variant
    ///
    /// Required for create_prompt and get_user_prompts. Ignored by the
    /// public variant.
    #[arg(long, value_name = "TOKEN", env = "AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Timeout for each backend request in seconds (default: 10)
    #[arg(long, value_name = "SECONDS", default_value = "10")]
    pub http_timeout: u64,

    /// List the variant's tool names and exit
    #[arg(long)]
    pub list_tools: bool,
}

impl Cli {
    /// Build the dispatcher configuration from parsed arguments
    pub fn adapter_config(&self) -> AdapterConfig {
        if !self.variant.uses_credential() && self.auth_token.is_some() {
            log::warn!("AUTH_TOKEN is ignored by the {} variant", self.variant);
        }

        AdapterConfig::new(self.variant, self.api_base_url.clone())
            .with_credential(self.auth_token.clone())
            .with_timeout(self.http_timeout_duration())
    }

    pub fn http_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}
