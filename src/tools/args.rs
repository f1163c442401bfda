//! Typed arguments for each tool.
//!
//! These structs are the single source for both validation and the input
//! schemas advertised by `tools/list`: a missing required field or a
//! mistyped value fails deserialization, and serde defaults double as the
//! declared schema defaults.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

fn default_featured_limit() -> u32 {
    5
}

fn default_platform_featured_limit() -> u32 {
    20
}

fn default_search_limit() -> u32 {
    10
}

fn default_user_limit() -> u32 {
    50
}

fn default_trending_limit() -> u32 {
    10
}

fn default_trending_days() -> u32 {
    7
}

/// Tools without parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoArgs {}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchPromptsArgs {
    /// Search keywords
    pub query: String,

    /// Restrict results to this category
    #[serde(default)]
    pub category_id: Option<u64>,

    /// Page number, starting at 1
    #[serde(default = "default_page")]
    pub page: u32,

    /// Results per page
    #[serde(default = "default_page_size")]
    pub size: u32,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PromptIdArgs {
    /// Prompt ID
    #[serde(alias = "prompt_id")]
    pub id: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FeaturedPromptsArgs {
    /// Maximum number of prompts to return
    #[serde(default = "default_featured_limit")]
    pub limit: u32,
}

/// Featured listing as exposed by the public variant.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PlatformFeaturedArgs {
    /// Maximum number of prompts to return
    #[serde(default = "default_platform_featured_limit")]
    pub limit: u32,

    /// Restrict results to this category
    #[serde(default)]
    pub category_id: Option<u64>,
}

/// Body of `POST /api/v1/prompts/`; field names match the backend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreatePromptArgs {
    /// Chinese name
    pub name_zh: String,

    /// English name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,

    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Prompt text
    pub content: String,

    /// Category ID
    pub category_id: u64,

    /// Tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Whether the prompt is publicly visible
    #[serde(default = "default_true")]
    pub is_public: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UserPromptsArgs {
    /// Maximum number of prompts to return
    #[serde(default = "default_user_limit")]
    pub limit: u32,

    /// Number of prompts to skip
    #[serde(default)]
    pub skip: u32,

    /// Include prompts that are not public
    #[serde(default = "default_true")]
    pub include_private: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchFeaturedArgs {
    /// Search keywords, matched case-insensitively against title, description and content
    pub query: String,

    /// Restrict results to this category
    #[serde(default)]
    pub category_id: Option<u64>,

    /// Maximum number of prompts to return
    #[serde(default = "default_search_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TrendingArgs {
    /// Maximum number of prompts to return
    #[serde(default = "default_trending_limit")]
    pub limit: u32,

    /// Reporting window in days
    #[serde(default = "default_trending_days")]
    pub days: u32,
}
