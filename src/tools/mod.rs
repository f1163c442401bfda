//! Tool identities, typed arguments and the dispatcher.

pub mod args;
pub mod dispatcher;
pub mod filters;
mod handlers;

pub use dispatcher::Dispatcher;

use std::fmt;

/// Every tool either variant can expose.
///
/// Matching on this enum is exhaustive, so adding a tool forces a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    SearchPrompts,
    GetPromptById,
    GetCategories,
    GetFeaturedPrompts,
    CreatePrompt,
    GetUserPrompts,
    SearchFeaturedPrompts,
    GetTrendingPrompts,
}

impl ToolId {
    pub const ALL: [ToolId; 8] = [
        ToolId::SearchPrompts,
        ToolId::GetPromptById,
        ToolId::GetCategories,
        ToolId::GetFeaturedPrompts,
        ToolId::CreatePrompt,
        ToolId::GetUserPrompts,
        ToolId::SearchFeaturedPrompts,
        ToolId::GetTrendingPrompts,
    ];

    /// Wire name used by `tools/list` and `tools/call`
    pub const fn name(self) -> &'static str {
        match self {
            ToolId::SearchPrompts => "search_prompts",
            ToolId::GetPromptById => "get_prompt_by_id",
            ToolId::GetCategories => "get_categories",
            ToolId::GetFeaturedPrompts => "get_featured_prompts",
            ToolId::CreatePrompt => "create_prompt",
            ToolId::GetUserPrompts => "get_user_prompts",
            ToolId::SearchFeaturedPrompts => "search_featured_prompts",
            ToolId::GetTrendingPrompts => "get_trending_prompts",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Tools that must never run without the bearer credential.
    pub const fn requires_credential(self) -> bool {
        matches!(self, ToolId::CreatePrompt | ToolId::GetUserPrompts)
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
