//! Tools exposed by the authenticated variant

use crate::stdio::metadata::types::{ToolMetadata, build_schema};
use crate::tools::ToolId;
use crate::tools::args::{
    CreatePromptArgs, FeaturedPromptsArgs, NoArgs, PromptIdArgs, SearchPromptsArgs,
    UserPromptsArgs,
};

pub fn prompt_tools() -> Vec<ToolMetadata> {
    vec![
        ToolMetadata {
            tool: ToolId::SearchPrompts,
            description: "Search public prompts in the prompt library by keyword, optionally within one category. Results are paginated (page, size).",
            schema: build_schema::<SearchPromptsArgs>(),
        },
        ToolMetadata {
            tool: ToolId::GetPromptById,
            description: "Get the full details of one prompt by its ID.",
            schema: build_schema::<PromptIdArgs>(),
        },
        ToolMetadata {
            tool: ToolId::GetCategories,
            description: "List all prompt categories.",
            schema: build_schema::<NoArgs>(),
        },
        ToolMetadata {
            tool: ToolId::GetFeaturedPrompts,
            description: "Get featured prompts picked by the platform, capped by limit.",
            schema: build_schema::<FeaturedPromptsArgs>(),
        },
        ToolMetadata {
            tool: ToolId::CreatePrompt,
            description: "Create a new prompt owned by the configured user (requires authentication).",
            schema: build_schema::<CreatePromptArgs>(),
        },
        ToolMetadata {
            tool: ToolId::GetUserPrompts,
            description: "List the configured user's own prompts, including private ones unless include_private is false (requires authentication).",
            schema: build_schema::<UserPromptsArgs>(),
        },
    ]
}
