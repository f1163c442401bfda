//! Read-only tools exposed by the public variant

use crate::stdio::metadata::types::{ToolMetadata, build_schema};
use crate::tools::ToolId;
use crate::tools::args::{
    NoArgs, PlatformFeaturedArgs, PromptIdArgs, SearchFeaturedArgs, TrendingArgs,
};

pub fn platform_tools() -> Vec<ToolMetadata> {
    vec![
        ToolMetadata {
            tool: ToolId::GetFeaturedPrompts,
            description: "Get the platform's featured prompts, optionally within one category.",
            schema: build_schema::<PlatformFeaturedArgs>(),
        },
        ToolMetadata {
            tool: ToolId::SearchFeaturedPrompts,
            description: "Search featured prompts by keyword. Matches case-insensitively against title, description and content.",
            schema: build_schema::<SearchFeaturedArgs>(),
        },
        ToolMetadata {
            tool: ToolId::GetPromptById,
            description: "Get the full details of one public prompt by its ID. Private prompts are not available.",
            schema: build_schema::<PromptIdArgs>(),
        },
        ToolMetadata {
            tool: ToolId::GetCategories,
            description: "List all prompt categories.",
            schema: build_schema::<NoArgs>(),
        },
        ToolMetadata {
            tool: ToolId::GetTrendingPrompts,
            description: "Get the most used public prompts, ordered by usage count.",
            schema: build_schema::<TrendingArgs>(),
        },
    ]
}
