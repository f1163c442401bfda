//! Static metadata for each variant's tools.
//!
//! Lists are cached on first use and kept in declaration order, so every
//! `tools/list` answer is identical.

use super::types::ToolMetadata;
use crate::config::Variant;
use once_cell::sync::Lazy;

mod platform;
mod prompts;

use platform::platform_tools;
use prompts::prompt_tools;

static AUTHENTICATED_TOOLS: Lazy<Vec<ToolMetadata>> = Lazy::new(prompt_tools);

static PUBLIC_TOOLS: Lazy<Vec<ToolMetadata>> = Lazy::new(platform_tools);

/// Returns a static reference to the variant's tool metadata.
pub fn tool_metadata(variant: Variant) -> &'static [ToolMetadata] {
    match variant {
        Variant::Authenticated => &AUTHENTICATED_TOOLS,
        Variant::Public => &PUBLIC_TOOLS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolId;
    use serde_json::json;
    use std::collections::HashSet;

    fn names(variant: Variant) -> Vec<&'static str> {
        tool_metadata(variant).iter().map(ToolMetadata::name).collect()
    }

    #[test]
    fn test_authenticated_tools() {
        assert_eq!(
            names(Variant::Authenticated),
            vec![
                "search_prompts",
                "get_prompt_by_id",
                "get_categories",
                "get_featured_prompts",
                "create_prompt",
                "get_user_prompts",
            ]
        );
    }

    #[test]
    fn test_public_tools_are_read_only() {
        let tools = tool_metadata(Variant::Public);
        assert_eq!(tools.len(), 5);
        assert!(tools.iter().all(|m| !m.tool.requires_credential()));
        assert!(tools.iter().any(|m| m.tool == ToolId::GetTrendingPrompts));
        assert!(tools.iter().any(|m| m.tool == ToolId::SearchFeaturedPrompts));
    }

    #[test]
    fn test_names_unique_per_variant() {
        for variant in [Variant::Authenticated, Variant::Public] {
            let all = names(variant);
            let unique: HashSet<_> = all.iter().collect();
            assert_eq!(all.len(), unique.len());
        }
    }

    #[test]
    fn test_listing_is_call_invariant() {
        let first = tool_metadata(Variant::Authenticated).to_vec();
        let second = tool_metadata(Variant::Authenticated).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_schemas_declare_required_and_defaults() {
        let search = tool_metadata(Variant::Authenticated)
            .iter()
            .find(|m| m.tool == ToolId::SearchPrompts)
            .unwrap();
        assert_eq!(search.schema["type"], json!("object"));
        assert_eq!(search.schema["required"], json!(["query"]));
        assert_eq!(search.schema["properties"]["page"]["default"], json!(1));
        assert_eq!(search.schema["properties"]["size"]["default"], json!(10));

        let create = tool_metadata(Variant::Authenticated)
            .iter()
            .find(|m| m.tool == ToolId::CreatePrompt)
            .unwrap();
        let required: HashSet<_> = create.schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(
            required,
            HashSet::from(["name_zh", "content", "category_id"])
        );
    }
}
