//! Per-tool request shaping against the backend.

use serde_json::Value;

use crate::backend::Query;
use crate::config::Variant;
use crate::envelope::ResultEnvelope;
use crate::error::AdapterError;
use crate::tools::Dispatcher;
use crate::tools::args::{CreatePromptArgs, SearchFeaturedArgs, SearchPromptsArgs, TrendingArgs, UserPromptsArgs};
use crate::tools::filters::{
    is_public, item_count, records, search_records, trending_records, truncate_items,
};

const PROMPTS_PATH: &str = "/api/v1/prompts/";
const CATEGORIES_PATH: &str = "/api/v1/categories/";
const CURRENT_USER_PATH: &str = "/api/v1/users/me";

/// Largest page the backend serves.
const MAX_PAGE_SIZE: u32 = 100;

impl Dispatcher {
    pub(crate) async fn search_prompts(
        &self,
        args: SearchPromptsArgs,
    ) -> Result<ResultEnvelope, AdapterError> {
        let mut query: Query = vec![
            ("search", args.query),
            ("page", args.page.to_string()),
            ("size", args.size.to_string()),
            ("is_public", "true".to_string()),
        ];
        if let Some(category_id) = args.category_id {
            query.push(("category_id", category_id.to_string()));
        }

        let mut body = self.backend.get(PROMPTS_PATH, &query, None).await?;
        // backends that ignore `size` must not leak a larger page
        truncate_items(&mut body, args.size as usize);

        let total = body
            .get("total")
            .and_then(Value::as_u64)
            .unwrap_or(item_count(&body) as u64);
        Ok(ResultEnvelope::success(
            body,
            format!("Found {total} matching prompts"),
        ))
    }

    pub(crate) async fn get_prompt_by_id(&self, id: u64) -> Result<ResultEnvelope, AdapterError> {
        let body = self
            .backend
            .get(&format!("{PROMPTS_PATH}{id}"), &Query::new(), None)
            .await?;

        if self.config.variant == Variant::Public && !is_public(&body) {
            return Err(AdapterError::PolicyRejected(format!(
                "Prompt {id} is not public and cannot be accessed through the platform service"
            )));
        }

        Ok(ResultEnvelope::success(body, format!("Fetched prompt {id}")))
    }

    pub(crate) async fn get_categories(&self) -> Result<ResultEnvelope, AdapterError> {
        let body = self
            .backend
            .get(CATEGORIES_PATH, &Query::new(), None)
            .await?;
        let count = item_count(&body);
        Ok(ResultEnvelope::success(
            body,
            format!("Fetched {count} categories"),
        ))
    }

    pub(crate) async fn get_featured_prompts(
        &self,
        limit: u32,
        category_id: Option<u64>,
    ) -> Result<ResultEnvelope, AdapterError> {
        let mut query: Query = vec![
            ("is_featured", "true".to_string()),
            ("size", limit.min(MAX_PAGE_SIZE).to_string()),
        ];
        if let Some(category_id) = category_id {
            query.push(("category_id", category_id.to_string()));
        }

        let mut body = self.fetch_listing(query, Some(limit as usize)).await?;
        truncate_items(&mut body, limit as usize);

        let count = item_count(&body);
        Ok(ResultEnvelope::success(
            body,
            format!("Fetched {count} featured prompts"),
        ))
    }

    pub(crate) async fn create_prompt(
        &self,
        args: &CreatePromptArgs,
        token: &str,
    ) -> Result<ResultEnvelope, AdapterError> {
        let body = self.backend.post(PROMPTS_PATH, args, Some(token)).await?;

        let message = match body.get("id").and_then(Value::as_u64) {
            Some(id) => format!("Created prompt {id}"),
            None => "Prompt created".to_string(),
        };
        Ok(ResultEnvelope::success(body, message))
    }

    /// Identity lookup, then the user's listing; the two calls never overlap.
    pub(crate) async fn get_user_prompts(
        &self,
        args: &UserPromptsArgs,
        token: &str,
    ) -> Result<ResultEnvelope, AdapterError> {
        let me = self
            .backend
            .get(CURRENT_USER_PATH, &Query::new(), Some(token))
            .await?;
        let user_id = me.get("id").and_then(Value::as_u64).ok_or_else(|| {
            AdapterError::UnexpectedResponse("current user response has no id".to_string())
        })?;

        let query: Query = vec![
            ("limit", args.limit.to_string()),
            ("skip", args.skip.to_string()),
        ];
        let body = self
            .backend
            .get(&format!("{PROMPTS_PATH}user/{user_id}"), &query, Some(token))
            .await?;

        let mut prompts = records(body)?;
        if !args.include_private {
            prompts.retain(is_public);
        }

        let count = prompts.len();
        Ok(ResultEnvelope::success(
            Value::Array(prompts),
            format!("Fetched {count} prompts for user {user_id}"),
        )
        .with_context("user_id", user_id)
        .with_context("include_private", args.include_private))
    }

    pub(crate) async fn search_featured_prompts(
        &self,
        args: SearchFeaturedArgs,
    ) -> Result<ResultEnvelope, AdapterError> {
        let query: Query = vec![
            ("is_featured", "true".to_string()),
            ("size", MAX_PAGE_SIZE.to_string()),
        ];
        let body = self.fetch_listing(query, None).await?;

        let matches = search_records(
            records(body)?,
            &args.query,
            args.category_id,
            args.limit as usize,
        );

        let count = matches.len();
        Ok(ResultEnvelope::success(
            Value::Array(matches),
            format!("Found {count} featured prompts matching '{}'", args.query),
        )
        .with_context("query", args.query))
    }

    pub(crate) async fn get_trending_prompts(
        &self,
        args: TrendingArgs,
    ) -> Result<ResultEnvelope, AdapterError> {
        let query: Query = vec![
            ("is_public", "true".to_string()),
            ("size", MAX_PAGE_SIZE.to_string()),
        ];
        let body = self.fetch_listing(query, None).await?;

        let trending = trending_records(records(body)?, args.limit as usize);

        let count = trending.len();
        Ok(ResultEnvelope::success(
            Value::Array(trending),
            format!("Fetched {count} trending prompts"),
        )
        .with_context("period", format!("{} days", args.days)))
    }

    /// Walk the prompt listing page by page, stopping at `pages` or once
    /// `limit` records are collected. The first page's metadata is kept and
    /// its `items` replaced by everything gathered. Bare-array bodies are
    /// unpaginated and returned as is.
    async fn fetch_listing(
        &self,
        query: Query,
        limit: Option<usize>,
    ) -> Result<Value, AdapterError> {
        let first = self.fetch_page(&query, 1).await?;
        let Value::Object(mut listing) = first else {
            return Ok(first);
        };

        let pages = listing.get("pages").and_then(Value::as_u64).unwrap_or(1);
        let mut items = records(listing.remove("items").unwrap_or(Value::Null))?;

        for page in 2..=pages {
            if limit.is_some_and(|limit| items.len() >= limit) {
                break;
            }
            let body = self.fetch_page(&query, page).await?;
            let more = records(body)?;
            if more.is_empty() {
                break;
            }
            items.extend(more);
        }
        if pages > 1 {
            log::debug!("Collected {} records across {pages} listing pages", items.len());
        }

        listing.insert("items".to_string(), Value::Array(items));
        Ok(Value::Object(listing))
    }

    async fn fetch_page(&self, query: &Query, page: u64) -> Result<Value, AdapterError> {
        let mut query = query.clone();
        query.push(("page", page.to_string()));
        self.backend.get(PROMPTS_PATH, &query, None).await
    }
}
