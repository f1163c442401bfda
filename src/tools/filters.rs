//! Client-side shaping of backend listings.
//!
//! Listing endpoints answer either with a bare array or with a paginated
//! object (`{items, total, page, size, pages}`); everything here accepts both.

use std::cmp::Reverse;

use serde_json::Value;

use crate::error::AdapterError;

/// Record fields searched by `search_featured_prompts`.
const SEARCHABLE_FIELDS: &[&str] = &["title", "name_zh", "name_en", "description", "content"];

/// Extract the record list from a listing body.
pub fn records(body: Value) -> Result<Vec<Value>, AdapterError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut page) => match page.remove("items") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(AdapterError::UnexpectedResponse(
                "listing response has no items array".to_string(),
            )),
        },
        other => Err(AdapterError::UnexpectedResponse(format!(
            "expected a listing, got {}",
            json_kind(&other)
        ))),
    }
}

/// Number of records in a listing body, zero for anything else.
pub fn item_count(body: &Value) -> usize {
    match body {
        Value::Array(items) => items.len(),
        Value::Object(page) => page
            .get("items")
            .and_then(Value::as_array)
            .map_or(0, Vec::len),
        _ => 0,
    }
}

/// Cap a listing body at `size` records in place.
pub fn truncate_items(body: &mut Value, size: usize) {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(page) => match page.get_mut("items") {
            Some(Value::Array(items)) => items,
            _ => return,
        },
        _ => return,
    };
    items.truncate(size);
}

/// `is_public` is true; absent or non-boolean counts as private.
pub fn is_public(record: &Value) -> bool {
    record
        .get("is_public")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn usage_count(record: &Value) -> u64 {
    record
        .get("usage_count")
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

fn in_category(record: &Value, category_id: Option<u64>) -> bool {
    match category_id {
        Some(id) => record.get("category_id").and_then(Value::as_u64) == Some(id),
        None => true,
    }
}

/// Case-insensitive substring match over the searchable text fields.
pub fn matches_query(record: &Value, query: &str) -> bool {
    let needle = query.to_lowercase();
    SEARCHABLE_FIELDS.iter().any(|field| {
        record
            .get(*field)
            .and_then(Value::as_str)
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    })
}

/// Featured records matching `query` (and `category_id`), first `limit` in backend order.
pub fn search_records(
    records: Vec<Value>,
    query: &str,
    category_id: Option<u64>,
    limit: usize,
) -> Vec<Value> {
    records
        .into_iter()
        .filter(|r| matches_query(r, query) && in_category(r, category_id))
        .take(limit)
        .collect()
}

/// Public records ordered by descending `usage_count`, first `limit`.
///
/// The sort is stable: equal counts keep the backend's relative order.
pub fn trending_records(records: Vec<Value>, limit: usize) -> Vec<Value> {
    let mut public: Vec<Value> = records.into_iter().filter(is_public).collect();
    public.sort_by_key(|r| Reverse(usage_count(r)));
    public.truncate(limit);
    public
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prompt(id: u64, usage: u64, public: bool) -> Value {
        json!({ "id": id, "usage_count": usage, "is_public": public })
    }

    #[test]
    fn test_records_accepts_array_and_page() {
        let arr = records(json!([{ "id": 1 }, { "id": 2 }])).unwrap();
        assert_eq!(arr.len(), 2);

        let page = records(json!({ "items": [{ "id": 1 }], "total": 1 })).unwrap();
        assert_eq!(page.len(), 1);

        assert!(records(json!({ "total": 0 })).is_err());
        assert!(records(json!("oops")).is_err());
    }

    #[test]
    fn test_truncate_items() {
        let mut page = json!({ "items": [1, 2, 3, 4], "total": 4 });
        truncate_items(&mut page, 2);
        assert_eq!(page["items"], json!([1, 2]));
        assert_eq!(page["total"], json!(4));

        let mut arr = json!([1, 2, 3]);
        truncate_items(&mut arr, 5);
        assert_eq!(item_count(&arr), 3);
    }

    #[test]
    fn test_matches_query_is_case_insensitive() {
        let record = json!({
            "title": "Code Review Helper",
            "description": null,
            "content": "Review this diff"
        });
        assert!(matches_query(&record, "code review"));
        assert!(matches_query(&record, "DIFF"));
        assert!(!matches_query(&record, "poetry"));

        let zh = json!({ "name_zh": "写作助手", "content": "帮我写作" });
        assert!(matches_query(&zh, "写作"));
    }

    #[test]
    fn test_search_records_filters_category_then_truncates() {
        let records = vec![
            json!({ "id": 1, "title": "rust tips", "category_id": 1 }),
            json!({ "id": 2, "title": "rust async", "category_id": 2 }),
            json!({ "id": 3, "title": "go tips", "category_id": 1 }),
            json!({ "id": 4, "title": "Rust macros", "category_id": 1 }),
        ];
        let found = search_records(records.clone(), "rust", Some(1), 10);
        let ids: Vec<_> = found.iter().map(|r| r["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 4]);

        let found = search_records(records, "rust", None, 2);
        let ids: Vec<_> = found.iter().map(|r| r["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_trending_is_stable_descending_and_public_only() {
        let records = vec![
            prompt(1, 5, true),
            prompt(2, 9, true),
            prompt(3, 5, true),
            prompt(4, 100, false),
            prompt(5, 7, true),
            json!({ "id": 6, "is_public": true }),
        ];
        let top = trending_records(records, 4);
        let ids: Vec<_> = top.iter().map(|r| r["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![2, 5, 1, 3]);
    }

    #[test]
    fn test_trending_limit_larger_than_dataset() {
        let top = trending_records(vec![prompt(1, 1, true)], 10);
        assert_eq!(top.len(), 1);
    }
}
