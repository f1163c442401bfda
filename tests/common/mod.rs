#![allow(dead_code)]

use std::time::Duration;

use prompt_mcp::{AdapterConfig, Dispatcher, Variant};
use serde_json::{Map, Value, json};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

pub fn dispatcher(server: &MockServer, variant: Variant, token: Option<&str>) -> Dispatcher {
    let config = AdapterConfig::new(variant, server.uri())
        .with_credential(token.map(str::to_string))
        .with_timeout(Duration::from_secs(2));
    Dispatcher::new(config).expect("dispatcher should build")
}

pub fn args(value: Value) -> Option<Map<String, Value>> {
    value.as_object().cloned()
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}

pub fn prompt(id: u64, title: &str, description: &str, content: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "name_zh": title,
        "description": description,
        "content": content,
        "category_id": 1,
        "is_public": true,
        "is_featured": true,
        "usage_count": 0
    })
}

pub fn usage_prompt(id: u64, usage: u64, is_public: bool) -> Value {
    json!({
        "id": id,
        "name_zh": format!("prompt {id}"),
        "content": "...",
        "category_id": 1,
        "is_public": is_public,
        "usage_count": usage
    })
}

pub fn page(items: Vec<Value>, total: u64, pages: u64) -> Value {
    json!({
        "items": items,
        "total": total,
        "page": 1,
        "size": 10,
        "pages": pages
    })
}

/// One page of a multi-page listing.
pub fn page_n(items: Vec<Value>, number: u64, total: u64, pages: u64) -> Value {
    let mut body = page(items, total, pages);
    body["page"] = json!(number);
    body["size"] = json!(100);
    body
}

pub fn ids(data: &Value) -> Vec<u64> {
    data.as_array()
        .expect("data should be an array")
        .iter()
        .filter_map(|r| r["id"].as_u64())
        .collect()
}
