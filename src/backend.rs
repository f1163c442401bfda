//! HTTP client for the prompt platform REST API.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AdapterError, backend_detail};

/// Query string pairs for a request.
pub type Query = Vec<(&'static str, String)>;

/// Thin wrapper over a shared `reqwest::Client`.
///
/// Every request carries the configured timeout; a 2xx answer is returned as
/// parsed JSON and anything else becomes an [`AdapterError`].
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AdapterError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(AdapterError::Transport)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(
        &self,
        path: &str,
        query: &Query,
        bearer: Option<&str>,
    ) -> Result<Value, AdapterError> {
        let request = self.http.get(self.url(path)).query(query);
        self.send(with_bearer(request, bearer)).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<Value, AdapterError> {
        let request = self.http.post(self.url(path)).json(body);
        self.send(with_bearer(request, bearer)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, AdapterError> {
        let response = request
            .send()
            .await
            .map_err(|e| AdapterError::from_transport(e, self.timeout))?;

        let status = response.status();
        log::debug!("{} {}", status.as_u16(), response.url().path());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdapterError::Backend {
                status: status.as_u16(),
                detail: backend_detail(status, &body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AdapterError::from_transport(e, self.timeout))?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| AdapterError::UnexpectedResponse(format!("body is not valid JSON: {e}")))
    }
}

fn with_bearer(request: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
    match bearer {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = BackendClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.url("/api/v1/categories/"),
            "http://localhost:8000/api/v1/categories/"
        );
    }
}
