//! HTTP transport used by [`N2yoClient`](crate::N2yoClient)
//!
//! The client only needs "GET this URL and hand me the JSON body", so the
//! transport sits behind a small trait. [`ReqwestTransport`] is the real
//! implementation; tests plug in their own to observe requests.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::error::Result;

const USER_AGENT: &str = concat!("n2yo-client/", env!("CARGO_PKG_VERSION"));

/// A GET request against the N2YO API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub base_url: String,
    /// Endpoint path, always starting with `/`
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Base URL and path joined with exactly one `/`, followed by the
    /// url-encoded query string.
    pub fn url(&self) -> String {
        let mut url = format!("{}{}", self.base_url.trim_end_matches('/'), self.path);

        for (index, (key, value)) in self.query.iter().enumerate() {
            url.push(if index == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the GET and decode the body as JSON.
    async fn get_json(&self, request: &ApiRequest) -> Result<Value>;
}

/// `reqwest` backed transport. Timeouts, TLS and pooling are reqwest's
/// defaults.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    /// Reuse an existing reqwest client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get_json(&self, request: &ApiRequest) -> Result<Value> {
        let body = self
            .client
            .get(request.url())
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(base_url: &str) -> ApiRequest {
        ApiRequest {
            base_url: base_url.to_string(),
            path: "/tle/25544".to_string(),
            query: vec![("apiKey".to_string(), "ABC 123&x".to_string())],
        }
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        let with_slash = request("https://www.n2yo.com/rest/v1/satellite/");
        let without_slash = request("https://www.n2yo.com/rest/v1/satellite");
        assert_eq!(with_slash.url(), without_slash.url());
        assert!(
            with_slash
                .url()
                .starts_with("https://www.n2yo.com/rest/v1/satellite/tle/25544?")
        );
    }

    #[test]
    fn test_query_is_encoded() {
        let url = request("https://example.test/api/").url();
        assert!(url.ends_with("?apiKey=ABC%20123%26x"));
    }

    #[test]
    fn test_query_value_lookup() {
        let req = request("https://example.test/api/");
        assert_eq!(req.query_value("apiKey"), Some("ABC 123&x"));
        assert_eq!(req.query_value("missing"), None);
    }

    #[test]
    fn test_build_default_transport() {
        assert!(ReqwestTransport::new().is_ok());
    }
}
