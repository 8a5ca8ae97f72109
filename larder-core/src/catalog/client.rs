//! Spoonacular-backed catalog client.

use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

use super::config::{CatalogConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use super::{CatalogClient, RawRecord, PAGE_SIZE};
use crate::error::CatalogError;

/// Configuration for SpoonacularClient.
#[derive(Clone)]
pub struct SpoonacularClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for SpoonacularClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpoonacularClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("larder/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Start from a loaded [`CatalogConfig`].
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new()
            .api_key(config.api_key.clone())
            .base_url(config.base_url.clone())
            .timeout(config.timeout)
    }

    /// Set the API key. `None` leaves the client unconfigured.
    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn build(self) -> Result<SpoonacularClient, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;

        Ok(SpoonacularClient {
            inner,
            api_key: self.api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Catalog client talking to the Spoonacular REST API.
pub struct SpoonacularClient {
    inner: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl SpoonacularClient {
    pub fn builder() -> SpoonacularClientBuilder {
        SpoonacularClientBuilder::new()
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, reqwest::Error> {
        SpoonacularClientBuilder::from_config(config).build()
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, CatalogError> {
        self.api_key
            .as_deref()
            .ok_or(CatalogError::NotConfigured(API_KEY_ENV))
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| CatalogError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// URL for a search request. The API key travels as a query parameter.
    fn search_url(&self, query: &str, api_key: &str) -> Result<Url, CatalogError> {
        let mut url = self.endpoint("/recipes/complexSearch")?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("apiKey", api_key)
            .append_pair("addRecipeInformation", "true")
            .append_pair("fillIngredients", "true")
            .append_pair("number", &PAGE_SIZE.to_string());
        Ok(url)
    }

    fn information_url(&self, id: i64, api_key: &str) -> Result<Url, CatalogError> {
        let mut url = self.endpoint(&format!("/recipes/{id}/information"))?;
        url.query_pairs_mut().append_pair("apiKey", api_key);
        Ok(url)
    }

    /// GET a URL and parse the body as JSON.
    async fn get_json(&self, url: Url) -> Result<serde_json::Value, CatalogError> {
        // Log the path only; the query string carries the API key.
        let path = url.path().to_string();

        tracing::debug!(path = %path, "catalog: sending request");
        let response = self.inner.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            tracing::debug!(path = %path, error = %e, "catalog: request failed");
            CatalogError::RequestFailed(e)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::RequestFailed(e.without_url()))?;

        if !status.is_success() {
            tracing::debug!(path = %path, status = %status, "catalog: error status");
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                details: serde_json::from_str(&body).ok(),
            });
        }

        tracing::debug!(path = %path, status = %status, bytes = body.len(), "catalog: response received");
        serde_json::from_str(&body).map_err(|e| CatalogError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl CatalogClient for SpoonacularClient {
    async fn search(&self, query: &str) -> Result<Vec<RawRecord>, CatalogError> {
        let url = self.search_url(query, self.api_key()?)?;
        let body = self.get_json(url).await?;

        match body {
            serde_json::Value::Object(mut map) => match map.remove("results") {
                Some(serde_json::Value::Array(results)) => Ok(results),
                _ => Err(CatalogError::ParseError(
                    "response has no results array".to_string(),
                )),
            },
            _ => Err(CatalogError::ParseError(
                "response is not a JSON object".to_string(),
            )),
        }
    }

    async fn recipe_information(&self, id: i64) -> Result<RawRecord, CatalogError> {
        let url = self.information_url(id, self.api_key()?)?;
        let body = self.get_json(url).await?;

        if body.is_object() {
            Ok(body)
        } else {
            Err(CatalogError::ParseError(
                "recipe information is not a JSON object".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    fn client(base_url: &str, api_key: Option<&str>) -> SpoonacularClient {
        SpoonacularClient::builder()
            .base_url(base_url.to_string())
            .api_key(api_key.map(|k| k.to_string()))
            .build()
            .unwrap()
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_search_url_parameters() {
        let client = client("https://api.example.com/", Some("secret"));
        let url = client.search_url("pasta bake", "secret").unwrap();

        assert_eq!(url.path(), "/recipes/complexSearch");
        let params = query_map(&url);
        assert_eq!(params["query"], "pasta bake");
        assert_eq!(params["apiKey"], "secret");
        assert_eq!(params["addRecipeInformation"], "true");
        assert_eq!(params["fillIngredients"], "true");
        assert_eq!(params["number"], "20");
    }

    #[test]
    fn test_search_url_allows_empty_query() {
        let client = client("https://api.example.com", Some("k"));
        let url = client.search_url("", "k").unwrap();
        assert_eq!(query_map(&url)["query"], "");
    }

    #[test]
    fn test_information_url() {
        let client = client("https://api.example.com", Some("k"));
        let url = client.information_url(716429, "k").unwrap();
        assert_eq!(url.path(), "/recipes/716429/information");
        assert_eq!(query_map(&url)["apiKey"], "k");
    }

    #[test]
    fn test_invalid_base_url() {
        let client = client("not a url", Some("k"));
        assert!(matches!(
            client.search_url("x", "k"),
            Err(CatalogError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        // Port 9 is discard; a request would fail differently.
        let client = client("http://127.0.0.1:9", None);
        assert!(!client.is_configured());

        let err = client.search("pasta").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotConfigured(API_KEY_ENV)));

        let err = client.recipe_information(1).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotConfigured(_)));
    }

    /// Collects everything a fmt subscriber writes.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_failed_request_logs_do_not_contain_api_key() {
        // Reserve a port, then free it so the connection is refused
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = client(&format!("http://127.0.0.1:{port}"), Some("SUPERSECRETKEY"));

        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let err = client.search("pasta").await.unwrap_err();
        assert!(matches!(err, CatalogError::RequestFailed(_)));
        assert!(!err.to_string().contains("SUPERSECRETKEY"));

        let err = client.recipe_information(42).await.unwrap_err();
        assert!(!err.to_string().contains("SUPERSECRETKEY"));

        let output = logs.contents();
        assert!(output.contains("catalog: request failed"));
        assert!(output.contains("/recipes/complexSearch"));
        assert!(!output.contains("SUPERSECRETKEY"));
    }
}
