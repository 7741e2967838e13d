use crate::core::errors::BlindPayError;
use crate::core::types::ApiResponse;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{instrument, trace, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.blindpay.com/v1";
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const RAW_RESPONSE_PREVIEW: usize = 200;

/// Narrow request capability handed to resource clients.
///
/// Implementations never fail outward: transport faults, unparseable bodies
/// and HTTP error statuses all come back as [`ApiResponse::Error`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and normalize the outcome into an envelope
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Resource path relative to the base URL, query string included
    /// * `body` - Optional JSON body
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResponse<Value>;

    async fn get(&self, path: &str) -> ApiResponse<Value> {
        self.request(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> ApiResponse<Value> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> ApiResponse<Value> {
        self.request(Method::PUT, path, Some(body)).await
    }

    async fn patch(&self, path: &str, body: &Value) -> ApiResponse<Value> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> ApiResponse<Value> {
        self.request(Method::DELETE, path, None).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResponse<Value> {
        (**self).request(method, path, body).await
    }
}

/// Configuration for the HTTP transport
#[derive(Clone, Debug)]
pub struct HttpTransportConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

impl HttpTransportConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout_seconds: 30,
            user_agent: format!("blindpay-rust/{}", SDK_VERSION),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating HTTP transport instances
pub struct HttpTransportBuilder {
    config: HttpTransportConfig,
    api_key: Option<Secret<String>>,
}

impl HttpTransportBuilder {
    pub fn new(config: HttpTransportConfig) -> Self {
        Self {
            config,
            api_key: None,
        }
    }

    /// Set the bearer token sent with every request
    pub fn with_api_key(mut self, api_key: Secret<String>) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Build the transport with fixed headers baked into the client
    pub fn build(self) -> Result<HttpTransport, BlindPayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(api_key) = &self.api_key {
            let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
                .map_err(|_| {
                    BlindPayError::configuration("API key contains characters not allowed in a header")
                })?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                BlindPayError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(HttpTransport {
            client,
            config: self.config,
        })
    }
}

/// Implementation of `Transport` using reqwest
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    /// Join base URL and path with exactly one separator
    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    #[instrument(skip(self, response), fields(status = %response.status()))]
    async fn handle_response(&self, response: Response) -> ApiResponse<Value> {
        let status = response.status();
        let response_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "failed to read response body");
                return ApiResponse::error(e.to_string());
            }
        };

        trace!("Response body: {}", response_text);

        let parsed = if response_text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str::<Value>(&response_text) {
                Ok(value) => value,
                Err(e) => {
                    let preview: String = response_text.chars().take(RAW_RESPONSE_PREVIEW).collect();
                    return ApiResponse::error(format!(
                        "JSON decode error: {} | Raw response: {}",
                        e, preview
                    ));
                }
            }
        };

        if status.as_u16() >= 400 {
            let message = parsed
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            return ApiResponse::error(message);
        }

        ApiResponse::success(parsed)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResponse<Value> {
        let url = self.build_url(path);
        let mut request = self.client.request(method, &url);

        if let Some(body) = body {
            request = request.json(body);
        }

        match request.send().await {
            Ok(response) => self.handle_response(response).await,
            Err(e) => {
                warn!(error = %e, "request failed before a response was received");
                ApiResponse::error(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpTransportConfig::default();
        assert_eq!(config.base_url, "https://api.blindpay.com/v1");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.starts_with("blindpay-rust/"));
    }

    #[test]
    fn test_build_url_joins_with_single_slash() {
        let transport = HttpTransportBuilder::new(HttpTransportConfig::new(
            "https://api.blindpay.com/v1/".to_string(),
        ))
        .build()
        .unwrap();
        assert_eq!(
            transport.build_url("/instances/in_1/receivers"),
            "https://api.blindpay.com/v1/instances/in_1/receivers"
        );
        assert_eq!(
            transport.build_url("available/rails"),
            "https://api.blindpay.com/v1/available/rails"
        );
    }

    #[test]
    fn test_rejects_api_key_with_newline() {
        let result = HttpTransportBuilder::new(HttpTransportConfig::default())
            .with_api_key(Secret::new("bad\nkey".to_string()))
            .build();
        assert!(matches!(result, Err(BlindPayError::Configuration(_))));
    }
}
