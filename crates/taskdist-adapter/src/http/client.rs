/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for queue service calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::{Result, TaskQueueError};
use crate::types::ErrorBody;

/// Default queue service root when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request deadline; `None` lets a request stay in flight indefinitely
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: None,
            connect_timeout: Some(Duration::from_secs(10)),
        }
    }
}

/// HTTP client for the task queue service
#[derive(Debug, Clone)]
pub struct TaskQueueClient {
    http_client: Client,
    base_url: Url,
}

impl TaskQueueClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint below the base path
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode a 2xx JSON body into `T`
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| TaskQueueError::InvalidResponse(err.to_string()))
    }

    /// Send a request, mapping non-2xx statuses to [`TaskQueueError::Api`]
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) => format!("HTTP {status}"),
        };
        tracing::debug!(status = status.as_u16(), %message, "queue service returned error");
        Err(TaskQueueError::api_error(status, message))
    }
}

/// Parse the base URL, keeping any path prefix when endpoints are joined.
fn normalize_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(TaskQueueError::Config("base URL is empty".to_string()));
    }
    let mut url = Url::parse(trimmed)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(TaskQueueError::Config(format!(
            "unsupported URL scheme '{}'",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_keeps_path_prefix() {
        let client = TaskQueueClient::new("http://queue.local/api").expect("client init");
        assert_eq!(
            client.endpoint_url("/task").expect("join").as_str(),
            "http://queue.local/api/task"
        );

        let client = TaskQueueClient::new("http://queue.local/api/").expect("client init");
        assert_eq!(
            client.endpoint_url("results").expect("join").as_str(),
            "http://queue.local/api/results"
        );
    }

    #[test]
    fn test_bare_host_base_url() {
        let client = TaskQueueClient::new("http://localhost:5000").expect("client init");
        assert_eq!(
            client.endpoint_url("/health").expect("join").as_str(),
            "http://localhost:5000/health"
        );
    }

    #[test]
    fn test_rejects_unsupported_scheme() {
        let err = TaskQueueClient::new("ftp://queue.local").expect_err("scheme rejected");
        assert!(matches!(err, TaskQueueError::Config(_)));
    }

    #[test]
    fn test_rejects_empty_base_url() {
        assert!(matches!(
            TaskQueueClient::new("   "),
            Err(TaskQueueError::Config(_))
        ));
    }

    #[test]
    fn test_default_config_has_no_request_timeout() {
        let config = ClientConfig::default();
        assert!(config.request_timeout.is_none());
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(10)));
    }
}
