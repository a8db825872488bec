/*
[INPUT]:  Fetch trigger from the caller
[OUTPUT]: Batch of newly available result strings
[POS]:    HTTP layer - result retrieval endpoint
[UPDATE]: When the results contract changes
*/

use reqwest::Method;

use crate::http::{Result, TaskQueueClient};
use crate::types::ResultsBatch;

impl TaskQueueClient {
    /// Pull every result the service currently holds for delivery
    ///
    /// GET {base}/results
    pub async fn fetch_results(&self) -> Result<Vec<String>> {
        let builder = self.request(Method::GET, "/results")?;
        let batch: ResultsBatch = self.send_json(builder).await?;
        Ok(batch.results)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{TaskQueueClient, TaskQueueError};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_results_keeps_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/results"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": ["4", "9 is odd"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            TaskQueueClient::new(&format!("{}/api", server.uri())).expect("client init");
        let results = client.fetch_results().await.expect("fetch_results failed");
        assert_eq!(results, vec!["4".to_string(), "9 is odd".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_results_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/results"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})),
            )
            .mount(&server)
            .await;

        let client = TaskQueueClient::new(&server.uri()).expect("client init");
        let err = client.fetch_results().await.expect_err("malformed body");
        assert!(matches!(err, TaskQueueError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_results_error_without_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/results"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let client = TaskQueueClient::new(&server.uri()).expect("client init");
        let err = client.fetch_results().await.expect_err("502 is an error");
        assert_eq!(err.status_line(), "Error: HTTP 502 Bad Gateway");
    }
}
