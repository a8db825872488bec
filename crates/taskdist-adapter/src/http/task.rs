/*
[INPUT]:  Task payloads built by the caller
[OUTPUT]: Acceptance confirmation or structured service error
[POS]:    HTTP layer - task submission and service health endpoints
[UPDATE]: When the submission contract changes
*/

use reqwest::Method;

use crate::http::{Result, TaskQueueClient};
use crate::types::{HealthStatus, TaskAccepted, TaskPayload};

impl TaskQueueClient {
    /// Enqueue a task
    ///
    /// POST {base}/task
    pub async fn submit_task(&self, payload: &TaskPayload) -> Result<TaskAccepted> {
        let builder = self.request(Method::POST, "/task")?.json(payload);
        let response = self.send(builder).await?;
        let body = response.text().await?;
        // Success is signalled by the status code alone.
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    /// Liveness probe of the queue service
    ///
    /// GET {base}/health
    pub async fn health(&self) -> Result<HealthStatus> {
        let builder = self.request(Method::GET, "/health")?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{TaskQueueClient, TaskQueueError};
    use crate::types::{TaskPayload, TextOp};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_submit_task_posts_payload() {
        let server = MockServer::start().await;
        let payload = TaskPayload::text(TextOp::Upper, "hello");

        Mock::given(method("POST"))
            .and(path("/task"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "type": "text",
                "operation": "upper",
                "value": "hello"
            })))
            .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
                "status": "queued",
                "task": {"type": "text", "operation": "upper", "value": "hello"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = TaskQueueClient::new(&server.uri()).expect("client init");
        let accepted = client.submit_task(&payload).await.expect("submit_task failed");

        assert_eq!(accepted.status.as_deref(), Some("queued"));
        assert_eq!(accepted.task, Some(payload));
    }

    #[tokio::test]
    async fn test_submit_task_ignores_unexpected_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/task"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let client = TaskQueueClient::new(&server.uri()).expect("client init");
        let accepted = client
            .submit_task(&TaskPayload::math("1+1"))
            .await
            .expect("2xx is success");
        assert_eq!(accepted.status, None);
    }

    #[tokio::test]
    async fn test_submit_task_surfaces_error_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/task"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid expression"
            })))
            .mount(&server)
            .await;

        let client = TaskQueueClient::new(&server.uri()).expect("client init");
        let err = client
            .submit_task(&TaskPayload::math("1+"))
            .await
            .expect_err("400 is an error");

        match err {
            TaskQueueError::Api { code, message } => {
                assert_eq!(code, 400);
                assert_eq!(message, "invalid expression");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})),
            )
            .mount(&server)
            .await;

        let client = TaskQueueClient::new(&server.uri()).expect("client init");
        let health = client.health().await.expect("health failed");
        assert_eq!(health.status, "ok");
    }
}
