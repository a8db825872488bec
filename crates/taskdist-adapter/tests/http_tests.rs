/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{client_for, setup_mock_server, unreachable_base_url};
use rstest::rstest;
use taskdist_adapter::{
    ClientConfig, TaskPayload, TaskQueue, TaskQueueClient, TaskQueueError, TextOp,
};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(TaskQueueClient::new("http://localhost:5000"));
    assert_eq!(client.base_url().as_str(), "http://localhost:5000/");
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        request_timeout: Some(std::time::Duration::from_secs(5)),
        ..ClientConfig::default()
    };
    let _client = assert_ok!(TaskQueueClient::with_config(config, "https://queue.example/api"));
}

#[test]
fn test_invalid_base_url() {
    let err = TaskQueueClient::new("not a url").expect_err("invalid url");
    assert!(matches!(err, TaskQueueError::UrlParse(_)));
}

#[rstest]
#[case(TaskPayload::math("factorial(10)"), serde_json::json!({"type": "math", "expr": "factorial(10)"}))]
#[case(TaskPayload::text(TextOp::Reverse, "kubernetes"), serde_json::json!({"type": "text", "operation": "reverse", "value": "kubernetes"}))]
#[case(TaskPayload::text(TextOp::Length, "minikube"), serde_json::json!({"type": "text", "operation": "length", "value": "minikube"}))]
#[tokio::test]
async fn test_submit_through_trait(
    #[case] payload: TaskPayload,
    #[case] expected_body: serde_json::Value,
) {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/task"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "status": "queued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let queue: Box<dyn TaskQueue> = Box::new(client_for(&server, "/api"));
    let accepted = assert_ok!(queue.submit_task(&payload).await);
    assert_eq!(accepted.status.as_deref(), Some("queued"));
}

#[tokio::test]
async fn test_fetch_empty_batch() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "");
    let results = assert_ok!(client.fetch_results().await);
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_fetch_service_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/results"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "Failed to read results: connection reset"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "");
    let err = client.fetch_results().await.expect_err("500 is an error");
    assert!(!err.is_transport());
    assert_eq!(err.status_line(), "Error: Failed to read results: connection reset");
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    let client = assert_ok!(TaskQueueClient::new(&unreachable_base_url()));
    let err = client
        .submit_task(&TaskPayload::math("1+1"))
        .await
        .expect_err("nothing is listening");

    assert!(err.is_transport());
    assert!(err.status_line().starts_with("Network error: "));
}
