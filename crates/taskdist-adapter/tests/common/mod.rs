/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskdist-adapter tests

use taskdist_adapter::TaskQueueClient;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, optionally under a path prefix
pub fn client_for(server: &MockServer, prefix: &str) -> TaskQueueClient {
    TaskQueueClient::new(&format!("{}{}", server.uri(), prefix)).expect("client init")
}

/// Address nothing listens on, for transport failure tests
#[allow(dead_code)]
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
