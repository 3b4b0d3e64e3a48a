/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for youtu-adapter tests

use wiremock::MockServer;
use youtu_adapter::{ClientConfig, Credential, YoutuClient};

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Fixed credential used across integration tests
pub fn test_credential() -> Credential {
    Credential::new(1000061, "AKIDtest", "test-secret-key", 0, "3041722595")
        .expect("valid test credential")
}

/// Client pointed at a mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> YoutuClient {
    YoutuClient::with_config(
        test_credential(),
        ClientConfig::with_host(server.address().to_string()),
    )
    .expect("client init")
}

/// Tiny Base64 payload standing in for an image
#[allow(dead_code)]
pub fn mock_image() -> String {
    youtu_adapter::encode_image_bytes(b"\xff\xd8\xff\xe0fake-jpeg")
}
