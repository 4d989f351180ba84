/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for biteship-adapter tests

use std::time::Duration;

use biteship_adapter::{Biteship, ClientConfig, Item};
use wiremock::MockServer;

/// API key used by every mock scenario
pub const TEST_API_KEY: &str = "k1";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn mock_client(server: &MockServer) -> Biteship {
    Biteship::new(ClientConfig::new(TEST_API_KEY).base_url(server.uri()))
        .expect("client should build against mock server")
}

/// Client pointed at the mock server with a short total timeout
#[allow(dead_code)]
pub fn mock_client_with_timeout(server: &MockServer, timeout: Duration) -> Biteship {
    Biteship::new(
        ClientConfig::new(TEST_API_KEY)
            .base_url(server.uri())
            .timeout(timeout),
    )
    .expect("client should build against mock server")
}

/// Smallest valid item: 1 of everything, value 1000
#[allow(dead_code)]
pub fn unit_item(name: &str) -> Item {
    Item {
        name: name.to_string(),
        description: None,
        category: None,
        value: 1000,
        quantity: 1,
        length: 1,
        width: 1,
        height: 1,
        weight: 1,
    }
}

/// Client for the live API, `None` when `BITESHIP_API_KEY` is unset
#[allow(dead_code)]
pub fn live_client() -> Option<Biteship> {
    let client = Biteship::from_env().ok();
    if client.is_none() {
        eprintln!("BITESHIP_API_KEY not set, skipping live test");
    }
    client
}
