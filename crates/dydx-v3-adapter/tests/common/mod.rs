/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for dydx-v3-adapter tests

use wiremock::MockServer;

/// Well-known development private key and its address
#[allow(dead_code)]
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
#[allow(dead_code)]
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Minimal successful onboarding payload
#[allow(dead_code)]
pub fn onboarding_body(stark_key: &str) -> serde_json::Value {
    serde_json::json!({
        "apiKey": {
            "key": "api-key-id",
            "secret": "api-secret",
            "passphrase": "api-passphrase"
        },
        "user": {
            "ethereumAddress": TEST_ADDRESS.to_ascii_lowercase(),
            "isRegistered": true
        },
        "account": {
            "id": "account-id",
            "starkKey": stark_key,
            "positionId": "42",
            "equity": "0",
            "freeCollateral": "0",
            "pendingDeposits": "0",
            "pendingWithdrawals": "0",
            "quoteBalance": "0"
        }
    })
}
