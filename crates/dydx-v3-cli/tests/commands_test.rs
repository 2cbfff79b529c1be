/*
[INPUT]:  Mock dYdX API and a local Ethereum key
[OUTPUT]: Test results for subcommand dispatch
[POS]:    Integration tests - command layer against a mock server
[UPDATE]: When subcommands change
*/

use dydx_v3_adapter::MarketStatisticDay;
use dydx_v3_cli::commands::SigningMethodArg;
use dydx_v3_cli::{CliConfig, Command, run};
use tokio_test::assert_ok;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

fn config_for(server: &MockServer) -> CliConfig {
    CliConfig::default().with_overrides(Some(server.uri()), None)
}

#[tokio::test]
async fn test_stats_command_passes_days() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/stats/BTC-USD"))
        .and(query_param("days", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"markets": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let command = Command::Stats {
        market: "BTC-USD".to_string(),
        days: Some(MarketStatisticDay::Thirty),
    };
    let value = assert_ok!(run(command, &config_for(&server), None).await);
    assert_eq!(value, serde_json::json!({"markets": {}}));
}

#[tokio::test]
async fn test_markets_command_prints_api_payload_unchanged() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "markets": {
            "LUNA-USD": {
                "market": "LUNA-USD",
                "status": "DELISTED",
                "baseAsset": "LUNA",
                "quoteAsset": "USD",
                "stepSize": "0.1",
                "tickSize": "0.001",
                "indexPrice": "0.00010",
                "oraclePrice": "0.0001",
                "priceChange24H": "0",
                "nextFundingRate": "0",
                "nextFundingAt": "2022-05-13T08:00:00.000Z",
                "minOrderSize": "10",
                "type": "PERPETUAL",
                "initialMarginFraction": "1",
                "maintenanceMarginFraction": "0.5",
                "transferMarginFraction": "0.01",
                "volume24H": "0",
                "trades24H": "0",
                "openInterest": "0",
                "incrementalInitialMarginFraction": "0.02",
                "incrementalPositionSize": "1000",
                "maxPositionSize": "20000",
                "baselinePositionSize": "2000",
                "assetResolution": "10000000",
                "syntheticAssetId": "0x4c554e412d370000000000000000000"
            }
        }
    });
    Mock::given(method("GET"))
        .and(path("/v3/markets"))
        .and(query_param("market", "LUNA-USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let command = Command::Markets {
        market: Some("LUNA-USD".to_string()),
    };
    let value = assert_ok!(run(command, &config_for(&server), None).await);

    assert_eq!(value, body);
}

#[tokio::test]
async fn test_username_exists_command() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/usernames"))
        .and(query_param("username", "satoshi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"exists": true})))
        .mount(&server)
        .await;

    let command = Command::UsernameExists {
        username: "satoshi".to_string(),
    };
    let value = assert_ok!(run(command, &config_for(&server), None).await);
    assert_eq!(value["exists"], true);
}

#[tokio::test]
async fn test_derive_stark_key_command_is_offline_and_deterministic() {
    let config = CliConfig::default();
    let command = Command::DeriveStarkKey {
        address: TEST_ADDRESS.to_string(),
        signing_method: SigningMethodArg::TypedData,
    };

    let first = assert_ok!(run(command.clone(), &config, Some(TEST_PRIVATE_KEY)).await);
    let second = assert_ok!(run(command, &config, Some(TEST_PRIVATE_KEY)).await);

    assert_eq!(first, second);
    assert_eq!(first["publicKey"].as_str().map(str::len), Some(64));
}

#[tokio::test]
async fn test_onboard_command_posts_derived_key() {
    let server = MockServer::start().await;
    let config = config_for(&server);

    let derived = assert_ok!(
        run(
            Command::DeriveStarkKey {
                address: TEST_ADDRESS.to_string(),
                signing_method: SigningMethodArg::Hash,
            },
            &config,
            Some(TEST_PRIVATE_KEY),
        )
        .await
    );
    let stark_key = derived["publicKey"].as_str().expect("public key").to_string();

    Mock::given(method("POST"))
        .and(path("/v3/onboarding"))
        .and(header_exists("DYDX-SIGNATURE"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "apiKey": {"key": "k", "secret": "s", "passphrase": "p"},
            "user": {"ethereumAddress": TEST_ADDRESS.to_ascii_lowercase()},
            "account": {
                "id": "account-id",
                "starkKey": stark_key,
                "positionId": "7",
                "equity": "0",
                "freeCollateral": "0",
                "pendingDeposits": "0",
                "pendingWithdrawals": "0",
                "quoteBalance": "0"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let command = Command::Onboard {
        address: TEST_ADDRESS.to_string(),
        signing_method: SigningMethodArg::Hash,
    };
    let value = assert_ok!(run(command, &config, Some(TEST_PRIVATE_KEY)).await);

    assert_eq!(value["account"]["starkKey"], stark_key.as_str());
}

#[tokio::test]
async fn test_api_error_surfaces_as_command_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/orderbook/DOGE-USD"))
        .respond_with(ResponseTemplate::new(400).set_body_string("unknown market"))
        .mount(&server)
        .await;

    let command = Command::Orderbook {
        market: "DOGE-USD".to_string(),
    };
    let err = run(command, &config_for(&server), None).await.unwrap_err();
    assert!(format!("{err:#}").contains("unknown market"));
}
