/*
[INPUT]:  DYDX_ETH_PRIVATE_KEY environment variable (hex)
[OUTPUT]: Derived STARK key pair and, if requested, a new dYdX account
[POS]:    Examples - key derivation and onboarding with a local key
[UPDATE]: When onboarding flow or signer construction changes
*/

use std::sync::Arc;

use dydx_v3_adapter::*;

/// Example: Derive a STARK key from an Ethereum key and onboard
///
/// Set DYDX_ONBOARD=1 to actually submit the onboarding request.
#[tokio::main]
async fn main() {
    println!("=== dYdX v3 Onboarding Example ===\n");

    let private_key = match std::env::var("DYDX_ETH_PRIVATE_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("DYDX_ETH_PRIVATE_KEY is not set");
            return;
        }
    };

    let config = ClientConfig {
        host: API_HOST_ROPSTEN.to_string(),
        network_id: NETWORK_ID_ROPSTEN,
        ..ClientConfig::default()
    };

    let signer = match LocalOnboardingSigner::new(&private_key, config.network_id) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            eprintln!("Failed to load key: {}", e);
            return;
        }
    };
    let address = signer.address().to_string();
    println!("✓ Loaded key for {}\n", address);

    let client = match DydxClient::with_signer(config, signer) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    let onboarding = match client.onboarding() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    let key_pair = match onboarding.derive_stark_key(&address, SigningMethod::TypedData).await {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Failed to derive STARK key: {}", e);
            return;
        }
    };
    println!("✓ STARK public key: {}", key_pair.public_key);
    println!("✓ STARK y-coordinate: {}", key_pair.public_key_y_coordinate);

    if std::env::var("DYDX_ONBOARD").as_deref() != Ok("1") {
        println!("\nSkipping onboarding (set DYDX_ONBOARD=1 to submit)");
        return;
    }

    let options = CreateUserOptions::with_signing_method(SigningMethod::TypedData);
    match onboarding
        .create_user(&key_pair.to_create_user_params(), &address, options)
        .await
    {
        Ok(response) => println!("\n✓ Account {} created", response.account.id),
        Err(e) => println!("\n✗ Error: {}", e),
    }
}
