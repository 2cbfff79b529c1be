/*
[INPUT]:  STARK public key, Ethereum address and optional pre-computed signature
[OUTPUT]: Created user/account/API key, or a derived STARK key pair
[POS]:    HTTP layer - onboarding endpoints (Ethereum-signature auth)
[UPDATE]: When onboarding headers, signing actions or derivation change
*/

use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use tracing::{info, instrument};

use crate::auth::OnboardingSigner;
use crate::http::client::{ClientConfig, HttpTransport, RequestDescriptor};
use crate::http::Result;
use crate::stark::{KeyPairWithYCoordinate, derive_from_signature};
use crate::types::{
    CreateUserOptions, CreateUserParams, CreateUserResponse, OnboardingAction, SigningMethod,
};

pub const HEADER_SIGNATURE: &str = "DYDX-SIGNATURE";
pub const HEADER_ETHEREUM_ADDRESS: &str = "DYDX-ETHEREUM-ADDRESS";

/// Client for onboarding a new Ethereum identity
#[derive(Clone)]
pub struct OnboardingClient {
    transport: HttpTransport,
    signer: Arc<dyn OnboardingSigner>,
}

impl fmt::Debug for OnboardingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnboardingClient")
            .field("host", &self.transport.host())
            .field("network_id", &self.signer.network_id())
            .finish()
    }
}

impl OnboardingClient {
    /// Create a client for `host` signing through `signer`
    pub fn new(host: &str, signer: Arc<dyn OnboardingSigner>) -> Result<Self> {
        Self::with_config(&ClientConfig::with_host(host), signer)
    }

    pub fn with_config(config: &ClientConfig, signer: Arc<dyn OnboardingSigner>) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            signer,
        })
    }

    pub fn host(&self) -> &str {
        self.transport.host()
    }

    pub fn network_id(&self) -> u64 {
        self.signer.network_id()
    }

    /// Build the authenticated POST for an onboarding endpoint
    ///
    /// A caller-supplied signature is used as is; otherwise the signer is
    /// asked exactly once for an `Onboarding` signature.
    pub async fn build_post(
        &self,
        endpoint: &str,
        body: &CreateUserParams,
        ethereum_address: &str,
        options: &CreateUserOptions,
    ) -> Result<RequestDescriptor> {
        let signature = match &options.signature {
            Some(signature) => signature.clone(),
            None => {
                self.signer
                    .sign(
                        ethereum_address,
                        options.signing_method,
                        OnboardingAction::Onboarding,
                    )
                    .await?
            }
        };

        let url = self.transport.endpoint_url(endpoint)?;
        RequestDescriptor::new(Method::POST, url)
            .header(HEADER_SIGNATURE, signature)
            .header(HEADER_ETHEREUM_ADDRESS, ethereum_address)
            .json(body)
    }

    /// Create a user, account and API key in one onboarding request
    ///
    /// POST /v3/onboarding
    #[instrument(skip(self, params, options), fields(has_signature = options.signature.is_some()))]
    pub async fn create_user(
        &self,
        params: &CreateUserParams,
        ethereum_address: &str,
        options: CreateUserOptions,
    ) -> Result<CreateUserResponse> {
        let request = self
            .build_post("onboarding", params, ethereum_address, &options)
            .await?;
        let response: CreateUserResponse = self.transport.execute(request).await?;
        info!(account_id = %response.account.id, "onboarding complete");
        Ok(response)
    }

    /// Derive a STARK key pair deterministically from the Ethereum key
    ///
    /// The same address, signing method and underlying key always produce the
    /// same pair.
    #[instrument(skip(self))]
    pub async fn derive_stark_key(
        &self,
        ethereum_address: &str,
        signing_method: SigningMethod,
    ) -> Result<KeyPairWithYCoordinate> {
        let signature = self
            .signer
            .sign(
                ethereum_address,
                signing_method,
                OnboardingAction::KeyDerivation,
            )
            .await?;
        derive_from_signature(&signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockOnboardingSigner;
    use crate::http::DydxError;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn params() -> CreateUserParams {
        CreateUserParams {
            stark_key: "04d6d1a9".to_string(),
            stark_key_y_coordinate: "0712ff01".to_string(),
        }
    }

    fn onboarding_response() -> serde_json::Value {
        serde_json::json!({
            "apiKey": {
                "key": "290decd9-548b-62a8-d603-45a988386fc8",
                "secret": "secret-value",
                "passphrase": "passphrase-value"
            },
            "user": {
                "ethereumAddress": ADDRESS.to_ascii_lowercase(),
                "isRegistered": true,
                "email": null,
                "username": null,
                "makerFeeRate": "0.0005",
                "takerFeeRate": "0.001",
                "userData": {}
            },
            "account": {
                "id": "dace1648-c854-5aed-9879-88899bf647a3",
                "starkKey": "04d6d1a9",
                "positionId": "1812",
                "equity": "0",
                "freeCollateral": "0",
                "pendingDeposits": "0",
                "pendingWithdrawals": "0",
                "openPositions": {},
                "accountNumber": "0",
                "quoteBalance": "0",
                "createdAt": "2021-04-09T21:08:34.984Z"
            }
        })
    }

    #[tokio::test]
    async fn test_build_post_uses_supplied_signature() {
        let signer = Arc::new(MockOnboardingSigner::new(1, "0xcomputed"));
        let client = OnboardingClient::new("https://api.dydx.exchange", signer.clone()).unwrap();

        let request = client
            .build_post(
                "onboarding",
                &params(),
                ADDRESS,
                &CreateUserOptions::with_signature("0xsupplied"),
            )
            .await
            .unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.as_str(), "https://api.dydx.exchange/v3/onboarding");
        assert_eq!(
            request.headers,
            vec![
                (HEADER_SIGNATURE, "0xsupplied".to_string()),
                (HEADER_ETHEREUM_ADDRESS, ADDRESS.to_string()),
            ]
        );
        assert_eq!(signer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_user_signs_when_no_signature() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/onboarding"))
            .and(header(HEADER_SIGNATURE, "0xcomputed"))
            .and(header(HEADER_ETHEREUM_ADDRESS, ADDRESS))
            .and(body_json(serde_json::json!({
                "starkKey": "04d6d1a9",
                "starkKeyYCoordinate": "0712ff01",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(onboarding_response()))
            .expect(1)
            .mount(&server)
            .await;

        let signer = Arc::new(MockOnboardingSigner::new(1, "0xcomputed"));
        let client = OnboardingClient::new(&server.uri(), signer.clone()).unwrap();

        let response = client
            .create_user(&params(), ADDRESS, CreateUserOptions::default())
            .await
            .expect("create_user failed");

        assert_eq!(response.account.position_id, "1812");
        assert_eq!(response.api_key.passphrase, "passphrase-value");
        assert!(response.user.is_registered);
        assert_eq!(
            signer.recorded(),
            vec![(SigningMethod::Hash, OnboardingAction::Onboarding)]
        );
    }

    #[tokio::test]
    async fn test_create_user_propagates_signer_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/onboarding"))
            .respond_with(ResponseTemplate::new(201).set_body_json(onboarding_response()))
            .expect(0)
            .mount(&server)
            .await;

        let signer = Arc::new(MockOnboardingSigner::rejecting(1));
        let client = OnboardingClient::new(&server.uri(), signer).unwrap();

        let err = client
            .create_user(&params(), ADDRESS, CreateUserOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DydxError::Signing(_)));
    }

    #[tokio::test]
    async fn test_create_user_propagates_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/onboarding"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_string(r#"{"errors":[{"msg":"User already exists"}]}"#),
            )
            .mount(&server)
            .await;

        let signer = Arc::new(MockOnboardingSigner::new(1, "0xcomputed"));
        let client = OnboardingClient::new(&server.uri(), signer).unwrap();

        let err = client
            .create_user(&params(), ADDRESS, CreateUserOptions::with_signature("0xsig"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(409));
        match err {
            DydxError::Api { body, .. } => assert!(body.contains("User already exists")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_derive_stark_key_signs_key_derivation_action() {
        let signer = Arc::new(MockOnboardingSigner::new(1, "0xdeadbeef"));
        let client = OnboardingClient::new("https://api.dydx.exchange", signer.clone()).unwrap();

        let pair = client
            .derive_stark_key(ADDRESS, SigningMethod::TypedData)
            .await
            .unwrap();

        assert_eq!(pair, derive_from_signature("deadbeef").unwrap());
        assert_eq!(
            signer.recorded(),
            vec![(SigningMethod::TypedData, OnboardingAction::KeyDerivation)]
        );
    }
}
