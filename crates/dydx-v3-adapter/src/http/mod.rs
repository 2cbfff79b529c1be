/*
[INPUT]:  Host configuration, request descriptors and signing delegate
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod onboarding;
pub mod public;

pub use error::{DydxError, Result};

pub use client::{
    API_HOST_MAINNET, API_HOST_ROPSTEN, ClientConfig, HttpTransport, NETWORK_ID_MAINNET,
    NETWORK_ID_ROPSTEN, RequestDescriptor, generate_query_path,
};
pub use onboarding::{HEADER_ETHEREUM_ADDRESS, HEADER_SIGNATURE, OnboardingClient};
pub use public::PublicClient;
