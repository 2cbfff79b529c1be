/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public dYdX v3 adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod client;
pub mod http;
pub mod stark;
pub mod types;

pub use client::DydxClient;

// Re-export commonly used types from auth
pub use auth::{LocalOnboardingSigner, MockOnboardingSigner, OnboardingSigner};

// Re-export commonly used types from http
pub use http::{
    API_HOST_MAINNET,
    API_HOST_ROPSTEN,
    ClientConfig,
    DydxError,
    NETWORK_ID_MAINNET,
    NETWORK_ID_ROPSTEN,
    OnboardingClient,
    PublicClient,
    RequestDescriptor,
    Result,
};

pub use stark::{KeyPairWithYCoordinate, derive_from_signature, key_pair_from_data};

// Re-export all types
pub use types::*;
