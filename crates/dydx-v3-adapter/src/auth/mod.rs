/*
[INPUT]:  Ethereum keys, onboarding actions and network ids
[OUTPUT]: Typed onboarding signatures and signing errors
[POS]:    Auth layer - Ethereum-signature authentication for onboarding
[UPDATE]: When auth flow or signature methods change
*/

pub mod eip712;
pub mod evm_wallet;
pub mod wallet;

pub use evm_wallet::LocalOnboardingSigner;
pub use wallet::{MockOnboardingSigner, OnboardingSigner};
