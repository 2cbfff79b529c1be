/*
[INPUT]:  EVM private key (hex string) and network id
[OUTPUT]: Typed onboarding signatures for the key's address
[POS]:    Auth layer - local Ethereum key implementation of the signing delegate
[UPDATE]: When signing logic or EVM address formatting changes
*/

use std::fmt;
use std::str::FromStr;

use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tracing::debug;

use crate::auth::OnboardingSigner;
use crate::auth::eip712::{SignatureType, onboarding_digest, typed_signature};
use crate::http::{DydxError, Result};
use crate::types::{OnboardingAction, SigningMethod};

/// Signing delegate backed by an in-process Ethereum private key
pub struct LocalOnboardingSigner {
    signer: PrivateKeySigner,
    address: String,
    network_id: u64,
}

impl LocalOnboardingSigner {
    /// Create a signer from a hex-encoded private key
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings.
    pub fn new(private_key_hex: &str, network_id: u64) -> Result<Self> {
        let private_key_hex = private_key_hex.trim();
        let private_key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let signer = PrivateKeySigner::from_str(private_key_hex)
            .map_err(|e| DydxError::Config(format!("Invalid EVM private key: {}", e)))?;

        let address = signer.address().to_checksum(None);

        Ok(Self {
            signer,
            address,
            network_id,
        })
    }

    /// Checksummed address of the key
    pub fn address(&self) -> &str {
        &self.address
    }

    fn ensure_address(&self, ethereum_address: &str) -> Result<()> {
        if normalize_evm_address(ethereum_address) == normalize_evm_address(&self.address) {
            Ok(())
        } else {
            Err(DydxError::Signing(format!(
                "Wallet address mismatch: requested {ethereum_address}, key controls {}",
                self.address
            )))
        }
    }
}

impl fmt::Debug for LocalOnboardingSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalOnboardingSigner")
            .field("address", &self.address)
            .field("network_id", &self.network_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl OnboardingSigner for LocalOnboardingSigner {
    fn network_id(&self) -> u64 {
        self.network_id
    }

    async fn sign(
        &self,
        ethereum_address: &str,
        signing_method: SigningMethod,
        action: OnboardingAction,
    ) -> Result<String> {
        self.ensure_address(ethereum_address)?;

        let digest = onboarding_digest(self.network_id, action);
        debug!(%action, ?signing_method, network_id = self.network_id, "signing onboarding action");

        let signature = match signing_method {
            // Wallets that only expose personal_sign prepend the EIP-191 header.
            SigningMethod::Hash => self.signer.sign_message(digest.as_slice()).await,
            SigningMethod::UnsafeHash | SigningMethod::TypedData => {
                self.signer.sign_hash(&digest).await
            }
        }
        .map_err(|e| DydxError::Signing(format!("Failed to sign onboarding action: {}", e)))?;

        Ok(typed_signature(
            signature.r(),
            signature.s(),
            signature.v(),
            SignatureType::for_method(signing_method),
        ))
    }
}

fn normalize_evm_address(address: &str) -> String {
    let address = address.trim();
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, B256, Signature, U256};

    // Well-known development key
    const PK: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn recover(signature_hex: &str, digest: B256, prefixed: bool) -> Address {
        let raw = hex::decode(&signature_hex[2..132]).unwrap();
        let r = U256::from_be_slice(&raw[..32]);
        let s = U256::from_be_slice(&raw[32..64]);
        let signature = Signature::new(r, s, raw[64] == 28);
        if prefixed {
            signature.recover_address_from_msg(digest.as_slice()).unwrap()
        } else {
            signature.recover_address_from_prehash(&digest).unwrap()
        }
    }

    #[test]
    fn test_local_signer_address() {
        let signer = LocalOnboardingSigner::new(PK, 1).unwrap();
        assert_eq!(signer.address(), ADDRESS);
        assert_eq!(signer.network_id(), 1);

        let unprefixed = LocalOnboardingSigner::new(&PK[2..], 3).unwrap();
        assert_eq!(unprefixed.address(), ADDRESS);
    }

    #[test]
    fn test_invalid_private_key() {
        let err = LocalOnboardingSigner::new("0xnot-a-key", 1).unwrap_err();
        assert!(matches!(err, DydxError::Config(_)));
    }

    #[tokio::test]
    async fn test_hash_signature_recovers_to_signer() {
        let signer = LocalOnboardingSigner::new(PK, 1).unwrap();
        let signature = signer
            .sign(&ADDRESS.to_ascii_lowercase(), SigningMethod::Hash, OnboardingAction::Onboarding)
            .await
            .unwrap();

        assert!(signature.starts_with("0x"));
        assert_eq!(signature.len(), 2 + 130 + 2);
        assert!(signature.ends_with("01"));

        let digest = onboarding_digest(1, OnboardingAction::Onboarding);
        assert_eq!(recover(&signature, digest, true).to_checksum(None), ADDRESS);
    }

    #[tokio::test]
    async fn test_typed_data_signature_recovers_to_signer() {
        let signer = LocalOnboardingSigner::new(PK, 3).unwrap();
        let signature = signer
            .sign(ADDRESS, SigningMethod::TypedData, OnboardingAction::KeyDerivation)
            .await
            .unwrap();

        assert!(signature.ends_with("00"));

        let digest = onboarding_digest(3, OnboardingAction::KeyDerivation);
        assert_eq!(recover(&signature, digest, false).to_checksum(None), ADDRESS);
    }

    #[tokio::test]
    async fn test_signatures_are_deterministic() {
        let signer = LocalOnboardingSigner::new(PK, 1).unwrap();
        let first = signer
            .sign(ADDRESS, SigningMethod::Hash, OnboardingAction::KeyDerivation)
            .await
            .unwrap();
        let second = signer
            .sign(ADDRESS, SigningMethod::Hash, OnboardingAction::KeyDerivation)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_address_mismatch_is_rejected() {
        let signer = LocalOnboardingSigner::new(PK, 1).unwrap();
        let err = signer
            .sign(
                "0x0000000000000000000000000000000000000000",
                SigningMethod::Hash,
                OnboardingAction::Onboarding,
            )
            .await
            .unwrap_err();

        match err {
            DydxError::Signing(msg) => {
                assert!(msg.to_ascii_lowercase().contains("address mismatch"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
