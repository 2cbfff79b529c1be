/*
[INPUT]:  Seed bytes or hex signature strings
[OUTPUT]: Deterministic STARK key pair (x, y, private key) as 64-digit hex
[POS]:    Key derivation layer - keccak seed reduction and curve multiplication
[UPDATE]: When changing key derivation or hex formatting
*/

use std::fmt;

use alloy_primitives::{U256, keccak256};
use serde::{Deserialize, Serialize};
use starknet_types_core::curve::ProjectivePoint;
use starknet_types_core::felt::Felt;

use crate::http::{DydxError, Result};
use crate::types::CreateUserParams;

/// Generator of the STARK-friendly curve
const GENERATOR_X: Felt =
    Felt::from_hex_unchecked("0x1ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca");
const GENERATOR_Y: Felt =
    Felt::from_hex_unchecked("0x5668060aa49730b7be4801df46ec62de53ecd11abe43a32873000c36e8dc1f");

/// Bits dropped from the keccak digest so the key fits below the curve order
const SEED_SHIFT_BITS: usize = 5;

/// STARK key pair together with the public key's Y coordinate
///
/// All values are lowercase hex, zero-padded to 64 digits, without `0x`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPairWithYCoordinate {
    pub public_key: String,
    pub public_key_y_coordinate: String,
    pub private_key: String,
}

impl KeyPairWithYCoordinate {
    /// Body for the onboarding request registering this key
    pub fn to_create_user_params(&self) -> CreateUserParams {
        CreateUserParams {
            stark_key: self.public_key.clone(),
            stark_key_y_coordinate: self.public_key_y_coordinate.clone(),
        }
    }
}

impl fmt::Debug for KeyPairWithYCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPairWithYCoordinate")
            .field("public_key", &self.public_key)
            .field("public_key_y_coordinate", &self.public_key_y_coordinate)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Derive a key pair from arbitrary seed bytes
///
/// private = keccak256(data) >> 5, public = private * G.
pub fn key_pair_from_data(data: &[u8]) -> Result<KeyPairWithYCoordinate> {
    if data.is_empty() {
        return Err(DydxError::KeyDerivation("seed data is empty".to_string()));
    }

    let seed = U256::from_be_bytes(keccak256(data).0) >> SEED_SHIFT_BITS;
    let private_key = Felt::from_bytes_be(&seed.to_be_bytes::<32>());

    let generator = ProjectivePoint::from_affine(GENERATOR_X, GENERATOR_Y)
        .map_err(|e| DydxError::KeyDerivation(format!("invalid curve generator: {e:?}")))?;
    let public_point = (&generator * private_key)
        .to_affine()
        .map_err(|e| DydxError::KeyDerivation(format!("public key at infinity: {e:?}")))?;

    Ok(KeyPairWithYCoordinate {
        public_key: felt_to_hex(&public_point.x()),
        public_key_y_coordinate: felt_to_hex(&public_point.y()),
        private_key: felt_to_hex(&private_key),
    })
}

/// Derive a key pair from a hex signature, `0x` prefix optional
pub fn derive_from_signature(signature: &str) -> Result<KeyPairWithYCoordinate> {
    let signature = signature.trim();
    let signature = signature.strip_prefix("0x").unwrap_or(signature);
    let bytes = hex::decode(signature)?;
    key_pair_from_data(&bytes)
}

fn felt_to_hex(value: &Felt) -> String {
    hex::encode(value.to_bytes_be())
}
