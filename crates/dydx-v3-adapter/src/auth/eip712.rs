/*
[INPUT]:  Onboarding action and network id
[OUTPUT]: EIP-712 digest of the dYdX onboarding struct
[POS]:    Auth layer - structured-data hashing for onboarding signatures
[UPDATE]: When the onboarding struct, domain or typed-signature format change
*/

use alloy_primitives::{B256, U256, keccak256};

use crate::http::client::NETWORK_ID_MAINNET;
use crate::types::{OnboardingAction, SigningMethod};

const DOMAIN_TYPE: &str = "EIP712Domain(string name,string version,uint256 chainId)";
const DOMAIN_NAME: &str = "dYdX";
const DOMAIN_VERSION: &str = "1.0";

// Mainnet signatures are pinned to the official frontend origin.
const ONBOARDING_TYPE_MAINNET: &str = "dYdX(string action,string onlySignOn)";
const ONBOARDING_TYPE_TESTNET: &str = "dYdX(string action)";
const ONLY_SIGN_ON_MAINNET: &str = "https://trade.dydx.exchange";

/// Signature type byte appended after the 65-byte ECDSA signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SignatureType {
    NoPrepend = 0,
    Decimal = 1,
}

impl SignatureType {
    pub fn for_method(signing_method: SigningMethod) -> Self {
        match signing_method {
            SigningMethod::Hash => SignatureType::Decimal,
            SigningMethod::UnsafeHash | SigningMethod::TypedData => SignatureType::NoPrepend,
        }
    }
}

/// EIP-712 domain separator for `network_id`
pub fn domain_hash(network_id: u64) -> B256 {
    let mut encoded = Vec::with_capacity(32 * 4);
    encoded.extend_from_slice(keccak256(DOMAIN_TYPE).as_slice());
    encoded.extend_from_slice(keccak256(DOMAIN_NAME).as_slice());
    encoded.extend_from_slice(keccak256(DOMAIN_VERSION).as_slice());
    encoded.extend_from_slice(&U256::from(network_id).to_be_bytes::<32>());
    keccak256(&encoded)
}

/// Hash of the onboarding struct carrying `action`
pub fn struct_hash(network_id: u64, action: OnboardingAction) -> B256 {
    let mainnet = network_id == NETWORK_ID_MAINNET;
    let type_string = if mainnet {
        ONBOARDING_TYPE_MAINNET
    } else {
        ONBOARDING_TYPE_TESTNET
    };

    let mut encoded = Vec::with_capacity(32 * 3);
    encoded.extend_from_slice(keccak256(type_string).as_slice());
    encoded.extend_from_slice(keccak256(action.as_str()).as_slice());
    if mainnet {
        encoded.extend_from_slice(keccak256(ONLY_SIGN_ON_MAINNET).as_slice());
    }
    keccak256(&encoded)
}

/// Final `0x1901 ‖ domain ‖ struct` digest that gets signed
pub fn onboarding_digest(network_id: u64, action: OnboardingAction) -> B256 {
    let mut encoded = Vec::with_capacity(2 + 32 * 2);
    encoded.extend_from_slice(b"\x19\x01");
    encoded.extend_from_slice(domain_hash(network_id).as_slice());
    encoded.extend_from_slice(struct_hash(network_id, action).as_slice());
    keccak256(&encoded)
}

/// Render `0x{r}{s}{v}0{type}` from raw signature parts
pub fn typed_signature(r: U256, s: U256, y_parity: bool, signature_type: SignatureType) -> String {
    let v: u8 = if y_parity { 28 } else { 27 };
    format!("0x{r:064x}{s:064x}{v:02x}0{}", signature_type as u8)
}
