/*
[INPUT]:  Raw bytes, typically an Ethereum signature
[OUTPUT]: STARK key pairs with Y coordinate
[POS]:    Key derivation layer - secondary key system for L2 trading
[UPDATE]: When key derivation or key encoding changes
*/

pub mod key_pair;

pub use key_pair::{KeyPairWithYCoordinate, derive_from_signature, key_pair_from_data};
