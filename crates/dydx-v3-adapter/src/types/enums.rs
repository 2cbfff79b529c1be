/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the Ethereum key signs an onboarding action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SigningMethod {
    /// EIP-191 personal signature over the EIP-712 digest
    #[default]
    Hash,
    /// Raw signature over the EIP-712 digest, no message prefix
    UnsafeHash,
    /// `eth_signTypedData` over the EIP-712 struct
    TypedData,
}

/// Semantic action being authorized by an onboarding signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnboardingAction {
    #[serde(rename = "dYdX Onboarding")]
    Onboarding,
    #[serde(rename = "dYdX STARK Key")]
    KeyDerivation,
}

impl OnboardingAction {
    /// String value placed in the signed `action` field
    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingAction::Onboarding => "dYdX Onboarding",
            OnboardingAction::KeyDerivation => "dYdX STARK Key",
        }
    }
}

impl fmt::Display for OnboardingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookback window for market statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketStatisticDay {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "30")]
    Thirty,
}

impl MarketStatisticDay {
    pub fn days(&self) -> u32 {
        match self {
            MarketStatisticDay::One => 1,
            MarketStatisticDay::Seven => 7,
            MarketStatisticDay::Thirty => 30,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        match days {
            1 => Some(MarketStatisticDay::One),
            7 => Some(MarketStatisticDay::Seven),
            30 => Some(MarketStatisticDay::Thirty),
            _ => None,
        }
    }
}

/// Trading status of a market
///
/// Values the API adds later are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarketStatus {
    Online,
    Offline,
    PostOnly,
    CancelOnly,
    Initializing,
    Other(String),
}

impl MarketStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MarketStatus::Online => "ONLINE",
            MarketStatus::Offline => "OFFLINE",
            MarketStatus::PostOnly => "POST_ONLY",
            MarketStatus::CancelOnly => "CANCEL_ONLY",
            MarketStatus::Initializing => "INITIALIZING",
            MarketStatus::Other(value) => value,
        }
    }
}

impl From<String> for MarketStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ONLINE" => MarketStatus::Online,
            "OFFLINE" => MarketStatus::Offline,
            "POST_ONLY" => MarketStatus::PostOnly,
            "CANCEL_ONLY" => MarketStatus::CancelOnly,
            "INITIALIZING" => MarketStatus::Initializing,
            _ => MarketStatus::Other(value),
        }
    }
}

impl From<MarketStatus> for String {
    fn from(status: MarketStatus) -> Self {
        match status {
            MarketStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarketType {
    Perpetual,
    Other(String),
}

impl From<String> for MarketType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PERPETUAL" => MarketType::Perpetual,
            _ => MarketType::Other(value),
        }
    }
}

impl From<MarketType> for String {
    fn from(market_type: MarketType) -> Self {
        match market_type {
            MarketType::Perpetual => "PERPETUAL".to_string(),
            MarketType::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderSide {
    Buy,
    Sell,
    Other(String),
}

impl From<String> for OrderSide {
    fn from(value: String) -> Self {
        match value.as_str() {
            "BUY" => OrderSide::Buy,
            "SELL" => OrderSide::Sell,
            _ => OrderSide::Other(value),
        }
    }
}

impl From<OrderSide> for String {
    fn from(side: OrderSide) -> Self {
        match side {
            OrderSide::Buy => "BUY".to_string(),
            OrderSide::Sell => "SELL".to_string(),
            OrderSide::Other(value) => value,
        }
    }
}
