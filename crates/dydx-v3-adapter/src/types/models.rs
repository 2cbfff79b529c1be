/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Response records that keep the API's values verbatim
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{MarketStatus, MarketType, OrderSide};

// Numeric values and timestamps are kept as the strings the API sends.
// Fields not modelled here land in `extra` and are serialized back unchanged.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketResponseObject {
    pub market: String,
    pub status: MarketStatus,
    pub base_asset: String,
    pub quote_asset: String,
    pub step_size: String,
    pub tick_size: String,
    pub index_price: String,
    pub oracle_price: String,
    #[serde(rename = "priceChange24H")]
    pub price_change_24h: String,
    pub next_funding_rate: String,
    pub next_funding_at: String,
    pub min_order_size: String,
    #[serde(rename = "type")]
    pub market_type: MarketType,
    pub initial_margin_fraction: String,
    pub maintenance_margin_fraction: String,
    #[serde(rename = "volume24H")]
    pub volume_24h: String,
    #[serde(rename = "trades24H")]
    pub trades_24h: String,
    pub open_interest: String,
    pub incremental_initial_margin_fraction: String,
    pub incremental_position_size: String,
    pub max_position_size: String,
    pub baseline_position_size: String,
    pub asset_resolution: String,
    pub synthetic_asset_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Market info keyed by market id, e.g. `BTC-USD`
pub type MarketsResponseObject = HashMap<String, MarketResponseObject>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderbookResponseOrder {
    pub price: String,
    pub size: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderbookResponseObject {
    pub asks: Vec<OrderbookResponseOrder>,
    pub bids: Vec<OrderbookResponseOrder>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatistic {
    pub market: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub base_volume: String,
    pub quote_volume: String,
    #[serde(rename = "type")]
    pub market_type: MarketType,
    pub fees: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Statistics keyed by market id
pub type MarketStatisticResponseObject = HashMap<String, MarketStatistic>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub side: OrderSide,
    pub size: String,
    pub price: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidation: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalFunding {
    pub market: String,
    pub rate: String,
    pub price: String,
    pub effective_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type HistoricalFundingResponseObject = Vec<HistoricalFunding>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseObject {
    pub ethereum_address: String,
    #[serde(default)]
    pub is_registered: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub maker_fee_rate: Option<String>,
    #[serde(default)]
    pub taker_fee_rate: Option<String>,
    #[serde(default)]
    pub user_data: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponseObject {
    pub id: String,
    pub stark_key: String,
    pub position_id: String,
    pub equity: String,
    pub free_collateral: String,
    pub pending_deposits: String,
    pub pending_withdrawals: String,
    #[serde(default)]
    pub open_positions: HashMap<String, Value>,
    #[serde(default)]
    pub account_number: Option<String>,
    pub quote_balance: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// API key issued during onboarding
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyCredentials {
    pub key: String,
    pub secret: String,
    pub passphrase: String,
}

impl fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}
