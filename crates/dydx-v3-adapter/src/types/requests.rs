/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{MarketStatisticDay, SigningMethod};

/// Body of the onboarding request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserParams {
    pub stark_key: String,
    pub stark_key_y_coordinate: String,
}

/// Optional inputs of `create_user`
///
/// With `signature: None` the onboarding client signs the request itself
/// using `signing_method`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserOptions {
    pub signature: Option<String>,
    pub signing_method: SigningMethod,
}

impl CreateUserOptions {
    /// Reuse a signature produced elsewhere, e.g. by a browser wallet
    pub fn with_signature(signature: impl Into<String>) -> Self {
        Self {
            signature: Some(signature.into()),
            ..Self::default()
        }
    }

    pub fn with_signing_method(signing_method: SigningMethod) -> Self {
        Self {
            signature: None,
            signing_method,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetStatsParams {
    pub market: String,
    pub days: Option<MarketStatisticDay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTradesParams {
    pub market: String,
    pub starting_before_or_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetHistoricalFundingParams {
    pub market: String,
    pub effective_before_or_at: Option<DateTime<Utc>>,
}

impl GetStatsParams {
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            days: None,
        }
    }
}

impl GetTradesParams {
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            starting_before_or_at: None,
        }
    }
}

impl GetHistoricalFundingParams {
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            effective_before_or_at: None,
        }
    }
}
