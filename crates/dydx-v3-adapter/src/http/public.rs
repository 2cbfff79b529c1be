/*
[INPUT]:  Market identifiers, addresses and optional query filters
[OUTPUT]: Market data (markets, orderbook, stats, trades, funding) and existence checks
[POS]:    HTTP layer - public endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::client::{ClientConfig, HttpTransport, RequestDescriptor, generate_query_path};
use crate::http::{DydxError, Result};
use crate::types::{
    ExistsResponse, GetHistoricalFundingParams, GetStatsParams, GetTradesParams,
    HistoricalFundingResponse, MarketStatisticDay, MarketStatsResponse, MarketsResponse,
    OrderbookResponse, TradesResponse,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressQuery<'a> {
    ethereum_address: &'a str,
}

#[derive(Serialize)]
struct UsernameQuery<'a> {
    username: &'a str,
}

#[derive(Serialize)]
struct MarketQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    market: Option<&'a str>,
}

#[derive(Serialize)]
struct StatsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    days: Option<MarketStatisticDay>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TradesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    starting_before_or_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FundingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_before_or_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct NoQuery {}

/// Client for the unauthenticated market-data endpoints
#[derive(Debug, Clone)]
pub struct PublicClient {
    transport: HttpTransport,
}

impl PublicClient {
    /// Create a client for `host` with default timeouts
    pub fn new(host: &str) -> Result<Self> {
        Self::with_config(&ClientConfig::with_host(host))
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    pub fn host(&self) -> &str {
        self.transport.host()
    }

    /// Build the GET descriptor for a public endpoint
    pub fn build_get<P: Serialize + ?Sized>(
        &self,
        request_path: &str,
        params: &P,
    ) -> Result<RequestDescriptor> {
        let path = generate_query_path(request_path, params)?;
        let url = self.transport.endpoint_url(&path)?;
        Ok(RequestDescriptor::new(Method::GET, url))
    }

    /// Build the GET descriptor for a per-market endpoint
    ///
    /// `market` is percent-encoded as a single path segment, so `/` inside it
    /// never reaches another endpoint.
    pub fn build_market_get<P: Serialize + ?Sized>(
        &self,
        resource: &str,
        market: &str,
        params: &P,
    ) -> Result<RequestDescriptor> {
        if matches!(market, "" | "." | "..") {
            return Err(DydxError::InvalidRequest(format!(
                "invalid market id: {market:?}"
            )));
        }

        let mut request = self.build_get(resource, params)?;
        request
            .url
            .path_segments_mut()
            .map_err(|_| DydxError::Config("API host cannot carry a path".to_string()))?
            .push(market);
        Ok(request)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestDescriptor) -> Result<T> {
        self.transport.execute(request).await
    }

    /// Check if a user exists for an Ethereum address
    ///
    /// GET /v3/users/exists?ethereumAddress={address}
    pub async fn does_user_exist_with_address(&self, ethereum_address: &str) -> Result<ExistsResponse> {
        let request = self.build_get("users/exists", &AddressQuery { ethereum_address })?;
        self.send(request).await
    }

    /// Check if a username is already taken
    ///
    /// GET /v3/usernames?username={username}
    pub async fn does_user_exist_with_username(&self, username: &str) -> Result<ExistsResponse> {
        let request = self.build_get("usernames", &UsernameQuery { username })?;
        self.send(request).await
    }

    /// Market information for all markets, or only `market`
    ///
    /// GET /v3/markets?market={market}
    pub async fn get_markets(&self, market: Option<&str>) -> Result<MarketsResponse> {
        let request = self.build_get("markets", &MarketQuery { market })?;
        self.send(request).await
    }

    /// GET /v3/orderbook/{market}
    pub async fn get_order_book(&self, market: &str) -> Result<OrderbookResponse> {
        let request = self.build_market_get("orderbook", market, &NoQuery {})?;
        self.send(request).await
    }

    /// Market statistics, optionally over a fixed window
    ///
    /// GET /v3/stats/{market}?days={days}
    pub async fn get_stats(&self, params: &GetStatsParams) -> Result<MarketStatsResponse> {
        let query = StatsQuery { days: params.days };
        let request = self.build_market_get("stats", &params.market, &query)?;
        self.send(request).await
    }

    /// Trades up to `starting_before_or_at`, newest first
    ///
    /// GET /v3/trades/{market}?startingBeforeOrAt={iso8601}
    pub async fn get_trades(&self, params: &GetTradesParams) -> Result<TradesResponse> {
        let query = TradesQuery {
            starting_before_or_at: params.starting_before_or_at,
        };
        let request = self.build_market_get("trades", &params.market, &query)?;
        self.send(request).await
    }

    /// Funding rates up to `effective_before_or_at`
    ///
    /// GET /v3/historical-funding/{market}?effectiveBeforeOrAt={iso8601}
    pub async fn get_historical_funding(
        &self,
        params: &GetHistoricalFundingParams,
    ) -> Result<HistoricalFundingResponse> {
        let query = FundingQuery {
            effective_before_or_at: params.effective_before_or_at,
        };
        let request = self.build_market_get("historical-funding", &params.market, &query)?;
        self.send(request).await
    }
}
