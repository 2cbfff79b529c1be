/*
[INPUT]:  HTTP configuration (host, network, timeouts) and request descriptors
[OUTPUT]: Configured reqwest transport and parsed JSON responses
[POS]:    HTTP layer - core client implementation shared by all components
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::{DydxError, Result};

/// Production API host
pub const API_HOST_MAINNET: &str = "https://api.dydx.exchange";
/// Staging API host (Ropsten)
pub const API_HOST_ROPSTEN: &str = "https://api.stage.dydx.exchange";

pub const NETWORK_ID_MAINNET: u64 = 1;
pub const NETWORK_ID_ROPSTEN: u64 = 3;

/// Every endpoint lives under this prefix
const API_VERSION_PREFIX: &str = "v3";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub network_id: u64,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: API_HOST_MAINNET.to_string(),
            network_id: NETWORK_ID_MAINNET,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another host
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }
}

/// One outgoing request, built per call and consumed by [`HttpTransport::execute`]
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Thin wrapper over reqwest bound to one API host
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
    host: String,
}

impl HttpTransport {
    /// Create a transport for the configured host
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let host = config.host.trim_end_matches('/').to_string();
        if host.is_empty() {
            return Err(DydxError::Config("API host must not be empty".to_string()));
        }
        Url::parse(&host)?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { http_client, host })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Build the absolute URL of a versioned endpoint
    ///
    /// `request_path` may already carry a query string.
    pub fn endpoint_url(&self, request_path: &str) -> Result<Url> {
        let url = format!("{}/{}/{}", self.host, API_VERSION_PREFIX, request_path);
        Ok(Url::parse(&url)?)
    }

    /// Send a request and decode the JSON body of a 2xx response
    ///
    /// Any other status is returned as [`DydxError::Api`] with the raw body.
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestDescriptor) -> Result<T> {
        debug!(method = %request.method, url = %request.url, "dispatching request");

        let mut builder = self.http_client.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            warn!(status = status.as_u16(), "request rejected by API");
            return Err(DydxError::api_error(status, body));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Append encoded query parameters to a request path
///
/// Fields serialized as `None` are omitted entirely; when nothing remains the
/// path is returned unchanged.
pub fn generate_query_path<P: Serialize + ?Sized>(request_path: &str, params: &P) -> Result<String> {
    let query = serde_urlencoded::to_string(params)?;
    if query.is_empty() {
        Ok(request_path.to_string())
    } else {
        Ok(format!("{request_path}?{query}"))
    }
}
