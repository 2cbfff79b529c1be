/*
[INPUT]:  Parsed subcommand, CLI configuration, optional Ethereum private key
[OUTPUT]: JSON value describing the API result
[POS]:    Command layer - maps subcommands onto adapter calls
[UPDATE]: When adding subcommands or new adapter operations
*/

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use clap::{Subcommand, ValueEnum};
use serde_json::Value;
use tracing::info;

use dydx_v3_adapter::{
    CreateUserOptions, DydxClient, GetHistoricalFundingParams, GetStatsParams, GetTradesParams,
    LocalOnboardingSigner, MarketStatisticDay, SigningMethod,
};

use crate::config::CliConfig;

/// Environment variable holding the Ethereum private key
pub const PRIVATE_KEY_ENV: &str = "DYDX_ETH_PRIVATE_KEY";

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List markets, or a single market
    Markets {
        #[arg(long)]
        market: Option<String>,
    },
    /// Current orderbook of a market
    Orderbook { market: String },
    /// Trading statistics over 1, 7 or 30 days
    Stats {
        market: String,
        #[arg(long, value_parser = parse_days)]
        days: Option<MarketStatisticDay>,
    },
    /// Recent trades, optionally up to an RFC 3339 timestamp
    Trades {
        market: String,
        #[arg(long)]
        starting_before_or_at: Option<DateTime<Utc>>,
    },
    /// Historical funding rates
    Funding {
        market: String,
        #[arg(long)]
        effective_before_or_at: Option<DateTime<Utc>>,
    },
    /// Whether a user is registered for an Ethereum address
    UserExists { address: String },
    /// Whether a username is taken
    UsernameExists { username: String },
    /// Derive the STARK key pair controlled by an Ethereum key
    DeriveStarkKey {
        address: String,
        #[arg(long, value_enum, default_value_t = SigningMethodArg::Hash)]
        signing_method: SigningMethodArg,
    },
    /// Derive a STARK key and register a new user with it
    Onboard {
        address: String,
        #[arg(long, value_enum, default_value_t = SigningMethodArg::Hash)]
        signing_method: SigningMethodArg,
    },
    /// Print the effective configuration
    ShowConfig,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningMethodArg {
    Hash,
    UnsafeHash,
    TypedData,
}

impl From<SigningMethodArg> for SigningMethod {
    fn from(arg: SigningMethodArg) -> Self {
        match arg {
            SigningMethodArg::Hash => SigningMethod::Hash,
            SigningMethodArg::UnsafeHash => SigningMethod::UnsafeHash,
            SigningMethodArg::TypedData => SigningMethod::TypedData,
        }
    }
}

fn parse_days(value: &str) -> std::result::Result<MarketStatisticDay, String> {
    value
        .parse::<u32>()
        .ok()
        .and_then(MarketStatisticDay::from_days)
        .ok_or_else(|| format!("days must be one of 1, 7, 30 (got {value})"))
}

/// Execute `command` against the API described by `config`
///
/// `private_key` is only consulted by the signing subcommands.
pub async fn run(command: Command, config: &CliConfig, private_key: Option<&str>) -> Result<Value> {
    let client_config = config.client_config();
    let client = match &command {
        Command::DeriveStarkKey { .. } | Command::Onboard { .. } => {
            let key = private_key
                .ok_or_else(|| anyhow!("{PRIVATE_KEY_ENV} must be set for this command"))?;
            let signer = LocalOnboardingSigner::new(key, config.network_id)
                .context("load Ethereum private key")?;
            DydxClient::with_signer(client_config, Arc::new(signer))
        }
        _ => DydxClient::new(client_config),
    }
    .context("create client")?;

    let public = client.public();
    let value = match command {
        Command::Markets { market } => to_json(public.get_markets(market.as_deref()).await?)?,
        Command::Orderbook { market } => to_json(public.get_order_book(&market).await?)?,
        Command::Stats { market, days } => {
            to_json(public.get_stats(&GetStatsParams { market, days }).await?)?
        }
        Command::Trades {
            market,
            starting_before_or_at,
        } => {
            let params = GetTradesParams {
                market,
                starting_before_or_at,
            };
            to_json(public.get_trades(&params).await?)?
        }
        Command::Funding {
            market,
            effective_before_or_at,
        } => {
            let params = GetHistoricalFundingParams {
                market,
                effective_before_or_at,
            };
            to_json(public.get_historical_funding(&params).await?)?
        }
        Command::UserExists { address } => {
            to_json(public.does_user_exist_with_address(&address).await?)?
        }
        Command::UsernameExists { username } => {
            to_json(public.does_user_exist_with_username(&username).await?)?
        }
        Command::DeriveStarkKey {
            address,
            signing_method,
        } => {
            let onboarding = client.onboarding()?;
            to_json(
                onboarding
                    .derive_stark_key(&address, signing_method.into())
                    .await
                    .context("derive STARK key")?,
            )?
        }
        Command::Onboard {
            address,
            signing_method,
        } => {
            let onboarding = client.onboarding()?;
            let signing_method = signing_method.into();
            let key_pair = onboarding
                .derive_stark_key(&address, signing_method)
                .await
                .context("derive STARK key")?;
            info!(stark_key = %key_pair.public_key, "derived STARK key");

            let response = onboarding
                .create_user(
                    &key_pair.to_create_user_params(),
                    &address,
                    CreateUserOptions::with_signing_method(signing_method),
                )
                .await
                .context("onboard user")?;
            to_json(response)?
        }
        Command::ShowConfig => to_json(config)?,
    };

    Ok(value)
}

fn to_json<T: serde::Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("serialize response")
}
