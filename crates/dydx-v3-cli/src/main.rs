/*
[INPUT]:  CLI arguments, optional YAML configuration file, DYDX_ETH_PRIVATE_KEY
[OUTPUT]: Pretty-printed JSON result on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dydx_v3_cli::{CliConfig, Command, PRIVATE_KEY_ENV, run};

#[derive(Parser, Debug)]
#[command(name = "dydx-v3-cli", version, about = "dYdX v3 public data and onboarding client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Overrides the configured API host
    #[arg(long, value_name = "URL")]
    host: Option<String>,
    /// Overrides the configured network id
    #[arg(long = "network-id", value_name = "ID")]
    network_id: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    }
    .with_overrides(args.host, args.network_id);
    info!(host = %config.host, network_id = config.network_id, "configuration loaded");

    let private_key = std::env::var(PRIVATE_KEY_ENV).ok();
    debug!(has_private_key = private_key.is_some(), "environment inspected");

    let output = run(args.command, &config, private_key.as_deref()).await?;
    let rendered = serde_json::to_string_pretty(&output).context("render output")?;
    println!("{rendered}");

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<CliConfig> {
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
