//! Configuration management
//! Load settings from per-network .env files (.env.localhost, .env.rinkeby)
//!
//! Author: AI-Generated
//! Created: 2026-07-30

use crate::addresses;
use crate::error::DeployError;
use alloy::primitives::Address;
use anyhow::{Context, Result};
use std::path::Path;
use std::str::FromStr;

/// Deployer configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct DeployerConfig {
    pub network: String,
    pub rpc_url: String,
    pub chain_id: u64,
    /// Deployer account private key (hex)
    pub private_key: String,
    /// Uniswap V3 factory; defaults to the canonical address
    pub factory: Address,
    /// Manifest path override from the environment
    pub manifest_file: Option<String>,
}

pub fn load_config(network: &str) -> Result<DeployerConfig> {
    if !addresses::is_supported(network) {
        return Err(DeployError::UnsupportedNetwork(network.to_string()).into());
    }

    // Prefer the chain-specific file; fall back to a plain .env for
    // single-network setups. Process env always wins over file contents.
    let env_file = format!(".env.{}", network);
    if Path::new(&env_file).exists() {
        dotenv::from_filename(&env_file).ok();
    } else {
        dotenv::dotenv().ok();
    }

    Ok(DeployerConfig {
        network: network.to_string(),
        rpc_url: resolve_rpc_url(network)?,
        chain_id: match std::env::var("CHAIN_ID") {
            Ok(v) => v.parse().context("CHAIN_ID must be numeric")?,
            Err(_) => addresses::default_chain_id(network)?,
        },
        private_key: std::env::var("DEPLOYER_PK").context("DEPLOYER_PK not set")?,
        factory: match std::env::var("UNISWAP_V3_FACTORY") {
            Ok(v) => Address::from_str(&v).context("Invalid UNISWAP_V3_FACTORY address")?,
            Err(_) => addresses::UNISWAP_V3_FACTORY,
        },
        manifest_file: std::env::var("DEPLOY_MANIFEST").ok(),
    })
}

/// RPC endpoint for a network: explicit RPC_URL, the local node for the
/// fork, or an Alchemy URL built from ALCHEMY_ID for public testnets.
fn resolve_rpc_url(network: &str) -> Result<String> {
    if let Ok(url) = std::env::var("RPC_URL") {
        return Ok(url);
    }
    if network == "localhost" {
        return Ok("http://localhost:8545".to_string());
    }
    let alchemy_id =
        std::env::var("ALCHEMY_ID").context("RPC_URL not set and ALCHEMY_ID not set")?;
    Ok(format!(
        "https://eth-{}.alchemyapi.io/v2/{}",
        network, alchemy_id
    ))
}
