//! Concentrated Liquidity Optimizer Deployer
//!
//! Main entry point. Ensures a Uniswap V3 pool exists for each planned
//! token pair, derives a safe tick range multiplier from the pool's
//! current tick and spacing, then deploys the strategy/vault pair against
//! it and runs the vault's one-time init() — strictly in that order, each
//! step awaited to a confirmed receipt.
//!
//! Architecture:
//! - Per-network .env files (.env.localhost, .env.rinkeby) for endpoints
//!   and the deployer key
//! - TOML manifest (deploy.<network>.toml) for plans and strategy params
//! - Plans run one at a time; a failure stops the run with earlier plans
//!   left deployed and later plans untouched
//!
//! Author: AI-Generated
//! Created: 2026-07-31
//! Modified: 2026-08-02 — --dry-run flag, deployment record log

use alloy::network::EthereumWallet;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};
use clap::Parser;
use optimizer_deployer::addresses;
use optimizer_deployer::artifacts::ArtifactStore;
use optimizer_deployer::config::load_config;
use optimizer_deployer::deployer::Deployer;
use optimizer_deployer::manifest::DeployManifest;
use optimizer_deployer::resolver::PoolResolver;
use std::sync::Arc;
use tracing::{info, warn, Level};

/// Concentrated Liquidity Optimizer Deployer — Uniswap V3
#[derive(Parser)]
#[command(name = "optimizer-deployer")]
struct Args {
    /// Network to deploy on (localhost, rinkeby)
    #[arg(short, long, env = "NETWORK", default_value = "localhost")]
    network: String,

    /// Deployment manifest path (defaults to deploy.<network>.toml)
    #[arg(short, long)]
    manifest: Option<String>,

    /// Resolve pools and derive parameters without sending deployments
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    // Parse CLI args (--network localhost|rinkeby, or NETWORK env var)
    let args = Args::parse();
    let network = args.network.to_lowercase();

    if !addresses::is_supported(&network) {
        anyhow::bail!(
            "Unsupported network: '{}'. Supported: {}",
            network,
            addresses::SUPPORTED_NETWORKS.join(", ")
        );
    }

    info!("Optimizer Deployer starting — network: {}...", network);

    let config = load_config(&network)?;
    info!(
        "Configuration loaded for {} (chain_id: {})",
        network, config.chain_id
    );
    info!("RPC URL: {}", &config.rpc_url[..40.min(config.rpc_url.len())]);
    info!("Factory: {}", config.factory);

    // Deployment manifest: CLI flag > env override > per-network default
    let manifest_path = args
        .manifest
        .or_else(|| config.manifest_file.clone())
        .unwrap_or_else(|| format!("deploy.{}.toml", network));
    let manifest = DeployManifest::load(&manifest_path)?;
    let plans = manifest.resolve_plans(&network)?;
    info!("Manifest loaded from {}: {} plans", manifest_path, plans.len());

    // Connect provider with the deployer wallet attached
    let signer: PrivateKeySigner = config.private_key.parse().context("Invalid DEPLOYER_PK")?;
    let deployer_address = signer.address();
    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(&config.rpc_url)
        .await
        .context("Failed to connect provider")?;
    let provider = Arc::new(provider);

    // Verify connection
    let block = provider.get_block_number().await?;
    info!("Connected! Current block: {} | deployer: {}", block, deployer_address);

    let resolver = PoolResolver::new(
        Arc::clone(&provider),
        config.factory,
        manifest.general.create_pool_gas_limit,
    );
    let artifacts = ArtifactStore::new(&manifest.general.artifacts_dir);

    let mut deployer = Deployer::new(
        Arc::clone(&provider),
        resolver,
        artifacts,
        manifest.strategy_params(),
        manifest.general.init_gas_limit,
        network.clone(),
        config.chain_id,
    );

    if args.dry_run {
        deployer.set_dry_run(true);
    } else {
        match deployer.enable_deploy_log(&manifest.general.deploy_log_dir) {
            Ok(_) => info!("Deployment log enabled: {}", manifest.general.deploy_log_dir),
            Err(e) => warn!(
                "Failed to enable deployment log: {} - records will NOT be persisted!",
                e
            ),
        }
    }

    let records = deployer.run(&plans).await?;

    for record in &records {
        info!(
            "{} | pool={} strategy={} vault={}",
            record.label, record.pool, record.strategy, record.vault
        );
    }
    info!("All plans complete: {} deployed", records.len());

    Ok(())
}
