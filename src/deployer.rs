//! Deployment Orchestrator
//!
//! Runs deployment plans strictly in order: resolve the pool, deploy the
//! strategy with the derived tick range multiplier, deploy the vault
//! against the pool and strategy, then call the vault's one-time init().
//! Every state-changing step is awaited to a confirmed successful receipt
//! before the next begins — each step's constructor arguments reference
//! the address the previous step produced.
//!
//! Author: AI-Generated
//! Created: 2026-07-31
//! Modified: 2026-08-02 — dry-run mode, JSONL deployment records

use crate::artifacts::ArtifactStore;
use crate::contracts::{IOptimizerStrategy, IOptimizerVault};
use crate::deploy_log::DeploymentLog;
use crate::error::DeployError;
use crate::resolver::PoolResolver;
use crate::types::{DeploymentPlan, DeploymentRecord, PoolHandle, StrategyParams};
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolValue;
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Artifact names the orchestrator deploys.
const STRATEGY_ARTIFACT: &str = "OptimizerStrategy";
const VAULT_ARTIFACT: &str = "V3Optimizer";

pub struct Deployer<P> {
    provider: Arc<P>,
    resolver: PoolResolver<P>,
    artifacts: ArtifactStore,
    strategy_params: StrategyParams,
    init_gas_limit: u64,
    network: String,
    chain_id: u64,
    /// Dry run mode — resolve pools and derive parameters, deploy nothing
    dry_run: bool,
    /// Deployment record log (JSONL)
    log: Option<DeploymentLog>,
}

impl<P: Provider + 'static> Deployer<P> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        provider: Arc<P>,
        resolver: PoolResolver<P>,
        artifacts: ArtifactStore,
        strategy_params: StrategyParams,
        init_gas_limit: u64,
        network: String,
        chain_id: u64,
    ) -> Self {
        Self {
            provider,
            resolver,
            artifacts,
            strategy_params,
            init_gas_limit,
            network,
            chain_id,
            dry_run: false,
            log: None,
        }
    }

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
        if dry_run {
            info!("Deployer in DRY RUN mode - pools resolved, nothing deployed");
        }
    }

    /// Enable the JSONL deployment record log.
    pub fn enable_deploy_log(&mut self, log_dir: &str) -> Result<()> {
        self.log = Some(DeploymentLog::new(log_dir)?);
        Ok(())
    }

    /// Run all plans in caller order. A failed plan terminates the run:
    /// earlier plans stay deployed, later plans are not attempted.
    pub async fn run(&mut self, plans: &[DeploymentPlan]) -> Result<Vec<DeploymentRecord>> {
        let mut records = Vec::with_capacity(plans.len());

        for (i, plan) in plans.iter().enumerate() {
            info!("=== Plan {}/{}: {} ===", i + 1, plans.len(), plan);
            if let Some(record) = self
                .deploy_plan(plan)
                .await
                .with_context(|| format!("Plan '{}' failed", plan.label))?
            {
                records.push(record);
            }
        }

        Ok(records)
    }

    /// One full orchestration: pool -> strategy -> vault -> init.
    /// Returns None in dry-run mode.
    async fn deploy_plan(&mut self, plan: &DeploymentPlan) -> Result<Option<DeploymentRecord>> {
        let pool = self
            .resolver
            .ensure_pool(plan.token0, plan.token1, plan.fee)
            .await?;

        if self.dry_run {
            info!(
                "DRY RUN: would deploy strategy (multiplier={}) and vault for pool {}",
                pool.tick_range_multiplier, pool.address
            );
            return Ok(None);
        }

        let strategy = self.deploy_strategy(&pool).await?;
        info!("Strategy deployed at {}", strategy);

        let vault = self.deploy_vault(pool.address, strategy).await?;
        info!("Optimizer vault deployed at {}", vault);

        let init_tx = self.init_vault(vault).await?;
        info!("Optimizer vault initialized | tx {:?}", init_tx);

        let record = DeploymentRecord {
            label: plan.label.clone(),
            network: self.network.clone(),
            chain_id: self.chain_id,
            pool: pool.address.to_string(),
            strategy: strategy.to_string(),
            vault: vault.to_string(),
            current_tick: pool.tick,
            tick_spacing: pool.tick_spacing,
            tick_range_multiplier: pool.tick_range_multiplier,
            init_tx: format!("{:?}", init_tx),
            deployed_at: Utc::now(),
        };

        if let Some(log) = &mut self.log {
            if let Err(e) = log.append(&record) {
                warn!("Failed to persist deployment record: {}", e);
            }
        }

        Ok(Some(record))
    }

    async fn deploy_strategy(&self, pool: &PoolHandle) -> Result<Address> {
        let args = encode_strategy_args(&self.strategy_params, pool.tick_range_multiplier);
        let address = self.deploy_contract(STRATEGY_ARTIFACT, args).await?;

        // Read the multiplier back so an artifact/argument mismatch
        // surfaces here, not at the vault's first rebalance
        let strategy = IOptimizerStrategy::new(address, self.provider.clone());
        let on_chain = strategy
            .tickRangeMultiplier()
            .call()
            .await
            .context("Failed to read back tickRangeMultiplier")?;
        let on_chain = i32::try_from(on_chain).unwrap_or(-1);
        if on_chain != pool.tick_range_multiplier {
            anyhow::bail!(
                "Strategy at {} reports tickRangeMultiplier {} (deployed with {})",
                address,
                on_chain,
                pool.tick_range_multiplier
            );
        }

        Ok(address)
    }

    async fn deploy_vault(&self, pool: Address, strategy: Address) -> Result<Address> {
        let args = (pool, strategy).abi_encode_params();
        self.deploy_contract(VAULT_ARTIFACT, args).await
    }

    /// Ship creation code + constructor args and await the confirmed
    /// receipt's contract address.
    async fn deploy_contract(&self, name: &str, constructor_args: Vec<u8>) -> Result<Address> {
        let artifact = self.artifacts.load(name)?;
        let mut code = artifact.creation_code()?.to_vec();
        code.extend_from_slice(&constructor_args);

        let tx = TransactionRequest::default().with_deploy_code(code);

        let receipt = self
            .provider
            .send_transaction(tx)
            .await
            .with_context(|| format!("{} deployment send failed", name))?
            .get_receipt()
            .await
            .with_context(|| format!("{} deployment confirmation failed", name))?;

        if !receipt.status() {
            return Err(DeployError::Reverted {
                what: format!("{} deployment", name),
                tx_hash: format!("{:?}", receipt.transaction_hash),
            }
            .into());
        }

        receipt
            .contract_address
            .ok_or_else(|| DeployError::MissingContractAddress(name.to_string()).into())
    }

    /// One-time vault initialization, with the configured gas ceiling.
    async fn init_vault(&self, vault: Address) -> Result<TxHash> {
        let contract = IOptimizerVault::new(vault, self.provider.clone());

        let receipt = contract
            .init()
            .gas(self.init_gas_limit)
            .send()
            .await
            .context("init() send failed")?
            .get_receipt()
            .await
            .context("init() confirmation failed")?;

        if !receipt.status() {
            return Err(DeployError::Reverted {
                what: "init()".to_string(),
                tx_hash: format!("{:?}", receipt.transaction_hash),
            }
            .into());
        }

        Ok(receipt.transaction_hash)
    }
}

/// ABI-encode the strategy constructor arguments:
/// (twapDuration, maxTwapDeviation, tickRangeMultiplier,
///  priceImpactPercentage, maxTotalSupply)
fn encode_strategy_args(params: &StrategyParams, tick_range_multiplier: i32) -> Vec<u8> {
    (
        params.twap_duration,
        params.max_twap_deviation,
        tick_range_multiplier,
        params.price_impact_percentage,
        params.max_total_supply,
    )
        .abi_encode_params()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    #[test]
    fn test_strategy_args_encoding() {
        let params = StrategyParams::default();
        let encoded = encode_strategy_args(&params, 14047);

        // five static words
        assert_eq!(encoded.len(), 5 * 32);
        // twapDuration = 100 in the first word
        assert_eq!(encoded[31], 100);
        // multiplier 14047 = 0x36df in the third word
        assert_eq!(&encoded[94..96], &[0x36, 0xdf]);
        // max supply sentinel fills the last word
        assert_eq!(&encoded[128..160], &[0xff; 32]);
    }

    #[test]
    fn test_vault_args_encoding() {
        let pool = Address::ZERO;
        let strategy = "0xfbDc20aEFB98a2dD3842023f21D17004eAefbe68"
            .parse::<Address>()
            .unwrap();
        let encoded = (pool, strategy).abi_encode_params();

        // two address words, each left-padded to 32 bytes
        assert_eq!(encoded.len(), 64);
        assert_eq!(&encoded[0..32], &[0u8; 32]);
        assert_eq!(&encoded[44..64], strategy.as_slice());
    }

    #[test]
    fn test_negative_deviation_encodes_twos_complement() {
        let params = StrategyParams {
            max_twap_deviation: -40,
            ..StrategyParams::default()
        };
        let encoded = encode_strategy_args(&params, 0);
        // sign-extended into the full second word
        assert_eq!(&encoded[32..60], &[0xff; 28]);
        assert_eq!(U256::MAX, U256::from_be_slice(&encoded[128..160]));
    }
}
