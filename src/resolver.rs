//! Pool Resolution
//!
//! Idempotent "ensure the pool exists" against the Uniswap V3 factory.
//! The creation attempt is tolerated to fail (the factory reverts without
//! a structured code when the pool already exists), but the outcome is
//! tagged by re-asking the factory instead of blanket-swallowed: a failed
//! create only counts as "already exists" when getPool actually resolves
//! the triple. getPool is the authoritative existence check either way.
//!
//! Author: AI-Generated
//! Created: 2026-07-31
//! Modified: 2026-08-02 — classify create failures against factory state

use crate::contracts::{IUniswapV3Factory, IUniswapV3Pool};
use crate::error::DeployError;
use crate::tick::tick_range_multiplier;
use crate::types::PoolHandle;
use alloy::primitives::{Address, TxHash};
use alloy::providers::Provider;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Helper: convert u32 fee tier to alloy uint24 type for contract calls.
/// Uses from_limbs() because Uint<24, 1> doesn't impl From<u32>.
fn fee_to_u24(fee: u32) -> alloy::primitives::Uint<24, 1> {
    debug_assert!(fee <= 0xFFFFFF, "fee {} exceeds U24 max (16777215)", fee);
    alloy::primitives::Uint::from_limbs([fee as u64])
}

/// Outcome of one createPool attempt.
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    /// The factory minted a new pool in this run
    Created { tx_hash: TxHash },
    /// The create failed but the factory already resolves the triple
    AlreadyExists,
    /// The create failed and the factory still has no pool for the triple
    Failed(String),
}

/// Classify a failed create against the factory's authoritative answer.
fn classify_create_failure(resolved: Address, reason: String) -> CreateOutcome {
    if resolved != Address::ZERO {
        CreateOutcome::AlreadyExists
    } else {
        CreateOutcome::Failed(reason)
    }
}

/// Resolves pools against the factory and derives range parameters.
pub struct PoolResolver<P> {
    provider: Arc<P>,
    factory: Address,
    create_pool_gas_limit: u64,
}

impl<P: Provider + 'static> PoolResolver<P> {
    pub fn new(provider: Arc<P>, factory: Address, create_pool_gas_limit: u64) -> Self {
        Self {
            provider,
            factory,
            create_pool_gas_limit,
        }
    }

    /// Ensure a pool exists for the triple and read its range parameters.
    ///
    /// Safe to call repeatedly: a second call finds the pool already
    /// created and returns the same address without error.
    pub async fn ensure_pool(&self, token0: Address, token1: Address, fee: u32) -> Result<PoolHandle> {
        match self.try_create_pool(token0, token1, fee).await {
            CreateOutcome::Created { tx_hash } => {
                info!("Pool created for fee {} | tx {:?}", fee, tx_hash);
            }
            CreateOutcome::AlreadyExists => {
                debug!("Pool already exists for ({}, {}) fee {}", token0, token1, fee);
            }
            CreateOutcome::Failed(reason) => {
                warn!("createPool failed with no existing pool: {}", reason);
            }
        }

        // The factory query is authoritative regardless of what the
        // creation attempt reported.
        let factory = IUniswapV3Factory::new(self.factory, self.provider.clone());
        let pool_address = factory
            .getPool(token0, token1, fee_to_u24(fee))
            .call()
            .await
            .context("Failed to get pool address")?;

        if pool_address == Address::ZERO {
            return Err(DeployError::PoolNotFound { token0, token1, fee }.into());
        }

        let pool = IUniswapV3Pool::new(pool_address, self.provider.clone());

        let slot0 = pool.slot0().call().await.context("Failed to get slot0")?;
        let tick = i32::try_from(slot0.tick).unwrap_or(0);

        let spacing_raw = pool
            .tickSpacing()
            .call()
            .await
            .context("Failed to get tickSpacing")?;
        let tick_spacing = i32::try_from(spacing_raw).unwrap_or(0);
        if tick_spacing <= 0 {
            anyhow::bail!(
                "Pool {} reports non-positive tick spacing {}",
                pool_address,
                tick_spacing
            );
        }

        let multiplier = tick_range_multiplier(tick, tick_spacing);
        info!(
            "Pool {} | tick={} spacing={} | tick range multiplier={}",
            pool_address, tick, tick_spacing, multiplier
        );

        Ok(PoolHandle {
            address: pool_address,
            tick,
            tick_spacing,
            tick_range_multiplier: multiplier,
        })
    }

    /// Attempt createPool with the configured gas ceiling and await the
    /// receipt. Failures are classified, never propagated from here.
    async fn try_create_pool(&self, token0: Address, token1: Address, fee: u32) -> CreateOutcome {
        let factory = IUniswapV3Factory::new(self.factory, self.provider.clone());

        let failure = match factory
            .createPool(token0, token1, fee_to_u24(fee))
            .gas(self.create_pool_gas_limit)
            .send()
            .await
        {
            Ok(pending_tx) => match pending_tx.get_receipt().await {
                Ok(receipt) if receipt.status() => {
                    return CreateOutcome::Created {
                        tx_hash: receipt.transaction_hash,
                    };
                }
                Ok(receipt) => {
                    format!("createPool reverted (tx {:?})", receipt.transaction_hash)
                }
                Err(e) => format!("createPool confirmation failed: {}", e),
            },
            Err(e) => format!("createPool send failed: {}", e),
        };

        // Disambiguate the failure against factory state
        let resolved = factory
            .getPool(token0, token1, fee_to_u24(fee))
            .call()
            .await
            .unwrap_or(Address::ZERO);

        classify_create_failure(resolved, failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_to_u24() {
        assert_eq!(fee_to_u24(3000).to::<u32>(), 3000);
        assert_eq!(fee_to_u24(500).to::<u32>(), 500);
    }

    #[test]
    fn test_classify_against_factory_state() {
        let pool = "0x0f04024bdA15F6e5D48Ed92938654a6449F483ed"
            .parse::<Address>()
            .unwrap();

        let outcome = classify_create_failure(pool, "reverted".to_string());
        assert!(matches!(outcome, CreateOutcome::AlreadyExists));

        let outcome = classify_create_failure(Address::ZERO, "reverted".to_string());
        assert!(matches!(outcome, CreateOutcome::Failed(r) if r == "reverted"));
    }
}
