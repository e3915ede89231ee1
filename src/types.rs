//! Core data structures for the optimizer deployer
//!
//! Everything here is derived or ephemeral — the deployed contracts hold
//! the long-lived state. Records persisted to the deployment log carry
//! string-formatted addresses so the JSONL stays greppable.
//!
//! Author: AI-Generated
//! Created: 2026-07-30

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One token0/token1/fee triple driving a full orchestration run.
/// Plans are independent and processed in manifest order.
#[derive(Debug, Clone)]
pub struct DeploymentPlan {
    pub token0: Address,
    pub token1: Address,
    /// Fee tier in hundredths of a bip (3000 = 0.30%)
    pub fee: u32,
    pub label: String,
}

impl fmt::Display for DeploymentPlan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (fee {})", self.label, self.fee)
    }
}

/// A resolved pool plus the range parameters derived from its state.
#[derive(Debug, Clone, Copy)]
pub struct PoolHandle {
    pub address: Address,
    /// Current price tick from slot0 at resolution time
    pub tick: i32,
    pub tick_spacing: i32,
    pub tick_range_multiplier: i32,
}

/// Fixed strategy constructor parameters around the derived multiplier.
#[derive(Debug, Clone)]
pub struct StrategyParams {
    /// TWAP window the strategy checks before rebalancing, in seconds
    pub twap_duration: u32,
    /// Max tick deviation from the TWAP tolerated at rebalance time
    pub max_twap_deviation: i32,
    /// Price impact ceiling, in hundredths of a bip
    pub price_impact_percentage: u32,
    /// Supply cap; max uint256 disables the cap
    pub max_total_supply: U256,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            twap_duration: 100,
            max_twap_deviation: 40,
            price_impact_percentage: 2000,
            max_total_supply: U256::MAX,
        }
    }
}

/// Outcome of one plan, reported and appended to the deployment log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub label: String,
    pub network: String,
    pub chain_id: u64,
    pub pool: String,
    pub strategy: String,
    pub vault: String,
    pub current_tick: i32,
    pub tick_spacing: i32,
    pub tick_range_multiplier: i32,
    pub init_tx: String,
    pub deployed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_params_defaults() {
        let p = StrategyParams::default();
        assert_eq!(p.twap_duration, 100);
        assert_eq!(p.max_twap_deviation, 40);
        assert_eq!(p.price_impact_percentage, 2000);
        assert_eq!(p.max_total_supply, U256::MAX);
    }

    #[test]
    fn test_plan_display() {
        let plan = DeploymentPlan {
            token0: Address::ZERO,
            token1: Address::ZERO,
            fee: 3000,
            label: "DAI/WETH".to_string(),
        };
        assert_eq!(plan.to_string(), "DAI/WETH (fee 3000)");
    }
}
