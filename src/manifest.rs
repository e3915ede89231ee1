//! TOML Deployment Manifest Reader
//!
//! Reads the per-network deployment manifest (deploy.<network>.toml):
//! gas ceilings and directories under [general], strategy constructor
//! parameters under [strategy], and one [[plan]] entry per pool to target.
//! Plan tokens are symbols resolved through the address book, or literal
//! 0x addresses.
//!
//! Author: AI-Generated
//! Created: 2026-07-31

use crate::addresses;
use crate::types::{DeploymentPlan, StrategyParams};
use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Fee tiers the canonical factory ships with. Anything else is allowed
/// through (the factory is the judge) but logged loudly.
pub const V3_FEE_TIERS: [u32; 4] = [100, 500, 3000, 10000];

/// Top-level TOML manifest structure
#[derive(Debug, Clone, Deserialize)]
pub struct DeployManifest {
    #[serde(default)]
    pub general: GeneralSection,
    #[serde(default)]
    pub strategy: StrategySection,
    #[serde(rename = "plan")]
    pub plans: Vec<PlanSection>,
}

/// General settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralSection {
    #[serde(default = "default_create_pool_gas")]
    pub create_pool_gas_limit: u64,
    #[serde(default = "default_init_gas")]
    pub init_gas_limit: u64,
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: String,
    #[serde(default = "default_deploy_log_dir")]
    pub deploy_log_dir: String,
}

fn default_create_pool_gas() -> u64 { 1_000_000 }
fn default_init_gas() -> u64 { 1_000_000 }
fn default_artifacts_dir() -> String { "artifacts".to_string() }
fn default_deploy_log_dir() -> String { "data/deployments".to_string() }

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            create_pool_gas_limit: default_create_pool_gas(),
            init_gas_limit: default_init_gas(),
            artifacts_dir: default_artifacts_dir(),
            deploy_log_dir: default_deploy_log_dir(),
        }
    }
}

/// Strategy constructor parameters (the tick range multiplier slot is
/// always the derived value, never configured here)
#[derive(Debug, Clone, Deserialize)]
pub struct StrategySection {
    #[serde(default = "default_twap_duration")]
    pub twap_duration: u32,
    #[serde(default = "default_max_twap_deviation")]
    pub max_twap_deviation: i32,
    #[serde(default = "default_price_impact")]
    pub price_impact_percentage: u32,
}

fn default_twap_duration() -> u32 { 100 }
fn default_max_twap_deviation() -> i32 { 40 }
fn default_price_impact() -> u32 { 2000 }

impl Default for StrategySection {
    fn default() -> Self {
        Self {
            twap_duration: default_twap_duration(),
            max_twap_deviation: default_max_twap_deviation(),
            price_impact_percentage: default_price_impact(),
        }
    }
}

/// One pool-targeting entry
#[derive(Debug, Clone, Deserialize)]
pub struct PlanSection {
    /// Token symbol from the address book, or a literal 0x address
    pub token0: String,
    pub token1: String,
    /// Fee tier in hundredths of a bip (3000 = 0.30%)
    pub fee: u32,
    #[serde(default)]
    pub label: Option<String>,
}

impl DeployManifest {
    /// Load a manifest from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read manifest: {}", path.as_ref().display())
        })?;

        let manifest: Self =
            toml::from_str(&content).context("Failed to parse deployment manifest")?;

        Ok(manifest)
    }

    /// Resolve plan entries into ordered deployment plans for a network
    pub fn resolve_plans(&self, network: &str) -> Result<Vec<DeploymentPlan>> {
        self.plans.iter().map(|p| p.resolve(network)).collect()
    }

    pub fn strategy_params(&self) -> StrategyParams {
        StrategyParams {
            twap_duration: self.strategy.twap_duration,
            max_twap_deviation: self.strategy.max_twap_deviation,
            price_impact_percentage: self.strategy.price_impact_percentage,
            max_total_supply: U256::MAX,
        }
    }
}

impl PlanSection {
    fn resolve(&self, network: &str) -> Result<DeploymentPlan> {
        if !V3_FEE_TIERS.contains(&self.fee) {
            warn!(
                "Fee tier {} is not a standard factory tier — creation may revert",
                self.fee
            );
        }

        let token0 = resolve_token(network, &self.token0)?;
        let token1 = resolve_token(network, &self.token1)?;
        let label = self
            .label
            .clone()
            .unwrap_or_else(|| format!("{}/{}", self.token0, self.token1));

        Ok(DeploymentPlan {
            token0,
            token1,
            fee: self.fee,
            label,
        })
    }
}

fn resolve_token(network: &str, entry: &str) -> Result<Address> {
    if entry.starts_with("0x") {
        entry
            .parse()
            .with_context(|| format!("Invalid token address '{}'", entry))
    } else {
        Ok(addresses::token_address(network, entry)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
        [general]
        create_pool_gas_limit = 2000000

        [strategy]
        twap_duration = 120

        [[plan]]
        token0 = "DAI"
        token1 = "WETH"
        fee = 3000

        [[plan]]
        token0 = "0x0f04024bdA15F6e5D48Ed92938654a6449F483ed"
        token1 = "WETH"
        fee = 500
        label = "custom/WETH"
    "#;

    #[test]
    fn test_parse_manifest() {
        let manifest: DeployManifest = toml::from_str(MANIFEST).unwrap();
        assert_eq!(manifest.general.create_pool_gas_limit, 2_000_000);
        // defaults fill the rest
        assert_eq!(manifest.general.init_gas_limit, 1_000_000);
        assert_eq!(manifest.general.artifacts_dir, "artifacts");
        assert_eq!(manifest.strategy.twap_duration, 120);
        assert_eq!(manifest.strategy.max_twap_deviation, 40);
        assert_eq!(manifest.plans.len(), 2);
    }

    #[test]
    fn test_resolve_plans_in_order() {
        let manifest: DeployManifest = toml::from_str(MANIFEST).unwrap();
        let plans = manifest.resolve_plans("localhost").unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].label, "DAI/WETH");
        assert_eq!(plans[0].fee, 3000);
        assert_eq!(plans[1].label, "custom/WETH");
        assert_eq!(
            plans[1].token0,
            "0x0f04024bdA15F6e5D48Ed92938654a6449F483ed"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn test_resolve_rejects_unknown_network() {
        let manifest: DeployManifest = toml::from_str(MANIFEST).unwrap();
        assert!(manifest.resolve_plans("goerli").is_err());
    }

    #[test]
    fn test_strategy_params_carry_sentinel() {
        let manifest: DeployManifest = toml::from_str(MANIFEST).unwrap();
        let params = manifest.strategy_params();
        assert_eq!(params.twap_duration, 120);
        assert_eq!(params.max_total_supply, U256::MAX);
    }

    #[test]
    fn test_missing_plans_fails_parse() {
        assert!(toml::from_str::<DeployManifest>("[general]\n").is_err());
    }
}
