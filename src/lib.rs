//! Concentrated Liquidity Optimizer Deployer Library
//!
//! Provides components for deploying a strategy/vault contract pair
//! against Uniswap V3 pools: pure tick range arithmetic, an idempotent
//! pool resolver, and the sequential deployment orchestrator.
//!
//! Author: AI-Generated
//! Created: 2026-07-31

pub mod addresses;
pub mod artifacts;
pub mod config;
pub mod contracts;
pub mod deploy_log;
pub mod deployer;
pub mod error;
pub mod manifest;
pub mod resolver;
pub mod tick;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, DeployerConfig};
pub use deployer::Deployer;
pub use error::DeployError;
pub use resolver::{CreateOutcome, PoolResolver};
pub use tick::{tick_floor, tick_range_multiplier, MAX_TICK, MIN_TICK};
pub use types::{DeploymentPlan, DeploymentRecord, PoolHandle, StrategyParams};
