//! Typed Deployment Failures
//!
//! Domain errors for pool resolution and contract deployment. Everything
//! here is fatal — the only tolerated failure (createPool on an existing
//! pool) is handled as a tagged outcome in the resolver, not an error.
//!
//! Author: AI-Generated
//! Created: 2026-07-30

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    /// The factory resolved the triple to the zero address even after the
    /// creation attempt. Unsupported pair or an upstream failure the
    /// creation tolerance masked. Never retried.
    #[error("no pool for ({token0}, {token1}) at fee {fee} — factory returned the zero address")]
    PoolNotFound {
        token0: Address,
        token1: Address,
        fee: u32,
    },

    /// Network name has no entry in the address book.
    #[error("network '{0}' not supported")]
    UnsupportedNetwork(String),

    /// Network is known but carries no address for the token symbol.
    #[error("no address for token '{symbol}' on network '{network}'")]
    UnknownToken { network: String, symbol: String },

    /// A state-changing transaction confirmed with a failure status.
    #[error("{what} transaction reverted (tx {tx_hash})")]
    Reverted { what: String, tx_hash: String },

    /// A deployment receipt confirmed successfully but carries no
    /// contract address.
    #[error("deployment receipt for {0} carries no contract address")]
    MissingContractAddress(String),
}
