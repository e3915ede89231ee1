//! Per-Network Address Book
//!
//! Static lookup tables for the networks this deployer targets.
//! "localhost" is a mainnet fork, so it carries mainnet token addresses.
//! Unknown networks and symbols are errors, never silent fallbacks.
//!
//! Author: AI-Generated
//! Created: 2026-07-30

use crate::error::DeployError;
use alloy::primitives::{address, Address};

/// Canonical Uniswap V3 factory (same address on mainnet and the testnets).
pub const UNISWAP_V3_FACTORY: Address = address!("0x1F98431c8aD98523631AE4a59f267346ea31F984");

/// Networks with address-book entries.
pub const SUPPORTED_NETWORKS: [&str; 2] = ["localhost", "rinkeby"];

/// (network, symbol, address) rows.
const TOKEN_BOOK: [(&str, &str, Address); 4] = [
    ("localhost", "DAI", address!("0x6B175474E89094C44Da98b954EedeAC495271d0F")),
    ("localhost", "WETH", address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")),
    ("rinkeby", "DAI", address!("0x5592ec0cfb4dbc12d3ab100b257153436a1f0fea")),
    ("rinkeby", "WETH", address!("0xc778417e063141139fce010982780140aa0cd5ab")),
];

/// Default chain ids, overridable via CHAIN_ID.
const CHAIN_IDS: [(&str, u64); 2] = [("localhost", 31337), ("rinkeby", 4)];

pub fn is_supported(network: &str) -> bool {
    SUPPORTED_NETWORKS.contains(&network)
}

/// Resolve a token symbol on a network.
pub fn token_address(network: &str, symbol: &str) -> Result<Address, DeployError> {
    if !is_supported(network) {
        return Err(DeployError::UnsupportedNetwork(network.to_string()));
    }

    TOKEN_BOOK
        .iter()
        .find(|(n, s, _)| *n == network && s.eq_ignore_ascii_case(symbol))
        .map(|(_, _, addr)| *addr)
        .ok_or_else(|| DeployError::UnknownToken {
            network: network.to_string(),
            symbol: symbol.to_string(),
        })
}

/// Well-known chain id for a supported network.
pub fn default_chain_id(network: &str) -> Result<u64, DeployError> {
    CHAIN_IDS
        .iter()
        .find(|(n, _)| *n == network)
        .map(|(_, id)| *id)
        .ok_or_else(|| DeployError::UnsupportedNetwork(network.to_string()))
}
