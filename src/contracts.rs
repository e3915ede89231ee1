//! Centralized Contract Definitions
//!
//! All Solidity contract interfaces for the optimizer deployer,
//! defined using alloy's `sol!` macro.
//!
//! Each interface is annotated with `#[sol(rpc)]` to generate
//! contract instance types that can make RPC calls via any alloy Provider.
//! The strategy and vault are deployed from build artifacts, so only their
//! post-deployment surfaces appear here.
//!
//! Author: AI-Generated
//! Created: 2026-07-30

use alloy::sol;

// ── Uniswap V3 ───────────────────────────────────────────────────────

sol! {
    #[sol(rpc)]
    interface IUniswapV3Factory {
        function createPool(address tokenA, address tokenB, uint24 fee) external returns (address pool);
        function getPool(address tokenA, address tokenB, uint24 fee) external view returns (address pool);
    }
}

sol! {
    #[sol(rpc)]
    interface IUniswapV3Pool {
        function slot0() external view returns (uint160 sqrtPriceX96, int24 tick, uint16 observationIndex, uint16 observationCardinality, uint16 observationCardinalityNext, uint8 feeProtocol, bool unlocked);
        function tickSpacing() external view returns (int24);
        function token0() external view returns (address);
        function token1() external view returns (address);
        function fee() external view returns (uint24);
    }
}

// ── Optimizer pair ───────────────────────────────────────────────────

sol! {
    #[sol(rpc)]
    interface IOptimizerStrategy {
        function twapDuration() external view returns (uint32);
        function maxTwapDeviation() external view returns (int24);
        function tickRangeMultiplier() external view returns (int24);
        function priceImpactPercentage() external view returns (uint24);
        function maxTotalSupply() external view returns (uint256);
    }
}

sol! {
    #[sol(rpc)]
    interface IOptimizerVault {
        function init() external;
        function pool() external view returns (address);
        function strategy() external view returns (address);
        function tickLower() external view returns (int24);
        function tickUpper() external view returns (int24);
    }
}
