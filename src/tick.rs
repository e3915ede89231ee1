//! Tick Range Arithmetic
//!
//! Pure integer math for Uniswap V3 tick ranges. Derives how many
//! tick-spacing units a managed range can extend symmetrically from the
//! current tick's floor without leaving the protocol's valid tick window.
//!
//! All functions here are deterministic and make no RPC calls — the
//! resolver feeds them fresh slot0/tickSpacing reads.
//!
//! Author: AI-Generated
//! Created: 2026-07-30

/// Highest tick the protocol accepts as a range boundary.
pub const MAX_TICK: i32 = 887_272;

/// Lowest tick the protocol accepts as a range boundary.
pub const MIN_TICK: i32 = -MAX_TICK;

/// Greatest multiple of `spacing` that is <= `tick`.
///
/// Floors toward negative infinity, NOT toward zero: `tick_floor(-7, 10)`
/// is -10, not 0. This matches the protocol's own tick bucketing — a
/// truncating division would place negative ticks in the wrong bucket.
pub fn tick_floor(tick: i32, spacing: i32) -> i32 {
    debug_assert!(spacing > 0, "tick spacing must be positive, got {}", spacing);
    tick.div_euclid(spacing) * spacing
}

/// Number of tick-spacing units a range can extend on each side of the
/// current tick's floor while staying inside `[MIN_TICK, MAX_TICK]`.
///
/// Takes the tighter of the two one-sided limits, then keeps 95% of it
/// (integer truncation). The pool tick can drift between the slot0 read
/// and the deployment transaction landing on-chain; the shrink absorbs
/// that drift without ever loosening the bound.
pub fn tick_range_multiplier(tick: i32, spacing: i32) -> i32 {
    let floor = tick_floor(tick, spacing);

    // Room below before crossing MIN_TICK, and above before crossing MAX_TICK
    let down = (floor + MAX_TICK).div_euclid(spacing);
    let up = (MAX_TICK - floor).div_euclid(spacing);

    let multiplier = down.min(up).max(0);
    multiplier * 95 / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_rounds_toward_negative_infinity() {
        assert_eq!(tick_floor(-7, 10), -10);
        assert_eq!(tick_floor(7, 10), 0);
        assert_eq!(tick_floor(-10, 10), -10);
        assert_eq!(tick_floor(-11, 10), -20);
        assert_eq!(tick_floor(0, 60), 0);
        assert_eq!(tick_floor(59, 60), 0);
        assert_eq!(tick_floor(-1, 60), -60);
    }

    #[test]
    fn test_floor_is_multiple_and_brackets_tick() {
        for spacing in [1, 10, 60, 200] {
            for tick in (-880_000..=880_000).step_by(7919) {
                let floor = tick_floor(tick, spacing);
                assert_eq!(floor % spacing, 0, "tick={} spacing={}", tick, spacing);
                assert!(floor <= tick, "tick={} spacing={}", tick, spacing);
                assert!(tick < floor + spacing, "tick={} spacing={}", tick, spacing);
            }
        }
    }

    #[test]
    fn test_multiplier_reference_case() {
        // spacing 60 at tick 0: floor 0, both sides allow 887272/60 = 14787,
        // shrunk to 14787 * 95 / 100 = 14047
        assert_eq!(tick_range_multiplier(0, 60), 14047);
    }

    #[test]
    fn test_multiplier_zero_at_the_boundary() {
        // At MAX_TICK there is no room above, so the result is 0 no matter
        // how much room exists below
        for spacing in [1, 10, 60, 200] {
            assert_eq!(tick_range_multiplier(MAX_TICK, spacing), 0);
        }
    }

    #[test]
    fn test_multiplier_keeps_range_in_bounds() {
        for spacing in [1, 10, 60, 200] {
            for tick in (-880_000..=880_000).step_by(7919) {
                let floor = tick_floor(tick, spacing);
                let m = tick_range_multiplier(tick, spacing);
                assert!(m >= 0, "tick={} spacing={}", tick, spacing);
                assert!(
                    floor - m * spacing >= MIN_TICK,
                    "lower bound violated: tick={} spacing={} m={}",
                    tick,
                    spacing,
                    m
                );
                assert!(
                    floor + m * spacing <= MAX_TICK,
                    "upper bound violated: tick={} spacing={} m={}",
                    tick,
                    spacing,
                    m
                );
            }
        }
    }

    #[test]
    fn test_multiplier_shrink_truncates() {
        // spacing 200 at tick 0: 887272/200 = 4436, 4436 * 0.95 = 4214.2 -> 4214
        assert_eq!(tick_range_multiplier(0, 200), 4214);
        // spacing 10 at tick 0: 88727 * 95 / 100 = 84290 (0.65 truncated)
        assert_eq!(tick_range_multiplier(0, 10), 84290);
    }
}
