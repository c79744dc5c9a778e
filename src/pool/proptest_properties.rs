//! Property-based checks of the pool arithmetic.
//!
//! 1. **No loss**: `x × y` never decreases across a swap, under either
//!    fee policy.
//! 2. **Zero input** quotes zero; an **empty pool** quotes zero.
//! 3. **Bounded output**: a quote never reaches the output reserve.
//! 4. **Fee monotonicity**: a higher fee never pays out more.
//! 5. **Initial mint symmetry**: argument order does not matter.
//! 6. **Mint/burn round trip**: never returns more than deposited and
//!    loses less than one share's worth of each asset.

use proptest::prelude::*;

use crate::config::{FeePolicy, PoolMathConfig};
use crate::domain::{Amount, BasisPoints, PoolState, Shares, SwapDirection};
use crate::pool::PoolMath;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn math_with_fee(fee_bps: u32) -> PoolMath {
    let Ok(cfg) = PoolMathConfig::default().with_fee(BasisPoints::new(fee_bps)) else {
        panic!("valid fee");
    };
    let Ok(math) = PoolMath::new(cfg) else {
        panic!("valid math");
    };
    math
}

fn state(x: u128, y: u128, s: u128) -> PoolState {
    let Ok(st) = PoolState::new(Amount::new(x), Amount::new(y), Shares::new(s)) else {
        panic!("valid state");
    };
    st
}

fn product(st: &PoolState) -> u128 {
    let Some(k) = st.product() else {
        panic!("product fits in u128");
    };
    k
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// One to a billion 6-decimal tokens.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000_000u128..=1_000_000_000_000_000u128
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000u128
}

fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=1_000u32
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    any::<bool>().prop_map(SwapDirection::from_x)
}

fn policy_strategy() -> impl Strategy<Value = FeePolicy> {
    prop_oneof![Just(FeePolicy::RetainInReserves), Just(FeePolicy::Exclude)]
}

// ---------------------------------------------------------------------------
// Swaps
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_swap_never_decreases_product(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        amount in amount_strategy(),
        fee in fee_strategy(),
        direction in direction_strategy(),
        policy in policy_strategy(),
    ) {
        let Ok(math) = PoolMath::new(
            math_with_fee(fee).config().with_fee_policy(policy),
        ) else {
            panic!("valid math");
        };
        let before = state(rx, ry, 1);
        let Ok((after, _)) = math.apply_swap(&before, Amount::new(amount), direction) else {
            // dust inputs are refused; nothing to check
            return Ok(());
        };
        prop_assert!(
            product(&after) >= product(&before),
            "k decreased: {} -> {}", before, after
        );
        prop_assert!(after.validate().is_ok());
    }

    #[test]
    fn prop_zero_input_quotes_zero(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let out = math_with_fee(fee).quote_swap(Amount::new(rx), Amount::new(ry), Amount::ZERO);
        prop_assert_eq!(out, Ok(Amount::ZERO));
    }

    #[test]
    fn prop_empty_pool_quotes_zero(
        amount in amount_strategy(),
        direction in direction_strategy(),
    ) {
        let Ok(quote) = PoolMath::default().quote_swap_for(
            &PoolState::EMPTY,
            Amount::new(amount),
            direction,
        ) else {
            panic!("empty pool never errors");
        };
        prop_assert!(quote.is_empty());
    }

    #[test]
    fn prop_output_below_reserve(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        amount in amount_strategy(),
        fee in fee_strategy(),
    ) {
        let Ok(out) = math_with_fee(fee).quote_swap(
            Amount::new(rin),
            Amount::new(rout),
            Amount::new(amount),
        ) else {
            panic!("no overflow in range");
        };
        prop_assert!(out.get() < rout);
    }

    #[test]
    fn prop_higher_fee_never_pays_more(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        amount in amount_strategy(),
        low in fee_strategy(),
        bump in 0u32..=1_000u32,
    ) {
        let high = low + bump;
        let (Ok(out_low), Ok(out_high)) = (
            math_with_fee(low).quote_swap(Amount::new(rin), Amount::new(rout), Amount::new(amount)),
            math_with_fee(high).quote_swap(
                Amount::new(rin),
                Amount::new(rout),
                Amount::new(amount),
            ),
        ) else {
            panic!("no overflow in range");
        };
        prop_assert!(
            out_high <= out_low,
            "fee {} paid {} > fee {} paid {}",
            high,
            out_high,
            low,
            out_low
        );
    }

    #[test]
    fn prop_higher_fee_pays_strictly_less_for_large_inputs(
        reserve in 1_000_000_000u128..=1_000_000_000_000u128,
        low in 0u32..=500u32,
        bump in 1u32..=500u32,
    ) {
        // at 10% of the reserve, one bp of fee moves the output by far
        // more than one unit
        let amount = Amount::new(reserve / 10);
        let r = Amount::new(reserve);
        let (Ok(out_low), Ok(out_high)) = (
            math_with_fee(low).quote_swap(r, r, amount),
            math_with_fee(low + bump).quote_swap(r, r, amount),
        ) else {
            panic!("no overflow in range");
        };
        prop_assert!(out_high < out_low);
    }
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_initial_mint_is_symmetric(
        x in amount_strategy(),
        y in amount_strategy(),
    ) {
        let math = PoolMath::default();
        prop_assert_eq!(
            math.quote_initial_mint(Amount::new(x), Amount::new(y)),
            math.quote_initial_mint(Amount::new(y), Amount::new(x))
        );
    }

    #[test]
    fn prop_mint_then_burn_round_trip(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        supply in reserve_strategy(),
        ax in amount_strategy(),
        ay in amount_strategy(),
    ) {
        let math = PoolMath::default();
        let before = state(rx, ry, supply);
        let Ok((after_mint, minted)) = math.apply_mint(
            &before,
            Amount::new(ax),
            Amount::new(ay),
        ) else {
            // too small to mint a share
            return Ok(());
        };
        let Ok((_, burned)) = math.apply_burn(&after_mint, minted.shares()) else {
            panic!("burning freshly minted shares succeeds");
        };

        prop_assert!(burned.amount_x().get() <= ax);
        prop_assert!(burned.amount_y().get() <= ay);

        // one share is worth at most ceil(reserve / supply) units, so the
        // binding side loses less than that; with supply >= reserve it is
        // within one unit
        let share_x = rx.div_ceil(supply);
        let share_y = ry.div_ceil(supply);
        let lost_x = minted.used_x().get() - burned.amount_x().get().min(minted.used_x().get());
        let lost_y = minted.used_y().get() - burned.amount_y().get().min(minted.used_y().get());
        prop_assert!(lost_x <= share_x + 1, "lost {} x, share worth {}", lost_x, share_x);
        prop_assert!(lost_y <= share_y + 1, "lost {} y, share worth {}", lost_y, share_y);
    }

    #[test]
    fn prop_fine_grained_shares_round_trip_within_one_unit(
        reserve in 1_000u128..=1_000_000_000u128,
        extra in 0u128..=1_000_000u128,
        deposit in 1_000u128..=1_000_000_000u128,
    ) {
        let math = PoolMath::default();
        let before = state(reserve, reserve, reserve + extra);
        let amount = Amount::new(deposit);
        let Ok((after_mint, minted)) = math.apply_mint(&before, amount, amount) else {
            panic!("deposit mints shares");
        };
        let Ok((_, burned)) = math.apply_burn(&after_mint, minted.shares()) else {
            panic!("burn succeeds");
        };
        prop_assert!(deposit - burned.amount_x().get() <= 1);
        prop_assert!(deposit - burned.amount_y().get() <= 1);
    }
}
