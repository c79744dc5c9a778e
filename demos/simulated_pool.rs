//! Simulated constant-product pool walkthrough.
//!
//! Two holders draw from the faucet, one seeds the pool, the other trades
//! against it with a slippage guard, and the provider exits with the
//! accrued fees.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=cpmm_math=debug cargo run --example simulated_pool
//! ```

use cpmm_math::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_pool(label: &str, pool: &SimulatedPool) {
    let state = pool.snapshot();
    let scale = pool.math().config().scale();
    println!(
        "{label:<22} x = {:>14}  y = {:>14}  shares = {}",
        scale.format(state.reserve_x()),
        scale.format(state.reserve_y()),
        state.total_shares(),
    );
}

fn print_holder(pool: &SimulatedPool, holder: &str) -> Result<()> {
    let balances = pool.balances(holder)?;
    let scale = pool.math().config().scale();
    println!(
        "  {holder:<8} x = {:>14}  y = {:>14}  shares = {}",
        scale.format(balances.token_x()),
        scale.format(balances.token_y()),
        balances.lp_shares(),
    );
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Simulated constant-product pool ===\n");

    // ── 1. Configure ────────────────────────────────────────────────────
    let config = PoolMathConfig::default().with_fee(BasisPoints::new(30))?;
    let pool = SimulatedPool::new(PoolMath::from_config(&config)?);
    let scale = config.scale();
    println!(
        "fee = {} bp, scale = {} decimals, minimum initial shares = {}\n",
        config.fee_bps().get(),
        scale.decimals(),
        config.minimum_initial_shares(),
    );

    // ── 2. Faucet ───────────────────────────────────────────────────────
    for holder in ["provider", "trader"] {
        pool.faucet(holder)?;
    }
    println!("after faucet:");
    print_holder(&pool, "provider")?;
    print_holder(&pool, "trader")?;

    // ── 3. Seed the pool ────────────────────────────────────────────────
    let seed = pool.add_liquidity(
        "provider",
        scale.parse("4000")?,
        scale.parse("2000")?,
        Shares::ZERO,
    )?;
    println!("\nprovider minted {} shares", seed.shares());
    print_pool("after seeding:", &pool);
    println!("spot price       = {:.6} Y per X", pool.snapshot().spot_price_y_per_x());

    // ── 4. Trade with a slippage guard ──────────────────────────────────
    let amount_in = scale.parse("250")?;
    let math = pool.math();
    let preview = math.quote_swap_from(&pool, amount_in, SwapDirection::XToY)?;
    let impact = math.price_impact_bps(&pool.snapshot(), amount_in, SwapDirection::XToY)?;
    let min_out = math.min_output(preview.amount_out(), BasisPoints::new(50))?;
    println!(
        "\npreview: sell {} X -> {} Y (fee {}, size {} bp of reserve, min out {})",
        scale.format(amount_in),
        scale.format(preview.amount_out()),
        scale.format(preview.fee()),
        impact.get(),
        scale.format(min_out),
    );

    let filled = pool.swap("trader", amount_in, SwapDirection::XToY, min_out)?;
    println!(
        "filled:  {} Y at {:.6} Y per X",
        scale.format(filled.amount_out()),
        filled.effective_price(),
    );
    print_pool("after swap:", &pool);

    // a guard above the achievable output is rejected and changes nothing
    let greedy = pool.swap("trader", amount_in, SwapDirection::XToY, preview.amount_out());
    if let Err(err) = greedy {
        println!("greedy swap rejected: {err}");
    }

    // ── 5. Provider exits ───────────────────────────────────────────────
    let exit = pool.remove_liquidity("provider", seed.shares(), Amount::ZERO, Amount::ZERO)?;
    println!(
        "\nprovider burned {} shares for {} X + {} Y",
        exit.shares(),
        scale.format(exit.amount_x()),
        scale.format(exit.amount_y()),
    );
    print_pool("after exit:", &pool);

    println!("\nfinal balances:");
    print_holder(&pool, "provider")?;
    print_holder(&pool, "trader")?;

    Ok(())
}
