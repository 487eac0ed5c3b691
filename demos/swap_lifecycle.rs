//! Constant-product pool lifecycle (value / token).
//!
//! Demonstrates seeding a pool against in-memory custody, swapping in both
//! directions with a slippage floor, joining as a second liquidity
//! provider, and exiting with accrued fees.
//!
//! # Run
//!
//! ```bash
//! cargo run --example swap_lifecycle
//! ```

use eddy_amm::events::InMemoryEventSink;
use eddy_amm::memory::{InMemoryAssetLedger, InMemoryVault};
use eddy_amm::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant Product Pool (value / token) ===\n");

    // ── 1. Set up the environment: token ledger, vault, actors ──────────
    let pool_account = AccountId::from_bytes([0xee; 32]);
    let alice = AccountId::from_bytes([1u8; 32]);
    let bob = AccountId::from_bytes([2u8; 32]);

    let mut ledger = InMemoryAssetLedger::new(pool_account);
    ledger.mint(&alice, Amount::new(10_000))?;
    ledger.approve(&alice, &pool_account, Amount::new(10_000));
    ledger.mint(&bob, Amount::new(10_000))?;
    ledger.approve(&bob, &pool_account, Amount::new(10_000));
    let mut vault = InMemoryVault::new();

    println!("Alice tokens: {}", ledger.balance_of(&alice));
    println!("Bob tokens:   {}", ledger.balance_of(&bob));

    // ── 2. Genesis: alice seeds 1 000 value + 1 000 tokens ──────────────
    let genesis_value = vault.receive(Amount::new(1_000))?;
    let mut pool = PoolController::with_event_sink(
        pool_account,
        PoolConfig::default(),
        ledger,
        vault,
        InMemoryEventSink::new(),
    );
    let shares = pool.initialize_pool(genesis_value, Amount::new(1_000), &alice)?;

    println!("\n--- Genesis ---");
    println!("  Shares minted: {shares} (to alice)");
    println!("  Fee schedule:  {}", pool.config().fee());
    println!(
        "  Reserves:      {} value / {} tokens",
        pool.value_reserve(),
        pool.token_reserve()
    );

    // ── 3. Bob sells 100 value for tokens, floored at the preview ───────
    let preview = pool.quote_value_to_token(Amount::new(100))?;
    let attached = pool.vault_mut().receive(Amount::new(100))?;
    let outcome = pool.swap_value_for_token(attached, Some(preview), &bob)?;

    println!("\n--- Swap: 100 value -> tokens ---");
    println!("  Quoted:        {preview}");
    println!("  Settled:       {outcome}");
    println!(
        "  Reserves:      {} value / {} tokens",
        pool.value_reserve(),
        pool.token_reserve()
    );

    // ── 4. Bob joins as a liquidity provider with 550 value ─────────────
    let attached = pool.vault_mut().receive(Amount::new(550))?;
    let minted = pool.deposit(attached, &bob)?;

    println!("\n--- Deposit: 550 value (plus matching tokens) ---");
    println!("  Shares minted: {minted} (to bob)");
    println!("  Total shares:  {}", pool.total_shares());
    println!(
        "  Reserves:      {} value / {} tokens",
        pool.value_reserve(),
        pool.token_reserve()
    );

    // ── 5. Bob sells 91 tokens back into the deeper pool ────────────────
    let outcome = pool.swap_token_for_value(Amount::new(91), None, &bob)?;

    println!("\n--- Swap: 91 tokens -> value ---");
    println!("  Settled:       {outcome}");
    println!(
        "  Reserves:      {} value / {} tokens",
        pool.value_reserve(),
        pool.token_reserve()
    );

    // ── 6. Alice exits completely, taking her cut of the swap fees ──────
    let exit = pool.withdraw(Shares::new(1_000), &alice)?;

    println!("\n--- Withdraw: alice burns 1 000 shares ---");
    println!("  Redeemed:      {} value + {} tokens", exit.value_out(), exit.token_out());
    println!("  (seeded 1 000 value; the excess is accrued fees)");
    println!(
        "  Alice now holds {} value / {} tokens",
        pool.vault().account_balance(&alice),
        pool.ledger().balance_of(&alice)
    );

    // ── 7. Bob exits too, draining the pool ─────────────────────────────
    let exit = pool.withdraw(pool.shares_of(&bob), &bob)?;

    println!("\n--- Withdraw: bob burns his shares ---");
    println!("  Redeemed:      {} value + {} tokens", exit.value_out(), exit.token_out());
    println!(
        "  Reserves:      {} value / {} tokens, {} shares outstanding",
        pool.value_reserve(),
        pool.token_reserve(),
        pool.total_shares()
    );

    // ── 8. Every settled operation landed in the event journal ──────────
    println!("\n--- Event journal ---");
    for event in pool.event_sink().events() {
        println!("  {}", serde_json::to_string(event)?);
    }

    println!("\n=== Done ===");
    Ok(())
}
