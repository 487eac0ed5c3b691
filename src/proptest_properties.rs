//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Round-trip loss**: value → token → value returns ≤ the original.
//! 2. **Product preservation**: reserve product non-decreasing across
//!    swaps, in both directions.
//! 3. **Quote monotonicity**: larger input never yields smaller output, and
//!    the fee never improves a quote.
//! 4. **Reserve retention**: a quote never reaches the output reserve.
//! 5. **Redemption conservation**: deposit then withdraw returns at most
//!    what was contributed, on both legs.
//! 6. **Mint proportionality**: minted shares equal the floored
//!    supply-scaled ratio.
//! 7. **Share accounting**: supply equals the sum of positions after any
//!    operation mix, and outstanding shares always have backing.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::controller::PoolController;
use crate::domain::{AccountId, Amount, Shares, SwapFee};
use crate::memory::{InMemoryAssetLedger, InMemoryVault};
use crate::pricing;
use crate::traits::AssetLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn pool_account() -> AccountId {
    AccountId::from_bytes([0xee; 32])
}

fn provider() -> AccountId {
    AccountId::from_bytes([1u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([2u8; 32])
}

/// Fresh pool seeded to the given reserves, with both actors funded and
/// approved far beyond anything the properties move.
fn make_pool(
    value_reserve: u128,
    token_reserve: u128,
) -> PoolController<InMemoryAssetLedger, InMemoryVault> {
    let war_chest = Amount::new(1u128 << 100);
    let mut ledger = InMemoryAssetLedger::new(pool_account());
    for who in [provider(), trader()] {
        let Ok(()) = ledger.mint(&who, war_chest) else {
            panic!("mint failed");
        };
        ledger.approve(&who, &pool_account(), war_chest);
    }

    let mut vault = InMemoryVault::new();
    let Ok(attached) = vault.receive(Amount::new(value_reserve)) else {
        panic!("receive failed");
    };

    let mut pool = PoolController::new(pool_account(), PoolConfig::default(), ledger, vault);
    let Ok(_) = pool.initialize_pool(attached, Amount::new(token_reserve), &provider()) else {
        panic!("genesis failed");
    };
    pool
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Raw quote inputs, independent of any pool.
fn input_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000u128
}

/// Operation codes for the mixed-sequence property.
fn op_sequence_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..4u8, 1..12)
}

// ---------------------------------------------------------------------------
// Property 1: Round-trip loss
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_returns_at_most_original(
        rv in reserve_strategy(),
        rt in reserve_strategy(),
    ) {
        let swap_in = (rv / 1_000).max(1);
        let mut pool = make_pool(rv, rt);

        let Ok(attached) = pool.vault_mut().receive(Amount::new(swap_in)) else {
            return Ok(());
        };
        let Ok(forward) = pool.swap_value_for_token(attached, None, &trader()) else {
            return Ok(());
        };

        let Ok(back) = pool.swap_token_for_value(forward.amount_out(), None, &trader()) else {
            return Ok(());
        };

        prop_assert!(
            back.amount_out().get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            back.amount_out().get(), swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Product preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_never_shrinks_selling_value(
        rv in reserve_strategy(),
        rt in reserve_strategy(),
    ) {
        let swap_in = (rv / 500).max(1);
        let mut pool = make_pool(rv, rt);
        let Some(before) = pool.reserves().checked_product() else {
            return Ok(());
        };

        for _ in 0..5 {
            let Ok(attached) = pool.vault_mut().receive(Amount::new(swap_in)) else {
                break;
            };
            if pool.swap_value_for_token(attached, None, &trader()).is_err() {
                break;
            }
        }

        let Some(after) = pool.reserves().checked_product() else {
            return Ok(());
        };
        prop_assert!(
            after >= before,
            "product should grow from fees: after={} < before={}",
            after, before
        );
    }

    #[test]
    fn prop_product_never_shrinks_selling_token(
        rv in reserve_strategy(),
        rt in reserve_strategy(),
    ) {
        let swap_in = (rt / 500).max(1);
        let mut pool = make_pool(rv, rt);
        let Some(before) = pool.reserves().checked_product() else {
            return Ok(());
        };

        for _ in 0..5 {
            if pool
                .swap_token_for_value(Amount::new(swap_in), None, &trader())
                .is_err()
            {
                break;
            }
        }

        let Some(after) = pool.reserves().checked_product() else {
            return Ok(());
        };
        prop_assert!(
            after >= before,
            "product should grow from fees: after={} < before={}",
            after, before
        );
    }
}

// ---------------------------------------------------------------------------
// Properties 3 and 4: Quote shape
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_quote_monotone_in_input(
        rv in reserve_strategy(),
        rt in reserve_strategy(),
        input in input_strategy(),
    ) {
        let bigger = input + input / 2 + 1;
        let Ok(small) = pricing::quote(
            Amount::new(input),
            Amount::new(rv),
            Amount::new(rt),
            SwapFee::STANDARD,
        ) else {
            return Ok(());
        };
        let Ok(large) = pricing::quote(
            Amount::new(bigger),
            Amount::new(rv),
            Amount::new(rt),
            SwapFee::STANDARD,
        ) else {
            return Ok(());
        };
        prop_assert!(
            large >= small,
            "output should be monotone in input: {} < {}",
            large.get(), small.get()
        );
    }

    #[test]
    fn prop_fee_never_improves_output(
        rv in reserve_strategy(),
        rt in reserve_strategy(),
        input in input_strategy(),
    ) {
        let Ok(with_fee) = pricing::quote(
            Amount::new(input),
            Amount::new(rv),
            Amount::new(rt),
            SwapFee::STANDARD,
        ) else {
            return Ok(());
        };
        let Ok(fee_free) = pricing::quote(
            Amount::new(input),
            Amount::new(rv),
            Amount::new(rt),
            SwapFee::FREE,
        ) else {
            return Ok(());
        };
        prop_assert!(
            with_fee <= fee_free,
            "fee should cost the trader: {} > {}",
            with_fee.get(), fee_free.get()
        );
    }

    #[test]
    fn prop_quote_never_reaches_output_reserve(
        rv in reserve_strategy(),
        rt in reserve_strategy(),
        input in input_strategy(),
    ) {
        let Ok(out) = pricing::quote(
            Amount::new(input),
            Amount::new(rv),
            Amount::new(rt),
            SwapFee::STANDARD,
        ) else {
            return Ok(());
        };
        prop_assert!(
            out.get() < rt,
            "quote must stay below the output reserve: {} >= {}",
            out.get(), rt
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Redemption conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_returns_at_most_contribution(
        rv in reserve_strategy(),
        rt in reserve_strategy(),
    ) {
        let contribution = (rv / 10).max(1);
        let mut pool = make_pool(rv, rt);

        let token_before = pool.ledger().balance_of(&trader());
        let Ok(attached) = pool.vault_mut().receive(Amount::new(contribution)) else {
            return Ok(());
        };
        let Ok(minted) = pool.deposit(attached, &trader()) else {
            return Ok(());
        };
        let Some(token_pulled) = token_before.checked_sub(&pool.ledger().balance_of(&trader()))
        else {
            return Ok(());
        };

        let Ok(out) = pool.withdraw(minted, &trader()) else {
            return Ok(());
        };
        prop_assert!(
            out.value_out().get() <= contribution,
            "value redemption exceeds contribution: {} > {}",
            out.value_out().get(), contribution
        );
        prop_assert!(
            out.token_out() <= token_pulled,
            "token redemption exceeds contribution: {} > {}",
            out.token_out().get(), token_pulled.get()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 6: Mint proportionality
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_minted_shares_match_floor_ratio(
        rv in reserve_strategy(),
        rt in reserve_strategy(),
    ) {
        let mut pool = make_pool(rv, rt);

        // Skew value-per-share away from 1:1 before measuring.
        if let Ok(attached) = pool.vault_mut().receive(Amount::new((rv / 50).max(1))) {
            let _ = pool.swap_value_for_token(attached, None, &trader());
        }

        let shares_before = pool.total_shares().get();
        let value_before = pool.value_reserve().get();
        let contribution = (value_before / 7).max(1);

        let Ok(attached) = pool.vault_mut().receive(Amount::new(contribution)) else {
            return Ok(());
        };
        let Ok(minted) = pool.deposit(attached, &trader()) else {
            return Ok(());
        };

        prop_assert_eq!(
            minted.get(),
            contribution * shares_before / value_before,
            "minted shares should be the floored supply-scaled ratio"
        );
    }
}

// ---------------------------------------------------------------------------
// Property 7: Share accounting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_share_accounting_survives_operation_mix(
        rv in reserve_strategy(),
        rt in reserve_strategy(),
        ops in op_sequence_strategy(),
    ) {
        let mut pool = make_pool(rv, rt);

        for op in ops {
            match op {
                0 => {
                    let Ok(attached) =
                        pool.vault_mut().receive(Amount::new((rv / 500).max(1)))
                    else {
                        continue;
                    };
                    let _ = pool.swap_value_for_token(attached, None, &trader());
                }
                1 => {
                    let _ = pool.swap_token_for_value(
                        Amount::new((rt / 500).max(1)),
                        None,
                        &trader(),
                    );
                }
                2 => {
                    let Ok(attached) =
                        pool.vault_mut().receive(Amount::new((rv / 20).max(1)))
                    else {
                        continue;
                    };
                    let _ = pool.deposit(attached, &trader());
                }
                _ => {
                    let burn = (pool.total_shares().get() / 13).max(1);
                    let _ = pool.withdraw(Shares::new(burn), &provider());
                }
            }
        }

        prop_assert!(
            pool.verify_share_accounting().is_ok(),
            "share supply must equal the sum of positions"
        );
        if !pool.total_shares().is_zero() {
            prop_assert!(
                !pool.reserves().is_degenerate(),
                "outstanding shares must keep backing in both reserves"
            );
        }
    }
}
