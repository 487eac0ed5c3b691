//! Per-provider share accounting.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount, Shares};
use crate::error::PoolError;
use crate::state::Reserves;

/// Share count minted for a deposit, with the token-side contribution the
/// deposit must also supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct MintAllocation {
    shares_minted: Shares,
    token_required: Amount,
}

impl MintAllocation {
    /// Shares the provider receives.
    #[must_use]
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }

    /// Tokens the provider must supply alongside the value contribution.
    #[must_use]
    pub const fn token_required(&self) -> Amount {
        self.token_required
    }
}

/// Amounts redeemed by a share burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct BurnAllocation {
    value_out: Amount,
    token_out: Amount,
}

impl BurnAllocation {
    /// Native value redeemed.
    #[must_use]
    pub const fn value_out(&self) -> Amount {
        self.value_out
    }

    /// Tokens redeemed.
    #[must_use]
    pub const fn token_out(&self) -> Amount {
        self.token_out
    }
}

/// Provider share balances, keyed by account identity.
///
/// Absent keys read as zero and entries are dropped the moment a balance
/// reaches zero, so the map holds exactly the providers with a live claim.
/// The supply-side counterpart lives in
/// [`PoolState`](crate::state::PoolState); the pool-level invariant is that
/// the supply equals the sum of every balance here.
///
/// The proportional mint/burn arithmetic lives on this type as pure
/// associated functions: they read nothing and mutate nothing, the
/// controller applies their results through [`credit`](Self::credit) and
/// [`debit`](Self::debit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiquidityLedger {
    positions: HashMap<AccountId, Shares>,
}

impl LiquidityLedger {
    /// Empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
        }
    }

    /// Returns `who`'s share balance; unknown providers hold zero.
    #[must_use]
    pub fn shares_of(&self, who: &AccountId) -> Shares {
        self.positions.get(who).copied().unwrap_or(Shares::ZERO)
    }

    /// Number of providers with a nonzero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no provider holds shares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sum of all balances, `None` if it exceeds `u128`.
    ///
    /// Used by invariant checks; the pool-level supply must equal this sum.
    #[must_use]
    pub fn checked_total(&self) -> Option<Shares> {
        let mut total = Shares::ZERO;
        for balance in self.positions.values() {
            total = total.checked_add(balance)?;
        }
        Some(total)
    }

    /// Credits `amount` to `who`. A zero credit is a no-op and does not
    /// create an entry.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the balance would exceed `u128`.
    pub fn credit(&mut self, who: &AccountId, amount: Shares) -> crate::error::Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let current = self.shares_of(who);
        let updated = current
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("provider share balance"))?;
        self.positions.insert(*who, updated);
        Ok(())
    }

    /// Debits `amount` from `who`, dropping the entry at zero.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientShares`] if `who` holds less than
    /// `amount`.
    pub fn debit(&mut self, who: &AccountId, amount: Shares) -> crate::error::Result<()> {
        let current = self.shares_of(who);
        let updated = current
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientShares)?;
        if updated.is_zero() {
            self.positions.remove(who);
        } else {
            self.positions.insert(*who, updated);
        }
        Ok(())
    }

    /// Computes the share mint and token requirement for a value
    /// contribution.
    ///
    /// `prior_value_reserve` is the value reserve *before* the contribution
    /// landed. Both results use floor division, so the pool keeps every
    /// sub-unit remainder; a contribution too small to mint a whole share
    /// is rejected rather than silently donated.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DivisionByZero`] if `prior_value_reserve` is zero.
    /// - [`PoolError::Overflow`] on intermediate overflow.
    /// - [`PoolError::ZeroAmount`] if the mint would floor to zero shares.
    pub fn mint_allocation(
        contributed: Amount,
        prior_value_reserve: Amount,
        token_reserve: Amount,
        total_shares: Shares,
    ) -> crate::error::Result<MintAllocation> {
        if prior_value_reserve.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        let token_required = contributed
            .mul_div_floor(&token_reserve, &prior_value_reserve)
            .ok_or(PoolError::Overflow("deposit token requirement"))?;
        let shares_minted = total_shares
            .scaled_floor(&contributed, &prior_value_reserve)
            .ok_or(PoolError::Overflow("deposit share mint"))?;
        if shares_minted.is_zero() {
            return Err(PoolError::ZeroAmount("contribution too small to mint shares"));
        }
        Ok(MintAllocation {
            shares_minted,
            token_required,
        })
    }

    /// Computes the proportional redemption for a share burn.
    ///
    /// Both legs use floor division against the same reserve snapshot,
    /// taken before any balance moves.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DivisionByZero`] if `total_shares` is zero.
    /// - [`PoolError::Overflow`] on intermediate overflow.
    pub fn burn_allocation(
        share_amount: Shares,
        reserves: &Reserves,
        total_shares: Shares,
    ) -> crate::error::Result<BurnAllocation> {
        if total_shares.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        let value_out = share_amount
            .proportional_amount(&reserves.value(), &total_shares)
            .ok_or(PoolError::Overflow("redemption value leg"))?;
        let token_out = share_amount
            .proportional_amount(&reserves.token(), &total_shares)
            .ok_or(PoolError::Overflow("redemption token leg"))?;
        Ok(BurnAllocation {
            value_out,
            token_out,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn provider(tag: u8) -> AccountId {
        AccountId::from_bytes([tag; 32])
    }

    // -- Balances -----------------------------------------------------------

    #[test]
    fn unknown_provider_holds_zero() {
        let ledger = LiquidityLedger::new();
        assert_eq!(ledger.shares_of(&provider(1)), Shares::ZERO);
        assert!(ledger.is_empty());
    }

    #[test]
    fn credit_accumulates() {
        let mut ledger = LiquidityLedger::new();
        let who = provider(1);
        let Ok(()) = ledger.credit(&who, Shares::new(100)) else {
            panic!("credit failed");
        };
        let Ok(()) = ledger.credit(&who, Shares::new(50)) else {
            panic!("credit failed");
        };
        assert_eq!(ledger.shares_of(&who), Shares::new(150));
        assert_eq!(ledger.holder_count(), 1);
    }

    #[test]
    fn zero_credit_creates_no_entry() {
        let mut ledger = LiquidityLedger::new();
        let Ok(()) = ledger.credit(&provider(1), Shares::ZERO) else {
            panic!("credit failed");
        };
        assert!(ledger.is_empty());
    }

    #[test]
    fn credit_overflow_surfaces() {
        let mut ledger = LiquidityLedger::new();
        let who = provider(1);
        let Ok(()) = ledger.credit(&who, Shares::new(u128::MAX)) else {
            panic!("credit failed");
        };
        assert!(matches!(
            ledger.credit(&who, Shares::new(1)),
            Err(PoolError::Overflow(_))
        ));
    }

    #[test]
    fn debit_reduces_and_drops_at_zero() {
        let mut ledger = LiquidityLedger::new();
        let who = provider(1);
        let Ok(()) = ledger.credit(&who, Shares::new(100)) else {
            panic!("credit failed");
        };
        let Ok(()) = ledger.debit(&who, Shares::new(40)) else {
            panic!("debit failed");
        };
        assert_eq!(ledger.shares_of(&who), Shares::new(60));
        let Ok(()) = ledger.debit(&who, Shares::new(60)) else {
            panic!("debit failed");
        };
        assert_eq!(ledger.shares_of(&who), Shares::ZERO);
        assert!(ledger.is_empty());
    }

    #[test]
    fn debit_beyond_balance_rejected() {
        let mut ledger = LiquidityLedger::new();
        let who = provider(1);
        let Ok(()) = ledger.credit(&who, Shares::new(10)) else {
            panic!("credit failed");
        };
        assert_eq!(
            ledger.debit(&who, Shares::new(11)),
            Err(PoolError::InsufficientShares)
        );
        assert_eq!(ledger.shares_of(&who), Shares::new(10));
    }

    #[test]
    fn debit_unknown_provider_rejected() {
        let mut ledger = LiquidityLedger::new();
        assert_eq!(
            ledger.debit(&provider(9), Shares::new(1)),
            Err(PoolError::InsufficientShares)
        );
    }

    #[test]
    fn checked_total_sums_all_holders() {
        let mut ledger = LiquidityLedger::new();
        let Ok(()) = ledger.credit(&provider(1), Shares::new(100)) else {
            panic!("credit failed");
        };
        let Ok(()) = ledger.credit(&provider(2), Shares::new(250)) else {
            panic!("credit failed");
        };
        assert_eq!(ledger.checked_total(), Some(Shares::new(350)));
    }

    #[test]
    fn checked_total_overflow_is_none() {
        let mut ledger = LiquidityLedger::new();
        let Ok(()) = ledger.credit(&provider(1), Shares::new(u128::MAX)) else {
            panic!("credit failed");
        };
        let Ok(()) = ledger.credit(&provider(2), Shares::new(1)) else {
            panic!("credit failed");
        };
        assert_eq!(ledger.checked_total(), None);
    }

    // -- mint_allocation ----------------------------------------------------

    #[test]
    fn mint_allocation_reference_vector() {
        // contribution 550 against value 1100 / token 910 / supply 1000
        let Ok(alloc) = LiquidityLedger::mint_allocation(
            Amount::new(550),
            Amount::new(1_100),
            Amount::new(910),
            Shares::new(1_000),
        ) else {
            panic!("allocation failed");
        };
        assert_eq!(alloc.token_required(), Amount::new(455));
        assert_eq!(alloc.shares_minted(), Shares::new(500));
    }

    #[test]
    fn mint_allocation_floors_both_legs() {
        // contribution 100 against value 999 / token 500 / supply 999:
        // token = 100*500/999 = 50.05 -> 50, shares = 100*999/999 = 100
        let Ok(alloc) = LiquidityLedger::mint_allocation(
            Amount::new(100),
            Amount::new(999),
            Amount::new(500),
            Shares::new(999),
        ) else {
            panic!("allocation failed");
        };
        assert_eq!(alloc.token_required(), Amount::new(50));
        assert_eq!(alloc.shares_minted(), Shares::new(100));
    }

    #[test]
    fn mint_allocation_rejects_dust() {
        // 1 unit against a deep pool floors to zero shares.
        let result = LiquidityLedger::mint_allocation(
            Amount::new(1),
            Amount::new(1_000_000),
            Amount::new(1_000_000),
            Shares::new(999),
        );
        assert!(matches!(result, Err(PoolError::ZeroAmount(_))));
    }

    #[test]
    fn mint_allocation_zero_prior_reserve() {
        let result = LiquidityLedger::mint_allocation(
            Amount::new(100),
            Amount::ZERO,
            Amount::new(1_000),
            Shares::new(1_000),
        );
        assert_eq!(result, Err(PoolError::DivisionByZero));
    }

    #[test]
    fn mint_allocation_overflow() {
        let result = LiquidityLedger::mint_allocation(
            Amount::MAX,
            Amount::new(1),
            Amount::new(2),
            Shares::new(1),
        );
        assert!(matches!(result, Err(PoolError::Overflow(_))));
    }

    // -- burn_allocation ----------------------------------------------------

    #[test]
    fn burn_allocation_proportional() {
        // 500 of 1500 shares against value 1650 / token 1365:
        // value = 500*1650/1500 = 550, token = 500*1365/1500 = 455
        let reserves = Reserves::new(Amount::new(1_650), Amount::new(1_365));
        let Ok(alloc) =
            LiquidityLedger::burn_allocation(Shares::new(500), &reserves, Shares::new(1_500))
        else {
            panic!("allocation failed");
        };
        assert_eq!(alloc.value_out(), Amount::new(550));
        assert_eq!(alloc.token_out(), Amount::new(455));
    }

    #[test]
    fn burn_allocation_full_supply_returns_everything() {
        let reserves = Reserves::new(Amount::new(1_234), Amount::new(5_678));
        let total = Shares::new(1_000);
        let Ok(alloc) = LiquidityLedger::burn_allocation(total, &reserves, total) else {
            panic!("allocation failed");
        };
        assert_eq!(alloc.value_out(), Amount::new(1_234));
        assert_eq!(alloc.token_out(), Amount::new(5_678));
    }

    #[test]
    fn burn_allocation_floors() {
        // 1 of 3 shares against 100/100 -> 33/33
        let reserves = Reserves::new(Amount::new(100), Amount::new(100));
        let Ok(alloc) =
            LiquidityLedger::burn_allocation(Shares::new(1), &reserves, Shares::new(3))
        else {
            panic!("allocation failed");
        };
        assert_eq!(alloc.value_out(), Amount::new(33));
        assert_eq!(alloc.token_out(), Amount::new(33));
    }

    #[test]
    fn burn_allocation_zero_supply() {
        let reserves = Reserves::new(Amount::new(100), Amount::new(100));
        let result = LiquidityLedger::burn_allocation(Shares::new(1), &reserves, Shares::ZERO);
        assert_eq!(result, Err(PoolError::DivisionByZero));
    }
}
