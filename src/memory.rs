//! In-memory implementations of the collaborator traits.
//!
//! [`InMemoryAssetLedger`] is a minimal allowance-based token ledger and
//! [`InMemoryVault`] a minimal native-value custody, enough to run a pool
//! end to end without an execution environment. Tests, doctests, and the
//! bundled demo use them; they also serve as the reference reading of the
//! trait contracts (failed calls change nothing).

use std::collections::HashMap;

use crate::domain::{AccountId, Amount, AttachedValue};
use crate::error::PoolError;
use crate::traits::{AssetLedger, LedgerError, NativeVault, PayoutError};

/// Token ledger with balances and ERC-20 style allowances.
///
/// The ledger is bound to one pool account at construction;
/// [`AssetLedger::transfer`] debits that account, matching the trait's
/// "push from pool custody" contract.
#[derive(Debug, Clone)]
pub struct InMemoryAssetLedger {
    pool: AccountId,
    balances: HashMap<AccountId, Amount>,
    allowances: HashMap<AccountId, HashMap<AccountId, Amount>>,
}

impl InMemoryAssetLedger {
    /// Empty ledger bound to `pool` as the custody account.
    #[must_use]
    pub fn new(pool: AccountId) -> Self {
        Self {
            pool,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// Creates tokens out of thin air for test setup.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the balance would exceed `u128`.
    pub fn mint(&mut self, to: &AccountId, amount: Amount) -> crate::error::Result<()> {
        let current = self.balance_of(to);
        let updated = current
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("minted token balance"))?;
        self.balances.insert(*to, updated);
        Ok(())
    }

    /// Authorizes `spender` to pull up to `amount` from `owner`.
    ///
    /// Overwrites any prior authorization, ERC-20 style.
    pub fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: Amount) {
        self.allowances.entry(*owner).or_default().insert(*spender, amount);
    }

    /// Remaining authorization from `owner` to `spender`.
    #[must_use]
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(owner)
            .and_then(|per_spender| per_spender.get(spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn set_balance(&mut self, who: &AccountId, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(who);
        } else {
            self.balances.insert(*who, amount);
        }
    }
}

impl AssetLedger for InMemoryAssetLedger {
    fn balance_of(&self, holder: &AccountId) -> Amount {
        self.balances.get(holder).copied().unwrap_or(Amount::ZERO)
    }

    fn transfer_from(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let source = self.balance_of(from);
        let debited = source
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        let authorized = self.allowance(from, to);
        let remaining = authorized
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance)?;
        let credited = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::Rejected("recipient balance overflow"))?;

        self.set_balance(from, debited);
        self.set_balance(to, credited);
        self.allowances.entry(*from).or_default().insert(*to, remaining);
        Ok(())
    }

    fn transfer(&mut self, to: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let pool = self.pool;
        let custody = self.balance_of(&pool);
        let debited = custody
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        let credited = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::Rejected("recipient balance overflow"))?;

        self.set_balance(&pool, debited);
        self.set_balance(to, credited);
        Ok(())
    }
}

/// Native-value custody with per-account payout destinations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVault {
    holdings: Amount,
    accounts: HashMap<AccountId, Amount>,
}

impl InMemoryVault {
    /// Empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates an attached payment landing in pool custody, returning the
    /// receipt the pool operation expects.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if custody would exceed `u128`.
    pub fn receive(&mut self, amount: Amount) -> crate::error::Result<AttachedValue> {
        self.holdings = self
            .holdings
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("vault custody"))?;
        Ok(AttachedValue::new(amount))
    }

    /// Native value delivered to `who` by past payouts.
    #[must_use]
    pub fn account_balance(&self, who: &AccountId) -> Amount {
        self.accounts.get(who).copied().unwrap_or(Amount::ZERO)
    }
}

impl NativeVault for InMemoryVault {
    fn balance(&self) -> Amount {
        self.holdings
    }

    fn pay_out(&mut self, to: &AccountId, amount: Amount) -> Result<(), PayoutError> {
        let remaining = self
            .holdings
            .checked_sub(&amount)
            .ok_or(PayoutError::new("insufficient vault custody"))?;
        let credited = self
            .account_balance(to)
            .checked_add(&amount)
            .ok_or(PayoutError::new("recipient balance overflow"))?;

        self.holdings = remaining;
        self.accounts.insert(*to, credited);
        Ok(())
    }
}
