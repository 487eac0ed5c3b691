//! Sharing one pool across threads.
//!
//! A [`PoolController`] takes `&mut self` for every mutating operation, so a
//! single owner is already serialized. [`SharedPool`] wraps a controller in
//! `Arc<Mutex<..>>` for the multi-caller case: clones are cheap handles onto
//! the same pool, and every operation runs under the lock, so concurrent
//! callers observe each operation's reserve measurement and settlement as
//! one atomic step.
//!
//! A poisoned lock (a panic inside an operation) surfaces as
//! [`PoolError::StateCorrupted`] rather than panicking the caller.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::controller::{PoolController, PoolSnapshot};
use crate::domain::{
    AccountId, Amount, AttachedValue, Shares, SwapOutcome, WithdrawOutcome,
};
use crate::error::PoolError;
use crate::events::{EventSink, NullSink};
use crate::traits::{AssetLedger, NativeVault};

/// Thread-safe handle onto a single pool.
///
/// # Examples
///
/// ```
/// use eddy_amm::config::PoolConfig;
/// use eddy_amm::controller::PoolController;
/// use eddy_amm::domain::{AccountId, Amount};
/// use eddy_amm::memory::{InMemoryAssetLedger, InMemoryVault};
/// use eddy_amm::sync::SharedPool;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pool_account = AccountId::from_bytes([0xee; 32]);
/// let provider = AccountId::from_bytes([1; 32]);
///
/// let mut ledger = InMemoryAssetLedger::new(pool_account);
/// ledger.mint(&provider, Amount::new(1_000))?;
/// ledger.approve(&provider, &pool_account, Amount::new(1_000));
/// let mut vault = InMemoryVault::new();
/// let attached = vault.receive(Amount::new(1_000))?;
///
/// let pool = SharedPool::new(PoolController::new(
///     pool_account,
///     PoolConfig::default(),
///     ledger,
///     vault,
/// ));
/// let handle = pool.clone();
/// handle.initialize_pool(attached, Amount::new(1_000), &provider)?;
/// assert_eq!(pool.total_shares()?, eddy_amm::domain::Shares::new(1_000));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SharedPool<L, V, S = NullSink> {
    inner: Arc<Mutex<PoolController<L, V, S>>>,
}

impl<L, V, S> Clone for SharedPool<L, V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: AssetLedger, V: NativeVault, S: EventSink> SharedPool<L, V, S> {
    /// Wraps a controller for shared use.
    pub fn new(controller: PoolController<L, V, S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    fn lock(&self) -> crate::error::Result<MutexGuard<'_, PoolController<L, V, S>>> {
        self.inner
            .lock()
            .map_err(|_| PoolError::StateCorrupted("pool lock poisoned"))
    }

    /// Runs `f` with shared read access to the locked controller.
    ///
    /// # Errors
    ///
    /// Fails with [`PoolError::StateCorrupted`] if the lock is poisoned.
    pub fn with<R>(
        &self,
        f: impl FnOnce(&PoolController<L, V, S>) -> R,
    ) -> crate::error::Result<R> {
        let guard = self.lock()?;
        Ok(f(&guard))
    }

    /// Runs `f` with exclusive access to the locked controller.
    ///
    /// Intended for environment administration (crediting attached value,
    /// minting test balances) that must not interleave with operations.
    ///
    /// # Errors
    ///
    /// Fails with [`PoolError::StateCorrupted`] if the lock is poisoned.
    pub fn with_mut<R>(
        &self,
        f: impl FnOnce(&mut PoolController<L, V, S>) -> R,
    ) -> crate::error::Result<R> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    /// See [`PoolController::initialize_pool`].
    ///
    /// # Errors
    ///
    /// Any controller error, plus [`PoolError::StateCorrupted`] for a
    /// poisoned lock.
    pub fn initialize_pool(
        &self,
        attached: AttachedValue,
        token_amount: Amount,
        caller: &AccountId,
    ) -> crate::error::Result<Shares> {
        self.lock()?.initialize_pool(attached, token_amount, caller)
    }

    /// See [`PoolController::swap_value_for_token`].
    ///
    /// # Errors
    ///
    /// Any controller error, plus [`PoolError::StateCorrupted`] for a
    /// poisoned lock.
    pub fn swap_value_for_token(
        &self,
        attached: AttachedValue,
        min_token_out: Option<Amount>,
        caller: &AccountId,
    ) -> crate::error::Result<SwapOutcome> {
        self.lock()?
            .swap_value_for_token(attached, min_token_out, caller)
    }

    /// See [`PoolController::swap_token_for_value`].
    ///
    /// # Errors
    ///
    /// Any controller error, plus [`PoolError::StateCorrupted`] for a
    /// poisoned lock.
    pub fn swap_token_for_value(
        &self,
        token_in: Amount,
        min_value_out: Option<Amount>,
        caller: &AccountId,
    ) -> crate::error::Result<SwapOutcome> {
        self.lock()?
            .swap_token_for_value(token_in, min_value_out, caller)
    }

    /// See [`PoolController::deposit`].
    ///
    /// # Errors
    ///
    /// Any controller error, plus [`PoolError::StateCorrupted`] for a
    /// poisoned lock.
    pub fn deposit(
        &self,
        attached: AttachedValue,
        caller: &AccountId,
    ) -> crate::error::Result<Shares> {
        self.lock()?.deposit(attached, caller)
    }

    /// See [`PoolController::withdraw`].
    ///
    /// # Errors
    ///
    /// Any controller error, plus [`PoolError::StateCorrupted`] for a
    /// poisoned lock.
    pub fn withdraw(
        &self,
        share_amount: Shares,
        caller: &AccountId,
    ) -> crate::error::Result<WithdrawOutcome> {
        self.lock()?.withdraw(share_amount, caller)
    }

    /// See [`PoolController::quote_value_to_token`].
    ///
    /// # Errors
    ///
    /// Any controller error, plus [`PoolError::StateCorrupted`] for a
    /// poisoned lock.
    pub fn quote_value_to_token(&self, value_in: Amount) -> crate::error::Result<Amount> {
        self.lock()?.quote_value_to_token(value_in)
    }

    /// See [`PoolController::quote_token_to_value`].
    ///
    /// # Errors
    ///
    /// Any controller error, plus [`PoolError::StateCorrupted`] for a
    /// poisoned lock.
    pub fn quote_token_to_value(&self, token_in: Amount) -> crate::error::Result<Amount> {
        self.lock()?.quote_token_to_value(token_in)
    }

    /// See [`PoolController::snapshot`].
    ///
    /// # Errors
    ///
    /// Fails with [`PoolError::StateCorrupted`] if the lock is poisoned.
    pub fn snapshot(&self) -> crate::error::Result<PoolSnapshot> {
        Ok(self.lock()?.snapshot())
    }

    /// See [`PoolController::is_initialized`].
    ///
    /// # Errors
    ///
    /// Fails with [`PoolError::StateCorrupted`] if the lock is poisoned.
    pub fn is_initialized(&self) -> crate::error::Result<bool> {
        Ok(self.lock()?.is_initialized())
    }

    /// See [`PoolController::total_shares`].
    ///
    /// # Errors
    ///
    /// Fails with [`PoolError::StateCorrupted`] if the lock is poisoned.
    pub fn total_shares(&self) -> crate::error::Result<Shares> {
        Ok(self.lock()?.total_shares())
    }

    /// See [`PoolController::shares_of`].
    ///
    /// # Errors
    ///
    /// Fails with [`PoolError::StateCorrupted`] if the lock is poisoned.
    pub fn shares_of(&self, who: &AccountId) -> crate::error::Result<Shares> {
        Ok(self.lock()?.shares_of(who))
    }

    /// See [`PoolController::value_reserve`].
    ///
    /// # Errors
    ///
    /// Fails with [`PoolError::StateCorrupted`] if the lock is poisoned.
    pub fn value_reserve(&self) -> crate::error::Result<Amount> {
        Ok(self.lock()?.value_reserve())
    }

    /// See [`PoolController::token_reserve`].
    ///
    /// # Errors
    ///
    /// Fails with [`PoolError::StateCorrupted`] if the lock is poisoned.
    pub fn token_reserve(&self) -> crate::error::Result<Amount> {
        Ok(self.lock()?.token_reserve())
    }

    /// See [`PoolController::verify_share_accounting`].
    ///
    /// # Errors
    ///
    /// Any controller error, plus [`PoolError::StateCorrupted`] for a
    /// poisoned lock.
    pub fn verify_share_accounting(&self) -> crate::error::Result<()> {
        self.lock()?.verify_share_accounting()
    }
}
