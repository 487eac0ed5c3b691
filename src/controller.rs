//! Pool orchestration: the public operation surface.
//!
//! [`PoolController`] composes the pricing function, the stored bookkeeping,
//! and the share ledger with the two external collaborators, and is the only
//! type that touches all of them. One controller is one pool; independent
//! pools are independent controllers.
//!
//! # Reserve measurement rules
//!
//! Reserves are never stored, they are measured per operation, and the two
//! assets are measured differently because they arrive differently:
//!
//! - **Native value** arrives atomically with the call. By the time an
//!   operation runs, the attached amount is already inside
//!   [`NativeVault::balance`], so the pre-call reserve is
//!   `balance - attached`, by subtraction, never by a later re-query.
//! - **Tokens** arrive only when the pool explicitly pulls them, so the
//!   ledger balance of the pool account read *before* the pull is already
//!   the pre-swap reserve.
//!
//! # Ordering and rollback
//!
//! Every operation validates, then commits its internal mutations, then
//! performs external transfers (checks, effects, interactions). A rejected
//! external call unwinds the internal mutations before the error surfaces,
//! with two documented exceptions where custody has already changed hands
//! irreversibly:
//!
//! - attached value cannot be returned by the pool when a later token pull
//!   fails (initialization and deposits);
//! - a withdrawal's token push failing *after* the value payout settled
//!   leaves the burn committed, because a settled payout cannot be
//!   recalled.

use serde::{Deserialize, Serialize};

use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AttachedValue, Shares, SwapKind, SwapOutcome, WithdrawOutcome,
};
use crate::error::PoolError;
use crate::events::{EventSink, NullSink, PoolEvent};
use crate::pricing;
use crate::state::{LiquidityLedger, PoolState, Reserves};
use crate::traits::{AssetLedger, NativeVault};

/// Serializable point-in-time view of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct PoolSnapshot {
    reserves: Reserves,
    total_shares: Shares,
    initialized: bool,
}

impl PoolSnapshot {
    /// Measured reserves at snapshot time.
    #[must_use]
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }

    /// Outstanding share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Whether the pool has been initialized.
    #[must_use]
    pub const fn initialized(&self) -> bool {
        self.initialized
    }
}

/// Orchestrates one constant-product pool over pluggable collaborators.
///
/// Type parameters: `L` is the external token ledger, `V` the native-value
/// custody, `S` the event sink (defaulting to [`NullSink`]). The controller
/// owns all three plus the pool's bookkeeping; every mutating operation
/// takes `&mut self`, so a single controller serializes its operations by
/// construction. Concurrent callers share a pool through
/// [`SharedPool`](crate::sync::SharedPool).
///
/// # Examples
///
/// ```
/// use eddy_amm::config::PoolConfig;
/// use eddy_amm::controller::PoolController;
/// use eddy_amm::domain::{AccountId, Amount};
/// use eddy_amm::memory::{InMemoryAssetLedger, InMemoryVault};
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
/// let mut pool = PoolController::new(pool_account, PoolConfig::default(), ledger, vault);
/// let shares = pool.initialize_pool(attached, Amount::new(1_000), &provider)?;
/// assert_eq!(shares.get(), 1_000);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PoolController<L, V, S = NullSink> {
    pool_account: AccountId,
    config: PoolConfig,
    state: PoolState,
    positions: LiquidityLedger,
    ledger: L,
    vault: V,
    events: S,
}

impl<L: AssetLedger, V: NativeVault> PoolController<L, V> {
    /// Creates a controller that discards events.
    pub fn new(pool_account: AccountId, config: PoolConfig, ledger: L, vault: V) -> Self {
        Self::with_event_sink(pool_account, config, ledger, vault, NullSink)
    }
}

impl<L: AssetLedger, V: NativeVault, S: EventSink> PoolController<L, V, S> {
    /// Creates a controller recording events into `events`.
    pub fn with_event_sink(
        pool_account: AccountId,
        config: PoolConfig,
        ledger: L,
        vault: V,
        events: S,
    ) -> Self {
        Self {
            pool_account,
            config,
            state: PoolState::new(),
            positions: LiquidityLedger::new(),
            ledger,
            vault,
            events,
        }
    }

    // -- Read-only surface --------------------------------------------------

    /// The pool's identity on the asset ledger.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// The pool's immutable configuration.
    #[must_use]
    pub const fn config(&self) -> PoolConfig {
        self.config
    }

    /// Whether genesis has happened.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    /// Outstanding share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.state.total_shares()
    }

    /// `who`'s share balance; unknown providers hold zero.
    #[must_use]
    pub fn shares_of(&self, who: &AccountId) -> Shares {
        self.positions.shares_of(who)
    }

    /// Number of providers holding shares.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.positions.holder_count()
    }

    /// Current native-value reserve, measured from the vault.
    #[must_use]
    pub fn value_reserve(&self) -> Amount {
        self.vault.balance()
    }

    /// Current token reserve, measured from the ledger.
    #[must_use]
    pub fn token_reserve(&self) -> Amount {
        self.ledger.balance_of(&self.pool_account)
    }

    /// Both reserves, measured now.
    pub fn reserves(&self) -> Reserves {
        Reserves::new(self.value_reserve(), self.token_reserve())
    }

    /// Serializable view of reserves, supply, and the init flag.
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            reserves: self.reserves(),
            total_shares: self.state.total_shares(),
            initialized: self.state.is_initialized(),
        }
    }

    /// The token ledger collaborator.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// The native-value vault collaborator.
    #[must_use]
    pub const fn vault(&self) -> &V {
        &self.vault
    }

    /// The event sink.
    #[must_use]
    pub const fn event_sink(&self) -> &S {
        &self.events
    }

    /// Mutable access to the event sink (e.g. to drain a recording sink).
    pub fn event_sink_mut(&mut self) -> &mut S {
        &mut self.events
    }

    /// Mutable access to the ledger collaborator.
    ///
    /// For the embedding environment to administer balances and
    /// allowances; pool operations never reach for this.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Mutable access to the vault collaborator.
    ///
    /// Lets the embedding environment credit an attached payment into
    /// custody before invoking an operation on it.
    pub fn vault_mut(&mut self) -> &mut V {
        &mut self.vault
    }

    /// Cross-checks the share supply against the sum of all positions.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::StateCorrupted`] if the two disagree or the sum
    /// overflows.
    pub fn verify_share_accounting(&self) -> crate::error::Result<()> {
        match self.positions.checked_total() {
            Some(total) if total == self.state.total_shares() => Ok(()),
            _ => Err(PoolError::StateCorrupted(
                "share supply does not match position sum",
            )),
        }
    }

    /// Previews a value-for-token swap against current reserves.
    ///
    /// # Errors
    ///
    /// Fails with [`PoolError::PoolNotInitialized`] before genesis, or with
    /// any quoting error.
    pub fn quote_value_to_token(&self, value_in: Amount) -> crate::error::Result<Amount> {
        self.state.require_initialized()?;
        pricing::quote(
            value_in,
            self.value_reserve(),
            self.token_reserve(),
            self.config.fee(),
        )
    }

    /// Previews a token-for-value swap against current reserves.
    ///
    /// # Errors
    ///
    /// Fails with [`PoolError::PoolNotInitialized`] before genesis, or with
    /// any quoting error.
    pub fn quote_token_to_value(&self, token_in: Amount) -> crate::error::Result<Amount> {
        self.state.require_initialized()?;
        pricing::quote(
            token_in,
            self.token_reserve(),
            self.value_reserve(),
            self.config.fee(),
        )
    }

    // -- Operations ---------------------------------------------------------

    /// Genesis: seeds both reserves and mints the first shares.
    ///
    /// The attached value becomes the value reserve and sets the share
    /// supply one-to-one; `token_amount` is pulled from `caller` via a
    /// prior authorization on the ledger.
    ///
    /// # Errors
    ///
    /// - [`PoolError::AlreadyInitialized`] on any second call.
    /// - [`PoolError::ZeroAmount`] if either contribution is zero.
    /// - [`PoolError::AssetTransferFailed`] if the token pull is rejected;
    ///   share and flag mutations are rolled back, but the attached value
    ///   stays in custody because its receipt cannot be reversed.
    pub fn initialize_pool(
        &mut self,
        attached: AttachedValue,
        token_amount: Amount,
        caller: &AccountId,
    ) -> crate::error::Result<Shares> {
        if self.state.is_initialized() {
            return Err(PoolError::AlreadyInitialized);
        }
        if attached.is_zero() {
            return Err(PoolError::ZeroAmount("genesis value contribution"));
        }
        if token_amount.is_zero() {
            return Err(PoolError::ZeroAmount("genesis token contribution"));
        }

        let genesis = Shares::from_amount(attached.amount());
        self.state.initialize(genesis)?;
        if let Err(err) = self.positions.credit(caller, genesis) {
            self.state.revert_initialize();
            return Err(err);
        }

        if let Err(ledger_err) = self
            .ledger
            .transfer_from(caller, &self.pool_account, token_amount)
        {
            let cause: PoolError = ledger_err.into();
            let rollback = self.positions.debit(caller, genesis);
            self.state.revert_initialize();
            return Err(match rollback {
                Ok(()) => cause,
                Err(_) => PoolError::StateCorrupted("genesis rollback failed"),
            });
        }

        self.events.record(PoolEvent::LiquidityProvided {
            who: *caller,
            shares_minted: genesis,
            value_in: attached.amount(),
            token_in: token_amount,
        });
        Ok(genesis)
    }

    /// Swaps attached native value for tokens.
    ///
    /// Prices against the pre-call value reserve (`balance - attached`) and
    /// the current token reserve, then pushes the quoted tokens to
    /// `caller`. `min_token_out` is an optional slippage floor checked
    /// before anything moves.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PoolNotInitialized`] before genesis.
    /// - [`PoolError::ZeroAmount`] for a zero input or a quote that floors
    ///   to zero.
    /// - [`PoolError::InsufficientReserve`] if the quote would drain the
    ///   token reserve.
    /// - [`PoolError::SlippageExceeded`] if the quote is below
    ///   `min_token_out`.
    /// - [`PoolError::AssetTransferFailed`] if the token push is rejected;
    ///   no bookkeeping changed, but the attached value stays in custody.
    pub fn swap_value_for_token(
        &mut self,
        attached: AttachedValue,
        min_token_out: Option<Amount>,
        caller: &AccountId,
    ) -> crate::error::Result<SwapOutcome> {
        self.state.require_initialized()?;
        if attached.is_zero() {
            return Err(PoolError::ZeroAmount("swap value input"));
        }

        let token_reserve = self.token_reserve();
        let value_before = self.pre_call_value_reserve(attached)?;
        Reserves::new(value_before, token_reserve).require_backing(self.state.total_shares())?;

        let token_out = pricing::quote(
            attached.amount(),
            value_before,
            token_reserve,
            self.config.fee(),
        )?;
        if token_out.is_zero() {
            return Err(PoolError::ZeroAmount("quoted token output"));
        }
        if token_out >= token_reserve {
            return Err(PoolError::InsufficientReserve);
        }
        check_min_out(token_out, min_token_out)?;

        // No stored state changes here: reserves are derived and the share
        // supply is untouched by swaps.
        self.ledger.transfer(caller, token_out)?;

        let outcome = SwapOutcome::new(SwapKind::ValueForToken, attached.amount(), token_out)?;
        self.events.record(PoolEvent::Swapped {
            kind: SwapKind::ValueForToken,
            who: *caller,
            amount_in: attached.amount(),
            amount_out: token_out,
        });
        Ok(outcome)
    }

    /// Swaps tokens for native value.
    ///
    /// Prices against the pre-pull token reserve and the current value
    /// balance, pulls `token_in` from `caller`, then pays the quoted value
    /// out. A rejected payout triggers a compensating transfer returning
    /// the pulled tokens, leaving state as if the swap was never attempted.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PoolNotInitialized`] before genesis.
    /// - [`PoolError::ZeroAmount`] for a zero input or a quote that floors
    ///   to zero.
    /// - [`PoolError::InsufficientReserve`] if the quote would drain the
    ///   value reserve.
    /// - [`PoolError::SlippageExceeded`] if the quote is below
    ///   `min_value_out`.
    /// - [`PoolError::AssetTransferFailed`] if the token pull is rejected.
    /// - [`PoolError::PayoutFailed`] if the payout is rejected. If even the
    ///   compensating return is rejected the pulled tokens remain in
    ///   custody.
    pub fn swap_token_for_value(
        &mut self,
        token_in: Amount,
        min_value_out: Option<Amount>,
        caller: &AccountId,
    ) -> crate::error::Result<SwapOutcome> {
        self.state.require_initialized()?;
        if token_in.is_zero() {
            return Err(PoolError::ZeroAmount("swap token input"));
        }

        let token_reserve = self.token_reserve();
        let value_reserve = self.value_reserve();
        Reserves::new(value_reserve, token_reserve).require_backing(self.state.total_shares())?;

        let value_out = pricing::quote(token_in, token_reserve, value_reserve, self.config.fee())?;
        if value_out.is_zero() {
            return Err(PoolError::ZeroAmount("quoted value output"));
        }
        if value_out >= value_reserve {
            return Err(PoolError::InsufficientReserve);
        }
        check_min_out(value_out, min_value_out)?;

        self.ledger
            .transfer_from(caller, &self.pool_account, token_in)?;

        if let Err(payout_err) = self.vault.pay_out(caller, value_out) {
            let cause: PoolError = payout_err.into();
            return Err(match self.ledger.transfer(caller, token_in) {
                Ok(()) => cause,
                Err(_) => {
                    PoolError::PayoutFailed("payout rejected; token input retained in custody")
                }
            });
        }

        let outcome = SwapOutcome::new(SwapKind::TokenForValue, token_in, value_out)?;
        self.events.record(PoolEvent::Swapped {
            kind: SwapKind::TokenForValue,
            who: *caller,
            amount_in: token_in,
            amount_out: value_out,
        });
        Ok(outcome)
    }

    /// Adds liquidity: the attached value plus a proportional token pull.
    ///
    /// Shares and the token requirement both derive from the pre-call value
    /// reserve, see [`LiquidityLedger::mint_allocation`]. The token side is
    /// pulled via a prior authorization; a zero token requirement skips the
    /// pull.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PoolNotInitialized`] before genesis.
    /// - [`PoolError::ZeroAmount`] for a zero contribution or one too small
    ///   to mint a whole share.
    /// - [`PoolError::ZeroReserve`] on a fully drained pool; it cannot be
    ///   re-seeded through deposits.
    /// - [`PoolError::StateCorrupted`] if the pre-call value reserve is
    ///   zero while shares are outstanding.
    /// - [`PoolError::AssetTransferFailed`] if the token pull is rejected;
    ///   the mint is rolled back and the attached value stays in custody.
    pub fn deposit(
        &mut self,
        attached: AttachedValue,
        caller: &AccountId,
    ) -> crate::error::Result<Shares> {
        self.state.require_initialized()?;
        if attached.is_zero() {
            return Err(PoolError::ZeroAmount("deposit value contribution"));
        }
        let total_shares = self.state.total_shares();
        if total_shares.is_zero() {
            return Err(PoolError::ZeroReserve);
        }

        let token_reserve = self.token_reserve();
        let prior_value = self.pre_call_value_reserve(attached)?;
        if prior_value.is_zero() {
            return Err(PoolError::StateCorrupted("deposit against empty value reserve"));
        }
        Reserves::new(prior_value, token_reserve).require_backing(total_shares)?;

        let alloc = LiquidityLedger::mint_allocation(
            attached.amount(),
            prior_value,
            token_reserve,
            total_shares,
        )?;
        let minted = alloc.shares_minted();

        self.positions.credit(caller, minted)?;
        if let Err(err) = self.state.add_shares(minted) {
            return Err(match self.positions.debit(caller, minted) {
                Ok(()) => err,
                Err(_) => PoolError::StateCorrupted("deposit rollback failed"),
            });
        }

        if !alloc.token_required().is_zero() {
            if let Err(ledger_err) =
                self.ledger
                    .transfer_from(caller, &self.pool_account, alloc.token_required())
            {
                let cause: PoolError = ledger_err.into();
                return Err(self.rollback_mint(caller, minted, cause));
            }
        }

        self.events.record(PoolEvent::LiquidityProvided {
            who: *caller,
            shares_minted: minted,
            value_in: attached.amount(),
            token_in: alloc.token_required(),
        });
        Ok(minted)
    }

    /// Removes liquidity: burns shares for a proportional cut of both
    /// reserves.
    ///
    /// Redemption amounts are computed from a single reserve snapshot taken
    /// before anything moves. The value leg is paid first: a rejected
    /// payout rolls the burn back cleanly. The token push follows; zero
    /// legs are skipped.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PoolNotInitialized`] before genesis.
    /// - [`PoolError::ZeroAmount`] for a zero share amount.
    /// - [`PoolError::InsufficientShares`] if `caller` holds fewer shares;
    ///   nothing is mutated.
    /// - [`PoolError::PayoutFailed`] if the value payout is rejected; the
    ///   burn is rolled back.
    /// - [`PoolError::AssetTransferFailed`] if the token push is rejected
    ///   after the payout settled. The payout cannot be recalled, so the
    ///   burn stays committed and the tokens remain in custody.
    pub fn withdraw(
        &mut self,
        share_amount: Shares,
        caller: &AccountId,
    ) -> crate::error::Result<WithdrawOutcome> {
        self.state.require_initialized()?;
        if share_amount.is_zero() {
            return Err(PoolError::ZeroAmount("withdrawal share amount"));
        }
        if self.positions.shares_of(caller) < share_amount {
            return Err(PoolError::InsufficientShares);
        }

        let total_shares = self.state.total_shares();
        let reserves = self.reserves();
        let alloc = LiquidityLedger::burn_allocation(share_amount, &reserves, total_shares)?;

        self.positions.debit(caller, share_amount)?;
        if let Err(err) = self.state.remove_shares(share_amount) {
            return Err(match self.positions.credit(caller, share_amount) {
                Ok(()) => err,
                Err(_) => PoolError::StateCorrupted("withdrawal rollback failed"),
            });
        }

        if !alloc.value_out().is_zero() {
            if let Err(payout_err) = self.vault.pay_out(caller, alloc.value_out()) {
                let cause: PoolError = payout_err.into();
                return Err(self.rollback_burn(caller, share_amount, cause));
            }
        }

        if !alloc.token_out().is_zero() {
            // The value leg has settled and cannot be recalled; a rejected
            // push here leaves the burn committed.
            self.ledger.transfer(caller, alloc.token_out())?;
        }

        let outcome = WithdrawOutcome::new(share_amount, alloc.value_out(), alloc.token_out())?;
        self.events.record(PoolEvent::LiquidityRemoved {
            who: *caller,
            shares_burned: share_amount,
            value_out: alloc.value_out(),
            token_out: alloc.token_out(),
        });
        Ok(outcome)
    }

    // -- Internals ----------------------------------------------------------

    /// Value reserve as it stood before the attached payment landed.
    fn pre_call_value_reserve(&self, attached: AttachedValue) -> crate::error::Result<Amount> {
        self.vault
            .balance()
            .checked_sub(&attached.amount())
            .ok_or(PoolError::StateCorrupted("attached value missing from custody"))
    }

    fn rollback_mint(&mut self, who: &AccountId, minted: Shares, cause: PoolError) -> PoolError {
        let supply_ok = self.state.remove_shares(minted).is_ok();
        let position_ok = self.positions.debit(who, minted).is_ok();
        if supply_ok && position_ok {
            cause
        } else {
            PoolError::StateCorrupted("deposit rollback failed")
        }
    }

    fn rollback_burn(&mut self, who: &AccountId, burned: Shares, cause: PoolError) -> PoolError {
        let supply_ok = self.state.add_shares(burned).is_ok();
        let position_ok = self.positions.credit(who, burned).is_ok();
        if supply_ok && position_ok {
            cause
        } else {
            PoolError::StateCorrupted("withdrawal rollback failed")
        }
    }
}

fn check_min_out(actual: Amount, floor: Option<Amount>) -> crate::error::Result<()> {
    match floor {
        Some(min) if actual < min => Err(PoolError::SlippageExceeded),
        _ => Ok(()),
    }
}
