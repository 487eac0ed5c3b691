//! # Eddy AMM
//!
//! Constant-product market-maker engine for a single trading pair: the
//! chain's native value asset against one fungible token.
//!
//! The pool holds both assets in external custody and keeps almost no state
//! of its own. Reserves are never stored, they are measured from the
//! [`NativeVault`](traits::NativeVault) and the
//! [`AssetLedger`](traits::AssetLedger) at the start of each operation;
//! only the liquidity-share supply and the per-provider share balances are
//! bookkept. Swaps price through the fee-adjusted constant-product formula
//! (0.3% by default), liquidity providers earn those fees through the
//! appreciation of their shares.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! eddy-amm = "0.1"
//! ```
//!
//! ## Seed a pool, swap, and exit
//!
//! ```rust
//! use eddy_amm::memory::{InMemoryAssetLedger, InMemoryVault};
//! use eddy_amm::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let pool_account = AccountId::from_bytes([0xee; 32]);
//! let alice = AccountId::from_bytes([0x01; 32]);
//! let bob = AccountId::from_bytes([0x02; 32]);
//!
//! // The environment: a token ledger and native-value custody.
//! let mut ledger = InMemoryAssetLedger::new(pool_account);
//! ledger.mint(&alice, Amount::new(1_000))?;
//! ledger.approve(&alice, &pool_account, Amount::new(1_000));
//! let mut vault = InMemoryVault::new();
//! let genesis_value = vault.receive(Amount::new(1_000))?;
//!
//! let mut pool = PoolController::new(pool_account, PoolConfig::default(), ledger, vault);
//!
//! // Genesis seeds both reserves; shares match the value contribution.
//! let shares = pool.initialize_pool(genesis_value, Amount::new(1_000), &alice)?;
//! assert_eq!(shares, Shares::new(1_000));
//!
//! // Bob attaches 100 native value and swaps it for tokens, with a
//! // slippage floor.
//! let attached = pool.vault_mut().receive(Amount::new(100))?;
//! let outcome = pool.swap_value_for_token(attached, Some(Amount::new(90)), &bob)?;
//! assert_eq!(outcome.amount_out(), Amount::new(90));
//!
//! // Alice exits half her position for a proportional cut of both sides.
//! let exit = pool.withdraw(Shares::new(500), &alice)?;
//! assert_eq!(exit.value_out(), Amount::new(550));
//! assert_eq!(exit.token_out(), Amount::new(455));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐
//! │     Caller      │  attaches value, holds shares
//! └───────┬────────┘
//!         │ initialize / swap / deposit / withdraw
//!         ▼
//! ┌────────────────┐      ┌────────────────┐
//! │ PoolController  │────▶│ pricing::quote  │  fee-adjusted x·y = k
//! └───────┬────────┘      └────────────────┘
//!         │ owns PoolState + LiquidityLedger, emits PoolEvent
//!         ▼
//! ┌────────────────┐      ┌────────────────┐
//! │  AssetLedger    │      │  NativeVault    │  external custody; reserves
//! └────────────────┘      └────────────────┘  are measured, never stored
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AccountId`](domain::AccountId), [`AttachedValue`](domain::AttachedValue), operation outcomes |
//! | [`traits`] | Custody seams the host implements: [`AssetLedger`](traits::AssetLedger), [`NativeVault`](traits::NativeVault) |
//! | [`pricing`] | The fee-adjusted constant-product quote |
//! | [`state`] | Bookkeeping: [`PoolState`](state::PoolState), [`LiquidityLedger`](state::LiquidityLedger), measured [`Reserves`](state::Reserves) |
//! | [`controller`] | [`PoolController`](controller::PoolController): operation orchestration, rollback, event emission |
//! | [`sync`] | [`SharedPool`](sync::SharedPool) for multi-threaded callers |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): the immutable fee schedule |
//! | [`events`] | [`PoolEvent`](events::PoolEvent) journal and pluggable sinks |
//! | [`memory`] | In-memory custody collaborators for tests and hostless embedding |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod events;
pub mod memory;
pub mod prelude;
pub mod pricing;
pub mod state;
pub mod sync;
pub mod traits;

#[cfg(test)]
mod proptest_properties;
