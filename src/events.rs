//! Typed events describing committed pool operations.
//!
//! Events are observability, not correctness: the pool records one event per
//! successfully committed operation and nothing for rolled-back attempts, so
//! a sink replaying the journal sees exactly the history that happened.
//! Consumers plug in an [`EventSink`]; the crate ships
//! [`InMemoryEventSink`] for tests and introspection and [`NullSink`] for
//! callers that do not subscribe.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Amount, Shares, SwapKind};

/// An event emitted after a committed pool operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolEvent {
    /// A swap settled in either direction.
    Swapped {
        /// Direction of the swap.
        kind: SwapKind,
        /// The trading account.
        who: AccountId,
        /// Amount paid into the pool.
        amount_in: Amount,
        /// Amount paid out of the pool.
        amount_out: Amount,
    },
    /// Liquidity entered the pool (genesis or a later deposit).
    LiquidityProvided {
        /// The providing account.
        who: AccountId,
        /// Shares credited to the provider.
        shares_minted: Shares,
        /// Native value contributed.
        value_in: Amount,
        /// Tokens pulled alongside the value.
        token_in: Amount,
    },
    /// Liquidity left the pool through a share burn.
    LiquidityRemoved {
        /// The withdrawing account.
        who: AccountId,
        /// Shares burned.
        shares_burned: Shares,
        /// Native value paid out.
        value_out: Amount,
        /// Tokens paid out.
        token_out: Amount,
    },
}

impl PoolEvent {
    /// Stable lowercase tag for routing and storage.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::Swapped { .. } => "swapped",
            Self::LiquidityProvided { .. } => "liquidity_provided",
            Self::LiquidityRemoved { .. } => "liquidity_removed",
        }
    }

    /// The account the event concerns.
    #[must_use]
    pub const fn who(&self) -> &AccountId {
        match self {
            Self::Swapped { who, .. }
            | Self::LiquidityProvided { who, .. }
            | Self::LiquidityRemoved { who, .. } => who,
        }
    }
}

/// Receives events from the pool controller.
///
/// `record` is called after an operation's state changes and external
/// transfers have all settled. Implementations must not call back into the
/// pool.
pub trait EventSink {
    /// Accepts one committed event.
    fn record(&mut self, event: PoolEvent);
}

/// Sink that keeps every event in order, for tests and introspection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventSink {
    events: Vec<PoolEvent>,
}

impl InMemoryEventSink {
    /// Empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All recorded events in commit order.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// The most recently recorded event.
    #[must_use]
    pub fn last(&self) -> Option<&PoolEvent> {
        self.events.last()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&mut self, event: PoolEvent) {
        self.events.push(event);
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: PoolEvent) {}
}
