use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::{Error, Leverage, PositionRequest, Result, Side, TimestampNs};

/// Status of a trade in the lifecycle store.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    /// Accepted but not yet executed.
    Pending,
    /// Executed.
    Filled,
    /// Withdrawn before execution.
    Cancelled,
}

/// The identifier of a trade in the store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::From,
)]
#[repr(transparent)]
pub struct TradeId(u64);

/// A persisted trade row. The engine's [`MarginResult`](crate::prelude::MarginResult)
/// may be attached to a trade by the caller but is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Trade {
    /// Store-assigned identity.
    #[getset(get_copy = "pub")]
    id: TradeId,
    /// Identifying ticker symbol.
    #[getset(get = "pub")]
    instrument: String,
    /// Which way the position is taken.
    #[getset(get_copy = "pub")]
    side: Side,
    /// Quantity of the underlying.
    #[getset(get_copy = "pub")]
    size: Decimal,
    /// Entry price denoted in the quote currency.
    #[getset(get_copy = "pub")]
    entry_price: Decimal,
    /// The leverage the trade was requested with.
    #[getset(get_copy = "pub")]
    leverage: Leverage,
    /// Where the trade is in its lifecycle.
    #[getset(get_copy = "pub")]
    status: TradeStatus,
    /// When the trade was created, assigned by the caller.
    #[getset(get_copy = "pub")]
    created_at: TimestampNs,
    /// When the status last changed, if it ever did.
    #[getset(get_copy = "pub")]
    updated_at: Option<TimestampNs>,
}

/// The trait for trade identity and lifecycle persistence. The risk engine
/// consumes this seam, it does not implement it in production; the in-memory
/// variant below backs tests and demos.
pub trait TradeStore {
    /// Persist a new pending trade for an already validated request,
    /// assigning it an identity.
    fn create(&mut self, request: &PositionRequest, leverage: Leverage, now: TimestampNs)
    -> Result<Trade>;

    /// Query a trade by id.
    fn trade(&self, id: TradeId) -> Result<&Trade>;

    /// The most recently created trades, newest first, at most `limit`.
    fn recent_trades(&self, limit: usize) -> Vec<&Trade>;

    /// Transition the status of a trade, stamping the update time.
    fn set_status(&mut self, id: TradeId, status: TradeStatus, now: TimestampNs) -> Result<()>;
}

/// Keeps trades in memory, identities are assigned sequentially.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTradeStore {
    trades: Vec<Trade>,
}

impl InMemoryTradeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TradeStore for InMemoryTradeStore {
    fn create(
        &mut self,
        request: &PositionRequest,
        leverage: Leverage,
        now: TimestampNs,
    ) -> Result<Trade> {
        let id = TradeId::from(self.trades.len() as u64 + 1);
        let trade = Trade {
            id,
            instrument: request.instrument().clone(),
            side: request.side(),
            size: request.size(),
            entry_price: request.entry_price(),
            leverage,
            status: TradeStatus::Pending,
            created_at: now,
            updated_at: None,
        };
        trace!("create trade: {trade:?}");
        self.trades.push(trade.clone());

        Ok(trade)
    }

    fn trade(&self, id: TradeId) -> Result<&Trade> {
        self.trades
            .iter()
            .find(|trade| trade.id == id)
            .ok_or(Error::TradeNotFound)
    }

    fn recent_trades(&self, limit: usize) -> Vec<&Trade> {
        self.trades.iter().rev().take(limit).collect()
    }

    fn set_status(&mut self, id: TradeId, status: TradeStatus, now: TimestampNs) -> Result<()> {
        let trade = self
            .trades
            .iter_mut()
            .find(|trade| trade.id == id)
            .ok_or(Error::TradeNotFound)?;
        trace!("set_status: id {id}, {:?} -> {status:?}", trade.status);
        trade.status = status;
        trade.updated_at = Some(now);

        Ok(())
    }
}
