//! Settlement seam
//!
//! Money and share ledger mutation live outside this service. The engine
//! hands each executed trade to a [`Settlement`] implementation once both
//! books are consistent and the locks are released; the default
//! implementation only records the execution.

use tracing::info;
use types::trade::Trade;

/// Hook invoked once per executed trade.
pub trait Settlement: Send + Sync {
    fn on_trade(&self, trade: &Trade);
}

/// Default settlement: structured execution log, no ledger mutation.
pub struct LogSettlement;

impl Settlement for LogSettlement {
    fn on_trade(&self, trade: &Trade) {
        info!(
            trade_id = %trade.trade_id,
            match_id = %trade.match_id,
            team_id = %trade.team_id,
            buyer = %trade.buyer_user_id,
            seller = %trade.seller_user_id,
            price = %trade.price,
            quantity = %trade.quantity,
            value = %trade.trade_value(),
            "trade executed"
        );
    }
}
