//! Executed trade record
//!
//! A trade pairs a taker order on one outcome with a resting maker order
//! on the opposing outcome of the same contest. Prices are recorded on
//! the taker's team: the maker's resting price sets the level, mirrored
//! across the contest.

use crate::ids::{MatchId, OrderId, TeamId, TradeId, UserId};
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An atomic exchange of shares between two users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    pub match_id: MatchId,
    /// The taker's team; `price` is quoted on this outcome.
    pub team_id: TeamId,

    pub buyer_user_id: UserId,
    pub seller_user_id: UserId,

    pub maker_order_id: OrderId,
    pub taker_order_id: OrderId,

    /// Side of the taker order that triggered this trade.
    pub taker_side: Side,
    pub price: Price,
    pub quantity: Quantity,

    /// Unix nanos.
    pub executed_at: i64,
}

impl Trade {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        match_id: MatchId,
        team_id: TeamId,
        buyer_user_id: UserId,
        seller_user_id: UserId,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        taker_side: Side,
        price: Price,
        quantity: Quantity,
        executed_at: i64,
    ) -> Self {
        Self {
            trade_id: TradeId::new(),
            match_id,
            team_id,
            buyer_user_id,
            seller_user_id,
            maker_order_id,
            taker_order_id,
            taker_side,
            price,
            quantity,
            executed_at,
        }
    }

    /// Cash value of the trade (price × quantity).
    pub fn trade_value(&self) -> Decimal {
        self.price.as_decimal() * self.quantity.as_decimal()
    }
}
