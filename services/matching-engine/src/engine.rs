//! Matching engine core
//!
//! `place_order` matches an incoming order against the *opposing* book of
//! its contest under the price mirror: a bid on team T at limit `p` takes
//! resting asks on team T' priced at or below `1 - p`, and each fill
//! executes at the mirror of the maker's resting price. The taker's limit
//! constrains; the maker's price sets the level. Residual quantity rests
//! in the taker's own book.

use std::sync::Arc;

use parking_lot::MutexGuard;
use tracing::{debug, error, info};
use types::errors::RegistryError;
use types::numeric::Quantity;
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::{BookSides, RestingOrder};
use crate::publisher::EventPublisher;
use crate::registry::{BookPair, MatchRegistry};
use crate::render;
use crate::settlement::{LogSettlement, Settlement};

/// Result of submitting an order.
#[derive(Debug)]
pub enum Placement {
    /// No compatible liquidity; the whole order rests.
    Rested { residual: Quantity },
    /// Some fills, remainder rests.
    PartiallyFilled {
        trades: Vec<Trade>,
        residual: Quantity,
    },
    /// Completely consumed by resting liquidity.
    Filled { trades: Vec<Trade> },
}

impl Placement {
    pub fn trades(&self) -> &[Trade] {
        match self {
            Placement::Rested { .. } => &[],
            Placement::PartiallyFilled { trades, .. } | Placement::Filled { trades } => trades,
        }
    }

    pub fn residual(&self) -> Option<Quantity> {
        match self {
            Placement::Rested { residual } | Placement::PartiallyFilled { residual, .. } => {
                Some(*residual)
            }
            Placement::Filled { .. } => None,
        }
    }
}

/// Coordinator for matching, settlement hand-off, and event publication.
pub struct MatchingEngine {
    registry: Arc<MatchRegistry>,
    publisher: Arc<EventPublisher>,
    settlement: Arc<dyn Settlement>,
}

impl MatchingEngine {
    pub fn new(registry: Arc<MatchRegistry>, publisher: Arc<EventPublisher>) -> Self {
        Self::with_settlement(registry, publisher, Arc::new(LogSettlement))
    }

    pub fn with_settlement(
        registry: Arc<MatchRegistry>,
        publisher: Arc<EventPublisher>,
        settlement: Arc<dyn Settlement>,
    ) -> Self {
        Self {
            registry,
            publisher,
            settlement,
        }
    }

    pub fn registry(&self) -> &Arc<MatchRegistry> {
        &self.registry
    }

    /// Submit an order: match, rest the residual, settle fills, publish.
    ///
    /// Matching happens synchronously under the two book locks; the
    /// settlement hook and the broker send run after both are released.
    /// Publish failure is logged and does not roll the matching back.
    pub async fn place_order(&self, order: Order) -> Result<Placement, RegistryError> {
        let (placement, order) = self.match_order(order)?;

        for trade in placement.trades() {
            self.settlement.on_trade(trade);
        }

        if let Err(err) = self.publisher.publish(&order).await {
            error!(
                error = %err,
                order_id = %order.id,
                "event publication failed; matching result preserved"
            );
        }

        Ok(placement)
    }

    fn match_order(&self, mut order: Order) -> Result<(Placement, Order), RegistryError> {
        let pair = self.registry.book_pair(&order.match_id, &order.team_id)?;
        let (mut own, mut opposing) = lock_ordered(&pair);

        let executed_at = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let mut trades = Vec::new();
        let mut remaining = order.quantity;

        match order.side {
            Side::Bid => {
                Self::match_against_opposing_asks(
                    &order,
                    &mut opposing,
                    &mut remaining,
                    &mut trades,
                    executed_at,
                );
            }
            Side::Ask => {
                Self::match_against_opposing_bids(
                    &order,
                    &mut opposing,
                    &mut remaining,
                    &mut trades,
                    executed_at,
                );
            }
        }

        let placement = if remaining.is_zero() {
            info!(order_id = %order.id, fills = trades.len(), "order fully filled");
            Placement::Filled { trades }
        } else {
            order.quantity = remaining;
            let resting = RestingOrder::new(order.clone(), pair.book.next_arrival());
            match order.side {
                Side::Bid => own.bids.push(resting),
                Side::Ask => own.asks.push(resting),
            }
            if trades.is_empty() {
                debug!(order_id = %order.id, quantity = %remaining, "order rested");
                Placement::Rested { residual: remaining }
            } else {
                info!(
                    order_id = %order.id,
                    fills = trades.len(),
                    residual = %remaining,
                    "order partially filled; residual rested"
                );
                Placement::PartiallyFilled {
                    trades,
                    residual: remaining,
                }
            }
        };

        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(
                "{}",
                render::render_books(
                    &order.match_id,
                    &pair.team,
                    &own,
                    &pair.opposing_team,
                    &opposing,
                )
            );
        }

        Ok((placement, order))
    }

    /// Bid on T takes resting asks on T' priced at or below `1 - limit`.
    fn match_against_opposing_asks(
        order: &Order,
        opposing: &mut BookSides,
        remaining: &mut Quantity,
        trades: &mut Vec<Trade>,
        executed_at: i64,
    ) {
        let limit_mirror = order.price.mirror();
        while !remaining.is_zero() {
            let Some(best) = opposing.asks.peek_mut() else {
                break;
            };
            if best.order.price > limit_mirror {
                break;
            }

            let fill = (*remaining).min(best.order.quantity);
            assert!(!fill.is_zero(), "matched a zero-quantity fill");
            let trade_price = best.order.price.mirror();

            trades.push(Trade::new(
                order.match_id.clone(),
                order.team_id.clone(),
                order.user_id.clone(),
                best.order.user_id.clone(),
                best.order.id.clone(),
                order.id.clone(),
                Side::Bid,
                trade_price,
                fill,
                executed_at,
            ));

            best.order.quantity = best.order.quantity - fill;
            *remaining = *remaining - fill;

            let depleted = best.order.quantity.is_zero();
            if depleted {
                opposing.asks.pop();
            }
        }
    }

    /// Ask on T takes resting bids on T' priced at or above `1 - limit`.
    fn match_against_opposing_bids(
        order: &Order,
        opposing: &mut BookSides,
        remaining: &mut Quantity,
        trades: &mut Vec<Trade>,
        executed_at: i64,
    ) {
        let limit_mirror = order.price.mirror();
        while !remaining.is_zero() {
            let Some(best) = opposing.bids.peek_mut() else {
                break;
            };
            if best.order.price < limit_mirror {
                break;
            }

            let fill = (*remaining).min(best.order.quantity);
            assert!(!fill.is_zero(), "matched a zero-quantity fill");
            let trade_price = best.order.price.mirror();

            trades.push(Trade::new(
                order.match_id.clone(),
                order.team_id.clone(),
                best.order.user_id.clone(),
                order.user_id.clone(),
                best.order.id.clone(),
                order.id.clone(),
                Side::Ask,
                trade_price,
                fill,
                executed_at,
            ));

            best.order.quantity = best.order.quantity - fill;
            *remaining = *remaining - fill;

            let depleted = best.order.quantity.is_zero();
            if depleted {
                opposing.bids.pop();
            }
        }
    }
}

/// Take both book locks of a contest in lexicographic team order.
///
/// Concurrent submissions on opposite outcomes therefore always contend
/// in the same order, which rules out the AB/BA deadlock. Returns the
/// guards as `(own, opposing)` regardless of acquisition order.
fn lock_ordered(pair: &BookPair) -> (MutexGuard<'_, BookSides>, MutexGuard<'_, BookSides>) {
    if pair.team <= pair.opposing_team {
        let own = pair.book.lock();
        let opposing = pair.opposing_book.lock();
        (own, opposing)
    } else {
        let opposing = pair.opposing_book.lock();
        let own = pair.book.lock();
        (own, opposing)
    }
}
