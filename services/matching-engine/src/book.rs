//! Per-outcome order book
//!
//! A pair of price-ordered heaps behind a single mutex: bids descending,
//! asks ascending. Equal-priced orders are FIFO by per-book arrival
//! sequence, so matching is deterministic for a given submission order.

use std::cmp::Ordering;
use std::sync::atomic::{self, AtomicU64};

use parking_lot::{Mutex, MutexGuard};
use types::numeric::Price;
use types::order::Order;

use crate::heap::Heap;

/// An order resting in a book, tagged with its arrival sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RestingOrder {
    pub order: Order,
    pub arrival: u64,
}

impl RestingOrder {
    pub fn new(order: Order, arrival: u64) -> Self {
        Self { order, arrival }
    }

    pub fn price(&self) -> Price {
        self.order.price
    }
}

/// Bid priority: higher price first, then earlier arrival.
pub(crate) fn bid_priority(a: &RestingOrder, b: &RestingOrder) -> bool {
    match a.order.price.cmp(&b.order.price) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => a.arrival < b.arrival,
    }
}

/// Ask priority: lower price first, then earlier arrival.
pub(crate) fn ask_priority(a: &RestingOrder, b: &RestingOrder) -> bool {
    match a.order.price.cmp(&b.order.price) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a.arrival < b.arrival,
    }
}

/// The two heaps of one book. Always accessed through [`OrderBook::lock`].
#[derive(Debug)]
pub struct BookSides {
    pub bids: Heap<RestingOrder>,
    pub asks: Heap<RestingOrder>,
}

impl BookSides {
    fn new() -> Self {
        Self {
            bids: Heap::new(bid_priority),
            asks: Heap::new(ask_priority),
        }
    }

    pub fn best_bid_price(&self) -> Option<Price> {
        self.bids.peek().map(RestingOrder::price)
    }

    pub fn best_ask_price(&self) -> Option<Price> {
        self.asks.peek().map(RestingOrder::price)
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

/// Order book for a single outcome of a contest.
///
/// The mutex guards both heaps together; the arrival counter lives
/// outside it and only ever moves forward.
#[derive(Debug)]
pub struct OrderBook {
    sides: Mutex<BookSides>,
    arrivals: AtomicU64,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            sides: Mutex::new(BookSides::new()),
            arrivals: AtomicU64::new(0),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, BookSides> {
        self.sides.lock()
    }

    /// Next arrival sequence for FIFO tie-breaking.
    pub fn next_arrival(&self) -> u64 {
        self.arrivals.fetch_add(1, atomic::Ordering::Relaxed)
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
