//! Diagnostic order-book renderer
//!
//! Dumps both books of a contest in heap-layout order, deliberately
//! exposing the internal array rather than price order. Debug logging
//! only; market data distribution must not depend on this format.

use std::fmt::Write;

use types::ids::{MatchId, TeamId};

use crate::book::{BookSides, RestingOrder};
use crate::heap::Heap;

pub fn render_books(
    match_id: &MatchId,
    team: &TeamId,
    sides: &BookSides,
    opposing_team: &TeamId,
    opposing_sides: &BookSides,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== match {match_id} order books ===");
    render_team(&mut out, team, sides);
    render_team(&mut out, opposing_team, opposing_sides);
    out
}

fn render_team(out: &mut String, team: &TeamId, sides: &BookSides) {
    let _ = writeln!(out, "team {team}:");
    let _ = writeln!(out, "  bids:");
    render_heap(out, &sides.bids);
    let _ = writeln!(out, "  asks:");
    render_heap(out, &sides.asks);
}

fn render_heap(out: &mut String, heap: &Heap<RestingOrder>) {
    if heap.is_empty() {
        let _ = writeln!(out, "    (empty)");
        return;
    }
    for resting in heap.iter() {
        let _ = writeln!(
            out,
            "    price {} qty {} user {}",
            resting.order.price, resting.order.quantity, resting.order.user_id
        );
    }
}
