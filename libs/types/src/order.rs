//! Order submission types

use crate::ids::{MatchId, OrderId, TeamId, UserId};
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy shares of the outcome at up to the stated price.
    Bid,
    /// Sell shares of the outcome at no less than the stated price.
    Ask,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "bid"),
            Side::Ask => write!(f, "ask"),
        }
    }
}

/// A limit order on one outcome of a contest.
///
/// Immutable at submission apart from `quantity`, which is decremented
/// on partial fills. The wire schema is this struct's snake_case field
/// set; unknown fields in submissions are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub match_id: MatchId,
    pub team_id: TeamId,
    pub user_id: UserId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl Order {
    /// Notional value of the order (price × quantity).
    pub fn notional(&self) -> Decimal {
        self.price.as_decimal() * self.quantity.as_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order {
            id: OrderId::new("o1"),
            match_id: MatchId::new("m1"),
            team_id: TeamId::new("CSK"),
            user_id: UserId::new("u1"),
            side: Side::Bid,
            price: Price::from_str("0.6").unwrap(),
            quantity: Quantity::from_u64(10),
        }
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Bid.opposite(), Side::Ask);
        assert_eq!(Side::Ask.opposite(), Side::Bid);
    }

    #[test]
    fn test_side_wire_format() {
        assert_eq!(serde_json::to_string(&Side::Bid).unwrap(), "\"bid\"");
        assert_eq!(serde_json::to_string(&Side::Ask).unwrap(), "\"ask\"");
        assert!(serde_json::from_str::<Side>("\"hold\"").is_err());
    }

    #[test]
    fn test_order_round_trip() {
        let order = sample_order();
        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }

    #[test]
    fn test_order_decodes_wire_schema() {
        let body = r#"{
            "id": "o1",
            "match_id": "m1",
            "team_id": "CSK",
            "user_id": "u1",
            "side": "bid",
            "price": 0.6,
            "quantity": 10
        }"#;
        let order: Order = serde_json::from_str(body).unwrap();
        assert_eq!(order, sample_order());
    }

    #[test]
    fn test_order_ignores_unknown_fields() {
        let body = r#"{
            "id": "o1",
            "match_id": "m1",
            "team_id": "CSK",
            "user_id": "u1",
            "side": "bid",
            "price": "0.6",
            "quantity": "10",
            "client_tag": "ignored"
        }"#;
        assert!(serde_json::from_str::<Order>(body).is_ok());
    }

    #[test]
    fn test_order_rejects_bad_price() {
        let body = r#"{
            "id": "o1",
            "match_id": "m1",
            "team_id": "CSK",
            "user_id": "u1",
            "side": "bid",
            "price": 1.6,
            "quantity": 10
        }"#;
        assert!(serde_json::from_str::<Order>(body).is_err());
    }

    #[test]
    fn test_order_notional() {
        let order = sample_order();
        assert_eq!(order.notional(), Decimal::from_str_exact("6.0").unwrap());
    }
}
