//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point
//! rounding drift between runs). Prices on this exchange are implied
//! probabilities, so `Price` admits only the open interval (0, 1) and the
//! probability mirror `1 - p` is total.
//!
//! Both types serialize as JSON strings to prevent number precision loss;
//! deserialization accepts either a JSON number or a string.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::de;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Price of one share of an outcome, as an implied probability.
///
/// Always strictly between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Create a new Price.
    ///
    /// # Panics
    /// Panics unless `0 < value < 1`.
    pub fn new(value: Decimal) -> Self {
        assert!(
            value > Decimal::ZERO && value < Decimal::ONE,
            "Price must be strictly between 0 and 1"
        );
        Self(value)
    }

    /// Try to create a Price, returning None if outside (0, 1).
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO && value < Decimal::ONE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create from string.
    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        let decimal = Decimal::from_str(s)?;
        Ok(Self::new(decimal))
    }

    /// Get the inner decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// The probability mirror `1 - p`.
    ///
    /// Owning a share of one outcome at `p` is economically equivalent to
    /// having sold a share of the opposing outcome at `1 - p`. Total on
    /// the (0, 1) domain, so the result is always a valid Price.
    pub fn mirror(&self) -> Self {
        Self(Decimal::ONE - self.0)
    }
}

impl Add for Price {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Self::Output {
        self.0 + rhs.0
    }
}

// Serialized as string to preserve precision on the wire
impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let decimal = deserializer.deserialize_any(DecimalVisitor)?;
        Price::try_new(decimal)
            .ok_or_else(|| de::Error::custom("price must be strictly between 0 and 1"))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity of shares, with fixed-point decimal representation.
///
/// Submitted quantities are strictly positive; zero is representable only
/// as the transient result of subtraction inside the matcher (a depleted
/// maker is popped before the book is released).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a new Quantity.
    ///
    /// # Panics
    /// Panics if the quantity is zero or negative.
    pub fn new(value: Decimal) -> Self {
        assert!(value > Decimal::ZERO, "Quantity must be positive");
        Self(value)
    }

    /// Try to create a Quantity, returning None if not strictly positive.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Zero quantity, for fill accounting.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create from integer.
    pub fn from_u64(value: u64) -> Self {
        Self::new(Decimal::from(value))
    }

    /// Create from string.
    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        let decimal = Decimal::from_str(s)?;
        Ok(Self::new(decimal))
    }

    /// Get the inner decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check if quantity is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert!(self.0 >= rhs.0, "Quantity subtraction would go negative");
        Self(self.0 - rhs.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let decimal = deserializer.deserialize_any(DecimalVisitor)?;
        Quantity::try_new(decimal).ok_or_else(|| de::Error::custom("quantity must be positive"))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts a decimal encoded as either a JSON number or a string.
struct DecimalVisitor;

impl de::Visitor<'_> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal number or a decimal string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Decimal::from_str(v).map_err(E::custom)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Decimal::from_f64(v).ok_or_else(|| E::custom("not a finite decimal"))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(v))
    }
}
