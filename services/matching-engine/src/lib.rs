//! Matching Engine Service
//!
//! Two-sided matching engine for sports-betting contests. Each contest has
//! exactly two outcomes whose implied probabilities sum to one, so every
//! order book is coupled to its opposing book through the price mirror
//! `p' = 1 - p`: a bid on one outcome matches resting asks on the other.
//!
//! **Key invariants:**
//! - Bids heap root carries the maximum price, asks heap root the minimum
//! - A resting order never has zero quantity
//! - Submitted quantity = sum of fills + resting residual
//! - Both book locks of a contest are taken in lexicographic team order

pub mod book;
pub mod config;
pub mod engine;
pub mod heap;
pub mod publisher;
pub mod registry;
pub mod render;
pub mod server;
pub mod settlement;

pub use engine::{MatchingEngine, Placement};
pub use publisher::EventPublisher;
pub use registry::MatchRegistry;
