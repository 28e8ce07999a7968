//! Daily market statistics for a single coin.
//!
//! Turns raw `[timestamp, value]` price and volume samples into one
//! datapoint per calendar day and derives the longest downward price trend,
//! the best day pair to buy and sell, and the day with the highest trading
//! volume.

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod timestamp;

pub use error::{KachingError, Result};
