//!
//! Common types and utilities shared by the mock data generator and its demo client.
//!
//! This crate aggregates:
//! - `error` — unified error type `MockDataError` used across the workspace.
//! - `result` — handy `Result<T, MockDataError>` alias.
//! - `pools` — closed sets of tickers, cities, conditions, sources and assets.
//! - `records` — the four generated record types.
//! - `delay` — base delay plus jitter sampling.
//! - `timestamp` — serde adapter for record timestamps.
//! - `defaults` — default delays and windows.
#![warn(missing_docs)]
pub mod defaults;
pub mod delay;
pub mod error;
pub mod pools;
pub mod records;
pub mod result;
pub mod timestamp;

pub use delay::DelayWindow;
pub use error::MockDataError;
pub use pools::Domain;
pub use records::{CryptoQuote, JsonRecord, NewsItem, StockQuote, WeatherReading};
pub use result::Result;
