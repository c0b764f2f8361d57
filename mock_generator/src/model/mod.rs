//! Per-domain record generators.
//!
//! This module groups the synchronous generation logic, one submodule per domain:
//! - `stocks` — `StockQuote` for every ticker.
//! - `weather` — `WeatherReading` for every city.
//! - `news` — five `NewsItem`s drawn from the headline pool.
//! - `crypto` — `CryptoQuote` for every asset.
//!
//! Generation takes the random source and the current time as arguments and never
//! sleeps; latency is layered on top by [`crate::fetch`].

use chrono::{DateTime, Utc};
use mock_common::Domain;
use rand::Rng;
use serde::Serialize;

pub mod crypto;
pub mod news;
pub mod stocks;
pub mod weather;

pub use crypto::Crypto;
pub use news::News;
pub use stocks::Stocks;
pub use weather::Weather;

/// A kind of mock data that can be generated in one batch.
pub trait MockDomain: Send + Sync + 'static {
    /// Record type produced for this domain.
    type Record: Clone + Send + Sync + Serialize + 'static;

    /// Which domain this is.
    const KIND: Domain;

    /// Generate a full batch of `KIND.cardinality()` records stamped with `now`.
    fn generate<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<Self::Record>;
}

/// Round to two decimals, the precision every price and percentage is reported at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Uniform pick from a fixed pool.
pub(crate) fn pick<T: Copy, R: Rng>(rng: &mut R, pool: &[T]) -> T {
    pool[rng.random_range(0..pool.len())]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(-4.996), -5.0);
        assert_eq!(round2(1050.0), 1050.0);
    }
}
