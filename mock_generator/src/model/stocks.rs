//! Stock quote generation.
//!
//! Every batch holds one `StockQuote` per ticker in `StockSymbol::ALL`. Prices and
//! changes are drawn independently per call; there is no random walk between
//! batches, so consecutive calls are unrelated snapshots.

use chrono::{DateTime, Utc};
use mock_common::pools::StockSymbol;
use mock_common::{Domain, StockQuote};
use rand::Rng;

use super::{MockDomain, round2};

/// Marker for the stock quote domain.
pub struct Stocks;

impl MockDomain for Stocks {
    type Record = StockQuote;
    const KIND: Domain = Domain::Stocks;

    fn generate<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<StockQuote> {
        StockSymbol::ALL
            .iter()
            .map(|&symbol| generate_quote(symbol, rng, now))
            .collect()
    }
}

/// Generate a quote for `symbol`.
///
/// - price: uniform in `[50, 1050]`.
/// - change: uniform in `[-5, 5]` percent.
/// - volume: uniform in `[1_000_000, 11_000_000)`.
/// - market cap: price scaled by a factor in `[10, 110)`, formatted with two decimals.
pub fn generate_quote<R: Rng>(symbol: StockSymbol, rng: &mut R, now: DateTime<Utc>) -> StockQuote {
    let price = round2(rng.random_range(50.0..=1050.0));
    let percent_change = round2(rng.random_range(-5.0..=5.0));
    let volume = rng.random_range(1_000_000..11_000_000);
    let market_cap = format!("{:.2}", price * rng.random_range(10.0..110.0));

    StockQuote {
        symbol,
        price,
        percent_change,
        volume,
        market_cap,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_rng::ZeroRng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn one_quote_per_ticker_in_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let quotes = Stocks::generate(&mut rng, Utc::now());
        let symbols: Vec<StockSymbol> = quotes.iter().map(|q| q.symbol).collect();
        assert_eq!(symbols, StockSymbol::ALL.to_vec());
    }

    #[test]
    fn fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            for quote in Stocks::generate(&mut rng, Utc::now()) {
                assert!((50.0..=1050.0).contains(&quote.price), "{quote:?}");
                assert!((-5.0..=5.0).contains(&quote.percent_change), "{quote:?}");
                assert!((1_000_000..11_000_000).contains(&quote.volume));
                let cap: f64 = quote.market_cap.parse().unwrap();
                assert!(cap >= quote.price * 10.0 - 0.01 && cap < quote.price * 110.0 + 0.01);
            }
        }
    }

    #[test]
    fn zero_source_hits_lower_bounds() {
        let now = Utc::now();
        let quote = generate_quote(StockSymbol::TSLA, &mut ZeroRng, now);
        assert_eq!(quote.price, 50.0);
        assert_eq!(quote.percent_change, -5.0);
        assert_eq!(quote.volume, 1_000_000);
        assert_eq!(quote.market_cap, "500.00");
        assert_eq!(quote.updated_at, now);
    }
}
