//! Crypto quote generation.

use chrono::{DateTime, Utc};
use mock_common::pools::CryptoAsset;
use mock_common::{CryptoQuote, Domain};
use rand::Rng;

use super::{MockDomain, round2};

/// Marker for the crypto domain.
pub struct Crypto;

impl MockDomain for Crypto {
    type Record = CryptoQuote;
    const KIND: Domain = Domain::Crypto;

    fn generate<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<CryptoQuote> {
        CryptoAsset::ALL
            .iter()
            .map(|&asset| {
                let (low, high) = price_band(asset);
                CryptoQuote {
                    name: asset.name().to_string(),
                    symbol: asset,
                    price: round2(rng.random_range(low..=high)),
                    change24h_pct: round2(rng.random_range(-5.0..=5.0)),
                    volume24h: format!("{:.2}", rng.random_range(1.0..11.0)),
                    market_cap: format!("{:.2}", rng.random_range(100.0..600.0)),
                    updated_at: now,
                }
            })
            .collect()
    }
}

/// Closed price range for an asset. BTC sits an order of magnitude above the rest.
pub fn price_band(asset: CryptoAsset) -> (f64, f64) {
    match asset {
        CryptoAsset::BTC => (40_000.0, 50_000.0),
        _ => (1_000.0, 6_000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_rng::ZeroRng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn prices_follow_asset_band() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..200 {
            let quotes = Crypto::generate(&mut rng, Utc::now());
            assert_eq!(quotes.len(), 6);
            for quote in quotes {
                let (low, high) = price_band(quote.symbol);
                assert!(quote.price >= low && quote.price <= high, "{quote:?}");
                assert!((-5.0..=5.0).contains(&quote.change24h_pct));
                assert_eq!(quote.name, quote.symbol.name());
            }
        }
    }

    #[test]
    fn zero_source_hits_lower_bounds() {
        let quotes = Crypto::generate(&mut ZeroRng, Utc::now());
        assert_eq!(quotes[0].symbol, CryptoAsset::BTC);
        assert_eq!(quotes[0].price, 40_000.0);
        assert_eq!(quotes[1].price, 1_000.0);
        assert_eq!(quotes[1].volume24h, "1.00");
        assert_eq!(quotes[1].market_cap, "100.00");
    }
}
