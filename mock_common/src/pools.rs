//! Closed value pools the generators draw from.
//!
//! Every enum here is a fixed finite set with an `ALL` table so generators can
//! pick a variant by index. Display and `FromStr` go through strum; serde uses
//! the same human-readable names.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::MockDataError;
use crate::defaults::{CRYPTO_DELAY_MS, NEWS_DELAY_MS, STOCKS_DELAY_MS, WEATHER_DELAY_MS};

/// Tickers quoted by the stock generator.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum StockSymbol {
    AAPL,
    MSFT,
    GOOGL,
    AMZN,
    META,
    TSLA,
}

impl StockSymbol {
    /// Every ticker, in generation order.
    pub const ALL: [StockSymbol; 6] = [
        StockSymbol::AAPL,
        StockSymbol::MSFT,
        StockSymbol::GOOGL,
        StockSymbol::AMZN,
        StockSymbol::META,
        StockSymbol::TSLA,
    ];
}

/// Locations reported by the weather generator.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum City {
    #[serde(rename = "New York")]
    #[strum(serialize = "New York")]
    NewYork,
    London,
    Tokyo,
    Sydney,
    Berlin,
    Paris,
}

impl City {
    /// Every location, in generation order.
    pub const ALL: [City; 6] = [
        City::NewYork,
        City::London,
        City::Tokyo,
        City::Sydney,
        City::Berlin,
        City::Paris,
    ];
}

/// Sky conditions a weather reading can carry.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    #[serde(rename = "Partly Cloudy")]
    #[strum(serialize = "Partly Cloudy")]
    PartlyCloudy,
}

impl Condition {
    /// Every condition.
    pub const ALL: [Condition; 5] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Snowy,
        Condition::PartlyCloudy,
    ];
}

/// Outlets a news item can be attributed to.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum NewsSource {
    TechCrunch,
    Bloomberg,
    Reuters,
    CNBC,
    #[serde(rename = "Financial Times")]
    #[strum(serialize = "Financial Times")]
    FinancialTimes,
}

impl NewsSource {
    /// Every source.
    pub const ALL: [NewsSource; 5] = [
        NewsSource::TechCrunch,
        NewsSource::Bloomberg,
        NewsSource::Reuters,
        NewsSource::CNBC,
        NewsSource::FinancialTimes,
    ];
}

/// Crypto assets, each a fixed symbol/name pair.
///
/// Display and serde use the symbol; [`CryptoAsset::name`] gives the full name.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum CryptoAsset {
    BTC,
    ETH,
    SOL,
    DOT,
    ADA,
    XRP,
}

impl CryptoAsset {
    /// Every asset, in generation order.
    pub const ALL: [CryptoAsset; 6] = [
        CryptoAsset::BTC,
        CryptoAsset::ETH,
        CryptoAsset::SOL,
        CryptoAsset::DOT,
        CryptoAsset::ADA,
        CryptoAsset::XRP,
    ];

    /// Ticker symbol, e.g. `BTC`.
    pub fn symbol(self) -> &'static str {
        match self {
            CryptoAsset::BTC => "BTC",
            CryptoAsset::ETH => "ETH",
            CryptoAsset::SOL => "SOL",
            CryptoAsset::DOT => "DOT",
            CryptoAsset::ADA => "ADA",
            CryptoAsset::XRP => "XRP",
        }
    }

    /// Full asset name paired with the symbol, e.g. `Bitcoin`.
    pub fn name(self) -> &'static str {
        match self {
            CryptoAsset::BTC => "Bitcoin",
            CryptoAsset::ETH => "Ethereum",
            CryptoAsset::SOL => "Solana",
            CryptoAsset::DOT => "Polkadot",
            CryptoAsset::ADA => "Cardano",
            CryptoAsset::XRP => "Ripple",
        }
    }
}

/// Headlines a news item title is drawn from.
pub const NEWS_TITLES: [&str; 7] = [
    "Market reaches all-time high amid tech rally",
    "New breakthrough in quantum computing announced",
    "Global supply chain issues continue to affect tech industry",
    "Startup raises $200M in latest funding round",
    "AI regulation framework proposed by international coalition",
    "Cybersecurity concerns rise as attacks increase by 40%",
    "New renewable energy project launches in Europe",
];

/// Placeholder body shared by every news item.
pub const NEWS_SUMMARY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Nulla facilisi. Sed euismod libero at magna dapibus, vel ultrices nunc sagittis.";

/// The four kinds of generated record.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Domain {
    Stocks,
    Weather,
    News,
    Crypto,
}

impl Domain {
    /// Every domain.
    pub const ALL: [Domain; 4] = [Domain::Stocks, Domain::Weather, Domain::News, Domain::Crypto];

    /// Base delay used when the caller does not pass one.
    pub fn default_delay_ms(self) -> u64 {
        match self {
            Domain::Stocks => STOCKS_DELAY_MS,
            Domain::Weather => WEATHER_DELAY_MS,
            Domain::News => NEWS_DELAY_MS,
            Domain::Crypto => CRYPTO_DELAY_MS,
        }
    }

    /// Parse a comma-separated list such as `stocks,news`.
    ///
    /// Names are case-insensitive and surrounding whitespace is ignored. Repeats
    /// keep their first position. An empty list selects every domain.
    pub fn parse_list(raw: &str) -> Result<Vec<Domain>, MockDataError> {
        let mut domains = Vec::new();
        for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            let domain = name
                .parse::<Domain>()
                .map_err(|_| MockDataError::UnknownDomain(name.to_string()))?;
            if !domains.contains(&domain) {
                domains.push(domain);
            }
        }
        if domains.is_empty() {
            domains.extend(Domain::ALL);
        }
        Ok(domains)
    }

    /// Number of records a single generation call returns.
    pub fn cardinality(self) -> usize {
        match self {
            Domain::Stocks => StockSymbol::ALL.len(),
            Domain::Weather => City::ALL.len(),
            Domain::News => 5,
            Domain::Crypto => CryptoAsset::ALL.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn spaced_names_round_trip_through_strum() {
        assert_eq!(City::NewYork.to_string(), "New York");
        assert_eq!("new york".parse::<City>().unwrap(), City::NewYork);
        assert_eq!(
            "Partly Cloudy".parse::<Condition>().unwrap(),
            Condition::PartlyCloudy
        );
        assert_eq!(NewsSource::FinancialTimes.to_string(), "Financial Times");
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&City::NewYork).unwrap();
        assert_eq!(json, "\"New York\"");
        let json = serde_json::to_string(&Domain::Crypto).unwrap();
        assert_eq!(json, "\"crypto\"");
    }

    #[test]
    fn all_tables_have_no_duplicates() {
        assert_eq!(StockSymbol::ALL.iter().collect::<HashSet<_>>().len(), 6);
        assert_eq!(City::ALL.iter().collect::<HashSet<_>>().len(), 6);
        assert_eq!(Condition::ALL.iter().collect::<HashSet<_>>().len(), 5);
        assert_eq!(NewsSource::ALL.iter().collect::<HashSet<_>>().len(), 5);
        assert_eq!(CryptoAsset::ALL.iter().collect::<HashSet<_>>().len(), 6);
    }

    #[test]
    fn crypto_pairs_are_fixed() {
        assert_eq!(CryptoAsset::BTC.name(), "Bitcoin");
        assert_eq!(CryptoAsset::XRP.symbol(), "XRP");
        for asset in CryptoAsset::ALL {
            assert_eq!(asset.symbol(), asset.to_string());
        }
    }

    #[test]
    fn domain_defaults() {
        let cards: Vec<usize> = Domain::ALL.iter().map(|d| d.cardinality()).collect();
        assert_eq!(cards, vec![6, 6, 5, 6]);
        assert_eq!(Domain::Weather.default_delay_ms(), 1500);
        assert_eq!(Domain::News.default_delay_ms(), 3000);
        assert!("unknown".parse::<Domain>().is_err());
    }

    #[test]
    fn domain_list_keeps_order_and_drops_repeats() {
        let domains = Domain::parse_list(" News,stocks ,NEWS").unwrap();
        assert_eq!(domains, vec![Domain::News, Domain::Stocks]);
        assert_eq!(Domain::parse_list("").unwrap(), Domain::ALL.to_vec());
    }

    #[test]
    fn domain_list_reports_unknown_name() {
        let err = Domain::parse_list("stocks,forex").unwrap_err();
        assert!(matches!(err, MockDataError::UnknownDomain(ref name) if name == "forex"));
        assert_eq!(err.to_string(), "Unknown data domain: forex");
    }
}
