//! Record types produced by the generators.
//!
//! Each record is a plain serializable struct. Field names are emitted in
//! camelCase and timestamps as `yyyy-MM-dd HH:mm:ss` (see [`crate::timestamp`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::MockDataError;
use crate::pools::{City, Condition, CryptoAsset, NewsSource, StockSymbol};

/// Quote for a single stock ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    /// Ticker the quote belongs to.
    pub symbol: StockSymbol,
    /// Last price, in `[50, 1050]`, two decimals.
    pub price: f64,
    /// Daily change in percent, in `[-5, 5]`, two decimals.
    pub percent_change: f64,
    /// Traded shares.
    pub volume: u64,
    /// Market capitalisation, preformatted with two decimals.
    pub market_cap: String,
    /// Generation time.
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Current conditions for a single city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    /// City the reading is for.
    pub location: City,
    /// Temperature in degrees Celsius, in `[5, 40]`.
    pub temperature_c: i32,
    /// Sky condition.
    pub condition: Condition,
    /// Relative humidity in percent, in `[30, 90]`.
    pub humidity_pct: u8,
    /// Wind speed in km/h, in `[5, 35]`.
    pub wind_kph: u8,
    /// Generation time.
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// A headline with its source and publication time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Position-derived identifier, `news-1` through `news-5`.
    pub id: String,
    /// Headline text.
    pub title: String,
    /// Body placeholder.
    pub summary: String,
    /// Outlet that published the item.
    pub source: NewsSource,
    /// Publication time, one to twelve hours before generation.
    #[serde(with = "crate::timestamp")]
    pub published_at: DateTime<Utc>,
}

/// Quote for a single crypto asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoQuote {
    /// Full asset name, always the pair of `symbol`.
    pub name: String,
    /// Asset symbol.
    pub symbol: CryptoAsset,
    /// Last price. BTC trades in `[40000, 50000]`, everything else in `[1000, 6000]`.
    pub price: f64,
    /// 24h change in percent, in `[-5, 5]`.
    pub change24h_pct: f64,
    /// 24h volume, preformatted with two decimals.
    pub volume24h: String,
    /// Market capitalisation, preformatted with two decimals.
    pub market_cap: String,
    /// Generation time.
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// JSON encoding shared by every record type.
pub trait JsonRecord: Serialize {
    /// Encode the record to JSON bytes.
    fn to_json_bytes(&self) -> Result<Vec<u8>, MockDataError> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

impl JsonRecord for StockQuote {}
impl JsonRecord for WeatherReading {}
impl JsonRecord for NewsItem {}
impl JsonRecord for CryptoQuote {}
