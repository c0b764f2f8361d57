//! Mock data generator with simulated network latency.
//!
//! The crate produces randomized stock, weather, news and crypto batches and hands
//! them back only after an artificial, jittered delay. It is meant to feed loading
//! and streaming demos where the interesting part is *when* data shows up:
//!
//! - `model` — the `MockDomain` trait and the synchronous per-domain generators.
//! - `fetch` — delayed fetching on top of the generators (`fetch_stock_data`, ...).
//! - `aggregate` — running several domains at once, either awaiting them together
//!   (`fetch_all`) or receiving each as it resolves (`stream_all`).
//! - `revalidate` — a snapshot cache served stale while it regenerates in the background.
//!
//! All waiting is done with `tokio::time`, so callers need a tokio runtime.
#![warn(missing_docs)]
pub mod aggregate;
pub mod fetch;
pub mod model;
pub mod revalidate;

pub use aggregate::{
    Arrival, Dashboard, FetchPlan, Panel, fetch_all, fetch_selected, stream_all, stream_domains,
};
pub use fetch::{
    DelayedResult, delayed, fetch, fetch_crypto_data, fetch_news_data, fetch_stock_data,
    fetch_weather_data, fetch_with, fetch_with_delay,
};
pub use model::{Crypto, MockDomain, News, Stocks, Weather};
pub use revalidate::{Revalidating, Snapshot};
