//! Delayed fetching: generated records handed back after simulated latency.
//!
//! Every call sleeps for a delay sampled from a [`DelayWindow`] and only then
//! generates its batch, so `updatedAt` reflects resolution time. Calls are
//! independent futures with no shared state; several issued together complete in
//! the order of their own draws. There is no timeout and no cancellation path:
//! once awaited, a call always resolves.

use std::future::Future;
use std::pin::Pin;

use chrono::{SubsecRound, Utc};
use log::debug;
use mock_common::{CryptoQuote, DelayWindow, NewsItem, StockQuote, WeatherReading};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::sleep;

use crate::model::{Crypto, MockDomain, News, Stocks, Weather};

/// A batch of records that resolves after its sampled delay.
pub type DelayedResult<T> = Pin<Box<dyn Future<Output = Vec<T>> + Send + 'static>>;

/// Wait for a delay drawn from `window`, then run `callback` with the same random source.
pub async fn fetch_with_delay<T, R, F>(window: DelayWindow, rng: &mut R, callback: F) -> T
where
    R: Rng,
    F: FnOnce(&mut R) -> T,
{
    let delay = window.sample(rng);
    debug!(
        "Simulating {} ms of latency (window {}..={} ms)",
        delay.as_millis(),
        window.min().as_millis(),
        window.max().as_millis()
    );
    sleep(delay).await;
    callback(rng)
}

/// Generate a `D` batch after a delay drawn from `window`, using a caller-supplied source.
///
/// The generation time is truncated to whole seconds, the resolution records are
/// serialized at.
pub async fn fetch_with<D: MockDomain, R: Rng>(window: DelayWindow, rng: &mut R) -> Vec<D::Record> {
    let records = fetch_with_delay(window, rng, |rng| {
        D::generate(rng, Utc::now().trunc_subsecs(0))
    })
    .await;
    debug!("Generated {} {} records", records.len(), D::KIND);
    records
}

/// Boxed `D` fetch seeded from the OS, suitable for spawning.
pub fn delayed<D: MockDomain>(window: DelayWindow) -> DelayedResult<D::Record> {
    Box::pin(async move {
        let mut rng = StdRng::from_os_rng();
        fetch_with::<D, _>(window, &mut rng).await
    })
}

/// Generate a `D` batch after `delay_ms` (or the domain default) plus default jitter.
///
/// Negative delays are treated as zero.
pub async fn fetch<D: MockDomain>(delay_ms: Option<i64>) -> Vec<D::Record> {
    let base = delay_ms.unwrap_or(D::KIND.default_delay_ms() as i64);
    delayed::<D>(DelayWindow::with_base(base)).await
}

/// Six stock quotes after `delay_ms` (default 2000) plus up to 500 ms of jitter.
pub async fn fetch_stock_data(delay_ms: Option<i64>) -> Vec<StockQuote> {
    fetch::<Stocks>(delay_ms).await
}

/// Six weather readings after `delay_ms` (default 1500) plus up to 500 ms of jitter.
pub async fn fetch_weather_data(delay_ms: Option<i64>) -> Vec<WeatherReading> {
    fetch::<Weather>(delay_ms).await
}

/// Five news items after `delay_ms` (default 3000) plus up to 500 ms of jitter.
pub async fn fetch_news_data(delay_ms: Option<i64>) -> Vec<NewsItem> {
    fetch::<News>(delay_ms).await
}

/// Six crypto quotes after `delay_ms` (default 2500) plus up to 500 ms of jitter.
pub async fn fetch_crypto_data(delay_ms: Option<i64>) -> Vec<CryptoQuote> {
    fetch::<Crypto>(delay_ms).await
}
