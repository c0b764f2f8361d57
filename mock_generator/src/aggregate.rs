//! Running the four generators together.
//!
//! Two ways to consume a set of panels:
//! - [`fetch_all`]: await every domain and hand back one [`Dashboard`]. Total
//!   latency is the slowest draw. [`fetch_selected`] does the same for a subset.
//! - [`stream_all`]: spawn one task per domain and receive each [`Arrival`] over an
//!   mpsc channel as soon as its delay elapses. The channel closes once every task
//!   has reported (or died). [`stream_domains`] streams a subset.
//!
//! Neither strategy imposes ordering: completion order is whatever the individual
//! delay draws produce.

use std::time::Duration;

use log::{debug, warn};
use mock_common::{
    CryptoQuote, DelayWindow, Domain, JsonRecord, NewsItem, StockQuote, WeatherReading,
};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::fetch::delayed;
use crate::model::{Crypto, MockDomain, News, Stocks, Weather};

/// Delay window per domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPlan {
    /// Window for stock quotes.
    pub stocks: DelayWindow,
    /// Window for weather readings.
    pub weather: DelayWindow,
    /// Window for news items.
    pub news: DelayWindow,
    /// Window for crypto quotes.
    pub crypto: DelayWindow,
}

impl Default for FetchPlan {
    fn default() -> Self {
        Self {
            stocks: DelayWindow::with_base(Domain::Stocks.default_delay_ms() as i64),
            weather: DelayWindow::with_base(Domain::Weather.default_delay_ms() as i64),
            news: DelayWindow::with_base(Domain::News.default_delay_ms() as i64),
            crypto: DelayWindow::with_base(Domain::Crypto.default_delay_ms() as i64),
        }
    }
}

impl FetchPlan {
    /// Domain default delays with a custom jitter bound.
    pub fn with_variance(variance_ms: i64) -> Self {
        let plan = Self::default();
        Self {
            stocks: plan.stocks.variance(variance_ms),
            weather: plan.weather.variance(variance_ms),
            news: plan.news.variance(variance_ms),
            crypto: plan.crypto.variance(variance_ms),
        }
    }

    /// Replace the window for one domain.
    pub fn set(mut self, domain: Domain, window: DelayWindow) -> Self {
        match domain {
            Domain::Stocks => self.stocks = window,
            Domain::Weather => self.weather = window,
            Domain::News => self.news = window,
            Domain::Crypto => self.crypto = window,
        }
        self
    }

    /// Window configured for `domain`.
    pub fn window(&self, domain: Domain) -> DelayWindow {
        match domain {
            Domain::Stocks => self.stocks,
            Domain::Weather => self.weather,
            Domain::News => self.news,
            Domain::Crypto => self.crypto,
        }
    }

    /// Upper bound on how long [`fetch_all`] can take under this plan.
    pub fn slowest(&self) -> Duration {
        Domain::ALL
            .iter()
            .map(|&domain| self.window(domain).max())
            .max()
            .unwrap_or_default()
    }
}

/// One domain's batch, tagged with its domain.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "domain", content = "records", rename_all = "lowercase")]
pub enum Panel {
    /// Stock quotes.
    Stocks(Vec<StockQuote>),
    /// Weather readings.
    Weather(Vec<WeatherReading>),
    /// News items.
    News(Vec<NewsItem>),
    /// Crypto quotes.
    Crypto(Vec<CryptoQuote>),
}

impl Panel {
    /// Which domain this batch belongs to.
    pub fn domain(&self) -> Domain {
        match self {
            Panel::Stocks(_) => Domain::Stocks,
            Panel::Weather(_) => Domain::Weather,
            Panel::News(_) => Domain::News,
            Panel::Crypto(_) => Domain::Crypto,
        }
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        match self {
            Panel::Stocks(records) => records.len(),
            Panel::Weather(records) => records.len(),
            Panel::News(records) => records.len(),
            Panel::Crypto(records) => records.len(),
        }
    }

    /// True if the batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JsonRecord for Panel {}

/// Every domain's batch, produced by [`fetch_all`].
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Stock quotes.
    pub stocks: Vec<StockQuote>,
    /// Weather readings.
    pub weather: Vec<WeatherReading>,
    /// News items.
    pub news: Vec<NewsItem>,
    /// Crypto quotes.
    pub crypto: Vec<CryptoQuote>,
}

impl Dashboard {
    /// Split into panels in a fixed stocks, weather, news, crypto order.
    pub fn into_panels(self) -> [Panel; 4] {
        [
            Panel::Stocks(self.stocks),
            Panel::Weather(self.weather),
            Panel::News(self.news),
            Panel::Crypto(self.crypto),
        ]
    }
}

/// A panel delivered by [`stream_all`], with the time since the stream started.
#[derive(Debug, Clone)]
pub struct Arrival {
    /// The delivered batch.
    pub panel: Panel,
    /// Time between the `stream_all` call and this delivery.
    pub elapsed: Duration,
}

/// Await all four domains concurrently and return them together.
pub async fn fetch_all(plan: &FetchPlan) -> Dashboard {
    let (stocks, weather, news, crypto) = tokio::join!(
        delayed::<Stocks>(plan.stocks),
        delayed::<Weather>(plan.weather),
        delayed::<News>(plan.news),
        delayed::<Crypto>(plan.crypto),
    );
    Dashboard {
        stocks,
        weather,
        news,
        crypto,
    }
}

/// Await the given domains concurrently; panels come back in the order requested.
pub async fn fetch_selected(plan: &FetchPlan, domains: &[Domain]) -> Vec<Panel> {
    let mut rx = stream_domains(plan, domains);
    let mut panels = Vec::with_capacity(domains.len());
    while let Some(arrival) = rx.recv().await {
        panels.push(arrival.panel);
    }
    panels.sort_by_key(|panel| domains.iter().position(|&d| d == panel.domain()));
    panels
}

/// Spawn one task per domain and deliver each panel as it resolves.
///
/// Must be called from within a tokio runtime. The receiver yields at most four
/// arrivals, in completion order, and then closes.
pub fn stream_all(plan: &FetchPlan) -> mpsc::Receiver<Arrival> {
    stream_domains(plan, &Domain::ALL)
}

/// [`stream_all`] restricted to `domains`. Listing a domain twice spawns it twice.
pub fn stream_domains(plan: &FetchPlan, domains: &[Domain]) -> mpsc::Receiver<Arrival> {
    let (tx, rx) = mpsc::channel(domains.len().max(1));
    let started = Instant::now();

    for &domain in domains {
        let window = plan.window(domain);
        let tx = tx.clone();
        match domain {
            Domain::Stocks => spawn_panel::<Stocks>(window, started, tx, Panel::Stocks),
            Domain::Weather => spawn_panel::<Weather>(window, started, tx, Panel::Weather),
            Domain::News => spawn_panel::<News>(window, started, tx, Panel::News),
            Domain::Crypto => spawn_panel::<Crypto>(window, started, tx, Panel::Crypto),
        }
    }

    rx
}

fn spawn_panel<D: MockDomain>(
    window: DelayWindow,
    started: Instant,
    tx: mpsc::Sender<Arrival>,
    wrap: fn(Vec<D::Record>) -> Panel,
) {
    tokio::spawn(async move {
        let records = delayed::<D>(window).await;
        let arrival = Arrival {
            panel: wrap(records),
            elapsed: started.elapsed(),
        };
        debug!("{} panel ready after {} ms", D::KIND, arrival.elapsed.as_millis());
        if tx.send(arrival).await.is_err() {
            warn!("Receiver dropped before the {} panel was delivered", D::KIND);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_uses_domain_delays() {
        let plan = FetchPlan::default();
        assert_eq!(plan.weather.base_ms(), 1500);
        assert_eq!(plan.news.base_ms(), 3000);
        assert_eq!(plan.slowest(), Duration::from_millis(3500));
    }

    #[test]
    fn set_and_variance_adjust_windows() {
        let plan = FetchPlan::with_variance(0).set(Domain::Crypto, DelayWindow::new(10, 5));
        assert_eq!(plan.stocks, DelayWindow::new(2000, 0));
        assert_eq!(plan.window(Domain::Crypto), DelayWindow::new(10, 5));
    }

    #[test]
    fn panel_serializes_with_domain_tag() {
        let panel = Panel::News(Vec::new());
        let value: serde_json::Value =
            serde_json::from_slice(&panel.to_json_bytes().unwrap()).unwrap();
        assert_eq!(value["domain"], "news");
        assert!(value["records"].as_array().unwrap().is_empty());
        assert!(panel.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn stream_domains_spawns_only_requested() {
        let plan = FetchPlan::with_variance(0)
            .set(Domain::News, DelayWindow::new(30, 0))
            .set(Domain::Stocks, DelayWindow::new(10, 0));
        let mut rx = stream_domains(&plan, &[Domain::News, Domain::Stocks]);
        let mut order = Vec::new();
        while let Some(arrival) = rx.recv().await {
            order.push(arrival.panel.domain());
        }
        assert_eq!(order, vec![Domain::Stocks, Domain::News]);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_selected_returns_requested_order() {
        let plan = FetchPlan::with_variance(0)
            .set(Domain::Crypto, DelayWindow::new(50, 0))
            .set(Domain::Weather, DelayWindow::new(5, 0));
        let start = Instant::now();
        let panels = fetch_selected(&plan, &[Domain::Crypto, Domain::Weather]).await;
        assert!(start.elapsed() >= Duration::from_millis(50));
        let domains: Vec<Domain> = panels.iter().map(Panel::domain).collect();
        assert_eq!(domains, vec![Domain::Crypto, Domain::Weather]);
        assert_eq!(panels[0].len(), 6);
    }
}
