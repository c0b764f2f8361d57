//! Command-line arguments for the mock data demo.
//!
//! This module defines the CLI interface using `clap`. Every flag can also be set
//! through a `MOCK_*` environment variable. See `main` for end-to-end usage.
use clap::{Parser, ValueEnum};
use mock_common::defaults::{DEFAULT_REVALIDATE_SECS, DEFAULT_VARIANCE_MS};
use mock_common::{DelayWindow, Domain, Result};
use mock_generator::FetchPlan;

/// How the demo consumes the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Mode {
    /// Await every domain, then show all panels at once.
    Blocking,
    /// Show each panel as soon as its delay elapses.
    Streaming,
    /// Poll a cached stock snapshot that regenerates after a window.
    Revalidate,
    /// Cached stocks, streamed weather and news, then crypto once the page is up.
    Hybrid,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Aggregation strategy to run.
    #[clap(long, value_enum, env = "MOCK_MODE", default_value_t = Mode::Streaming)]
    pub mode: Mode,

    /// Upper bound of the random jitter added to every delay, in milliseconds.
    #[clap(long, env = "MOCK_VARIANCE_MS", default_value_t = DEFAULT_VARIANCE_MS as i64, allow_negative_numbers = true)]
    pub variance_ms: i64,

    /// Base delay for stock quotes (default 2000).
    #[clap(long, env = "MOCK_STOCKS_DELAY_MS", allow_negative_numbers = true)]
    pub stocks_delay_ms: Option<i64>,

    /// Base delay for weather readings (default 1500).
    #[clap(long, env = "MOCK_WEATHER_DELAY_MS", allow_negative_numbers = true)]
    pub weather_delay_ms: Option<i64>,

    /// Base delay for news items (default 3000).
    #[clap(long, env = "MOCK_NEWS_DELAY_MS", allow_negative_numbers = true)]
    pub news_delay_ms: Option<i64>,

    /// Base delay for crypto quotes (default 2500).
    #[clap(long, env = "MOCK_CRYPTO_DELAY_MS", allow_negative_numbers = true)]
    pub crypto_delay_ms: Option<i64>,

    /// Comma-separated domains to show, e.g. `stocks,news`. Defaults to all four.
    #[clap(long, env = "MOCK_DOMAINS")]
    pub domains: Option<String>,

    /// Number of page requests issued in `revalidate` and `hybrid` modes.
    #[clap(long, env = "MOCK_REQUESTS", default_value_t = 5)]
    pub requests: u32,

    /// Pause between page requests in `revalidate` and `hybrid` modes, in milliseconds.
    #[clap(long, env = "MOCK_INTERVAL_MS", default_value_t = 1000)]
    pub interval_ms: u64,

    /// Age after which the cached snapshot is regenerated, in seconds.
    #[clap(long, env = "MOCK_REVALIDATE_SECS", default_value_t = DEFAULT_REVALIDATE_SECS)]
    pub revalidate_secs: u64,

    /// Print panels as JSON lines on stdout instead of log lines.
    #[clap(long, env = "MOCK_JSON")]
    pub json: bool,
}

impl Args {
    /// Domains selected with `--domains`, in the order given.
    pub fn selected(&self) -> Result<Vec<Domain>> {
        Domain::parse_list(self.domains.as_deref().unwrap_or_default())
    }

    /// Delay windows for every domain, applying any per-domain overrides.
    pub fn plan(&self) -> FetchPlan {
        let overrides = [
            (Domain::Stocks, self.stocks_delay_ms),
            (Domain::Weather, self.weather_delay_ms),
            (Domain::News, self.news_delay_ms),
            (Domain::Crypto, self.crypto_delay_ms),
        ];

        overrides
            .into_iter()
            .fold(FetchPlan::with_variance(self.variance_ms), |plan, (domain, delay)| {
                match delay {
                    Some(ms) => plan.set(domain, DelayWindow::new(ms, self.variance_ms)),
                    None => plan,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_common::MockDataError;

    #[test]
    fn defaults_match_domain_delays() {
        let args = Args::try_parse_from(["mock_client"]).unwrap();
        assert_eq!(args.mode, Mode::Streaming);
        assert_eq!(args.plan(), FetchPlan::default());
        assert_eq!(args.selected().unwrap(), Domain::ALL.to_vec());
        assert!(!args.json);
    }

    #[test]
    fn overrides_apply_per_domain() {
        let args = Args::try_parse_from([
            "mock_client",
            "--mode",
            "blocking",
            "--variance-ms",
            "0",
            "--news-delay-ms",
            "-20",
        ])
        .unwrap();
        let plan = args.plan();
        assert_eq!(args.mode, Mode::Blocking);
        assert_eq!(plan.news, DelayWindow::zero());
        assert_eq!(plan.stocks, DelayWindow::new(2000, 0));
    }

    #[test]
    fn domain_filter_parses_through_domain() {
        let args =
            Args::try_parse_from(["mock_client", "--domains", "Stocks,news", "--mode", "hybrid"])
                .unwrap();
        assert_eq!(args.mode, Mode::Hybrid);
        assert_eq!(args.selected().unwrap(), vec![Domain::Stocks, Domain::News]);

        let args = Args::try_parse_from(["mock_client", "--domains", "stocks,bonds"]).unwrap();
        let err = args.selected().unwrap_err();
        assert!(matches!(err, MockDataError::UnknownDomain(ref name) if name == "bonds"));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Args::try_parse_from(["mock_client", "--mode", "isr"]).is_err());
    }
}
