//! Mock Client: drives the mock data generators and reports when each panel of
//! data becomes available. It stands in for the pages that consume the generators:
//!
//! - `blocking`: await every domain, then show everything at once.
//! - `streaming`: show each domain the moment its simulated delay elapses.
//! - `revalidate`: repeatedly read a cached stock snapshot that is served stale and
//!   regenerated in the background once it outlives `--revalidate-secs`.
//! - `hybrid`: cached stocks first, weather and news streamed as they resolve, and
//!   crypto fetched only after those initial panels are on screen.
//!
//! `--domains stocks,news` limits blocking, streaming and hybrid pages to the listed
//! domains.
//!
//! Usage example (CLI):
//! ```bash
//! mock_client --mode streaming --variance-ms 200 --news-delay-ms 500
//! MOCK_MODE=revalidate MOCK_REVALIDATE_SECS=3 mock_client --requests 8
//! mock_client --mode hybrid --domains stocks,weather,crypto --revalidate-secs 2
//! ```
//!
//! Panels are logged through `env_logger` (set `RUST_LOG=debug` to see sampled
//! delays) or printed as JSON lines with `--json`.
#![warn(missing_docs)]
mod args;
mod render;

use crate::args::{Args, Mode};
use clap::Parser;
use log::info;
use mock_common::{Domain, JsonRecord, MockDataError, Result, StockQuote};
use mock_generator::{
    Arrival, Crypto, FetchPlan, Panel, Revalidating, Snapshot, Stocks, delayed, fetch_all,
    fetch_selected, stream_domains,
};
use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Write a panel either as one JSON line on stdout or as log lines.
fn emit(panel: &Panel, json: bool) -> Result<(), MockDataError> {
    if json {
        let bytes = panel.to_json_bytes()?;
        let mut out = io::stdout().lock();
        out.write_all(&bytes)?;
        writeln!(out)?;
    } else {
        for line in render::lines(panel) {
            info!("{}", line);
        }
    }
    Ok(())
}

/// Await the selected domains before showing anything.
async fn run_blocking(
    plan: &FetchPlan,
    domains: &[Domain],
    json: bool,
) -> Result<(), MockDataError> {
    info!(
        "Blocking: waiting for {} panels (worst case {} ms)",
        domains.len(),
        plan.slowest().as_millis()
    );
    let start = Instant::now();
    let panels = if domains == Domain::ALL {
        Vec::from(fetch_all(plan).await.into_panels())
    } else {
        fetch_selected(plan, domains).await
    };
    let elapsed = start.elapsed();

    for panel in &panels {
        emit(panel, json)?;
    }
    info!("All panels shown together after {} ms", elapsed.as_millis());
    Ok(())
}

/// Emit arrivals as they come in; fails if fewer than `expected` show up.
async fn drain(
    mut rx: mpsc::Receiver<Arrival>,
    expected: usize,
    json: bool,
) -> Result<Vec<Domain>, MockDataError> {
    let mut shown = Vec::with_capacity(expected);
    while let Some(arrival) = rx.recv().await {
        shown.push(arrival.panel.domain());
        info!(
            "#{} {} arrived after {} ms",
            shown.len(),
            arrival.panel.domain(),
            arrival.elapsed.as_millis()
        );
        emit(&arrival.panel, json)?;
    }

    if shown.len() < expected {
        return Err(MockDataError::TaskFailed(format!(
            "only {} of {} panels arrived",
            shown.len(),
            expected
        )));
    }
    Ok(shown)
}

/// Show each selected domain as soon as it resolves.
async fn run_streaming(
    plan: &FetchPlan,
    domains: &[Domain],
    json: bool,
) -> Result<(), MockDataError> {
    info!("Streaming: showing panels as they resolve");
    drain(stream_domains(plan, domains), domains.len(), json).await?;
    info!("Stream complete");
    Ok(())
}

fn log_snapshot(request: u32, snapshot: &Snapshot<StockQuote>, served_in: Duration) {
    if snapshot.regenerated {
        info!(
            "Request {}: generated snapshot #{} in {} ms",
            request,
            snapshot.generation,
            served_in.as_millis()
        );
    } else if snapshot.stale {
        info!(
            "Request {}: stale snapshot #{} ({} ms old), regenerating in background",
            request,
            snapshot.generation,
            snapshot.age.as_millis()
        );
    } else {
        info!(
            "Request {}: cached snapshot #{} ({} ms old)",
            request,
            snapshot.generation,
            snapshot.age.as_millis()
        );
    }
}

/// Wait for the next tick. Returns `false` once Ctrl+C has been pressed.
async fn next_request<F>(
    ticker: &mut Interval,
    shutdown: Pin<&mut F>,
) -> Result<bool, MockDataError>
where
    F: Future<Output = io::Result<()>>,
{
    tokio::select! {
        _ = ticker.tick() => Ok(true),
        signal = shutdown => {
            signal?;
            info!("Ctrl+C received. Shutting down client...");
            Ok(false)
        }
    }
}

fn request_ticker(interval_ms: u64) -> Interval {
    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Poll a cached stock snapshot until `requests` are served or Ctrl+C is pressed.
async fn run_revalidate(args: &Args, plan: &FetchPlan) -> Result<(), MockDataError> {
    let cache: Revalidating<Stocks> =
        Revalidating::new(Duration::from_secs(args.revalidate_secs), plan.stocks);
    info!(
        "Revalidate: {} requests every {} ms, window {} s",
        args.requests,
        args.interval_ms,
        cache.revalidate_after().as_secs()
    );

    let mut ticker = request_ticker(args.interval_ms);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    for request in 1..=args.requests {
        if !next_request(&mut ticker, shutdown.as_mut()).await? {
            return Ok(());
        }

        let start = Instant::now();
        let snapshot = cache.get().await;
        log_snapshot(request, &snapshot, start.elapsed());
        emit(&Panel::Stocks(snapshot.records.as_ref().clone()), args.json)?;
    }
    Ok(())
}

/// One hybrid page load. Returns the domains in the order they were shown.
///
/// Weather and news start streaming before the stock snapshot is read, but are
/// only emitted after it. Crypto is requested once every streamed panel is out.
async fn hybrid_page(
    request: u32,
    cache: &Revalidating<Stocks>,
    plan: &FetchPlan,
    domains: &[Domain],
    json: bool,
) -> Result<Vec<Domain>, MockDataError> {
    let streamed: Vec<Domain> = domains
        .iter()
        .copied()
        .filter(|domain| matches!(domain, Domain::Weather | Domain::News))
        .collect();
    let rx = stream_domains(plan, &streamed);

    let mut shown = Vec::with_capacity(domains.len());
    if domains.contains(&Domain::Stocks) {
        let start = Instant::now();
        let snapshot = cache.get().await;
        log_snapshot(request, &snapshot, start.elapsed());
        emit(&Panel::Stocks(snapshot.records.as_ref().clone()), json)?;
        shown.push(Domain::Stocks);
    }

    shown.extend(drain(rx, streamed.len(), json).await?);

    if domains.contains(&Domain::Crypto) {
        info!("Request {}: initial panels shown, fetching crypto", request);
        let start = Instant::now();
        let quotes = delayed::<Crypto>(plan.crypto).await;
        info!("Request {}: crypto arrived after {} ms", request, start.elapsed().as_millis());
        emit(&Panel::Crypto(quotes), json)?;
        shown.push(Domain::Crypto);
    }
    Ok(shown)
}

/// Serve hybrid pages that share one stock cache.
async fn run_hybrid(
    args: &Args,
    plan: &FetchPlan,
    domains: &[Domain],
) -> Result<(), MockDataError> {
    let cache: Revalidating<Stocks> =
        Revalidating::new(Duration::from_secs(args.revalidate_secs), plan.stocks);
    info!(
        "Hybrid: {} page loads every {} ms, stock window {} s",
        args.requests,
        args.interval_ms,
        cache.revalidate_after().as_secs()
    );

    let mut ticker = request_ticker(args.interval_ms);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    for request in 1..=args.requests {
        if !next_request(&mut ticker, shutdown.as_mut()).await? {
            return Ok(());
        }
        let start = Instant::now();
        let shown = hybrid_page(request, &cache, plan, domains, args.json).await?;
        info!(
            "Request {}: {} panels complete after {} ms",
            request,
            shown.len(),
            start.elapsed().as_millis()
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), MockDataError> {
    init_logger();
    let args = Args::parse();
    let plan = args.plan();
    let domains = args.selected()?;

    match args.mode {
        Mode::Blocking => run_blocking(&plan, &domains, args.json).await,
        Mode::Streaming => run_streaming(&plan, &domains, args.json).await,
        Mode::Revalidate => run_revalidate(&args, &plan).await,
        Mode::Hybrid => run_hybrid(&args, &plan, &domains).await,
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
