//! Time-windowed snapshot cache with background regeneration.
//!
//! A [`Revalidating`] holds the last generated batch for one domain. Inside the
//! revalidation window the batch is served as-is. The first request after the
//! window is still served the old batch immediately, marked `stale`, and kicks off
//! a regeneration on a background task; later requests see the new batch once that
//! task lands. Only the very first request, when nothing is cached yet, waits for
//! the simulated delay.
//!
//! At most one regeneration is in flight at a time. The handle is cheap to clone;
//! clones share the same snapshot.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use mock_common::DelayWindow;
use mock_common::defaults::DEFAULT_REVALIDATE_SECS;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::fetch::delayed;
use crate::model::MockDomain;

/// Result of [`Revalidating::get`].
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    /// The cached batch.
    pub records: Arc<Vec<T>>,
    /// Number of the regeneration that produced `records`, starting at 1.
    pub generation: u64,
    /// True if this call had to generate the batch itself (empty cache).
    pub regenerated: bool,
    /// True if the batch had outlived the window; a background refresh is under way.
    pub stale: bool,
    /// Age of the batch at the time it was served.
    pub age: Duration,
}

struct Cached<T> {
    records: Arc<Vec<T>>,
    generated_at: Instant,
    generation: u64,
}

struct State<T> {
    cached: Option<Cached<T>>,
    refreshing: bool,
}

/// Cached `D` batch that regenerates in the background once it outlives `revalidate_after`.
pub struct Revalidating<D: MockDomain> {
    revalidate_after: Duration,
    window: DelayWindow,
    state: Arc<Mutex<State<D::Record>>>,
}

impl<D: MockDomain> Clone for Revalidating<D> {
    fn clone(&self) -> Self {
        Self {
            revalidate_after: self.revalidate_after,
            window: self.window,
            state: Arc::clone(&self.state),
        }
    }
}

impl<D: MockDomain> Revalidating<D> {
    /// Create an empty cache; the first `get` generates in the foreground.
    pub fn new(revalidate_after: Duration, window: DelayWindow) -> Self {
        Self {
            revalidate_after,
            window,
            state: Arc::new(Mutex::new(State {
                cached: None,
                refreshing: false,
            })),
        }
    }

    /// Window after which a snapshot is considered stale.
    pub fn revalidate_after(&self) -> Duration {
        self.revalidate_after
    }

    /// Serve the cached batch.
    ///
    /// Must be called from within a tokio runtime, since a stale snapshot spawns its
    /// regeneration.
    pub async fn get(&self) -> Snapshot<D::Record> {
        let mut state = self.state.lock().await;

        let Some(cached) = state.cached.as_ref() else {
            let records = Arc::new(delayed::<D>(self.window).await);
            info!("Generated initial {} snapshot", D::KIND);
            state.cached = Some(Cached {
                records: Arc::clone(&records),
                generated_at: Instant::now(),
                generation: 1,
            });
            return Snapshot {
                records,
                generation: 1,
                regenerated: true,
                stale: false,
                age: Duration::ZERO,
            };
        };

        let age = cached.generated_at.elapsed();
        let snapshot = Snapshot {
            records: Arc::clone(&cached.records),
            generation: cached.generation,
            regenerated: false,
            stale: age >= self.revalidate_after,
            age,
        };

        if snapshot.stale && !state.refreshing {
            state.refreshing = true;
            self.spawn_regeneration(snapshot.generation + 1);
        } else {
            debug!(
                "Serving {} snapshot #{} ({} ms old)",
                D::KIND,
                snapshot.generation,
                age.as_millis()
            );
        }
        snapshot
    }

    fn spawn_regeneration(&self, generation: u64) {
        debug!("{} snapshot stale, regenerating #{} in background", D::KIND, generation);
        let state = Arc::clone(&self.state);
        let window = self.window;
        tokio::spawn(async move {
            let records = Arc::new(delayed::<D>(window).await);
            let mut state = state.lock().await;
            state.cached = Some(Cached {
                records,
                generated_at: Instant::now(),
                generation,
            });
            state.refreshing = false;
            info!("Regenerated {} snapshot #{}", D::KIND, generation);
        });
    }
}

impl<D: MockDomain> Default for Revalidating<D> {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(DEFAULT_REVALIDATE_SECS),
            DelayWindow::with_base(D::KIND.default_delay_ms() as i64),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{News, Stocks};
    use tokio::time::{advance, sleep};

    #[tokio::test(start_paused = true)]
    async fn serves_cache_inside_window() {
        let cache: Revalidating<Stocks> =
            Revalidating::new(Duration::from_secs(60), DelayWindow::zero());

        let first = cache.get().await;
        assert!(first.regenerated);
        assert_eq!(first.generation, 1);

        advance(Duration::from_secs(30)).await;
        let second = cache.get().await;
        assert!(!second.regenerated);
        assert!(!second.stale);
        assert_eq!(second.generation, 1);
        assert!(Arc::ptr_eq(&first.records, &second.records));
        assert!(second.age >= Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn first_request_waits_for_generation() {
        let cache: Revalidating<News> =
            Revalidating::new(Duration::from_secs(60), DelayWindow::new(400, 0));
        let start = Instant::now();
        let snapshot = cache.get().await;
        assert!(start.elapsed() >= Duration::from_millis(400));
        assert!(snapshot.regenerated);
        assert_eq!(snapshot.records.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_request_is_served_immediately() {
        let cache: Revalidating<Stocks> =
            Revalidating::new(Duration::from_secs(60), DelayWindow::new(200, 0));
        let first = cache.get().await;

        advance(Duration::from_secs(61)).await;
        let start = Instant::now();
        let stale = cache.get().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert!(stale.stale);
        assert!(!stale.regenerated);
        assert_eq!(stale.generation, 1);
        assert!(Arc::ptr_eq(&first.records, &stale.records));

        sleep(Duration::from_millis(300)).await;
        let fresh = cache.get().await;
        assert_eq!(fresh.generation, 2);
        assert!(!fresh.stale);
        assert!(!Arc::ptr_eq(&first.records, &fresh.records));
    }

    #[tokio::test(start_paused = true)]
    async fn one_background_regeneration_at_a_time() {
        let cache: Revalidating<Stocks> =
            Revalidating::new(Duration::from_secs(60), DelayWindow::new(500, 0));
        cache.get().await;

        advance(Duration::from_secs(61)).await;
        let (a, b) = tokio::join!(cache.get(), cache.get());
        assert!(a.stale && b.stale);
        assert_eq!(a.generation, 1);
        assert_eq!(b.generation, 1);

        sleep(Duration::from_millis(600)).await;
        assert_eq!(cache.get().await.generation, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_first_callers_share_one_generation() {
        let cache: Revalidating<Stocks> =
            Revalidating::new(Duration::from_secs(60), DelayWindow::new(1000, 0));
        let shared = cache.clone();

        let (a, b) = tokio::join!(cache.get(), shared.get());
        assert_eq!(a.generation, 1);
        assert_eq!(b.generation, 1);
        assert!(a.regenerated ^ b.regenerated);
    }
}
