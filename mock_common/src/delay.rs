//! Artificial latency with bounded jitter.
//!
//! A [`DelayWindow`] is a base delay plus a variance. Sampling draws a jitter
//! uniformly from `[0, variance]` using a caller-supplied random source, so
//! the resolved delay always lies in `[base, base + variance]`.

use std::time::Duration;

use rand::Rng;

use crate::defaults::DEFAULT_VARIANCE_MS;

/// Base delay and jitter bound, both in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelayWindow {
    base_ms: u64,
    variance_ms: u64,
}

impl DelayWindow {
    /// Build a window; negative inputs clamp to zero.
    pub fn new(base_ms: i64, variance_ms: i64) -> Self {
        Self {
            base_ms: base_ms.max(0).unsigned_abs(),
            variance_ms: variance_ms.max(0).unsigned_abs(),
        }
    }

    /// Window with the given base and the default variance.
    pub fn with_base(base_ms: i64) -> Self {
        Self::new(base_ms, DEFAULT_VARIANCE_MS as i64)
    }

    /// Window that resolves immediately.
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Base delay in milliseconds.
    pub fn base_ms(&self) -> u64 {
        self.base_ms
    }

    /// Maximum jitter in milliseconds.
    pub fn variance_ms(&self) -> u64 {
        self.variance_ms
    }

    /// Same base, different variance.
    pub fn variance(self, variance_ms: i64) -> Self {
        Self::new(self.base_ms as i64, variance_ms)
    }

    /// Shortest delay this window can produce.
    pub fn min(&self) -> Duration {
        self.at(0)
    }

    /// Longest delay this window can produce.
    pub fn max(&self) -> Duration {
        self.at(self.variance_ms)
    }

    /// Delay for a given jitter; jitter beyond the variance is capped.
    pub fn at(&self, jitter_ms: u64) -> Duration {
        let jitter = jitter_ms.min(self.variance_ms);
        Duration::from_millis(self.base_ms.saturating_add(jitter))
    }

    /// Draw a delay uniformly from `[base, base + variance]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.variance_ms == 0 {
            return self.min();
        }
        self.at(rng.random_range(0..=self.variance_ms))
    }
}

impl Default for DelayWindow {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn negative_inputs_clamp_to_zero() {
        let window = DelayWindow::new(-5, -1);
        assert_eq!(window, DelayWindow::zero());
        assert_eq!(window.max(), Duration::ZERO);
    }

    #[test]
    fn at_caps_jitter_at_variance() {
        let window = DelayWindow::new(1500, 500);
        assert_eq!(window.at(0), Duration::from_millis(1500));
        assert_eq!(window.at(120), Duration::from_millis(1620));
        assert_eq!(window.at(u64::MAX), Duration::from_millis(2000));
    }

    #[test]
    fn samples_stay_inside_window() {
        let window = DelayWindow::new(2000, 500);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let delay = window.sample(&mut rng);
            assert!(delay >= window.min() && delay <= window.max(), "{delay:?}");
        }
    }

    #[test]
    fn zero_variance_is_exact() {
        let window = DelayWindow::new(300, 0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(window.sample(&mut rng), Duration::from_millis(300));
    }

    #[test]
    fn with_base_uses_default_variance() {
        let window = DelayWindow::with_base(1000);
        assert_eq!(window.variance_ms(), DEFAULT_VARIANCE_MS);
        assert_eq!(window.variance(10).max(), Duration::from_millis(1010));
    }
}
