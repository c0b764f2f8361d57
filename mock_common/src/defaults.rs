//! Default timing constants shared by the generator and the demo client.

/// Upper bound of the random jitter added on top of every base delay.
pub const DEFAULT_VARIANCE_MS: u64 = 500;
/// Base delay for stock quotes.
pub const STOCKS_DELAY_MS: u64 = 2000;
/// Base delay for weather readings.
pub const WEATHER_DELAY_MS: u64 = 1500;
/// Base delay for news items.
pub const NEWS_DELAY_MS: u64 = 3000;
/// Base delay for crypto quotes.
pub const CRYPTO_DELAY_MS: u64 = 2500;
/// Age after which a cached snapshot is regenerated.
pub const DEFAULT_REVALIDATE_SECS: u64 = 60;
