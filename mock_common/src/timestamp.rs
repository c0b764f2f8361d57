//! Serde adapter rendering `DateTime<Utc>` as `yyyy-MM-dd HH:mm:ss`.
//!
//! Use with `#[serde(with = "crate::timestamp")]` on record fields. Sub-second
//! precision is not written, so only whole-second timestamps survive a round trip;
//! the generators stamp records that way.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

/// `chrono` format string for record timestamps.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a timestamp the way records expose it.
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(FORMAT).to_string()
}

/// Serialize a timestamp as a formatted string.
pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(ts))
}

/// Parse a timestamp produced by [`serialize`].
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(de::Error::custom)
}
