//! News item generation.
//!
//! A batch is always five items. Titles and sources are drawn with replacement, so
//! the same headline may appear twice in one batch. Publication times fall one to
//! twelve whole hours before `now`.

use chrono::{DateTime, TimeDelta, Utc};
use mock_common::pools::{NEWS_SUMMARY, NEWS_TITLES, NewsSource};
use mock_common::{Domain, NewsItem};
use rand::Rng;

use super::{MockDomain, pick};

/// Marker for the news domain.
pub struct News;

impl MockDomain for News {
    type Record = NewsItem;
    const KIND: Domain = Domain::News;

    fn generate<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<NewsItem> {
        (1..=Self::KIND.cardinality())
            .map(|n| {
                let hours_ago = rng.random_range(1..=12);
                NewsItem {
                    id: format!("news-{n}"),
                    title: pick(rng, &NEWS_TITLES).to_string(),
                    summary: NEWS_SUMMARY.to_string(),
                    source: pick(rng, &NewsSource::ALL),
                    published_at: now - TimeDelta::hours(hours_ago),
                }
            })
            .collect()
    }
}
