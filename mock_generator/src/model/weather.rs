//! Weather reading generation.

use chrono::{DateTime, Utc};
use mock_common::pools::{City, Condition};
use mock_common::{Domain, WeatherReading};
use rand::Rng;

use super::{MockDomain, pick};

/// Marker for the weather domain.
pub struct Weather;

impl MockDomain for Weather {
    type Record = WeatherReading;
    const KIND: Domain = Domain::Weather;

    fn generate<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<WeatherReading> {
        City::ALL
            .iter()
            .map(|&location| WeatherReading {
                location,
                temperature_c: rng.random_range(5..=40),
                condition: pick(rng, &Condition::ALL),
                humidity_pct: rng.random_range(30..=90),
                wind_kph: rng.random_range(5..=35),
                updated_at: now,
            })
            .collect()
    }
}
