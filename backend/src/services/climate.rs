//! Synthetic climate sampling service
//!
//! Produces the demonstration readings the dashboard displays. Sampling is
//! driven by an explicit optional seed: the same seed always yields the same
//! reading for a region. No hidden state is consulted.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use shared::models::{EnvironmentalReading, Region};

use crate::config::ClimateConfig;

/// Climate service for sampling synthetic readings
#[derive(Clone)]
pub struct ClimateService {
    ranges: ClimateConfig,
}

impl ClimateService {
    /// Create a new ClimateService with the configured sampling ranges
    pub fn new(ranges: ClimateConfig) -> Self {
        Self { ranges }
    }

    /// Sample a reading for a region
    ///
    /// A seed gives a reproducible reading; without one the thread RNG is
    /// used.
    pub fn sample(&self, region: Region, seed: Option<u64>) -> EnvironmentalReading {
        let reading = match seed {
            Some(seed) => self.sample_with(region, &mut StdRng::seed_from_u64(seed)),
            None => self.sample_with(region, &mut rand::thread_rng()),
        };

        tracing::debug!(
            region = %region,
            temperature = reading.temperature_celsius,
            rainfall = reading.rainfall_mm,
            ndvi = reading.ndvi,
            "sampled conditions"
        );

        reading
    }

    /// Sample a series of readings ending today, one per day
    ///
    /// Each day derives its own sub-seed, so any day of a seeded series is
    /// individually reproducible.
    pub fn sample_series(
        &self,
        region: Region,
        seed: Option<u64>,
        days: u32,
    ) -> Vec<EnvironmentalReading> {
        (0..days)
            .map(|day| {
                let day_seed = seed.map(|s| s ^ (u64::from(day).wrapping_mul(0x5A5A)));
                let mut reading = self.sample(region, day_seed);
                reading.sampled_at = reading.sampled_at - Duration::days(i64::from(days - 1 - day));
                reading
            })
            .collect()
    }

    fn sample_with<R: Rng>(&self, region: Region, rng: &mut R) -> EnvironmentalReading {
        let r = &self.ranges;
        EnvironmentalReading {
            region,
            temperature_celsius: rng
                .gen_range(r.temperature_min_celsius..=r.temperature_max_celsius),
            rainfall_mm: rng.gen_range(r.rainfall_min_mm..=r.rainfall_max_mm),
            // NDVI stays in the unit interval whatever the configured range
            ndvi: rng.gen_range(r.ndvi_min..=r.ndvi_max).clamp(0.0, 1.0),
            sampled_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ClimateService {
        ClimateService::new(ClimateConfig::default())
    }

    #[test]
    fn test_same_seed_same_reading() {
        let service = service();
        let a = service.sample(Region::Gharb, Some(42));
        let b = service.sample(Region::Gharb, Some(42));
        assert_eq!(a.temperature_celsius, b.temperature_celsius);
        assert_eq!(a.rainfall_mm, b.rainfall_mm);
        assert_eq!(a.ndvi, b.ndvi);
    }

    #[test]
    fn test_different_seeds_differ() {
        let service = service();
        let a = service.sample(Region::Gharb, Some(1));
        let b = service.sample(Region::Gharb, Some(2));
        // Three independent uniform draws colliding on both seeds is not
        // something StdRng produces for these inputs
        assert!(
            a.temperature_celsius != b.temperature_celsius
                || a.rainfall_mm != b.rainfall_mm
                || a.ndvi != b.ndvi
        );
    }

    #[test]
    fn test_samples_stay_in_configured_ranges() {
        let service = service();
        for seed in 0..200 {
            let reading = service.sample(Region::Haouz, Some(seed));
            assert!((15.0..=35.0).contains(&reading.temperature_celsius));
            assert!((5.0..=80.0).contains(&reading.rainfall_mm));
            assert!((0.25..=0.80).contains(&reading.ndvi));
        }
    }

    #[test]
    fn test_unseeded_samples_stay_in_ranges() {
        let service = service();
        for _ in 0..50 {
            let reading = service.sample(Region::Oriental, None);
            assert!((15.0..=35.0).contains(&reading.temperature_celsius));
            assert!((5.0..=80.0).contains(&reading.rainfall_mm));
            assert!((0.25..=0.80).contains(&reading.ndvi));
        }
    }

    #[test]
    fn test_series_has_one_reading_per_day() {
        let service = service();
        let series = service.sample_series(Region::Saiss, Some(7), 5);
        assert_eq!(series.len(), 5);
        for window in series.windows(2) {
            assert!(window[0].sampled_at < window[1].sampled_at);
        }
    }

    #[test]
    fn test_seeded_series_is_reproducible() {
        let service = service();
        let a = service.sample_series(Region::DraaTafilalet, Some(99), 3);
        let b = service.sample_series(Region::DraaTafilalet, Some(99), 3);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.ndvi, y.ndvi);
            assert_eq!(x.rainfall_mm, y.rainfall_mm);
        }
    }
}
