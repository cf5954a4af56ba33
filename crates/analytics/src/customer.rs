//! Customer impact series: interruptions, compliance, satisfaction.

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::calendar::{Month, SERIES_LEN};
use crate::sampling::{drifting_series, pick_uniform};
use crate::zones::{Zone, DEFAULT_ZONES};

/// One month of customer impact metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerImpactRecord {
    pub month: Month,
    pub service_interruptions: f32,
    pub avg_downtime_hours: f32,
    /// SANS 241 drinking water compliance.
    pub sans241_compliance_pct: f32,
    /// Customer satisfaction, 0-10.
    pub csat_score: f32,
    pub complaints: f32,
    pub zone_most_affected: Zone,
    pub population_served: f32,
}

/// Full historical customer impact series, oldest first.
#[derive(Resource, Debug, Clone, Default)]
pub struct CustomerImpactHistory(pub Vec<CustomerImpactRecord>);

impl CustomerImpactHistory {
    pub fn latest(&self) -> Option<&CustomerImpactRecord> {
        self.0.last()
    }
}

/// Generate the 36-month customer impact series.
pub fn generate(rng: &mut ChaCha8Rng) -> CustomerImpactHistory {
    let interruptions = drifting_series(rng, SERIES_LEN, 15.0, 80.0, 1.5);
    let downtime = drifting_series(rng, SERIES_LEN, 3.0, 11.0, 1.2);
    let compliance = drifting_series(rng, SERIES_LEN, 88.0, 99.0, -0.08);
    let csat = drifting_series(rng, SERIES_LEN, 5.5, 8.5, -0.25);
    let complaints = drifting_series(rng, SERIES_LEN, 35.0, 130.0, 1.8);
    let population = drifting_series(rng, SERIES_LEN, 2_400_000.0, 2_650_000.0, 0.0);

    let records = (0..SERIES_LEN)
        .map(|i| CustomerImpactRecord {
            month: Month::from_series_offset(i),
            service_interruptions: interruptions[i],
            avg_downtime_hours: downtime[i],
            sans241_compliance_pct: compliance[i],
            csat_score: csat[i],
            complaints: complaints[i],
            zone_most_affected: pick_uniform(rng, &DEFAULT_ZONES),
            population_served: population[i],
        })
        .collect();

    CustomerImpactHistory(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn history() -> CustomerImpactHistory {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        generate(&mut rng)
    }

    #[test]
    fn test_series_length() {
        assert_eq!(history().0.len(), SERIES_LEN);
    }

    #[test]
    fn test_csat_in_scale() {
        for record in &history().0 {
            assert!(record.csat_score > 0.0);
            assert!(record.csat_score <= 10.0);
        }
    }

    #[test]
    fn test_affected_zones_are_townships() {
        for record in &history().0 {
            assert!(DEFAULT_ZONES.contains(&record.zone_most_affected));
        }
    }

    #[test]
    fn test_generation_deterministic() {
        assert_eq!(history().0, history().0);
    }
}
