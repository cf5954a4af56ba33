//! Financial performance series: billing, collections, energy costs.
//!
//! Billing and costs drift upward over the series while infrastructure
//! ROI decays; collections track billing at a 75-92% collection rate.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::calendar::{Month, SERIES_LEN};
use crate::sampling::drifting_series;

/// One month of financial metrics. Monetary values are in Rand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub month: Month,
    pub billing_amount_r: f32,
    pub revenue_collected_r: f32,
    /// Revenue collected as a percentage of billing.
    pub collection_rate_pct: f32,
    pub energy_costs_r: f32,
    pub load_shedding_hours: f32,
    pub infrastructure_roi_pct: f32,
    pub opex_r: f32,
    pub capex_r: f32,
}

/// Full historical financial series, oldest first.
#[derive(Resource, Debug, Clone, Default)]
pub struct FinancialHistory(pub Vec<FinancialRecord>);

impl FinancialHistory {
    pub fn latest(&self) -> Option<&FinancialRecord> {
        self.0.last()
    }
}

/// Generate the 36-month financial series.
pub fn generate(rng: &mut ChaCha8Rng) -> FinancialHistory {
    let billing = drifting_series(rng, SERIES_LEN, 8_000_000.0, 13_000_000.0, 0.5);
    let energy = drifting_series(rng, SERIES_LEN, 1_100_000.0, 2_700_000.0, 1.2);
    let load_shedding = drifting_series(rng, SERIES_LEN, 10.0, 160.0, 2.0);
    let roi = drifting_series(rng, SERIES_LEN, 7.0, 14.0, -0.4);
    let opex = drifting_series(rng, SERIES_LEN, 4_000_000.0, 6_700_000.0, 0.6);
    let capex = drifting_series(rng, SERIES_LEN, 1_800_000.0, 3_500_000.0, 0.0);

    let records = (0..SERIES_LEN)
        .map(|i| {
            let collection_fraction = rng.gen_range(0.75..0.92);
            let revenue = billing[i] * collection_fraction;
            FinancialRecord {
                month: Month::from_series_offset(i),
                billing_amount_r: billing[i],
                revenue_collected_r: revenue,
                collection_rate_pct: collection_fraction * 100.0,
                energy_costs_r: energy[i],
                load_shedding_hours: load_shedding[i],
                infrastructure_roi_pct: roi[i],
                opex_r: opex[i],
                capex_r: capex[i],
            }
        })
        .collect();

    FinancialHistory(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn history() -> FinancialHistory {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        generate(&mut rng)
    }

    #[test]
    fn test_series_length() {
        assert_eq!(history().0.len(), SERIES_LEN);
    }

    #[test]
    fn test_collection_rate_consistent() {
        for record in &history().0 {
            let expected = record.revenue_collected_r / record.billing_amount_r * 100.0;
            assert!((record.collection_rate_pct - expected).abs() < 0.01);
            assert!(record.collection_rate_pct >= 75.0);
            assert!(record.collection_rate_pct <= 92.0);
        }
    }

    #[test]
    fn test_revenue_never_exceeds_billing() {
        for record in &history().0 {
            assert!(record.revenue_collected_r < record.billing_amount_r);
        }
    }

    #[test]
    fn test_generation_deterministic() {
        assert_eq!(history().0, history().0);
    }
}
