//! 2025-2030 planning forecast and scenario-adjusted demand curves.
//!
//! The forecast table is fixed planning data, not sampled; the 2030 row's
//! demand (3700 Ml) and investment (R68M) are the baselines the scenario
//! projector scales.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One forecast year of planning projections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub year: i32,
    pub demand_projection_ml: f32,
    pub ai_leakage_prediction_pct: f32,
    /// Composite climate risk score, 0-10.
    pub climate_risk_score: f32,
    pub investment_required_r: f32,
    pub population_growth_pct: f32,
}

/// The full forecast table, one record per year 2025-2030.
#[derive(Resource, Debug, Clone, Default)]
pub struct ForecastTable(pub Vec<ForecastRecord>);

impl ForecastTable {
    /// Demand projections scaled by a climate multiplier, for the scenario
    /// overlay on the demand growth chart.
    pub fn adjusted_demand(&self, climate_multiplier: f32) -> Vec<(i32, f32)> {
        self.0
            .iter()
            .map(|r| (r.year, r.demand_projection_ml * climate_multiplier))
            .collect()
    }
}

/// Build the fixed planning forecast table.
pub fn planning_forecast() -> ForecastTable {
    let demand = [2850.0, 3020.0, 3180.0, 3350.0, 3520.0, 3700.0];
    let leakage = [19.8, 21.2, 22.1, 22.8, 23.2, 23.5];
    let risk = [7.2, 7.8, 8.1, 8.4, 8.7, 9.0];
    let investment = [
        45_000_000.0,
        52_000_000.0,
        48_000_000.0,
        55_000_000.0,
        62_000_000.0,
        68_000_000.0,
    ];
    let growth = [2.8, 2.9, 3.0, 3.1, 3.2, 3.3];

    let records = (0..6)
        .map(|i| ForecastRecord {
            year: 2025 + i as i32,
            demand_projection_ml: demand[i],
            ai_leakage_prediction_pct: leakage[i],
            climate_risk_score: risk[i],
            investment_required_r: investment[i],
            population_growth_pct: growth[i],
        })
        .collect();

    ForecastTable(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_2025_to_2030() {
        let table = planning_forecast();
        let years: Vec<i32> = table.0.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2025, 2026, 2027, 2028, 2029, 2030]);
    }

    #[test]
    fn test_terminal_year_matches_scenario_baselines() {
        let table = planning_forecast();
        let last = table.0.last().unwrap();
        assert_eq!(last.demand_projection_ml, 3700.0);
        assert_eq!(last.investment_required_r, 68_000_000.0);
    }

    #[test]
    fn test_demand_monotonically_rising() {
        let table = planning_forecast();
        for pair in table.0.windows(2) {
            assert!(pair[0].demand_projection_ml < pair[1].demand_projection_ml);
        }
    }

    #[test]
    fn test_adjusted_demand_scales() {
        let table = planning_forecast();
        let adjusted = table.adjusted_demand(1.1);
        assert_eq!(adjusted.len(), 6);
        assert!((adjusted[5].1 - 4070.0).abs() < 0.01);
    }

    #[test]
    fn test_adjusted_demand_identity_at_unit_multiplier() {
        let table = planning_forecast();
        for (record, (year, adjusted)) in table.0.iter().zip(table.adjusted_demand(1.0)) {
            assert_eq!(record.year, year);
            assert_eq!(record.demand_projection_ml, adjusted);
        }
    }
}
