//! Synthetic data model and analytics for the Manzi Water dashboard.
//!
//! Everything the dashboard renders comes from this crate: seeded
//! deterministic dataset generation, descriptive statistics, filter state,
//! and the 2030 scenario projector.

use bevy::prelude::*;

pub mod alerts;
pub mod calendar;
pub mod compliance;
pub mod customer;
pub mod dataset;
pub mod filters;
pub mod financial;
pub mod forecast;
pub mod iot;
pub mod projects;
pub mod quick_win;
pub mod rng;
pub mod sampling;
pub mod scenario;
pub mod stats;
pub mod water_security;
pub mod zones;

/// Registers dataset generation, filters, and the scenario projector.
pub struct AnalyticsPlugin;

impl Plugin for AnalyticsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            rng::DataRngPlugin,
            dataset::DatasetPlugin,
            scenario::ScenarioPlugin,
        ))
        .init_resource::<filters::DashboardFilters>()
        .init_resource::<quick_win::QuickWinInputs>();
    }
}
