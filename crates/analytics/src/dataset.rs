//! Dataset lifecycle: startup generation and sidebar-driven regeneration.

use bevy::prelude::*;

use crate::alerts::{build_alerts, CriticalAlerts};
use crate::customer::{self, CustomerImpactHistory};
use crate::financial::{self, FinancialHistory};
use crate::forecast::planning_forecast;
use crate::iot::{self, IotFleet};
use crate::rng::DataRng;
use crate::water_security::{self, WaterSecurityHistory};

/// Request to rebuild every synthetic dataset from a fresh seed.
#[derive(Event, Debug, Clone, Copy)]
pub struct RegenerateDataset {
    pub seed: u64,
}

/// Fill every dataset resource from the RNG. Generation order is fixed so
/// a given seed always yields the same datasets.
#[allow(clippy::too_many_arguments)]
fn populate(
    rng: &mut DataRng,
    water: &mut WaterSecurityHistory,
    fin: &mut FinancialHistory,
    cust: &mut CustomerImpactHistory,
    fleet: &mut IotFleet,
    alerts: &mut CriticalAlerts,
) {
    *water = water_security::generate(&mut rng.0);
    *fin = financial::generate(&mut rng.0);
    *cust = customer::generate(&mut rng.0);
    *fleet = iot::generate(&mut rng.0);
    *alerts = build_alerts(fin, cust);
}

/// Generate all datasets once at startup.
#[allow(clippy::too_many_arguments)]
pub fn generate_datasets(
    mut rng: ResMut<DataRng>,
    mut water: ResMut<WaterSecurityHistory>,
    mut fin: ResMut<FinancialHistory>,
    mut cust: ResMut<CustomerImpactHistory>,
    mut fleet: ResMut<IotFleet>,
    mut alerts: ResMut<CriticalAlerts>,
) {
    populate(
        &mut rng,
        &mut water,
        &mut fin,
        &mut cust,
        &mut fleet,
        &mut alerts,
    );
    info!(
        "generated datasets: {} months, {} stations, {} alerts",
        water.0.len(),
        fleet.0.len(),
        alerts.0.len()
    );
}

/// Rebuild all datasets when the sidebar requests a reseed.
#[allow(clippy::too_many_arguments)]
pub fn handle_regenerate(
    mut events: EventReader<RegenerateDataset>,
    mut rng: ResMut<DataRng>,
    mut water: ResMut<WaterSecurityHistory>,
    mut fin: ResMut<FinancialHistory>,
    mut cust: ResMut<CustomerImpactHistory>,
    mut fleet: ResMut<IotFleet>,
    mut alerts: ResMut<CriticalAlerts>,
) {
    let Some(request) = events.read().last().copied() else {
        return;
    };
    rng.reseed(request.seed);
    populate(
        &mut rng,
        &mut water,
        &mut fin,
        &mut cust,
        &mut fleet,
        &mut alerts,
    );
    info!("regenerated datasets with seed {}", request.seed);
}

pub struct DatasetPlugin;

impl Plugin for DatasetPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RegenerateDataset>()
            .init_resource::<WaterSecurityHistory>()
            .init_resource::<FinancialHistory>()
            .init_resource::<CustomerImpactHistory>()
            .init_resource::<IotFleet>()
            .init_resource::<CriticalAlerts>()
            .insert_resource(planning_forecast())
            .add_systems(Startup, generate_datasets)
            .add_systems(Update, handle_regenerate);
    }
}
