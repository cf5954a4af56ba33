//! IoT telemetry fleet: 100 pump/metering stations with live readings.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::sampling::{pick_uniform, pick_weighted};
use crate::zones::{Zone, ALL_ZONES};

/// Number of telemetry stations in the fleet.
pub const STATION_COUNT: usize = 100;

/// Operational status reported by a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationStatus {
    Online,
    Maintenance,
    Critical,
}

impl StationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StationStatus::Online => "ONLINE",
            StationStatus::Maintenance => "MAINTENANCE",
            StationStatus::Critical => "CRITICAL",
        }
    }
}

/// Relative likelihood of each station status.
const STATUS_WEIGHTS: [(StationStatus, f32); 3] = [
    (StationStatus::Online, 0.75),
    (StationStatus::Maintenance, 0.15),
    (StationStatus::Critical, 0.10),
];

/// A single telemetry station and its latest readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IotStation {
    /// Station identifier, e.g. "MNZ007".
    pub station_id: String,
    pub zone: Zone,
    pub status: StationStatus,
    pub flow_rate_l_min: f32,
    pub pressure_kpa: f32,
    pub temperature_c: f32,
    pub ph_level: f32,
    pub chlorine_mg_l: f32,
}

/// The full telemetry fleet.
#[derive(Resource, Debug, Clone, Default)]
pub struct IotFleet(pub Vec<IotStation>);

/// Station counts by status, used for the operations tab metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetSummary {
    pub online: u32,
    pub maintenance: u32,
    pub critical: u32,
}

impl FleetSummary {
    pub fn total(&self) -> u32 {
        self.online + self.maintenance + self.critical
    }
}

impl IotFleet {
    /// Count stations by status.
    pub fn summary(&self) -> FleetSummary {
        let mut summary = FleetSummary::default();
        for station in &self.0 {
            match station.status {
                StationStatus::Online => summary.online += 1,
                StationStatus::Maintenance => summary.maintenance += 1,
                StationStatus::Critical => summary.critical += 1,
            }
        }
        summary
    }

    /// Stations in critical state, for the operations tab table.
    pub fn critical_stations(&self) -> Vec<&IotStation> {
        self.0
            .iter()
            .filter(|s| s.status == StationStatus::Critical)
            .collect()
    }
}

/// Generate the telemetry fleet.
pub fn generate(rng: &mut ChaCha8Rng) -> IotFleet {
    let stations = (1..=STATION_COUNT)
        .map(|i| IotStation {
            station_id: format!("MNZ{i:03}"),
            zone: pick_uniform(rng, &ALL_ZONES),
            status: pick_weighted(rng, &STATUS_WEIGHTS),
            flow_rate_l_min: rng.gen_range(0.0..550.0),
            pressure_kpa: rng.gen_range(0.0..280.0),
            temperature_c: rng.gen_range(15.0..25.0),
            ph_level: rng.gen_range(6.5..8.0),
            chlorine_mg_l: rng.gen_range(0.2..1.2),
        })
        .collect();

    IotFleet(stations)
}
