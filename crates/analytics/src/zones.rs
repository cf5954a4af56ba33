//! Distribution zones served by the utility.
//!
//! Six fixed zones with display names, map coordinates, and the static
//! leakage hotspot table shown on the executive overview.

use serde::{Deserialize, Serialize};

/// A water distribution zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    SowetoNorth,
    AlexandraCentral,
    TembisaEast,
    Diepsloot,
    Midrand,
    Sandton,
}

/// All zones, in display order.
pub const ALL_ZONES: [Zone; 6] = [
    Zone::SowetoNorth,
    Zone::AlexandraCentral,
    Zone::TembisaEast,
    Zone::Diepsloot,
    Zone::Midrand,
    Zone::Sandton,
];

/// Zones selected by default in the sidebar multiselect.
pub const DEFAULT_ZONES: [Zone; 4] = [
    Zone::SowetoNorth,
    Zone::AlexandraCentral,
    Zone::TembisaEast,
    Zone::Diepsloot,
];

impl Zone {
    pub fn name(&self) -> &'static str {
        match self {
            Zone::SowetoNorth => "Soweto North",
            Zone::AlexandraCentral => "Alexandra Central",
            Zone::TembisaEast => "Tembisa East",
            Zone::Diepsloot => "Diepsloot",
            Zone::Midrand => "Midrand",
            Zone::Sandton => "Sandton",
        }
    }

    /// Approximate map coordinates (latitude, longitude).
    pub fn coordinates(&self) -> (f32, f32) {
        match self {
            Zone::SowetoNorth => (-26.2, 27.9),
            Zone::AlexandraCentral => (-26.1, 28.1),
            Zone::TembisaEast => (-25.9, 28.2),
            Zone::Diepsloot => (-25.9, 28.0),
            Zone::Midrand => (-25.9, 28.1),
            Zone::Sandton => (-26.1, 28.0),
        }
    }
}

/// One row of the leakage hotspot table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneLeakage {
    pub zone: Zone,
    /// Leakage volume in Ml per month.
    pub leakage_ml: f32,
    /// Revenue lost to this zone's leakage, Rand per month.
    pub monthly_loss_r: f32,
}

/// Static per-zone leakage hotspot figures, worst zone first.
pub fn leakage_hotspots() -> Vec<ZoneLeakage> {
    vec![
        ZoneLeakage {
            zone: Zone::AlexandraCentral,
            leakage_ml: 23.0,
            monthly_loss_r: 400_000.0,
        },
        ZoneLeakage {
            zone: Zone::SowetoNorth,
            leakage_ml: 18.0,
            monthly_loss_r: 320_000.0,
        },
        ZoneLeakage {
            zone: Zone::Diepsloot,
            leakage_ml: 15.0,
            monthly_loss_r: 260_000.0,
        },
        ZoneLeakage {
            zone: Zone::TembisaEast,
            leakage_ml: 12.0,
            monthly_loss_r: 210_000.0,
        },
        ZoneLeakage {
            zone: Zone::Midrand,
            leakage_ml: 8.0,
            monthly_loss_r: 140_000.0,
        },
        ZoneLeakage {
            zone: Zone::Sandton,
            leakage_ml: 5.0,
            monthly_loss_r: 90_000.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zones_unique_names() {
        let mut names: Vec<&str> = ALL_ZONES.iter().map(Zone::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL_ZONES.len());
    }

    #[test]
    fn test_hotspots_cover_every_zone() {
        let hotspots = leakage_hotspots();
        assert_eq!(hotspots.len(), ALL_ZONES.len());
        for zone in ALL_ZONES {
            assert!(hotspots.iter().any(|h| h.zone == zone));
        }
    }

    #[test]
    fn test_hotspots_sorted_worst_first() {
        let hotspots = leakage_hotspots();
        for pair in hotspots.windows(2) {
            assert!(pair[0].leakage_ml >= pair[1].leakage_ml);
        }
    }

    #[test]
    fn test_default_zones_are_subset() {
        for zone in DEFAULT_ZONES {
            assert!(ALL_ZONES.contains(&zone));
        }
    }
}
