//! Sidebar filter state: reporting month range and zone multiselect.

use bevy::prelude::*;

use crate::calendar::{Month, SERIES_END};
use crate::zones::{Zone, ALL_ZONES, DEFAULT_ZONES};

/// Filters applied to every historical view on the dashboard.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DashboardFilters {
    /// First month shown, inclusive.
    pub from: Month,
    /// Last month shown, inclusive.
    pub to: Month,
    /// Selection flag per zone, indexed in `ALL_ZONES` order.
    selected: [bool; ALL_ZONES.len()],
}

impl Default for DashboardFilters {
    fn default() -> Self {
        let mut selected = [false; ALL_ZONES.len()];
        for zone in DEFAULT_ZONES {
            selected[zone_index(zone)] = true;
        }
        Self {
            // Defaults to the most recent full year.
            from: Month {
                year: 2024,
                month: 1,
            },
            to: SERIES_END,
            selected,
        }
    }
}

fn zone_index(zone: Zone) -> usize {
    ALL_ZONES
        .iter()
        .position(|z| *z == zone)
        .unwrap_or_default()
}

impl DashboardFilters {
    pub fn contains_month(&self, month: Month) -> bool {
        month >= self.from && month <= self.to
    }

    pub fn zone_selected(&self, zone: Zone) -> bool {
        self.selected[zone_index(zone)]
    }

    pub fn set_zone(&mut self, zone: Zone, selected: bool) {
        self.selected[zone_index(zone)] = selected;
    }

    /// Currently selected zones, in display order.
    pub fn selected_zones(&self) -> Vec<Zone> {
        ALL_ZONES
            .iter()
            .copied()
            .filter(|z| self.zone_selected(*z))
            .collect()
    }

    /// Restrict a monthly series to the selected month range.
    pub fn filter_months<'a, T>(
        &self,
        records: &'a [T],
        month_of: impl Fn(&T) -> Month,
    ) -> Vec<&'a T> {
        records
            .iter()
            .filter(|r| self.contains_month(month_of(r)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_is_last_year() {
        let filters = DashboardFilters::default();
        assert_eq!(filters.from.year, 2024);
        assert_eq!(filters.to, SERIES_END);
    }

    #[test]
    fn test_default_zone_selection() {
        let filters = DashboardFilters::default();
        assert_eq!(filters.selected_zones(), DEFAULT_ZONES.to_vec());
        assert!(!filters.zone_selected(Zone::Sandton));
    }

    #[test]
    fn test_set_zone() {
        let mut filters = DashboardFilters::default();
        filters.set_zone(Zone::Sandton, true);
        assert!(filters.zone_selected(Zone::Sandton));
        filters.set_zone(Zone::Sandton, false);
        assert!(!filters.zone_selected(Zone::Sandton));
    }

    #[test]
    fn test_contains_month_inclusive() {
        let filters = DashboardFilters::default();
        assert!(filters.contains_month(filters.from));
        assert!(filters.contains_month(filters.to));
        assert!(!filters.contains_month(Month {
            year: 2023,
            month: 12
        }));
    }

    #[test]
    fn test_filter_months() {
        let filters = DashboardFilters::default();
        let months: Vec<Month> = crate::calendar::series_months();
        let kept = filters.filter_months(&months, |m| *m);
        assert_eq!(kept.len(), 12);
        assert!(kept.iter().all(|m| m.year == 2024));
    }
}
