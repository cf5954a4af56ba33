//! Descriptive statistics over the generated series.

use crate::customer::CustomerImpactRecord;
use crate::zones::{Zone, ALL_ZONES};

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Minimum and maximum of a slice; `(0.0, 0.0)` when empty.
pub fn range(values: &[f32]) -> (f32, f32) {
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if min > max {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

/// Percentage change of `current` relative to `baseline`.
pub fn pct_change(current: f32, baseline: f32) -> f32 {
    if baseline == 0.0 {
        return 0.0;
    }
    (current - baseline) / baseline * 100.0
}

/// Interruption totals for one zone, aggregated over the filtered series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneInterruptions {
    pub zone: Zone,
    pub total_interruptions: f32,
    pub avg_downtime_hours: f32,
}

/// Group service interruptions by most-affected zone.
///
/// Zones that never appear in the records are omitted.
pub fn interruptions_by_zone(records: &[&CustomerImpactRecord]) -> Vec<ZoneInterruptions> {
    let mut result = Vec::new();
    for zone in ALL_ZONES {
        let matching: Vec<&&CustomerImpactRecord> = records
            .iter()
            .filter(|r| r.zone_most_affected == zone)
            .collect();
        if matching.is_empty() {
            continue;
        }
        let total: f32 = matching.iter().map(|r| r.service_interruptions).sum();
        let downtime: Vec<f32> = matching.iter().map(|r| r.avg_downtime_hours).collect();
        result.push(ZoneInterruptions {
            zone,
            total_interruptions: total,
            avg_downtime_hours: mean(&downtime),
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Month;

    fn record(zone: Zone, interruptions: f32, downtime: f32) -> CustomerImpactRecord {
        CustomerImpactRecord {
            month: Month {
                year: 2024,
                month: 1,
            },
            service_interruptions: interruptions,
            avg_downtime_hours: downtime,
            sans241_compliance_pct: 95.0,
            csat_score: 7.0,
            complaints: 50.0,
            zone_most_affected: zone,
            population_served: 2_500_000.0,
        }
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_range() {
        assert_eq!(range(&[3.0, 1.0, 2.0]), (1.0, 3.0));
        assert_eq!(range(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_pct_change() {
        assert!((pct_change(110.0, 100.0) - 10.0).abs() < 1e-6);
        assert!((pct_change(80.0, 100.0) + 20.0).abs() < 1e-6);
        assert_eq!(pct_change(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_interruptions_by_zone_aggregates() {
        let a = record(Zone::Diepsloot, 10.0, 4.0);
        let b = record(Zone::Diepsloot, 20.0, 6.0);
        let c = record(Zone::Sandton, 5.0, 2.0);
        let records = vec![&a, &b, &c];

        let summary = interruptions_by_zone(&records);
        assert_eq!(summary.len(), 2);

        let diepsloot = summary
            .iter()
            .find(|s| s.zone == Zone::Diepsloot)
            .unwrap();
        assert_eq!(diepsloot.total_interruptions, 30.0);
        assert_eq!(diepsloot.avg_downtime_hours, 5.0);
    }

    #[test]
    fn test_interruptions_by_zone_omits_absent_zones() {
        let a = record(Zone::Midrand, 1.0, 1.0);
        let records = vec![&a];
        let summary = interruptions_by_zone(&records);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].zone, Zone::Midrand);
    }
}
