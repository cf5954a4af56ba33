//! Executive critical alerts derived from the generated datasets.

use bevy::prelude::*;

use crate::customer::CustomerImpactHistory;
use crate::financial::FinancialHistory;
use crate::stats::{mean, pct_change};
use crate::zones::leakage_hotspots;

/// Compliance threshold below which a month is flagged, in percent.
pub const COMPLIANCE_THRESHOLD_PCT: f32 = 95.0;

/// How severely an alert should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Critical,
    Warning,
}

/// A single alert line on the executive overview.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub level: AlertLevel,
    pub headline: String,
    pub detail: String,
}

/// The current alert list.
#[derive(Resource, Debug, Clone, Default)]
pub struct CriticalAlerts(pub Vec<Alert>);

/// Build the executive alert list from the financial and customer series.
pub fn build_alerts(
    financial: &FinancialHistory,
    customer: &CustomerImpactHistory,
) -> CriticalAlerts {
    let mut alerts = Vec::new();

    // Worst leakage hotspot.
    if let Some(worst) = leakage_hotspots().first() {
        alerts.push(Alert {
            level: AlertLevel::Critical,
            headline: worst.zone.name().to_string(),
            detail: format!(
                "{:.0} Ml/month leakage = R{:.0}K monthly loss",
                worst.leakage_ml,
                worst.monthly_loss_r / 1_000.0
            ),
        });
    }

    // Energy cost growth: latest month vs the first-year average.
    if financial.0.len() >= 12 {
        let first_year: Vec<f32> = financial.0[..12].iter().map(|r| r.energy_costs_r).collect();
        let baseline = mean(&first_year);
        if let Some(latest) = financial.latest() {
            let growth = pct_change(latest.energy_costs_r, baseline);
            if growth > 25.0 {
                alerts.push(Alert {
                    level: AlertLevel::Critical,
                    headline: "Load Shedding Impact".to_string(),
                    detail: format!("Energy costs up {growth:.0}% vs 2022"),
                });
            }
        }
    }

    // SANS 241 compliance: months in the last year below threshold.
    let recent = customer.0.iter().rev().take(12);
    let low_months = recent
        .filter(|r| r.sans241_compliance_pct < COMPLIANCE_THRESHOLD_PCT)
        .count();
    if low_months > 0 {
        alerts.push(Alert {
            level: AlertLevel::Warning,
            headline: "SANS 241 Compliance".to_string(),
            detail: format!(
                "{low_months} of the last 12 months below the {COMPLIANCE_THRESHOLD_PCT:.0}% threshold"
            ),
        });
    }

    CriticalAlerts(alerts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{customer, financial};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_alerts_include_worst_hotspot() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let fin = financial::generate(&mut rng);
        let cust = customer::generate(&mut rng);

        let alerts = build_alerts(&fin, &cust);
        assert!(!alerts.0.is_empty());
        assert_eq!(alerts.0[0].headline, "Alexandra Central");
        assert_eq!(alerts.0[0].level, AlertLevel::Critical);
    }

    #[test]
    fn test_empty_histories_still_alert_on_hotspots() {
        let alerts = build_alerts(&FinancialHistory::default(), &CustomerImpactHistory::default());
        // The static hotspot table always produces the leakage alert.
        assert_eq!(alerts.0.len(), 1);
    }

    #[test]
    fn test_alerts_deterministic() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let fin_a = financial::generate(&mut rng_a);
        let cust_a = customer::generate(&mut rng_a);

        let mut rng_b = ChaCha8Rng::seed_from_u64(7);
        let fin_b = financial::generate(&mut rng_b);
        let cust_b = customer::generate(&mut rng_b);

        assert_eq!(build_alerts(&fin_a, &cust_a).0, build_alerts(&fin_b, &cust_b).0);
    }
}
