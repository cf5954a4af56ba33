//! Executive Overview tab: headline KPIs, alerts, hotspots, quick wins.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use analytics::alerts::{AlertLevel, CriticalAlerts};
use analytics::customer::CustomerImpactHistory;
use analytics::filters::DashboardFilters;
use analytics::financial::FinancialHistory;
use analytics::quick_win::{
    QuickWinInputs, COST_PER_ML_RANGE, LEAKS_RANGE, LEAK_SIZE_RANGE, PAYBACK_MONTHS,
};
use analytics::stats::pct_change;
use analytics::water_security::WaterSecurityHistory;
use analytics::zones::leakage_hotspots;

use crate::formatting;
use crate::tabs::ActiveTab;
use crate::theme;
use crate::widgets::{self, MapBubble};

/// Year-over-year change of the latest value against the sample 12 months
/// earlier, when the series is long enough.
fn yoy_change(series: &[f32]) -> Option<f32> {
    if series.len() < 13 {
        return None;
    }
    let latest = *series.last()?;
    let year_ago = series[series.len() - 13];
    Some(pct_change(latest, year_ago))
}

fn yoy_note(series: &[f32]) -> String {
    match yoy_change(series) {
        Some(change) => {
            let arrow = if change >= 0.0 { "up" } else { "down" };
            format!("{arrow} {:.0}% YoY", change.abs())
        }
        None => "insufficient history".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn executive_ui(
    mut contexts: EguiContexts,
    active: Res<ActiveTab>,
    water: Res<WaterSecurityHistory>,
    fin: Res<FinancialHistory>,
    cust: Res<CustomerImpactHistory>,
    alerts: Res<CriticalAlerts>,
    filters: Res<DashboardFilters>,
    mut quick: ResMut<QuickWinInputs>,
) {
    if *active != ActiveTab::ExecutiveOverview {
        return;
    }
    let (Some(latest_water), Some(latest_fin), Some(latest_cust)) =
        (water.latest(), fin.latest(), cust.latest())
    else {
        return;
    };

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            // --- Headline KPIs ---
            ui.horizontal_wrapped(|ui| {
                let loss_series: Vec<f32> = water.0.iter().map(|r| r.water_loss_ml).collect();
                widgets::kpi_card(
                    ui,
                    "Water Loss",
                    &formatting::ml_per_month(latest_water.water_loss_ml),
                    &yoy_note(&loss_series),
                    theme::ALERT,
                );

                let revenue_loss = latest_fin.billing_amount_r - latest_fin.revenue_collected_r;
                widgets::kpi_card(
                    ui,
                    "Revenue Loss",
                    &formatting::rand_millions(revenue_loss),
                    &format!(
                        "Collection rate: {}",
                        formatting::pct(latest_fin.collection_rate_pct)
                    ),
                    theme::ALERT,
                );

                let efficiency = 100.0 - latest_water.pipe_leakage_rate_pct;
                let (eff_color, eff_note) = if efficiency < 85.0 {
                    (theme::WARN, "Below 85% target")
                } else {
                    (theme::SUCCESS, "Meets 85% target")
                };
                widgets::kpi_card(
                    ui,
                    "System Efficiency",
                    &formatting::pct(efficiency),
                    eff_note,
                    eff_color,
                );

                let csat_series: Vec<f32> = cust.0.iter().map(|r| r.csat_score).collect();
                widgets::kpi_card(
                    ui,
                    "Customer Satisfaction",
                    &format!("{:.1}/10", latest_cust.csat_score),
                    &yoy_note(&csat_series),
                    theme::ALERT,
                );
            });

            ui.add_space(8.0);

            // --- Critical alerts ---
            ui.heading("Critical Alerts");
            for alert in &alerts.0 {
                let color = match alert.level {
                    AlertLevel::Critical => theme::ALERT,
                    AlertLevel::Warning => theme::WARN,
                };
                widgets::status_row(ui, color, &format!("{}: {}", alert.headline, alert.detail));
            }

            ui.add_space(8.0);
            ui.separator();

            ui.columns(2, |columns| {
                // --- Leakage hotspot map ---
                columns[0].heading("Leakage Hotspot Analysis");
                let bubbles = hotspot_bubbles(&filters);
                widgets::bubble_map(&mut columns[0], &bubbles, 220.0);

                // --- Water loss vs investment ---
                columns[1].heading("Water Loss vs Infrastructure Investment");
                let months = filters.filter_months(&water.0, |r| r.month);
                let loss: Vec<f32> = months.iter().map(|r| r.water_loss_ml).collect();
                let capex: Vec<f32> = filters
                    .filter_months(&fin.0, |r| r.month)
                    .iter()
                    .map(|r| r.capex_r / 1_000_000.0)
                    .collect();
                widgets::line_over_bars(
                    &mut columns[1],
                    &loss,
                    theme::ALERT,
                    &capex,
                    theme::PRIMARY,
                    220.0,
                );
                columns[1].horizontal(|ui| {
                    ui.colored_label(theme::ALERT, "Water loss (Ml/month)");
                    ui.colored_label(theme::PRIMARY, "CapEx (R M)");
                });
            });

            ui.add_space(8.0);
            ui.separator();

            // --- Quick win calculator ---
            ui.heading("Quick Win Calculator");
            ui.add(
                egui::Slider::new(&mut quick.leaks_to_fix, LEAKS_RANGE)
                    .text("Key leaks to fix"),
            );
            ui.add(
                egui::Slider::new(&mut quick.avg_leak_size_ml, LEAK_SIZE_RANGE)
                    .text("Average leak size (Ml/month)"),
            );
            ui.add(
                egui::Slider::new(&mut quick.cost_per_ml_r, COST_PER_ML_RANGE)
                    .text("Cost per Ml (R)"),
            );

            widgets::metric(
                ui,
                "Monthly savings",
                &formatting::rand_exact(quick.monthly_savings_r()),
                "",
                theme::SUCCESS,
            );
            widgets::metric(
                ui,
                "Annual savings",
                &formatting::rand_exact(quick.annual_savings_r()),
                &format!("{PAYBACK_MONTHS} months payback"),
                theme::SUCCESS,
            );
        });
    });
}

/// Build the hotspot bubbles for the currently selected zones.
fn hotspot_bubbles(filters: &DashboardFilters) -> Vec<MapBubble> {
    let hotspots: Vec<_> = leakage_hotspots()
        .into_iter()
        .filter(|h| filters.zone_selected(h.zone))
        .collect();

    let max_leakage = hotspots
        .iter()
        .map(|h| h.leakage_ml)
        .fold(0.0_f32, f32::max)
        .max(1.0);
    let max_loss = hotspots
        .iter()
        .map(|h| h.monthly_loss_r)
        .fold(0.0_f32, f32::max)
        .max(1.0);

    // Normalize map coordinates over the zone extents.
    let lats: Vec<f32> = hotspots.iter().map(|h| h.zone.coordinates().0).collect();
    let lons: Vec<f32> = hotspots.iter().map(|h| h.zone.coordinates().1).collect();
    let (lat_min, lat_max) = analytics::stats::range(&lats);
    let (lon_min, lon_max) = analytics::stats::range(&lons);
    let lat_span = (lat_max - lat_min).max(1e-6);
    let lon_span = (lon_max - lon_min).max(1e-6);

    hotspots
        .into_iter()
        .map(|h| {
            let (lat, lon) = h.zone.coordinates();
            MapBubble {
                label: h.zone.name().to_string(),
                x: 0.1 + (lon - lon_min) / lon_span * 0.8,
                // North at the top.
                y: 0.1 + (lat_max - lat) / lat_span * 0.8,
                size: h.leakage_ml / max_leakage,
                intensity: h.monthly_loss_r / max_loss,
            }
        })
        .collect()
}
