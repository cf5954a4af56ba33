//! Operations tab: compliance, station fleet, interruptions, telemetry.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use analytics::compliance::{compliance_parameters, ComplianceStatus};
use analytics::customer::CustomerImpactHistory;
use analytics::filters::DashboardFilters;
use analytics::iot::IotFleet;
use analytics::stats::interruptions_by_zone;

use crate::formatting;
use crate::tabs::ActiveTab;
use crate::theme;
use crate::widgets;

/// Number of critical stations listed in the telemetry table.
const CRITICAL_TABLE_ROWS: usize = 10;

pub fn operations_ui(
    mut contexts: EguiContexts,
    active: Res<ActiveTab>,
    fleet: Res<IotFleet>,
    cust: Res<CustomerImpactHistory>,
    filters: Res<DashboardFilters>,
) {
    if *active != ActiveTab::Operations {
        return;
    }

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.columns(2, |columns| {
                // --- SANS 241 compliance ---
                columns[0].heading("SANS 241 Compliance");
                for param in compliance_parameters() {
                    let (color, note) = match param.status {
                        ComplianceStatus::Compliant => (theme::SUCCESS, "Compliant"),
                        ComplianceStatus::AttentionNeeded => (theme::WARN, "Attention needed"),
                        ComplianceStatus::NonCompliant => (theme::ALERT, "Non-compliant"),
                    };
                    widgets::status_row(
                        &mut columns[0],
                        color,
                        &format!(
                            "{}: {} (limit {}) - {note}",
                            param.name, param.current_value, param.sans241_limit
                        ),
                    );
                }

                // --- Station fleet status ---
                columns[1].heading("Pump Station Status");
                let summary = fleet.summary();
                widgets::metric(
                    &mut columns[1],
                    "Online",
                    &summary.online.to_string(),
                    "",
                    theme::SUCCESS,
                );
                widgets::metric(
                    &mut columns[1],
                    "Maintenance required",
                    &summary.maintenance.to_string(),
                    "",
                    theme::WARN,
                );
                widgets::metric(
                    &mut columns[1],
                    "Critical failures",
                    &summary.critical.to_string(),
                    "",
                    theme::ALERT,
                );

                columns[1].add_space(4.0);
                widgets::share_bars(
                    &mut columns[1],
                    &[
                        ("Online".to_string(), summary.online as f32, theme::SUCCESS),
                        (
                            "Maintenance".to_string(),
                            summary.maintenance as f32,
                            theme::WARN,
                        ),
                        ("Critical".to_string(), summary.critical as f32, theme::ALERT),
                    ],
                );
            });

            ui.add_space(8.0);
            ui.separator();

            // --- Interruptions by zone ---
            ui.heading("Service Interruptions by Zone");
            let records = filters.filter_months(&cust.0, |r| r.month);
            let by_zone = interruptions_by_zone(&records);
            let entries: Vec<(String, f32, egui::Color32)> = by_zone
                .iter()
                .filter(|z| filters.zone_selected(z.zone))
                .map(|z| {
                    // Longer average downtime shifts the bar toward red.
                    let intensity = (z.avg_downtime_hours / 24.0).clamp(0.0, 1.0);
                    (
                        format!(
                            "{} (avg {:.1}h down)",
                            z.zone.name(),
                            z.avg_downtime_hours
                        ),
                        z.total_interruptions,
                        widgets::blend_to_red(intensity),
                    )
                })
                .collect();
            widgets::h_bar_chart(ui, &entries);

            ui.add_space(8.0);
            ui.separator();

            // --- Critical station telemetry ---
            ui.heading("Critical Station Telemetry");
            let critical = fleet.critical_stations();
            if critical.is_empty() {
                ui.colored_label(theme::SUCCESS, "No stations in critical state.");
            } else {
                egui::Grid::new("critical_stations")
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Station");
                        ui.strong("Zone");
                        ui.strong("Flow (L/min)");
                        ui.strong("Pressure (kPa)");
                        ui.strong("pH");
                        ui.end_row();

                        for station in critical.iter().take(CRITICAL_TABLE_ROWS) {
                            ui.label(&station.station_id);
                            ui.label(station.zone.name());
                            ui.label(format!("{:.0}", station.flow_rate_l_min));
                            ui.label(format!("{:.0}", station.pressure_kpa));
                            ui.label(format!("{:.1}", station.ph_level));
                            ui.end_row();
                        }
                    });
                if critical.len() > CRITICAL_TABLE_ROWS {
                    ui.colored_label(
                        theme::TEXT_MUTED,
                        format!(
                            "Showing {CRITICAL_TABLE_ROWS} of {} critical stations ({})",
                            critical.len(),
                            formatting::pct(
                                critical.len() as f32 / fleet.0.len().max(1) as f32 * 100.0
                            )
                        ),
                    );
                }
            }
        });
    });
}
