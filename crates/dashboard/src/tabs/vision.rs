//! 2030 Vision tab: interactive scenario simulator and demand projections.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use analytics::forecast::ForecastTable;
use analytics::scenario::{
    CurrentProjection, ScenarioControls, ALL_INVESTMENT_LEVELS, SEVERITY_MAX, SEVERITY_MIN,
    UNMITIGATED_FAILURE_RISK_PCT,
};

use crate::formatting;
use crate::tabs::ActiveTab;
use crate::theme;
use crate::widgets;

pub fn vision_ui(
    mut contexts: EguiContexts,
    active: Res<ActiveTab>,
    mut controls: ResMut<ScenarioControls>,
    projection: Res<CurrentProjection>,
    forecast: Res<ForecastTable>,
) {
    if *active != ActiveTab::Vision2030 {
        return;
    }

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Interactive Scenario Simulator");

            // The slider and selector can only produce valid projector
            // inputs; out-of-range severities are rejected at the API level.
            ui.add(
                egui::Slider::new(&mut controls.climate_severity, SEVERITY_MIN..=SEVERITY_MAX)
                    .text("Climate change severity"),
            );
            egui::ComboBox::from_label("Investment level")
                .selected_text(controls.investment_level.label())
                .show_ui(ui, |ui| {
                    for level in ALL_INVESTMENT_LEVELS {
                        ui.selectable_value(
                            &mut controls.investment_level,
                            level,
                            level.label(),
                        );
                    }
                });

            ui.add_space(8.0);
            ui.separator();

            let p = &projection.0;

            widgets::metric(
                ui,
                "2030 demand projection",
                &format!("{:.0} Ml", p.adjusted_demand_ml),
                &format!(
                    "{} climate adjustment",
                    formatting::signed(p.demand_delta_ml, 0, "Ml")
                ),
                if p.demand_delta_ml > 0.0 {
                    theme::WARN
                } else {
                    theme::SUCCESS
                },
            );

            widgets::metric(
                ui,
                "System failure risk",
                &formatting::pct(p.failure_probability_pct),
                &format!(
                    "without intervention: {}",
                    formatting::pct(UNMITIGATED_FAILURE_RISK_PCT)
                ),
                risk_color(p.failure_probability_pct),
            );

            widgets::metric(
                ui,
                "Investment required",
                &formatting::rand_millions(p.required_investment_r),
                &format!(
                    "{} climate premium",
                    formatting::rand_millions(p.investment_delta_r)
                ),
                theme::PRIMARY,
            );

            ui.add_space(8.0);
            ui.separator();

            // --- Demand growth projections ---
            ui.heading("Demand Growth Projections");
            let baseline: Vec<f32> = forecast.0.iter().map(|r| r.demand_projection_ml).collect();
            let adjusted: Vec<f32> = forecast
                .adjusted_demand(p.climate_multiplier)
                .into_iter()
                .map(|(_, demand)| demand)
                .collect();

            widgets::line_chart(ui, &baseline, theme::PRIMARY, 180.0, None);
            widgets::line_chart(ui, &adjusted, theme::WARN, 180.0, None);
            ui.horizontal(|ui| {
                ui.colored_label(theme::PRIMARY, "Planning baseline");
                ui.colored_label(theme::WARN, "Climate-adjusted");
                if let (Some(first), Some(last)) = (forecast.0.first(), forecast.0.last()) {
                    ui.colored_label(
                        theme::TEXT_MUTED,
                        format!("{}..{}", first.year, last.year),
                    );
                }
            });

            ui.add_space(8.0);

            // --- Forecast table ---
            egui::Grid::new("forecast_table").striped(true).show(ui, |ui| {
                ui.strong("Year");
                ui.strong("Demand (Ml)");
                ui.strong("Leakage forecast");
                ui.strong("Climate risk");
                ui.strong("Investment");
                ui.end_row();

                for record in &forecast.0 {
                    ui.label(record.year.to_string());
                    ui.label(format!("{:.0}", record.demand_projection_ml));
                    ui.label(formatting::pct(record.ai_leakage_prediction_pct));
                    ui.label(format!("{:.1}/10", record.climate_risk_score));
                    ui.label(formatting::rand_millions(record.investment_required_r));
                    ui.end_row();
                }
            });
        });
    });
}

fn risk_color(failure_pct: f32) -> egui::Color32 {
    if failure_pct >= 15.0 {
        theme::ALERT
    } else if failure_pct >= 7.5 {
        theme::WARN
    } else {
        theme::SUCCESS
    }
}
