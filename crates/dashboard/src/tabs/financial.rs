//! Financial tab: collections, energy costs, ROI, project pipeline.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use analytics::filters::DashboardFilters;
use analytics::financial::FinancialHistory;
use analytics::projects::project_pipeline;
use analytics::stats::{mean, pct_change};

use crate::formatting;
use crate::tabs::ActiveTab;
use crate::theme;
use crate::widgets;

/// Revenue collection target, percent.
const COLLECTION_TARGET_PCT: f32 = 85.0;

pub fn financial_ui(
    mut contexts: EguiContexts,
    active: Res<ActiveTab>,
    fin: Res<FinancialHistory>,
    filters: Res<DashboardFilters>,
) {
    if *active != ActiveTab::Financial {
        return;
    }
    let Some(latest) = fin.latest() else {
        return;
    };

    // Baselines: first-year averages.
    let first_year = &fin.0[..fin.0.len().min(12)];
    let baseline_collection = mean(
        &first_year
            .iter()
            .map(|r| r.collection_rate_pct)
            .collect::<Vec<f32>>(),
    );
    let baseline_energy = mean(
        &first_year
            .iter()
            .map(|r| r.energy_costs_r)
            .collect::<Vec<f32>>(),
    );
    let baseline_roi = mean(
        &first_year
            .iter()
            .map(|r| r.infrastructure_roi_pct)
            .collect::<Vec<f32>>(),
    );

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            // --- Headline metrics ---
            let collection_delta = latest.collection_rate_pct - baseline_collection;
            widgets::metric(
                ui,
                "Revenue collection rate",
                &formatting::pct(latest.collection_rate_pct),
                &format!("{} vs 2022", formatting::signed(collection_delta, 1, "pts")),
                if collection_delta >= 0.0 {
                    theme::SUCCESS
                } else {
                    theme::ALERT
                },
            );

            let energy_growth = pct_change(latest.energy_costs_r, baseline_energy);
            widgets::metric(
                ui,
                "Energy costs",
                &formatting::rand_millions(latest.energy_costs_r),
                &format!("{} vs 2022", formatting::signed(energy_growth, 0, "%")),
                theme::ALERT,
            );

            let roi_delta = latest.infrastructure_roi_pct - baseline_roi;
            widgets::metric(
                ui,
                "Infrastructure ROI",
                &formatting::pct(latest.infrastructure_roi_pct),
                &format!("{} vs 2022", formatting::signed(roi_delta, 1, "pts")),
                if roi_delta >= 0.0 {
                    theme::SUCCESS
                } else {
                    theme::ALERT
                },
            );

            ui.add_space(8.0);
            ui.separator();

            ui.columns(2, |columns| {
                // --- Collection trend ---
                columns[0].heading("Revenue Collection Trend");
                let filtered = filters.filter_months(&fin.0, |r| r.month);
                let rates: Vec<f32> = filtered.iter().map(|r| r.collection_rate_pct).collect();
                widgets::line_chart(
                    &mut columns[0],
                    &rates,
                    theme::PRIMARY,
                    200.0,
                    Some((COLLECTION_TARGET_PCT, theme::ALERT)),
                );
                columns[0].colored_label(
                    theme::TEXT_MUTED,
                    format!("Target: {COLLECTION_TARGET_PCT:.0}%"),
                );

                // --- Energy cost vs load shedding ---
                columns[1].heading("Energy Cost vs Load Shedding");
                let points: Vec<(f32, f32)> = filtered
                    .iter()
                    .map(|r| (r.load_shedding_hours, r.energy_costs_r / 1_000_000.0))
                    .collect();
                widgets::scatter_plot(&mut columns[1], &points, theme::WARN, 200.0);
                columns[1].colored_label(
                    theme::TEXT_MUTED,
                    "x: load shedding hours, y: energy costs (R M)",
                );
            });

            ui.add_space(8.0);
            ui.separator();

            // --- Project pipeline ---
            ui.heading("Project Pipeline Tracker");
            let pipeline = project_pipeline();
            let scale_max = pipeline
                .iter()
                .map(|c| c.total() as f32)
                .fold(0.0, f32::max);
            for category in &pipeline {
                widgets::stacked_bar(
                    ui,
                    &format!(
                        "{} (budget {})",
                        category.name,
                        formatting::rand_millions(category.budget_r)
                    ),
                    &[
                        (category.completed as f32, theme::SUCCESS),
                        (category.in_progress as f32, theme::WARN),
                        (category.planned as f32, theme::ALERT),
                    ],
                    scale_max,
                );
            }
            ui.horizontal(|ui| {
                ui.colored_label(theme::SUCCESS, "Completed");
                ui.colored_label(theme::WARN, "In progress");
                ui.colored_label(theme::ALERT, "Planned");
            });
        });
    });
}
