//! Left control panel: month range, zone multiselect, dataset seed.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use analytics::calendar::{Month, SERIES_LEN};
use analytics::dataset::RegenerateDataset;
use analytics::filters::DashboardFilters;
use analytics::rng::DEFAULT_SEED;
use analytics::zones::ALL_ZONES;

use crate::theme;

/// Seed entered in the sidebar, applied on "Regenerate".
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedInput(pub u64);

impl Default for SeedInput {
    fn default() -> Self {
        Self(DEFAULT_SEED)
    }
}

pub fn sidebar_ui(
    mut contexts: EguiContexts,
    mut filters: ResMut<DashboardFilters>,
    mut seed: ResMut<SeedInput>,
    mut regenerate: EventWriter<RegenerateDataset>,
) {
    egui::SidePanel::left("manzi_controls")
        .default_width(210.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_space(6.0);
            ui.heading("Dashboard Controls");
            ui.separator();

            ui.label("Reporting period");
            let mut from = filters.from.series_offset().unwrap_or(0);
            let mut to = filters.to.series_offset().unwrap_or(SERIES_LEN - 1);

            ui.add(
                egui::Slider::new(&mut from, 0..=SERIES_LEN - 1)
                    .custom_formatter(|v, _| Month::from_series_offset(v as usize).label())
                    .text("from"),
            );
            ui.add(
                egui::Slider::new(&mut to, 0..=SERIES_LEN - 1)
                    .custom_formatter(|v, _| Month::from_series_offset(v as usize).label())
                    .text("to"),
            );

            // Keep the range well-formed regardless of which handle moved.
            if from > to {
                std::mem::swap(&mut from, &mut to);
            }
            let new_from = Month::from_series_offset(from);
            let new_to = Month::from_series_offset(to);
            if new_from != filters.from || new_to != filters.to {
                filters.from = new_from;
                filters.to = new_to;
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label("Zones");
            for zone in ALL_ZONES {
                let mut selected = filters.zone_selected(zone);
                if ui.checkbox(&mut selected, zone.name()).changed() {
                    filters.set_zone(zone, selected);
                }
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label("Dataset seed");
            ui.add(egui::DragValue::new(&mut seed.0).speed(1));
            if ui.button("Regenerate data").clicked() {
                regenerate.send(RegenerateDataset { seed: seed.0 });
            }
            ui.colored_label(
                theme::TEXT_MUTED,
                "Synthetic data; identical seeds give identical dashboards.",
            );
        });
}
