//! Top branding bar with the tab selector.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::tabs::{ActiveTab, ALL_TABS};
use crate::theme;

pub fn header_ui(mut contexts: EguiContexts, mut active: ResMut<ActiveTab>) {
    egui::TopBottomPanel::top("manzi_header").show(contexts.ctx_mut(), |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.colored_label(
                theme::PRIMARY,
                egui::RichText::new("Manzi Water Intelligence Dashboard")
                    .size(20.0)
                    .strong(),
            );
            ui.colored_label(
                theme::TEXT_MUTED,
                "Executive Command Center - Water Utility Management",
            );
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            for tab in ALL_TABS {
                if ui
                    .selectable_label(*active == tab, tab.label())
                    .clicked()
                {
                    *active = tab;
                }
            }
        });
        ui.add_space(4.0);
    });
}
