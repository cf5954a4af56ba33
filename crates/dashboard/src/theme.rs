//! Manzi Water branding applied to the egui style.

use bevy_egui::{egui, EguiContexts};

/// Brand blue, used for primary accents and chart lines.
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(30, 136, 229);
/// Brand green, used for healthy metrics.
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(67, 160, 71);
/// Alert red.
pub const ALERT: egui::Color32 = egui::Color32::from_rgb(229, 57, 53);
/// Warning amber.
pub const WARN: egui::Color32 = egui::Color32::from_rgb(251, 140, 0);
/// Muted text for captions and notes.
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(150, 155, 165);

/// Chart canvas background.
pub const CHART_BG: egui::Color32 = egui::Color32::from_rgb(30, 32, 40);

pub const FONT_HEADING: f32 = 16.0;
pub const FONT_KPI: f32 = 24.0;

pub fn apply_manzi_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Dark panel palette with the brand blue as the active accent.
    let panel = egui::Color32::from_rgb(35, 37, 48);
    let inactive = egui::Color32::from_rgb(50, 55, 65);
    let hover = egui::Color32::from_rgb(70, 80, 100);
    let active = PRIMARY;

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = CHART_BG;
    style.visuals.faint_bg_color = egui::Color32::from_rgb(40, 42, 52);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
