//! Hand-painted chart and card widgets shared by the dashboard tabs.
//!
//! All charts are drawn directly with the egui painter: line and bar
//! series, scatter plots, stacked pipeline bars, share bars, bubble maps,
//! KPI cards, and traffic-light status rows.

use bevy_egui::egui;

use crate::theme;

/// Map a data series onto chart-space points inside `rect`.
///
/// `max_val` must be positive; values are drawn relative to `[0, max_val]`
/// with zero at the bottom edge.
pub fn chart_points(rect: &egui::Rect, data: &[f32], max_val: f32) -> Vec<egui::Pos2> {
    if data.len() < 2 {
        return Vec::new();
    }
    data.iter()
        .enumerate()
        .map(|(i, &val)| {
            let x = rect.min.x + (i as f32 / (data.len() - 1) as f32) * rect.width();
            let y = rect.max.y - (val / max_val).clamp(0.0, 1.0) * rect.height();
            egui::pos2(x, y)
        })
        .collect()
}

fn chart_canvas(ui: &mut egui::Ui, height: f32) -> egui::Rect {
    let width = ui.available_width().min(520.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, theme::CHART_BG);
    rect
}

fn draw_polyline(painter: &egui::Painter, points: &[egui::Pos2], color: egui::Color32) {
    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], egui::Stroke::new(1.5, color));
    }
}

// =============================================================================
// KPI cards and metrics
// =============================================================================

/// A headline KPI card: title, large value, and a small note underneath.
pub fn kpi_card(ui: &mut egui::Ui, title: &str, value: &str, note: &str, accent: egui::Color32) {
    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(42, 45, 58))
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.colored_label(accent, egui::RichText::new(title).size(theme::FONT_HEADING));
            ui.colored_label(
                accent,
                egui::RichText::new(value).size(theme::FONT_KPI).strong(),
            );
            ui.colored_label(theme::TEXT_MUTED, note);
        });
}

/// A label/value/delta metric row.
pub fn metric(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    delta: &str,
    delta_color: egui::Color32,
) {
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        ui.strong(value);
        ui.colored_label(delta_color, delta);
    });
}

/// A traffic-light status row: colored dot plus text.
pub fn status_row(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 6.0, color);
        ui.colored_label(color, text);
    });
}

// =============================================================================
// Line charts
// =============================================================================

/// A single-series line chart with an optional dashed horizontal target line.
pub fn line_chart(
    ui: &mut egui::Ui,
    data: &[f32],
    color: egui::Color32,
    height: f32,
    target: Option<(f32, egui::Color32)>,
) {
    if data.len() < 2 {
        ui.label("Collecting data...");
        return;
    }

    let mut max_val = data.iter().copied().fold(0.0_f32, f32::max);
    if let Some((target_val, _)) = target {
        max_val = max_val.max(target_val);
    }
    let max_val = max_val.max(1.0) * 1.05;

    let rect = chart_canvas(ui, height);
    let painter = ui.painter_at(rect);

    if let Some((target_val, target_color)) = target {
        let y = rect.max.y - (target_val / max_val) * rect.height();
        // Dashed target line.
        let mut x = rect.min.x;
        while x < rect.max.x {
            painter.line_segment(
                [egui::pos2(x, y), egui::pos2((x + 6.0).min(rect.max.x), y)],
                egui::Stroke::new(1.0, target_color),
            );
            x += 10.0;
        }
    }

    draw_polyline(&painter, &chart_points(&rect, data, max_val), color);
}

/// Two-series chart: bars for `bars` behind a line for `line`, each scaled
/// to its own maximum so differently-ranged series stay readable.
pub fn line_over_bars(
    ui: &mut egui::Ui,
    line: &[f32],
    line_color: egui::Color32,
    bars: &[f32],
    bar_color: egui::Color32,
    height: f32,
) {
    if line.len() < 2 || bars.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    let rect = chart_canvas(ui, height);
    let painter = ui.painter_at(rect);

    let bar_max = bars.iter().copied().fold(0.0_f32, f32::max).max(1.0) * 1.05;
    let slot = rect.width() / bars.len() as f32;
    for (i, &val) in bars.iter().enumerate() {
        let h = (val / bar_max) * rect.height();
        let x0 = rect.min.x + i as f32 * slot + slot * 0.15;
        let bar = egui::Rect::from_min_max(
            egui::pos2(x0, rect.max.y - h),
            egui::pos2(x0 + slot * 0.7, rect.max.y),
        );
        painter.rect_filled(bar, 1.0, bar_color.gamma_multiply(0.6));
    }

    let line_max = line.iter().copied().fold(0.0_f32, f32::max).max(1.0) * 1.05;
    draw_polyline(&painter, &chart_points(&rect, line, line_max), line_color);
}

// =============================================================================
// Bar charts
// =============================================================================

/// Horizontal bar chart: one labeled row per entry, bars scaled to the
/// largest value.
pub fn h_bar_chart(ui: &mut egui::Ui, entries: &[(String, f32, egui::Color32)]) {
    let max_val = entries
        .iter()
        .map(|(_, v, _)| *v)
        .fold(0.0_f32, f32::max)
        .max(1.0);

    for (label, value, color) in entries {
        ui.horizontal(|ui| {
            ui.label(format!("{label}:"));
            ui.label(format!("{value:.0}"));
        });
        let width = ui.available_width().min(300.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 12.0), egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 2.0, egui::Color32::from_rgb(40, 40, 40));
        let filled = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width() * (value / max_val), rect.height()),
        );
        painter.rect_filled(filled, 2.0, *color);
    }
}

/// Share bars: each entry drawn as its fraction of the total, with a
/// percentage label. Entries below 0.5% of the total are skipped.
pub fn share_bars(ui: &mut egui::Ui, entries: &[(String, f32, egui::Color32)]) {
    let total: f32 = entries.iter().map(|(_, v, _)| v).sum();
    if total < 0.01 {
        ui.label("No data");
        return;
    }

    for (label, value, color) in entries {
        let frac = value / total;
        if frac < 0.005 {
            continue;
        }
        ui.horizontal(|ui| {
            ui.label(format!("{label}:"));
            ui.label(format!("{value:.0} ({:.0}%)", frac * 100.0));
        });
        let width = ui.available_width().min(280.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 14.0), egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 2.0, egui::Color32::from_rgb(40, 40, 40));
        let filled = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width() * frac, rect.height()),
        );
        painter.rect_filled(filled, 2.0, *color);
    }
}

/// One stacked horizontal bar, segments drawn left to right.
pub fn stacked_bar(
    ui: &mut egui::Ui,
    label: &str,
    segments: &[(f32, egui::Color32)],
    scale_max: f32,
) {
    ui.label(label);
    let width = ui.available_width().min(320.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 16.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 2.0, egui::Color32::from_rgb(40, 40, 40));

    let scale = scale_max.max(1.0);
    let mut x = rect.min.x;
    for (value, color) in segments {
        let w = rect.width() * (value / scale).clamp(0.0, 1.0);
        let seg = egui::Rect::from_min_max(
            egui::pos2(x, rect.min.y),
            egui::pos2((x + w).min(rect.max.x), rect.max.y),
        );
        painter.rect_filled(seg, 0.0, *color);
        x += w;
    }
}

// =============================================================================
// Scatter and bubble charts
// =============================================================================

/// Scatter plot of `(x, y)` points, axes scaled to the data extents.
pub fn scatter_plot(
    ui: &mut egui::Ui,
    points: &[(f32, f32)],
    color: egui::Color32,
    height: f32,
) {
    if points.len() < 2 {
        ui.label("Collecting data...");
        return;
    }

    let rect = chart_canvas(ui, height);
    let painter = ui.painter_at(rect);

    let (x_min, x_max) = min_max(points.iter().map(|(x, _)| *x));
    let (y_min, y_max) = min_max(points.iter().map(|(_, y)| *y));
    let x_span = (x_max - x_min).max(1e-6);
    let y_span = (y_max - y_min).max(1e-6);

    for (x, y) in points {
        let px = rect.min.x + 4.0 + (x - x_min) / x_span * (rect.width() - 8.0);
        let py = rect.max.y - 4.0 - (y - y_min) / y_span * (rect.height() - 8.0);
        painter.circle_filled(egui::pos2(px, py), 3.0, color);
    }
}

/// A bubble on the zone map: normalized position, radius weight, and the
/// intensity that drives its color.
pub struct MapBubble {
    pub label: String,
    /// Horizontal position in [0, 1].
    pub x: f32,
    /// Vertical position in [0, 1].
    pub y: f32,
    /// Relative bubble size in [0, 1].
    pub size: f32,
    /// Relative severity in [0, 1]; blends the bubble color toward red.
    pub intensity: f32,
}

/// Bubble map over normalized coordinates, larger/redder bubbles marking
/// worse zones.
pub fn bubble_map(ui: &mut egui::Ui, bubbles: &[MapBubble], height: f32) {
    let rect = chart_canvas(ui, height);
    let painter = ui.painter_at(rect);

    for bubble in bubbles {
        let px = rect.min.x + bubble.x.clamp(0.0, 1.0) * rect.width();
        let py = rect.min.y + bubble.y.clamp(0.0, 1.0) * rect.height();
        let radius = 6.0 + bubble.size.clamp(0.0, 1.0) * 18.0;
        let color = blend_to_red(bubble.intensity.clamp(0.0, 1.0));
        painter.circle_filled(egui::pos2(px, py), radius, color);
        painter.text(
            egui::pos2(px, py + radius + 8.0),
            egui::Align2::CENTER_CENTER,
            &bubble.label,
            egui::FontId::proportional(10.0),
            theme::TEXT_MUTED,
        );
    }
}

/// Blend from the brand blue (0.0) to alert red (1.0).
pub fn blend_to_red(t: f32) -> egui::Color32 {
    let blue = theme::PRIMARY;
    let red = theme::ALERT;
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    egui::Color32::from_rgb(
        lerp(blue.r(), red.r()),
        lerp(blue.g(), red.g()),
        lerp(blue.b(), red.b()),
    )
}

fn min_max(values: impl Iterator<Item = f32>) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}
