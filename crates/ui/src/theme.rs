//! EcoLife visual theme: a light, green-tinted egui style applied once at
//! startup, plus the palette constants the panels share.

use bevy_egui::{egui, EguiContexts};

/// Brand green used for primary actions and positive values.
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(34, 160, 94);
/// Accent blue for informational values.
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(59, 130, 200);
/// Warm highlight for gamification (XP, ranks, streaks).
pub const HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(234, 170, 40);
/// Red for emissions and warnings.
pub const NEGATIVE: egui::Color32 = egui::Color32::from_rgb(220, 70, 60);
/// Muted text for secondary labels.
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(130, 140, 135);

/// Applies the EcoLife style to the egui context.
pub fn apply_eco_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Light surfaces with a green cast
    let panel = egui::Color32::from_rgb(244, 249, 245);
    let inactive = egui::Color32::from_rgb(228, 238, 230);
    let hover = egui::Color32::from_rgb(210, 230, 215);
    let active = PRIMARY;

    style.visuals.dark_mode = false;
    style.visuals.override_text_color = Some(egui::Color32::from_rgb(40, 50, 45));

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(252, 254, 252);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(236, 244, 238);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    // Rounded corners (egui 0.31+ uses CornerRadius with u8 values)
    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
