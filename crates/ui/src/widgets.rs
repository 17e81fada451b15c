//! Reusable widget and formatting helpers shared by the dashboard panels.
//!
//! Wraps the egui patterns every panel repeats (stat rows, painted
//! progress bars, value formatting, severity colors) so panels stay
//! consistent without restating colors and spacing.

use std::time::{SystemTime, UNIX_EPOCH};

use bevy_egui::egui;

use models::waste::InsightKind;
use models::Difficulty;

use crate::theme;

// =============================================================================
// Formatting
// =============================================================================

/// Formats a mass in kilograms, e.g. "4.2 kg".
pub fn fmt_kg(kg: f32) -> String {
    format!("{kg:.1} kg")
}

/// Formats a dollar amount, e.g. "$12.50".
pub fn fmt_dollars(amount: f32) -> String {
    format!("${amount:.2}")
}

/// Formats a percentage to one decimal, e.g. "90.4%".
pub fn fmt_pct(pct: f32) -> String {
    format!("{pct:.1}%")
}

/// Wall-clock time of day as "HH:MM" (UTC), used to prefill the form
/// time fields for new records.
pub fn clock_hhmm() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let minutes_of_day = (secs / 60) % (24 * 60);
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}

// =============================================================================
// Severity colors
// =============================================================================

/// Color band for a 0-100 score, matching the score labels.
pub fn score_color(score: u32) -> egui::Color32 {
    if score >= 90 {
        theme::PRIMARY
    } else if score >= 80 {
        theme::ACCENT
    } else if score >= 70 {
        egui::Color32::from_rgb(200, 180, 40)
    } else if score >= 60 {
        egui::Color32::from_rgb(230, 140, 40)
    } else {
        theme::NEGATIVE
    }
}

/// Badge color for a difficulty rating.
pub fn difficulty_color(difficulty: Difficulty) -> egui::Color32 {
    match difficulty {
        Difficulty::Easy => theme::PRIMARY,
        Difficulty::Medium => egui::Color32::from_rgb(200, 180, 40),
        Difficulty::Hard => theme::NEGATIVE,
    }
}

/// Tint for an insight card.
pub fn insight_color(kind: InsightKind) -> egui::Color32 {
    match kind {
        InsightKind::Warning => theme::NEGATIVE,
        InsightKind::Tip => theme::ACCENT,
        InsightKind::Success => theme::PRIMARY,
    }
}

// =============================================================================
// Widgets
// =============================================================================

/// A label/value row, value right-aligned and emphasized.
pub fn stat_line(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.strong(value);
        });
    });
}

/// Like [`stat_line`] but with a colored value.
pub fn stat_line_colored(ui: &mut egui::Ui, label: &str, value: &str, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(value).strong().color(color));
        });
    });
}

/// A painted horizontal progress bar. `fraction` is clamped to 0..=1.
pub fn progress_bar(ui: &mut egui::Ui, fraction: f32, color: egui::Color32) {
    let desired = egui::vec2(ui.available_width().min(220.0), 10.0);
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, egui::Color32::from_gray(210));
    let mut fill = rect;
    fill.set_right(rect.left() + rect.width() * fraction.clamp(0.0, 1.0));
    painter.rect_filled(fill, 4.0, color);
}

/// A small pill-shaped tag like "#ZeroWaste".
pub fn tag_badge(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(format!("#{text}"))
            .small()
            .color(theme::PRIMARY),
    );
}

/// A difficulty badge with its band color.
pub fn difficulty_badge(ui: &mut egui::Ui, difficulty: Difficulty) {
    ui.label(
        egui::RichText::new(difficulty.name())
            .small()
            .color(difficulty_color(difficulty)),
    );
}

// =============================================================================
// Tests
// =============================================================================
