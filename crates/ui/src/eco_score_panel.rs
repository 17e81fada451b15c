//! Eco-score panel: overall score with history, category selector with
//! factor breakdown, recommendations with projected impact, and the
//! achievement grid.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use models::eco_score::{score_label, trend_icon, Achievement, EcoScoreBoard, ScoreCategory};

use crate::panel_toggles::EcoScorePanelVisible;
use crate::theme;
use crate::widgets;

/// Which category's detail pane is showing. Switching has no effect on
/// scores.
#[derive(Resource, Clone, Copy, PartialEq, Eq)]
pub struct SelectedCategory(pub ScoreCategory);

impl Default for SelectedCategory {
    fn default() -> Self {
        Self(ScoreCategory::Energy)
    }
}

pub fn eco_score_panel_ui(
    mut contexts: EguiContexts,
    visible: Res<EcoScorePanelVisible>,
    board: Res<EcoScoreBoard>,
    mut selected: ResMut<SelectedCategory>,
) {
    if !visible.0 {
        return;
    }

    egui::Window::new("📊 Eco Score")
        .default_width(440.0)
        .show(contexts.ctx_mut(), |ui| {
            overall_header(ui, &board);
            ui.separator();

            egui::ScrollArea::vertical().max_height(440.0).show(ui, |ui| {
                category_selector(ui, &board, &mut selected);
                ui.separator();
                category_detail(ui, &board, selected.0);
                ui.separator();
                recommendations(ui, &board, selected.0);
                ui.separator();
                achievements(ui, &board);
            });
        });
}

fn overall_header(ui: &mut egui::Ui, board: &EcoScoreBoard) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(board.overall_score.to_string())
                .size(28.0)
                .strong()
                .color(widgets::score_color(board.overall_score)),
        );
        ui.vertical(|ui| {
            ui.strong(score_label(board.overall_score));
            ui.label(
                egui::RichText::new("Your current eco performance")
                    .small()
                    .color(theme::MUTED),
            );
        });
    });

    // Monthly history as a compact row of bars
    ui.horizontal(|ui| {
        for point in &board.history {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&point.month).small().color(theme::MUTED));
                widgets::progress_bar(ui, point.score as f32 / 100.0, theme::PRIMARY);
                ui.label(egui::RichText::new(point.score.to_string()).small());
            });
        }
    });
}

fn category_selector(ui: &mut egui::Ui, board: &EcoScoreBoard, selected: &mut SelectedCategory) {
    for &category in ScoreCategory::ALL {
        let score = board.score(category);
        let label = format!(
            "{} {}  —  {} {} {:+}",
            category.icon(),
            category.name(),
            score.score,
            trend_icon(score.trend),
            score.trend
        );
        if ui
            .selectable_label(selected.0 == category, label)
            .clicked()
        {
            selected.0 = category;
        }
    }
}

fn category_detail(ui: &mut egui::Ui, board: &EcoScoreBoard, category: ScoreCategory) {
    let score = board.score(category);
    ui.horizontal(|ui| {
        ui.label(category.icon());
        ui.strong(category.name());
        ui.label(
            egui::RichText::new(format!("weight {}%", category.weight_pct()))
                .small()
                .color(theme::MUTED),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(score.score.to_string())
                    .strong()
                    .color(widgets::score_color(score.score)),
            );
        });
    });
    ui.label(egui::RichText::new(category.description()).small().color(theme::MUTED));

    for &(factor, value) in category.factors() {
        ui.horizontal(|ui| {
            ui.label(factor);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(value.to_string());
                widgets::progress_bar(ui, value as f32 / 100.0, widgets::score_color(value));
            });
        });
    }
}

fn recommendations(ui: &mut egui::Ui, board: &EcoScoreBoard, category: ScoreCategory) {
    ui.heading("💡 Personalized Recommendations");
    for recommendation in category.recommendations() {
        ui.horizontal(|ui| {
            ui.strong(recommendation.title);
            ui.label(
                egui::RichText::new(format!("+{} points", recommendation.points))
                    .small()
                    .color(theme::PRIMARY),
            );
            widgets::difficulty_badge(ui, recommendation.difficulty);
        });
        ui.label(recommendation.description);
        ui.label(
            egui::RichText::new(format!(
                "🌱 CO2: {} kg/year   💰 Saves: ${}/year",
                recommendation.co2_kg_year, recommendation.cost_usd_year
            ))
            .small()
            .color(theme::MUTED),
        );
    }

    ui.add_space(4.0);
    ui.strong("🚀 Projected Impact");
    let impact = board.projected_impact(category);
    widgets::stat_line_colored(
        ui,
        "Score Increase",
        &format!("+{}", impact.score_increase),
        theme::PRIMARY,
    );
    widgets::stat_line(ui, "New Score", &impact.new_score.to_string());
    widgets::stat_line(ui, "CO2 Saved/Year", &format!("{} kg", impact.co2_kg_year));
    widgets::stat_line(ui, "Cost Savings/Year", &format!("${}", impact.cost_usd_year));
}

fn achievements(ui: &mut egui::Ui, board: &EcoScoreBoard) {
    ui.heading("🏆 Achievements");
    for &achievement in Achievement::ALL {
        let unlocked = achievement.unlocked(board);
        ui.horizontal(|ui| {
            ui.label(achievement.icon());
            let name = egui::RichText::new(achievement.name()).strong();
            ui.label(if unlocked {
                name.color(theme::HIGHLIGHT)
            } else {
                name.color(theme::MUTED)
            });
            ui.label(
                egui::RichText::new(achievement.description())
                    .small()
                    .color(theme::MUTED),
            );
            if unlocked {
                ui.label(egui::RichText::new("✓ Unlocked").small().color(theme::PRIMARY));
            }
        });
    }
}

pub struct EcoScorePanelPlugin;

impl Plugin for EcoScorePanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedCategory>()
            .add_systems(Update, eco_score_panel_ui);
    }
}
