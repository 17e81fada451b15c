//! Waste tracker panel: today's breakdown by type, the quick-add entry
//! form, weekly analytics with the diversion rate, and rule-based
//! insights.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use models::waste::{WasteEntryInput, WasteLog, WasteType};

use crate::panel_toggles::WastePanelVisible;
use crate::theme;
use crate::widgets;

// =============================================================================
// Panel state
// =============================================================================

#[derive(Resource, Clone, Copy, PartialEq, Eq, Default)]
pub enum WasteTab {
    #[default]
    Overview,
    Analytics,
}

/// Quick-add form buffer. Declined submissions leave the buffer intact.
#[derive(Resource, Default)]
pub struct WasteForm {
    pub open: bool,
    pub input: WasteEntryInput,
}

// =============================================================================
// Panel
// =============================================================================

pub fn waste_panel_ui(
    mut contexts: EguiContexts,
    visible: Res<WastePanelVisible>,
    mut log: ResMut<WasteLog>,
    mut tab: ResMut<WasteTab>,
    mut form: ResMut<WasteForm>,
) {
    if !visible.0 {
        return;
    }

    egui::Window::new("♻️ Waste Tracker")
        .default_width(420.0)
        .show(contexts.ctx_mut(), |ui| {
            quick_stats(ui, &log);
            ui.separator();

            ui.horizontal(|ui| {
                ui.selectable_value(&mut *tab, WasteTab::Overview, "📊 Overview");
                ui.selectable_value(&mut *tab, WasteTab::Analytics, "📈 Analytics");
            });
            ui.separator();

            egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| match *tab {
                WasteTab::Overview => overview_tab(ui, &mut log, &mut form),
                WasteTab::Analytics => analytics_tab(ui, &log),
            });
        });
}

fn quick_stats(ui: &mut egui::Ui, log: &WasteLog) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{} today", widgets::fmt_kg(log.daily_total())))
                .color(theme::PRIMARY),
        );
        ui.separator();
        ui.label(
            egui::RichText::new(format!("{} diverted", widgets::fmt_pct(log.diversion_rate())))
                .color(theme::ACCENT),
        );
        ui.separator();
        ui.label(
            egui::RichText::new(format!("-{:.1}% this month", log.monthly.reduction_pct))
                .color(theme::PRIMARY),
        );
        ui.separator();
        let remaining = log.monthly_remaining();
        ui.label(
            egui::RichText::new(format!("{remaining:.1} kg to goal")).color(if remaining >= 0.0 {
                theme::HIGHLIGHT
            } else {
                theme::NEGATIVE
            }),
        );
    });
}

fn overview_tab(ui: &mut egui::Ui, log: &mut WasteLog, form: &mut WasteForm) {
    ui.heading("Today's Waste Breakdown");
    for &kind in WasteType::ALL {
        ui.horizontal(|ui| {
            ui.label(kind.icon());
            ui.label(kind.name());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.strong(format!("{:.2} kg", log.daily_amount(kind)));
            });
        });
    }
    ui.separator();

    if form.open {
        entry_form(ui, log, form);
    } else if ui.button("+ Add Entry").clicked() {
        form.open = true;
        form.input.timestamp = widgets::clock_hhmm();
    }
    ui.separator();

    ui.heading("Recent Entries");
    for entry in log.entries.iter().take(5) {
        ui.horizontal(|ui| {
            ui.label(entry.kind.icon());
            ui.strong(format!("{:.2} kg - {}", entry.amount_kg, entry.description));
        });
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("{} • {}", entry.category, entry.timestamp))
                    .small()
                    .color(theme::MUTED),
            );
            if entry.recyclable {
                ui.label(egui::RichText::new("♻️ Recyclable").small().color(theme::PRIMARY));
            }
            if entry.compostable {
                ui.label(egui::RichText::new("🌱 Compostable").small().color(theme::HIGHLIGHT));
            }
        });
        ui.separator();
    }
}

fn entry_form(ui: &mut egui::Ui, log: &mut WasteLog, form: &mut WasteForm) {
    let kind_before = form.input.kind;
    egui::ComboBox::from_label("Waste Type")
        .selected_text(format!(
            "{} {}",
            form.input.kind.icon(),
            form.input.kind.name()
        ))
        .show_ui(ui, |ui| {
            for &kind in WasteType::ALL {
                ui.selectable_value(
                    &mut form.input.kind,
                    kind,
                    format!("{} {}", kind.icon(), kind.name()),
                );
            }
        });
    // Changing the type invalidates the chosen sub-category.
    if form.input.kind != kind_before {
        form.input.category.clear();
    }

    egui::ComboBox::from_label("Category")
        .selected_text(if form.input.category.is_empty() {
            "Select category..."
        } else {
            form.input.category.as_str()
        })
        .show_ui(ui, |ui| {
            for &category in form.input.kind.categories() {
                ui.selectable_value(&mut form.input.category, category.to_string(), category);
            }
        });

    ui.horizontal(|ui| {
        ui.label("Amount (kg)");
        ui.add(egui::TextEdit::singleline(&mut form.input.amount).hint_text("0.25"));
    });
    ui.horizontal(|ui| {
        ui.label("Description");
        ui.add(
            egui::TextEdit::singleline(&mut form.input.description)
                .hint_text("Brief description..."),
        );
    });
    ui.horizontal(|ui| {
        ui.checkbox(&mut form.input.recyclable, "Recyclable ♻️");
        ui.checkbox(&mut form.input.compostable, "Compostable 🌱");
    });

    ui.horizontal(|ui| {
        if ui.button("Add Entry").clicked() && log.add_entry(&form.input) {
            form.input = WasteEntryInput::default();
            form.open = false;
        }
        if ui.button("Cancel").clicked() {
            form.open = false;
        }
    });
}

fn analytics_tab(ui: &mut egui::Ui, log: &WasteLog) {
    ui.heading("Weekly Waste Distribution");
    widgets::stat_line(ui, "Total Waste", &widgets::fmt_kg(log.weekly.total_kg));
    widgets::progress_bar(
        ui,
        log.weekly.recycled_kg / log.weekly.total_kg.max(f32::EPSILON),
        theme::PRIMARY,
    );
    widgets::stat_line_colored(
        ui,
        "Recycled",
        &widgets::fmt_kg(log.weekly.recycled_kg),
        theme::PRIMARY,
    );
    widgets::stat_line_colored(
        ui,
        "Composted",
        &widgets::fmt_kg(log.weekly.composted_kg),
        theme::HIGHLIGHT,
    );
    widgets::stat_line_colored(
        ui,
        "Landfill",
        &widgets::fmt_kg(log.weekly.landfill_kg),
        theme::NEGATIVE,
    );
    ui.separator();

    ui.heading("Waste Trends");
    widgets::stat_line_colored(
        ui,
        "vs Last Month",
        &format!("-{:.1}%", log.monthly.reduction_pct),
        theme::PRIMARY,
    );
    widgets::stat_line_colored(
        ui,
        "Diversion Rate",
        &widgets::fmt_pct(log.diversion_rate()),
        theme::ACCENT,
    );
    ui.separator();

    ui.heading("💡 Smart Insights");
    let insights = log.insights();
    if insights.is_empty() {
        ui.label(egui::RichText::new("No insights today.").small().color(theme::MUTED));
    }
    for insight in &insights {
        ui.horizontal(|ui| {
            ui.label(insight.icon);
            ui.label(
                egui::RichText::new(insight.message).color(widgets::insight_color(insight.kind)),
            );
        });
    }
    ui.separator();

    ui.heading("🎯 Monthly Goal");
    widgets::stat_line(
        ui,
        "Used / Goal",
        &format!("{:.1} / {:.1} kg", log.monthly.total_kg, log.monthly.goal_kg),
    );
    widgets::progress_bar(
        ui,
        log.monthly.total_kg / log.monthly.goal_kg.max(f32::EPSILON),
        if log.monthly.total_kg <= log.monthly.goal_kg {
            theme::PRIMARY
        } else {
            theme::NEGATIVE
        },
    );
    ui.label(
        egui::RichText::new(if log.monthly.total_kg < log.monthly.goal_kg {
            format!("{:.1} kg remaining", log.monthly_remaining())
        } else {
            "Goal exceeded! Time to set a new challenge.".to_string()
        })
        .small()
        .color(theme::MUTED),
    );
}

pub struct WastePanelPlugin;

impl Plugin for WastePanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WasteTab>()
            .init_resource::<WasteForm>()
            .add_systems(Update, waste_panel_ui);
    }
}
