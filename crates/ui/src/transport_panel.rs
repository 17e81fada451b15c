//! Transportation panel: today's trip ledger with the add-trip form,
//! alternative-mode comparison, weekly breakdown, and goal progress.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use models::transport::{Alternative, TransportMode, TravelLog, TripInput};

use crate::panel_toggles::TransportPanelVisible;
use crate::theme;
use crate::widgets;

// =============================================================================
// Panel state
// =============================================================================

#[derive(Resource, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportTab {
    #[default]
    Today,
    Weekly,
    Goals,
}

/// Add-trip form buffer. Declined submissions leave the buffer intact.
#[derive(Resource, Default)]
pub struct TripForm {
    pub open: bool,
    pub input: TripInput,
}

/// The alternatives comparison for the last trip the user asked about.
#[derive(Resource, Default)]
pub struct AlternativesView {
    pub route: Option<String>,
    pub alternatives: Vec<Alternative>,
}

// =============================================================================
// Panel
// =============================================================================

#[allow(clippy::too_many_arguments)]
pub fn transport_panel_ui(
    mut contexts: EguiContexts,
    visible: Res<TransportPanelVisible>,
    mut log: ResMut<TravelLog>,
    mut tab: ResMut<TransportTab>,
    mut form: ResMut<TripForm>,
    mut alternatives: ResMut<AlternativesView>,
) {
    if !visible.0 {
        return;
    }

    egui::Window::new("🚗 Transportation Tracker")
        .default_width(440.0)
        .show(contexts.ctx_mut(), |ui| {
            quick_stats(ui, &log);
            ui.separator();

            ui.horizontal(|ui| {
                ui.selectable_value(&mut *tab, TransportTab::Today, "📅 Today's Trips");
                ui.selectable_value(&mut *tab, TransportTab::Weekly, "📊 Weekly");
                ui.selectable_value(&mut *tab, TransportTab::Goals, "🎯 Goals");
            });
            ui.separator();

            egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                match *tab {
                    TransportTab::Today => today_tab(ui, &mut log, &mut form, &mut alternatives),
                    TransportTab::Weekly => weekly_tab(ui, &log),
                    TransportTab::Goals => goals_tab(ui, &log),
                }

                if let Some(route) = alternatives.route.clone() {
                    ui.separator();
                    alternatives_section(ui, &route, &mut alternatives);
                }
            });
        });
}

fn quick_stats(ui: &mut egui::Ui, log: &TravelLog) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{:.1} km", log.today_distance())).color(theme::ACCENT),
        );
        ui.separator();
        ui.label(
            egui::RichText::new(format!("{:.1} kg CO2", log.today_emissions()))
                .color(theme::NEGATIVE),
        );
        ui.separator();
        ui.label(
            egui::RichText::new(format!("{}% eco", log.eco_mode_percentage()))
                .color(theme::PRIMARY),
        );
        ui.separator();
        ui.label(egui::RichText::new(widgets::fmt_dollars(log.today_cost())).color(theme::ACCENT));
    });
}

fn today_tab(
    ui: &mut egui::Ui,
    log: &mut TravelLog,
    form: &mut TripForm,
    alternatives: &mut AlternativesView,
) {
    if form.open {
        trip_form(ui, log, form);
    } else if ui.button("+ Add Trip").clicked() {
        form.open = true;
        form.input.time = widgets::clock_hhmm();
    }
    ui.separator();

    for trip in &log.trips {
        ui.horizontal(|ui| {
            ui.label(trip.mode.icon());
            ui.strong(format!("{} → {}", trip.from, trip.to));
            ui.label(
                egui::RichText::new(format!(
                    "{} • {:.1} km • {} min",
                    trip.time, trip.distance_km, trip.duration_min
                ))
                .small()
                .color(theme::MUTED),
            );
        });
        if !trip.notes.is_empty() {
            ui.label(egui::RichText::new(&trip.notes).small().italics());
        }
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("{:.2} kg CO2", trip.emissions_kg))
                    .small()
                    .color(theme::NEGATIVE),
            );
            ui.label(
                egui::RichText::new(widgets::fmt_dollars(trip.cost))
                    .small()
                    .color(theme::ACCENT),
            );
            if ui.small_button("See alternatives →").clicked() {
                alternatives.route = Some(format!("{} → {}", trip.from, trip.to));
                alternatives.alternatives = trip.alternatives();
            }
        });
        ui.separator();
    }
}

fn trip_form(ui: &mut egui::Ui, log: &mut TravelLog, form: &mut TripForm) {
    egui::ComboBox::from_label("Transport Mode")
        .selected_text(format!(
            "{} {}",
            form.input.mode.icon(),
            form.input.mode.name()
        ))
        .show_ui(ui, |ui| {
            for &mode in TransportMode::ALL {
                ui.selectable_value(
                    &mut form.input.mode,
                    mode,
                    format!("{} {}", mode.icon(), mode.name()),
                );
            }
        });
    ui.horizontal(|ui| {
        ui.label("From");
        ui.add(egui::TextEdit::singleline(&mut form.input.from).hint_text("Starting location"));
    });
    ui.horizontal(|ui| {
        ui.label("To");
        ui.add(egui::TextEdit::singleline(&mut form.input.to).hint_text("Destination"));
    });
    ui.horizontal(|ui| {
        ui.label("Distance (km)");
        ui.add(egui::TextEdit::singleline(&mut form.input.distance).hint_text("12.5"));
    });
    ui.horizontal(|ui| {
        ui.label("Time");
        ui.add(egui::TextEdit::singleline(&mut form.input.time));
    });
    ui.horizontal(|ui| {
        ui.label("Notes");
        ui.add(egui::TextEdit::singleline(&mut form.input.notes).hint_text("Optional notes"));
    });

    ui.horizontal(|ui| {
        if ui.button("Add Trip").clicked() && log.add_trip(&form.input) {
            form.input = TripInput::default();
            form.open = false;
        }
        if ui.button("Cancel").clicked() {
            form.open = false;
        }
    });
}

fn weekly_tab(ui: &mut egui::Ui, log: &TravelLog) {
    for summary in &log.weekly_by_mode {
        ui.horizontal(|ui| {
            ui.label(summary.mode.icon());
            ui.strong(summary.mode.name());
            ui.label(
                egui::RichText::new(format!(
                    "{:.1} km • {}%",
                    summary.distance_km, summary.percentage
                ))
                .small()
                .color(theme::MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(widgets::fmt_dollars(summary.cost))
                        .small()
                        .color(theme::ACCENT),
                );
                ui.label(
                    egui::RichText::new(format!("{:.1} kg CO2", summary.emissions_kg))
                        .small()
                        .color(theme::NEGATIVE),
                );
            });
        });
    }
    ui.separator();
    widgets::stat_line(ui, "Total Distance", &format!("{:.1} km", log.weekly.distance_km));
    widgets::stat_line_colored(
        ui,
        "Total Emissions",
        &widgets::fmt_kg(log.weekly.emissions_kg),
        theme::NEGATIVE,
    );
    widgets::stat_line(ui, "Total Cost", &widgets::fmt_dollars(log.weekly.cost));
}

fn goals_tab(ui: &mut egui::Ui, log: &TravelLog) {
    let progress = log.weekly_progress();
    let over_budget = log.weekly.emissions_kg > log.goals.weekly_emissions_kg;

    ui.strong("Weekly Emissions Target");
    widgets::stat_line(
        ui,
        "Emissions",
        &format!(
            "{:.1} / {:.1} kg CO2",
            log.weekly.emissions_kg, log.goals.weekly_emissions_kg
        ),
    );
    widgets::progress_bar(
        ui,
        progress / 100.0,
        if over_budget { theme::NEGATIVE } else { theme::PRIMARY },
    );
    let delta = (log.goals.weekly_emissions_kg - log.weekly.emissions_kg).abs();
    ui.label(
        egui::RichText::new(if over_budget {
            format!("{delta:.1} kg over target")
        } else {
            format!("{delta:.1} kg remaining")
        })
        .small()
        .color(theme::MUTED),
    );

    ui.add_space(6.0);
    ui.strong("Eco-Friendly Transport Target");
    widgets::stat_line(
        ui,
        "Eco trips",
        &format!("{}% / {}%", log.goals.current_eco_pct, log.goals.eco_mode_pct),
    );
    widgets::progress_bar(
        ui,
        log.goals.current_eco_pct as f32 / log.goals.eco_mode_pct as f32,
        theme::ACCENT,
    );

    ui.add_space(6.0);
    ui.strong("🎯 Goal Achievement Forecast");
    widgets::stat_line(
        ui,
        "Emissions Goal",
        if over_budget { "⚠️ Needs adjustment" } else { "✅ On track!" },
    );
    widgets::stat_line(
        ui,
        "Eco Transport Goal",
        if log.goals.current_eco_pct >= log.goals.eco_mode_pct {
            "✅ Target achieved!"
        } else {
            "📈 Keep improving!"
        },
    );

    ui.add_space(6.0);
    let savings = log.eco_savings_vs_car();
    ui.strong("🌍 Today's eco savings vs driving");
    widgets::stat_line_colored(
        ui,
        "Emissions avoided",
        &widgets::fmt_kg(savings.emissions_kg),
        theme::PRIMARY,
    );
    widgets::stat_line_colored(
        ui,
        "Money saved",
        &widgets::fmt_dollars(savings.cost),
        theme::ACCENT,
    );
}

fn alternatives_section(ui: &mut egui::Ui, route: &str, view: &mut AlternativesView) {
    ui.horizontal(|ui| {
        ui.strong(format!("🌱 Eco-Friendly Alternatives — {route}"));
        if ui.small_button("✕").clicked() {
            view.route = None;
            view.alternatives.clear();
        }
    });
    if view.alternatives.is_empty() {
        ui.label(
            egui::RichText::new("No mode beats this trip's emissions.")
                .small()
                .color(theme::MUTED),
        );
        return;
    }
    for alternative in &view.alternatives {
        ui.horizontal(|ui| {
            ui.label(alternative.mode.icon());
            ui.strong(alternative.mode.name());
            ui.label(
                egui::RichText::new(format!("~{} minutes", alternative.duration_min))
                    .small()
                    .color(theme::MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let cost_text = if alternative.cost_saved >= 0.0 {
                    format!("-${:.2}", alternative.cost_saved)
                } else {
                    format!("+${:.2}", alternative.cost_saved.abs())
                };
                ui.label(egui::RichText::new(cost_text).small().color(theme::ACCENT));
                ui.label(
                    egui::RichText::new(format!("-{:.2} kg CO2", alternative.emissions_saved_kg))
                        .small()
                        .color(theme::PRIMARY),
                );
            });
        });
    }
}

pub struct TransportPanelPlugin;

impl Plugin for TransportPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TransportTab>()
            .init_resource::<TripForm>()
            .init_resource::<AlternativesView>()
            .add_systems(Update, transport_panel_ui);
    }
}
