//! Panel visibility: one resource per dashboard, a top navigation bar of
//! toggle buttons, and number-key shortcuts.
//!
//! Keys 1-5 toggle the five dashboards. Keys are ignored while egui has
//! keyboard focus so typing "15" into a distance field does not flip
//! panels.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

// =============================================================================
// Visibility resources
// =============================================================================

#[derive(Resource, Default)]
pub struct CommunityPanelVisible(pub bool);

#[derive(Resource, Default)]
pub struct ChallengesPanelVisible(pub bool);

/// The eco-score dashboard starts open; it is the landing view.
#[derive(Resource)]
pub struct EcoScorePanelVisible(pub bool);

impl Default for EcoScorePanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

#[derive(Resource, Default)]
pub struct TransportPanelVisible(pub bool);

#[derive(Resource, Default)]
pub struct WastePanelVisible(pub bool);

// =============================================================================
// Navigation bar
// =============================================================================

/// Top bar with one toggle button per dashboard.
#[allow(clippy::too_many_arguments)]
pub fn nav_bar_ui(
    mut contexts: EguiContexts,
    mut community: ResMut<CommunityPanelVisible>,
    mut challenges: ResMut<ChallengesPanelVisible>,
    mut eco_score: ResMut<EcoScorePanelVisible>,
    mut transport: ResMut<TransportPanelVisible>,
    mut waste: ResMut<WastePanelVisible>,
) {
    egui::TopBottomPanel::top("ecolife_nav").show(contexts.ctx_mut(), |ui| {
        ui.horizontal(|ui| {
            ui.strong("🌍 EcoLife");
            ui.separator();
            ui.toggle_value(&mut eco_score.0, "📊 Eco Score");
            ui.toggle_value(&mut transport.0, "🚗 Transport");
            ui.toggle_value(&mut waste.0, "♻️ Waste");
            ui.toggle_value(&mut challenges.0, "🏆 Challenges");
            ui.toggle_value(&mut community.0, "🌍 Community");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small("1-5 to toggle panels");
            });
        });
    });
}

/// Number-key shortcuts for the same toggles.
#[allow(clippy::too_many_arguments)]
pub fn panel_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut community: ResMut<CommunityPanelVisible>,
    mut challenges: ResMut<ChallengesPanelVisible>,
    mut eco_score: ResMut<EcoScorePanelVisible>,
    mut transport: ResMut<TransportPanelVisible>,
    mut waste: ResMut<WastePanelVisible>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }

    if keyboard.just_pressed(KeyCode::Digit1) {
        eco_score.0 = !eco_score.0;
    }
    if keyboard.just_pressed(KeyCode::Digit2) {
        transport.0 = !transport.0;
    }
    if keyboard.just_pressed(KeyCode::Digit3) {
        waste.0 = !waste.0;
    }
    if keyboard.just_pressed(KeyCode::Digit4) {
        challenges.0 = !challenges.0;
    }
    if keyboard.just_pressed(KeyCode::Digit5) {
        community.0 = !community.0;
    }
}

pub struct PanelTogglesPlugin;

impl Plugin for PanelTogglesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CommunityPanelVisible>()
            .init_resource::<ChallengesPanelVisible>()
            .init_resource::<EcoScorePanelVisible>()
            .init_resource::<TransportPanelVisible>()
            .init_resource::<WastePanelVisible>()
            .add_systems(Update, (nav_bar_ui, panel_keybinds));
    }
}
