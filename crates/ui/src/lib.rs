use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod challenges_panel;
pub mod community_panel;
pub mod eco_score_panel;
pub mod panel_toggles;
pub mod theme;
pub mod transport_panel;
pub mod waste_panel;
pub mod widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_eco_theme)
            .add_plugins((
                panel_toggles::PanelTogglesPlugin,
                community_panel::CommunityPanelPlugin,
                challenges_panel::ChallengesPanelPlugin,
                eco_score_panel::EcoScorePanelPlugin,
                transport_panel::TransportPanelPlugin,
                waste_panel::WastePanelPlugin,
            ));
    }
}
