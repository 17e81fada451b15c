use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

mod snapshot_mode;

fn main() {
    // Headless mode: print a JSON snapshot of every dashboard and exit.
    if std::env::args().any(|arg| arg == "--snapshot") {
        snapshot_mode::run_snapshot_mode();
        return;
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "EcoLife".to_string(),
                resolution: (1280.0, 720.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        // Dashboards only repaint on input; idle the event loop between
        // interactions.
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        })
        .add_plugins((models::ModelsPlugin, ui::UiPlugin))
        .run();
}
