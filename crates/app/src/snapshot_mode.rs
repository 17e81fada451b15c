//! Headless `--snapshot` mode: builds a minimal app with no rendering or
//! UI, runs one update so the seeded resources initialize, and prints a
//! [`models::snapshot::DashboardSnapshot`] as JSON on stdout.
//!
//! Useful for scripting and smoke checks:
//!
//! ```text
//! ecolife --snapshot | jq .transport.eco_mode_pct
//! ```

use bevy::prelude::*;

use models::challenges::ChallengeBoard;
use models::community::CommunityFeed;
use models::eco_score::EcoScoreBoard;
use models::snapshot::DashboardSnapshot;
use models::transport::TravelLog;
use models::waste::WasteLog;

pub fn run_snapshot_mode() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(models::ModelsPlugin);

    // One update so Startup systems execute and resources initialize.
    app.update();

    let world = app.world();
    let snapshot = DashboardSnapshot::capture(
        world.resource::<CommunityFeed>(),
        world.resource::<ChallengeBoard>(),
        world.resource::<EcoScoreBoard>(),
        world.resource::<TravelLog>(),
        world.resource::<WasteLog>(),
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("failed to serialize snapshot: {e}"),
    }
}
