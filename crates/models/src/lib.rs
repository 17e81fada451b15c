use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod challenges;
pub mod community;
pub mod eco_score;
pub mod snapshot;
pub mod transport;
pub mod waste;

// ---------------------------------------------------------------------------
// Shared types
// ---------------------------------------------------------------------------

/// Difficulty rating shared by community tips, challenges, and
/// recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Logs a one-line summary of the seeded state at startup.
fn log_seed_summary(
    feed: Res<community::CommunityFeed>,
    board: Res<challenges::ChallengeBoard>,
    travel: Res<transport::TravelLog>,
    waste: Res<waste::WasteLog>,
) {
    info!(
        "EcoLife models ready: {} posts, {} active challenges, {} trips today, {} waste entries",
        feed.posts.len(),
        board.active.len(),
        travel.trips.len(),
        waste.entries.len()
    );
}

pub struct ModelsPlugin;

impl Plugin for ModelsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            community::CommunityPlugin,
            challenges::ChallengesPlugin,
            eco_score::EcoScorePlugin,
            transport::TransportPlugin,
            waste::WastePlugin,
        ))
        .add_systems(Startup, log_seed_summary);
    }
}
