//! Compact, typed, serializable snapshot of all five dashboards.
//!
//! [`DashboardSnapshot`] captures every headline derived metric into one
//! struct so the headless `--snapshot` mode can print the whole app state
//! as a single JSON object.

use serde::{Deserialize, Serialize};

use crate::challenges::ChallengeBoard;
use crate::community::CommunityFeed;
use crate::eco_score::{score_label, Achievement, EcoScoreBoard};
use crate::transport::TravelLog;
use crate::waste::WasteLog;

// ---------------------------------------------------------------------------
// Per-page summaries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CommunitySummary {
    pub posts: usize,
    pub group_challenges: usize,
    pub tips: usize,
    pub total_likes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChallengeSummary {
    pub level: u32,
    pub xp: u32,
    pub completed_challenges: u32,
    pub active: usize,
    pub available: usize,
    pub global_rank: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreSummary {
    pub overall: u32,
    pub label: String,
    pub unlocked_achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TransportSummary {
    pub trips_today: usize,
    pub distance_km: f32,
    pub emissions_kg: f32,
    pub cost: f32,
    pub eco_mode_pct: u32,
    pub weekly_progress_pct: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WasteSummary {
    pub entries: usize,
    pub daily_total_kg: f32,
    pub diversion_rate_pct: f32,
    pub insights: Vec<String>,
}

// ---------------------------------------------------------------------------
// Top-level snapshot
// ---------------------------------------------------------------------------

/// A point-in-time aggregate of the headline metrics of every page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardSnapshot {
    pub community: CommunitySummary,
    pub challenges: ChallengeSummary,
    pub eco_score: ScoreSummary,
    pub transport: TransportSummary,
    pub waste: WasteSummary,
}

impl DashboardSnapshot {
    /// Captures the current derived metrics of all five models.
    pub fn capture(
        feed: &CommunityFeed,
        board: &ChallengeBoard,
        scores: &EcoScoreBoard,
        travel: &TravelLog,
        waste: &WasteLog,
    ) -> Self {
        Self {
            community: CommunitySummary {
                posts: feed.posts.len(),
                group_challenges: feed.challenges.len(),
                tips: feed.tips.len(),
                total_likes: feed.posts.iter().map(|p| p.likes).sum(),
            },
            challenges: ChallengeSummary {
                level: board.user.level,
                xp: board.user.xp,
                completed_challenges: board.user.completed_challenges,
                active: board.active.len(),
                available: board.available.len(),
                global_rank: board.global_rank(),
            },
            eco_score: ScoreSummary {
                overall: scores.overall_score,
                label: score_label(scores.overall_score).to_string(),
                unlocked_achievements: Achievement::ALL
                    .iter()
                    .filter(|a| a.unlocked(scores))
                    .map(|a| a.name().to_string())
                    .collect(),
            },
            transport: TransportSummary {
                trips_today: travel.trips.len(),
                distance_km: travel.today_distance(),
                emissions_kg: travel.today_emissions(),
                cost: travel.today_cost(),
                eco_mode_pct: travel.eco_mode_percentage(),
                weekly_progress_pct: travel.weekly_progress(),
            },
            waste: WasteSummary {
                entries: waste.entries.len(),
                daily_total_kg: waste.daily_total(),
                diversion_rate_pct: waste.diversion_rate(),
                insights: waste
                    .insights()
                    .iter()
                    .map(|i| i.message.to_string())
                    .collect(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
