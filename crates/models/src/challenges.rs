//! Gamified personal challenges: active/available lists, user XP, and the
//! leaderboard.
//!
//! Joining moves a challenge from the available list to the active list
//! with `progress = 0` and a total parsed from its duration string.
//! Completing removes it and awards a flat [`COMPLETION_XP`]; the
//! challenge's own `xp_reward` is deliberately not consulted, matching the
//! shipped behavior.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::Difficulty;

/// XP awarded for completing any challenge.
pub const COMPLETION_XP: u32 = 500;

/// Fallback total when a duration string has no leading integer.
pub const DEFAULT_CHALLENGE_TOTAL: u32 = 7;

// =============================================================================
// Types
// =============================================================================

/// A challenge the user is currently working on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveChallenge {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub xp_reward: u32,
    pub progress: u32,
    pub total: u32,
    pub category: String,
    pub icon: String,
    pub time_left: String,
    pub participants: u32,
}

impl ActiveChallenge {
    /// Whether the reward can be claimed (progress has reached the total).
    pub fn is_complete(&self) -> bool {
        self.progress >= self.total
    }

    /// Progress as a 0.0..=1.0 fraction for progress bars.
    pub fn progress_fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.progress as f32 / self.total as f32
        }
    }
}

/// A challenge the user has not joined yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableChallenge {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub xp_reward: u32,
    pub duration: String,
    pub category: String,
    pub icon: String,
    pub participants: u32,
}

/// The local user's gamification state. There is no level-up logic: XP
/// grows on completion while `level`/`xp_to_next` stay as seeded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserStats {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub streak: u32,
    pub total_challenges: u32,
    pub completed_challenges: u32,
}

impl UserStats {
    /// Fraction of the way to the next level, for the XP bar.
    pub fn level_fraction(&self) -> f32 {
        let span = self.xp + self.xp_to_next;
        if span == 0 {
            0.0
        } else {
            self.xp as f32 / span as f32
        }
    }
}

/// One row of the (static) leaderboard. Ranks and XP are display-only
/// seed data and are never recomputed from live [`UserStats`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub level: u32,
    pub xp: u32,
    pub avatar: String,
}

// =============================================================================
// Board resource
// =============================================================================

#[derive(Resource, Clone, Debug, Serialize, Deserialize)]
pub struct ChallengeBoard {
    pub active: Vec<ActiveChallenge>,
    pub available: Vec<AvailableChallenge>,
    pub user: UserStats,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Parses the leading whitespace-delimited token of a duration string as a
/// day/unit count ("2 weeks" -> 2, "10 days" -> 10), falling back to
/// [`DEFAULT_CHALLENGE_TOTAL`].
fn parse_duration_total(duration: &str) -> u32 {
    duration
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(DEFAULT_CHALLENGE_TOTAL)
}

impl ChallengeBoard {
    /// Moves a challenge from available to active. The new entry starts at
    /// progress 0 with a total parsed from the duration string, and is
    /// appended to the end of the active list. Returns `false` for unknown
    /// ids.
    pub fn join_challenge(&mut self, id: u32) -> bool {
        let Some(index) = self.available.iter().position(|c| c.id == id) else {
            return false;
        };
        let source = self.available.remove(index);
        self.active.push(ActiveChallenge {
            id: source.id,
            title: source.title,
            description: source.description,
            difficulty: source.difficulty,
            xp_reward: source.xp_reward,
            progress: 0,
            total: parse_duration_total(&source.duration),
            category: source.category,
            icon: source.icon,
            time_left: source.duration,
            participants: source.participants,
        });
        true
    }

    /// Removes a challenge from the active list, regardless of whether its
    /// progress reached the total, and awards a flat [`COMPLETION_XP`]
    /// plus one completed challenge. Returns `false` for unknown ids.
    pub fn complete_challenge(&mut self, id: u32) -> bool {
        let Some(index) = self.active.iter().position(|c| c.id == id) else {
            return false;
        };
        let challenge = self.active.remove(index);
        self.user.xp += COMPLETION_XP;
        self.user.completed_challenges += 1;
        info!(
            "challenge '{}' completed: +{} XP ({} total)",
            challenge.title, COMPLETION_XP, self.user.xp
        );
        true
    }

    /// The local user's rank as shown on the leaderboard: the rank of the
    /// entry whose name contains "You". Not recomputed against live XP.
    pub fn global_rank(&self) -> Option<u32> {
        self.leaderboard
            .iter()
            .find(|entry| entry.name.contains("You"))
            .map(|entry| entry.rank)
    }
}

impl Default for ChallengeBoard {
    fn default() -> Self {
        Self {
            active: seed_active(),
            available: seed_available(),
            user: UserStats {
                level: 12,
                xp: 2_340,
                xp_to_next: 660,
                streak: 7,
                total_challenges: 45,
                completed_challenges: 32,
            },
            leaderboard: seed_leaderboard(),
        }
    }
}

// =============================================================================
// Seed data
// =============================================================================

fn seed_active() -> Vec<ActiveChallenge> {
    vec![
        ActiveChallenge {
            id: 1,
            title: "Zero Waste Week".to_string(),
            description: "Reduce your waste to less than 1kg for 7 days".to_string(),
            difficulty: Difficulty::Hard,
            xp_reward: 500,
            progress: 4,
            total: 7,
            category: "Waste".to_string(),
            icon: "♻️".to_string(),
            time_left: "3 days left".to_string(),
            participants: 1_247,
        },
        ActiveChallenge {
            id: 2,
            title: "Plastic-Free Shopping".to_string(),
            description: "Complete 5 shopping trips without single-use plastics".to_string(),
            difficulty: Difficulty::Medium,
            xp_reward: 300,
            progress: 2,
            total: 5,
            category: "Shopping".to_string(),
            icon: "🛍️".to_string(),
            time_left: "5 days left".to_string(),
            participants: 856,
        },
        ActiveChallenge {
            id: 3,
            title: "Green Commute Master".to_string(),
            description: "Use eco-friendly transport for 10 consecutive days".to_string(),
            difficulty: Difficulty::Easy,
            xp_reward: 200,
            progress: 7,
            total: 10,
            category: "Transport".to_string(),
            icon: "🚴‍♀️".to_string(),
            time_left: "2 weeks left".to_string(),
            participants: 2_103,
        },
    ]
}

fn seed_available() -> Vec<AvailableChallenge> {
    vec![
        AvailableChallenge {
            id: 4,
            title: "Energy Saver Pro".to_string(),
            description: "Reduce home energy consumption by 20%".to_string(),
            difficulty: Difficulty::Medium,
            xp_reward: 350,
            duration: "2 weeks".to_string(),
            category: "Energy".to_string(),
            icon: "⚡".to_string(),
            participants: 934,
        },
        AvailableChallenge {
            id: 5,
            title: "Local Food Champion".to_string(),
            description: "Eat only locally sourced food for 10 days".to_string(),
            difficulty: Difficulty::Hard,
            xp_reward: 450,
            duration: "10 days".to_string(),
            category: "Food".to_string(),
            icon: "🥬".to_string(),
            participants: 567,
        },
        AvailableChallenge {
            id: 6,
            title: "Water Warrior".to_string(),
            description: "Reduce water usage by 30% for one month".to_string(),
            difficulty: Difficulty::Medium,
            xp_reward: 400,
            duration: "1 month".to_string(),
            category: "Water".to_string(),
            icon: "💧".to_string(),
            participants: 712,
        },
    ]
}

fn seed_leaderboard() -> Vec<LeaderboardEntry> {
    let rows: [(u32, &str, u32, u32, &str); 5] = [
        (1, "EcoWarrior_2025", 28, 15_420, "🌱"),
        (2, "GreenGuru", 26, 14_890, "🌿"),
        (3, "PlantBased_Pro", 25, 14_230, "🌳"),
        (4, "Alex (You)", 12, 2_340, "🌟"),
        (5, "SustainableSam", 11, 2_100, "♻️"),
    ];
    rows.iter()
        .map(|&(rank, name, level, xp, avatar)| LeaderboardEntry {
            rank,
            name: name.to_string(),
            level,
            xp,
            avatar: avatar.to_string(),
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Duration parsing
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_duration_total() {
        assert_eq!(parse_duration_total("2 weeks"), 2);
        assert_eq!(parse_duration_total("10 days"), 10);
        assert_eq!(parse_duration_total("1 month"), 1);
        assert_eq!(parse_duration_total("a fortnight"), 7);
        assert_eq!(parse_duration_total(""), 7);
    }

    // -------------------------------------------------------------------------
    // join_challenge
    // -------------------------------------------------------------------------

    #[test]
    fn test_join_moves_available_to_active() {
        let mut board = ChallengeBoard::default();
        assert!(board.join_challenge(4));

        assert_eq!(board.available.len(), 2);
        assert!(board.available.iter().all(|c| c.id != 4));

        // Appended at the end, not prepended
        let joined = board.active.last().expect("joined challenge");
        assert_eq!(joined.id, 4);
        assert_eq!(joined.progress, 0);
        assert_eq!(joined.total, 2); // "2 weeks"
        assert_eq!(joined.time_left, "2 weeks");
        assert_eq!(joined.xp_reward, 350);
    }

    #[test]
    fn test_join_parses_day_counts() {
        let mut board = ChallengeBoard::default();
        board.join_challenge(5); // "10 days"
        assert_eq!(board.active.last().unwrap().total, 10);
        board.join_challenge(6); // "1 month"
        assert_eq!(board.active.last().unwrap().total, 1);
    }

    #[test]
    fn test_join_unknown_id_is_noop() {
        let mut board = ChallengeBoard::default();
        assert!(!board.join_challenge(99));
        assert_eq!(board.active.len(), 3);
        assert_eq!(board.available.len(), 3);
    }

    #[test]
    fn test_join_falls_back_to_seven_for_unparsable_duration() {
        let mut board = ChallengeBoard::default();
        board.available.push(AvailableChallenge {
            id: 7,
            title: "Mystery".to_string(),
            description: String::new(),
            difficulty: Difficulty::Easy,
            xp_reward: 100,
            duration: "until spring".to_string(),
            category: "Misc".to_string(),
            icon: "❓".to_string(),
            participants: 1,
        });
        board.join_challenge(7);
        assert_eq!(board.active.last().unwrap().total, 7);
    }

    // -------------------------------------------------------------------------
    // complete_challenge
    // -------------------------------------------------------------------------

    #[test]
    fn test_complete_awards_flat_xp() {
        let mut board = ChallengeBoard::default();
        let xp_before = board.user.xp;
        let completed_before = board.user.completed_challenges;

        assert!(board.complete_challenge(1));

        assert_eq!(board.active.len(), 2);
        assert_eq!(board.user.xp, xp_before + 500);
        assert_eq!(board.user.completed_challenges, completed_before + 1);
    }

    #[test]
    fn test_complete_ignores_declared_xp_reward() {
        // "Plastic-Free Shopping" declares 300 XP but the award is the flat
        // completion amount.
        let mut board = ChallengeBoard::default();
        let xp_before = board.user.xp;
        board.complete_challenge(2);
        assert_eq!(board.user.xp, xp_before + COMPLETION_XP);
    }

    #[test]
    fn test_complete_works_regardless_of_progress() {
        // id 2 is at 2/5; completion still fires.
        let mut board = ChallengeBoard::default();
        assert!(!board.active.iter().find(|c| c.id == 2).unwrap().is_complete());
        assert!(board.complete_challenge(2));
        assert!(board.active.iter().all(|c| c.id != 2));
    }

    #[test]
    fn test_complete_unknown_id_is_noop() {
        let mut board = ChallengeBoard::default();
        let xp_before = board.user.xp;
        assert!(!board.complete_challenge(42));
        assert_eq!(board.user.xp, xp_before);
        assert_eq!(board.active.len(), 3);
    }

    // -------------------------------------------------------------------------
    // Derived display values
    // -------------------------------------------------------------------------

    #[test]
    fn test_global_rank_reads_leaderboard_marker() {
        let board = ChallengeBoard::default();
        assert_eq!(board.global_rank(), Some(4));
    }

    #[test]
    fn test_global_rank_is_not_recomputed_after_completion() {
        let mut board = ChallengeBoard::default();
        board.complete_challenge(1);
        board.complete_challenge(2);
        // XP grew, but the static leaderboard still says rank 4.
        assert_eq!(board.global_rank(), Some(4));
        assert_eq!(board.leaderboard[3].xp, 2_340);
    }

    #[test]
    fn test_global_rank_none_without_marker() {
        let mut board = ChallengeBoard::default();
        board.leaderboard.retain(|e| !e.name.contains("You"));
        assert_eq!(board.global_rank(), None);
    }

    #[test]
    fn test_claimability() {
        let mut board = ChallengeBoard::default();
        assert!(!board.active[0].is_complete()); // 4/7
        board.active[0].progress = 7;
        assert!(board.active[0].is_complete());
        assert!((board.active[0].progress_fraction() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_level_fraction() {
        let user = ChallengeBoard::default().user;
        // 2340 / (2340 + 660) = 0.78
        assert!((user.level_fraction() - 0.78).abs() < 0.001);
    }
}

pub struct ChallengesPlugin;

impl Plugin for ChallengesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChallengeBoard>();
    }
}
