//! Eco-score: weighted category scores, recommendation catalog, projected
//! impact, and achievement unlock predicates.
//!
//! Category scores, the overall score, and the monthly history are seeded
//! mock data with no recompute path between them. The only live derivations
//! are `projected_impact` (a fresh reduction over a category's
//! recommendations on every read) and the achievement predicates, which are
//! evaluated against current scores rather than stored as booleans.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::Difficulty;

// =============================================================================
// Categories
// =============================================================================

/// The five scored lifestyle categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreCategory {
    Energy,
    Transportation,
    Waste,
    Water,
    Consumption,
}

impl ScoreCategory {
    /// All categories in display order.
    pub const ALL: &'static [ScoreCategory] = &[
        ScoreCategory::Energy,
        ScoreCategory::Transportation,
        ScoreCategory::Waste,
        ScoreCategory::Water,
        ScoreCategory::Consumption,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScoreCategory::Energy => "Energy Usage",
            ScoreCategory::Transportation => "Transportation",
            ScoreCategory::Waste => "Waste Management",
            ScoreCategory::Water => "Water Usage",
            ScoreCategory::Consumption => "Consumption",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ScoreCategory::Energy => "⚡",
            ScoreCategory::Transportation => "🚗",
            ScoreCategory::Waste => "♻️",
            ScoreCategory::Water => "💧",
            ScoreCategory::Consumption => "🛒",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScoreCategory::Energy => "Your energy consumption and renewable usage patterns",
            ScoreCategory::Transportation => "Carbon footprint from your daily commute and travel",
            ScoreCategory::Waste => "How effectively you reduce, reuse, and recycle",
            ScoreCategory::Water => "Water consumption and conservation practices",
            ScoreCategory::Consumption => "Sustainable purchasing and consumption habits",
        }
    }

    /// Weight of this category in the overall score, in percent. The
    /// weights are authored to sum to 100; nothing validates that.
    pub fn weight_pct(self) -> u32 {
        match self {
            ScoreCategory::Energy => 25,
            ScoreCategory::Transportation => 20,
            ScoreCategory::Waste => 20,
            ScoreCategory::Water => 15,
            ScoreCategory::Consumption => 20,
        }
    }

    /// Sub-factor breakdown (factor name, 0-100 score) shown on the
    /// category detail card.
    pub fn factors(self) -> &'static [(&'static str, u32)] {
        match self {
            ScoreCategory::Energy => &[
                ("Renewable Energy", 70),
                ("Energy Efficiency", 85),
                ("Home Insulation", 90),
                ("Smart Devices", 65),
            ],
            ScoreCategory::Transportation => &[
                ("Public Transport", 60),
                ("Walking & Cycling", 80),
                ("Car Efficiency", 75),
                ("Air Travel", 45),
            ],
            ScoreCategory::Waste => &[
                ("Recycling Rate", 95),
                ("Composting Rate", 85),
                ("Waste Reduction", 90),
                ("Reusability", 90),
            ],
            ScoreCategory::Water => &[
                ("Consumption", 70),
                ("Efficiency", 65),
                ("Grey Water Use", 50),
                ("Rainwater Harvesting", 30),
            ],
            ScoreCategory::Consumption => &[
                ("Sustainable Purchasing", 80),
                ("Local Sourcing", 70),
                ("Minimalism", 75),
                ("Organic Food", 85),
            ],
        }
    }

    /// Recommendation catalog for this category. Impact, CO2, and cost are
    /// structured numbers; display strings are formatted at the UI layer.
    pub fn recommendations(self) -> &'static [Recommendation] {
        match self {
            ScoreCategory::Energy => &[
                Recommendation {
                    title: "Switch to LED Lighting",
                    points: 8,
                    difficulty: Difficulty::Easy,
                    description: "Replace remaining incandescent bulbs with LED alternatives",
                    co2_kg_year: 180,
                    cost_usd_year: 45,
                },
                Recommendation {
                    title: "Install Smart Thermostat",
                    points: 12,
                    difficulty: Difficulty::Medium,
                    description: "Optimize heating and cooling with intelligent temperature control",
                    co2_kg_year: 420,
                    cost_usd_year: 120,
                },
            ],
            ScoreCategory::Transportation => &[
                Recommendation {
                    title: "Bike to Work 2x/week",
                    points: 15,
                    difficulty: Difficulty::Medium,
                    description: "Replace car trips with cycling for nearby destinations",
                    co2_kg_year: 650,
                    cost_usd_year: 800,
                },
                Recommendation {
                    title: "Use Public Transit",
                    points: 10,
                    difficulty: Difficulty::Easy,
                    description: "Take bus/train instead of driving for longer trips",
                    co2_kg_year: 890,
                    cost_usd_year: 1_200,
                },
            ],
            ScoreCategory::Waste => &[Recommendation {
                title: "Start Composting",
                points: 8,
                difficulty: Difficulty::Easy,
                description: "Divert organic waste from landfills to create nutrient-rich soil",
                co2_kg_year: 230,
                cost_usd_year: 60,
            }],
            ScoreCategory::Water => &[Recommendation {
                title: "Install Low-Flow Fixtures",
                points: 12,
                difficulty: Difficulty::Medium,
                description: "Reduce water usage with efficient faucets and showerheads",
                co2_kg_year: 150,
                cost_usd_year: 180,
            }],
            ScoreCategory::Consumption => &[Recommendation {
                title: "Buy Second-Hand First",
                points: 10,
                difficulty: Difficulty::Easy,
                description: "Check thrift stores and online marketplaces before buying new",
                co2_kg_year: 320,
                cost_usd_year: 500,
            }],
        }
    }
}

/// A single improvement recommendation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    /// Score points gained by adopting this recommendation.
    pub points: u32,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub co2_kg_year: u32,
    pub cost_usd_year: u32,
}

// =============================================================================
// Scores
// =============================================================================

/// Score and month-over-month trend for one category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryScore {
    /// 0-100.
    pub score: u32,
    /// Signed month-over-month delta.
    pub trend: i32,
}

/// One point of the overall-score history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthScore {
    pub month: String,
    pub score: u32,
}

/// What a category's recommendations would add up to if all were adopted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedImpact {
    pub score_increase: u32,
    /// Capped at 100.
    pub new_score: u32,
    pub co2_kg_year: u32,
    pub cost_usd_year: u32,
}

/// The eco-score page state.
#[derive(Resource, Clone, Debug, Serialize, Deserialize)]
pub struct EcoScoreBoard {
    pub overall_score: u32,
    pub energy: CategoryScore,
    pub transportation: CategoryScore,
    pub waste: CategoryScore,
    pub water: CategoryScore,
    pub consumption: CategoryScore,
    pub history: Vec<MonthScore>,
}

impl Default for EcoScoreBoard {
    fn default() -> Self {
        Self {
            overall_score: 78,
            energy: CategoryScore { score: 85, trend: 5 },
            transportation: CategoryScore { score: 72, trend: 8 },
            waste: CategoryScore { score: 90, trend: -2 },
            water: CategoryScore {
                score: 68,
                trend: 12,
            },
            consumption: CategoryScore { score: 75, trend: 3 },
            history: [("Aug", 65), ("Sep", 69), ("Oct", 73), ("Nov", 76), ("Dec", 78)]
                .iter()
                .map(|&(month, score)| MonthScore {
                    month: month.to_string(),
                    score,
                })
                .collect(),
        }
    }
}

impl EcoScoreBoard {
    pub fn score(&self, category: ScoreCategory) -> CategoryScore {
        match category {
            ScoreCategory::Energy => self.energy,
            ScoreCategory::Transportation => self.transportation,
            ScoreCategory::Waste => self.waste,
            ScoreCategory::Water => self.water,
            ScoreCategory::Consumption => self.consumption,
        }
    }

    /// Sums a category's recommendations into the projected score, CO2,
    /// and cost improvements. Three independent reductions over the same
    /// list, recomputed on every read; there is no cache to invalidate.
    pub fn projected_impact(&self, category: ScoreCategory) -> ProjectedImpact {
        let recommendations = category.recommendations();
        let score_increase: u32 = recommendations.iter().map(|r| r.points).sum();
        ProjectedImpact {
            score_increase,
            new_score: (self.score(category).score + score_increase).min(100),
            co2_kg_year: recommendations.iter().map(|r| r.co2_kg_year).sum(),
            cost_usd_year: recommendations.iter().map(|r| r.cost_usd_year).sum(),
        }
    }
}

// =============================================================================
// Score classification
// =============================================================================

/// Qualitative label for a 0-100 score.
pub fn score_label(score: u32) -> &'static str {
    if score >= 90 {
        "Exceptional"
    } else if score >= 80 {
        "Excellent"
    } else if score >= 70 {
        "Good"
    } else if score >= 60 {
        "Fair"
    } else {
        "Needs Improvement"
    }
}

/// Trend arrow for a signed month-over-month delta.
pub fn trend_icon(trend: i32) -> &'static str {
    if trend > 5 {
        "🚀"
    } else if trend > 0 {
        "📈"
    } else if trend < -5 {
        "📉"
    } else {
        "➡️"
    }
}

// =============================================================================
// Achievements
// =============================================================================

/// Eco-score achievements. Unlock status is a pure predicate over the
/// current board, evaluated on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Achievement {
    EcoBeginner,
    EnergySaver,
    WasteWarrior,
    GreenCommuter,
    WaterGuardian,
    EcoMaster,
}

impl Achievement {
    pub const ALL: &'static [Achievement] = &[
        Achievement::EcoBeginner,
        Achievement::EnergySaver,
        Achievement::WasteWarrior,
        Achievement::GreenCommuter,
        Achievement::WaterGuardian,
        Achievement::EcoMaster,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Achievement::EcoBeginner => "Eco Beginner",
            Achievement::EnergySaver => "Energy Saver",
            Achievement::WasteWarrior => "Waste Warrior",
            Achievement::GreenCommuter => "Green Commuter",
            Achievement::WaterGuardian => "Water Guardian",
            Achievement::EcoMaster => "Eco Master",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Achievement::EcoBeginner => "🌱",
            Achievement::EnergySaver => "⚡",
            Achievement::WasteWarrior => "♻️",
            Achievement::GreenCommuter => "🚴‍♀️",
            Achievement::WaterGuardian => "💧",
            Achievement::EcoMaster => "🏆",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::EcoBeginner => "First score calculation",
            Achievement::EnergySaver => "Energy score above 80",
            Achievement::WasteWarrior => "Waste score above 85",
            Achievement::GreenCommuter => "Transportation score above 80",
            Achievement::WaterGuardian => "Water score above 80",
            Achievement::EcoMaster => "Overall score above 90",
        }
    }

    /// Whether this achievement is unlocked for the given board.
    pub fn unlocked(self, board: &EcoScoreBoard) -> bool {
        match self {
            // Having a board at all means a score was calculated.
            Achievement::EcoBeginner => true,
            Achievement::EnergySaver => board.energy.score > 80,
            Achievement::WasteWarrior => board.waste.score > 85,
            Achievement::GreenCommuter => board.transportation.score > 80,
            Achievement::WaterGuardian => board.water.score > 80,
            Achievement::EcoMaster => board.overall_score > 90,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================


pub struct EcoScorePlugin;

impl Plugin for EcoScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EcoScoreBoard>();
    }
}
