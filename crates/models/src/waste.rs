//! Waste ledger: entries tagged by material type, daily/weekly/monthly
//! aggregates, diversion rate, and rule-based insights.
//!
//! Daily per-type amounts are derived on read by reducing over entries
//! dated [`TODAY`]; the weekly and monthly rollups are seeded mock data.
//! Insights are a fixed rule list evaluated in a fixed order against the
//! current aggregates.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// The date the mock ledger is authored against. Entries added through the
/// form are stamped with this date so they land in today's aggregates.
pub const TODAY: &str = "2025-12-02";

/// Daily plastic above this mass triggers the reusable-container warning.
pub const PLASTIC_WARNING_KG: f32 = 0.2;

/// Daily organic waste above this mass triggers the composting tip.
pub const ORGANIC_TIP_KG: f32 = 1.0;

/// Weekly diversion rate above this percentage earns the success insight.
pub const DIVERSION_SUCCESS_PCT: f32 = 80.0;

// =============================================================================
// Waste type reference table
// =============================================================================

/// The seven tracked waste material types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WasteType {
    #[default]
    Plastic,
    Organic,
    Paper,
    Glass,
    Metal,
    Electronic,
    Other,
}

impl WasteType {
    /// All types in display order.
    pub const ALL: &'static [WasteType] = &[
        WasteType::Plastic,
        WasteType::Organic,
        WasteType::Paper,
        WasteType::Glass,
        WasteType::Metal,
        WasteType::Electronic,
        WasteType::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WasteType::Plastic => "Plastic",
            WasteType::Organic => "Organic",
            WasteType::Paper => "Paper",
            WasteType::Glass => "Glass",
            WasteType::Metal => "Metal",
            WasteType::Electronic => "E-Waste",
            WasteType::Other => "Other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WasteType::Plastic => "🥤",
            WasteType::Organic => "🍎",
            WasteType::Paper => "📄",
            WasteType::Glass => "🍾",
            WasteType::Metal => "🥫",
            WasteType::Electronic => "📱",
            WasteType::Other => "🗑️",
        }
    }

    /// Allowed sub-categories for this type, offered by the entry form.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            WasteType::Plastic => &[
                "Food Container",
                "Beverage Bottle",
                "Shopping Bag",
                "Packaging",
                "Other",
            ],
            WasteType::Organic => &["Food Waste", "Garden Waste", "Food Scraps", "Other"],
            WasteType::Paper => &["Newspaper", "Magazines", "Packaging", "Office Paper", "Other"],
            WasteType::Glass => &["Bottles", "Jars", "Other"],
            WasteType::Metal => &["Cans", "Foil", "Other"],
            WasteType::Electronic => &["Phone", "Computer", "Batteries", "Other"],
            WasteType::Other => &["Textiles", "Furniture", "Miscellaneous"],
        }
    }
}

// =============================================================================
// Entries
// =============================================================================

/// A single logged piece of waste.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteEntry {
    pub id: u32,
    /// ISO date ("2025-12-02").
    pub date: String,
    pub kind: WasteType,
    pub amount_kg: f32,
    pub description: String,
    /// Sub-category from [`WasteType::categories`].
    pub category: String,
    pub recyclable: bool,
    pub compostable: bool,
    /// Time of day as entered ("14:30").
    pub timestamp: String,
}

/// Form payload for a new entry; the amount arrives as raw text-field
/// input and is validated by [`WasteLog::add_entry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteEntryInput {
    pub kind: WasteType,
    pub amount: String,
    pub description: String,
    pub category: String,
    pub recyclable: bool,
    pub compostable: bool,
    pub timestamp: String,
}

impl Default for WasteEntryInput {
    fn default() -> Self {
        Self {
            kind: WasteType::Plastic,
            amount: String::new(),
            description: String::new(),
            category: String::new(),
            recyclable: false,
            compostable: false,
            timestamp: String::new(),
        }
    }
}

// =============================================================================
// Summaries and insights
// =============================================================================

/// Seeded weekly rollup of where waste went.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeekSummary {
    pub total_kg: f32,
    pub recycled_kg: f32,
    pub composted_kg: f32,
    pub landfill_kg: f32,
}

/// Seeded monthly rollup against the reduction goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthSummary {
    pub total_kg: f32,
    /// Percentage reduction versus last month.
    pub reduction_pct: f32,
    pub goal_kg: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightKind {
    Warning,
    Tip,
    Success,
}

/// One fired insight rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub icon: &'static str,
    pub message: &'static str,
}

// =============================================================================
// Ledger resource
// =============================================================================

/// The waste page state: the entry ledger plus seeded weekly and monthly
/// rollups.
#[derive(Resource, Clone, Debug, Serialize, Deserialize)]
pub struct WasteLog {
    /// All entries, newest first.
    pub entries: Vec<WasteEntry>,
    pub weekly: WeekSummary,
    pub monthly: MonthSummary,
}

impl Default for WasteLog {
    fn default() -> Self {
        Self {
            entries: seed_entries(),
            weekly: WeekSummary {
                total_kg: 12.5,
                recycled_kg: 8.2,
                composted_kg: 3.1,
                landfill_kg: 1.2,
            },
            monthly: MonthSummary {
                total_kg: 52.3,
                reduction_pct: 18.5,
                goal_kg: 40.0,
            },
        }
    }
}

impl WasteLog {
    /// Validates and records an entry at the front of the ledger, dated
    /// [`TODAY`]. Declines (returns `false`) when the amount is blank or
    /// does not parse as a non-negative number, or the description is
    /// blank.
    pub fn add_entry(&mut self, input: &WasteEntryInput) -> bool {
        let Some(amount_kg) = input
            .amount
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|a| a.is_finite() && *a >= 0.0)
        else {
            return false;
        };
        if input.description.trim().is_empty() {
            return false;
        }

        let entry = WasteEntry {
            id: self.entries.len() as u32 + 1,
            date: TODAY.to_string(),
            kind: input.kind,
            amount_kg,
            description: input.description.clone(),
            category: input.category.clone(),
            recyclable: input.recyclable,
            compostable: input.compostable,
            timestamp: input.timestamp.clone(),
        };
        self.entries.insert(0, entry);
        true
    }

    /// Today's mass of one waste type, reduced from the ledger.
    pub fn daily_amount(&self, kind: WasteType) -> f32 {
        self.entries
            .iter()
            .filter(|e| e.date == TODAY && e.kind == kind)
            .map(|e| e.amount_kg)
            .sum()
    }

    /// Today's total mass across all types.
    pub fn daily_total(&self) -> f32 {
        self.entries
            .iter()
            .filter(|e| e.date == TODAY)
            .map(|e| e.amount_kg)
            .sum()
    }

    /// Share of this week's waste diverted to recycling or composting, in
    /// percent. 0 when the weekly total is zero.
    pub fn diversion_rate(&self) -> f32 {
        if self.weekly.total_kg <= 0.0 {
            return 0.0;
        }
        (self.weekly.recycled_kg + self.weekly.composted_kg) / self.weekly.total_kg * 100.0
    }

    /// Kilograms left before the monthly goal is exceeded (negative when
    /// already over).
    pub fn monthly_remaining(&self) -> f32 {
        self.monthly.goal_kg - self.monthly.total_kg
    }

    /// Evaluates the fixed insight rules against current aggregates.
    /// Rules are independent; zero or more fire, in rule order.
    pub fn insights(&self) -> Vec<Insight> {
        let mut insights = Vec::new();

        if self.daily_amount(WasteType::Plastic) > PLASTIC_WARNING_KG {
            insights.push(Insight {
                kind: InsightKind::Warning,
                icon: "⚠️",
                message: "High plastic waste today. Consider bringing reusable containers.",
            });
        }

        if self.daily_amount(WasteType::Organic) > ORGANIC_TIP_KG {
            insights.push(Insight {
                kind: InsightKind::Tip,
                icon: "💡",
                message: "Lots of food waste! Start composting to turn it into garden gold.",
            });
        }

        if self.diversion_rate() > DIVERSION_SUCCESS_PCT {
            insights.push(Insight {
                kind: InsightKind::Success,
                icon: "🎉",
                message: "Excellent recycling rate! You're keeping waste out of landfills.",
            });
        }

        insights
    }
}

// =============================================================================
// Seed data
// =============================================================================

fn seed_entries() -> Vec<WasteEntry> {
    vec![
        WasteEntry {
            id: 1,
            date: TODAY.to_string(),
            kind: WasteType::Plastic,
            amount_kg: 0.15,
            description: "Food packaging from lunch".to_string(),
            category: "Food Container".to_string(),
            recyclable: false,
            compostable: false,
            timestamp: "14:30".to_string(),
        },
        WasteEntry {
            id: 2,
            date: TODAY.to_string(),
            kind: WasteType::Organic,
            amount_kg: 0.8,
            description: "Vegetable scraps from meal prep".to_string(),
            category: "Food Waste".to_string(),
            recyclable: false,
            compostable: true,
            timestamp: "18:45".to_string(),
        },
        WasteEntry {
            id: 3,
            date: "2025-12-01".to_string(),
            kind: WasteType::Paper,
            amount_kg: 0.25,
            description: "Amazon delivery box".to_string(),
            category: "Packaging".to_string(),
            recyclable: true,
            compostable: false,
            timestamp: "16:20".to_string(),
        },
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plastic_entry(amount: &str) -> WasteEntryInput {
        WasteEntryInput {
            kind: WasteType::Plastic,
            amount: amount.to_string(),
            description: "test plastic".to_string(),
            category: "Packaging".to_string(),
            recyclable: false,
            compostable: false,
            timestamp: "12:00".to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // add_entry
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_entry_prepends_dated_today() {
        let mut log = WasteLog::default();
        assert!(log.add_entry(&plastic_entry("0.25")));

        let entry = &log.entries[0];
        assert_eq!(entry.date, TODAY);
        assert!((entry.amount_kg - 0.25).abs() < 0.001);
        assert_eq!(entry.id, 4);
        assert_eq!(log.entries.len(), 4);
    }

    #[test]
    fn test_add_entry_rejects_bad_input() {
        let mut log = WasteLog::default();

        assert!(!log.add_entry(&plastic_entry("")));
        assert!(!log.add_entry(&plastic_entry("lots")));
        assert!(!log.add_entry(&plastic_entry("-0.5")));
        assert!(!log.add_entry(&WasteEntryInput {
            description: "   ".to_string(),
            ..plastic_entry("0.5")
        }));
        assert_eq!(log.entries.len(), 3);
    }

    // -------------------------------------------------------------------------
    // Daily aggregates
    // -------------------------------------------------------------------------

    #[test]
    fn test_daily_amount_only_counts_today() {
        let log = WasteLog::default();
        assert!((log.daily_amount(WasteType::Plastic) - 0.15).abs() < 0.001);
        assert!((log.daily_amount(WasteType::Organic) - 0.8).abs() < 0.001);
        // The paper entry is dated yesterday.
        assert_eq!(log.daily_amount(WasteType::Paper), 0.0);
        assert_eq!(log.daily_amount(WasteType::Glass), 0.0);
    }

    #[test]
    fn test_daily_total() {
        let log = WasteLog::default();
        assert!((log.daily_total() - 0.95).abs() < 0.001);
    }

    #[test]
    fn test_daily_amount_follows_added_entries() {
        let mut log = WasteLog::default();
        log.add_entry(&plastic_entry("0.1"));
        assert!((log.daily_amount(WasteType::Plastic) - 0.25).abs() < 0.001);
    }

    // -------------------------------------------------------------------------
    // Diversion rate
    // -------------------------------------------------------------------------

    #[test]
    fn test_diversion_rate_seed() {
        let log = WasteLog::default();
        // (8.2 + 3.1) / 12.5 = 90.4%
        assert!((log.diversion_rate() - 90.4).abs() < 0.01);
        assert_eq!(format!("{:.1}", log.diversion_rate()), "90.4");
    }

    #[test]
    fn test_diversion_rate_zero_total_is_guarded() {
        let mut log = WasteLog::default();
        log.weekly = WeekSummary {
            total_kg: 0.0,
            recycled_kg: 0.0,
            composted_kg: 0.0,
            landfill_kg: 0.0,
        };
        assert_eq!(log.diversion_rate(), 0.0);
    }

    // -------------------------------------------------------------------------
    // Insights
    // -------------------------------------------------------------------------

    #[test]
    fn test_seed_fires_only_success_insight() {
        let log = WasteLog::default();
        let insights = log.insights();
        // plastic 0.15 < 0.2, organic 0.8 < 1.0, diversion 90.4 > 80
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Success);
    }

    #[test]
    fn test_plastic_warning_threshold() {
        let mut log = WasteLog::default();
        log.add_entry(&plastic_entry("0.1")); // today: 0.25 > 0.2
        let insights = log.insights();
        let warning = insights
            .iter()
            .find(|i| i.kind == InsightKind::Warning)
            .expect("plastic warning");
        assert_eq!(
            warning.message,
            "High plastic waste today. Consider bringing reusable containers."
        );
    }

    #[test]
    fn test_plastic_below_threshold_fires_nothing() {
        let mut log = WasteLog::default();
        log.entries.clear();
        log.weekly.total_kg = 0.0;
        log.add_entry(&plastic_entry("0.1"));
        assert!(log.insights().is_empty());
    }

    #[test]
    fn test_organic_tip_threshold() {
        let mut log = WasteLog::default();
        log.add_entry(&WasteEntryInput {
            kind: WasteType::Organic,
            ..plastic_entry("0.3")
        }); // today organic: 1.1 > 1.0
        let insights = log.insights();
        assert!(insights.iter().any(|i| i.kind == InsightKind::Tip));
    }

    #[test]
    fn test_insights_fire_in_rule_order() {
        let mut log = WasteLog::default();
        log.add_entry(&plastic_entry("0.2")); // plastic 0.35
        log.add_entry(&WasteEntryInput {
            kind: WasteType::Organic,
            ..plastic_entry("0.5")
        }); // organic 1.3
        let insights = log.insights();
        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert_eq!(insights[1].kind, InsightKind::Tip);
        assert_eq!(insights[2].kind, InsightKind::Success);
    }

    // -------------------------------------------------------------------------
    // Monthly goal
    // -------------------------------------------------------------------------

    #[test]
    fn test_monthly_remaining_can_go_negative() {
        let log = WasteLog::default();
        // 40.0 goal, 52.3 used
        assert!((log.monthly_remaining() - -12.3).abs() < 0.001);
    }

    // -------------------------------------------------------------------------
    // Reference table
    // -------------------------------------------------------------------------

    #[test]
    fn test_every_type_has_categories() {
        for &kind in WasteType::ALL {
            assert!(!kind.categories().is_empty());
        }
        assert_eq!(WasteType::ALL.len(), 7);
    }
}

pub struct WastePlugin;

impl Plugin for WastePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WasteLog>();
    }
}
