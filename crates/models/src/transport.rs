//! Transportation ledger: trips tagged by mode, per-mode emission and cost
//! coefficients, and the alternative-mode comparison.
//!
//! [`TransportMode`] is the single reference table every derived value
//! depends on. Today's totals are derived on read by reducing over the
//! trip list, so the ledger and the totals cannot drift apart.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Transport mode reference table
// =============================================================================

/// A way of getting around, with fixed emission and cost coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TransportMode {
    #[default]
    Car,
    Bus,
    Train,
    Bike,
    Walk,
    Carpool,
    Scooter,
}

impl TransportMode {
    /// All modes in display order.
    pub const ALL: &'static [TransportMode] = &[
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Bike,
        TransportMode::Walk,
        TransportMode::Carpool,
        TransportMode::Scooter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::Bus => "Bus",
            TransportMode::Train => "Train",
            TransportMode::Bike => "Bike",
            TransportMode::Walk => "Walk",
            TransportMode::Carpool => "Carpool",
            TransportMode::Scooter => "E-Scooter",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TransportMode::Car => "🚗",
            TransportMode::Bus => "🚌",
            TransportMode::Train => "🚊",
            TransportMode::Bike => "🚴‍♀️",
            TransportMode::Walk => "🚶‍♀️",
            TransportMode::Carpool => "🚗👥",
            TransportMode::Scooter => "🛴",
        }
    }

    /// kg CO2 emitted per km traveled.
    pub fn emissions_factor(self) -> f32 {
        match self {
            TransportMode::Car => 0.304,
            TransportMode::Bus => 0.034,
            TransportMode::Train => 0.028,
            TransportMode::Bike => 0.0,
            TransportMode::Walk => 0.0,
            TransportMode::Carpool => 0.152,
            TransportMode::Scooter => 0.05,
        }
    }

    /// Dollars spent per km traveled.
    pub fn cost_factor(self) -> f32 {
        match self {
            TransportMode::Car => 0.68,
            TransportMode::Bus => 0.15,
            TransportMode::Train => 0.12,
            TransportMode::Bike => 0.0,
            TransportMode::Walk => 0.0,
            TransportMode::Carpool => 0.34,
            TransportMode::Scooter => 0.25,
        }
    }

    /// Whether this mode counts toward the eco-transport goal.
    pub fn is_eco(self) -> bool {
        !matches!(self, TransportMode::Car)
    }

    /// Rough travel-time heuristic used for duration estimates.
    pub fn minutes_per_km(self) -> f32 {
        match self {
            TransportMode::Walk => 12.0,
            TransportMode::Bike => 4.0,
            _ => 3.0,
        }
    }
}

// =============================================================================
// Trips
// =============================================================================

/// A recorded trip. Emissions, cost, and duration are derived from the
/// mode table at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: u32,
    pub mode: TransportMode,
    pub from: String,
    pub to: String,
    pub distance_km: f32,
    pub emissions_kg: f32,
    pub cost: f32,
    /// Departure time as entered ("08:30").
    pub time: String,
    pub duration_min: u32,
    pub notes: String,
}

/// What a different mode would have cost for the same distance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Alternative {
    pub mode: TransportMode,
    pub emissions_kg: f32,
    pub cost: f32,
    pub duration_min: u32,
    pub emissions_saved_kg: f32,
    pub cost_saved: f32,
}

impl Trip {
    /// Ranks every other mode against this trip: keeps only modes that
    /// would strictly save emissions, sorted by emissions saved
    /// (largest first).
    pub fn alternatives(&self) -> Vec<Alternative> {
        let mut alternatives: Vec<Alternative> = TransportMode::ALL
            .iter()
            .filter(|&&mode| mode != self.mode)
            .map(|&mode| {
                let emissions_kg = self.distance_km * mode.emissions_factor();
                let cost = self.distance_km * mode.cost_factor();
                Alternative {
                    mode,
                    emissions_kg,
                    cost,
                    duration_min: (self.distance_km * mode.minutes_per_km()).round() as u32,
                    emissions_saved_kg: self.emissions_kg - emissions_kg,
                    cost_saved: self.cost - cost,
                }
            })
            .filter(|alt| alt.emissions_saved_kg > 0.0)
            .collect();
        alternatives.sort_by(|a, b| b.emissions_saved_kg.total_cmp(&a.emissions_saved_kg));
        alternatives
    }
}

/// Form payload for adding a trip. Distance arrives as the raw text-field
/// string and is validated by [`TravelLog::add_trip`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripInput {
    pub mode: TransportMode,
    pub from: String,
    pub to: String,
    pub distance: String,
    pub time: String,
    pub notes: String,
}

impl Default for TripInput {
    fn default() -> Self {
        Self {
            mode: TransportMode::Car,
            from: String::new(),
            to: String::new(),
            distance: String::new(),
            time: String::new(),
            notes: String::new(),
        }
    }
}

// =============================================================================
// Weekly summary and goals
// =============================================================================

/// Per-mode weekly rollup (seeded mock data).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModeWeekSummary {
    pub mode: TransportMode,
    pub distance_km: f32,
    pub emissions_kg: f32,
    pub cost: f32,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeekTotals {
    pub distance_km: f32,
    pub emissions_kg: f32,
    pub cost: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TravelGoals {
    pub weekly_emissions_kg: f32,
    pub weekly_distance_km: f32,
    /// Target share of trips using eco-friendly transport, in percent.
    pub eco_mode_pct: u32,
    pub current_eco_pct: u32,
}

/// Summed emissions and cost saved by today's eco trips versus driving
/// the same distances.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EcoSavings {
    pub emissions_kg: f32,
    pub cost: f32,
}

// =============================================================================
// Ledger resource
// =============================================================================

/// The transportation page state: today's trip ledger plus seeded weekly
/// rollups and goals.
#[derive(Resource, Clone, Debug, Serialize, Deserialize)]
pub struct TravelLog {
    /// Today's trips, newest first.
    pub trips: Vec<Trip>,
    pub weekly: WeekTotals,
    pub weekly_by_mode: Vec<ModeWeekSummary>,
    pub goals: TravelGoals,
}

impl Default for TravelLog {
    fn default() -> Self {
        Self {
            trips: seed_trips(),
            weekly: WeekTotals {
                distance_km: 156.8,
                emissions_kg: 23.4,
                cost: 89.30,
            },
            weekly_by_mode: vec![
                ModeWeekSummary {
                    mode: TransportMode::Car,
                    distance_km: 78.5,
                    emissions_kg: 18.2,
                    cost: 65.30,
                    percentage: 50,
                },
                ModeWeekSummary {
                    mode: TransportMode::Bus,
                    distance_km: 45.3,
                    emissions_kg: 3.8,
                    cost: 20.00,
                    percentage: 29,
                },
                ModeWeekSummary {
                    mode: TransportMode::Bike,
                    distance_km: 23.0,
                    emissions_kg: 0.0,
                    cost: 0.0,
                    percentage: 15,
                },
                ModeWeekSummary {
                    mode: TransportMode::Walk,
                    distance_km: 10.0,
                    emissions_kg: 0.0,
                    cost: 0.0,
                    percentage: 6,
                },
                ModeWeekSummary {
                    mode: TransportMode::Train,
                    distance_km: 0.0,
                    emissions_kg: 0.0,
                    cost: 0.0,
                    percentage: 0,
                },
            ],
            goals: TravelGoals {
                weekly_emissions_kg: 20.0,
                weekly_distance_km: 150.0,
                eco_mode_pct: 60,
                current_eco_pct: 44,
            },
        }
    }
}

impl TravelLog {
    /// Validates and records a trip at the front of today's ledger.
    /// Declines (returns `false`) when either endpoint is blank or the
    /// distance does not parse as a non-negative number.
    pub fn add_trip(&mut self, input: &TripInput) -> bool {
        if input.from.trim().is_empty() || input.to.trim().is_empty() {
            return false;
        }
        let Some(distance_km) = input
            .distance
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|d| d.is_finite() && *d >= 0.0)
        else {
            return false;
        };

        let mode = input.mode;
        let trip = Trip {
            id: self.trips.len() as u32 + 1,
            mode,
            from: input.from.clone(),
            to: input.to.clone(),
            distance_km,
            emissions_kg: distance_km * mode.emissions_factor(),
            cost: distance_km * mode.cost_factor(),
            time: input.time.clone(),
            duration_min: (distance_km * mode.minutes_per_km()).round() as u32,
            notes: input.notes.clone(),
        };
        self.trips.insert(0, trip);
        true
    }

    /// Today's distance, reduced from the ledger.
    pub fn today_distance(&self) -> f32 {
        self.trips.iter().map(|t| t.distance_km).sum()
    }

    /// Today's emissions, reduced from the ledger.
    pub fn today_emissions(&self) -> f32 {
        self.trips.iter().map(|t| t.emissions_kg).sum()
    }

    /// Today's spend, reduced from the ledger.
    pub fn today_cost(&self) -> f32 {
        self.trips.iter().map(|t| t.cost).sum()
    }

    /// Share of today's trips using an eco mode, rounded to whole percent.
    /// 0 when no trips are recorded.
    pub fn eco_mode_percentage(&self) -> u32 {
        if self.trips.is_empty() {
            return 0;
        }
        let eco = self.trips.iter().filter(|t| t.mode.is_eco()).count();
        ((eco as f32 / self.trips.len() as f32) * 100.0).round() as u32
    }

    /// How far through the weekly emissions budget we are, capped at 100.
    pub fn weekly_progress(&self) -> f32 {
        (self.weekly.emissions_kg / self.goals.weekly_emissions_kg * 100.0).min(100.0)
    }

    /// Emissions and cost saved today by taking eco modes instead of the
    /// car over the same distances.
    pub fn eco_savings_vs_car(&self) -> EcoSavings {
        self.trips
            .iter()
            .filter(|t| t.mode.is_eco())
            .fold(EcoSavings::default(), |acc, trip| {
                let car_emissions = trip.distance_km * TransportMode::Car.emissions_factor();
                let car_cost = trip.distance_km * TransportMode::Car.cost_factor();
                EcoSavings {
                    emissions_kg: acc.emissions_kg + (car_emissions - trip.emissions_kg),
                    cost: acc.cost + (car_cost - trip.cost),
                }
            })
    }
}

// =============================================================================
// Seed data
// =============================================================================

fn seed_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: 1,
            mode: TransportMode::Car,
            from: "Home".to_string(),
            to: "Office".to_string(),
            distance_km: 12.5,
            emissions_kg: 3.8,
            cost: 8.50,
            time: "08:30".to_string(),
            duration_min: 25,
            notes: "Heavy traffic".to_string(),
        },
        Trip {
            id: 2,
            mode: TransportMode::Walk,
            from: "Office".to_string(),
            to: "Lunch".to_string(),
            distance_km: 1.2,
            emissions_kg: 0.0,
            cost: 0.0,
            time: "12:15".to_string(),
            duration_min: 15,
            notes: "Beautiful weather".to_string(),
        },
        Trip {
            id: 3,
            mode: TransportMode::Bus,
            from: "Lunch".to_string(),
            to: "Home".to_string(),
            distance_km: 11.6,
            emissions_kg: 0.4,
            cost: 4.00,
            time: "17:45".to_string(),
            duration_min: 35,
            notes: "Used transit app".to_string(),
        },
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn car_trip(distance_km: f32) -> Trip {
        Trip {
            id: 1,
            mode: TransportMode::Car,
            from: "A".to_string(),
            to: "B".to_string(),
            distance_km,
            emissions_kg: distance_km * TransportMode::Car.emissions_factor(),
            cost: distance_km * TransportMode::Car.cost_factor(),
            time: "09:00".to_string(),
            duration_min: (distance_km * 3.0).round() as u32,
            notes: String::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Mode table
    // -------------------------------------------------------------------------

    #[test]
    fn test_mode_coefficients() {
        assert!((TransportMode::Car.emissions_factor() - 0.304).abs() < 1e-6);
        assert!((TransportMode::Car.cost_factor() - 0.68).abs() < 1e-6);
        assert_eq!(TransportMode::Bike.emissions_factor(), 0.0);
        assert_eq!(TransportMode::Walk.cost_factor(), 0.0);
        assert!((TransportMode::Carpool.emissions_factor() - 0.152).abs() < 1e-6);
    }

    #[test]
    fn test_only_car_is_not_eco() {
        for &mode in TransportMode::ALL {
            assert_eq!(mode.is_eco(), mode != TransportMode::Car);
        }
    }

    #[test]
    fn test_minutes_per_km_lookup() {
        assert_eq!(TransportMode::Walk.minutes_per_km(), 12.0);
        assert_eq!(TransportMode::Bike.minutes_per_km(), 4.0);
        assert_eq!(TransportMode::Bus.minutes_per_km(), 3.0);
        assert_eq!(TransportMode::Train.minutes_per_km(), 3.0);
    }

    // -------------------------------------------------------------------------
    // add_trip
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_trip_derives_values() {
        let mut log = TravelLog::default();
        let added = log.add_trip(&TripInput {
            mode: TransportMode::Car,
            from: "Home".to_string(),
            to: "Gym".to_string(),
            distance: "12.5".to_string(),
            time: "07:15".to_string(),
            notes: String::new(),
        });
        assert!(added);

        let trip = &log.trips[0]; // prepended
        assert!((trip.emissions_kg - 3.8).abs() < 0.01);
        assert!((trip.cost - 8.50).abs() < 0.01);
        assert_eq!(trip.duration_min, 38); // round(12.5 * 3)
        assert_eq!(log.trips.len(), 4);
    }

    #[test]
    fn test_add_trip_duration_uses_mode_heuristic() {
        let mut log = TravelLog { trips: Vec::new(), ..TravelLog::default() };
        let mut input = TripInput {
            mode: TransportMode::Walk,
            from: "A".to_string(),
            to: "B".to_string(),
            distance: "2.0".to_string(),
            time: String::new(),
            notes: String::new(),
        };
        log.add_trip(&input);
        assert_eq!(log.trips[0].duration_min, 24); // 2 * 12

        input.mode = TransportMode::Bike;
        log.add_trip(&input);
        assert_eq!(log.trips[0].duration_min, 8); // 2 * 4
    }

    #[test]
    fn test_add_trip_rejects_incomplete_input() {
        let mut log = TravelLog::default();
        let valid = TripInput {
            mode: TransportMode::Bus,
            from: "A".to_string(),
            to: "B".to_string(),
            distance: "3.0".to_string(),
            time: String::new(),
            notes: String::new(),
        };

        assert!(!log.add_trip(&TripInput { from: String::new(), ..valid.clone() }));
        assert!(!log.add_trip(&TripInput { to: "  ".to_string(), ..valid.clone() }));
        assert!(!log.add_trip(&TripInput { distance: String::new(), ..valid.clone() }));
        assert!(!log.add_trip(&TripInput { distance: "3km".to_string(), ..valid.clone() }));
        assert!(!log.add_trip(&TripInput { distance: "-1".to_string(), ..valid.clone() }));
        assert_eq!(log.trips.len(), 3);

        assert!(log.add_trip(&valid));
        assert_eq!(log.trips.len(), 4);
    }

    // -------------------------------------------------------------------------
    // Derived totals
    // -------------------------------------------------------------------------

    #[test]
    fn test_today_totals_are_reductions_over_ledger() {
        let log = TravelLog::default();
        assert!((log.today_distance() - (12.5 + 1.2 + 11.6)).abs() < 0.001);
        assert!((log.today_emissions() - 4.2).abs() < 0.001);
        assert!((log.today_cost() - 12.50).abs() < 0.001);
    }

    #[test]
    fn test_totals_follow_added_trips() {
        let mut log = TravelLog::default();
        let before = log.today_distance();
        log.add_trip(&TripInput {
            mode: TransportMode::Bike,
            from: "Home".to_string(),
            to: "Park".to_string(),
            distance: "5".to_string(),
            time: String::new(),
            notes: String::new(),
        });
        assert!((log.today_distance() - (before + 5.0)).abs() < 0.001);
    }

    // -------------------------------------------------------------------------
    // Eco percentage and goals
    // -------------------------------------------------------------------------

    #[test]
    fn test_eco_percentage_seed() {
        // 2 of 3 seeded trips are eco -> 67%
        assert_eq!(TravelLog::default().eco_mode_percentage(), 67);
    }

    #[test]
    fn test_eco_percentage_empty_is_zero() {
        let log = TravelLog { trips: Vec::new(), ..TravelLog::default() };
        assert_eq!(log.eco_mode_percentage(), 0);
    }

    #[test]
    fn test_weekly_progress_caps_at_100() {
        let log = TravelLog::default();
        // 23.4 / 20.0 would be 117% -> capped
        assert!((log.weekly_progress() - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_weekly_progress_under_target() {
        let mut log = TravelLog::default();
        log.weekly.emissions_kg = 15.0;
        assert!((log.weekly_progress() - 75.0).abs() < 0.001);
    }

    #[test]
    fn test_eco_savings_vs_car() {
        let log = TravelLog::default();
        let savings = log.eco_savings_vs_car();
        // walk 1.2 km: car would emit 0.3648 and cost 0.816
        // bus 11.6 km: car would emit 3.5264 and cost 7.888; bus cost 4.00
        let expected_emissions = (1.2 * 0.304 - 0.0) + (11.6 * 0.304 - 0.4);
        let expected_cost = (1.2 * 0.68 - 0.0) + (11.6 * 0.68 - 4.00);
        assert!((savings.emissions_kg - expected_emissions).abs() < 0.001);
        assert!((savings.cost - expected_cost).abs() < 0.001);
    }

    // -------------------------------------------------------------------------
    // Alternatives
    // -------------------------------------------------------------------------

    #[test]
    fn test_alternatives_exclude_own_mode() {
        let trip = car_trip(12.5);
        let alternatives = trip.alternatives();
        assert!(alternatives.iter().all(|a| a.mode != TransportMode::Car));
    }

    #[test]
    fn test_alternatives_require_strict_savings() {
        // A walking trip emits nothing, so nothing can beat it.
        let trip = Trip {
            mode: TransportMode::Walk,
            emissions_kg: 0.0,
            ..car_trip(2.0)
        };
        assert!(trip.alternatives().is_empty());
    }

    #[test]
    fn test_alternatives_sorted_by_emissions_saved() {
        let trip = car_trip(12.5);
        let alternatives = trip.alternatives();
        // Every other mode beats a car trip.
        assert_eq!(alternatives.len(), TransportMode::ALL.len() - 1);
        for pair in alternatives.windows(2) {
            assert!(pair[0].emissions_saved_kg >= pair[1].emissions_saved_kg);
        }
        // Zero-emission modes lead the ranking.
        assert_eq!(alternatives[0].emissions_kg, 0.0);
    }

    #[test]
    fn test_alternative_values_for_car_trip() {
        let trip = car_trip(12.5);
        let alternatives = trip.alternatives();
        let bus = alternatives
            .iter()
            .find(|a| a.mode == TransportMode::Bus)
            .expect("bus alternative");
        assert!((bus.emissions_kg - 12.5 * 0.034).abs() < 0.001);
        assert!((bus.emissions_saved_kg - (trip.emissions_kg - bus.emissions_kg)).abs() < 0.001);
        assert!((bus.cost - 12.5 * 0.15).abs() < 0.001);
        assert_eq!(bus.duration_min, 38);
    }
}

pub struct TransportPlugin;

impl Plugin for TransportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TravelLog>();
    }
}
