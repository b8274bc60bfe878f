//! Objective predicates and the per-objective state they carry between turns.
//!
//! Each [`ObjectiveGoal`] maps a snapshot to a `current_value`. Goals that
//! need memory (streaks, baselines, phase flags) keep it in a matching
//! [`GoalState`] variant created up front by [`ObjectiveGoal::initial_state`].

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::snapshot::CityStateSnapshot;

// =============================================================================
// Metrics & thresholds
// =============================================================================

/// A scalar read straight off the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub enum CityMetric {
    Population,
    Money,
    Satisfaction,
    RoadSegments,
    TechnologiesUnlocked,
    TotalBuildings,
}

impl CityMetric {
    pub fn read(self, snapshot: &CityStateSnapshot) -> f64 {
        match self {
            CityMetric::Population => f64::from(snapshot.population),
            CityMetric::Money => snapshot.money,
            CityMetric::Satisfaction => snapshot.satisfaction,
            CityMetric::RoadSegments => f64::from(snapshot.road_segment_count),
            CityMetric::TechnologiesUnlocked => f64::from(snapshot.unlocked_technology_count),
            CityMetric::TotalBuildings => f64::from(snapshot.total_buildings()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Threshold {
    AtLeast(f64),
    Below(f64),
}

impl Threshold {
    pub fn holds(self, value: f64) -> bool {
        match self {
            Threshold::AtLeast(limit) => value >= limit,
            Threshold::Below(limit) => value < limit,
        }
    }
}

/// Buildings of any of `building_types` count toward `required`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingQuota {
    pub building_types: Vec<String>,
    pub required: u32,
}

impl BuildingQuota {
    pub fn new(building_types: &[&str], required: u32) -> Self {
        Self {
            building_types: building_types.iter().map(|t| t.to_string()).collect(),
            required,
        }
    }
}

// =============================================================================
// ObjectiveGoal
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectiveGoal {
    /// current = metric value this turn.
    Reach(CityMetric),
    /// current = consecutive turns the threshold held; resets on a miss.
    Sustained {
        metric: CityMetric,
        threshold: Threshold,
    },
    /// current = buildings of any listed type, uncapped.
    Buildings { building_types: Vec<String> },
    /// current = sum over quotas of `min(count, required)`.
    BuildingQuotas(Vec<BuildingQuota>),
    /// current = road segments plus buildings of the listed types.
    RoadsAndBuildings { building_types: Vec<String> },
    /// current = population gained since the baseline was captured.
    PopulationGrowth,
    /// current = 1 once the metric has dropped below `low_below` and later
    /// reached `high_at_least`.
    PhaseTransition {
        metric: CityMetric,
        low_below: f64,
        high_at_least: f64,
    },
    /// current = completed swings from below `low_below` to above `high_above`.
    CyclicalThreshold {
        metric: CityMetric,
        low_below: f64,
        high_above: f64,
    },
}

/// Evaluation memory for one objective.
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub enum GoalState {
    Stateless,
    Streak(u32),
    Baseline(Option<f64>),
    Phases {
        in_low_phase: bool,
        in_high_phase: bool,
        cycles: u32,
    },
}

impl GoalState {
    fn same_variant(&self, other: &GoalState) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl ObjectiveGoal {
    pub fn initial_state(&self) -> GoalState {
        match self {
            ObjectiveGoal::Reach(_)
            | ObjectiveGoal::Buildings { .. }
            | ObjectiveGoal::BuildingQuotas(_)
            | ObjectiveGoal::RoadsAndBuildings { .. } => GoalState::Stateless,
            ObjectiveGoal::Sustained { .. } => GoalState::Streak(0),
            ObjectiveGoal::PopulationGrowth => GoalState::Baseline(None),
            ObjectiveGoal::PhaseTransition { .. } | ObjectiveGoal::CyclicalThreshold { .. } => {
                GoalState::Phases {
                    in_low_phase: false,
                    in_high_phase: false,
                    cycles: 0,
                }
            }
        }
    }

    /// True when `state` is the variant this goal keeps.
    pub fn accepts_state(&self, state: &GoalState) -> bool {
        self.initial_state().same_variant(state)
    }

    /// Computes this turn's `current_value`, updating `state` in place.
    ///
    /// `active_since_start` is set when the objective has been active since
    /// turn 0, which lets growth goals use the snapshot's start population.
    pub fn evaluate(
        &self,
        state: &mut GoalState,
        snapshot: &CityStateSnapshot,
        active_since_start: bool,
    ) -> f64 {
        if !self.accepts_state(state) {
            *state = self.initial_state();
        }

        match (self, state) {
            (ObjectiveGoal::Reach(metric), _) => metric.read(snapshot),

            (ObjectiveGoal::Sustained { metric, threshold }, GoalState::Streak(turns)) => {
                if threshold.holds(metric.read(snapshot)) {
                    *turns += 1;
                } else {
                    *turns = 0;
                }
                f64::from(*turns)
            }

            (ObjectiveGoal::BuildingQuotas(quotas), _) => quotas
                .iter()
                .map(|q| f64::from(snapshot.building_count_of(&q.building_types).min(q.required)))
                .sum(),

            (ObjectiveGoal::Buildings { building_types }, _) => {
                f64::from(snapshot.building_count_of(building_types))
            }

            (ObjectiveGoal::RoadsAndBuildings { building_types }, _) => f64::from(
                snapshot
                    .road_segment_count
                    .saturating_add(snapshot.building_count_of(building_types)),
            ),

            (ObjectiveGoal::PopulationGrowth, GoalState::Baseline(baseline)) => {
                let population = f64::from(snapshot.population);
                let start = *baseline.get_or_insert_with(|| {
                    if active_since_start && snapshot.start_population > 0 {
                        f64::from(snapshot.start_population)
                    } else {
                        population
                    }
                });
                (population - start).max(0.0)
            }

            (
                ObjectiveGoal::PhaseTransition {
                    metric,
                    low_below,
                    high_at_least,
                },
                GoalState::Phases {
                    in_low_phase,
                    in_high_phase,
                    ..
                },
            ) => {
                let value = metric.read(snapshot);
                if !*in_high_phase {
                    if value < *low_below {
                        *in_low_phase = true;
                    } else if *in_low_phase && value >= *high_at_least {
                        *in_high_phase = true;
                    }
                }
                if *in_high_phase {
                    1.0
                } else {
                    0.0
                }
            }

            (
                ObjectiveGoal::CyclicalThreshold {
                    metric,
                    low_below,
                    high_above,
                },
                GoalState::Phases {
                    in_low_phase,
                    in_high_phase,
                    cycles,
                },
            ) => {
                let value = metric.read(snapshot);
                if value < *low_below && !*in_low_phase {
                    *in_low_phase = true;
                    *in_high_phase = false;
                } else if value > *high_above && *in_low_phase && !*in_high_phase {
                    *in_high_phase = true;
                    *in_low_phase = false;
                    *cycles += 1;
                }
                f64::from(*cycles)
            }

            // unreachable once the state has been reset above
            _ => 0.0,
        }
    }
}
