//! Deltas produced by the progression engine for the game loop to apply.

use std::collections::BTreeMap;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

// =============================================================================
// EffectDelta
// =============================================================================

/// A typed change to the city's money, satisfaction and population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct EffectDelta {
    pub money: f64,
    pub satisfaction: f64,
    pub population: i64,
}

impl EffectDelta {
    pub const fn new(money: f64, satisfaction: f64, population: i64) -> Self {
        Self {
            money,
            satisfaction,
            population,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.money == 0.0 && self.satisfaction == 0.0 && self.population == 0
    }

    pub fn description(&self) -> String {
        let mut parts = Vec::new();
        if self.money != 0.0 {
            parts.push(format!("{:+.0}$", self.money));
        }
        if self.satisfaction != 0.0 {
            parts.push(format!("{:+.0} satisfaction", self.satisfaction));
        }
        if self.population != 0 {
            parts.push(format!("{:+} population", self.population));
        }
        if parts.is_empty() {
            "no effect".to_string()
        } else {
            parts.join(", ")
        }
    }
}

// =============================================================================
// EffectBatch
// =============================================================================

/// Everything the progression engine produced in one turn (or one decision).
///
/// The caller applies it to the authoritative city state before building the
/// next snapshot, then drops it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectBatch {
    pub money_delta: f64,
    pub satisfaction_delta: f64,
    pub population_delta: i64,
    pub newly_unlocked_buildings: Vec<String>,
    /// Completed technology ids, each followed by the ids it declares as unlocked.
    pub newly_unlocked_technologies: Vec<String>,
    /// Summed bonuses of the technologies completed in this batch.
    pub technology_bonuses: BTreeMap<String, f64>,
    pub completed_objectives: Vec<String>,
    pub failed_objectives: Vec<String>,
    /// Random event proposed this turn, awaiting the player's decision.
    pub triggered_event: Option<String>,
    pub notifications: Vec<String>,
}

impl EffectBatch {
    pub fn apply_delta(&mut self, delta: &EffectDelta) {
        self.money_delta += delta.money;
        self.satisfaction_delta += delta.satisfaction;
        self.population_delta += delta.population;
    }

    pub fn add_bonuses(&mut self, bonuses: &BTreeMap<String, f64>) {
        for (name, value) in bonuses {
            *self.technology_bonuses.entry(name.clone()).or_insert(0.0) += value;
        }
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.notifications.push(text.into());
    }

    /// True when nothing happened this turn.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
