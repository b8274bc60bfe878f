use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::goals::{GoalState, ObjectiveGoal};
use crate::effects::EffectDelta;

// =============================================================================
// Status & Category
// =============================================================================

/// Lifecycle of an objective. Transitions only go forward:
/// `Locked -> Active -> Completed | Failed`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Encode, Decode, Serialize, Deserialize,
)]
pub enum ObjectiveStatus {
    #[default]
    Locked,
    Active,
    Completed,
    Failed,
}

impl ObjectiveStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, ObjectiveStatus::Completed | ObjectiveStatus::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub enum ObjectiveCategory {
    Population,
    Economy,
    Satisfaction,
    Buildings,
    Technology,
    Survival,
    Infrastructure,
    Growth,
    Challenge,
}

// =============================================================================
// Reward
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct ObjectiveReward {
    pub money: f64,
    pub satisfaction: f64,
    pub description: String,
}

impl ObjectiveReward {
    pub fn new(money: f64, satisfaction: f64, description: &str) -> Self {
        Self {
            money,
            satisfaction,
            description: description.to_string(),
        }
    }

    pub fn as_delta(&self) -> EffectDelta {
        EffectDelta::new(self.money, self.satisfaction, 0)
    }
}

// =============================================================================
// Objective
// =============================================================================

/// A goal in the objective graph plus its evaluation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ObjectiveCategory,
    pub goal: ObjectiveGoal,
    /// Per-goal memory carried between turns (streaks, baselines, phases).
    pub state: GoalState,
    pub target_value: f64,
    pub current_value: f64,
    pub status: ObjectiveStatus,
    pub prerequisites: Vec<String>,
    pub reward: ObjectiveReward,
    /// Turns allowed once the objective becomes active.
    pub time_limit: Option<u32>,
    pub turns_remaining: Option<u32>,
    pub activated_turn: Option<u32>,
}

impl Objective {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        category: ObjectiveCategory,
        goal: ObjectiveGoal,
        target_value: f64,
    ) -> Self {
        let state = goal.initial_state();
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            goal,
            state,
            target_value,
            current_value: 0.0,
            status: ObjectiveStatus::Locked,
            prerequisites: Vec::new(),
            reward: ObjectiveReward::default(),
            time_limit: None,
            turns_remaining: None,
            activated_turn: None,
        }
    }

    pub fn requires(mut self, prerequisites: &[&str]) -> Self {
        self.prerequisites = prerequisites.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn rewards(mut self, money: f64, satisfaction: f64, description: &str) -> Self {
        self.reward = ObjectiveReward::new(money, satisfaction, description);
        self
    }

    pub fn within(mut self, turns: u32) -> Self {
        self.time_limit = Some(turns);
        self
    }

    /// Progress in [0, 1]; a zero target counts as done.
    pub fn progress(&self) -> f64 {
        if self.target_value == 0.0 {
            return 1.0;
        }
        (self.current_value / self.target_value).clamp(0.0, 1.0)
    }

    pub fn is_met(&self) -> bool {
        self.current_value >= self.target_value
    }
}

// =============================================================================
// Outcomes & Summary
// =============================================================================

/// A terminal transition produced by one `update_objectives` call.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectiveOutcome {
    Completed {
        id: String,
        title: String,
        reward: ObjectiveReward,
    },
    Failed {
        id: String,
        title: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectivesSummary {
    pub active: usize,
    pub completed: usize,
    pub failed: usize,
    pub locked: usize,
    pub total: usize,
    /// Completed share of all objectives, 0 when there are none.
    pub completion_rate: f64,
}
