use bevy::prelude::*;

use super::catalogue::standard_catalogue;
use super::types::{Objective, ObjectiveOutcome, ObjectiveStatus, ObjectivesSummary};
use crate::config::OBJECTIVE_GRACE_TURNS;
use crate::snapshot::CityStateSnapshot;

// =============================================================================
// ObjectiveTracker
// =============================================================================

/// Owns the objective graph and evaluates it once per turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveTracker {
    pub(crate) objectives: Vec<Objective>,
    /// Ids in the order they completed.
    pub(crate) completed: Vec<String>,
    /// Ids in the order they failed.
    pub(crate) failed: Vec<String>,
    pub(crate) current_turn: u32,
}

impl Default for ObjectiveTracker {
    fn default() -> Self {
        Self::new(standard_catalogue())
    }
}

impl ObjectiveTracker {
    /// Builds a tracker and activates every objective without prerequisites.
    pub fn new(objectives: Vec<Objective>) -> Self {
        let mut tracker = Self {
            objectives,
            completed: Vec::new(),
            failed: Vec::new(),
            current_turn: 0,
        };
        tracker.refresh_availability();
        tracker
    }

    pub fn get(&self, id: &str) -> Option<&Objective> {
        self.objectives.iter().find(|o| o.id == id)
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    /// Evaluates every active objective against `snapshot`.
    ///
    /// Nothing is evaluated before `OBJECTIVE_GRACE_TURNS`. Completion is
    /// checked before the time limit ticks down, and newly satisfied
    /// prerequisites unlock their dependents at the end of the call.
    pub fn update_objectives(&mut self, snapshot: &CityStateSnapshot) -> Vec<ObjectiveOutcome> {
        self.current_turn = snapshot.turn;
        if self.current_turn < OBJECTIVE_GRACE_TURNS {
            return Vec::new();
        }

        let mut outcomes = Vec::new();
        for objective in &mut self.objectives {
            if objective.status != ObjectiveStatus::Active {
                continue;
            }

            let since_start = objective.activated_turn == Some(0);
            objective.current_value =
                objective
                    .goal
                    .evaluate(&mut objective.state, snapshot, since_start);

            if objective.is_met() {
                objective.status = ObjectiveStatus::Completed;
                self.completed.push(objective.id.clone());
                info!(
                    "Objective completed on turn {}: {}",
                    self.current_turn, objective.title
                );
                outcomes.push(ObjectiveOutcome::Completed {
                    id: objective.id.clone(),
                    title: objective.title.clone(),
                    reward: objective.reward.clone(),
                });
                continue;
            }

            if let Some(remaining) = objective.turns_remaining.as_mut() {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    objective.status = ObjectiveStatus::Failed;
                    self.failed.push(objective.id.clone());
                    info!(
                        "Objective failed on turn {}: {}",
                        self.current_turn, objective.title
                    );
                    outcomes.push(ObjectiveOutcome::Failed {
                        id: objective.id.clone(),
                        title: objective.title.clone(),
                    });
                }
            }
        }

        self.refresh_availability();
        outcomes
    }

    /// Moves locked objectives whose prerequisites are all completed to active.
    fn refresh_availability(&mut self) {
        let unlockable: Vec<usize> = self
            .objectives
            .iter()
            .enumerate()
            .filter(|(_, o)| o.status == ObjectiveStatus::Locked)
            .filter(|(_, o)| o.prerequisites.iter().all(|p| self.is_completed(p)))
            .map(|(i, _)| i)
            .collect();

        for index in unlockable {
            let objective = &mut self.objectives[index];
            objective.status = ObjectiveStatus::Active;
            objective.turns_remaining = objective.time_limit;
            objective.activated_turn = Some(self.current_turn);
            if self.current_turn > 0 {
                info!("Objective unlocked: {}", objective.title);
            }
        }
    }

    fn is_completed(&self, id: &str) -> bool {
        self.get(id)
            .is_some_and(|o| o.status == ObjectiveStatus::Completed)
    }

    fn with_status(&self, status: ObjectiveStatus) -> Vec<&Objective> {
        self.objectives
            .iter()
            .filter(|o| o.status == status)
            .collect()
    }

    pub fn get_active_objectives(&self) -> Vec<&Objective> {
        self.with_status(ObjectiveStatus::Active)
    }

    pub fn get_completed_objectives(&self) -> Vec<&Objective> {
        self.with_status(ObjectiveStatus::Completed)
    }

    pub fn get_failed_objectives(&self) -> Vec<&Objective> {
        self.with_status(ObjectiveStatus::Failed)
    }

    pub fn get_locked_objectives(&self) -> Vec<&Objective> {
        self.with_status(ObjectiveStatus::Locked)
    }

    /// Ids in completion order.
    pub fn completed_ids(&self) -> &[String] {
        &self.completed
    }

    pub fn failed_ids(&self) -> &[String] {
        &self.failed
    }

    /// `current_value / target_value` clamped to [0, 1]; 0 for unknown ids.
    pub fn get_objective_progress(&self, id: &str) -> f64 {
        self.get(id).map_or(0.0, Objective::progress)
    }

    pub fn get_objectives_summary(&self) -> ObjectivesSummary {
        let total = self.objectives.len();
        let completed = self.get_completed_objectives().len();
        ObjectivesSummary {
            active: self.get_active_objectives().len(),
            completed,
            failed: self.get_failed_objectives().len(),
            locked: self.get_locked_objectives().len(),
            total,
            completion_rate: if total == 0 {
                0.0
            } else {
                completed as f64 / total as f64
            },
        }
    }
}
