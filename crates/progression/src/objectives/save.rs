//! Persistence record for the objective tracker.

use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::goals::GoalState;
use super::tracker::ObjectiveTracker;
use super::types::ObjectiveStatus;

#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct ObjectiveRecord {
    pub id: String,
    pub status: ObjectiveStatus,
    pub current_value: f64,
    pub turns_remaining: Option<u32>,
    pub activated_turn: Option<u32>,
    pub state: GoalState,
}

#[derive(Debug, Clone, Default, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct ObjectiveSave {
    pub current_turn: u32,
    pub completed_order: Vec<String>,
    pub failed_order: Vec<String>,
    pub objectives: Vec<ObjectiveRecord>,
}

impl ObjectiveTracker {
    pub fn to_save(&self) -> ObjectiveSave {
        ObjectiveSave {
            current_turn: self.current_turn,
            completed_order: self.completed.clone(),
            failed_order: self.failed.clone(),
            objectives: self
                .objectives
                .iter()
                .map(|o| ObjectiveRecord {
                    id: o.id.clone(),
                    status: o.status,
                    current_value: o.current_value,
                    turns_remaining: o.turns_remaining,
                    activated_turn: o.activated_turn,
                    state: o.state.clone(),
                })
                .collect(),
        }
    }

    /// Restores evaluation state onto this tracker's definitions.
    ///
    /// Unknown ids and goal states that do not fit the objective's goal are
    /// skipped with a warning; the objective keeps its fresh state.
    pub fn apply_save(&mut self, save: &ObjectiveSave) {
        self.current_turn = save.current_turn;

        for record in &save.objectives {
            let Some(objective) = self.objectives.iter_mut().find(|o| o.id == record.id) else {
                warn!("Objective save: skipping unknown objective '{}'", record.id);
                continue;
            };
            if !objective.goal.accepts_state(&record.state) {
                warn!(
                    "Objective save: state of '{}' does not match its goal, skipping",
                    record.id
                );
                continue;
            }
            objective.status = record.status;
            objective.current_value = record.current_value;
            objective.turns_remaining = record.turns_remaining;
            objective.activated_turn = record.activated_turn;
            objective.state = record.state.clone();
        }

        let with_status = |status: ObjectiveStatus, order: &[String]| -> Vec<String> {
            let mut ids: Vec<String> = order
                .iter()
                .filter(|id| self.get(id).is_some_and(|o| o.status == status))
                .cloned()
                .collect();
            for objective in self.objectives.iter().filter(|o| o.status == status) {
                if !ids.contains(&objective.id) {
                    ids.push(objective.id.clone());
                }
            }
            ids
        };
        let completed = with_status(ObjectiveStatus::Completed, &save.completed_order);
        let failed = with_status(ObjectiveStatus::Failed, &save.failed_order);
        self.completed = completed;
        self.failed = failed;
    }
}
