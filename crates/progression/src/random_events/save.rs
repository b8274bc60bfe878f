use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::resolver::EventResolver;
use super::types::EventOccurrence;

/// Event history is the resolver's only mutable state.
#[derive(Debug, Clone, Default, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct EventSave {
    pub history: Vec<EventOccurrence>,
}

impl EventResolver {
    pub fn to_save(&self) -> EventSave {
        EventSave {
            history: self.history.clone(),
        }
    }

    /// Replaces the history, dropping occurrences of events not in the catalogue.
    pub fn apply_save(&mut self, save: &EventSave) {
        let mut history = Vec::with_capacity(save.history.len());
        for occurrence in &save.history {
            if self.get(&occurrence.event_id).is_some() {
                history.push(occurrence.clone());
            } else {
                warn!(
                    "Event save: skipping occurrence of unknown event '{}' (turn {})",
                    occurrence.event_id, occurrence.turn
                );
            }
        }
        self.history = history;
    }
}
