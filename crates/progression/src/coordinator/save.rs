//! Saveable implementation for ProgressionCoordinator.
//!
//! Mechanism definitions are rebuilt from the stock catalogues on load; only
//! research, objective and event state plus the RNG position are persisted.

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::turn::ProgressionCoordinator;
use crate::config::ProgressionConfig;
use crate::objectives::ObjectiveSave;
use crate::progression_rng::{ProgressionRng, RngState};
use crate::random_events::EventSave;
use crate::technology::TechnologySave;
use crate::Saveable;

#[derive(Debug, Clone, Default, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct ProgressionSave {
    pub config: ProgressionConfig,
    pub technology: TechnologySave,
    pub objectives: ObjectiveSave,
    pub events: EventSave,
    pub pending_event: Option<String>,
    /// Serde skips the RNG; JSON exports are for inspection only.
    #[serde(skip)]
    pub rng: Option<RngState>,
}

impl ProgressionCoordinator {
    pub fn to_save(&self) -> ProgressionSave {
        ProgressionSave {
            config: self.config.clone(),
            technology: self.technology.to_save(),
            objectives: self.objectives.to_save(),
            events: self.events.to_save(),
            pending_event: self.pending_event.clone(),
            rng: Some(self.rng.state()),
        }
    }

    pub fn from_save(save: &ProgressionSave) -> Self {
        let rng = save
            .rng
            .as_ref()
            .map(ProgressionRng::from_state)
            .unwrap_or_default();
        let mut coordinator = Self::new(save.config.clone(), rng);
        coordinator.technology.apply_save(&save.technology);
        coordinator.objectives.apply_save(&save.objectives);
        coordinator.events.apply_save(&save.events);
        coordinator.pending_event = save
            .pending_event
            .clone()
            .filter(|id| coordinator.events.get(id).is_some());
        coordinator
    }

    /// True for an untouched coordinator on default settings and seed.
    fn is_fresh(&self) -> bool {
        self.config == ProgressionConfig::default()
            && self.rng.state() == ProgressionRng::default().state()
            && self.objectives.current_turn() == 0
            && self.technology.current_research().is_none()
            && self.technology.researched_count() == 0
            && self.events.history().is_empty()
    }
}

impl Saveable for ProgressionCoordinator {
    const SAVE_KEY: &'static str = "progression";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if self.is_fresh() {
            return None;
        }
        Some(bitcode::encode(&self.to_save()))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        let save: ProgressionSave = crate::decode_or_warn(Self::SAVE_KEY, bytes);
        Self::from_save(&save)
    }
}
