//! Persistence record for the technology tree.
//!
//! Only mutable research state is stored; definitions come from the catalogue
//! the tree was built with.

use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::tree::TechnologyTree;

#[derive(Debug, Clone, Default, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct TechnologyRecord {
    pub id: String,
    pub is_researched: bool,
    pub research_progress: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct TechnologySave {
    pub current_research_id: Option<String>,
    pub research_points_per_turn: u32,
    pub total_investment: u64,
    pub technologies: Vec<TechnologyRecord>,
}

impl TechnologyTree {
    pub fn to_save(&self) -> TechnologySave {
        TechnologySave {
            current_research_id: self.current_research.clone(),
            research_points_per_turn: self.research_points_per_turn,
            total_investment: self.total_investment,
            technologies: self
                .technologies
                .iter()
                .map(|t| TechnologyRecord {
                    id: t.id.clone(),
                    is_researched: t.is_researched,
                    research_progress: t.research_progress,
                })
                .collect(),
        }
    }

    /// Restores research state onto this tree's definitions.
    ///
    /// Records for technologies this tree does not know are skipped.
    pub fn apply_save(&mut self, save: &TechnologySave) {
        for record in &save.technologies {
            match self.technologies.iter_mut().find(|t| t.id == record.id) {
                Some(tech) => {
                    tech.is_researched = record.is_researched;
                    tech.research_progress = record.research_progress;
                }
                None => warn!(
                    "Technology save: skipping unknown technology '{}'",
                    record.id
                ),
            }
        }

        self.current_research = match &save.current_research_id {
            Some(id) if self.get(id).is_some_and(|t| !t.is_researched) => Some(id.clone()),
            Some(id) => {
                warn!("Technology save: dropping invalid current research '{}'", id);
                None
            }
            None => None,
        };
        self.research_points_per_turn = save.research_points_per_turn.max(1);
        self.total_investment = save.total_investment;
    }
}
