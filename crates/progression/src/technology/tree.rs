use std::collections::BTreeMap;

use bevy::prelude::*;

use super::catalogue::standard_catalogue;
use super::types::{ResearchError, Technology};
use crate::config::{DEFAULT_RESEARCH_POINTS_PER_TURN, INVESTMENT_PER_BONUS_TURN};

// =============================================================================
// TechnologyTree
// =============================================================================

/// Research graph with a single research slot.
///
/// Technologies are kept in catalogue order so every query iterates
/// deterministically.
#[derive(Debug, Clone, PartialEq)]
pub struct TechnologyTree {
    pub(crate) technologies: Vec<Technology>,
    pub(crate) current_research: Option<String>,
    pub(crate) research_points_per_turn: u32,
    pub(crate) total_investment: u64,
}

impl Default for TechnologyTree {
    fn default() -> Self {
        Self::new(standard_catalogue())
    }
}

impl TechnologyTree {
    pub fn new(technologies: Vec<Technology>) -> Self {
        Self {
            technologies,
            current_research: None,
            research_points_per_turn: DEFAULT_RESEARCH_POINTS_PER_TURN,
            total_investment: 0,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Technology> {
        self.technologies.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Technology> {
        self.technologies.iter_mut().find(|t| t.id == id)
    }

    pub fn technologies(&self) -> &[Technology] {
        &self.technologies
    }

    /// The technology occupying the research slot, if any.
    pub fn current_research(&self) -> Option<&Technology> {
        self.current_research.as_deref().and_then(|id| self.get(id))
    }

    pub fn total_investment(&self) -> u64 {
        self.total_investment
    }

    pub fn research_points_per_turn(&self) -> u32 {
        self.research_points_per_turn
    }

    pub fn set_research_points_per_turn(&mut self, points: u32) {
        self.research_points_per_turn = points.max(1);
    }

    fn is_researched(&self, id: &str) -> bool {
        self.get(id).is_some_and(|t| t.is_researched)
    }

    /// Checks whether `id` could enter the research slot right now.
    pub fn can_research(&self, id: &str) -> Result<(), ResearchError> {
        let tech = self
            .get(id)
            .ok_or_else(|| ResearchError::UnknownTechnology(id.to_string()))?;
        if tech.is_researched {
            return Err(ResearchError::AlreadyResearched(id.to_string()));
        }
        if let Some(current) = &self.current_research {
            return Err(ResearchError::ResearchInProgress {
                current: current.clone(),
            });
        }
        if let Some(missing) = tech
            .prerequisites
            .iter()
            .find(|prereq| !self.is_researched(prereq))
        {
            return Err(ResearchError::MissingPrerequisite(missing.clone()));
        }
        Ok(())
    }

    /// Puts `id` into the research slot.
    ///
    /// Every full `INVESTMENT_PER_BONUS_TURN` spent above the technology's
    /// cost is credited as one turn of progress up front.
    pub fn start_research(&mut self, id: &str, investment: u64) -> Result<(), ResearchError> {
        self.can_research(id)?;

        let tech = self
            .get_mut(id)
            .ok_or_else(|| ResearchError::UnknownTechnology(id.to_string()))?;
        let extra = investment.saturating_sub(u64::from(tech.cost));
        let bonus_turns = u32::try_from(extra / INVESTMENT_PER_BONUS_TURN).unwrap_or(u32::MAX);
        tech.research_progress = tech.research_progress.saturating_add(bonus_turns);
        info!(
            "Research started: {} (investment {}, {} bonus turns)",
            tech.name, investment, bonus_turns
        );

        self.current_research = Some(id.to_string());
        self.total_investment = self.total_investment.saturating_add(investment);
        Ok(())
    }

    /// Advances the research slot by one turn.
    ///
    /// Returns the technology that completed this turn, if any.
    pub fn update_research(&mut self) -> Option<Technology> {
        let id = self.current_research.clone()?;
        let points = self.research_points_per_turn.max(1);

        let Some(tech) = self.get_mut(&id) else {
            warn!("Research slot held unknown technology '{}', clearing", id);
            self.current_research = None;
            return None;
        };
        if tech.is_researched {
            self.current_research = None;
            return None;
        }

        tech.research_progress = tech.research_progress.saturating_add(points);
        if tech.research_progress < tech.research_time {
            return None;
        }

        tech.is_researched = true;
        let completed = tech.clone();
        self.current_research = None;
        info!("Research complete: {}", completed.name);
        Some(completed)
    }

    /// Technologies that could be started this turn. Empty while research is
    /// in progress.
    pub fn get_available_technologies(&self) -> Vec<&Technology> {
        if self.current_research.is_some() {
            return Vec::new();
        }
        self.technologies
            .iter()
            .filter(|t| !t.is_researched)
            .filter(|t| t.prerequisites.iter().all(|p| self.is_researched(p)))
            .collect()
    }

    pub fn get_researched_technologies(&self) -> Vec<&Technology> {
        self.technologies.iter().filter(|t| t.is_researched).collect()
    }

    pub fn researched_count(&self) -> u32 {
        self.technologies.iter().filter(|t| t.is_researched).count() as u32
    }

    /// Sum of the effect maps of every researched technology.
    pub fn get_technology_effects(&self) -> BTreeMap<String, f64> {
        let mut effects = BTreeMap::new();
        for tech in self.get_researched_technologies() {
            for (name, value) in &tech.effects {
                *effects.entry(name.clone()).or_insert(0.0) += value;
            }
        }
        effects
    }

    pub fn get_unlocked_buildings(&self) -> Vec<String> {
        self.get_researched_technologies()
            .into_iter()
            .flat_map(|t| t.unlocks_buildings.iter().cloned())
            .collect()
    }

    /// Progress of the slot occupant in [0, 1], for UI bars.
    pub fn research_fraction(&self) -> Option<f64> {
        let tech = self.current_research()?;
        if tech.research_time == 0 {
            return Some(1.0);
        }
        Some((f64::from(tech.research_progress) / f64::from(tech.research_time)).min(1.0))
    }
}
