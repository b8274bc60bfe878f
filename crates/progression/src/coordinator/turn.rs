use bevy::prelude::*;

use crate::config::ProgressionConfig;
use crate::effects::EffectBatch;
use crate::objectives::{ObjectiveOutcome, ObjectiveTracker};
use crate::progression_rng::ProgressionRng;
use crate::random_events::{EventResolver, RandomEvent};
use crate::snapshot::CityStateSnapshot;
use crate::technology::{ResearchError, Technology, TechnologyTree};

// =============================================================================
// ProgressionCoordinator
// =============================================================================

/// Runs the three progression mechanisms once per turn and gathers their
/// output into a single [`EffectBatch`].
///
/// The coordinator never touches city state; the caller applies each batch
/// before building the next snapshot.
#[derive(Resource, Debug, Clone)]
pub struct ProgressionCoordinator {
    pub technology: TechnologyTree,
    pub objectives: ObjectiveTracker,
    pub events: EventResolver,
    pub rng: ProgressionRng,
    pub(crate) config: ProgressionConfig,
    /// Event proposed on an event turn and not yet resolved.
    pub(crate) pending_event: Option<String>,
}

impl Default for ProgressionCoordinator {
    fn default() -> Self {
        Self::new(ProgressionConfig::default(), ProgressionRng::default())
    }
}

impl ProgressionCoordinator {
    /// Coordinator over the stock catalogues.
    pub fn new(config: ProgressionConfig, rng: ProgressionRng) -> Self {
        Self::from_parts(
            TechnologyTree::default(),
            ObjectiveTracker::default(),
            EventResolver::default(),
            config,
            rng,
        )
    }

    pub fn from_parts(
        technology: TechnologyTree,
        objectives: ObjectiveTracker,
        mut events: EventResolver,
        config: ProgressionConfig,
        rng: ProgressionRng,
    ) -> Self {
        events.set_rules(config.event_rules.clone());
        Self {
            technology,
            objectives,
            events,
            rng,
            config,
            pending_event: None,
        }
    }

    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ProgressionConfig) {
        self.events.set_rules(config.event_rules.clone());
        self.config = config;
    }

    pub fn pending_event(&self) -> Option<&RandomEvent> {
        self.pending_event
            .as_deref()
            .and_then(|id| self.events.get(id))
    }

    pub fn start_research(&mut self, id: &str, investment: u64) -> Result<(), ResearchError> {
        self.technology.start_research(id, investment)
    }

    /// Advances progression by one turn.
    ///
    /// Order is fixed: research, then objectives (seeing this turn's research
    /// count), then the random event on event turns.
    pub fn advance_turn(&mut self, snapshot: &CityStateSnapshot) -> EffectBatch {
        let mut batch = EffectBatch::default();

        if let Some(tech) = self.technology.update_research() {
            record_research(&mut batch, &tech);
        }

        let view = CityStateSnapshot {
            unlocked_technology_count: self.technology.researched_count(),
            ..snapshot.clone()
        };
        for outcome in self.objectives.update_objectives(&view) {
            record_objective(&mut batch, outcome);
        }

        if self.config.is_event_turn(snapshot.turn) {
            self.trigger_event(snapshot, &mut batch);
        }

        batch
    }

    fn trigger_event(&mut self, snapshot: &CityStateSnapshot, batch: &mut EffectBatch) {
        let Some(event) = self
            .events
            .trigger_random_event(Some(snapshot), &mut self.rng.0)
        else {
            return;
        };
        let id = event.id.clone();
        batch.notify(format!("Event: {} - {}", event.title, event.description));

        if let Some(unresolved) = self.pending_event.replace(id.clone()) {
            warn!(
                "Event '{}' was never resolved, replaced by '{}'",
                unresolved, id
            );
        }
        batch.triggered_event = Some(id);
    }

    /// Applies the player's decision for the pending event.
    ///
    /// Unknown options fall back to the event's base effects. Returns `None`
    /// when `event_id` is not the pending event.
    pub fn resolve_event(&mut self, event_id: &str, decision: &str) -> Option<EffectBatch> {
        if self.pending_event.as_deref() != Some(event_id) {
            warn!("Decision for event '{}' which is not pending, ignoring", event_id);
            return None;
        }
        let event = self.events.get(event_id)?;
        let delta = self.events.apply_decision_effects(event, decision);

        let mut batch = EffectBatch::default();
        batch.apply_delta(&delta);
        batch.notify(format!(
            "{}: {} ({})",
            event.title,
            decision,
            delta.description()
        ));
        self.pending_event = None;
        Some(batch)
    }
}

fn record_research(batch: &mut EffectBatch, tech: &Technology) {
    batch.newly_unlocked_technologies.push(tech.id.clone());
    batch
        .newly_unlocked_technologies
        .extend(tech.unlocks_technologies.iter().cloned());
    batch
        .newly_unlocked_buildings
        .extend(tech.unlocks_buildings.iter().cloned());
    batch.add_bonuses(&tech.effects);
    batch.notify(format!("Research complete: {}", tech.name));
}

fn record_objective(batch: &mut EffectBatch, outcome: ObjectiveOutcome) {
    match outcome {
        ObjectiveOutcome::Completed { id, title, reward } => {
            batch.apply_delta(&reward.as_delta());
            batch.notify(format!(
                "Objective completed: {} ({})",
                title, reward.description
            ));
            batch.completed_objectives.push(id);
        }
        ObjectiveOutcome::Failed { id, title } => {
            batch.notify(format!("Objective failed: {}", title));
            batch.failed_objectives.push(id);
        }
    }
}
