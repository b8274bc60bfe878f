use bevy::prelude::*;

use super::turn::ProgressionCoordinator;
use crate::effects::EffectBatch;
use crate::snapshot::CityStateSnapshot;

// =============================================================================
// Events
// =============================================================================

/// Sent by the game loop once per turn with the current city state.
///
/// # Example
/// ```ignore
/// fn end_turn(mut turns: EventWriter<AdvanceTurn>, city: Res<City>) {
///     turns.send(AdvanceTurn(city.snapshot()));
/// }
/// ```
#[derive(Event, Debug, Clone)]
pub struct AdvanceTurn(pub CityStateSnapshot);

/// The player's answer to a pending random event.
#[derive(Event, Debug, Clone)]
pub struct EventDecision {
    pub event_id: String,
    pub option: String,
}

/// Request to put a technology into the research slot.
#[derive(Event, Debug, Clone)]
pub struct ResearchRequest {
    pub technology_id: String,
    pub investment: u64,
}

/// Output of a turn or a decision, for the game loop to apply.
#[derive(Event, Debug, Clone)]
pub struct ProgressionEffects(pub EffectBatch);

// =============================================================================
// Systems
// =============================================================================

/// Starts requested research. Rejected requests are logged and dropped.
pub fn process_research_requests(
    mut requests: EventReader<ResearchRequest>,
    mut coordinator: ResMut<ProgressionCoordinator>,
) {
    for request in requests.read() {
        if let Err(err) = coordinator.start_research(&request.technology_id, request.investment) {
            warn!("Research request rejected: {}", err);
        }
    }
}

pub fn process_turn_requests(
    mut requests: EventReader<AdvanceTurn>,
    mut coordinator: ResMut<ProgressionCoordinator>,
    mut effects: EventWriter<ProgressionEffects>,
) {
    for AdvanceTurn(snapshot) in requests.read() {
        let batch = coordinator.advance_turn(snapshot);
        effects.send(ProgressionEffects(batch));
    }
}

pub fn process_event_decisions(
    mut decisions: EventReader<EventDecision>,
    mut coordinator: ResMut<ProgressionCoordinator>,
    mut effects: EventWriter<ProgressionEffects>,
) {
    for decision in decisions.read() {
        if let Some(batch) = coordinator.resolve_event(&decision.event_id, &decision.option) {
            effects.send(ProgressionEffects(batch));
        }
    }
}
