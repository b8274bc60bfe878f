use std::collections::BTreeMap;

use bevy::prelude::*;
use rand::Rng;

use super::catalogue::standard_catalogue;
use super::types::{EventCategory, EventOccurrence, EventStatistics, RandomEvent};
use crate::config::{EventContextRules, RECENT_EVENT_COUNT};
use crate::effects::EffectDelta;
use crate::snapshot::CityStateSnapshot;

// =============================================================================
// EventResolver
// =============================================================================

/// Proposes random events and looks up the effects of the chosen decision.
///
/// The resolver never applies effects itself; callers decide when and how a
/// decision is collected.
#[derive(Debug, Clone, PartialEq)]
pub struct EventResolver {
    pub(crate) events: Vec<RandomEvent>,
    pub(crate) history: Vec<EventOccurrence>,
    pub(crate) rules: EventContextRules,
}

impl Default for EventResolver {
    fn default() -> Self {
        Self::new(standard_catalogue(), EventContextRules::default())
    }
}

impl EventResolver {
    pub fn new(events: Vec<RandomEvent>, rules: EventContextRules) -> Self {
        Self {
            events,
            history: Vec::new(),
            rules,
        }
    }

    pub fn get(&self, id: &str) -> Option<&RandomEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn events(&self) -> &[RandomEvent] {
        &self.events
    }

    pub fn history(&self) -> &[EventOccurrence] {
        &self.history
    }

    pub fn rules(&self) -> &EventContextRules {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: EventContextRules) {
        self.rules = rules;
    }

    /// Indices of events eligible under `snapshot`.
    ///
    /// An event joins when its context rule matches, otherwise with the
    /// baseline chance. Falls back to the whole catalogue when nothing joins.
    fn contextual_pool<R: Rng + ?Sized>(
        &self,
        snapshot: &CityStateSnapshot,
        rng: &mut R,
    ) -> Vec<usize> {
        let chance = match self.rules.baseline_inclusion_chance {
            c if c.is_nan() => 0.0,
            c => c.clamp(0.0, 1.0),
        };
        let pool: Vec<usize> = self
            .events
            .iter()
            .enumerate()
            .filter(|(_, event)| {
                let in_context = event
                    .effective_context()
                    .is_some_and(|tag| tag.matches(snapshot, &self.rules));
                in_context || rng.gen_bool(chance)
            })
            .map(|(i, _)| i)
            .collect();

        if pool.is_empty() {
            (0..self.events.len()).collect()
        } else {
            pool
        }
    }

    /// Picks an event and records the occurrence.
    ///
    /// Without a snapshot the pick is uniform over the catalogue and the
    /// occurrence is recorded at turn 0. Returns `None` only for an empty
    /// catalogue.
    pub fn trigger_random_event<R: Rng + ?Sized>(
        &mut self,
        snapshot: Option<&CityStateSnapshot>,
        rng: &mut R,
    ) -> Option<&RandomEvent> {
        if self.events.is_empty() {
            warn!("EventResolver: catalogue is empty, no event triggered");
            return None;
        }

        let pool = match snapshot {
            Some(snapshot) => self.contextual_pool(snapshot, rng),
            None => (0..self.events.len()).collect(),
        };
        let index = pool[rng.gen_range(0..pool.len())];
        let turn = snapshot.map_or(0, |s| s.turn);

        let event = &self.events[index];
        info!("Random event on turn {}: {}", turn, event.title);
        self.history.push(EventOccurrence {
            event_id: event.id.clone(),
            turn,
        });
        self.events.get(index)
    }

    /// Effects of `decision`, or the event's base effects for an unknown option.
    pub fn apply_decision_effects(&self, event: &RandomEvent, decision: &str) -> EffectDelta {
        match event.decision_effects.get(decision) {
            Some(effects) => *effects,
            None => {
                warn!(
                    "Unknown decision '{}' for event '{}', using base effects",
                    decision, event.id
                );
                event.base_effects
            }
        }
    }

    pub fn get_event_statistics(&self) -> EventStatistics {
        let mut by_category = BTreeMap::new();
        for occurrence in &self.history {
            let category = self
                .get(&occurrence.event_id)
                .map_or(EventCategory::Other, RandomEvent::effective_category);
            *by_category.entry(category).or_insert(0) += 1;
        }
        let recent_start = self.history.len().saturating_sub(RECENT_EVENT_COUNT);
        EventStatistics {
            total_events: self.history.len(),
            recent: self.history[recent_start..].to_vec(),
            by_category,
        }
    }
}
