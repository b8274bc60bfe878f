use std::collections::BTreeMap;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::config::EventContextRules;
use crate::effects::EffectDelta;
use crate::snapshot::CityStateSnapshot;

// =============================================================================
// Category & Context
// =============================================================================

/// Reporting bucket for event statistics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Encode, Decode, Serialize, Deserialize,
)]
pub enum EventCategory {
    Disaster,
    Crisis,
    Positive,
    Social,
    Other,
}

impl EventCategory {
    /// Keyword classification for events defined without an explicit category.
    pub fn from_title(title: &str) -> Self {
        let has = |words: &[&str]| words.iter().any(|w| title.contains(w));
        if has(&["Fire", "Earthquake", "Epidemic"]) {
            EventCategory::Disaster
        } else if has(&["Crisis", "Strike"]) {
            EventCategory::Crisis
        } else if has(&["Grant", "Festival", "Company"]) {
            EventCategory::Positive
        } else if has(&["Protest"]) {
            EventCategory::Social
        } else {
            EventCategory::Other
        }
    }
}

/// City condition under which an event is always eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub enum ContextTag {
    EconomicCrisis,
    Grant,
    Protest,
    Festival,
}

impl ContextTag {
    pub fn from_title(title: &str) -> Option<Self> {
        if title.contains("Crisis") {
            Some(ContextTag::EconomicCrisis)
        } else if title.contains("Grant") {
            Some(ContextTag::Grant)
        } else if title.contains("Protest") {
            Some(ContextTag::Protest)
        } else if title.contains("Festival") {
            Some(ContextTag::Festival)
        } else {
            None
        }
    }

    pub fn matches(self, snapshot: &CityStateSnapshot, rules: &EventContextRules) -> bool {
        match self {
            ContextTag::EconomicCrisis => snapshot.money < rules.crisis_money_below,
            ContextTag::Grant => snapshot.money > rules.grant_money_above,
            ContextTag::Protest => snapshot.satisfaction < rules.protest_satisfaction_below,
            ContextTag::Festival => snapshot.satisfaction > rules.festival_satisfaction_above,
        }
    }
}

// =============================================================================
// RandomEvent
// =============================================================================

/// Immutable event template. Occurrences are recorded separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Option<EventCategory>,
    pub context: Option<ContextTag>,
    /// Applied when no recognised decision is supplied.
    pub base_effects: EffectDelta,
    /// Decision labels in presentation order.
    pub options: Vec<String>,
    pub decision_effects: BTreeMap<String, EffectDelta>,
}

impl RandomEvent {
    pub fn new(id: &str, title: &str, description: &str, base_effects: EffectDelta) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: None,
            context: None,
            base_effects,
            options: Vec::new(),
            decision_effects: BTreeMap::new(),
        }
    }

    pub fn in_category(mut self, category: EventCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn when(mut self, context: ContextTag) -> Self {
        self.context = Some(context);
        self
    }

    pub fn option(mut self, label: &str, effects: EffectDelta) -> Self {
        self.options.push(label.to_string());
        self.decision_effects.insert(label.to_string(), effects);
        self
    }

    pub fn effective_category(&self) -> EventCategory {
        self.category
            .unwrap_or_else(|| EventCategory::from_title(&self.title))
    }

    pub fn effective_context(&self) -> Option<ContextTag> {
        self.context.or_else(|| ContextTag::from_title(&self.title))
    }
}

/// One entry of the append-only event history.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct EventOccurrence {
    pub event_id: String,
    pub turn: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventStatistics {
    pub total_events: usize,
    /// Most recent occurrences, oldest first.
    pub recent: Vec<EventOccurrence>,
    pub by_category: BTreeMap<EventCategory, usize>,
}
