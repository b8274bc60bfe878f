//! Progression tunables.
//!
//! Module-level constants hold the defaults; [`ProgressionConfig`] carries the
//! values a running game actually uses so they can be changed per save.

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// No objective is evaluated before this turn.
pub const OBJECTIVE_GRACE_TURNS: u32 = 2;

/// Turns between random events at `Difficulty::Normal`.
pub const BASE_EVENT_INTERVAL_TURNS: u32 = 8;

/// Each full step of investment above a technology's cost skips one research turn.
pub const INVESTMENT_PER_BONUS_TURN: u64 = 1_000;

/// Research turns gained per `update_research` call on a fresh tree.
pub const DEFAULT_RESEARCH_POINTS_PER_TURN: u32 = 1;

/// Number of occurrences reported as "recent" in event statistics.
pub const RECENT_EVENT_COUNT: usize = 5;

/// "Crisis" events become eligible when money drops below this.
pub const CRISIS_MONEY_THRESHOLD: f64 = 2_000.0;

/// "Grant" events become eligible when money rises above this.
pub const GRANT_MONEY_THRESHOLD: f64 = 5_000.0;

/// "Protest" events become eligible when satisfaction drops below this.
pub const PROTEST_SATISFACTION_THRESHOLD: f64 = 60.0;

/// "Festival" events become eligible when satisfaction rises above this.
///
/// Satisfaction is on a 0-100 scale, so this never matches and festivals only
/// enter the pool through the baseline chance. Kept as-is until the intended
/// unit is confirmed.
pub const FESTIVAL_SATISFACTION_THRESHOLD: f64 = 500.0;

/// Chance that any event joins the contextual pool regardless of its rule.
pub const BASELINE_EVENT_INCLUSION_CHANCE: f64 = 0.3;

// =============================================================================
// Difficulty
// =============================================================================

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Encode, Decode, Serialize, Deserialize,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Multiplier on how often random events fire.
    pub fn event_frequency(self) -> f64 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }

    /// Turns between random events: 16 on Easy, 8 on Normal, 5 on Hard.
    pub fn event_interval(self) -> u32 {
        let interval = (f64::from(BASE_EVENT_INTERVAL_TURNS) / self.event_frequency()).round();
        (interval as u32).max(1)
    }
}

// =============================================================================
// Event context rules
// =============================================================================

/// Thresholds used when building the contextual event pool.
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct EventContextRules {
    pub crisis_money_below: f64,
    pub grant_money_above: f64,
    pub protest_satisfaction_below: f64,
    pub festival_satisfaction_above: f64,
    /// Probability in [0, 1].
    pub baseline_inclusion_chance: f64,
}

impl Default for EventContextRules {
    fn default() -> Self {
        Self {
            crisis_money_below: CRISIS_MONEY_THRESHOLD,
            grant_money_above: GRANT_MONEY_THRESHOLD,
            protest_satisfaction_below: PROTEST_SATISFACTION_THRESHOLD,
            festival_satisfaction_above: FESTIVAL_SATISFACTION_THRESHOLD,
            baseline_inclusion_chance: BASELINE_EVENT_INCLUSION_CHANCE,
        }
    }
}

// =============================================================================
// ProgressionConfig
// =============================================================================

/// Per-game progression settings.
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct ProgressionConfig {
    pub difficulty: Difficulty,
    /// Overrides the difficulty-derived event interval when set.
    pub event_interval_override: Option<u32>,
    pub event_rules: EventContextRules,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            event_interval_override: None,
            event_rules: EventContextRules::default(),
        }
    }
}

impl ProgressionConfig {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Default::default()
        }
    }

    /// Effective turns between random events (never zero).
    pub fn event_interval(&self) -> u32 {
        self.event_interval_override
            .unwrap_or_else(|| self.difficulty.event_interval())
            .max(1)
    }

    /// True when the coordinator should roll a random event on `turn`.
    pub fn is_event_turn(&self, turn: u32) -> bool {
        turn > 0 && turn % self.event_interval() == 0
    }
}
