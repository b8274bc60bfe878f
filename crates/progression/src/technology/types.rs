use std::collections::BTreeMap;
use std::fmt;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

// =============================================================================
// Technology Definition
// =============================================================================

/// Research branches of the technology tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub enum TechnologyCategory {
    Infrastructure,
    Economy,
    Social,
    Environment,
    Security,
    Science,
}

impl TechnologyCategory {
    pub const ALL: &'static [TechnologyCategory] = &[
        TechnologyCategory::Infrastructure,
        TechnologyCategory::Economy,
        TechnologyCategory::Social,
        TechnologyCategory::Environment,
        TechnologyCategory::Security,
        TechnologyCategory::Science,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TechnologyCategory::Infrastructure => "Infrastructure",
            TechnologyCategory::Economy => "Economy",
            TechnologyCategory::Social => "Social",
            TechnologyCategory::Environment => "Environment",
            TechnologyCategory::Security => "Security",
            TechnologyCategory::Science => "Science",
        }
    }
}

/// A node of the research graph.
///
/// `is_researched` only ever goes from `false` to `true`; `research_progress`
/// counts turns spent in the research slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TechnologyCategory,
    pub cost: u32,
    /// Turns of research needed to complete.
    pub research_time: u32,
    pub prerequisites: Vec<String>,
    pub effects: BTreeMap<String, f64>,
    pub unlocks_buildings: Vec<String>,
    pub unlocks_technologies: Vec<String>,
    pub is_researched: bool,
    pub research_progress: u32,
}

impl Technology {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        category: TechnologyCategory,
        cost: u32,
        research_time: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            cost,
            research_time,
            prerequisites: Vec::new(),
            effects: BTreeMap::new(),
            unlocks_buildings: Vec::new(),
            unlocks_technologies: Vec::new(),
            is_researched: false,
            research_progress: 0,
        }
    }

    pub fn requires(mut self, prerequisites: &[&str]) -> Self {
        self.prerequisites = prerequisites.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_effects(mut self, effects: &[(&str, f64)]) -> Self {
        self.effects = effects
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        self
    }

    pub fn unlocks(mut self, buildings: &[&str]) -> Self {
        self.unlocks_buildings = buildings.iter().map(|b| b.to_string()).collect();
        self
    }

    /// Turns still needed, 0 once researched.
    pub fn turns_remaining(&self) -> u32 {
        if self.is_researched {
            0
        } else {
            self.research_time.saturating_sub(self.research_progress)
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Why a research request was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResearchError {
    UnknownTechnology(String),
    AlreadyResearched(String),
    /// The research slot is held by `current`.
    ResearchInProgress { current: String },
    MissingPrerequisite(String),
}

impl fmt::Display for ResearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResearchError::UnknownTechnology(id) => write!(f, "unknown technology '{id}'"),
            ResearchError::AlreadyResearched(id) => {
                write!(f, "technology '{id}' is already researched")
            }
            ResearchError::ResearchInProgress { current } => {
                write!(f, "research slot is occupied by '{current}'")
            }
            ResearchError::MissingPrerequisite(id) => {
                write!(f, "missing prerequisite technology '{id}'")
            }
        }
    }
}

impl std::error::Error for ResearchError {}
