//! Read-only view of the city handed to the progression engine once per turn.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-turn city state supplied by the game loop.
///
/// Every field defaults to zero/empty so partially populated snapshots
/// (including JSON with missing keys) degrade evaluation instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityStateSnapshot {
    pub turn: u32,
    pub population: u32,
    pub money: f64,
    /// Average satisfaction, 0-100.
    pub satisfaction: f64,
    /// Building counts keyed by building type id (e.g. `"house"`, `"school"`).
    pub building_type_counts: BTreeMap<String, u32>,
    pub road_segment_count: u32,
    pub unlocked_technology_count: u32,
    /// Population at game start, used by growth-window objectives.
    pub start_population: u32,
}

impl CityStateSnapshot {
    /// Count of buildings of exactly this type (0 when absent).
    pub fn building_count(&self, building_type: &str) -> u32 {
        self.building_type_counts
            .get(building_type)
            .copied()
            .unwrap_or(0)
    }

    /// Combined count over several building types, saturating at `u32::MAX`.
    pub fn building_count_of<S: AsRef<str>>(&self, building_types: &[S]) -> u32 {
        building_types
            .iter()
            .map(|t| self.building_count(t.as_ref()))
            .fold(0, u32::saturating_add)
    }

    pub fn total_buildings(&self) -> u32 {
        self.building_type_counts
            .values()
            .copied()
            .fold(0, u32::saturating_add)
    }

    /// Builder-style helper used by callers and tests.
    pub fn with_buildings(mut self, building_type: &str, count: u32) -> Self {
        self.building_type_counts
            .insert(building_type.to_string(), count);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_json_fields_default_to_zero() {
        let snapshot: CityStateSnapshot =
            serde_json::from_str(r#"{"turn": 4, "money": 1500.5}"#).expect("valid json");
        assert_eq!(snapshot.turn, 4);
        assert_eq!(snapshot.money, 1500.5);
        assert_eq!(snapshot.population, 0);
        assert_eq!(snapshot.satisfaction, 0.0);
        assert_eq!(snapshot.road_segment_count, 0);
        assert!(snapshot.building_type_counts.is_empty());
    }

    #[test]
    fn test_building_counts() {
        let snapshot = CityStateSnapshot::default()
            .with_buildings("house", 12)
            .with_buildings("school", 1)
            .with_buildings("factory", 3);
        assert_eq!(snapshot.building_count("house"), 12);
        assert_eq!(snapshot.building_count("hospital"), 0);
        assert_eq!(snapshot.building_count_of(&["house", "school"]), 13);
        assert_eq!(snapshot.total_buildings(), 16);
    }

    #[test]
    fn test_building_totals_saturate() {
        let snapshot = CityStateSnapshot::default()
            .with_buildings("house", u32::MAX)
            .with_buildings("shop", 1);
        assert_eq!(snapshot.total_buildings(), u32::MAX);
        assert_eq!(snapshot.building_count_of(&["house", "shop"]), u32::MAX);
    }
}
