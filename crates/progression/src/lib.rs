use bevy::prelude::*;
use std::collections::BTreeMap;

pub mod config;
pub mod coordinator;
pub mod effects;
pub mod objectives;
pub mod progression_rng;
pub mod random_events;
pub mod snapshot;
pub mod technology;

#[cfg(test)]
mod integration_tests;

pub use coordinator::{
    AdvanceTurn, EventDecision, ProgressionCoordinator, ProgressionEffects, ProgressionPlugin,
    ResearchRequest,
};
pub use effects::{EffectBatch, EffectDelta};
pub use snapshot::CityStateSnapshot;

// ---------------------------------------------------------------------------
// Save extensions
// ---------------------------------------------------------------------------

/// A resource persisted as one entry of a save's extension map.
pub trait Saveable: Resource + Default {
    /// Extension-map key. Changing it orphans existing saves.
    const SAVE_KEY: &'static str;

    /// Encoded state, or `None` when there is nothing worth writing.
    fn save_to_bytes(&self) -> Option<Vec<u8>>;

    /// Rebuilds the resource. Never fails; bad bytes yield a default value.
    fn load_from_bytes(bytes: &[u8]) -> Self;
}

/// `bitcode::decode`, or `T::default()` with a warning when the bytes are bad.
pub fn decode_or_warn<T: bitcode::DecodeOwned + Default>(key: &str, bytes: &[u8]) -> T {
    bitcode::decode(bytes).unwrap_or_else(|err| {
        warn!(
            "Save entry '{}' ({} bytes) could not be decoded, using defaults: {}",
            key,
            bytes.len(),
            err
        );
        T::default()
    })
}

pub type SaveFn = Box<dyn Fn(&World) -> Option<Vec<u8>> + Send + Sync>;
pub type LoadFn = Box<dyn Fn(&mut World, &[u8]) + Send + Sync>;
pub type ResetFn = Box<dyn Fn(&mut World) + Send + Sync>;

/// Save/load/reset closures for one registered resource type.
pub struct SaveableEntry {
    pub key: &'static str,
    pub save_fn: SaveFn,
    pub load_fn: LoadFn,
    pub reset_fn: ResetFn,
}

impl SaveableEntry {
    fn of<T: Saveable>() -> Self {
        Self {
            key: T::SAVE_KEY,
            save_fn: Box::new(|world: &World| world.get_resource::<T>()?.save_to_bytes()),
            load_fn: Box::new(|world: &mut World, bytes: &[u8]| {
                world.insert_resource(T::load_from_bytes(bytes));
            }),
            reset_fn: Box::new(|world: &mut World| world.insert_resource(T::default())),
        }
    }
}

/// Every saveable resource, filled in by plugins as they build.
#[derive(Resource, Default)]
pub struct SaveableRegistry {
    pub entries: Vec<SaveableEntry>,
}

impl SaveableRegistry {
    /// Adds `T` under its `SAVE_KEY`; a key that is already taken is skipped.
    pub fn register<T: Saveable>(&mut self) {
        if self.entries.iter().any(|e| e.key == T::SAVE_KEY) {
            warn!(
                "Save key '{}' registered twice, keeping the first entry",
                T::SAVE_KEY
            );
            return;
        }
        self.entries.push(SaveableEntry::of::<T>());
    }

    /// Collects the bytes of every resource that has something to save.
    pub fn save_all(&self, world: &World) -> BTreeMap<String, Vec<u8>> {
        self.entries
            .iter()
            .filter_map(|entry| Some((entry.key.to_string(), (entry.save_fn)(world)?)))
            .collect()
    }

    /// Restores the resources present in `extensions`; absent keys are left alone.
    pub fn load_all(&self, world: &mut World, extensions: &BTreeMap<String, Vec<u8>>) {
        for entry in &self.entries {
            if let Some(bytes) = extensions.get(entry.key) {
                (entry.load_fn)(world, bytes);
            }
        }
    }

    /// Puts every registered resource back to its default, for a new game.
    pub fn reset_all(&self, world: &mut World) {
        for entry in &self.entries {
            (entry.reset_fn)(world);
        }
    }
}

#[cfg(test)]
mod saveable_tests {
    use super::*;

    #[derive(Resource, Default, Debug, PartialEq)]
    struct TurnMarker {
        turn: u32,
    }

    impl Saveable for TurnMarker {
        const SAVE_KEY: &'static str = "turn_marker";

        fn save_to_bytes(&self) -> Option<Vec<u8>> {
            if self.turn == 0 {
                None
            } else {
                Some(self.turn.to_le_bytes().to_vec())
            }
        }

        fn load_from_bytes(bytes: &[u8]) -> Self {
            let turn = u32::from_le_bytes(bytes.try_into().unwrap_or([0; 4]));
            TurnMarker { turn }
        }
    }

    #[test]
    fn test_registry_register_and_save() {
        let mut world = World::new();
        world.insert_resource(TurnMarker { turn: 42 });

        let mut registry = SaveableRegistry::default();
        registry.register::<TurnMarker>();

        let extensions = registry.save_all(&world);
        assert_eq!(extensions.len(), 1);
        assert_eq!(extensions["turn_marker"], 42u32.to_le_bytes().to_vec());
    }

    #[test]
    fn test_registry_save_skips_default() {
        let mut world = World::new();
        world.insert_resource(TurnMarker::default());

        let mut registry = SaveableRegistry::default();
        registry.register::<TurnMarker>();

        assert!(registry.save_all(&world).is_empty());
    }

    #[test]
    fn test_registry_load_and_reset() {
        let mut world = World::new();
        world.insert_resource(TurnMarker::default());

        let mut registry = SaveableRegistry::default();
        registry.register::<TurnMarker>();

        let mut extensions = BTreeMap::new();
        extensions.insert("turn_marker".to_string(), 9u32.to_le_bytes().to_vec());
        extensions.insert("unknown_feature".to_string(), vec![0xFF, 0xFF]);
        registry.load_all(&mut world, &extensions);
        assert_eq!(world.resource::<TurnMarker>().turn, 9);

        registry.reset_all(&mut world);
        assert_eq!(world.resource::<TurnMarker>().turn, 0);
    }

    #[test]
    fn test_registry_ignores_duplicate_key() {
        let mut registry = SaveableRegistry::default();
        registry.register::<TurnMarker>();
        registry.register::<TurnMarker>();
        assert_eq!(registry.entries.len(), 1);
    }

    #[test]
    fn test_decode_or_warn_falls_back_to_default() {
        let value: u32 = decode_or_warn("garbage", &[]);
        assert_eq!(value, 0);
    }
}
