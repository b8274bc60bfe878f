//! Headless `App` tests driving the progression plugin through its events.

mod progression_plugin_tests;

use bevy::prelude::*;

use crate::{AdvanceTurn, CityStateSnapshot, EffectBatch, ProgressionEffects, ProgressionPlugin};

pub(crate) fn progression_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(ProgressionPlugin);
    app
}

/// Sends one turn request, runs a frame, and returns the batches produced.
pub(crate) fn run_turn(app: &mut App, snapshot: CityStateSnapshot) -> Vec<EffectBatch> {
    app.world_mut().send_event(AdvanceTurn(snapshot));
    app.update();
    drain_effects(app)
}

pub(crate) fn drain_effects(app: &mut App) -> Vec<EffectBatch> {
    app.world_mut()
        .resource_mut::<Events<ProgressionEffects>>()
        .drain()
        .map(|ProgressionEffects(batch)| batch)
        .collect()
}
