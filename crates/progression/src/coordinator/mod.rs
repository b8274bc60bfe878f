pub mod save;
pub(crate) mod systems;
mod turn;

pub use save::ProgressionSave;
pub use systems::{
    process_event_decisions, process_research_requests, process_turn_requests, AdvanceTurn,
    EventDecision, ProgressionEffects, ResearchRequest,
};
pub use turn::ProgressionCoordinator;

use bevy::prelude::*;

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProgressionCoordinator>()
            .add_event::<ResearchRequest>()
            .add_event::<AdvanceTurn>()
            .add_event::<EventDecision>()
            .add_event::<ProgressionEffects>()
            .add_systems(
                Update,
                (
                    process_research_requests,
                    process_turn_requests,
                    process_event_decisions,
                )
                    .chain(),
            );

        // Register for save/load via the SaveableRegistry.
        app.init_resource::<crate::SaveableRegistry>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<ProgressionCoordinator>();
    }
}
