mod catalogue;
pub mod goals;
pub mod save;
#[cfg(test)]
mod tests;
mod tracker;
pub mod types;

pub use catalogue::standard_catalogue;
pub use goals::{BuildingQuota, CityMetric, GoalState, ObjectiveGoal, Threshold};
pub use save::{ObjectiveRecord, ObjectiveSave};
pub use tracker::ObjectiveTracker;
pub use types::{
    Objective, ObjectiveCategory, ObjectiveOutcome, ObjectiveReward, ObjectiveStatus,
    ObjectivesSummary,
};
