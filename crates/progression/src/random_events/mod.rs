mod catalogue;
mod resolver;
pub mod save;
pub mod types;

pub use catalogue::standard_catalogue;
pub use resolver::EventResolver;
pub use save::EventSave;
pub use types::{ContextTag, EventCategory, EventOccurrence, EventStatistics, RandomEvent};
