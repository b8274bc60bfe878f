mod catalogue;
pub mod save;
mod tree;
pub mod types;

pub use catalogue::standard_catalogue;
pub use save::{TechnologyRecord, TechnologySave};
pub use tree::TechnologyTree;
pub use types::{ResearchError, Technology, TechnologyCategory};
