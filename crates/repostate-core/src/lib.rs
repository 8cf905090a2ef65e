pub mod ids;
pub mod merge;
pub mod model;
pub mod snapshot;

pub use ids::*;
pub use merge::*;
pub use model::*;
pub use snapshot::*;
