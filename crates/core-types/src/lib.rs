pub mod enums;
pub mod options;
pub mod recommendation;
pub mod record;

// Re-export the core types to provide a clean public API.
pub use enums::{DeltaRounding, RecommendationStatus, Season, TransitionRange, Verdict};
pub use options::{GrowthOptions, HypothesisCriteria};
pub use recommendation::Recommendation;
pub use record::{HouseRecord, IsoWeek};
