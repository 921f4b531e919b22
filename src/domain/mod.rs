pub mod item;
pub mod record;
pub mod types;

pub use item::{json_type_name, ContentItem, ContentKind, ItemId, ModeratedItem};
pub use record::{CategoryRisks, ContentAnalysisRecord};
pub use types::{Category, ModerationResult, ModerationStatus, RiskDimension, RiskProfile};
