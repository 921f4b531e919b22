pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod moderation;

pub use domain::{ContentAnalysisRecord, ContentItem, ModeratedItem, ModerationResult};
pub use moderation::{AnalysisError, ModerationService};
