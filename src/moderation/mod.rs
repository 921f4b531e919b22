pub mod categorizer;
pub mod decision;
pub mod error;
pub mod keywords;
pub mod normalizer;
pub mod record;
pub mod risk;
pub mod score;
pub mod service;

pub use error::AnalysisError;
pub use record::extract_flagged_phrases;
pub use service::{evaluate, BatchResults, ModerationService};
