use thiserror::Error;

use crate::domain::ItemId;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("item {item} has no content to analyze")]
    MissingContent { item: ItemId },
    #[error("item {item} has {found} content, expected text")]
    InvalidContent { item: ItemId, found: &'static str },
    #[error("content is {length} characters long, the limit is {limit}")]
    ContentTooLong { length: usize, limit: usize },
    #[error("failed to encode analysis result into item metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}
