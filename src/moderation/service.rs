use std::collections::BTreeMap;

use chrono::Utc;
use serde_json::Value;
use tokio::time::sleep;

use crate::{
    config::ModerationConfig,
    domain::{
        json_type_name, ContentAnalysisRecord, ContentItem, ContentKind, ItemId, ModeratedItem,
        ModerationResult, ModerationStatus,
    },
};

use super::{
    categorizer::categorize,
    decision::decide,
    error::AnalysisError,
    normalizer::normalize,
    record::{apply_analysis_at, to_analysis_record_at},
    risk::analyze_risks,
    score::safety_score,
};

pub type BatchResults = BTreeMap<ItemId, ModerationResult>;

#[derive(Debug, Clone)]
pub struct ModerationService {
    config: ModerationConfig,
}

impl ModerationService {
    pub fn new(config: ModerationConfig) -> Self {
        Self { config }
    }

    pub async fn analyze(
        &self,
        content: &str,
        kind: ContentKind,
    ) -> Result<ModerationResult, AnalysisError> {
        let length = content.chars().count();
        if length > self.config.max_content_length {
            return Err(AnalysisError::ContentTooLong {
                length,
                limit: self.config.max_content_length,
            });
        }

        if !self.config.analysis_delay.is_zero() {
            sleep(self.config.analysis_delay).await;
        }

        Ok(evaluate(content, kind))
    }

    pub async fn analyze_batch(&self, items: &[ContentItem]) -> BatchResults {
        tracing::info!(target: "moderation", total = items.len(), "processing batch");
        let mut results = BatchResults::new();
        let mut failed = 0usize;

        for item in items {
            let outcome = match content_of(item) {
                Ok(content) => self.analyze(content, item.kind).await,
                Err(err) => Err(err),
            };

            let result = match outcome {
                Ok(result) => result,
                Err(err) => {
                    failed += 1;
                    tracing::warn!(
                        target: "moderation",
                        item = %item.id,
                        error = %err,
                        "analysis failed; falling back to manual review"
                    );
                    ModerationResult::safe_default()
                }
            };
            results.insert(item.id.clone(), result);
        }

        tracing::info!(
            target: "moderation",
            total = items.len(),
            failed,
            "batch finished"
        );
        results
    }

    pub fn to_analysis_record(
        &self,
        result: &ModerationResult,
        item_id: ItemId,
    ) -> ContentAnalysisRecord {
        to_analysis_record_at(result, item_id, Utc::now())
    }

    pub fn apply_analysis(
        &self,
        item: &ModeratedItem,
        result: &ModerationResult,
    ) -> Result<ModeratedItem, AnalysisError> {
        apply_analysis_at(item, result, Utc::now().with_timezone(&self.config.timezone))
    }
}

fn content_of(item: &ContentItem) -> Result<&str, AnalysisError> {
    match &item.content {
        Some(Value::String(content)) => Ok(content.as_str()),
        None => Err(AnalysisError::MissingContent {
            item: item.id.clone(),
        }),
        Some(other) => Err(AnalysisError::InvalidContent {
            item: item.id.clone(),
            found: json_type_name(other),
        }),
    }
}

pub fn evaluate(content: &str, kind: ContentKind) -> ModerationResult {
    let normalized = normalize(content);
    let category = categorize(&normalized);
    let risk_profile = analyze_risks(&normalized);
    let safety_score = safety_score(&risk_profile);
    let verdict = decide(&normalized, &risk_profile, category);

    tracing::debug!(
        target: "moderation",
        %kind,
        %category,
        status = %verdict.status,
        safety_score,
        "content analyzed"
    );
    if verdict.status == ModerationStatus::Rejected {
        tracing::info!(
            target: "moderation",
            %kind,
            reason = %verdict.reason,
            "content rejected"
        );
    }

    ModerationResult {
        status: verdict.status,
        reason: verdict.reason,
        category,
        suggestion: verdict.suggestion,
        safety_score,
        risk_profile,
    }
}
