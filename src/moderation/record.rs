use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::domain::{
    CategoryRisks, ContentAnalysisRecord, ItemId, ModeratedItem, ModerationResult, RiskProfile,
};

use super::error::AnalysisError;

/// Nothing in the risk profile measures copyright, so the panel always shows this value.
pub const COPYRIGHT_PLACEHOLDER_RISK: u8 = 0;

const MAX_FLAGGED_PHRASES: usize = 3;

pub fn extract_flagged_phrases(reason: &str) -> Vec<String> {
    reason
        .split([',', '.', '!'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .take(MAX_FLAGGED_PHRASES)
        .map(str::to_string)
        .collect()
}

pub fn category_risks(profile: &RiskProfile) -> CategoryRisks {
    CategoryRisks {
        spam: profile.profanity,
        violence: profile.provocation,
        adult: profile.adult_content,
        hate: profile.hate_speech.max(profile.blasphemy),
        misinformation: profile.misinformation,
        copyright: COPYRIGHT_PLACEHOLDER_RISK,
    }
}

pub fn confidence(risks: &CategoryRisks) -> u8 {
    const BUDGET: f64 = 6.0 * 100.0;
    let remaining = BUDGET - f64::from(risks.total());
    ((remaining / BUDGET) * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn to_analysis_record_at(
    result: &ModerationResult,
    item_id: ItemId,
    now: DateTime<Utc>,
) -> ContentAnalysisRecord {
    let category_risks = category_risks(&result.risk_profile);
    ContentAnalysisRecord {
        id: format!("analysis_{}", now.timestamp_millis()),
        item_id,
        timestamp: now,
        safety_score: result.safety_score,
        category_risks,
        flagged_phrases: extract_flagged_phrases(&result.reason),
        suggestions: vec![result.suggestion.clone()],
        confidence: confidence(&category_risks),
    }
}

pub fn apply_analysis_at<Tz>(
    item: &ModeratedItem,
    result: &ModerationResult,
    now: DateTime<Tz>,
) -> Result<ModeratedItem, AnalysisError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut metadata = item.metadata.clone();
    metadata.insert(
        "category".to_string(),
        Value::String(result.category.to_string()),
    );
    metadata.insert("analysisResult".to_string(), serde_json::to_value(result)?);
    metadata.insert("analysisDate".to_string(), Value::String(now.to_rfc3339()));

    Ok(ModeratedItem {
        safety_score: Some(result.safety_score),
        flagged_keywords: extract_flagged_phrases(&result.reason),
        version: item.version.saturating_add(1),
        last_modified: now.with_timezone(&Utc),
        metadata,
        ..item.clone()
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::domain::{Category, ContentKind, ModerationStatus};

    fn rejected() -> ModerationResult {
        ModerationResult {
            status: ModerationStatus::Rejected,
            reason: "Konten mengandung ujaran kebencian, provokasi, kata-kata kasar. Tidak sesuai dengan nilai-nilai pesantren".to_string(),
            category: Category::Political,
            suggestion: "Tulis ulang konten".to_string(),
            safety_score: 12,
            risk_profile: RiskProfile {
                hate_speech: 80,
                adult_content: 0,
                blasphemy: 90,
                provocation: 75,
                profanity: 72,
                misinformation: 10,
            },
        }
    }

    #[test]
    fn phrases_split_on_sentence_punctuation() {
        assert_eq!(
            extract_flagged_phrases("satu, dua.. tiga!! empat"),
            vec!["satu", "dua", "tiga"]
        );
        assert_eq!(extract_flagged_phrases("  ,.! "), Vec::<String>::new());
        assert_eq!(extract_flagged_phrases("tanpa tanda baca"), vec!["tanpa tanda baca"]);
    }

    #[test]
    fn record_projects_the_result() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let record = to_analysis_record_at(&rejected(), ItemId::Number(7), now);

        assert_eq!(record.id, format!("analysis_{}", now.timestamp_millis()));
        assert_eq!(record.item_id, ItemId::Number(7));
        assert_eq!(record.timestamp, now);
        assert_eq!(record.safety_score, 12);
        assert_eq!(
            record.category_risks,
            CategoryRisks {
                spam: 72,
                violence: 75,
                adult: 0,
                hate: 90,
                misinformation: 10,
                copyright: COPYRIGHT_PLACEHOLDER_RISK,
            }
        );
        assert_eq!(
            record.flagged_phrases,
            vec!["Konten mengandung ujaran kebencian", "provokasi", "kata-kata kasar"]
        );
        assert_eq!(record.suggestions, vec!["Tulis ulang konten"]);
        // (600 - 247) / 600 = 58.8%
        assert_eq!(record.confidence, 59);
    }

    #[test]
    fn clean_result_has_full_confidence() {
        let mut result = rejected();
        result.risk_profile = RiskProfile::default();
        let record = to_analysis_record_at(&result, ItemId::from("a"), Utc::now());
        assert_eq!(record.confidence, 100);
    }

    #[test]
    fn record_serializes_in_camel_case() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let value = serde_json::to_value(to_analysis_record_at(&rejected(), ItemId::Number(7), now))
            .unwrap();
        assert_eq!(value["itemId"], json!(7));
        assert_eq!(value["categoryRisks"]["copyright"], json!(0));
        assert!(value.get("flaggedPhrases").is_some());
    }

    #[test]
    fn apply_analysis_returns_a_stamped_copy() {
        let before = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut metadata = serde_json::Map::new();
        metadata.insert("author".to_string(), json!("ustadz ahmad"));
        let item = ModeratedItem {
            id: ItemId::Number(3),
            content: "isi berita".to_string(),
            kind: ContentKind::News,
            safety_score: None,
            flagged_keywords: Vec::new(),
            version: 4,
            last_modified: before,
            metadata,
        };

        let now = chrono_tz::Asia::Jakarta
            .with_ymd_and_hms(2024, 3, 1, 15, 30, 0)
            .unwrap();
        let updated = apply_analysis_at(&item, &rejected(), now).unwrap();

        assert_eq!(item.version, 4);
        assert_eq!(item.last_modified, before);
        assert!(item.safety_score.is_none());

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.content, item.content);
        assert_eq!(updated.version, 5);
        assert_eq!(updated.safety_score, Some(12));
        assert_eq!(updated.flagged_keywords.len(), 3);
        assert_eq!(
            updated.last_modified,
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()
        );
        assert_eq!(updated.metadata["author"], json!("ustadz ahmad"));
        assert_eq!(updated.metadata["category"], json!("political"));
        assert_eq!(updated.metadata["analysisResult"]["status"], json!("rejected"));
        assert_eq!(
            updated.metadata["analysisDate"],
            json!("2024-03-01T15:30:00+07:00")
        );
    }
}
