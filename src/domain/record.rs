use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::ItemId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRisks {
    pub spam: u8,
    pub violence: u8,
    pub adult: u8,
    pub hate: u8,
    pub misinformation: u8,
    pub copyright: u8,
}

impl CategoryRisks {
    pub fn total(&self) -> u32 {
        [
            self.spam,
            self.violence,
            self.adult,
            self.hate,
            self.misinformation,
            self.copyright,
        ]
        .iter()
        .map(|v| u32::from(*v))
        .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysisRecord {
    pub id: String,
    pub item_id: ItemId,
    pub timestamp: DateTime<Utc>,
    pub safety_score: u8,
    pub category_risks: CategoryRisks,
    pub flagged_phrases: Vec<String>,
    pub suggestions: Vec<String>,
    pub confidence: u8,
}
