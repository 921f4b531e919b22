use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Religious,
    Educational,
    Social,
    Humor,
    Political,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Religious => "religious",
            Category::Educational => "educational",
            Category::Social => "social",
            Category::Humor => "humor",
            Category::Political => "political",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskDimension {
    HateSpeech,
    AdultContent,
    Blasphemy,
    Provocation,
    Profanity,
    Misinformation,
}

impl RiskDimension {
    /// Declaration order. Reasons list dimensions in this order, never by magnitude.
    pub const ALL: [RiskDimension; 6] = [
        RiskDimension::HateSpeech,
        RiskDimension::AdultContent,
        RiskDimension::Blasphemy,
        RiskDimension::Provocation,
        RiskDimension::Profanity,
        RiskDimension::Misinformation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            RiskDimension::HateSpeech => "hateSpeech",
            RiskDimension::AdultContent => "adultContent",
            RiskDimension::Blasphemy => "blasphemy",
            RiskDimension::Provocation => "provocation",
            RiskDimension::Profanity => "profanity",
            RiskDimension::Misinformation => "misinformation",
        }
    }
}

impl fmt::Display for RiskDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub hate_speech: u8,
    pub adult_content: u8,
    pub blasphemy: u8,
    pub provocation: u8,
    pub profanity: u8,
    pub misinformation: u8,
}

impl RiskProfile {
    pub fn get(&self, dimension: RiskDimension) -> u8 {
        match dimension {
            RiskDimension::HateSpeech => self.hate_speech,
            RiskDimension::AdultContent => self.adult_content,
            RiskDimension::Blasphemy => self.blasphemy,
            RiskDimension::Provocation => self.provocation,
            RiskDimension::Profanity => self.profanity,
            RiskDimension::Misinformation => self.misinformation,
        }
    }

    pub fn set(&mut self, dimension: RiskDimension, value: u8) {
        let value = value.min(100);
        match dimension {
            RiskDimension::HateSpeech => self.hate_speech = value,
            RiskDimension::AdultContent => self.adult_content = value,
            RiskDimension::Blasphemy => self.blasphemy = value,
            RiskDimension::Provocation => self.provocation = value,
            RiskDimension::Profanity => self.profanity = value,
            RiskDimension::Misinformation => self.misinformation = value,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RiskDimension, u8)> + '_ {
        RiskDimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    pub fn max(&self) -> u8 {
        self.iter().map(|(_, value)| value).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModerationStatus {
    Publishable,
    NeedsRevision,
    Rejected,
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModerationStatus::Publishable => "publishable",
            ModerationStatus::NeedsRevision => "needsRevision",
            ModerationStatus::Rejected => "rejected",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationResult {
    pub status: ModerationStatus,
    pub reason: String,
    pub category: Category,
    pub suggestion: String,
    pub safety_score: u8,
    pub risk_profile: RiskProfile,
}

impl ModerationResult {
    /// Substituted for an item whose analysis failed inside a batch run.
    pub fn safe_default() -> Self {
        Self {
            status: ModerationStatus::NeedsRevision,
            reason: "Analisis otomatis gagal. Konten memerlukan peninjauan manual".to_string(),
            category: Category::Other,
            suggestion: "Silakan tinjau konten ini secara manual sebelum dipublikasikan"
                .to_string(),
            safety_score: 50,
            risk_profile: RiskProfile::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_profile_serializes_with_the_six_fixed_keys() {
        let profile = RiskProfile {
            hate_speech: 1,
            adult_content: 2,
            blasphemy: 3,
            provocation: 4,
            profanity: 5,
            misinformation: 6,
        };
        let value = serde_json::to_value(profile).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for dimension in RiskDimension::ALL {
            assert_eq!(
                object[dimension.key()].as_u64(),
                Some(profile.get(dimension) as u64)
            );
        }
    }

    #[test]
    fn set_caps_values_at_one_hundred() {
        let mut profile = RiskProfile::default();
        profile.set(RiskDimension::Profanity, 250);
        assert_eq!(profile.profanity, 100);
        assert_eq!(profile.max(), 100);
    }

    #[test]
    fn statuses_order_by_severity() {
        assert!(ModerationStatus::Publishable < ModerationStatus::NeedsRevision);
        assert!(ModerationStatus::NeedsRevision < ModerationStatus::Rejected);
    }

    #[test]
    fn safe_default_is_neutral() {
        let fallback = ModerationResult::safe_default();
        assert_eq!(fallback.status, ModerationStatus::NeedsRevision);
        assert_eq!(fallback.safety_score, 50);
        assert_eq!(fallback.risk_profile, RiskProfile::default());
    }
}
