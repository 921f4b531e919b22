use crate::domain::{Category, ModerationStatus, RiskDimension, RiskProfile};

use super::keywords::{contains_any, HUMOR_NEGATIVE_TERMS, ISLAMIC_TERMS};

pub const REJECT_THRESHOLD: u8 = 70;
pub const REVISION_THRESHOLD: u8 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: ModerationStatus,
    pub reason: String,
    pub suggestion: String,
}

pub fn decide(content: &str, profile: &RiskProfile, category: Category) -> Verdict {
    let max_risk = profile.max();
    debug_assert!(max_risk <= 100, "risk dimensions are capped at 100");

    if max_risk >= REJECT_THRESHOLD {
        let labels = labels_at_or_above(profile, REJECT_THRESHOLD, severe_label);
        Verdict {
            status: ModerationStatus::Rejected,
            reason: format!(
                "Konten mengandung {labels}. Tidak sesuai dengan nilai-nilai pesantren"
            ),
            suggestion: "Tulis ulang konten dengan bahasa yang santun dan hapus bagian yang \
                         bermasalah sebelum diajukan kembali"
                .to_string(),
        }
    } else if max_risk >= REVISION_THRESHOLD {
        let labels = labels_at_or_above(profile, REVISION_THRESHOLD, soft_label);
        Verdict {
            status: ModerationStatus::NeedsRevision,
            reason: format!("Konten perlu ditinjau karena terdapat {labels}"),
            suggestion: "Perbaiki bagian yang ditandai agar lebih santun dan sesuai adab".to_string(),
        }
    } else if fits_category(content, category) {
        Verdict {
            status: ModerationStatus::Publishable,
            reason: "Konten sesuai dengan nilai-nilai pesantren dan layak dipublikasikan"
                .to_string(),
            suggestion: "Konten dapat langsung dipublikasikan".to_string(),
        }
    } else {
        let (reason, suggestion) = category_mismatch(category);
        Verdict {
            status: ModerationStatus::NeedsRevision,
            reason: reason.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}

pub fn fits_category(content: &str, category: Category) -> bool {
    let length = content.chars().count();
    match category {
        Category::Religious => contains_any(content, ISLAMIC_TERMS) || length > 100,
        Category::Educational => length > 50,
        Category::Humor => !contains_any(content, HUMOR_NEGATIVE_TERMS),
        Category::Social | Category::Political | Category::Other => length > 20,
    }
}

fn labels_at_or_above(
    profile: &RiskProfile,
    threshold: u8,
    label: fn(RiskDimension) -> &'static str,
) -> String {
    profile
        .iter()
        .filter(|(_, value)| *value >= threshold)
        .map(|(dimension, _)| label(dimension))
        .collect::<Vec<_>>()
        .join(", ")
}

fn severe_label(dimension: RiskDimension) -> &'static str {
    match dimension {
        RiskDimension::HateSpeech => "ujaran kebencian",
        RiskDimension::AdultContent => "konten dewasa",
        RiskDimension::Blasphemy => "penistaan agama",
        RiskDimension::Provocation => "provokasi",
        RiskDimension::Profanity => "kata-kata kasar",
        RiskDimension::Misinformation => "misinformasi",
    }
}

fn soft_label(dimension: RiskDimension) -> &'static str {
    match dimension {
        RiskDimension::HateSpeech => "indikasi ujaran kebencian",
        RiskDimension::AdultContent => "unsur konten dewasa",
        RiskDimension::Blasphemy => "potensi penistaan agama",
        RiskDimension::Provocation => "nada provokatif",
        RiskDimension::Profanity => "bahasa yang kurang santun",
        RiskDimension::Misinformation => "informasi yang perlu diverifikasi",
    }
}

fn category_mismatch(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Religious => (
            "Konten religi belum memuat rujukan keislaman yang memadai",
            "Tambahkan rujukan Al-Quran, hadits, atau penjelasan yang lebih lengkap",
        ),
        Category::Educational => (
            "Konten edukasi terlalu singkat",
            "Lengkapi konten dengan penjelasan materi yang lebih rinci",
        ),
        Category::Humor => (
            "Konten humor mengandung unsur yang kurang pantas",
            "Gunakan candaan yang santun dan tidak merendahkan pihak lain",
        ),
        Category::Social | Category::Political | Category::Other => (
            "Konten terlalu singkat untuk dinilai",
            "Tambahkan keterangan yang lebih lengkap tentang isi konten",
        ),
    }
}
