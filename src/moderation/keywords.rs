use crate::domain::{Category, RiskDimension};

const RELIGIOUS: &[&str] = &[
    "islam", "allah", "quran", "sholat", "shalat", "doa", "ibadah", "masjid", "pesantren",
    "ustadz", "kajian", "hadits", "dakwah", "ramadhan", "puasa", "zakat", "tauhid", "akhlak",
    "sunnah", "dzikir",
];

const EDUCATIONAL: &[&str] = &[
    "belajar", "pendidikan", "sekolah", "ilmu", "pelajaran", "ujian", "kelas", "guru",
    "madrasah", "kurikulum", "beasiswa", "lomba",
];

const SOCIAL: &[&str] = &[
    "sosial", "masyarakat", "gotong royong", "santunan", "donasi", "peduli", "bakti",
    "silaturahmi", "yatim", "warga",
];

const HUMOR: &[&str] = &["lucu", "humor", "lelucon", "candaan", "kocak", "wkwk", "haha", "ngakak"];

const POLITICAL: &[&str] = &[
    "politik", "pemilu", "partai", "presiden", "pemerintah", "kampanye", "capres", "pilkada",
];

pub const CATEGORY_KEYWORDS: [(Category, &[&str]); 5] = [
    (Category::Religious, RELIGIOUS),
    (Category::Educational, EDUCATIONAL),
    (Category::Social, SOCIAL),
    (Category::Humor, HUMOR),
    (Category::Political, POLITICAL),
];

pub const ISLAMIC_TERMS: &[&str] = &[
    "allah", "rasulullah", "nabi", "quran", "hadits", "sunnah", "islam", "sholat", "taqwa",
    "syariat",
];

pub const HUMOR_NEGATIVE_TERMS: &[&str] = &["menghina", "mengejek", "jorok", "kasar", "cabul"];

const HATE_SPEECH: &[&str] = &["benci", "kafir", "hina", "jelek", "laknat", "musnahkan", "rendahan"];

const ADULT_CONTENT: &[&str] = &[
    "porno", "bokep", "seksual", "telanjang", "bugil", "mesum", "cabul",
];

const BLASPHEMY: &[&str] = &["nista", "hujat", "murtad", "sesat", "kufur", "melecehkan"];

const PROVOCATION: &[&str] = &[
    "menyerang", "bunuh", "hancurkan", "membakar", "rusuh", "provokasi", "berperang",
];

const PROFANITY: &[&str] = &[
    "anjing", "bangsat", "babi", "kampret", "brengsek", "goblok", "tolol", "bajingan", "jelek",
];

const MISINFORMATION: &[&str] = &["hoax", "hoaks", "fitnah", "bohong", "palsu", "konspirasi"];

pub fn risk_keywords(dimension: RiskDimension) -> &'static [&'static str] {
    match dimension {
        RiskDimension::HateSpeech => HATE_SPEECH,
        RiskDimension::AdultContent => ADULT_CONTENT,
        RiskDimension::Blasphemy => BLASPHEMY,
        RiskDimension::Provocation => PROVOCATION,
        RiskDimension::Profanity => PROFANITY,
        RiskDimension::Misinformation => MISINFORMATION,
    }
}

pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
