use crate::domain::{RiskDimension, RiskProfile};

pub fn weight(dimension: RiskDimension) -> f64 {
    match dimension {
        RiskDimension::HateSpeech => 0.30,
        RiskDimension::AdultContent => 0.30,
        RiskDimension::Blasphemy => 0.25,
        RiskDimension::Provocation => 0.10,
        RiskDimension::Profanity => 0.05,
        RiskDimension::Misinformation => 0.10,
    }
}

pub fn safety_score(profile: &RiskProfile) -> u8 {
    let weighted: f64 = profile
        .iter()
        .map(|(dimension, value)| f64::from(value) * weight(dimension))
        .sum();
    (100.0 - weighted).round().clamp(0.0, 100.0) as u8
}
