use crate::domain::{RiskDimension, RiskProfile};

use super::keywords::{contains_any, risk_keywords};

pub fn analyze_risks(content: &str) -> RiskProfile {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let total = tokens.len().max(1);

    let mut profile = RiskProfile::default();
    for dimension in RiskDimension::ALL {
        let keywords = risk_keywords(dimension);
        let hits = tokens
            .iter()
            .filter(|token| contains_any(token, keywords))
            .count();
        profile.set(dimension, share_of(hits, total));
    }
    profile
}

fn share_of(hits: usize, total: usize) -> u8 {
    let percent = (hits as f64 / total as f64) * 100.0;
    percent.round().clamp(0.0, 100.0) as u8
}
