use crate::domain::Category;

use super::keywords::{contains_any, CATEGORY_KEYWORDS};

pub fn categorize(content: &str) -> Category {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(content, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
