use serde::{Deserialize, Serialize};

/// Fallback label for category buckets whose name field is missing entirely.
pub const UNNAMED_CATEGORY: &str = "Other";

/// One canonical per-category total in base currency.
///
/// Within a side (income or expense) category names are unique: duplicate
/// names in a raw list resolve last-write-wins during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub category: String,
    pub value: f64,
}

impl CategoryEntry {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}
