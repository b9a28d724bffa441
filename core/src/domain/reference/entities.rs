use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fermentable-carbohydrate risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum FodmapStatus {
    Low,
    High,
    /// Only produced by ad-hoc analysis, never by the reference table
    Moderate,
    Unknown,
}

impl FodmapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FodmapStatus::Low => "LOW",
            FodmapStatus::High => "HIGH",
            FodmapStatus::Moderate => "MODERATE",
            FodmapStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for FodmapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub name: String,
    pub category: String,
    pub status: FodmapStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FoodItem {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        status: FodmapStatus,
        portion: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            status,
            portion,
            notes,
        }
    }

    /// One line of grounding text, e.g. `Garlic (Vegetables): HIGH`
    pub fn context_line(&self) -> String {
        format!("{} ({}): {}", self.name, self.category, self.status)
    }
}
