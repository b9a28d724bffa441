use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caution attached to dishes the model listed by name only.
pub const DEFAULT_DISH_CAUTION: &str = "Verify ingredients with server.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishRecommendation {
    #[serde(default)]
    pub name: String,
    /// What to verify with the server before ordering
    #[serde(default)]
    pub caution: String,
}

impl DishRecommendation {
    pub fn with_default_caution(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            caution: DEFAULT_DISH_CAUTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Filled by grounding; empty only before merge
    #[serde(default, skip_deserializing)]
    pub google_maps_uri: String,
    #[serde(default)]
    pub recommended_dishes: Vec<DishRecommendation>,
}
