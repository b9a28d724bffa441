use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishAnalysis {
    #[serde(default)]
    pub dish_name: String,
    #[serde(default)]
    pub is_safe: bool,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub ingredients_breakdown: Vec<IngredientRisk>,
    #[serde(default)]
    pub modifications: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum IngredientRiskLevel {
    Low,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientRisk {
    #[serde(default)]
    pub name: String,
    pub risk: IngredientRiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
