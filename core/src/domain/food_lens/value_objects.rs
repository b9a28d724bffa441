use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::completion::entities::{LatLng, RequestKind};

pub const DEFAULT_CUISINE: &str = "Asian";
pub const DEFAULT_SUGGESTION_QUERY: &str = "Popular Authentic Classics";
/// Used when the caller has no coordinates
pub const FALLBACK_LOCALITY: &str = "New York City, NY";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Rating,
    Distance,
}

#[derive(Debug, Clone)]
pub struct SuggestDishesInput {
    pub query: String,
    /// Names already shown to the user
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ScanImageInput {
    pub image: Bytes,
    pub media_type: String,
}

#[derive(Debug, Clone)]
pub struct FindRestaurantsInput {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub cuisine: String,
    pub sort_by: SortBy,
    pub exclude: Vec<String>,
}

impl FindRestaurantsInput {
    pub fn location(&self) -> Option<LatLng> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(LatLng {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

impl Default for FindRestaurantsInput {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            cuisine: DEFAULT_CUISINE.to_string(),
            sort_by: SortBy::default(),
            exclude: Vec::new(),
        }
    }
}

/// A request type together with its parameters.
#[derive(Debug, Clone)]
pub enum FoodLensQuery {
    AnalyzeDish { dish_name: String },
    GetRecipe { dish_name: String },
    SuggestDishes(SuggestDishesInput),
    ScanImage(ScanImageInput),
    FindRestaurants(FindRestaurantsInput),
}

impl FoodLensQuery {
    pub fn kind(&self) -> RequestKind {
        match self {
            FoodLensQuery::AnalyzeDish { .. } => RequestKind::AnalyzeDish,
            FoodLensQuery::GetRecipe { .. } => RequestKind::GetRecipe,
            FoodLensQuery::SuggestDishes(_) => RequestKind::SuggestDishes,
            FoodLensQuery::ScanImage(_) => RequestKind::ScanImage,
            FoodLensQuery::FindRestaurants(_) => RequestKind::FindRestaurants,
        }
    }
}

/// User-facing operation, used to collapse pipeline failures into one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodLensOperation {
    AnalyzeDish,
    GetRecipe,
    SuggestDishes,
    ScanImage,
    FindRestaurants,
}

impl FoodLensOperation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            FoodLensOperation::AnalyzeDish => "Failed to analyze dish.",
            FoodLensOperation::GetRecipe => "Failed to generate recipe",
            FoodLensOperation::SuggestDishes => "Failed to suggest dishes",
            FoodLensOperation::ScanImage => "Failed to analyze image",
            FoodLensOperation::FindRestaurants => "Failed to find restaurants.",
        }
    }
}

impl fmt::Display for FoodLensOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(RequestKind::from(*self).as_str())
    }
}

impl From<FoodLensOperation> for RequestKind {
    fn from(operation: FoodLensOperation) -> Self {
        match operation {
            FoodLensOperation::AnalyzeDish => RequestKind::AnalyzeDish,
            FoodLensOperation::GetRecipe => RequestKind::GetRecipe,
            FoodLensOperation::SuggestDishes => RequestKind::SuggestDishes,
            FoodLensOperation::ScanImage => RequestKind::ScanImage,
            FoodLensOperation::FindRestaurants => RequestKind::FindRestaurants,
        }
    }
}
