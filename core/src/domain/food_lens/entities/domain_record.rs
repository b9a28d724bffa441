use crate::domain::{
    common::entities::app_errors::CoreError,
    completion::entities::RequestKind,
    food_lens::entities::{DishAnalysis, Recipe, Restaurant, ScanResult},
};

/// Normalized completion output, one variant per request kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainRecord {
    DishAnalysis(DishAnalysis),
    Recipe(Recipe),
    SuggestionList(Vec<String>),
    ScanResult(ScanResult),
    RestaurantList(Vec<Restaurant>),
}

impl DomainRecord {
    pub fn kind(&self) -> RequestKind {
        match self {
            DomainRecord::DishAnalysis(_) => RequestKind::AnalyzeDish,
            DomainRecord::Recipe(_) => RequestKind::GetRecipe,
            DomainRecord::SuggestionList(_) => RequestKind::SuggestDishes,
            DomainRecord::ScanResult(_) => RequestKind::ScanImage,
            DomainRecord::RestaurantList(_) => RequestKind::FindRestaurants,
        }
    }

    pub fn into_dish_analysis(self) -> Result<DishAnalysis, CoreError> {
        match self {
            DomainRecord::DishAnalysis(analysis) => Ok(analysis),
            other => Err(variant_mismatch(RequestKind::AnalyzeDish, &other)),
        }
    }

    pub fn into_recipe(self) -> Result<Recipe, CoreError> {
        match self {
            DomainRecord::Recipe(recipe) => Ok(recipe),
            other => Err(variant_mismatch(RequestKind::GetRecipe, &other)),
        }
    }

    pub fn into_suggestions(self) -> Result<Vec<String>, CoreError> {
        match self {
            DomainRecord::SuggestionList(suggestions) => Ok(suggestions),
            other => Err(variant_mismatch(RequestKind::SuggestDishes, &other)),
        }
    }

    pub fn into_scan_result(self) -> Result<ScanResult, CoreError> {
        match self {
            DomainRecord::ScanResult(scan) => Ok(scan),
            other => Err(variant_mismatch(RequestKind::ScanImage, &other)),
        }
    }

    pub fn into_restaurants(self) -> Result<Vec<Restaurant>, CoreError> {
        match self {
            DomainRecord::RestaurantList(restaurants) => Ok(restaurants),
            other => Err(variant_mismatch(RequestKind::FindRestaurants, &other)),
        }
    }
}

fn variant_mismatch(expected: RequestKind, actual: &DomainRecord) -> CoreError {
    tracing::error!(
        expected = expected.as_str(),
        actual = actual.kind().as_str(),
        "Domain record variant mismatch"
    );
    CoreError::InternalServerError
}
