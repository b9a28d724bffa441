use foodlens_core::domain::food_lens::value_objects::{
    DEFAULT_CUISINE, FindRestaurantsInput, SortBy, SuggestDishesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct DishNameRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "dish_name must be between 1 and 200 characters"
    ))]
    pub dish_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestDishesRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "query must be at most 200 characters"))]
    pub query: String,
    /// Dishes already shown, left out of the new suggestions
    #[serde(default)]
    #[validate(length(max = 100, message = "exclude must hold at most 100 names"))]
    pub exclude: Vec<String>,
}

impl From<SuggestDishesRequest> for SuggestDishesInput {
    fn from(request: SuggestDishesRequest) -> Self {
        SuggestDishesInput {
            query: request.query,
            exclude: request.exclude,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct FindRestaurantsRequest {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within [-90, 90]"))]
    pub latitude: Option<f64>,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be within [-180, 180]"
    ))]
    pub longitude: Option<f64>,
    #[schema(example = "Asian")]
    #[validate(length(max = 100, message = "cuisine must be at most 100 characters"))]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    #[validate(length(max = 100, message = "exclude must hold at most 100 names"))]
    pub exclude: Vec<String>,
}

impl From<FindRestaurantsRequest> for FindRestaurantsInput {
    fn from(request: FindRestaurantsRequest) -> Self {
        FindRestaurantsInput {
            latitude: request.latitude,
            longitude: request.longitude,
            cuisine: request
                .cuisine
                .unwrap_or_else(|| DEFAULT_CUISINE.to_string()),
            sort_by: request.sort_by,
            exclude: request.exclude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_name_length() {
        let empty = DishNameRequest {
            dish_name: String::new(),
        };
        assert!(empty.validate().is_err());

        let ok = DishNameRequest {
            dish_name: "Mapo Tofu".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_restaurant_coordinates_range() {
        let request: FindRestaurantsRequest =
            serde_json::from_str(r#"{"latitude": 91.0, "longitude": 10.0}"#).unwrap();
        assert!(request.validate().is_err());

        let request: FindRestaurantsRequest =
            serde_json::from_str(r#"{"latitude": 40.7, "sort_by": "distance"}"#).unwrap();
        assert!(request.validate().is_ok());

        let input = FindRestaurantsInput::from(request);
        assert_eq!(input.cuisine, DEFAULT_CUISINE);
        assert_eq!(input.sort_by, SortBy::Distance);
        assert!(input.location().is_none());
    }

    #[test]
    fn test_suggestions_default_fields() {
        let request: SuggestDishesRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_ok());

        let input = SuggestDishesInput::from(request);
        assert!(input.query.is_empty());
        assert!(input.exclude.is_empty());
    }
}
