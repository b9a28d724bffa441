use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_lens::{
        entities::{DishAnalysis, Recipe, Restaurant, ScanResult},
        value_objects::{FindRestaurantsInput, ScanImageInput, SuggestDishesInput},
    },
    reference::{entities::FoodItem, value_objects::FoodItemFilter},
};

/// Service trait for the FODMAP answer operations
#[cfg_attr(test, mockall::automock)]
pub trait FoodLensService: Send + Sync {
    fn analyze_dish(
        &self,
        dish_name: String,
    ) -> impl Future<Output = Result<DishAnalysis, CoreError>> + Send;

    fn get_recipe(
        &self,
        dish_name: String,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Never fails on completion errors; they degrade to an empty list.
    fn suggest_dishes(
        &self,
        input: SuggestDishesInput,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn scan_image(
        &self,
        input: ScanImageInput,
    ) -> impl Future<Output = Result<ScanResult, CoreError>> + Send;

    fn find_restaurants(
        &self,
        input: FindRestaurantsInput,
    ) -> impl Future<Output = Result<Vec<Restaurant>, CoreError>> + Send;

    fn search_foods(&self, filter: FoodItemFilter) -> Vec<FoodItem>;

    fn food_categories(&self) -> Vec<String>;
}
