pub mod get_food_categories;
pub mod search_foods;
