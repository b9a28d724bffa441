pub mod analyze_dish;
pub mod find_restaurants;
pub mod get_recipe;
pub mod scan_image;
pub mod suggest_dishes;
