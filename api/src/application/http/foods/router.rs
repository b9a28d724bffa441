use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_food_categories::{__path_get_food_categories, get_food_categories},
    search_foods::{__path_search_foods, search_foods},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(search_foods, get_food_categories))]
pub struct FoodsApiDoc;

pub fn foods_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/foods", state.args.server.root_path),
            get(search_foods),
        )
        .route(
            &format!("{}/foods/categories", state.args.server.root_path),
            get(get_food_categories),
        )
}
