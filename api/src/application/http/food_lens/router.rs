use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    analyze_dish::{__path_analyze_dish, analyze_dish},
    find_restaurants::{__path_find_restaurants, find_restaurants},
    get_recipe::{__path_get_recipe, get_recipe},
    scan_image::{__path_scan_image, MAX_IMAGE_SIZE, scan_image},
    suggest_dishes::{__path_suggest_dishes, suggest_dishes},
};
use crate::application::http::server::app_state::AppState;

/// Room for multipart framing around the largest accepted image.
const SCAN_BODY_LIMIT: usize = MAX_IMAGE_SIZE + 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(
    analyze_dish,
    get_recipe,
    suggest_dishes,
    scan_image,
    find_restaurants
))]
pub struct FoodLensApiDoc;

pub fn food_lens_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/dishes/analyze", state.args.server.root_path),
            post(analyze_dish),
        )
        .route(
            &format!("{}/dishes/suggestions", state.args.server.root_path),
            post(suggest_dishes),
        )
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            post(get_recipe),
        )
        .route(
            &format!("{}/scans", state.args.server.root_path),
            post(scan_image).layer(DefaultBodyLimit::max(SCAN_BODY_LIMIT)),
        )
        .route(
            &format!("{}/restaurants/search", state.args.server.root_path),
            post(find_restaurants),
        )
}
