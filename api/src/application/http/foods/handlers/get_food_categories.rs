use axum::extract::State;
use foodlens_core::domain::food_lens::ports::FoodLensService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetFoodCategoriesResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "foods",
    summary = "List food categories",
    responses(
        (status = 200, body = GetFoodCategoriesResponse)
    ),
)]
pub async fn get_food_categories(
    State(state): State<AppState>,
) -> Result<Response<GetFoodCategoriesResponse>, ApiError> {
    Ok(Response::OK(GetFoodCategoriesResponse {
        data: state.service.food_categories(),
    }))
}
