use axum::extract::State;
use foodlens_core::domain::food_lens::{entities::Recipe, ports::FoodLensService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_lens::validators::DishNameRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "food-lens",
    summary = "Generate a Low FODMAP recipe",
    description = "Adapts an authentic recipe found through web search. The first web source is returned as inspirationSource.",
    responses(
        (status = 200, body = RecipeResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = DishNameRequest
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DishNameRequest>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(payload.dish_name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse { data: recipe }))
}
