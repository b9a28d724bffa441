use axum::extract::State;
use foodlens_core::domain::food_lens::ports::FoodLensService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_lens::validators::SuggestDishesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestDishesResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/dishes/suggestions",
    tag = "food-lens",
    summary = "Suggest dishes",
    description = "Suggests dishes that can be adapted to Low FODMAP. Returns an empty list when no suggestions are available.",
    responses(
        (status = 200, body = SuggestDishesResponse)
    ),
    request_body = SuggestDishesRequest
)]
pub async fn suggest_dishes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestDishesRequest>,
) -> Result<Response<SuggestDishesResponse>, ApiError> {
    let suggestions = state
        .service
        .suggest_dishes(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SuggestDishesResponse { data: suggestions }))
}
