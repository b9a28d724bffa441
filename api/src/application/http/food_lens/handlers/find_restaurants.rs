use axum::extract::State;
use foodlens_core::domain::food_lens::{entities::Restaurant, ports::FoodLensService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_lens::validators::FindRestaurantsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FindRestaurantsResponse {
    pub data: Vec<Restaurant>,
}

#[utoipa::path(
    post,
    path = "/restaurants/search",
    tag = "food-lens",
    summary = "Find restaurants",
    description = "Finds nearby restaurants with dishes likely to be Low FODMAP safe. Every restaurant carries a Google Maps link.",
    responses(
        (status = 200, body = FindRestaurantsResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = FindRestaurantsRequest
)]
pub async fn find_restaurants(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FindRestaurantsRequest>,
) -> Result<Response<FindRestaurantsResponse>, ApiError> {
    let restaurants = state
        .service
        .find_restaurants(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FindRestaurantsResponse { data: restaurants }))
}
