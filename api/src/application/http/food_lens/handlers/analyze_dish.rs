use axum::extract::State;
use foodlens_core::domain::food_lens::{entities::DishAnalysis, ports::FoodLensService};
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
pub struct AnalyzeDishResponse {
    pub data: DishAnalysis,
}

#[utoipa::path(
    post,
    path = "/dishes/analyze",
    tag = "food-lens",
    summary = "Analyze a dish",
    description = "Rates how safe a dish is on a strict Low FODMAP diet and suggests modifications",
    responses(
        (status = 200, body = AnalyzeDishResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = DishNameRequest
)]
pub async fn analyze_dish(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DishNameRequest>,
) -> Result<Response<AnalyzeDishResponse>, ApiError> {
    let analysis = state
        .service
        .analyze_dish(payload.dish_name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeDishResponse { data: analysis }))
}
