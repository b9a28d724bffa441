use axum::extract::{Query, State};
use foodlens_core::domain::{food_lens::ports::FoodLensService, reference::entities::FoodItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    foods::validators::SearchFoodsParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchFoodsResponse {
    pub data: Vec<FoodItem>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "foods",
    summary = "Search the reference food table",
    description = "Case-insensitive name search over the built-in Low FODMAP reference table, optionally restricted to one category",
    responses(
        (status = 200, body = SearchFoodsResponse)
    ),
    params(SearchFoodsParams),
)]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(params): Query<SearchFoodsParams>,
) -> Result<Response<SearchFoodsResponse>, ApiError> {
    let foods = state.service.search_foods(params.into());

    Ok(Response::OK(SearchFoodsResponse { data: foods }))
}
