use axum::extract::{Multipart, State};
use foodlens_core::domain::food_lens::{
    entities::ScanResult, ports::FoodLensService, value_objects::ScanImageInput,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanImageResponse {
    pub data: ScanResult,
}

#[utoipa::path(
    post,
    path = "/scans",
    tag = "food-lens",
    summary = "Classify a food photo",
    description = "Identifies the food in an image and classifies it against the reference FODMAP table. Expects a multipart `image` field.",
    responses(
        (status = 200, body = ScanImageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn scan_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ScanImageResponse>, ApiError> {
    let mut image: Option<ScanImageInput> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let media_type = field
            .content_type()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("Missing image content type".to_string()))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            warn!(size = data.len(), "Rejected oversized image");
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some(ScanImageInput {
            image: data,
            media_type,
        });
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let scan = state
        .service
        .scan_image(image)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScanImageResponse { data: scan }))
}
