use utoipa::OpenApi;

use crate::application::http::{
    food_lens::router::FoodLensApiDoc, foods::router::FoodsApiDoc, health::HealthApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FoodLens API"
    ),
    nest(
        (path = "/foods", api = FoodsApiDoc),
    ),
    tags(
        (name = "food-lens", description = "Low FODMAP answers from Gemini"),
        (name = "foods", description = "Built-in reference food table"),
    )
)]
pub struct ApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
        .merge_from(FoodLensApiDoc::openapi())
        .merge_from(HealthApiDoc::openapi())
}
