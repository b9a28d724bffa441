use foodlens_core::domain::reference::value_objects::FoodItemFilter;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchFoodsParams {
    /// Case-insensitive name fragment
    #[schema(example = "garlic")]
    pub search: Option<String>,
    /// Exact category, or `All`
    #[schema(example = "Vegetables")]
    pub category: Option<String>,
}

impl From<SearchFoodsParams> for FoodItemFilter {
    fn from(params: SearchFoodsParams) -> Self {
        FoodItemFilter::new(params.search, params.category)
    }
}
