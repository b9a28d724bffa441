/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Default)]
pub struct FoodItemFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl FoodItemFilter {
    pub fn new(search: Option<String>, category: Option<String>) -> Self {
        Self { search, category }
    }
}
