use std::collections::BTreeSet;

use crate::domain::reference::{
    entities::{FodmapStatus, FoodItem},
    value_objects::{ALL_CATEGORIES, FoodItemFilter},
};

type CatalogRow = (
    &'static str,
    &'static str,
    FodmapStatus,
    Option<&'static str>,
    Option<&'static str>,
);

// Transcribed from a clinical Low FODMAP chart.
const BUILTIN_FOODS: &[CatalogRow] = &[
    ("Bamboo shoots", "Vegetables", FodmapStatus::Low, None, None),
    ("Bean sprouts", "Vegetables", FodmapStatus::Low, None, None),
    ("Broccoli heads", "Vegetables", FodmapStatus::Low, Some("3/4 cup"), None),
    ("Broccoli stalks", "Vegetables", FodmapStatus::Low, Some("1/3 cup"), None),
    ("Cabbage, common and red", "Vegetables", FodmapStatus::Low, Some("3/4 cup"), None),
    ("Carrots", "Vegetables", FodmapStatus::Low, None, None),
    ("Celery", "Vegetables", FodmapStatus::Low, Some("less than 5cm stalk"), None),
    ("Chick peas", "Vegetables", FodmapStatus::Low, Some("1/4 cup max"), None),
    ("Corn", "Vegetables", FodmapStatus::Low, Some("1/2 cob max"), None),
    ("Courgette / Zucchini", "Vegetables", FodmapStatus::Low, Some("65g"), None),
    ("Cucumber", "Vegetables", FodmapStatus::Low, None, None),
    ("Eggplant", "Vegetables", FodmapStatus::Low, Some("1 cup"), None),
    ("Green beans", "Vegetables", FodmapStatus::Low, None, None),
    ("Green pepper", "Vegetables", FodmapStatus::Low, Some("1/2 cup"), None),
    ("Kale", "Vegetables", FodmapStatus::Low, None, None),
    ("Lettuce (Butter, iceberg, rocket)", "Vegetables", FodmapStatus::Low, None, None),
    ("Parsnip", "Vegetables", FodmapStatus::Low, None, None),
    ("Potato", "Vegetables", FodmapStatus::Low, None, None),
    ("Pumpkin", "Vegetables", FodmapStatus::Low, Some("63g"), None),
    ("Red peppers", "Vegetables", FodmapStatus::Low, None, None),
    ("Scallions / spring onions (green part)", "Vegetables", FodmapStatus::Low, None, None),
    ("Squash", "Vegetables", FodmapStatus::Low, Some("63g"), None),
    ("Sweet potato", "Vegetables", FodmapStatus::Low, Some("1/2 cup"), None),
    ("Tomatoes", "Vegetables", FodmapStatus::Low, Some("65g"), None),
    ("Turnip", "Vegetables", FodmapStatus::Low, Some("1/2 turnip"), None),
    ("Garlic", "Vegetables", FodmapStatus::High, None, None),
    ("Onions", "Vegetables", FodmapStatus::High, None, None),
    ("Asparagus", "Vegetables", FodmapStatus::High, None, None),
    ("Beans (black, broad, kidney, lima, soya)", "Vegetables", FodmapStatus::High, None, None),
    ("Cauliflower", "Vegetables", FodmapStatus::High, None, None),
    ("Cabbage, savoy", "Vegetables", FodmapStatus::High, None, None),
    ("Mange tout", "Vegetables", FodmapStatus::High, None, None),
    ("Mushrooms", "Vegetables", FodmapStatus::High, None, None),
    ("Peas", "Vegetables", FodmapStatus::High, None, None),
    ("Scallions / spring onions (white part)", "Vegetables", FodmapStatus::High, None, None),
    ("Bananas, unripe", "Fruit", FodmapStatus::Low, Some("1 medium"), None),
    ("Blueberries", "Fruit", FodmapStatus::Low, Some("1/4 cup"), None),
    ("Cantaloupe", "Fruit", FodmapStatus::Low, Some("3/4 cup"), None),
    ("Cranberry", "Fruit", FodmapStatus::Low, None, None),
    ("Clementine", "Fruit", FodmapStatus::Low, None, None),
    ("Melons (Honeydew, Galia)", "Fruit", FodmapStatus::Low, Some("1/2 cup"), None),
    ("Kiwifruit", "Fruit", FodmapStatus::Low, Some("2 small"), None),
    ("Lemon", "Fruit", FodmapStatus::Low, None, None),
    ("Orange", "Fruit", FodmapStatus::Low, None, None),
    ("Pineapple", "Fruit", FodmapStatus::Low, None, None),
    ("Raspberry", "Fruit", FodmapStatus::Low, Some("1/3 cup"), None),
    ("Rhubarb", "Fruit", FodmapStatus::Low, None, None),
    ("Strawberry", "Fruit", FodmapStatus::Low, Some("5 medium"), None),
    ("Apples", "Fruit", FodmapStatus::High, None, None),
    ("Apricot", "Fruit", FodmapStatus::High, None, None),
    ("Avocado", "Fruit", FodmapStatus::High, None, None),
    ("Bananas, ripe", "Fruit", FodmapStatus::High, None, None),
    ("Blackberries", "Fruit", FodmapStatus::High, None, None),
    ("Grapefruit", "Fruit", FodmapStatus::High, None, None),
    ("Grapes", "Fruit", FodmapStatus::High, None, None),
    ("Mango", "Fruit", FodmapStatus::High, None, None),
    ("Peaches", "Fruit", FodmapStatus::High, None, None),
    ("Pears", "Fruit", FodmapStatus::High, None, None),
    ("Plums", "Fruit", FodmapStatus::High, None, None),
    ("Raisins", "Fruit", FodmapStatus::High, None, None),
    ("Sultanas", "Fruit", FodmapStatus::High, None, None),
    ("Watermelon", "Fruit", FodmapStatus::High, None, None),
    ("Beef", "Protein", FodmapStatus::Low, None, None),
    ("Chicken", "Protein", FodmapStatus::Low, None, None),
    ("Lamb", "Protein", FodmapStatus::Low, None, None),
    ("Pork", "Protein", FodmapStatus::Low, None, None),
    ("Quorn mince", "Protein", FodmapStatus::Low, None, None),
    ("Cold cuts (Ham, turkey)", "Protein", FodmapStatus::Low, None, None),
    ("Canned Tuna", "Protein", FodmapStatus::Low, None, None),
    ("Fresh fish (Cod, Haddock, Salmon)", "Protein", FodmapStatus::Low, None, None),
    ("Sausages", "Protein", FodmapStatus::High, None, Some("Check ingredients")),
    ("Processed meat", "Protein", FodmapStatus::High, None, Some("Check ingredients")),
    ("Oats", "Grains", FodmapStatus::Low, None, None),
    ("Quinoa", "Grains", FodmapStatus::Low, None, None),
    ("Gluten free bread/pasta", "Grains", FodmapStatus::Low, None, None),
    ("Rice (Basmati, brown, white)", "Grains", FodmapStatus::Low, None, None),
    ("Tortilla chips", "Grains", FodmapStatus::Low, None, None),
    ("Cornflour", "Grains", FodmapStatus::Low, None, None),
    ("Wheat foods (Bread, cereal, pasta)", "Grains", FodmapStatus::High, None, None),
    ("Barley", "Grains", FodmapStatus::High, None, None),
    ("Rye", "Grains", FodmapStatus::High, None, None),
    ("Cous cous", "Grains", FodmapStatus::High, None, None),
    ("Gnocchi", "Grains", FodmapStatus::High, None, None),
    ("Granola", "Grains", FodmapStatus::High, None, None),
    ("Muesli", "Grains", FodmapStatus::High, None, None),
    ("Almond milk", "Dairy/Alt", FodmapStatus::Low, None, None),
    ("Coconut milk", "Dairy/Alt", FodmapStatus::Low, Some("125ml"), None),
    ("Lactose free milk", "Dairy/Alt", FodmapStatus::Low, None, None),
    ("Rice milk", "Dairy/Alt", FodmapStatus::Low, None, None),
    ("Soya milk (soy protein)", "Dairy/Alt", FodmapStatus::Low, None, None),
    ("Cow milk", "Dairy/Alt", FodmapStatus::High, None, None),
    ("Goat milk", "Dairy/Alt", FodmapStatus::High, None, None),
    ("Soy milk (soy beans)", "Dairy/Alt", FodmapStatus::High, None, None),
    ("Aspartame", "Sweeteners", FodmapStatus::Low, None, None),
    ("Acesulfame K", "Sweeteners", FodmapStatus::Low, None, None),
    ("Glucose", "Sweeteners", FodmapStatus::Low, None, None),
    ("Stevia", "Sweeteners", FodmapStatus::Low, None, None),
    ("Sucralose", "Sweeteners", FodmapStatus::Low, None, None),
    ("Sugar / sucrose", "Sweeteners", FodmapStatus::Low, None, None),
    ("Honey", "Sweeteners", FodmapStatus::High, None, None),
    ("High Fructose Corn Syrup (HFCS)", "Sweeteners", FodmapStatus::High, None, None),
    ("Agave", "Sweeteners", FodmapStatus::High, None, None),
    ("Sorbitol", "Sweeteners", FodmapStatus::High, None, None),
    ("Xylitol", "Sweeteners", FodmapStatus::High, None, None),
];

/// Read-only reference food table, built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceContext {
    items: Vec<FoodItem>,
}

impl ReferenceContext {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    pub fn builtin() -> Self {
        let items = BUILTIN_FOODS
            .iter()
            .map(|(name, category, status, portion, notes)| {
                FoodItem::new(
                    *name,
                    *category,
                    *status,
                    portion.map(str::to_string),
                    notes.map(str::to_string),
                )
            })
            .collect();

        Self::new(items)
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Distinct categories in lexical order.
    pub fn categories(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Case-insensitive name containment, exact category match.
    pub fn search(&self, filter: &FoodItemFilter) -> Vec<FoodItem> {
        let term = filter
            .search
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_lowercase();
        let category = filter
            .category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);

        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&term))
            .filter(|item| category.is_none_or(|c| item.category == c))
            .cloned()
            .collect()
    }

    /// Grounding text embedded into classification prompts.
    pub fn prompt_context(&self) -> String {
        self.items
            .iter()
            .map(FoodItem::context_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_populated() {
        let context = ReferenceContext::builtin();
        assert_eq!(context.items().len(), BUILTIN_FOODS.len());
        assert!(
            context
                .items()
                .iter()
                .all(|item| matches!(item.status, FodmapStatus::Low | FodmapStatus::High))
        );
    }

    #[test]
    fn test_categories_are_sorted_and_distinct() {
        let categories = ReferenceContext::builtin().categories();
        assert_eq!(
            categories,
            vec![
                "Dairy/Alt",
                "Fruit",
                "Grains",
                "Protein",
                "Sweeteners",
                "Vegetables"
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let context = ReferenceContext::builtin();
        let found = context.search(&FoodItemFilter::new(Some("gARLic".to_string()), None));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Garlic");
        assert_eq!(found[0].status, FodmapStatus::High);
    }

    #[test]
    fn test_search_filters_by_category() {
        let context = ReferenceContext::builtin();
        let found = context.search(&FoodItemFilter::new(
            Some("milk".to_string()),
            Some("Dairy/Alt".to_string()),
        ));
        assert!(!found.is_empty());
        assert!(found.iter().all(|item| item.category == "Dairy/Alt"));

        let none = context.search(&FoodItemFilter::new(
            Some("milk".to_string()),
            Some("Fruit".to_string()),
        ));
        assert!(none.is_empty());
    }

    #[test]
    fn test_all_category_matches_everything() {
        let context = ReferenceContext::builtin();
        let found = context.search(&FoodItemFilter::new(None, Some(ALL_CATEGORIES.to_string())));
        assert_eq!(found.len(), context.items().len());
    }

    #[test]
    fn test_prompt_context_lines() {
        let context = ReferenceContext::new(vec![
            FoodItem::new("Garlic", "Vegetables", FodmapStatus::High, None, None),
            FoodItem::new(
                "Carrots",
                "Vegetables",
                FodmapStatus::Low,
                Some("1 cup".to_string()),
                None,
            ),
        ]);
        assert_eq!(
            context.prompt_context(),
            "Garlic (Vegetables): HIGH\nCarrots (Vegetables): LOW"
        );
    }
}
