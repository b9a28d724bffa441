use crate::domain::{
    completion::entities::{
        CompletionRequest, GroundingTool, InlineAttachment, OutputShape, RequestKind,
    },
    food_lens::{
        schema::{get_dish_analysis_schema, get_scan_result_schema, get_suggestion_list_schema},
        value_objects::{
            DEFAULT_SUGGESTION_QUERY, FALLBACK_LOCALITY, FindRestaurantsInput, FoodLensQuery,
            ScanImageInput, SortBy, SuggestDishesInput,
        },
    },
    reference::ReferenceContext,
};

/// Build the completion request for a query. Pure function of its inputs.
pub fn build_request(query: &FoodLensQuery, reference: &ReferenceContext) -> CompletionRequest {
    let kind = query.kind();

    match query {
        FoodLensQuery::AnalyzeDish { dish_name } => CompletionRequest {
            kind,
            prompt: analyze_dish_prompt(dish_name),
            attachment: None,
            output_shape: shape(kind, Some(get_dish_analysis_schema())),
            tools: Vec::new(),
            location: None,
        },
        FoodLensQuery::GetRecipe { dish_name } => CompletionRequest {
            kind,
            prompt: recipe_prompt(dish_name),
            attachment: None,
            output_shape: shape(kind, None),
            tools: vec![GroundingTool::WebSearch],
            location: None,
        },
        FoodLensQuery::SuggestDishes(input) => CompletionRequest {
            kind,
            prompt: suggest_dishes_prompt(input),
            attachment: None,
            output_shape: shape(kind, Some(get_suggestion_list_schema())),
            tools: Vec::new(),
            location: None,
        },
        FoodLensQuery::ScanImage(input) => CompletionRequest {
            kind,
            prompt: scan_image_prompt(&reference.prompt_context()),
            attachment: Some(attachment(input)),
            output_shape: shape(kind, Some(get_scan_result_schema())),
            tools: Vec::new(),
            location: None,
        },
        FoodLensQuery::FindRestaurants(input) => CompletionRequest {
            kind,
            prompt: find_restaurants_prompt(input),
            attachment: None,
            output_shape: shape(kind, None),
            tools: vec![GroundingTool::PlaceSearch],
            location: input.location(),
        },
    }
}

fn shape(kind: RequestKind, response_schema: Option<serde_json::Value>) -> OutputShape {
    OutputShape {
        top_level: kind.top_level(),
        response_schema,
    }
}

fn attachment(input: &ScanImageInput) -> InlineAttachment {
    InlineAttachment {
        media_type: input.media_type.clone(),
        data: input.image.clone(),
    }
}

fn analyze_dish_prompt(dish_name: &str) -> String {
    format!(
        r#"You are an expert dietitian and chef specializing in East Asian cuisine and the Low FODMAP diet.
Analyze the following dish: "{dish_name}".

1. Determine if it is generally safe, risky, or unsafe for a strict Low FODMAP diet.
2. List main ingredients and flag typical high FODMAP culprits (e.g., garlic, onion, wheat noodles).
3. Suggest specific, flavor-preserving modifications.

Return the response as a valid JSON object matching this schema:
{{
  "dishName": "string",
  "isSafe": boolean,
  "riskLevel": "Low" | "Moderate" | "High",
  "explanation": "string (max 2 sentences)",
  "ingredientsBreakdown": [
    {{ "name": "string", "risk": "Low" | "High", "reason": "optional string" }}
  ],
  "modifications": ["string"]
}}"#
    )
}

fn recipe_prompt(dish_name: &str) -> String {
    format!(
        r#"1. Search for an authentic recipe for "{dish_name}" using sources like "Xiachufang" or authentic culinary blogs.
2. Adapt this authentic recipe to be Strictly Low FODMAP.

Flavor rules:
- Garlic/Onion: replace with garlic-infused oil or green scallion tops.
- Sauces: use gluten-free soy sauce, oyster sauce (check labels), sesame oil.

Output the result as a raw JSON object (no markdown) with this structure:
{{
  "title": "Dish Name (Low FODMAP)",
  "description": "Description...",
  "ingredients": ["1 cup rice", "2 tbsp garlic-infused oil"],
  "instructions": ["Step 1...", "Step 2..."],
  "fodmapNotes": "Why this works"
}}"#
    )
}

fn suggest_dishes_prompt(input: &SuggestDishesInput) -> String {
    let query = match input.query.trim() {
        "" => DEFAULT_SUGGESTION_QUERY,
        query => query,
    };

    format!(
        r#"Suggest 6 authentic East Asian dishes matching: "{query}".
Ensure they can be adapted to Low FODMAP.
Excluding: {}.

Return ONLY a JSON array of strings. Example: ["Dish A", "Dish B"]"#,
        input.exclude.join(", ")
    )
}

fn scan_image_prompt(database_context: &str) -> String {
    format!(
        r#"Identify the food item or dish in this image.
Then, cross-reference it with the following Low FODMAP database to determine if it is safe.

Database Context:
{database_context}

If the food is NOT in the database, use your general nutritional knowledge.
Return JSON."#
    )
}

fn find_restaurants_prompt(input: &FindRestaurantsInput) -> String {
    let location = match input.location() {
        Some(point) => format!(
            "near user location ({}, {})",
            point.latitude, point.longitude
        ),
        None => format!("in {FALLBACK_LOCALITY}"),
    };
    let ordering = match input.sort_by {
        SortBy::Distance => "proximity to location",
        SortBy::Rating => "highest rating",
    };

    format!(
        r#"Find 5 distinct, highly-rated {cuisine} restaurants {location}.

Constraints:
- Sort results by: {ordering}.
- Do NOT include these restaurants: {excluded}.
- Focus on places where dishes can be typically modified or are naturally simpler (steamed, grilled, rice-based).

For EACH restaurant found via Google Maps, provide:
1. Name and Address.
2. Short description.
3. Two dish recommendations that are "Most Likely Low FODMAP Safe" (but may require modification).
4. For EACH dish, provide a "caution" note specifying exactly what the user must verify with the server (e.g. "Ask for gluten-free soy sauce", "Ensure no garlic garnish", "Ask for sauce on side").

Output the result as a STRICT valid JSON array with this exact schema:
[
  {{
    "name": "Restaurant Name",
    "address": "Full Address",
    "description": "Short description",
    "recommendedDishes": [
      {{ "name": "Dish Name", "caution": "Ask server to..." }}
    ]
  }}
]
Do not add conversational text."#,
        cuisine = input.cuisine,
        excluded = input.exclude.join(", "),
    )
}
