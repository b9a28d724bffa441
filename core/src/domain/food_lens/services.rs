use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    completion::{extractor::extract, ports::CompletionClient},
    food_lens::{
        entities::{DishAnalysis, DomainRecord, Recipe, Restaurant, ScanResult},
        grounding::merge,
        normalizer::normalize,
        ports::FoodLensService,
        prompts::build_request,
        value_objects::{
            DEFAULT_CUISINE, FindRestaurantsInput, FoodLensOperation, FoodLensQuery,
            ScanImageInput, SuggestDishesInput,
        },
    },
    reference::{entities::FoodItem, value_objects::FoodItemFilter},
};

impl<C> Service<C>
where
    C: CompletionClient,
{
    /// Build, invoke, extract, normalize and merge for one query.
    #[instrument(
        skip(self, query),
        fields(request_id = %generate_uuid_v7(), kind = query.kind().as_str())
    )]
    async fn run_pipeline(&self, query: FoodLensQuery) -> Result<DomainRecord, CoreError> {
        let request = build_request(&query, &self.reference);
        let kind = request.kind;

        let response = self.completion_client.invoke(request).await?;

        let payload = extract(&response.text, kind.top_level());
        tracing::debug!(located = payload.located, "Extracted completion payload");

        let record = normalize(&payload, kind)?;
        Ok(merge(record, &response.grounding_chunks))
    }
}

/// Log the failure subtype, then hide it behind the operation's message.
fn collapse(operation: FoodLensOperation, error: CoreError) -> CoreError {
    match error {
        CoreError::InvalidInput(_) | CoreError::OperationFailed(_) => error,
        other => {
            tracing::error!(operation = %operation, error = %other, "{}", operation.failure_message());
            CoreError::OperationFailed(operation)
        }
    }
}

fn require_dish_name(dish_name: String) -> Result<String, CoreError> {
    let trimmed = dish_name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(
            "dish name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_image(input: &ScanImageInput) -> Result<(), CoreError> {
    if input.image.is_empty() {
        return Err(CoreError::InvalidInput("image must not be empty".to_string()));
    }
    if !input.media_type.starts_with("image/") {
        return Err(CoreError::InvalidInput(format!(
            "unsupported media type: {}",
            input.media_type
        )));
    }
    Ok(())
}

impl<C> FoodLensService for Service<C>
where
    C: CompletionClient,
{
    async fn analyze_dish(&self, dish_name: String) -> Result<DishAnalysis, CoreError> {
        let dish_name = require_dish_name(dish_name)?;

        self.run_pipeline(FoodLensQuery::AnalyzeDish { dish_name })
            .await
            .and_then(DomainRecord::into_dish_analysis)
            .map_err(|e| collapse(FoodLensOperation::AnalyzeDish, e))
    }

    async fn get_recipe(&self, dish_name: String) -> Result<Recipe, CoreError> {
        let dish_name = require_dish_name(dish_name)?;

        self.run_pipeline(FoodLensQuery::GetRecipe { dish_name })
            .await
            .and_then(DomainRecord::into_recipe)
            .map_err(|e| collapse(FoodLensOperation::GetRecipe, e))
    }

    async fn suggest_dishes(&self, input: SuggestDishesInput) -> Result<Vec<String>, CoreError> {
        let result = self
            .run_pipeline(FoodLensQuery::SuggestDishes(input))
            .await
            .and_then(DomainRecord::into_suggestions);

        match result {
            Ok(suggestions) => Ok(suggestions),
            Err(e) => {
                tracing::warn!(error = %e, "Dish suggestions unavailable, returning none");
                Ok(Vec::new())
            }
        }
    }

    async fn scan_image(&self, input: ScanImageInput) -> Result<ScanResult, CoreError> {
        validate_image(&input)?;

        self.run_pipeline(FoodLensQuery::ScanImage(input))
            .await
            .and_then(DomainRecord::into_scan_result)
            .map_err(|e| collapse(FoodLensOperation::ScanImage, e))
    }

    async fn find_restaurants(
        &self,
        mut input: FindRestaurantsInput,
    ) -> Result<Vec<Restaurant>, CoreError> {
        if input.cuisine.trim().is_empty() {
            input.cuisine = DEFAULT_CUISINE.to_string();
        }

        let result = self
            .run_pipeline(FoodLensQuery::FindRestaurants(input))
            .await
            .and_then(DomainRecord::into_restaurants);

        match result {
            Ok(restaurants) => Ok(restaurants),
            Err(e) if e.is_recoverable_as_empty() => {
                tracing::warn!(error = %e, "No readable restaurant list, returning none");
                Ok(Vec::new())
            }
            Err(e) => Err(collapse(FoodLensOperation::FindRestaurants, e)),
        }
    }

    fn search_foods(&self, filter: FoodItemFilter) -> Vec<FoodItem> {
        self.reference.search(&filter)
    }

    fn food_categories(&self) -> Vec<String> {
        self.reference.categories()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use bytes::Bytes;

    use super::*;
    use crate::domain::{
        completion::entities::{
            CompletionRequest, CompletionResponse, GroundingChunk, GroundingTool, RequestKind,
        },
        food_lens::{entities::RiskLevel, grounding::MAPS_SEARCH_URL},
        reference::ReferenceContext,
    };

    #[derive(Clone)]
    struct StubCompletionClient {
        reply: Result<CompletionResponse, CoreError>,
        requests: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl StubCompletionClient {
        fn replying(reply: Result<CompletionResponse, CoreError>) -> Self {
            Self {
                reply,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn text(text: &str) -> Self {
            Self::replying(Ok(CompletionResponse::new(text, Vec::new())))
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl CompletionClient for StubCompletionClient {
        async fn invoke(&self, request: CompletionRequest) -> Result<CompletionResponse, CoreError> {
            self.requests.lock().unwrap().push(request);
            self.reply.clone()
        }
    }

    fn service(client: &StubCompletionClient) -> Service<StubCompletionClient> {
        Service::new(client.clone(), Arc::new(ReferenceContext::builtin()))
    }

    const ANALYSIS: &str = r#"Here is the analysis:
{"dishName": "Kung Pao Chicken", "isSafe": false, "riskLevel": "High",
 "explanation": "Garlic and onion.", "ingredientsBreakdown": [{"name": "Garlic", "risk": "High"}],
 "modifications": ["Use garlic-infused oil"]}"#;

    #[tokio::test]
    async fn test_analyze_dish_issues_one_call() {
        let client = StubCompletionClient::text(ANALYSIS);
        let analysis = service(&client)
            .analyze_dish("  Kung Pao Chicken ".to_string())
            .await
            .unwrap();

        assert_eq!(analysis.risk_level, RiskLevel::High);
        assert_eq!(analysis.ingredients_breakdown.len(), 1);

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, RequestKind::AnalyzeDish);
        assert!(requests[0].prompt.contains("\"Kung Pao Chicken\""));
    }

    #[tokio::test]
    async fn test_empty_dish_name_is_rejected_before_invoking() {
        let client = StubCompletionClient::text(ANALYSIS);
        let result = service(&client).analyze_dish("   ".to_string()).await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_failures_collapse_to_operation_message() {
        let client =
            StubCompletionClient::replying(Err(CoreError::TransientFailure("503".to_string())));
        let error = service(&client)
            .analyze_dish("Laksa".to_string())
            .await
            .unwrap_err();

        assert_eq!(
            error,
            CoreError::OperationFailed(FoodLensOperation::AnalyzeDish)
        );
        assert_eq!(error.to_string(), "Failed to analyze dish.");
    }

    #[tokio::test]
    async fn test_recipe_gets_web_citation() {
        let client = StubCompletionClient::replying(Ok(CompletionResponse::new(
            r#"{"title": "T", "description": "D"}"#,
            vec![GroundingChunk::web("Xiachufang", "https://xiachufang.example/1")],
        )));
        let recipe = service(&client)
            .get_recipe("Mapo Tofu".to_string())
            .await
            .unwrap();

        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert_eq!(recipe.fodmap_notes, "");
        assert_eq!(
            recipe.inspiration_source.map(|c| c.url),
            Some("https://xiachufang.example/1".to_string())
        );
        assert_eq!(client.requests()[0].tools, vec![GroundingTool::WebSearch]);
    }

    #[tokio::test]
    async fn test_recipe_failure_message() {
        let client = StubCompletionClient::text("Sorry, I can't help with that.");
        let error = service(&client)
            .get_recipe("Mapo Tofu".to_string())
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Failed to generate recipe");
    }

    #[tokio::test]
    async fn test_suggestions_degrade_to_empty() {
        let client =
            StubCompletionClient::replying(Err(CoreError::TransientFailure("timeout".to_string())));
        let suggestions = service(&client)
            .suggest_dishes(SuggestDishesInput {
                query: "noodles".to_string(),
                exclude: Vec::new(),
            })
            .await
            .unwrap();

        assert!(suggestions.is_empty());
        assert_eq!(client.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_suggestions_from_prose() {
        let client = StubCompletionClient::text(
            "Sure! Here you go: [\"Mapo Tofu\", \"Bibimbap\"]  Hope that helps!",
        );
        let suggestions = service(&client)
            .suggest_dishes(SuggestDishesInput {
                query: String::new(),
                exclude: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(suggestions, vec!["Mapo Tofu", "Bibimbap"]);
    }

    #[tokio::test]
    async fn test_scan_image_routes_attachment() {
        let client = StubCompletionClient::text(
            r#"{"identifiedFood": "Banana", "status": "LOW", "reasoning": "Firm banana."}"#,
        );
        let scan = service(&client)
            .scan_image(ScanImageInput {
                image: Bytes::from_static(b"\x89PNG"),
                media_type: "image/png".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(scan.identified_food, "Banana");
        let requests = client.requests();
        assert_eq!(requests[0].kind, RequestKind::ScanImage);
        assert!(requests[0].attachment.is_some());
    }

    #[tokio::test]
    async fn test_scan_image_validation_and_schema_mismatch() {
        let client = StubCompletionClient::text(r#"{"identifiedFood": "Kiwi", "status": "VERY_LOW"}"#);
        let service = service(&client);

        let empty = service
            .scan_image(ScanImageInput {
                image: Bytes::new(),
                media_type: "image/jpeg".to_string(),
            })
            .await;
        assert!(matches!(empty, Err(CoreError::InvalidInput(_))));

        let not_image = service
            .scan_image(ScanImageInput {
                image: Bytes::from_static(b"%PDF"),
                media_type: "application/pdf".to_string(),
            })
            .await;
        assert!(matches!(not_image, Err(CoreError::InvalidInput(_))));
        assert!(client.requests().is_empty());

        let error = service
            .scan_image(ScanImageInput {
                image: Bytes::from_static(b"\xff\xd8"),
                media_type: "image/jpeg".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Failed to analyze image");
    }

    #[tokio::test]
    async fn test_restaurants_get_links_and_default_cuisine() {
        let client = StubCompletionClient::text(
            r#"[{"name": "Golden Dragon", "address": "123 Main St", "recommendedDishes": ["Steamed Fish"]}]"#,
        );
        let restaurants = service(&client)
            .find_restaurants(FindRestaurantsInput {
                cuisine: " ".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(restaurants.len(), 1);
        assert!(restaurants[0].google_maps_uri.starts_with(MAPS_SEARCH_URL));
        assert!(
            restaurants[0]
                .google_maps_uri
                .contains("Golden%20Dragon%20123%20Main%20St")
        );
        assert!(client.requests()[0].prompt.contains("Asian restaurants"));
    }

    #[tokio::test]
    async fn test_restaurants_recover_unreadable_output() {
        for reply in [
            Ok(CompletionResponse::new("No places found nearby.", Vec::new())),
            Ok(CompletionResponse::new("[{\"name\": \"Broken\"", Vec::new())),
            Err(CoreError::EmptyResponse),
        ] {
            let client = StubCompletionClient::replying(reply);
            let restaurants = service(&client)
                .find_restaurants(FindRestaurantsInput::default())
                .await
                .unwrap();
            assert!(restaurants.is_empty());
        }
    }

    #[tokio::test]
    async fn test_restaurants_transport_failure_is_reported() {
        let client =
            StubCompletionClient::replying(Err(CoreError::TransientFailure("reset".to_string())));
        let error = service(&client)
            .find_restaurants(FindRestaurantsInput::default())
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Failed to find restaurants.");
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let client = StubCompletionClient::text(ANALYSIS);
        let service = service(&client);

        let (first, second) = futures::join!(
            service.analyze_dish("Kung Pao Chicken".to_string()),
            service.analyze_dish("Kung Pao Chicken".to_string())
        );

        assert_eq!(first.unwrap(), second.unwrap());
        assert_eq!(client.requests().len(), 2);
    }

    #[test]
    fn test_reference_search_operations() {
        let client = StubCompletionClient::text("");
        let service = service(&client);

        let found = service.search_foods(FoodItemFilter::new(Some("garlic".to_string()), None));
        assert_eq!(found.len(), 1);
        assert_eq!(service.food_categories().len(), 6);
        assert!(client.requests().is_empty());
    }
}
