use std::sync::Arc;

use crate::{
    domain::{
        common::{FoodLensConfig, services::Service},
        reference::ReferenceContext,
    },
    infrastructure::llm::GeminiCompletionClient,
};

pub type FoodLensAppService = Service<GeminiCompletionClient>;

pub async fn create_service(config: FoodLensConfig) -> Result<FoodLensAppService, anyhow::Error> {
    if config.llm.gemini_api_key.trim().is_empty() {
        anyhow::bail!("GEMINI_API_KEY must be set");
    }

    let completion_client = GeminiCompletionClient::from(&config.llm);
    let reference = Arc::new(ReferenceContext::builtin());

    tracing::info!(
        analysis_model = %config.llm.analysis_model,
        vision_model = %config.llm.vision_model,
        maps_model = %config.llm.maps_model,
        foods = reference.items().len(),
        "FoodLens service ready"
    );

    Ok(Service::new(completion_client, reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{common::LLMConfig, food_lens::ports::FoodLensService};

    #[tokio::test]
    async fn test_create_service_requires_api_key() {
        let config = FoodLensConfig {
            llm: LLMConfig::new("  ".to_string()),
        };
        assert!(create_service(config).await.is_err());
    }

    #[tokio::test]
    async fn test_create_service_loads_reference_table() {
        let config = FoodLensConfig {
            llm: LLMConfig::new("key".to_string()),
        };
        let service = create_service(config).await.unwrap();
        assert!(!service.food_categories().is_empty());
    }
}
