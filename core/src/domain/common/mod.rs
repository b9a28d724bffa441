use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_VISION_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_MAPS_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone, Debug)]
pub struct FoodLensConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    /// Text reasoning: dish analysis, recipes, suggestions
    pub analysis_model: String,
    pub vision_model: String,
    /// Place-search grounding is only served by a subset of models
    pub maps_model: String,
}

impl LLMConfig {
    pub fn new(gemini_api_key: String) -> Self {
        Self {
            gemini_api_key,
            analysis_model: DEFAULT_ANALYSIS_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            maps_model: DEFAULT_MAPS_MODEL.to_string(),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_config_defaults() {
        let config = LLMConfig::new("key".to_string());
        assert_eq!(config.analysis_model, DEFAULT_ANALYSIS_MODEL);
        assert_eq!(config.vision_model, DEFAULT_VISION_MODEL);
        assert_eq!(config.maps_model, DEFAULT_MAPS_MODEL);
    }

    #[test]
    fn test_generate_uuid_v7_is_version_7() {
        assert_eq!(generate_uuid_v7().get_version_num(), 7);
    }
}
