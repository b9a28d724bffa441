use crate::domain::{common::LLMConfig, completion::entities::RequestKind};

/// Fixed model routing table keyed by request kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRoutes {
    pub analysis: String,
    pub vision: String,
    pub maps: String,
}

impl ModelRoutes {
    pub fn model_for(&self, kind: RequestKind) -> &str {
        match kind {
            RequestKind::AnalyzeDish | RequestKind::GetRecipe | RequestKind::SuggestDishes => {
                &self.analysis
            }
            RequestKind::ScanImage => &self.vision,
            RequestKind::FindRestaurants => &self.maps,
        }
    }
}

impl From<&LLMConfig> for ModelRoutes {
    fn from(config: &LLMConfig) -> Self {
        Self {
            analysis: config.analysis_model.clone(),
            vision: config.vision_model.clone(),
            maps: config.maps_model.clone(),
        }
    }
}
