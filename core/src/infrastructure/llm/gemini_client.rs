use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    completion::{
        entities::{
            CompletionRequest, CompletionResponse, GroundingChunk, GroundingTool, LatLng,
        },
        ports::CompletionClient,
        value_objects::ModelRoutes,
    },
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiCompletionClient {
    api_key: String,
    routes: ModelRoutes,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_config: Option<ToolConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum Tool {
    GoogleSearch {},
    GoogleMaps {},
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: Coordinates,
}

#[derive(Debug, Serialize)]
struct Coordinates {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

impl GeminiCompletionClient {
    pub fn new(api_key: String, routes: ModelRoutes) -> Self {
        Self {
            api_key,
            routes,
            base_url: GEMINI_API_BASE.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn call_gemini_api(
        &self,
        model_name: &str,
        request: GeminiRequest,
    ) -> Result<GeminiResponse, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!(model = model_name, "Gemini API request failed: {}", e);
                CoreError::TransientFailure(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(model = model_name, "Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::TransientFailure(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!(model = model_name, "Failed to decode Gemini response: {}", e);
            CoreError::TransientFailure(format!("Failed to decode LLM response: {}", e))
        })
    }
}

impl From<&LLMConfig> for GeminiCompletionClient {
    fn from(config: &LLMConfig) -> Self {
        Self::new(config.gemini_api_key.clone(), ModelRoutes::from(config))
    }
}

impl CompletionClient for GeminiCompletionClient {
    async fn invoke(&self, request: CompletionRequest) -> Result<CompletionResponse, CoreError> {
        let model_name = self.routes.model_for(request.kind).to_string();
        tracing::debug!(kind = request.kind.as_str(), model = %model_name, "Invoking Gemini");

        let response = self
            .call_gemini_api(&model_name, build_request_body(request))
            .await?;

        into_completion(response)
    }
}

fn build_request_body(request: CompletionRequest) -> GeminiRequest {
    let mut parts = Vec::with_capacity(2);
    if let Some(attachment) = request.attachment {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: attachment.media_type,
                data: general_purpose::STANDARD.encode(&attachment.data),
            },
        });
    }
    parts.push(Part::Text {
        text: request.prompt,
    });

    // The service rejects a response schema combined with grounding tools.
    let generation_config = match request.output_shape.response_schema {
        Some(response_schema) if request.tools.is_empty() => Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema,
        }),
        _ => None,
    };

    let tools = request
        .tools
        .iter()
        .map(|tool| match tool {
            GroundingTool::WebSearch => Tool::GoogleSearch {},
            GroundingTool::PlaceSearch => Tool::GoogleMaps {},
        })
        .collect();

    let tool_config = request.location.map(|LatLng { latitude, longitude }| ToolConfig {
        retrieval_config: RetrievalConfig {
            lat_lng: Coordinates {
                latitude,
                longitude,
            },
        },
    });

    GeminiRequest {
        contents: vec![Content { parts }],
        generation_config,
        tools,
        tool_config,
    }
}

/// Concatenate the text parts of the first candidate and keep its grounding chunks.
fn into_completion(response: GeminiResponse) -> Result<CompletionResponse, CoreError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(CoreError::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        tracing::error!("Gemini returned no text");
        return Err(CoreError::EmptyResponse);
    }

    let grounding_chunks = candidate
        .grounding_metadata
        .map(|metadata| metadata.grounding_chunks)
        .unwrap_or_default();

    Ok(CompletionResponse::new(text, grounding_chunks))
}
