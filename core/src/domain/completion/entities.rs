use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Which of the five operations a completion call serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    AnalyzeDish,
    GetRecipe,
    SuggestDishes,
    ScanImage,
    FindRestaurants,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::AnalyzeDish => "analyze_dish",
            RequestKind::GetRecipe => "get_recipe",
            RequestKind::SuggestDishes => "suggest_dishes",
            RequestKind::ScanImage => "scan_image",
            RequestKind::FindRestaurants => "find_restaurants",
        }
    }

    pub fn top_level(&self) -> TopLevel {
        match self {
            RequestKind::SuggestDishes | RequestKind::FindRestaurants => TopLevel::Array,
            RequestKind::AnalyzeDish | RequestKind::GetRecipe | RequestKind::ScanImage => {
                TopLevel::Object
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevel {
    Object,
    Array,
}

impl TopLevel {
    pub fn open(&self) -> char {
        match self {
            TopLevel::Object => '{',
            TopLevel::Array => '[',
        }
    }

    pub fn close(&self) -> char {
        match self {
            TopLevel::Object => '}',
            TopLevel::Array => ']',
        }
    }
}

/// Expected output shape. The schema is a hint; the service may still diverge.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputShape {
    pub top_level: TopLevel,
    pub response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroundingTool {
    WebSearch,
    PlaceSearch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAttachment {
    pub media_type: String,
    pub data: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub kind: RequestKind,
    pub prompt: String,
    pub attachment: Option<InlineAttachment>,
    pub output_shape: OutputShape,
    pub tools: Vec<GroundingTool>,
    /// Retrieval origin for place search
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebCitation {
    pub uri: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceCitation {
    pub uri: Option<String>,
    pub title: Option<String>,
}

/// One grounding evidence unit. Not authoritative domain data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingChunk {
    pub web: Option<WebCitation>,
    pub maps: Option<PlaceCitation>,
}

impl GroundingChunk {
    pub fn web(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            web: Some(WebCitation {
                uri: Some(uri.into()),
                title: Some(title.into()),
            }),
            maps: None,
        }
    }

    pub fn place(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            web: None,
            maps: Some(PlaceCitation {
                uri: Some(uri.into()),
                title: Some(title.into()),
            }),
        }
    }

    pub fn web_title(&self) -> Option<&str> {
        self.web.as_ref().and_then(|w| w.title.as_deref())
    }

    pub fn web_uri(&self) -> Option<&str> {
        self.web.as_ref().and_then(|w| w.uri.as_deref())
    }

    pub fn place_uri(&self) -> Option<&str> {
        self.maps.as_ref().and_then(|m| m.uri.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionResponse {
    pub text: String,
    pub grounding_chunks: Vec<GroundingChunk>,
}

impl CompletionResponse {
    pub fn new(text: impl Into<String>, grounding_chunks: Vec<GroundingChunk>) -> Self {
        Self {
            text: text.into(),
            grounding_chunks,
        }
    }
}
