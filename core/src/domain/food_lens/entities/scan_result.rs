use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::reference::entities::FodmapStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    #[serde(default)]
    pub identified_food: String,
    pub status: FodmapStatus,
    #[serde(default)]
    pub reasoning: String,
}
