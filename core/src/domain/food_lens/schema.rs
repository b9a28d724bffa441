use serde_json::json;

/// Response schema for dish safety analysis
pub fn get_dish_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "dishName": { "type": "string" },
            "isSafe": { "type": "boolean" },
            "riskLevel": {
                "type": "string",
                "enum": ["Low", "Moderate", "High"]
            },
            "explanation": { "type": "string" },
            "ingredientsBreakdown": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "risk": {
                            "type": "string",
                            "enum": ["Low", "High"]
                        },
                        "reason": { "type": "string" }
                    }
                }
            },
            "modifications": {
                "type": "array",
                "items": { "type": "string" }
            }
        }
    })
}

pub fn get_suggestion_list_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": { "type": "string" }
    })
}

/// Response schema for image classification
pub fn get_scan_result_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "identifiedFood": { "type": "string" },
            "status": {
                "type": "string",
                "enum": ["LOW", "HIGH", "MODERATE", "UNKNOWN"]
            },
            "reasoning": { "type": "string" }
        }
    })
}
