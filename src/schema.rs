use serde_json::{Value, json};

// Item schema for one recommendation list. Only food items carry the
// optional deliveryTime property; it never joins the required set.
fn recommendation_items(with_delivery_time: bool) -> Value {
    let mut properties = json!({
        "title": { "type": "STRING" },
        "reason": { "type": "STRING" },
        "platform": { "type": "STRING" }
    });
    if with_delivery_time {
        properties["deliveryTime"] = json!({ "type": "STRING" });
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": ["title", "reason", "platform"]
    })
}

/// Structured-output schema sent with every generateContent request.
/// Gemini's schema dialect spells type names in uppercase.
pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "mood": { "type": "STRING" },
            "confidence": { "type": "NUMBER" },
            "explanation": { "type": "STRING" },
            "recommendations": {
                "type": "OBJECT",
                "properties": {
                    "shopping": { "type": "ARRAY", "items": recommendation_items(false) },
                    "food": { "type": "ARRAY", "items": recommendation_items(true) },
                    "music": { "type": "ARRAY", "items": recommendation_items(false) },
                    "books": { "type": "ARRAY", "items": recommendation_items(false) }
                },
                "required": ["shopping", "food", "music", "books"]
            }
        },
        "required": ["mood", "confidence", "explanation", "recommendations"]
    })
}
