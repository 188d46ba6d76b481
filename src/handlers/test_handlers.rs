use super::*;
use crate::analyzer::GeminiAnalyzer;
use crate::error::{MoodSyncError, Result};
use crate::handlers::analyze::AnalyzeHandler;
use crate::handlers::help::{HelpHandlerTrait, MoodHelpParams};
use crate::handlers::options::{MoodOptionsParams, OptionsHandler};
use crate::models::{Mood, MoodAnalyzeParams};
use crate::transport::Transport;

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

const HAPPY_PAYLOAD: &str = r#"{
    "mood": "Happy",
    "confidence": 0.92,
    "explanation": "Cheerful wording and high energy",
    "recommendations": {
        "shopping": [],
        "food": [
            {"title": "Pani Puri Party Pack", "reason": "Celebratory snack", "platform": "Zomato", "deliveryTime": "20 min"}
        ],
        "music": [],
        "books": []
    }
}"#;

/// Transport stub that pops canned replies. An empty stub turns any
/// unexpected upstream call into an Internal error.
struct CannedTransport {
    replies: Mutex<Vec<Result<String>>>,
}

#[async_trait]
impl Transport for CannedTransport {
    async fn generate(&self, _prompt: &str, _schema: &Value) -> Result<String> {
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(MoodSyncError::Internal("no canned reply left".to_string())))
    }
}

fn create_test_handlers(replies: Vec<Result<String>>) -> ToolHandlers {
    let transport = Arc::new(CannedTransport {
        replies: Mutex::new(replies),
    });
    let analyzer = Arc::new(GeminiAnalyzer::new(transport));
    ToolHandlers::new(analyzer)
}

fn analyze_params(text: &str, location: &str) -> MoodAnalyzeParams {
    serde_json::from_value(json!({ "text": text, "location": location })).unwrap()
}

#[tokio::test]
async fn test_mood_analyze_wraps_analysis_in_envelope() {
    let handlers = create_test_handlers(vec![Ok(HAPPY_PAYLOAD.to_string())]);
    let response = handlers
        .mood_analyze(analyze_params("Got great news today", "Bandra, Mumbai"))
        .await
        .unwrap();

    assert_eq!(response.status, "success");
    assert_eq!(response.analysis.mood, Mood::Happy);
    assert_eq!(
        response.analysis.recommendations.food[0].delivery_time.as_deref(),
        Some("20 min")
    );
    assert!(uuid::Uuid::parse_str(&response.analysis_id).is_ok());
    assert!(chrono::DateTime::parse_from_rfc3339(&response.analyzed_at).is_ok());
}

#[tokio::test]
async fn test_mood_analyze_rejects_empty_text_before_transport() {
    // No canned replies: an unexpected transport call would surface as
    // Internal instead of Validation
    let handlers = create_test_handlers(vec![]);
    let err = handlers
        .mood_analyze(analyze_params("", "Mumbai"))
        .await
        .unwrap_err();
    assert!(matches!(err, MoodSyncError::Validation { ref field, .. } if field == "text"));
}

#[tokio::test]
async fn test_mood_analyze_rejects_empty_location_before_transport() {
    let handlers = create_test_handlers(vec![]);
    let err = handlers
        .mood_analyze(analyze_params("all good", " "))
        .await
        .unwrap_err();
    assert!(matches!(err, MoodSyncError::Validation { ref field, .. } if field == "location"));
}

#[tokio::test]
async fn test_mood_analyze_propagates_api_errors() {
    let handlers = create_test_handlers(vec![Err(MoodSyncError::Api {
        status: 429,
        message: "Resource has been exhausted".to_string(),
    })]);
    let err = handlers
        .mood_analyze(analyze_params("busy day", "Pune"))
        .await
        .unwrap_err();
    assert!(matches!(err, MoodSyncError::Api { status: 429, .. }));
}

#[tokio::test]
async fn test_mood_analyze_surfaces_malformed_model_output() {
    let handlers = create_test_handlers(vec![Ok("not json".to_string())]);
    let err = handlers
        .mood_analyze(analyze_params("busy day", "Pune"))
        .await
        .unwrap_err();
    assert!(matches!(err, MoodSyncError::Parse(_)));
}

#[tokio::test]
async fn test_mood_options_returns_every_set() {
    let handlers = create_test_handlers(vec![]);
    let options = handlers
        .mood_options(MoodOptionsParams { set: None })
        .await
        .unwrap();

    assert_eq!(
        options.moods.unwrap(),
        vec!["Happy", "Sad", "Stressed", "Excited", "Neutral"]
    );
    assert_eq!(
        options.genders.unwrap(),
        vec!["Male", "Female", "Non-Binary", "Other"]
    );
    assert_eq!(
        options.social_contexts.unwrap(),
        vec!["Alone", "Partner", "Friends", "Family"]
    );
    assert_eq!(
        options.activity_contexts.unwrap(),
        vec!["Working", "Commuting", "Relaxing", "Exercising", "Waking Up", "Chores"]
    );
    assert_eq!(
        options.primary_goals.unwrap(),
        vec!["Relax", "Focus", "Celebrate", "Vent", "Distract Me", "Pamper Me"]
    );

    let energy = options.energy.unwrap();
    assert_eq!((energy.min, energy.max, energy.default), (1, 5, 3));
    assert_eq!(options.platforms.unwrap().len(), 10);
}

#[tokio::test]
async fn test_mood_options_filters_to_one_set() {
    let handlers = create_test_handlers(vec![]);
    let options = handlers
        .mood_options(MoodOptionsParams {
            set: Some("moods".to_string()),
        })
        .await
        .unwrap();

    assert!(options.moods.is_some());
    assert!(options.genders.is_none());
    assert!(options.energy.is_none());
    assert!(options.platforms.is_none());
}

#[tokio::test]
async fn test_mood_options_rejects_unknown_set() {
    let handlers = create_test_handlers(vec![]);
    let err = handlers
        .mood_options(MoodOptionsParams {
            set: Some("cuisines".to_string()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, MoodSyncError::Validation { ref field, .. } if field == "set"));
}

#[tokio::test]
async fn test_mood_help_general_lists_all_tools() {
    let handlers = create_test_handlers(vec![]);
    let help = handlers
        .mood_help(MoodHelpParams {
            tool: None,
            topic: None,
        })
        .await
        .unwrap();

    assert!(help.overview.contains("mood_analyze"));
    assert!(help.tools.get("mood_analyze").is_some());
    assert!(help.tools.get("mood_options").is_some());
    assert!(!help.tips.is_empty());
}

#[tokio::test]
async fn test_mood_help_scopes_to_tool_and_topic() {
    let handlers = create_test_handlers(vec![]);
    let help = handlers
        .mood_help(MoodHelpParams {
            tool: Some("mood_analyze".to_string()),
            topic: Some("parameters".to_string()),
        })
        .await
        .unwrap();

    assert!(help.overview.starts_with("mood_analyze"));
    assert!(help.tools.get("required_params").is_some());
    assert!(help.tools.get("examples").is_none());
}
