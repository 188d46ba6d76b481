use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Result;

/// Parameters for the mood_help tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MoodHelpParams {
    #[schemars(description = "Optional specific tool to get help for ('mood_analyze', 'mood_options', or leave empty for general help)")]
    pub tool: Option<String>,

    #[schemars(description = "Optional specific topic ('parameters', 'examples', or leave empty for all)")]
    pub topic: Option<String>,
}

/// Response structure for help requests
#[derive(Debug, Serialize)]
pub struct HelpResponse {
    pub overview: String,
    pub tools: serde_json::Value,
    pub examples: serde_json::Value,
    pub tips: Vec<String>,
}

/// Handler for help operations
#[derive(Default)]
pub struct HelpHandler;

impl HelpHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn help(&self, params: MoodHelpParams) -> Result<HelpResponse> {
        tracing::info!("Processing help request");

        let response = match params.tool.as_deref() {
            Some("mood_analyze") => self.mood_analyze_help(&params.topic),
            Some("mood_options") => self.mood_options_help(&params.topic),
            _ => self.general_help(),
        };

        Ok(response)
    }

    fn general_help(&self) -> HelpResponse {
        HelpResponse {
            overview: "MoodSync MCP Server - Gemini-backed mood analysis with hyper-personalized recommendations for India.\n\nAvailable tools:\n• mood_analyze - Analyze questionnaire input and return mood plus shopping, food, music and book picks\n• mood_options - Return the label sets a questionnaire client needs to render the form\n• mood_help - Get help information about the tools".to_string(),

            tools: json!({
                "mood_analyze": {
                    "description": "Analyze the user's mood from questionnaire input",
                    "purpose": "Classify mood into Happy, Sad, Stressed, Excited or Neutral and recommend items on Indian platforms",
                    "key_features": [
                        "Sentiment analysis over free text plus structured context",
                        "Gender-aware shopping and lifestyle tailoring",
                        "Location-relevant suggestions",
                        "Recommendations across shopping, food, music and books",
                        "No URLs, only titles, reasons and platform names"
                    ]
                },
                "mood_options": {
                    "description": "Return questionnaire label sets",
                    "purpose": "Let clients render pickers without hard-coding labels",
                    "sets": [
                        "moods", "genders", "social_contexts",
                        "activity_contexts", "primary_goals", "energy", "platforms"
                    ]
                },
                "mood_help": {
                    "description": "Get help information about available tools",
                    "purpose": "Learn how to use MoodSync tools effectively"
                }
            }),

            examples: json!({
                "minimal_request": {
                    "description": "Analyze with questionnaire defaults",
                    "params": {
                        "text": "Long week, finally done with the release",
                        "location": "Indiranagar, Bengaluru"
                    }
                },
                "full_request": {
                    "description": "Analyze with every context field set",
                    "params": {
                        "text": "Can't focus, too much noise around me",
                        "location": "Andheri, Mumbai",
                        "gender": "Female",
                        "energy_level": 2,
                        "social_context": "Family",
                        "activity_context": "Working",
                        "primary_goal": "Focus"
                    }
                },
                "detected_location": {
                    "description": "Location from device coordinates",
                    "params": {
                        "text": "Feeling great after the morning run",
                        "location": "19.0760, 72.8777"
                    }
                }
            }),

            tips: vec![
                "text and location are required; everything else falls back to questionnaire defaults".to_string(),
                "energy_level runs 1 (drained) to 5 (buzzing)".to_string(),
                "Multi-word labels are spelled exactly as shown, e.g. 'Waking Up' and 'Distract Me'".to_string(),
                "A specific neighbourhood beats a bare city name for food suggestions".to_string(),
                "Responses carry platform names like Swiggy or Myntra, never direct links".to_string(),
            ],
        }
    }

    fn mood_analyze_help(&self, topic: &Option<String>) -> HelpResponse {
        let base_info = json!({
            "description": "Analyze the user's mood from questionnaire input and recommend items on Indian platforms",
            "required_params": {
                "text": "Free text describing what's on the user's mind (string)",
                "location": "User location, neighbourhood or coordinates (string)"
            },
            "optional_params": {
                "gender": "Gender identity (string): 'Male', 'Female', 'Non-Binary', 'Other' - default 'Male'",
                "energy_level": "Energy on a 1-5 scale (integer) - default 3",
                "social_context": "Who the user is with (string): 'Alone', 'Partner', 'Friends', 'Family' - default 'Alone'",
                "activity_context": "Current activity (string): 'Working', 'Commuting', 'Relaxing', 'Exercising', 'Waking Up', 'Chores' - default 'Relaxing'",
                "primary_goal": "Desired outcome (string): 'Relax', 'Focus', 'Celebrate', 'Vent', 'Distract Me', 'Pamper Me' - default 'Relax'"
            },
            "response": {
                "mood": "One of 'Happy', 'Sad', 'Stressed', 'Excited', 'Neutral'",
                "confidence": "Model confidence, nominally 0.0 to 1.0",
                "explanation": "Short reasoning behind the classification",
                "recommendations": "Four lists: shopping, food, music, books. Food items may carry a deliveryTime."
            }
        });

        let examples = json!({
            "stressed_evening": {
                "params": {
                    "text": "Back to back meetings all day, my head is pounding",
                    "location": "HSR Layout, Bengaluru",
                    "energy_level": 1,
                    "activity_context": "Working",
                    "primary_goal": "Relax"
                }
            },
            "celebration": {
                "params": {
                    "text": "We closed the deal! Team is thrilled",
                    "location": "Connaught Place, Delhi",
                    "energy_level": 5,
                    "social_context": "Friends",
                    "primary_goal": "Celebrate"
                }
            }
        });

        HelpResponse {
            overview: "mood_analyze - Classify mood and return recommendations tailored to gender, energy, context and location".to_string(),
            tools: match topic.as_deref() {
                Some("parameters") => base_info,
                Some("examples") => examples,
                _ => json!({
                    "parameters": base_info,
                    "examples": examples
                }),
            },
            examples: json!({}),
            tips: vec![
                "Empty or whitespace-only text is rejected before any model call".to_string(),
                "energy_level outside 1-5 is rejected as invalid params".to_string(),
                "Treat confidence as advisory; it comes straight from the model".to_string(),
                "Recommendation lists can be empty when the model has nothing relevant".to_string(),
            ],
        }
    }

    fn mood_options_help(&self, topic: &Option<String>) -> HelpResponse {
        let base_info = json!({
            "description": "Return the label sets a questionnaire client needs to render the form",
            "optional_params": {
                "set": "Single set to return (string): 'moods', 'genders', 'social_contexts', 'activity_contexts', 'primary_goals', 'energy' or 'platforms'. Omit for all sets."
            },
            "response": {
                "moods": "Closed mood classification labels",
                "genders": "Gender identity labels",
                "social_contexts": "Company labels",
                "activity_contexts": "Activity labels",
                "primary_goals": "Goal labels",
                "energy": "min, max and default for the energy slider",
                "platforms": "Indian platforms recommendations may come from"
            }
        });

        let examples = json!({
            "all_sets": {
                "description": "Everything needed to render the questionnaire",
                "params": {}
            },
            "single_set": {
                "description": "Just the activity labels",
                "params": { "set": "activity_contexts" }
            }
        });

        HelpResponse {
            overview: "mood_options - Label sets and ranges for questionnaire clients".to_string(),
            tools: match topic.as_deref() {
                Some("parameters") => base_info,
                Some("examples") => examples,
                _ => json!({
                    "parameters": base_info,
                    "examples": examples
                }),
            },
            examples: json!({}),
            tips: vec![
                "Labels are the exact strings mood_analyze accepts, render them verbatim".to_string(),
                "An unknown set name is rejected as invalid params".to_string(),
            ],
        }
    }
}

/// Trait for help-related operations
pub trait HelpHandlerTrait {
    /// Handle mood_help tool
    async fn mood_help(&self, params: MoodHelpParams) -> Result<HelpResponse>;
}

impl HelpHandlerTrait for super::ToolHandlers {
    async fn mood_help(&self, params: MoodHelpParams) -> Result<HelpResponse> {
        self.help.help(params).await
    }
}
