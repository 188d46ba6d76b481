use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Flexible integer deserializer to handle string, float, or int inputs from different MCP clients
fn deserialize_flexible_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlexibleInt {
        Int(i32),
        Float(f64),
        String(String),
    }

    let value = FlexibleInt::deserialize(deserializer)?;
    match value {
        FlexibleInt::Int(i) => Ok(i),
        FlexibleInt::Float(f) => Ok(f as i32),
        FlexibleInt::String(s) => s.trim().parse::<i32>().map_err(serde::de::Error::custom),
    }
}

fn default_energy_level() -> i32 {
    3
}

/// Closed mood classification. The model must answer with exactly one of
/// these labels; anything else fails schema validation at parse time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Sad,
    Stressed,
    Excited,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Stressed,
        Mood::Excited,
        Mood::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Stressed => "Stressed",
            Mood::Excited => "Excited",
            Mood::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender identity from the questionnaire. Steers shopping and lifestyle
/// tailoring in the prompt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, schemars::JsonSchema)]
pub enum Gender {
    #[default]
    Male,
    Female,
    #[serde(rename = "Non-Binary")]
    NonBinary,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::Male, Gender::Female, Gender::NonBinary, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-Binary",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who the user is with right now.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, schemars::JsonSchema)]
pub enum SocialContext {
    #[default]
    Alone,
    Partner,
    Friends,
    Family,
}

impl SocialContext {
    pub const ALL: [SocialContext; 4] = [
        SocialContext::Alone,
        SocialContext::Partner,
        SocialContext::Friends,
        SocialContext::Family,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialContext::Alone => "Alone",
            SocialContext::Partner => "Partner",
            SocialContext::Friends => "Friends",
            SocialContext::Family => "Family",
        }
    }
}

impl fmt::Display for SocialContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user is doing right now.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, schemars::JsonSchema)]
pub enum ActivityContext {
    Working,
    Commuting,
    #[default]
    Relaxing,
    Exercising,
    #[serde(rename = "Waking Up")]
    WakingUp,
    Chores,
}

impl ActivityContext {
    pub const ALL: [ActivityContext; 6] = [
        ActivityContext::Working,
        ActivityContext::Commuting,
        ActivityContext::Relaxing,
        ActivityContext::Exercising,
        ActivityContext::WakingUp,
        ActivityContext::Chores,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityContext::Working => "Working",
            ActivityContext::Commuting => "Commuting",
            ActivityContext::Relaxing => "Relaxing",
            ActivityContext::Exercising => "Exercising",
            ActivityContext::WakingUp => "Waking Up",
            ActivityContext::Chores => "Chores",
        }
    }
}

impl fmt::Display for ActivityContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user wants out of the next hour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, schemars::JsonSchema)]
pub enum PrimaryGoal {
    #[default]
    Relax,
    Focus,
    Celebrate,
    Vent,
    #[serde(rename = "Distract Me")]
    DistractMe,
    #[serde(rename = "Pamper Me")]
    PamperMe,
}

impl PrimaryGoal {
    pub const ALL: [PrimaryGoal; 6] = [
        PrimaryGoal::Relax,
        PrimaryGoal::Focus,
        PrimaryGoal::Celebrate,
        PrimaryGoal::Vent,
        PrimaryGoal::DistractMe,
        PrimaryGoal::PamperMe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryGoal::Relax => "Relax",
            PrimaryGoal::Focus => "Focus",
            PrimaryGoal::Celebrate => "Celebrate",
            PrimaryGoal::Vent => "Vent",
            PrimaryGoal::DistractMe => "Distract Me",
            PrimaryGoal::PamperMe => "Pamper Me",
        }
    }
}

impl fmt::Display for PrimaryGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full questionnaire state for one analysis request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInputData {
    pub text: String,
    pub location: String,
    pub gender: Gender,
    pub energy_level: i32,
    pub social_context: SocialContext,
    pub activity_context: ActivityContext,
    pub primary_goal: PrimaryGoal,
}

impl Default for UserInputData {
    fn default() -> Self {
        Self {
            text: String::new(),
            location: String::new(),
            gender: Gender::Male,
            energy_level: 3,
            social_context: SocialContext::Alone,
            activity_context: ActivityContext::Relaxing,
            primary_goal: PrimaryGoal::Relax,
        }
    }
}

/// Format detected coordinates the way the questionnaire records a location.
pub fn location_from_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.4}, {longitude:.4}")
}

/// One recommended item. `delivery_time` only appears on food items and
/// `image` is rarely populated, so both stay optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub reason: String,
    pub platform: String,
    #[serde(rename = "deliveryTime", skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The four recommendation lists. The model occasionally drops a list
/// entirely, which deserializes to an empty vec rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationSet {
    #[serde(default)]
    pub shopping: Vec<Recommendation>,
    #[serde(default)]
    pub food: Vec<Recommendation>,
    #[serde(default)]
    pub music: Vec<Recommendation>,
    #[serde(default)]
    pub books: Vec<Recommendation>,
}

/// Typed result of one mood analysis. Top-level fields are required;
/// a response missing any of them is a schema mismatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodAnalysis {
    pub mood: Mood,
    pub confidence: f64,
    pub explanation: String,
    pub recommendations: RecommendationSet,
}

// Gemini generateContent request format
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

// Gemini generateContent response format
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
}

/// Parameters for the mood_analyze tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MoodAnalyzeParams {
    #[schemars(description = "Free text describing what's on the user's mind right now")]
    pub text: String,

    #[schemars(description = "User location, e.g. 'Bandra, Mumbai' or '19.0760, 72.8777'")]
    pub location: String,

    #[schemars(description = "Gender identity: 'Male', 'Female', 'Non-Binary' or 'Other' (default Male)")]
    #[serde(default)]
    pub gender: Gender,

    #[schemars(description = "Energy level on a 1-5 scale (default 3)")]
    #[serde(default = "default_energy_level", deserialize_with = "deserialize_flexible_int")]
    pub energy_level: i32,

    #[schemars(description = "Who the user is with: 'Alone', 'Partner', 'Friends' or 'Family' (default Alone)")]
    #[serde(default)]
    pub social_context: SocialContext,

    #[schemars(description = "Current activity: 'Working', 'Commuting', 'Relaxing', 'Exercising', 'Waking Up' or 'Chores' (default Relaxing)")]
    #[serde(default)]
    pub activity_context: ActivityContext,

    #[schemars(description = "Desired outcome: 'Relax', 'Focus', 'Celebrate', 'Vent', 'Distract Me' or 'Pamper Me' (default Relax)")]
    #[serde(default)]
    pub primary_goal: PrimaryGoal,
}

impl MoodAnalyzeParams {
    pub fn into_input(self) -> UserInputData {
        UserInputData {
            text: self.text,
            location: self.location,
            gender: self.gender,
            energy_level: self.energy_level,
            social_context: self.social_context,
            activity_context: self.activity_context,
            primary_goal: self.primary_goal,
        }
    }
}

/// Response from the mood_analyze tool
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub status: String,
    pub analysis_id: String,
    pub analyzed_at: String,
    pub analysis: MoodAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_labels_round_trip() {
        for mood in Mood::ALL {
            let json = serde_json::to_string(&mood).unwrap();
            assert_eq!(json, format!("\"{}\"", mood.as_str()));
            let back: Mood = serde_json::from_str(&json).unwrap();
            assert_eq!(back, mood);
        }
    }

    #[test]
    fn test_unknown_mood_label_is_rejected() {
        assert!(serde_json::from_str::<Mood>("\"Angry\"").is_err());
    }

    #[test]
    fn test_multi_word_labels_serialize_with_spaces() {
        assert_eq!(serde_json::to_string(&Gender::NonBinary).unwrap(), "\"Non-Binary\"");
        assert_eq!(
            serde_json::to_string(&ActivityContext::WakingUp).unwrap(),
            "\"Waking Up\""
        );
        assert_eq!(
            serde_json::to_string(&PrimaryGoal::DistractMe).unwrap(),
            "\"Distract Me\""
        );
        assert_eq!(
            serde_json::to_string(&PrimaryGoal::PamperMe).unwrap(),
            "\"Pamper Me\""
        );
    }

    #[test]
    fn test_multi_word_labels_deserialize() {
        let goal: PrimaryGoal = serde_json::from_str("\"Pamper Me\"").unwrap();
        assert_eq!(goal, PrimaryGoal::PamperMe);
        let activity: ActivityContext = serde_json::from_str("\"Waking Up\"").unwrap();
        assert_eq!(activity, ActivityContext::WakingUp);
    }

    #[test]
    fn test_analyze_params_apply_questionnaire_defaults() {
        let params: MoodAnalyzeParams =
            serde_json::from_str(r#"{"text": "long day", "location": "Pune"}"#).unwrap();
        assert_eq!(params.gender, Gender::Male);
        assert_eq!(params.energy_level, 3);
        assert_eq!(params.social_context, SocialContext::Alone);
        assert_eq!(params.activity_context, ActivityContext::Relaxing);
        assert_eq!(params.primary_goal, PrimaryGoal::Relax);
    }

    #[test]
    fn test_energy_level_accepts_flexible_encodings() {
        let from_int: MoodAnalyzeParams =
            serde_json::from_str(r#"{"text": "t", "location": "l", "energy_level": 5}"#).unwrap();
        assert_eq!(from_int.energy_level, 5);

        let from_string: MoodAnalyzeParams =
            serde_json::from_str(r#"{"text": "t", "location": "l", "energy_level": "2"}"#).unwrap();
        assert_eq!(from_string.energy_level, 2);

        let from_float: MoodAnalyzeParams =
            serde_json::from_str(r#"{"text": "t", "location": "l", "energy_level": 4.0}"#).unwrap();
        assert_eq!(from_float.energy_level, 4);
    }

    #[test]
    fn test_energy_level_rejects_non_numeric_strings() {
        let result = serde_json::from_str::<MoodAnalyzeParams>(
            r#"{"text": "t", "location": "l", "energy_level": "high"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_recommendation_uses_camel_case_delivery_time() {
        let json = r#"{"title": "Hyderabadi Biryani", "reason": "Comfort food", "platform": "Swiggy", "deliveryTime": "30 min"}"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.delivery_time.as_deref(), Some("30 min"));

        let out = serde_json::to_value(&rec).unwrap();
        assert_eq!(out["deliveryTime"], "30 min");
    }

    #[test]
    fn test_recommendation_optionals_may_be_absent() {
        let json = r#"{"title": "Lo-fi Beats", "reason": "Calming", "platform": "Spotify"}"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert!(rec.delivery_time.is_none());
        assert!(rec.image.is_none());

        // Absent optionals stay off the wire entirely
        let out = serde_json::to_value(&rec).unwrap();
        assert!(out.get("deliveryTime").is_none());
        assert!(out.get("image").is_none());
    }

    #[test]
    fn test_missing_recommendation_lists_default_to_empty() {
        let set: RecommendationSet = serde_json::from_str(r#"{"music": []}"#).unwrap();
        assert!(set.shopping.is_empty());
        assert!(set.food.is_empty());
        assert!(set.music.is_empty());
        assert!(set.books.is_empty());
    }

    #[test]
    fn test_coordinates_format_to_four_decimal_places() {
        assert_eq!(location_from_coordinates(19.075984, 72.877656), "19.0760, 72.8777");
        assert_eq!(location_from_coordinates(28.7, 77.1), "28.7000, 77.1000");
        assert_eq!(location_from_coordinates(-33.86882, 151.20929), "-33.8688, 151.2093");
    }

    #[test]
    fn test_default_input_matches_questionnaire_initial_state() {
        let input = UserInputData::default();
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.energy_level, 3);
        assert_eq!(input.social_context, SocialContext::Alone);
        assert_eq!(input.activity_context, ActivityContext::Relaxing);
        assert_eq!(input.primary_goal, PrimaryGoal::Relax);
    }

    #[test]
    fn test_gemini_request_serializes_camel_case_generation_config() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: "hello".to_string() }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: serde_json::json!({"type": "OBJECT"}),
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_gemini_response_tolerates_missing_fields() {
        let empty: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.candidates.is_empty());

        let no_text: GeminiResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": [{}]}}]}"#).unwrap();
        let content = no_text.candidates[0].content.as_ref().unwrap();
        assert_eq!(content.parts[0].text, "");
    }
}
