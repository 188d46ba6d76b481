use serde::{Deserialize, Serialize};

use crate::error::{MoodSyncError, Result};
use crate::models::{ActivityContext, Gender, Mood, PrimaryGoal, SocialContext};
use crate::prompt::INDIAN_PLATFORMS;
use crate::validation::{MAX_ENERGY_LEVEL, MIN_ENERGY_LEVEL};

/// Parameters for the mood_options tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MoodOptionsParams {
    #[schemars(description = "Optional single set to return: 'moods', 'genders', 'social_contexts', 'activity_contexts', 'primary_goals', 'energy' or 'platforms'. Omit for all sets.")]
    pub set: Option<String>,
}

/// Energy slider bounds for questionnaire clients.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnergyScale {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl EnergyScale {
    fn questionnaire() -> Self {
        Self {
            min: MIN_ENERGY_LEVEL,
            max: MAX_ENERGY_LEVEL,
            default: 3,
        }
    }
}

/// Label sets a questionnaire client needs to render the form. Only the
/// requested sets are populated; absent ones stay off the wire.
#[derive(Debug, Default, Serialize)]
pub struct QuestionnaireOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genders: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_contexts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_contexts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_goals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
}

fn labels<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Trait for the questionnaire options tool
pub trait OptionsHandler {
    /// Handle mood_options tool
    async fn mood_options(&self, params: MoodOptionsParams) -> Result<QuestionnaireOptions>;
}

impl OptionsHandler for super::ToolHandlers {
    async fn mood_options(&self, params: MoodOptionsParams) -> Result<QuestionnaireOptions> {
        tracing::info!("Processing mood_options request");

        let mut options = QuestionnaireOptions::default();
        match params.set.as_deref() {
            None => {
                options.moods = Some(labels(&Mood::ALL));
                options.genders = Some(labels(&Gender::ALL));
                options.social_contexts = Some(labels(&SocialContext::ALL));
                options.activity_contexts = Some(labels(&ActivityContext::ALL));
                options.primary_goals = Some(labels(&PrimaryGoal::ALL));
                options.energy = Some(EnergyScale::questionnaire());
                options.platforms = Some(labels(&INDIAN_PLATFORMS));
            }
            Some("moods") => options.moods = Some(labels(&Mood::ALL)),
            Some("genders") => options.genders = Some(labels(&Gender::ALL)),
            Some("social_contexts") => options.social_contexts = Some(labels(&SocialContext::ALL)),
            Some("activity_contexts") => {
                options.activity_contexts = Some(labels(&ActivityContext::ALL));
            }
            Some("primary_goals") => options.primary_goals = Some(labels(&PrimaryGoal::ALL)),
            Some("energy") => options.energy = Some(EnergyScale::questionnaire()),
            Some("platforms") => options.platforms = Some(labels(&INDIAN_PLATFORMS)),
            Some(other) => {
                return Err(MoodSyncError::Validation {
                    field: "set".to_string(),
                    reason: format!("unknown option set '{other}'"),
                });
            }
        }

        Ok(options)
    }
}
