use crate::error::{MoodSyncError, Result};
use crate::models::UserInputData;

pub const MAX_TEXT_LENGTH: usize = 4000;
pub const MAX_LOCATION_LENGTH: usize = 200;
pub const MIN_ENERGY_LEVEL: i32 = 1;
pub const MAX_ENERGY_LEVEL: i32 = 5;

/// Validates questionnaire input before it reaches the Gemini transport.
/// Rejected input never produces an upstream request.
#[derive(Debug, Default)]
pub struct InputValidator;

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_input(&self, input: &UserInputData) -> Result<()> {
        self.validate_text(&input.text)?;
        self.validate_location(&input.location)?;
        self.validate_energy_level(input.energy_level)?;
        Ok(())
    }

    pub fn validate_text(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(MoodSyncError::Validation {
                field: "text".to_string(),
                reason: "share a little about what's on your mind".to_string(),
            });
        }
        if text.len() > MAX_TEXT_LENGTH {
            return Err(MoodSyncError::Validation {
                field: "text".to_string(),
                reason: format!("must be at most {MAX_TEXT_LENGTH} characters"),
            });
        }
        Ok(())
    }

    pub fn validate_location(&self, location: &str) -> Result<()> {
        if location.trim().is_empty() {
            return Err(MoodSyncError::Validation {
                field: "location".to_string(),
                reason: "a location is needed for local recommendations".to_string(),
            });
        }
        if location.len() > MAX_LOCATION_LENGTH {
            return Err(MoodSyncError::Validation {
                field: "location".to_string(),
                reason: format!("must be at most {MAX_LOCATION_LENGTH} characters"),
            });
        }
        Ok(())
    }

    pub fn validate_energy_level(&self, energy_level: i32) -> Result<()> {
        if !(MIN_ENERGY_LEVEL..=MAX_ENERGY_LEVEL).contains(&energy_level) {
            return Err(MoodSyncError::Validation {
                field: "energy_level".to_string(),
                reason: format!("must be between {MIN_ENERGY_LEVEL} and {MAX_ENERGY_LEVEL}"),
            });
        }
        Ok(())
    }
}
