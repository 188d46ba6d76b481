use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{MoodAnalysis, UserInputData};
use crate::parser::parse_analysis;
use crate::prompt::build_analysis_prompt;
use crate::schema::analysis_response_schema;
use crate::transport::Transport;
use crate::validation::InputValidator;

/// The analysis operation behind every inbound surface.
#[async_trait]
pub trait MoodAnalyzer: Send + Sync {
    async fn analyze(&self, input: &UserInputData) -> Result<MoodAnalysis>;
}

/// Gemini-backed analyzer: validate the input, build the prompt, make
/// exactly one transport call, parse the reply. Invalid input is rejected
/// before anything goes upstream.
pub struct GeminiAnalyzer {
    transport: Arc<dyn Transport>,
    validator: InputValidator,
}

impl GeminiAnalyzer {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            validator: InputValidator::new(),
        }
    }
}

#[async_trait]
impl MoodAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, input: &UserInputData) -> Result<MoodAnalysis> {
        self.validator.validate_input(input)?;

        tracing::info!(
            "Analyzing mood for location '{}' ({} chars of text)",
            input.location,
            input.text.len()
        );

        let prompt = build_analysis_prompt(input);
        let schema = analysis_response_schema();
        let raw = self.transport.generate(&prompt, &schema).await?;

        let analysis = parse_analysis(&raw)?;
        tracing::info!(
            "Mood analysis complete: {} (confidence {:.2})",
            analysis.mood,
            analysis.confidence
        );

        Ok(analysis)
    }
}
