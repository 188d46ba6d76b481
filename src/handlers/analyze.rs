use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{AnalyzeResponse, MoodAnalyzeParams};

/// Trait for the mood analysis tool
pub trait AnalyzeHandler {
    /// Handle mood_analyze tool
    async fn mood_analyze(&self, params: MoodAnalyzeParams) -> Result<AnalyzeResponse>;
}

impl AnalyzeHandler for super::ToolHandlers {
    async fn mood_analyze(&self, params: MoodAnalyzeParams) -> Result<AnalyzeResponse> {
        let input = params.into_input();
        tracing::info!(
            "Processing mood_analyze request for location '{}'",
            input.location
        );

        let analysis = self.analyzer.analyze(&input).await?;

        Ok(AnalyzeResponse {
            status: "success".to_string(),
            analysis_id: Uuid::new_v4().to_string(),
            analyzed_at: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            analysis,
        })
    }
}
