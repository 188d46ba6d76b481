pub mod analyzer;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod rate_limit;
pub mod schema;
pub mod service;
pub mod transport;
pub mod validation;

use std::sync::Arc;

use crate::analyzer::{GeminiAnalyzer, MoodAnalyzer};
use crate::config::Config;
use crate::error::{MoodSyncError, Result};
use crate::models::{MoodAnalysis, UserInputData};
use crate::transport::GeminiTransport;

/// Facade over the analysis pipeline for embedding MoodSync without the
/// MCP server.
pub struct MoodSync {
    analyzer: GeminiAnalyzer,
}

impl MoodSync {
    pub fn new(cfg: &Config) -> Result<Self> {
        if cfg.gemini.model.trim().is_empty() {
            return Err(MoodSyncError::Config(
                "gemini.model must not be empty".to_string(),
            ));
        }

        let transport = Arc::new(GeminiTransport::new(
            cfg.gemini.api_key.clone(),
            cfg.gemini.model.clone(),
        )?);

        Ok(Self {
            analyzer: GeminiAnalyzer::new(transport),
        })
    }

    pub async fn analyze(&self, input: &UserInputData) -> Result<MoodAnalysis> {
        self.analyzer.analyze(input).await
    }
}
