use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{CallToolResult, Content, ErrorData, ServerCapabilities, ServerInfo},
};
use rmcp_macros::{tool, tool_handler, tool_router};
use std::future::Future;
use std::sync::Arc;

use crate::analyzer::GeminiAnalyzer;
use crate::config::Config;
use crate::error::MoodSyncError;
use crate::handlers::ToolHandlers;
use crate::handlers::analyze::AnalyzeHandler;
use crate::handlers::help::{HelpHandlerTrait, MoodHelpParams};
use crate::handlers::options::{MoodOptionsParams, OptionsHandler};
use crate::models::MoodAnalyzeParams;
use crate::rate_limit::RateLimiter;
use crate::transport::{GeminiTransport, Transport};

/// Main service struct for the MoodSync MCP server
#[derive(Clone)]
pub struct MoodSyncService {
    tool_router: ToolRouter<Self>,
    handlers: Arc<ToolHandlers>,
    rate_limiter: Arc<RateLimiter>,
    config: Arc<Config>,
}

impl MoodSyncService {
    /// Create a new service instance
    pub fn new(config: Arc<Config>) -> Result<Self, MoodSyncError> {
        tracing::info!("Service::new() - Starting initialization");

        let transport: Arc<dyn Transport> = Arc::new(GeminiTransport::new(
            config.gemini.api_key.clone(),
            config.gemini.model.clone(),
        )?);
        tracing::info!(
            "Service::new() - Gemini transport created for model {}",
            config.gemini.model
        );

        let analyzer = Arc::new(GeminiAnalyzer::new(transport));
        let handlers = Arc::new(ToolHandlers::new(analyzer));

        let rate_limiter = Arc::new(RateLimiter::new(
            config.rate_limiter.max_requests as usize,
            config.rate_limiter.window_seconds as u64,
        ));

        tracing::info!("Service::new() - Service initialization complete");
        Ok(Self {
            tool_router: Self::tool_router(),
            handlers,
            rate_limiter,
            config,
        })
    }
}

#[tool_router]
impl MoodSyncService {
    #[tool(
        description = "Analyze the user's mood from questionnaire input and return recommendations for Indian platforms"
    )]
    pub async fn mood_analyze(
        &self,
        params: Parameters<MoodAnalyzeParams>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        // Check rate limit
        if let Err(e) = self.rate_limiter.check_rate_limit("mood_analyze").await {
            tracing::warn!("Rate limit hit for mood_analyze: {}", e);
            return Err(ErrorData::invalid_params(
                "Rate limit exceeded. Please slow down your requests.".to_string(),
                None,
            ));
        }

        match self.handlers.mood_analyze(params.0).await {
            Ok(response) => {
                let content = Content::json(response).map_err(|e| {
                    ErrorData::internal_error(format!("Failed to create JSON content: {e}"), None)
                })?;
                Ok(CallToolResult::success(vec![content]))
            }
            Err(e) => match &e {
                MoodSyncError::Validation { .. } => {
                    tracing::warn!("mood_analyze rejected invalid input: {}", e);
                    Err(ErrorData::invalid_params(e.to_string(), None))
                }
                _ => {
                    tracing::error!("mood_analyze error: {}", e);
                    Err(ErrorData::internal_error(e.to_string(), None))
                }
            },
        }
    }

    #[tool(description = "Return the questionnaire label sets, energy range and platform list")]
    pub async fn mood_options(
        &self,
        params: Parameters<MoodOptionsParams>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        // Static data, no rate limit
        match self.handlers.mood_options(params.0).await {
            Ok(response) => {
                let content = Content::json(response).map_err(|e| {
                    ErrorData::internal_error(format!("Failed to create JSON content: {e}"), None)
                })?;
                Ok(CallToolResult::success(vec![content]))
            }
            Err(e) => match &e {
                MoodSyncError::Validation { .. } => {
                    Err(ErrorData::invalid_params(e.to_string(), None))
                }
                _ => {
                    tracing::error!("mood_options error: {}", e);
                    Err(ErrorData::internal_error(e.to_string(), None))
                }
            },
        }
    }

    #[tool(description = "Get help information about available tools and their usage")]
    pub async fn mood_help(
        &self,
        params: Parameters<MoodHelpParams>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        // No rate limit for help requests
        match self.handlers.mood_help(params.0).await {
            Ok(response) => {
                let content = Content::json(response).map_err(|e| {
                    ErrorData::internal_error(format!("Failed to create JSON content: {e}"), None)
                })?;
                Ok(CallToolResult::success(vec![content]))
            }
            Err(e) => {
                tracing::error!("mood_help error: {}", e);
                Err(ErrorData::internal_error(
                    format!("Error generating help: {e}"),
                    None,
                ))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for MoodSyncService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: rmcp::model::ProtocolVersion::V_2024_11_05,
            server_info: rmcp::model::Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
            },
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            instructions: Some(
                "MoodSync MCP Server for Gemini-backed mood analysis and Indian lifestyle recommendations".into(),
            ),
        }
    }
}
