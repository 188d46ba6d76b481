use thiserror::Error;

pub type Result<T> = std::result::Result<T, MoodSyncError>;

/// Error taxonomy for the analysis pipeline.
///
/// Every failure of the core operation surfaces as exactly one of these;
/// callers decide how to present it (the MCP layer maps `Validation` to
/// invalid-params and everything else to internal errors).
#[derive(Error, Debug)]
pub enum MoodSyncError {
    /// A required input field is empty or out of range. Raised before any
    /// request is sent upstream.
    #[error("Validation error: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Network-level failure reaching the Gemini endpoint. Not classified
    /// further and never retried.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The Gemini service answered with a non-success status or an error
    /// payload (auth failure, rate limit, server error).
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The model's response text is not valid JSON (or is empty).
    #[error("Failed to parse model response as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response parsed as JSON but does not carry the expected analysis
    /// shape (missing required fields, unknown mood label, wrong types).
    #[error("Model response does not match the analysis schema: {0}")]
    SchemaMismatch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
