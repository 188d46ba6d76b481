use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{MoodSyncError, Result};
use crate::models::{GeminiContent, GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig};

const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one prompt with a structured-output schema and return the raw
    /// response text. Exactly one upstream request per call: no retries,
    /// no client-side timeout, no caching.
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String>;
}

pub struct GeminiTransport {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiTransport {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE_URL}/{}:generateContent", self.model)
    }
}

#[async_trait]
impl Transport for GeminiTransport {
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.clone(),
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MoodSyncError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let parsed: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            MoodSyncError::Internal(format!(
                "Failed to parse Gemini API envelope: {e} - Body: {}",
                truncate(&body, 500)
            ))
        })?;

        let candidate = parsed.candidates.into_iter().next().ok_or_else(|| {
            MoodSyncError::Internal("Gemini API returned no candidates".to_string())
        })?;

        // A candidate may arrive with empty content; the parser downstream
        // treats the resulting empty string as a parse failure.
        let text = candidate
            .content
            .map(|content| content.parts.into_iter().map(|part| part.text).collect::<String>())
            .unwrap_or_default();

        Ok(text)
    }
}

// Gemini reports failures as {"error": {"message": ...}}; fall back to the
// raw body when the shape differs.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(String::from)
        })
        .unwrap_or_else(|| truncate(body, 500).to_string())
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_includes_model_and_action() {
        let transport =
            GeminiTransport::new("key".to_string(), "gemini-3-flash-preview".to_string()).unwrap();
        assert_eq!(
            transport.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_extract_error_message_from_gemini_shape() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(extract_error_message(body), "API key not valid");
    }

    #[test]
    fn test_extract_error_message_falls_back_to_body() {
        assert_eq!(extract_error_message("service unavailable"), "service unavailable");
        assert_eq!(extract_error_message(r#"{"detail": "nope"}"#), r#"{"detail": "nope"}"#);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 500), "short");
        assert_eq!(truncate("abcdef", 3), "abc");
        // Multibyte text must not be cut mid-character
        assert_eq!(truncate("नमस्ते दुनिया", 6), "नमस्ते");
    }

    #[tokio::test]
    async fn test_live_generate_when_api_key_present() {
        // Runs against the real Gemini API only when a key is configured.
        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            let transport = match GeminiTransport::new(api_key, "gemini-3-flash-preview".to_string())
            {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Failed to create transport in test: {e}");
                    return;
                }
            };
            let schema = json!({
                "type": "OBJECT",
                "properties": { "answer": { "type": "STRING" } },
                "required": ["answer"]
            });
            let res = transport
                .generate("Reply with JSON: what is the capital of France?", &schema)
                .await;
            assert!(res.is_ok());
        }
    }
}
