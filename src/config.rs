use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure for MoodSync
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub rate_limiter: RateLimiterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    pub max_requests: u32,
    pub window_seconds: u32,
}

impl Config {
    /// Load configuration from file with environment variable overrides.
    /// ALWAYS returns a valid config - never fails.
    pub fn load() -> Self {
        // The .env may sit next to the binary or one level up depending on
        // how the MCP client launches the server
        let env_paths = [".env", "../.env"];

        let mut env_loaded = false;
        for path in &env_paths {
            if dotenvy::from_path(path).is_ok() {
                tracing::info!("Loaded .env from: {}", path);
                env_loaded = true;
                break;
            }
        }

        if !env_loaded {
            tracing::warn!(
                "No .env file found in any expected location - continuing with env vars only"
            );
        }

        let config_path =
            env::var("MOODSYNC_CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            match fs::read_to_string(&config_path) {
                Ok(contents) => match serde_yaml::from_str::<Config>(&contents) {
                    Ok(config) => {
                        tracing::info!("Loaded configuration from {}", config_path);
                        config
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to parse config file {}: {} - using defaults",
                            config_path,
                            e
                        );
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to read config file {}: {} - using defaults",
                        config_path,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            tracing::warn!("Config file not found at {} - using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides();

        // Validate configuration - log warnings but don't fail
        if let Err(e) = config.validate() {
            tracing::warn!("Config validation warnings: {} - continuing anyway", e);
        }

        config
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| env::var(name).ok());
    }

    /// Apply overrides from a name-to-value lookup. `std::env::set_var` is
    /// unsafe in edition 2024, so tests drive this seam with a canned lookup
    /// instead of mutating the process environment.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(name) = lookup("MOODSYNC_SERVER_NAME") {
            self.server.name = name;
        }
        if let Some(version) = lookup("MOODSYNC_SERVER_VERSION") {
            self.server.version = version;
        }

        // Gemini overrides. GEMINI_API_KEY wins; GOOGLE_API_KEY is accepted
        // for parity with other Gemini tooling.
        if let Some(api_key) = lookup("GEMINI_API_KEY").or_else(|| lookup("GOOGLE_API_KEY")) {
            self.gemini.api_key = api_key;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.gemini.model = model;
        }

        // Rate limiter overrides
        if let Some(max_requests) = lookup("MOODSYNC_RATE_LIMIT_MAX_REQUESTS") {
            if let Ok(max) = max_requests.parse() {
                self.rate_limiter.max_requests = max;
            }
        }
        if let Some(window) = lookup("MOODSYNC_RATE_LIMIT_WINDOW_SECONDS") {
            if let Ok(window_secs) = window.parse() {
                self.rate_limiter.window_seconds = window_secs;
            }
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.rate_limiter.max_requests == 0 {
            return Err("Rate limiter max_requests cannot be 0".into());
        }
        if self.rate_limiter.window_seconds == 0 {
            return Err("Rate limiter window_seconds cannot be 0".into());
        }

        if self.gemini.model.trim().is_empty() {
            return Err("Gemini model cannot be empty".into());
        }

        // A missing key is not fatal here; the first upstream call will fail
        // with an auth error instead.
        if self.gemini.api_key == "PLACEHOLDER_GEMINI_API_KEY" || self.gemini.api_key.is_empty() {
            return Err("GEMINI_API_KEY environment variable must be set".into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mood-sync".to_string(),
                version: "0.1.0".to_string(),
            },
            gemini: GeminiConfig {
                api_key: env::var("GEMINI_API_KEY")
                    .or_else(|_| env::var("GOOGLE_API_KEY"))
                    .unwrap_or_else(|_| {
                        tracing::warn!("GEMINI_API_KEY not set, using placeholder");
                        "PLACEHOLDER_GEMINI_API_KEY".to_string()
                    }),
                model: "gemini-3-flash-preview".to_string(),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: 30,
                window_seconds: 60,
            },
        }
    }
}
