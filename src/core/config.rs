//! Configuration management

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{Result, TranslationError};

/// Public Google Translate frontend
pub const DEFAULT_API_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Configuration for translator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Endpoint receiving translation requests
    pub api_endpoint: String,
    /// Value of the `client` query parameter
    pub client_id: String,
    /// Source language sent as `sl`, `auto` for detection
    pub source_lang: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            client_id: "gtx".to_string(),
            source_lang: "auto".to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            api_endpoint: std::env::var("TRANSLATE_API_ENDPOINT").unwrap_or(defaults.api_endpoint),
            client_id: std::env::var("TRANSLATE_CLIENT_ID").unwrap_or(defaults.client_id),
            source_lang: std::env::var("TRANSLATE_SOURCE_LANG").unwrap_or(defaults.source_lang),
        };

        debug!("Translator endpoint: {}", config.api_endpoint);
        config
    }

    /// Replace the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(config_error("API endpoint is required"));
        }

        let url = reqwest::Url::parse(&self.api_endpoint)
            .map_err(|e| config_error(format!("invalid API endpoint '{}': {}", self.api_endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(config_error(format!(
                "API endpoint must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.client_id.is_empty() {
            return Err(config_error("client id is required"));
        }

        if self.source_lang.is_empty() {
            return Err(config_error("source language is required"));
        }

        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> TranslationError {
    TranslationError::ConfigError {
        message: message.into(),
    }
}
