//! Async client for the translation backend

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslationRequest, TranslationResult};

/// Something that can translate a request
#[allow(async_fn_in_trait)]
pub trait Translate {
    /// Translate a single request
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult>;
}

/// Client for the Google Translate `translate_a/single` frontend.
///
/// Issues exactly one request per call. There is no retry and no timeout: a
/// slow backend blocks the caller until it answers or the connection drops.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    config: TranslatorConfig,
}

impl GoogleTranslator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Send actual HTTP request
    async fn send_request(&self, request: &TranslationRequest) -> Result<Value> {
        let source_lang = request
            .source_lang
            .as_deref()
            .unwrap_or(&self.config.source_lang);

        debug!(
            "Translating {} bytes from {} to {}",
            request.text.len(),
            source_lang,
            request.target_lang
        );

        let response = self
            .client
            .get(&self.config.api_endpoint)
            .query(&[
                ("client", self.config.client_id.as_str()),
                ("sl", source_lang),
                ("tl", request.target_lang.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Translation backend returned {}", status_code);

            if status_code == 429 {
                return Err(TranslationError::RateLimitError);
            }

            return Err(TranslationError::ApiError {
                status: status_code,
                message: error_text,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponseError {
                message: e.to_string(),
            })
    }
}

impl Translate for GoogleTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let json = self.send_request(request).await?;
        let result = parse_response(&json, request)?;

        debug!(
            "Received {} bytes, detected source language: {:?}",
            result.translation.len(),
            result.detected_source_lang
        );

        Ok(result)
    }
}

/// Extract the translated text from the nested array the frontend returns.
///
/// The body looks like `[[["Hallo ", "Hello ", ...], ["Welt", "world", ...]], null, "en", ...]`:
/// the first element holds one entry per sentence fragment and the third the
/// detected source language.
fn parse_response(json: &Value, request: &TranslationRequest) -> Result<TranslationResult> {
    let segments = json
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::InvalidResponseError {
            message: "No translation in response".to_string(),
        })?;

    let mut translation = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            translation.push_str(text);
        }
    }

    if translation.is_empty() && !request.text.trim().is_empty() {
        return Err(TranslationError::InvalidResponseError {
            message: "Translated text is empty".to_string(),
        });
    }

    let detected_source_lang = json.get(2).and_then(Value::as_str).map(str::to_string);

    Ok(TranslationResult {
        translation,
        detected_source_lang,
        target_lang: request.target_lang.to_string(),
    })
}
