//! Core data models for translation

use crate::core::languages::LanguageCode;

/// Translation request
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Source language, `None` lets the backend detect it
    pub source_lang: Option<String>,
    /// Destination language
    pub target_lang: LanguageCode,
}

impl TranslationRequest {
    /// Request translating `text` into `target_lang`
    pub fn new(text: impl Into<String>, target_lang: LanguageCode) -> Self {
        Self {
            text: text.into(),
            source_lang: None,
            target_lang,
        }
    }

    /// Pin the source language instead of auto-detection
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }
}

/// Translation result
#[derive(Debug, Clone)]
pub struct TranslationResult {
    /// Translated text
    pub translation: String,
    /// Source language reported by the backend
    pub detected_source_lang: Option<String>,
    /// Language the text was translated into
    pub target_lang: String,
}
