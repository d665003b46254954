//! Letter Lingo - letter occurrence groupings for a sentence and its translation
//!
//! The library exposes the letter counter, the supported language table and an
//! asynchronous client for the translation backend. The `cli` module drives them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use core::{
    client::{GoogleTranslator, Translate},
    config::TranslatorConfig,
    errors::TranslationError,
    languages::{LanguageCode, UnsupportedLanguageCode},
    letters::{count_letters, LetterGrouping},
    models::{TranslationRequest, TranslationResult},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
