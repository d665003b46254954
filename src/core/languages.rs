//! Fixed table of target language codes accepted by the translation backend

use std::fmt;
use thiserror::Error;

/// Supported target language codes, sorted ascending
pub const SUPPORTED_LANG_CODES: &[&str] = &[
    "af", "am", "ar", "az", "be", "bg", "bn", "bs", "ca", "ceb", "co", "cs", "cy", "da",
    "de", "el", "en", "eo", "es", "et", "eu", "fa", "fi", "fr", "fy", "ga", "gd", "gl",
    "gu", "ha", "haw", "hi", "hmn", "hr", "ht", "hu", "hy", "id", "ig", "is", "it", "iw",
    "ja", "jw", "ka", "kk", "km", "kn", "ko", "ku", "ky", "la", "lb", "lo", "lt", "lv",
    "mg", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "ne", "nl", "no", "ny", "or",
    "pa", "pl", "ps", "pt", "ro", "ru", "sd", "si", "sk", "sl", "sm", "sn", "so", "sq",
    "sr", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "tl", "tr", "uk", "ur", "uz",
    "vi", "xh", "yi", "yo", "zh-cn", "zh-tw", "zu",
];

/// Returned when a code is not in [`SUPPORTED_LANG_CODES`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a supported language code.")]
pub struct UnsupportedLanguageCode(pub String);

/// All supported codes in ascending order
pub fn sorted_codes() -> impl Iterator<Item = &'static str> {
    SUPPORTED_LANG_CODES.iter().copied()
}

/// A language code known to be in the supported set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageCode(&'static str);

impl LanguageCode {
    /// Validate a raw code against the supported set
    pub fn parse(code: &str) -> Result<Self, UnsupportedLanguageCode> {
        SUPPORTED_LANG_CODES
            .binary_search(&code)
            .map(|idx| Self(SUPPORTED_LANG_CODES[idx]))
            .map_err(|_| UnsupportedLanguageCode(code.to_string()))
    }

    /// The code as sent to the backend
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
