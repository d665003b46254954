//! Command-line arguments

use clap::{Parser, ValueEnum};

/// How letter groupings are printed
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{'h': ['h'], ...}` on one line
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// Translate text and count letter occurrences.
#[derive(Parser, Debug)]
#[command(name = "letter-lingo", version, about, long_about = None)]
pub struct CliArgs {
    /// The sentence to translate and analyze.
    #[arg(long)]
    pub sentence: Option<String>,

    /// The two-letter code of the target language for translation.
    #[arg(long = "code_of_lang")]
    pub code_of_lang: Option<String>,

    /// List all supported language codes and exit.
    #[arg(long)]
    pub list_languages: bool,

    /// Output format for letter groupings
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Translation endpoint (overrides TRANSLATE_API_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_translate_args() {
        let args = CliArgs::try_parse_from([
            "letter-lingo",
            "--sentence",
            "Hello world",
            "--code_of_lang",
            "de",
        ])
        .unwrap();

        assert_eq!(args.sentence.as_deref(), Some("Hello world"));
        assert_eq!(args.code_of_lang.as_deref(), Some("de"));
        assert!(!args.list_languages);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_kebab_spelling_of_code_is_rejected() {
        let result = CliArgs::try_parse_from(["letter-lingo", "--code-of-lang", "de"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_flags() {
        let args =
            CliArgs::try_parse_from(["letter-lingo", "--list-languages", "--format", "json", "-v"])
                .unwrap();
        assert!(args.list_languages);
        assert!(args.verbose);
        assert_eq!(args.format, OutputFormat::Json);
    }
}
