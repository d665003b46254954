//! CLI dispatch and command handlers

use anyhow::Context;
use clap::CommandFactory;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};

use crate::cli::args::{CliArgs, OutputFormat};
use crate::core::client::Translate;
use crate::core::errors::Result as ClientResult;
use crate::core::languages::{self, LanguageCode};
use crate::core::letters::{count_letters, LetterGrouping};
use crate::core::models::TranslationRequest;

const MISSING_ARGS_MESSAGE: &str = concat!(
    "Error: Please provide both a sentence and a language code for translation, ",
    "or use --list-languages to list all supported languages."
);

/// Process outcome, mapped to the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit status 0
    Success,
    /// Exit status 1
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::from(1),
        }
    }
}

/// What an invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the supported codes
    ListLanguages,
    /// Count, translate and count again
    Translate {
        /// Sentence as given
        sentence: String,
        /// Target code, not yet validated
        code_of_lang: String,
    },
    /// Print usage and fail
    ShowHelpAndFail,
}

impl Action {
    /// Pick the action from parsed arguments. Empty strings count as missing.
    pub fn select(args: &CliArgs) -> Self {
        if args.list_languages {
            return Action::ListLanguages;
        }

        match (non_empty(&args.sentence), non_empty(&args.code_of_lang)) {
            (Some(sentence), Some(code)) => Action::Translate {
                sentence: sentence.to_string(),
                code_of_lang: code.to_string(),
            },
            _ => Action::ShowHelpAndFail,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Run one invocation, writing everything user-facing to `out`.
///
/// `make_translator` is only called once the target code has been validated.
/// Backend failures are returned as errors with a "translation unavailable" context.
pub async fn run<T, F, W>(args: &CliArgs, make_translator: F, out: &mut W) -> anyhow::Result<Outcome>
where
    T: Translate,
    F: FnOnce() -> ClientResult<T>,
    W: Write,
{
    let action = Action::select(args);
    debug!("Selected action: {:?}", action);

    match action {
        Action::ListLanguages => handle_list_languages(out),
        Action::ShowHelpAndFail => handle_help(out),
        Action::Translate {
            sentence,
            code_of_lang,
        } => {
            let code = match LanguageCode::parse(&code_of_lang) {
                Ok(code) => code,
                Err(e) => {
                    writeln!(out, "Error: {}", e)?;
                    return Ok(Outcome::Failure);
                }
            };

            let translator = make_translator()?;
            handle_translate(&translator, &sentence, code, args.format, out).await?;
            Ok(Outcome::Success)
        }
    }
}

/// Handle `--list-languages`
pub fn handle_list_languages<W: Write>(out: &mut W) -> anyhow::Result<Outcome> {
    writeln!(out, "Supported language codes:")?;
    for code in languages::sorted_codes() {
        writeln!(out, "{}", code)?;
    }
    Ok(Outcome::Success)
}

/// Print usage followed by the missing-arguments error
pub fn handle_help<W: Write>(out: &mut W) -> anyhow::Result<Outcome> {
    let help = CliArgs::command().render_help();
    write!(out, "{}", help)?;
    writeln!(out, "\n{}", MISSING_ARGS_MESSAGE)?;
    Ok(Outcome::Failure)
}

/// Print groupings for the sentence and for its translation
pub async fn handle_translate<T: Translate, W: Write>(
    translator: &T,
    sentence: &str,
    code: LanguageCode,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    info!("Translating into {}", code);

    writeln!(out, "Entered sentence: {}", sentence)?;
    write_grouping(out, &count_letters(sentence), format)?;
    writeln!(out)?;
    out.flush()?;

    let request = TranslationRequest::new(sentence, code);
    let result = translator
        .translate(&request)
        .await
        .context("translation unavailable")?;

    writeln!(out, "Translated sentence: {}", result.translation)?;
    write_grouping(out, &count_letters(&result.translation), format)?;

    Ok(())
}

fn write_grouping<W: Write>(
    out: &mut W,
    grouping: &LetterGrouping,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", grouping)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(grouping)?)?,
    }
    Ok(())
}
