//! Main entry point for the Letter Lingo CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use letter_lingo::cli::{args::CliArgs, commands};
use letter_lingo::{GoogleTranslator, TranslatorConfig};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    dotenv().ok();

    let args = CliArgs::parse();

    // Initialize logging; stdout is reserved for program output
    let log_level = if args.verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let make_translator = || {
        let mut config = TranslatorConfig::from_env();
        if let Some(endpoint) = &args.endpoint {
            config = config.with_endpoint(endpoint.as_str());
        }
        GoogleTranslator::new(config)
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = commands::run(&args, make_translator, &mut out).await?;

    Ok(outcome.into())
}
