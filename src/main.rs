//! asr-summary - Transcribe audio files and summarize the transcript
//!
//! Entry point for the asr-summary CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use asr_summary::cli::{Cli, Commands};
use asr_summary::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            asr_summary::cli::commands::print_completions(shell);
        }
        Some(Commands::Config(config_cmd)) => {
            let settings = Settings::load()?;
            asr_summary::cli::commands::config_command(&settings, config_cmd)?;
        }
        None => {
            let settings = Settings::load()?;
            asr_summary::cli::commands::run(settings, cli.run).await?;
        }
    }

    Ok(())
}
