//! CLI command implementations

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;
use std::path::Path;

use crate::cli::args::{Cli, ConfigCommand, RunArgs};
use crate::config::{ClientConfig, Settings};
use crate::pipeline::{Pipeline, ProcessResult};
use crate::report::{self, ReportFormat};
use crate::text::truncate_chars;

/// Transcribe and summarize a file, or every audio file in a folder with `--batch`
pub async fn run(mut settings: Settings, args: RunArgs) -> Result<()> {
    if let Some(api_key) = args.api_key {
        settings.api.api_key = api_key;
    }
    if let Some(model) = args.model {
        settings.api.asr_model = model;
    }

    let audio = args.audio.context("No audio path given")?;
    let summary_type = args
        .summary_type
        .unwrap_or_else(|| settings.summary_type());

    let config = ClientConfig::from_settings(&settings)?;
    let pipeline = Pipeline::from_config(&config)?;

    let results = if args.batch {
        let results = pipeline.process_batch(&audio, summary_type).await?;
        print_batch(&results, settings.output.preview_chars);
        results
    } else {
        if audio.is_dir() {
            anyhow::bail!(
                "{} is a directory. Use --batch to process every audio file in it.",
                audio.display()
            );
        }
        let result = pipeline.process_audio(&audio, summary_type).await?;
        print_single(&result);
        vec![result]
    };

    if let Some(path) = args.output {
        write_report(&path, &results, args.format)?;
        println!();
        println!("Results saved to: {}", path.display());
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&settings.redacted())?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Print completion script for the requested shell to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let command_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, command_name, &mut io::stdout());
}

fn print_single(result: &ProcessResult) {
    let separator = report::separator();

    println!();
    println!("{}", separator);
    println!("【转录内容】");
    println!("{}", result.transcription);
    println!();
    println!("{}", separator);
    println!("【总结】");
    println!("{}", result.summary);
}

fn print_batch(results: &[ProcessResult], preview_chars: usize) {
    let separator = report::separator();

    for result in results {
        println!();
        println!("{}", separator);
        println!("文件: {}", result.file_name());
        println!("{}", separator);

        if let Some(error) = &result.error {
            println!("【错误】");
            println!("{}", error);
            continue;
        }

        println!("【转录内容】");
        println!("{}", truncate_chars(&result.transcription, preview_chars));
        println!();
        println!("【总结】");
        println!("{}", result.summary);
    }

    let failed = results.iter().filter(|r| !r.is_success()).count();
    println!();
    println!(
        "Processed {} files ({} succeeded, {} failed)",
        results.len(),
        results.len() - failed,
        failed
    );
}

fn write_report(path: &Path, results: &[ProcessResult], format: ReportFormat) -> Result<()> {
    let content = match format {
        ReportFormat::Txt => report::render_text(results),
        ReportFormat::Json => {
            report::render_json(results).context("Failed to serialize results")?
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(())
}
