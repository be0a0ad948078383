//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::llm::SummaryType;
use crate::report::ReportFormat;

/// asr-summary - Transcribe audio files and summarize the transcript
#[derive(Parser, Debug)]
#[command(name = "asr-summary")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for transcribing and summarizing audio
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Audio file, or a folder of audio files with --batch
    #[arg(required = true)]
    pub audio: Option<PathBuf>,

    /// SiliconFlow API key (defaults to config or SILICONFLOW_API_KEY)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Kind of summary to generate
    #[arg(long, value_enum)]
    pub summary_type: Option<SummaryType>,

    /// Process every audio file in the given folder
    #[arg(long)]
    pub batch: bool,

    /// Write the results to a report file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report file format
    #[arg(long, value_enum, default_value_t = ReportFormat::Txt)]
    pub format: ReportFormat,

    /// Speech recognition model override
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration (API key masked)
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
