//! asr-summary - Transcribe audio with a remote ASR service and summarize the transcript
//!
//! The pipeline chains two SiliconFlow endpoints: an audio transcription API and
//! a chat-completion API that condenses the transcript.

pub mod cli;
pub mod config;
mod http;
pub mod llm;
pub mod pipeline;
pub mod report;
pub mod text;
pub mod transcription;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for asr-summary
#[derive(Error, Debug)]
pub enum AsrSummaryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{endpoint} request failed with HTTP {status}: {body}")]
    Transport {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AsrSummaryError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "asr-summary";
