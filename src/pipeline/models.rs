//! Result records produced by the pipeline

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Audio extensions picked up in batch mode (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "ogg", "flac", "aac", "wma"];

/// Outcome of processing one audio file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Path to the source audio file
    pub audio_file: PathBuf,

    /// Full transcription text
    pub transcription: String,

    /// Summary of the transcription (empty when nothing was transcribed)
    pub summary: String,

    /// Failure message, only set in batch mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessResult {
    pub fn completed(audio_file: PathBuf, transcription: String, summary: String) -> Self {
        Self {
            audio_file,
            transcription,
            summary,
            error: None,
        }
    }

    pub fn failed(audio_file: PathBuf, error: String) -> Self {
        Self {
            audio_file,
            transcription: String::new(),
            summary: String::new(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// File name of the source audio, falling back to the full path
    pub fn file_name(&self) -> String {
        self.audio_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.audio_file.display().to_string())
    }
}

/// Whether the path has one of the supported audio extensions
pub fn is_supported_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}
