//! Transcribe-then-summarize orchestration

use std::path::{Path, PathBuf};

use crate::config::ClientConfig;
use crate::llm::{build_provider, LlmProvider, SummaryRequest, SummaryType};
use crate::pipeline::models::{is_supported_audio, ProcessResult};
use crate::transcription::{build_transcriber, Transcriber};
use crate::{AsrSummaryError, Result};

/// Chains a transcriber and a summarizer, one file at a time
pub struct Pipeline {
    transcriber: Box<dyn Transcriber>,
    summarizer: Box<dyn LlmProvider>,
}

impl Pipeline {
    pub fn new(transcriber: Box<dyn Transcriber>, summarizer: Box<dyn LlmProvider>) -> Self {
        Self {
            transcriber,
            summarizer,
        }
    }

    /// Create a pipeline backed by the SiliconFlow clients
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(build_transcriber(config)?, build_provider(config)?))
    }

    /// Transcribe one file and summarize the text.
    ///
    /// The summarizer is skipped when the transcription is empty. Errors propagate.
    pub async fn process_audio(
        &self,
        audio_path: &Path,
        summary_type: SummaryType,
    ) -> Result<ProcessResult> {
        tracing::info!("Transcribing: {}", display_name(audio_path));
        let transcription = self.transcriber.transcribe(audio_path).await?;
        tracing::info!(
            "Transcription complete: {} chars",
            transcription.chars().count()
        );

        let summary = if transcription.is_empty() {
            tracing::info!("Empty transcription, skipping summary");
            String::new()
        } else {
            tracing::info!("Generating {} summary", summary_type);
            let summary = self
                .summarizer
                .summarize(SummaryRequest {
                    text: &transcription,
                    summary_type,
                })
                .await?;
            tracing::info!("Summary complete");
            summary
        };

        Ok(ProcessResult::completed(
            audio_path.to_path_buf(),
            transcription,
            summary,
        ))
    }

    /// Process every supported audio file in a folder.
    ///
    /// A failing file is recorded in its result and the batch moves on; only
    /// enumerating the folder itself can abort the run.
    pub async fn process_batch(
        &self,
        folder: &Path,
        summary_type: SummaryType,
    ) -> Result<Vec<ProcessResult>> {
        let audio_files = collect_audio_files(folder)?;
        let total = audio_files.len();
        tracing::info!("Found {} audio files in {}", total, folder.display());

        let mut results = Vec::with_capacity(total);

        for (i, audio_file) in audio_files.into_iter().enumerate() {
            tracing::info!("[{}/{}] Processing: {}", i + 1, total, display_name(&audio_file));

            match self.process_audio(&audio_file, summary_type).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::warn!("Failed to process {}: {}", audio_file.display(), e);
                    results.push(ProcessResult::failed(audio_file, e.to_string()));
                }
            }
        }

        Ok(results)
    }
}

/// List supported audio files directly inside `folder`, sorted by path.
pub fn collect_audio_files(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(AsrSummaryError::NotFound(folder.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && is_supported_audio(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
