//! Speech-to-text via the SiliconFlow audio transcription API

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;

use crate::config::ClientConfig;
use crate::http;
use crate::transcription::client::Transcriber;
use crate::{AsrSummaryError, Result};

const ENDPOINT: &str = "transcription";

/// Multipart upload client for the transcription endpoint
pub struct SiliconFlowTranscriber {
    http: Client,
    api_key: String,
    model: String,
    url: String,
}

impl SiliconFlowTranscriber {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_client(config, http::build_client()?))
    }

    /// Use a caller-provided HTTP client
    pub fn with_client(config: &ClientConfig, http: Client) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            model: config.asr_model.clone(),
            url: config.transcription_url.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_form(&self, file_name: String, bytes: Vec<u8>) -> Result<Form> {
        let mime = mime_for(&file_name);
        let file_part = Part::bytes(bytes).file_name(file_name).mime_str(mime)?;

        Ok(Form::new()
            .part("file", file_part)
            .text("model", self.model.clone()))
    }
}

#[async_trait]
impl Transcriber for SiliconFlowTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        if !audio_path.is_file() {
            return Err(AsrSummaryError::NotFound(audio_path.to_path_buf()));
        }

        let bytes = tokio::fs::read(audio_path).await?;
        let file_name = audio_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        tracing::debug!(
            "Uploading {} ({} bytes) with model {}",
            file_name,
            bytes.len(),
            self.model
        );

        let form = self.build_form(file_name, bytes)?;
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let response = http::ensure_success(response, ENDPOINT).await?;
        let payload: TranscriptionResponse = http::read_json(response, ENDPOINT).await?;

        Ok(payload.text)
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

/// Content type for the uploaded file, guessed from its extension.
fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/mp4",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("aac") => "audio/aac",
        Some("wma") => "audio/x-ms-wma",
        _ => "application/octet-stream",
    }
}
