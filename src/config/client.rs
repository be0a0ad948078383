//! Resolved client configuration shared by both API clients

use crate::config::Settings;
use crate::{AsrSummaryError, Result};

/// Credentials, models and endpoints for one pipeline run.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub asr_model: String,
    pub summary_model: String,
    pub transcription_url: String,
    pub chat_url: String,
}

impl ClientConfig {
    /// Build the client configuration from runtime settings.
    ///
    /// Fails when no API key is available, before any request is made.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.api.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(AsrSummaryError::Config(format!(
                "SiliconFlow API key is missing. Pass --api-key, set api.api_key in config or {}.",
                crate::config::API_KEY_ENV
            )));
        }

        Ok(Self {
            api_key,
            asr_model: non_empty_or(&settings.api.asr_model, crate::config::DEFAULT_ASR_MODEL),
            summary_model: non_empty_or(
                &settings.api.summary_model,
                crate::config::DEFAULT_SUMMARY_MODEL,
            ),
            transcription_url: non_empty_or(
                &settings.api.transcription_url,
                crate::config::DEFAULT_TRANSCRIPTION_URL,
            ),
            chat_url: non_empty_or(&settings.api.chat_url, crate::config::DEFAULT_CHAT_URL),
        })
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("asr_model", &self.asr_model)
            .field("summary_model", &self.summary_model)
            .field("transcription_url", &self.transcription_url)
            .field("chat_url", &self.chat_url)
            .finish()
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
