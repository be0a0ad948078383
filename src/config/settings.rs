//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::llm::SummaryType;

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "SILICONFLOW_API_KEY";

pub const DEFAULT_ASR_MODEL: &str = "FunAudioLLM/SenseVoiceSmall";
pub const DEFAULT_SUMMARY_MODEL: &str = "Pro/moonshotai/Kimi-K2.5";
pub const DEFAULT_TRANSCRIPTION_URL: &str = "https://api.siliconflow.cn/v1/audio/transcriptions";
pub const DEFAULT_CHAT_URL: &str = "https://api.siliconflow.cn/v1/chat/completions";

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// SiliconFlow API settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Console and report output settings
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// SiliconFlow API key (falls back to SILICONFLOW_API_KEY)
    #[serde(default)]
    pub api_key: String,

    /// Speech recognition model
    #[serde(default = "default_asr_model")]
    pub asr_model: String,

    /// Chat model used for summaries
    #[serde(default = "default_summary_model")]
    pub summary_model: String,

    /// Audio transcription endpoint
    #[serde(default = "default_transcription_url")]
    pub transcription_url: String,

    /// Chat completion endpoint
    #[serde(default = "default_chat_url")]
    pub chat_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Default summary type (general, keywords, points, short)
    #[serde(default = "default_summary_type")]
    pub summary_type: String,

    /// Number of transcript characters shown per file in batch mode
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

// Default value functions

fn default_asr_model() -> String {
    DEFAULT_ASR_MODEL.to_string()
}

fn default_summary_model() -> String {
    DEFAULT_SUMMARY_MODEL.to_string()
}

fn default_transcription_url() -> String {
    DEFAULT_TRANSCRIPTION_URL.to_string()
}

fn default_chat_url() -> String {
    DEFAULT_CHAT_URL.to_string()
}

fn default_summary_type() -> String {
    SummaryType::General.as_str().to_string()
}

fn default_preview_chars() -> usize {
    500
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            asr_model: default_asr_model(),
            summary_model: default_summary_model(),
            transcription_url: default_transcription_url(),
            chat_url: default_chat_url(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            summary_type: default_summary_type(),
            preview_chars: default_preview_chars(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load settings from a specific file, falling back to defaults when it is absent
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.api.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                if !key.trim().is_empty() {
                    self.api.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "asr-summary", "asr-summary")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default summary type from the settings file.
    ///
    /// Unknown names fall back to `general` without an error.
    pub fn summary_type(&self) -> SummaryType {
        SummaryType::from_name_lossy(&self.output.summary_type)
    }

    /// Copy of the settings safe to print: the API key is masked.
    pub fn redacted(&self) -> Self {
        let mut settings = self.clone();
        settings.api.api_key = mask_secret(&settings.api.api_key);
        settings
    }
}

fn mask_secret(secret: &str) -> String {
    let secret = secret.trim();
    if secret.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        "****".to_string()
    } else {
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("****{}", visible)
    }
}
