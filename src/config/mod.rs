//! Configuration module for asr-summary
//!
//! Handles loading settings from TOML files and resolving the API client configuration.

mod client;
mod settings;

pub use client::ClientConfig;
pub use settings::{
    Settings, API_KEY_ENV, DEFAULT_ASR_MODEL, DEFAULT_CHAT_URL, DEFAULT_SUMMARY_MODEL,
    DEFAULT_TRANSCRIPTION_URL,
};
