//! Pipeline module for asr-summary
//!
//! Runs transcription and summarization for single files and whole folders.

mod models;
mod orchestrator;

pub use models::{is_supported_audio, ProcessResult, SUPPORTED_EXTENSIONS};
pub use orchestrator::{collect_audio_files, Pipeline};
