//! Transcription module for asr-summary
//!
//! Uploads audio files to a remote speech recognition service.

mod client;
mod siliconflow;

pub use client::{build_transcriber, Transcriber};
pub use siliconflow::SiliconFlowTranscriber;
