use async_trait::async_trait;
use std::path::Path;

use crate::config::ClientConfig;
use crate::transcription::siliconflow::SiliconFlowTranscriber;
use crate::Result;

#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe one audio file to plain text.
    async fn transcribe(&self, audio_path: &Path) -> Result<String>;
}

/// Build the transcriber from the resolved client configuration.
pub fn build_transcriber(config: &ClientConfig) -> Result<Box<dyn Transcriber>> {
    Ok(Box::new(SiliconFlowTranscriber::new(config)?))
}
