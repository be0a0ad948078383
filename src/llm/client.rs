use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::llm::prompts::SummaryType;
use crate::llm::siliconflow::SiliconFlowChatClient;
use crate::Result;

/// Summary generation request payload.
pub struct SummaryRequest<'a> {
    pub text: &'a str,
    pub summary_type: SummaryType,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String>;
}

/// Build the summarization provider from the resolved client configuration.
pub fn build_provider(config: &ClientConfig) -> Result<Box<dyn LlmProvider>> {
    Ok(Box::new(SiliconFlowChatClient::new(config)?))
}
