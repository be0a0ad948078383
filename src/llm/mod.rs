//! LLM module for asr-summary
//!
//! Turns transcripts into summaries using the SiliconFlow chat-completion API.

mod client;
mod prompts;
mod siliconflow;

pub use client::{build_provider, LlmProvider, SummaryRequest};
pub use prompts::{build_user_message, SummaryType, SYSTEM_PROMPT};
pub use siliconflow::SiliconFlowChatClient;
