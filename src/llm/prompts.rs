//! Summary instruction templates

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// System message that sets up the assistant's role.
pub const SYSTEM_PROMPT: &str = "你是一个专业的文本总结助手，擅长提取关键信息。";

/// How a transcript should be condensed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryType {
    /// Detailed summary keeping the key information
    #[default]
    General,
    /// Keywords and key phrases
    Keywords,
    /// Bullet point list
    Points,
    /// One-sentence summary
    Short,
}

impl SummaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Keywords => "keywords",
            Self::Points => "points",
            Self::Short => "short",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Some(Self::General),
            "keywords" => Some(Self::Keywords),
            "points" => Some(Self::Points),
            "short" => Some(Self::Short),
            _ => None,
        }
    }

    /// Look up a summary type by name, using `General` for anything unrecognized.
    pub fn from_name_lossy(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            tracing::debug!("Unknown summary type '{}', using general", s);
            Self::General
        })
    }

    /// Instruction placed in front of the transcript.
    pub fn template(&self) -> &'static str {
        match self {
            Self::General => "请对以下内容进行详细总结，保留关键信息：",
            Self::Keywords => "请提取以下内容的关键词和关键短语：",
            Self::Points => "请将以下内容整理成要点列表：",
            Self::Short => "请用一句话简要概括以下内容：",
        }
    }
}

impl std::fmt::Display for SummaryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the user message: the instruction template, a blank line, then the text.
pub fn build_user_message(summary_type: SummaryType, text: &str) -> String {
    format!("{}\n\n{}", summary_type.template(), text)
}
