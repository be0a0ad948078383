//! Report rendering for processed files
//!
//! The text report is one block per file:
//!
//! ```text
//! ==================================================
//! 文件: meeting.mp3
//! ==================================================
//! 【转录内容】
//! ...full transcription...
//!
//! 【总结】
//! ...full summary...
//! ```
//!
//! Failed files carry an extra `【错误】` section.

use clap::ValueEnum;

use crate::pipeline::ProcessResult;

const SEPARATOR_WIDTH: usize = 50;
const FILE_PREFIX: &str = "文件: ";
const TRANSCRIPTION_HEADER: &str = "【转录内容】";
const SUMMARY_HEADER: &str = "【总结】";
const ERROR_HEADER: &str = "【错误】";

/// Output format for the report file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Plain text blocks
    #[default]
    Txt,
    /// Pretty-printed JSON array
    Json,
}

/// One block recovered from a text report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportEntry {
    pub file_name: String,
    pub transcription: String,
    pub summary: String,
    pub error: Option<String>,
}

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Render results as the plain-text report
pub fn render_text(results: &[ProcessResult]) -> String {
    let separator = separator();
    let mut output = String::new();

    for result in results {
        output.push('\n');
        output.push_str(&format!("{}\n", separator));
        output.push_str(&format!("{}{}\n", FILE_PREFIX, result.file_name()));
        output.push_str(&format!("{}\n", separator));
        output.push_str(&format!(
            "{}\n{}\n\n",
            TRANSCRIPTION_HEADER, result.transcription
        ));
        output.push_str(&format!("{}\n{}\n\n", SUMMARY_HEADER, result.summary));
        if let Some(error) = &result.error {
            output.push_str(&format!("{}\n{}\n\n", ERROR_HEADER, error));
        }
    }

    output
}

/// Render results as a JSON array
pub fn render_json(results: &[ProcessResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Parse a text report back into its blocks.
///
/// A block starts with a separator line, a `文件: ` line and another separator.
/// Within a block the first `【转录内容】` line opens the transcription and the
/// last `【总结】` line opens the summary. A trailing `【错误】` section is read
/// as the error only when the transcription and summary before it are empty,
/// which is how failed files are rendered. Section bodies are trimmed, so
/// surrounding blank lines are not preserved.
///
/// The format stays ambiguous in two cases: a summary that itself contains a
/// `【总结】` line loses the text before that line to the transcription, and a
/// text containing the three block-start lines is split into a new block.
pub fn parse_text(report: &str) -> Vec<ReportEntry> {
    split_blocks(report)
        .into_iter()
        .map(|(file_name, body)| parse_block(file_name, &body))
        .collect()
}

/// Split a report into `(file name, body lines)` pairs; text before the first block is dropped.
fn split_blocks(report: &str) -> Vec<(String, Vec<&str>)> {
    let separator = separator();
    let lines: Vec<&str> = report.lines().collect();

    let mut blocks: Vec<(String, Vec<&str>)> = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let starts_block = lines[i] == separator
            && i + 2 < lines.len()
            && lines[i + 1].starts_with(FILE_PREFIX)
            && lines[i + 2] == separator;

        if starts_block {
            let file_name = lines[i + 1][FILE_PREFIX.len()..].to_string();
            blocks.push((file_name, Vec::new()));
            i += 3;
            continue;
        }

        if let Some((_, body)) = blocks.last_mut() {
            body.push(lines[i]);
        }
        i += 1;
    }

    blocks
}

fn parse_block(file_name: String, lines: &[&str]) -> ReportEntry {
    let mut entry = ReportEntry {
        file_name,
        ..ReportEntry::default()
    };

    let Some(transcription_at) = lines.iter().position(|l| *l == TRANSCRIPTION_HEADER) else {
        return entry;
    };
    let rest = &lines[transcription_at + 1..];

    if let Some(error_at) = rest.iter().rposition(|l| *l == ERROR_HEADER) {
        if let Some(summary_at) = rest[..error_at].iter().rposition(|l| *l == SUMMARY_HEADER) {
            let transcription = section_text(&rest[..summary_at]);
            let summary = section_text(&rest[summary_at + 1..error_at]);
            if transcription.is_empty() && summary.is_empty() {
                entry.error = Some(section_text(&rest[error_at + 1..]));
                return entry;
            }
        }
    }

    match rest.iter().rposition(|l| *l == SUMMARY_HEADER) {
        Some(summary_at) => {
            entry.transcription = section_text(&rest[..summary_at]);
            entry.summary = section_text(&rest[summary_at + 1..]);
        }
        None => entry.transcription = section_text(rest),
    }

    entry
}

fn section_text(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}
