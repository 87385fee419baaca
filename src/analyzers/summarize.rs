//! Extractive text summarizer.
//!
//! Splits the input on sentence-terminal punctuation (ASCII and full-width
//! variants) and greedily assembles first + longest-middle + last sentence
//! while the result fits within `max_length` characters.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::{AppError, AppResult};

static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.。!！?？]+").expect("valid sentence terminator regex"));

/// Joiner inserted between selected sentences.
const ELLIPSIS_JOIN: &str = "... ";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary: String,
    /// `len(summary) / len(text) * 100`, one decimal, e.g. "42.7%".
    pub compression_ratio: String,
}

/// Produce a summary of at most `max_length` characters.
pub fn summarize(text: &str, max_length: usize) -> AppResult<SummaryResult> {
    if text.is_empty() {
        return Err(AppError::invalid("Missing text parameter"));
    }

    let sentences: Vec<&str> = SENTENCE_TERMINATORS
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect();

    let mut summary = match sentences.len() {
        0 => truncate_chars(text, max_length).to_string(),
        1 => sentences[0].trim().to_string(),
        _ => {
            let mut summary = sentences[0].trim().to_string();

            // Pull in the longest middle sentence while there is room; it
            // usually carries the detail.
            if (char_len(&summary) as f64) < max_length as f64 * 0.6 && sentences.len() > 2 {
                if let Some(longest) = longest_sentence(&sentences[1..sentences.len() - 1]) {
                    let candidate = longest.trim();
                    if char_len(&summary) + char_len(ELLIPSIS_JOIN) + char_len(candidate)
                        <= max_length
                    {
                        summary.push_str(ELLIPSIS_JOIN);
                        summary.push_str(candidate);
                    }
                }
            }

            // The last sentence is usually the conclusion.
            let last = sentences[sentences.len() - 1].trim();
            if sentences.len() > 2
                && char_len(&summary) + char_len(ELLIPSIS_JOIN) + char_len(last) <= max_length
            {
                summary.push_str(ELLIPSIS_JOIN);
                summary.push_str(last);
            }

            summary
        }
    };

    if char_len(&summary) > max_length {
        let cut = truncate_chars(&summary, max_length.saturating_sub(3));
        summary = format!("{cut}...");
    }

    Ok(SummaryResult {
        compression_ratio: compression_ratio(char_len(&summary), char_len(text)),
        summary,
    })
}

fn compression_ratio(summary_len: usize, text_len: usize) -> String {
    if text_len == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", summary_len as f64 / text_len as f64 * 100.0)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn truncate_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// First sentence with the strictly greatest trimmed length.
fn longest_sentence<'a>(sentences: &[&'a str]) -> Option<&'a str> {
    let mut longest: Option<&str> = None;
    for sentence in sentences {
        if longest.is_none_or(|current| char_len(sentence.trim()) > char_len(current.trim())) {
            longest = Some(sentence);
        }
    }
    longest
}
