// src/extract/plain_text.rs
//! Length-bounded plain-text summary of a block sequence.

use crate::constants::SUMMARY_ELLIPSIS;
use crate::model::Block;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Flattens the top-level blocks' text into a summary of at most
/// `max_length` characters plus the ellipsis marker.
///
/// Children are not visited. Accumulation stops as soon as the space-joined
/// text reaches the budget; the result is whitespace-collapsed, trimmed and
/// hard-truncated if still too long.
pub fn extract_plain_text(blocks: &[Block], max_length: usize) -> String {
    let mut texts: Vec<String> = Vec::new();
    let mut joined_chars = 0usize;

    for block in blocks {
        let text = block.plain_text();
        if text.is_empty() {
            continue;
        }
        if !texts.is_empty() {
            joined_chars += 1;
        }
        joined_chars += text.chars().count();
        texts.push(text);
        if joined_chars >= max_length {
            break;
        }
    }

    let joined = texts.join(" ");
    let collapsed = WHITESPACE_RUN.replace_all(&joined, " ");
    let summary = collapsed.trim();

    if summary.chars().count() > max_length {
        let truncated: String = summary.chars().take(max_length).collect();
        format!("{}{}", truncated, SUMMARY_ELLIPSIS)
    } else {
        summary.to_string()
    }
}
