// src/extract/faq.rs
//! Question/answer extraction from a marked FAQ section.
//!
//! The scan looks for the first heading naming a FAQ section, then treats
//! headings one level deeper as questions and every other non-empty block
//! as answer text. A question with no answer text is dropped.

use crate::constants::{MAX_SOURCE_HEADING_LEVEL, SCHEMA_CONTEXT};
use crate::model::Block;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

static SECTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(자주\s*묻는\s*질문|FAQ|Q\s*&\s*A)").expect("FAQ marker pattern is valid")
});

static QUESTION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Q\d+[[:punct:]\s]+").expect("question prefix pattern is valid"));

/// One extracted question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// A question heading still collecting answer fragments.
#[derive(Debug)]
struct PendingItem {
    question: String,
    fragments: Vec<String>,
}

impl PendingItem {
    fn new(heading_text: &str) -> Self {
        let trimmed = heading_text.trim();
        let question = QUESTION_PREFIX.replace(trimmed, "").trim().to_string();
        Self {
            question,
            fragments: Vec::new(),
        }
    }

    /// Emits the item only if it gathered at least one answer fragment.
    fn flush_into(self, items: &mut Vec<FaqItem>) {
        if self.fragments.is_empty() {
            log::debug!("Dropping unanswered question '{}'", self.question);
            return;
        }
        items.push(FaqItem {
            question: self.question,
            answer: self.fragments.join(" ").trim().to_string(),
        });
    }
}

#[derive(Debug)]
enum ScanState {
    BeforeMarker,
    InSection {
        marker_level: u8,
        question_level: u8,
        pending: Option<PendingItem>,
    },
}

/// Extracts question/answer pairs from the top-level block sequence.
///
/// Returns an empty list when no FAQ section heading exists.
pub fn extract_faq_items(blocks: &[Block]) -> Vec<FaqItem> {
    let mut items = Vec::new();
    let mut state = ScanState::BeforeMarker;

    for block in blocks {
        let level = block.heading_level();
        state = match state {
            ScanState::BeforeMarker => match level {
                Some(marker_level) if SECTION_MARKER.is_match(&block.plain_text()) => {
                    ScanState::InSection {
                        marker_level,
                        question_level: (marker_level + 1).min(MAX_SOURCE_HEADING_LEVEL),
                        pending: None,
                    }
                }
                _ => ScanState::BeforeMarker,
            },
            ScanState::InSection {
                marker_level,
                question_level,
                pending,
            } => {
                if level.is_some_and(|l| l <= marker_level) {
                    if let Some(item) = pending {
                        item.flush_into(&mut items);
                    }
                    return items;
                }

                let pending = if level == Some(question_level) {
                    if let Some(item) = pending {
                        item.flush_into(&mut items);
                    }
                    Some(PendingItem::new(&block.plain_text()))
                } else {
                    let mut pending = pending;
                    let text = block.plain_text();
                    let text = text.trim();
                    if let (Some(item), false) = (pending.as_mut(), text.is_empty()) {
                        item.fragments.push(text.to_string());
                    }
                    pending
                };

                ScanState::InSection {
                    marker_level,
                    question_level,
                    pending,
                }
            }
        };
    }

    if let ScanState::InSection {
        pending: Some(item),
        ..
    } = state
    {
        item.flush_into(&mut items);
    }

    items
}

/// Builds the FAQPage structured-data object, `None` when there is nothing
/// to describe.
pub fn faq_schema(items: &[FaqItem]) -> Option<Value> {
    if items.is_empty() {
        return None;
    }
    let entities: Vec<Value> = items
        .iter()
        .map(|item| {
            json!({
                "@type": "Question",
                "name": item.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": item.answer,
                },
            })
        })
        .collect();
    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": entities,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::types::RichTextItem;
    use pretty_assertions::assert_eq;

    fn content(text: &str) -> TextBlockContent {
        TextBlockContent {
            rich_text: vec![RichTextItem::plain_text(text)],
            ..Default::default()
        }
    }

    fn h2(text: &str) -> Block {
        Block::Heading2(Heading2Block {
            content: content(text),
            ..Default::default()
        })
    }

    fn h3(text: &str) -> Block {
        Block::Heading3(Heading3Block {
            content: content(text),
            ..Default::default()
        })
    }

    fn p(text: &str) -> Block {
        Block::Paragraph(ParagraphBlock {
            content: content(text),
            ..Default::default()
        })
    }

    fn item(question: &str, answer: &str) -> FaqItem {
        FaqItem {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn test_unanswered_question_is_dropped() {
        let blocks = vec![h2("FAQ"), h3("Q1: Why?"), h3("Q2: How?"), p("Because.")];
        assert_eq!(extract_faq_items(&blocks), vec![item("How?", "Because.")]);
    }

    #[test]
    fn test_any_punctuation_after_question_number_is_stripped() {
        let blocks = vec![
            h2("FAQ"),
            h3("Q1? Why"),
            p("a"),
            h3("Q2] How"),
            p("b"),
            h3("q3 - When"),
            p("c"),
            h3("Quick question"),
            p("d"),
        ];
        assert_eq!(
            extract_faq_items(&blocks),
            vec![
                item("Why", "a"),
                item("How", "b"),
                item("When", "c"),
                item("Quick question", "d"),
            ]
        );
    }

    #[test]
    fn test_answers_are_space_joined() {
        let blocks = vec![
            h2("자주 묻는 질문"),
            h3("Q1. 배송은 얼마나 걸리나요?"),
            p("보통 2일"),
            p("  주말 제외  "),
            h3("환불 되나요?"),
            p("네."),
        ];
        assert_eq!(
            extract_faq_items(&blocks),
            vec![
                item("배송은 얼마나 걸리나요?", "보통 2일 주말 제외"),
                item("환불 되나요?", "네."),
            ]
        );
    }

    #[test]
    fn test_shallower_heading_ends_the_section() {
        let blocks = vec![
            h2("Q & A"),
            h3("What?"),
            p("This."),
            h2("Next section"),
            h3("Not a question"),
            p("ignored"),
        ];
        assert_eq!(extract_faq_items(&blocks), vec![item("What?", "This.")]);
    }

    #[test]
    fn test_text_before_first_question_is_ignored() {
        let blocks = vec![h2("faq"), p("intro"), h3("Q?"), p("A.")];
        assert_eq!(extract_faq_items(&blocks), vec![item("Q?", "A.")]);
    }

    #[test]
    fn test_marker_at_deepest_level_yields_nothing() {
        let blocks = vec![h3("FAQ"), h3("Q1: Why?"), p("Because.")];
        assert!(extract_faq_items(&blocks).is_empty());
    }

    #[test]
    fn test_no_marker_and_empty_input() {
        assert!(extract_faq_items(&[h3("Why?"), p("Because.")]).is_empty());
        assert!(extract_faq_items(&[]).is_empty());
    }

    #[test]
    fn test_schema_shape() {
        let schema = faq_schema(&[item("Why?", "Because.")]);
        assert_eq!(
            schema,
            Some(json!({
                "@context": "https://schema.org",
                "@type": "FAQPage",
                "mainEntity": [{
                    "@type": "Question",
                    "name": "Why?",
                    "acceptedAnswer": { "@type": "Answer", "text": "Because." }
                }]
            }))
        );
        assert_eq!(faq_schema(&[]), None);
    }
}
