// src/formatting/rich_text/annotations.rs
//! Annotation processing for rich text.
//!
//! Marks are applied innermost-first in a fixed order: code, bold, italic,
//! strikethrough, underline, color, link.

use super::escape_html;
use super::types::{color_style, StyledRun, TextStyle};
use crate::formatting::styles::STYLES;
use crate::types::RichTextItem;

/// Converts a source item's annotations and link into a text style.
pub fn annotations_to_style(item: &RichTextItem) -> TextStyle {
    let annotations = &item.annotations;
    TextStyle {
        bold: annotations.bold,
        italic: annotations.italic,
        strikethrough: annotations.strikethrough,
        underline: annotations.underline,
        code: annotations.code,
        color: annotations.color,
        link: item.link_target().map(str::to_string),
    }
}

/// Renderer for text styles to HTML.
pub struct HtmlStyleRenderer;

impl HtmlStyleRenderer {
    /// Wraps an already escaped run in its marks.
    pub fn apply_styles(run: &StyledRun) -> String {
        let style = &run.style;
        let mut result = run.escaped.clone();

        if style.code {
            result = format!("<code {}>{}</code>", STYLES.inline_code, result);
        }

        if style.bold {
            result = format!("<strong>{}</strong>", result);
        }

        if style.italic {
            result = format!("<em>{}</em>", result);
        }

        if style.strikethrough {
            result = format!("<s>{}</s>", result);
        }

        if style.underline {
            result = format!("<u>{}</u>", result);
        }

        if let Some(css) = color_style(style.color) {
            result = format!("<span style=\"{}\">{}</span>", css, result);
        }

        if let Some(url) = &style.link {
            result = format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(url),
                result
            );
        }

        result
    }
}
