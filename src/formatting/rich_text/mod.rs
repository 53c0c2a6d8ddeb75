// src/formatting/rich_text/mod.rs
//! Converts rich text runs into inline HTML.
//!
//! Every run's `plain_text` is escaped, then wrapped in its marks. Runs are
//! concatenated with no separator. Rendering never fails: unknown colors
//! are already folded to the default color when the tree is parsed.

mod annotations;
mod types;

pub use annotations::{annotations_to_style, HtmlStyleRenderer};
pub use types::{color_style, StyledRun, TextStyle};

use crate::types::RichTextItem;

/// Renders a sequence of rich text runs as inline HTML.
pub fn rich_text_to_html(items: &[RichTextItem]) -> String {
    items
        .iter()
        .map(|item| {
            let run = StyledRun {
                escaped: escape_html(&item.plain_text),
                style: annotations_to_style(item),
            };
            if run.style.is_plain() {
                run.escaped
            } else {
                HtmlStyleRenderer::apply_styles(&run)
            }
        })
        .collect()
}

/// Concatenated unstyled text of a run sequence.
pub fn plain_text_of(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}

/// Escapes text for element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes preformatted code; quotes stay literal inside `<code>`.
pub fn escape_code(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes a URL for a double-quoted attribute.
pub fn escape_url_attr(url: &str) -> String {
    url.replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Annotations, Color};

    #[test]
    fn test_plain_runs_are_concatenated() {
        let items = vec![
            RichTextItem::plain_text("Hello, "),
            RichTextItem::plain_text("world"),
        ];
        assert_eq!(rich_text_to_html(&items), "Hello, world");
    }

    #[test]
    fn test_text_is_escaped() {
        let items = vec![RichTextItem::plain_text("a < b & \"c\"")];
        assert_eq!(
            rich_text_to_html(&items),
            "a &lt; b &amp; &quot;c&quot;"
        );
    }

    #[test]
    fn test_bold_italic_run() {
        let items = vec![RichTextItem::plain_text("x").with_annotations(Annotations {
            bold: true,
            italic: true,
            ..Default::default()
        })];
        assert_eq!(rich_text_to_html(&items), "<em><strong>x</strong></em>");
    }

    #[test]
    fn test_background_color_span() {
        let items = vec![RichTextItem::plain_text("hi").with_annotations(Annotations {
            color: Color::YellowBackground,
            ..Default::default()
        })];
        assert_eq!(
            rich_text_to_html(&items),
            "<span style=\"background-color:#fbf3db\">hi</span>"
        );
    }

    #[test]
    fn test_empty_href_falls_back_to_text_link() {
        let items = vec![RichTextItem::plain_text("docs")
            .with_href("")
            .with_text_link("https://docs.example")];
        assert_eq!(
            rich_text_to_html(&items),
            "<a href=\"https://docs.example\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a>"
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(rich_text_to_html(&[]), "");
        assert_eq!(plain_text_of(&[]), "");
    }

    #[test]
    fn test_code_escaping_keeps_quotes() {
        assert_eq!(escape_code("if a < \"b\" {}"), "if a &lt; \"b\" {}");
    }
}
