use super::Color;
use serde::{Deserialize, Serialize};

/// The kind of rich text content.
///
/// Rendering always works from `plain_text`; the variant only decides where
/// a nested hyperlink can live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RichTextType {
    Text { content: String, link: Option<Link> },
    Mention { mention_type: String },
    Equation { expression: String },
}

/// One styled inline run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub text_type: RichTextType,
    pub annotations: Annotations,
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichTextItem {
    /// Create a plain text item, the most common rich text variant.
    ///
    /// ```ignore
    /// RichTextItem::plain_text("hello")
    /// ```
    pub fn plain_text(text: &str) -> Self {
        Self {
            text_type: RichTextType::Text {
                content: text.to_string(),
                link: None,
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }

    /// Returns a copy with the given annotations.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Returns a copy with a directly attached hyperlink.
    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    /// Returns a copy whose text payload carries a nested hyperlink.
    pub fn with_text_link(mut self, url: &str) -> Self {
        if let RichTextType::Text { link, .. } = &mut self.text_type {
            *link = Some(Link {
                url: url.to_string(),
            });
        }
        self
    }

    /// The hyperlink target, preferring the directly attached one.
    pub fn link_target(&self) -> Option<&str> {
        let direct = self.href.as_deref().filter(|h| !h.is_empty());
        direct.or_else(|| match &self.text_type {
            RichTextType::Text {
                link: Some(Link { url }),
                ..
            } if !url.is_empty() => Some(url.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Independent inline marks plus a color token.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}
