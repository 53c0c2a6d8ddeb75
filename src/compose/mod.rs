// src/compose/mod.rs
//! Assembles everything the publish call needs from one source page.
//!
//! Composition runs the renderer and both extractors over the same tree.
//! It is pure: the tree and the substitution map are only read.

use crate::constants::SLUG_MAX_CHARS;
use crate::extract::{extract_faq_items, extract_plain_text, faq_schema, FaqItem};
use crate::formatting::render_blocks;
use crate::media::{plan_cover_upload, plan_image_uploads, ImageUpload};
use crate::model::{Block, SourcePage};
use crate::types::{ImageUrlMap, PageId, PostTitle, RenderedHtml, SummaryLength};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SLUG_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_\s가-힣-]").expect("slug filter pattern is valid"));

static SLUG_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("slug separator pattern is valid"));

/// A post ready to hand to the blog's REST API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<PageId>,
    pub title: PostTitle,
    pub slug: String,
    pub content: RenderedHtml,
    pub excerpt: String,
    /// Publish date as `YYYY-MM-DDTHH:MM:SS` in the source's wall-clock time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Featured image URL, already substituted through the image map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub faq: Vec<FaqItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_schema: Option<serde_json::Value>,
    /// Images still pointing at the source store after substitution. An
    /// unmapped cover is listed last, named `{slug}-cover`.
    pub pending_uploads: Vec<ImageUpload>,
}

/// URL slug derived from a title. Hangul syllables are kept as-is.
///
/// ```ignore
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let filtered = SLUG_DISALLOWED.replace_all(&lowered, "");
    let dashed = SLUG_SEPARATORS.replace_all(&filtered, "-");
    dashed
        .trim_matches('-')
        .chars()
        .take(SLUG_MAX_CHARS)
        .collect()
}

/// Composes a post from loose parts.
///
/// An explicit excerpt wins when it is non-blank; otherwise the excerpt is
/// summarised from the top-level text.
pub fn compose_post(
    title: &PostTitle,
    explicit_excerpt: Option<&str>,
    blocks: &[Block],
    images: &ImageUrlMap,
    summary_length: SummaryLength,
) -> PostDraft {
    compose_with_slug(
        title,
        slugify(title.as_str()),
        explicit_excerpt,
        blocks,
        images,
        summary_length,
    )
}

/// Composes a post from a fully loaded source page.
///
/// A non-blank page slug replaces the derived one before uploads are named.
/// The cover becomes the featured image and an unparseable date is dropped.
pub fn compose(page: &SourcePage, images: &ImageUrlMap, summary_length: SummaryLength) -> PostDraft {
    let slug = match page.slug.as_deref().map(str::trim) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => slugify(page.title.as_str()),
    };
    let mut draft = compose_with_slug(
        &page.title,
        slug,
        page.excerpt.as_deref(),
        &page.blocks,
        images,
        summary_length,
    );
    draft.source_id = page.id.clone();

    draft.date = page.date.as_deref().and_then(|raw| {
        let date = publish_date(raw);
        if date.is_none() {
            log::warn!("Ignoring unparseable date '{}' on '{}'", raw, draft.slug);
        }
        date
    });

    if let Some(cover) = page
        .cover_url
        .as_deref()
        .and_then(|url| plan_cover_upload(url, &draft.slug))
    {
        let resolved = images.resolve(&cover.original_url).to_string();
        if resolved == cover.original_url {
            draft.pending_uploads.push(cover);
        }
        draft.featured_image = Some(resolved);
    }
    draft
}

/// Normalizes a source date to WordPress's `YYYY-MM-DDTHH:MM:SS` form.
///
/// Accepts a bare `YYYY-MM-DD` (midnight), an RFC 3339 timestamp (its local
/// wall-clock time is kept) or a naive `YYYY-MM-DDTHH:MM:SS`.
pub fn publish_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let naive = if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        date.and_hms_opt(0, 0, 0)?
    } else if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        stamp.naive_local()
    } else {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()?
    };
    Some(naive.format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn compose_with_slug(
    title: &PostTitle,
    slug: String,
    explicit_excerpt: Option<&str>,
    blocks: &[Block],
    images: &ImageUrlMap,
    summary_length: SummaryLength,
) -> PostDraft {
    let excerpt = match explicit_excerpt.map(str::trim) {
        Some(excerpt) if !excerpt.is_empty() => excerpt.to_string(),
        _ => extract_plain_text(blocks, summary_length.get()),
    };
    let faq = extract_faq_items(blocks);
    let pending_uploads = plan_image_uploads(blocks, &slug)
        .into_iter()
        .filter(|upload| images.resolve(&upload.original_url) == upload.original_url)
        .collect();

    log::debug!(
        "Composed '{}': {} Q&A items, excerpt of {} chars",
        slug,
        faq.len(),
        excerpt.chars().count()
    );

    PostDraft {
        source_id: None,
        title: title.clone(),
        slug,
        content: RenderedHtml::new(render_blocks(blocks, images)),
        excerpt,
        date: None,
        featured_image: None,
        faq_schema: faq_schema(&faq),
        faq,
        pending_uploads,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::types::RichTextItem;
    use pretty_assertions::assert_eq;

    fn paragraph(text: &str) -> Block {
        Block::Paragraph(ParagraphBlock {
            content: TextBlockContent {
                rich_text: vec![RichTextItem::plain_text(text)],
                ..Default::default()
            },
            ..Default::default()
        })
    }

    fn title(s: &str) -> PostTitle {
        PostTitle::new(s).unwrap()
    }

    #[test]
    fn test_slugify_ascii() {
        assert_eq!(slugify("  Hello, World! Rust_is fun  "), "hello-world-rust-is-fun");
    }

    #[test]
    fn test_slugify_keeps_hangul() {
        assert_eq!(slugify("노션 → 워드프레스 가이드"), "노션-워드프레스-가이드");
    }

    #[test]
    fn test_slugify_truncates() {
        let slug = slugify(&"word ".repeat(40));
        assert_eq!(slug.chars().count(), SLUG_MAX_CHARS);
    }

    #[test]
    fn test_explicit_excerpt_wins() {
        let draft = compose_post(
            &title("T"),
            Some("Hand written"),
            &[paragraph("Body text")],
            &ImageUrlMap::new(),
            SummaryLength::default(),
        );
        assert_eq!(draft.excerpt, "Hand written");
        assert_eq!(draft.content.as_str(), "<p>Body text</p>");
    }

    #[test]
    fn test_blank_excerpt_falls_back_to_summary() {
        let draft = compose_post(
            &title("T"),
            Some("   "),
            &[paragraph("Body text")],
            &ImageUrlMap::new(),
            SummaryLength::default(),
        );
        assert_eq!(draft.excerpt, "Body text");
        assert!(draft.faq_schema.is_none());
    }

    #[test]
    fn test_mapped_images_are_not_pending() {
        let blocks = vec![
            Block::Image(ImageBlock {
                image: Some(FileObject::hosted("https://s3/a.png")),
                ..Default::default()
            }),
            Block::Image(ImageBlock {
                image: Some(FileObject::hosted("https://s3/b.png")),
                ..Default::default()
            }),
        ];
        let map = ImageUrlMap::new().with_entry("https://s3/a.png", "https://blog/a.png");
        let draft = compose_post(&title("Pics"), None, &blocks, &map, SummaryLength::default());
        assert_eq!(draft.pending_uploads.len(), 1);
        assert_eq!(draft.pending_uploads[0].filename, "pics-2.png");
    }

    #[test]
    fn test_page_slug_override() {
        let page = SourcePage::new(title("Some Title"), vec![]).with_slug("custom-slug");
        let draft = compose(&page, &ImageUrlMap::new(), SummaryLength::default());
        assert_eq!(draft.slug, "custom-slug");
    }

    #[test]
    fn test_page_slug_names_uploads() {
        let page = SourcePage::new(
            title("Some Title"),
            vec![Block::Image(ImageBlock {
                image: Some(FileObject::hosted("https://s3/a.png")),
                ..Default::default()
            })],
        )
        .with_slug(" custom-slug ");
        let draft = compose(&page, &ImageUrlMap::new(), SummaryLength::default());
        assert_eq!(draft.pending_uploads[0].filename, "custom-slug-1.png");
    }

    #[test]
    fn test_publish_date_forms() {
        assert_eq!(publish_date("2024-05-01").as_deref(), Some("2024-05-01T00:00:00"));
        assert_eq!(
            publish_date("2024-05-01T09:30:00.000+09:00").as_deref(),
            Some("2024-05-01T09:30:00")
        );
        assert_eq!(publish_date("2024-05-01T09:30:00").as_deref(), Some("2024-05-01T09:30:00"));
        assert_eq!(publish_date("next tuesday"), None);
    }

    #[test]
    fn test_page_date_passes_through() {
        let dated = SourcePage::new(title("T"), vec![]).with_date("2024-05-01");
        let draft = compose(&dated, &ImageUrlMap::new(), SummaryLength::default());
        assert_eq!(draft.date.as_deref(), Some("2024-05-01T00:00:00"));

        let garbled = SourcePage::new(title("T"), vec![]).with_date("soon");
        assert!(compose(&garbled, &ImageUrlMap::new(), SummaryLength::default())
            .date
            .is_none());
    }

    #[test]
    fn test_unmapped_cover_is_pending_featured_image() {
        let page = SourcePage::new(title("Cover Post"), vec![]).with_cover("https://s3/cover.png");
        let draft = compose(&page, &ImageUrlMap::new(), SummaryLength::default());
        assert_eq!(draft.featured_image.as_deref(), Some("https://s3/cover.png"));
        assert_eq!(draft.pending_uploads.len(), 1);
        assert_eq!(draft.pending_uploads[0].filename, "cover-post-cover.png");
    }

    #[test]
    fn test_mapped_cover_uses_rehosted_url() {
        let page = SourcePage::new(title("Cover Post"), vec![]).with_cover("https://s3/cover.png");
        let map = ImageUrlMap::new().with_entry("https://s3/cover.png", "https://blog/cover.png");
        let draft = compose(&page, &map, SummaryLength::default());
        assert_eq!(draft.featured_image.as_deref(), Some("https://blog/cover.png"));
        assert!(draft.pending_uploads.is_empty());

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["featured_image"], "https://blog/cover.png");
        assert!(json.get("date").is_none());
    }
}
