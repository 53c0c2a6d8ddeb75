// src/formatting/html_renderer.rs
//! Per-kind HTML markup for blocks.
//!
//! Every accessor treats an absent payload as "render nothing", so unknown
//! or partially populated blocks never abort a conversion.

use super::block_renderer::{render_sequence, BlockRenderer, ListKind};
use super::rich_text::{escape_code, escape_html, escape_url_attr, plain_text_of, rich_text_to_html};
use super::styles::STYLES;
use super::video::{embed_url, youtube_video_id};
use crate::constants::{COLUMN_LAYOUT_TOTAL_WIDTH, MAX_SOURCE_HEADING_LEVEL};
use crate::model::*;
use crate::types::{ImageUrlMap, RichTextItem};

/// Equal-share column width in percent, floored. Zero columns yield zero.
pub fn column_width_percent(count: usize) -> usize {
    COLUMN_LAYOUT_TOTAL_WIDTH.checked_div(count).unwrap_or(0)
}

/// Renders blocks as inline-styled HTML for the blog body.
pub struct HtmlBlockRenderer<'a> {
    images: &'a ImageUrlMap,
}

impl<'a> HtmlBlockRenderer<'a> {
    pub fn new(images: &'a ImageUrlMap) -> Self {
        Self { images }
    }

    fn render_children(&self, children: &[Block]) -> String {
        if children.is_empty() {
            return String::new();
        }
        render_sequence(self, children)
    }

    // --- Text blocks ---

    fn format_paragraph(&self, rich_text: &[RichTextItem], children: &[Block]) -> String {
        let html = rich_text_to_html(rich_text);
        let child_html = self.render_children(children);
        if html.is_empty() && child_html.is_empty() {
            return String::new();
        }
        format!("<p>{}</p>{}", html, child_html)
    }

    /// Source level N becomes tag N+1; `<h1>` is the post title.
    fn format_heading(&self, level: u8, content: &TextBlockContent) -> String {
        let tag = level.min(MAX_SOURCE_HEADING_LEVEL) + 1;
        format!(
            "<h{tag}>{}</h{tag}>",
            rich_text_to_html(&content.rich_text),
            tag = tag
        )
    }

    fn format_quote(&self, b: &QuoteBlock) -> String {
        format!(
            "<blockquote {}>{}{}</blockquote>",
            STYLES.quote,
            rich_text_to_html(&b.content.rich_text),
            self.render_children(&b.common.children)
        )
    }

    fn format_callout(&self, b: &CalloutBlock) -> String {
        let glyph = b.icon.as_ref().map(Icon::glyph).unwrap_or_default();
        format!(
            "<div {}><span {}>{}</span><span {}>{}</span>{}</div>",
            STYLES.callout.wrapper,
            STYLES.callout.icon,
            glyph,
            STYLES.callout.content,
            rich_text_to_html(&b.content.rich_text),
            self.render_children(&b.common.children)
        )
    }

    fn format_toggle(&self, b: &ToggleBlock) -> String {
        format!(
            "<details {}><summary {}>{}</summary><div {}>{}</div></details>",
            STYLES.toggle.details,
            STYLES.toggle.summary,
            rich_text_to_html(&b.content.rich_text),
            STYLES.toggle.content,
            self.render_children(&b.common.children)
        )
    }

    fn format_code(&self, b: &CodeBlock) -> String {
        let Some(code) = &b.code else {
            return String::new();
        };
        format!(
            "<pre {}><code class=\"language-{}\">{}</code></pre>",
            STYLES.code,
            escape_html(&code.language),
            escape_code(&plain_text_of(&code.rich_text))
        )
    }

    // --- Lists ---

    fn format_list_item(&self, item: &Block) -> String {
        format!(
            "<li>{}{}</li>",
            rich_text_to_html(item.rich_text()),
            self.render_children(item.children())
        )
    }

    fn format_todo_item(&self, item: &Block) -> String {
        let checked = matches!(item, Block::ToDo(b) if b.checked);
        let checkbox = if checked {
            r#"<input type="checkbox" checked disabled />"#
        } else {
            r#"<input type="checkbox" disabled />"#
        };
        format!(
            "<li>{} {}{}</li>",
            checkbox,
            rich_text_to_html(item.rich_text()),
            self.render_children(item.children())
        )
    }

    // --- Media ---

    fn format_image(&self, b: &ImageBlock) -> String {
        let Some(image) = &b.image else {
            return String::new();
        };
        let src = self.images.resolve(image.url());
        let caption_html = rich_text_to_html(&b.caption);
        let figcaption = if caption_html.is_empty() {
            String::new()
        } else {
            format!(
                "<figcaption {}>{}</figcaption>",
                STYLES.image.caption, caption_html
            )
        };
        format!(
            "<figure {}><img src=\"{}\" alt=\"{}\" {} />{}</figure>",
            STYLES.image.wrapper,
            escape_url_attr(src),
            escape_html(&plain_text_of(&b.caption)),
            STYLES.image.img,
            figcaption
        )
    }

    /// Video files are never re-hosted, so the substitution map is not consulted.
    fn format_video(&self, b: &VideoBlock) -> String {
        let Some(video) = &b.video else {
            return String::new();
        };
        let url = video.url();
        if let Some(id) = youtube_video_id(url) {
            return video_iframe(id);
        }
        format!(
            "<video controls {}><source src=\"{}\" /></video>",
            STYLES.video.player,
            escape_url_attr(url)
        )
    }

    fn format_embed(&self, b: &EmbedBlock) -> String {
        if b.url.is_empty() {
            return String::new();
        }
        match youtube_video_id(&b.url) {
            Some(id) => video_iframe(id),
            None => link_card(&b.url, &escape_html(&b.url)),
        }
    }

    fn format_bookmark(&self, b: &BookmarkBlock) -> String {
        if b.url.is_empty() {
            return String::new();
        }
        let caption = rich_text_to_html(&b.caption);
        let label = if caption.is_empty() {
            escape_html(&b.url)
        } else {
            caption
        };
        link_card(&b.url, &label)
    }

    // --- Layout ---

    fn format_table(&self, b: &TableBlock) -> String {
        let rows: String = b
            .common
            .children
            .iter()
            // Non-row children are skipped and do not count toward the header position.
            .filter_map(|child| match child {
                Block::TableRow(row) => Some(row),
                _ => None,
            })
            .enumerate()
            .map(|(index, row)| {
                let is_header = b.has_column_header && index == 0;
                format_table_row(row, is_header)
            })
            .collect();
        format!("<table {}><tbody>{}</tbody></table>", STYLES.table.table, rows)
    }

    fn format_column_list(&self, b: &ColumnListBlock) -> String {
        let columns = &b.common.children;
        log::trace!(
            "Column layout with {} columns at {}% each",
            columns.len(),
            column_width_percent(columns.len())
        );
        let body: String = columns
            .iter()
            .map(|column| {
                format!(
                    "<div {}>{}</div>",
                    STYLES.columns.column,
                    self.render_children(column.children())
                )
            })
            .collect();
        format!("<div {}>{}</div>", STYLES.columns.row, body)
    }

    /// Wraps the rich text of a kind without a dedicated variant, if any.
    fn format_other(&self, b: &OtherBlock) -> String {
        if b.rich_text.is_empty() {
            log::debug!("Skipping block of unhandled kind '{}'", b.kind);
            return String::new();
        }
        format!("<p>{}</p>", rich_text_to_html(&b.rich_text))
    }
}

impl BlockRenderer for HtmlBlockRenderer<'_> {
    fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Paragraph(b) => self.format_paragraph(&b.content.rich_text, &b.common.children),
            Block::Heading1(b) => self.format_heading(1, &b.content),
            Block::Heading2(b) => self.format_heading(2, &b.content),
            Block::Heading3(b) => self.format_heading(3, &b.content),
            Block::BulletedListItem(_) => self.render_list(ListKind::Bulleted, &[block]),
            Block::NumberedListItem(_) => self.render_list(ListKind::Numbered, &[block]),
            Block::ToDo(_) => self.render_list(ListKind::ToDo, &[block]),
            Block::Toggle(b) => self.format_toggle(b),
            Block::Quote(b) => self.format_quote(b),
            Block::Callout(b) => self.format_callout(b),
            Block::Code(b) => self.format_code(b),
            Block::Divider(_) => format!("<hr {} />", STYLES.divider),
            Block::Image(b) => self.format_image(b),
            Block::Video(b) => self.format_video(b),
            Block::Bookmark(b) => self.format_bookmark(b),
            Block::Embed(b) => self.format_embed(b),
            Block::Table(b) => self.format_table(b),
            Block::ColumnList(b) => self.format_column_list(b),
            Block::Other(b) => self.format_other(b),
            // Consumed by their parents, or structural with nothing to show.
            Block::TableRow(_)
            | Block::Column(_)
            | Block::TableOfContents(_)
            | Block::Breadcrumb(_)
            | Block::ChildPage(_)
            | Block::ChildDatabase(_)
            | Block::Unsupported(_) => String::new(),
        }
    }

    fn render_list(&self, kind: ListKind, items: &[&Block]) -> String {
        match kind {
            ListKind::Bulleted => format!(
                "<ul>{}</ul>",
                items.iter().map(|item| self.format_list_item(item)).collect::<String>()
            ),
            ListKind::Numbered => format!(
                "<ol>{}</ol>",
                items.iter().map(|item| self.format_list_item(item)).collect::<String>()
            ),
            ListKind::ToDo => format!(
                "<ul {}>{}</ul>",
                STYLES.checklist,
                items.iter().map(|item| self.format_todo_item(item)).collect::<String>()
            ),
        }
    }
}

fn format_table_row(row: &TableRowBlock, is_header: bool) -> String {
    let (row_attr, tag, cell_style) = if is_header {
        (
            format!(" {}", STYLES.table.header_row),
            "th",
            STYLES.table.header_cell,
        )
    } else {
        (String::new(), "td", STYLES.table.cell)
    };
    let cells: String = row
        .cells
        .iter()
        .map(|cell| format!("<{tag} {}>{}</{tag}>", cell_style, rich_text_to_html(cell), tag = tag))
        .collect();
    format!("<tr{}>{}</tr>", row_attr, cells)
}

fn video_iframe(video_id: &str) -> String {
    format!(
        "<div {}><iframe src=\"{}\" {}></iframe></div>",
        STYLES.video.wrapper,
        embed_url(video_id),
        STYLES.video.iframe
    )
}

fn link_card(url: &str, label: &str) -> String {
    format!(
        "<div {}><a href=\"{}\" {} target=\"_blank\" rel=\"noopener noreferrer\">{}</a></div>",
        STYLES.bookmark.wrapper,
        escape_url_attr(url),
        STYLES.bookmark.link,
        label
    )
}
