// src/api/adapter.rs
//! Converts Notion block JSON into the domain model.
//!
//! Conversion is lenient about payloads: a block whose kind-specific object
//! is missing or oddly shaped still converts, with empty defaults. Only the
//! envelope itself (an object with a `type`) is required.

use crate::error::AppError;
use crate::model::*;
use crate::types::{Annotations, BlockId, Color, Link, RichTextItem, RichTextType};
use serde_json::Value;

/// Converts one block object, including any pre-fetched `children`.
pub fn convert_block(value: &Value) -> Result<Block, AppError> {
    let object = value
        .as_object()
        .ok_or_else(|| AppError::MalformedDocument("block is not a JSON object".to_string()))?;
    let kind = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::MalformedDocument("block has no 'type' field".to_string()))?;

    let common = convert_block_common(value)?;
    let payload = object.get(kind);

    let block = match kind {
        "paragraph" => Block::Paragraph(ParagraphBlock {
            common,
            content: convert_text_block_content(payload),
        }),
        "heading_1" => Block::Heading1(Heading1Block {
            common,
            content: convert_text_block_content(payload),
        }),
        "heading_2" => Block::Heading2(Heading2Block {
            common,
            content: convert_text_block_content(payload),
        }),
        "heading_3" => Block::Heading3(Heading3Block {
            common,
            content: convert_text_block_content(payload),
        }),
        "bulleted_list_item" => Block::BulletedListItem(BulletedListItemBlock {
            common,
            content: convert_text_block_content(payload),
        }),
        "numbered_list_item" => Block::NumberedListItem(NumberedListItemBlock {
            common,
            content: convert_text_block_content(payload),
        }),
        "to_do" => Block::ToDo(ToDoBlock {
            common,
            content: convert_text_block_content(payload),
            checked: bool_field(payload, "checked"),
        }),
        "toggle" => Block::Toggle(ToggleBlock {
            common,
            content: convert_text_block_content(payload),
        }),
        "quote" => Block::Quote(QuoteBlock {
            common,
            content: convert_text_block_content(payload),
        }),
        "callout" => Block::Callout(CalloutBlock {
            common,
            icon: payload.and_then(|p| p.get("icon")).and_then(convert_icon),
            content: convert_text_block_content(payload),
        }),
        "code" => Block::Code(CodeBlock {
            common,
            code: payload.filter(|p| p.is_object()).map(|p| CodeContent {
                language: str_field(Some(p), "language"),
                rich_text: convert_rich_text_array(p.get("rich_text")),
                caption: convert_rich_text_array(p.get("caption")),
            }),
        }),
        "divider" => Block::Divider(DividerBlock { common }),
        "breadcrumb" => Block::Breadcrumb(BreadcrumbBlock { common }),
        "table_of_contents" => Block::TableOfContents(TableOfContentsBlock { common }),
        "image" => Block::Image(ImageBlock {
            common,
            image: payload.and_then(convert_file_object),
            caption: convert_rich_text_array(payload.and_then(|p| p.get("caption"))),
        }),
        "video" => Block::Video(VideoBlock {
            common,
            video: payload.and_then(convert_file_object),
        }),
        "bookmark" => Block::Bookmark(BookmarkBlock {
            common,
            url: str_field(payload, "url"),
            caption: convert_rich_text_array(payload.and_then(|p| p.get("caption"))),
        }),
        "embed" => Block::Embed(EmbedBlock {
            common,
            url: str_field(payload, "url"),
        }),
        "child_page" => Block::ChildPage(ChildPageBlock {
            common,
            title: str_field(payload, "title"),
        }),
        "child_database" => Block::ChildDatabase(ChildDatabaseBlock {
            common,
            title: str_field(payload, "title"),
        }),
        "table" => Block::Table(TableBlock {
            common,
            table_width: payload
                .and_then(|p| p.get("table_width"))
                .and_then(Value::as_u64)
                .and_then(|w| usize::try_from(w).ok())
                .unwrap_or_default(),
            has_column_header: bool_field(payload, "has_column_header"),
            has_row_header: bool_field(payload, "has_row_header"),
        }),
        "table_row" => Block::TableRow(TableRowBlock {
            common,
            cells: payload
                .and_then(|p| p.get("cells"))
                .and_then(Value::as_array)
                .map(|cells| cells.iter().map(|c| convert_rich_text_array(Some(c))).collect())
                .unwrap_or_default(),
        }),
        "column_list" => Block::ColumnList(ColumnListBlock { common }),
        "column" => Block::Column(ColumnBlock { common }),
        "unsupported" => Block::Unsupported(UnsupportedBlock { common }),
        other => {
            log::debug!("No dedicated variant for block kind '{}'", other);
            Block::Other(OtherBlock {
                common,
                kind: other.to_string(),
                rich_text: convert_rich_text_array(payload.and_then(|p| p.get("rich_text"))),
                payload: payload.cloned(),
            })
        }
    };

    Ok(block)
}

fn convert_block_common(value: &Value) -> Result<BlockCommon, AppError> {
    let id = match value.get("id").and_then(Value::as_str) {
        Some(raw) => BlockId::parse(raw).unwrap_or_else(|_| BlockId::from_raw(raw)),
        None => BlockId::new_v4(),
    };

    let children = match value.get("children").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .map(convert_block)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let mut common = BlockCommon::new(id).with_children(children);
    common.has_children |= value
        .get("has_children")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    common.archived = value
        .get("archived")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    Ok(common)
}

fn convert_text_block_content(payload: Option<&Value>) -> TextBlockContent {
    TextBlockContent {
        rich_text: convert_rich_text_array(payload.and_then(|p| p.get("rich_text"))),
        color: Color::from_token(&str_field(payload, "color")),
    }
}

/// Converts a rich text array; anything that is not an array is empty.
pub fn convert_rich_text_array(value: Option<&Value>) -> Vec<RichTextItem> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(convert_rich_text).collect())
        .unwrap_or_default()
}

fn convert_rich_text(value: &Value) -> Option<RichTextItem> {
    let object = value.as_object()?;
    let kind = object.get("type").and_then(Value::as_str).unwrap_or("text");
    let payload = object.get(kind);

    let text_type = match kind {
        "mention" => RichTextType::Mention {
            mention_type: str_field(payload, "type"),
        },
        "equation" => RichTextType::Equation {
            expression: str_field(payload, "expression"),
        },
        _ => RichTextType::Text {
            content: str_field(payload, "content"),
            link: payload
                .and_then(|p| p.get("link"))
                .and_then(|l| l.get("url"))
                .and_then(Value::as_str)
                .map(|url| Link {
                    url: url.to_string(),
                }),
        },
    };

    let plain_text = match object.get("plain_text").and_then(Value::as_str) {
        Some(text) => text.to_string(),
        None => match &text_type {
            RichTextType::Text { content, .. } => content.clone(),
            RichTextType::Equation { expression } => expression.clone(),
            RichTextType::Mention { .. } => String::new(),
        },
    };

    Some(RichTextItem {
        text_type,
        annotations: convert_annotations(object.get("annotations")),
        plain_text,
        href: object
            .get("href")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

fn convert_annotations(value: Option<&Value>) -> Annotations {
    Annotations {
        bold: bool_field(value, "bold"),
        italic: bool_field(value, "italic"),
        strikethrough: bool_field(value, "strikethrough"),
        underline: bool_field(value, "underline"),
        code: bool_field(value, "code"),
        color: Color::from_token(&str_field(value, "color")),
    }
}

/// `type == "file"` reads the hosted URL; anything else the external one.
fn convert_file_object(payload: &Value) -> Option<FileObject> {
    payload.as_object()?;
    let hosting = payload.get("type").and_then(Value::as_str).unwrap_or_default();
    let object = if hosting == "file" {
        let file = payload.get("file");
        FileObject::File {
            file: NotionFile {
                url: str_field(file, "url"),
                expiry_time: file
                    .and_then(|f| f.get("expiry_time"))
                    .and_then(Value::as_str)
                    .and_then(|t| chrono::DateTime::parse_from_rfc3339(t).ok())
                    .map(|t| t.with_timezone(&chrono::Utc)),
            },
        }
    } else {
        FileObject::external(&str_field(payload.get("external"), "url"))
    };
    Some(object)
}

fn convert_icon(value: &Value) -> Option<Icon> {
    match value.get("type").and_then(Value::as_str)? {
        "emoji" => Some(Icon::Emoji {
            emoji: str_field(Some(value), "emoji"),
        }),
        _ => match convert_file_object(value)? {
            FileObject::External { external } => Some(Icon::External { external }),
            FileObject::File { file } => Some(Icon::File { file }),
        },
    }
}

fn str_field(value: Option<&Value>, key: &str) -> String {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn bool_field(value: Option<&Value>, key: &str) -> bool {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paragraph_with_annotated_link() {
        let block = convert_block(&json!({
            "object": "block",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "type": "paragraph",
            "paragraph": {
                "rich_text": [{
                    "type": "text",
                    "text": { "content": "docs", "link": { "url": "https://docs.example" } },
                    "annotations": { "bold": true, "color": "red_background" },
                    "plain_text": "docs",
                    "href": "https://docs.example"
                }],
                "color": "default"
            }
        }))
        .unwrap();

        assert_eq!(block.id().as_str(), "598337872cf94fdf8782e53db20768a5");
        let item = &block.rich_text()[0];
        assert!(item.annotations.bold);
        assert_eq!(item.annotations.color, Color::RedBackground);
        assert_eq!(item.link_target(), Some("https://docs.example"));
    }

    #[test]
    fn test_missing_payload_keeps_kind() {
        let block = convert_block(&json!({ "type": "bulleted_list_item" })).unwrap();
        assert!(matches!(block, Block::BulletedListItem(_)));
        assert!(block.rich_text().is_empty());

        let image = convert_block(&json!({ "type": "image" })).unwrap();
        assert!(matches!(image, Block::Image(ImageBlock { image: None, .. })));
    }

    #[test]
    fn test_file_hosting_resolution() {
        let hosted = convert_block(&json!({
            "type": "image",
            "image": {
                "type": "file",
                "file": { "url": "https://s3/a.png", "expiry_time": "2026-01-01T00:00:00.000Z" },
                "caption": []
            }
        }))
        .unwrap();
        let Block::Image(image) = hosted else {
            panic!("expected image");
        };
        let file = image.image.unwrap();
        assert_eq!(file.url(), "https://s3/a.png");
        assert!(matches!(file, FileObject::File { file } if file.expiry_time.is_some()));

        let external = convert_block(&json!({
            "type": "video",
            "video": { "type": "external", "external": { "url": "https://youtu.be/x" } }
        }))
        .unwrap();
        let Block::Video(video) = external else {
            panic!("expected video");
        };
        assert_eq!(video.video.unwrap().url(), "https://youtu.be/x");
    }

    #[test]
    fn test_unknown_kind_keeps_rich_text_and_payload() {
        let block = convert_block(&json!({
            "type": "template",
            "template": { "rich_text": [{ "type": "text", "text": { "content": "Add" }, "plain_text": "Add" }] }
        }))
        .unwrap();
        let Block::Other(other) = &block else {
            panic!("expected other");
        };
        assert_eq!(other.kind, "template");
        assert!(other.payload.is_some());
        assert_eq!(block.plain_text(), "Add");
    }

    #[test]
    fn test_children_are_converted_recursively() {
        let block = convert_block(&json!({
            "type": "toggle",
            "has_children": true,
            "toggle": { "rich_text": [] },
            "children": [{ "type": "divider", "divider": {} }]
        }))
        .unwrap();
        assert_eq!(block.children().len(), 1);
        assert!(matches!(block.children()[0], Block::Divider(_)));
    }

    #[test]
    fn test_callout_icons() {
        let emoji = convert_block(&json!({
            "type": "callout",
            "callout": { "icon": { "type": "emoji", "emoji": "💡" }, "rich_text": [] }
        }))
        .unwrap();
        let Block::Callout(callout) = emoji else {
            panic!("expected callout");
        };
        assert_eq!(callout.icon.as_ref().map(Icon::glyph), Some("💡"));
    }

    #[test]
    fn test_envelope_errors() {
        assert!(convert_block(&json!("paragraph")).is_err());
        assert!(convert_block(&json!({ "id": "x" })).is_err());
    }

    #[test]
    fn test_unknown_color_falls_back_to_default() {
        let block = convert_block(&json!({
            "type": "paragraph",
            "paragraph": { "rich_text": [{ "plain_text": "x", "annotations": { "color": "teal" } }] }
        }))
        .unwrap();
        assert_eq!(block.rich_text()[0].annotations.color, Color::Default);
    }
}
