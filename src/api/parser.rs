// src/api/parser.rs
//! Parsing of block-tree documents as the fetch layer saves them.
//!
//! Accepted shapes:
//! - a list envelope `{"object": "list", "results": [...]}`
//! - a bare array of blocks
//! - a single block object
//! - a page export `{"id", "title", "excerpt", "slug", "date", "cover", "blocks": [...]}`

use super::adapter::convert_block;
use crate::error::AppError;
use crate::model::Block;
use crate::types::PageId;
use serde_json::Value;

/// A parsed document: the block tree plus whatever page metadata it carried.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedDocument {
    pub page_id: Option<PageId>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    pub date: Option<String>,
    pub cover_url: Option<String>,
    pub blocks: Vec<Block>,
}

/// Parses a document body into its block sequence and metadata.
pub fn parse_document(body: &str) -> Result<ParsedDocument, AppError> {
    let json: Value = serde_json::from_str(body)?;
    parse_document_value(&json)
}

/// Parses a document body, keeping only the block sequence.
pub fn parse_block_document(body: &str) -> Result<Vec<Block>, AppError> {
    parse_document(body).map(|doc| doc.blocks)
}

/// Parses an already decoded document.
pub fn parse_document_value(json: &Value) -> Result<ParsedDocument, AppError> {
    match json {
        Value::Array(items) => Ok(ParsedDocument {
            blocks: convert_blocks(items)?,
            ..Default::default()
        }),
        Value::Object(object) => {
            if object.get("object").and_then(Value::as_str) == Some("list") {
                let results = object
                    .get("results")
                    .and_then(Value::as_array)
                    .ok_or_else(|| {
                        AppError::MalformedDocument("list envelope has no 'results' array".to_string())
                    })?;
                return Ok(ParsedDocument {
                    blocks: convert_blocks(results)?,
                    ..Default::default()
                });
            }

            if let Some(blocks) = object.get("blocks").and_then(Value::as_array) {
                let text = |key: &str| {
                    object
                        .get(key)
                        .and_then(Value::as_str)
                        .map(str::to_string)
                };
                return Ok(ParsedDocument {
                    page_id: text("id").and_then(|id| PageId::parse(&id).ok()),
                    title: text("title"),
                    excerpt: text("excerpt"),
                    slug: text("slug"),
                    date: text("date"),
                    cover_url: text("cover"),
                    blocks: convert_blocks(blocks)?,
                });
            }

            Ok(ParsedDocument {
                blocks: vec![convert_block(json)?],
                ..Default::default()
            })
        }
        _ => Err(AppError::MalformedDocument(
            "document must be a JSON object or array".to_string(),
        )),
    }
}

fn convert_blocks(items: &[Value]) -> Result<Vec<Block>, AppError> {
    let blocks = items
        .iter()
        .map(convert_block)
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("Parsed {} top-level blocks", blocks.len());
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIVIDER: &str = r#"{"type": "divider", "divider": {}}"#;

    #[test]
    fn test_list_envelope() {
        let body = format!(r#"{{"object": "list", "results": [{}, {}]}}"#, DIVIDER, DIVIDER);
        assert_eq!(parse_block_document(&body).unwrap().len(), 2);
    }

    #[test]
    fn test_bare_array_and_single_block() {
        assert_eq!(parse_block_document(&format!("[{}]", DIVIDER)).unwrap().len(), 1);
        assert_eq!(parse_block_document(DIVIDER).unwrap().len(), 1);
    }

    #[test]
    fn test_page_export_carries_metadata() {
        let body = format!(
            r#"{{"id": "598337872cf94fdf8782e53db20768a5", "title": "Hello", "slug": "hi", "blocks": [{}]}}"#,
            DIVIDER
        );
        let doc = parse_document(&body).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Hello"));
        assert_eq!(doc.slug.as_deref(), Some("hi"));
        assert!(doc.excerpt.is_none());
        assert!(doc.date.is_none());
        assert!(doc.page_id.is_some());
        assert_eq!(doc.blocks.len(), 1);
    }

    #[test]
    fn test_page_export_carries_date_and_cover() {
        let body = format!(
            r#"{{"title": "Hello", "date": "2024-05-01", "cover": "https://s3/cover.png", "blocks": [{}]}}"#,
            DIVIDER
        );
        let doc = parse_document(&body).unwrap();
        assert_eq!(doc.date.as_deref(), Some("2024-05-01"));
        assert_eq!(doc.cover_url.as_deref(), Some("https://s3/cover.png"));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            parse_block_document("{"),
            Err(AppError::MalformedDocument(_))
        ));
        assert!(parse_block_document("42").is_err());
        assert!(parse_block_document(r#"{"object": "list"}"#).is_err());
    }
}
