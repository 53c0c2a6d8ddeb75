// src/lib.rs
//! notion2wp library: converts Notion block trees into WordPress post HTML.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `PipelineConfig`
//! - **Domain model**: `Block` and its per-kind structs, `SourcePage`
//! - **Domain types**: `RichTextItem`, `Color`, `ImageUrlMap`, ids
//! - **Parsing**: `parse_document`, `parse_block_document`
//! - **Rendering**: `render_blocks`, `rich_text_to_html`
//! - **Extraction**: `extract_plain_text`, `extract_faq_items`, `faq_schema`
//! - **Composition**: `compose_post`, `PostDraft`, `slugify`

pub mod api;
pub mod compose;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod formatting;
pub mod media;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod types;

// --- Error Handling ---
pub use crate::error::AppError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::PipelineConfig;

// --- Domain Model ---
pub use crate::model::{Block, BlockCommon, SourcePage};

// --- Block Types ---
pub use crate::model::blocks::{
    BookmarkBlock, BreadcrumbBlock, BulletedListItemBlock, CalloutBlock, ChildDatabaseBlock,
    ChildPageBlock, CodeBlock, CodeContent, ColumnBlock, ColumnListBlock, DividerBlock,
    EmbedBlock, ExternalFile, FileObject, Heading1Block, Heading2Block, Heading3Block, Icon,
    ImageBlock, NotionFile, NumberedListItemBlock, OtherBlock, ParagraphBlock, QuoteBlock,
    TableBlock, TableOfContentsBlock, TableRowBlock, TextBlockContent, ToDoBlock, ToggleBlock,
    UnsupportedBlock, VideoBlock,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, BlockId, Color, ImageUrlMap, Link, PageId, PostTitle, RenderedHtml,
    RichTextItem, RichTextType, SummaryLength,
};

// --- Parsing ---
pub use crate::api::{parse_block_document, parse_document, ParsedDocument};

// --- Rendering ---
pub use crate::formatting::{render_blocks, rich_text_to_html};

// --- Extraction ---
pub use crate::extract::{extract_faq_items, extract_plain_text, faq_schema, FaqItem};

// --- Media ---
pub use crate::media::{
    collect_image_urls, guess_content_type, plan_cover_upload, upload_filename, ImageUpload,
};

// --- Composition ---
pub use crate::compose::{compose, compose_post, publish_date, slugify, PostDraft};

// --- Pipeline Traits ---
pub use crate::pipeline::{DocumentSource, PostComposer, PostDelivery};
