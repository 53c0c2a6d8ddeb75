// src/formatting/mod.rs
//! Renders block trees into publish-ready HTML.

pub mod block_renderer;
pub mod html_renderer;
pub mod rich_text;
pub mod styles;
pub mod video;

pub use block_renderer::{render_blocks, render_sequence, BlockRenderer, ListKind};
pub use html_renderer::{column_width_percent, HtmlBlockRenderer};
pub use rich_text::{escape_html, plain_text_of, rich_text_to_html};
pub use styles::STYLES;
