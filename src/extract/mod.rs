// src/extract/mod.rs
//! Text extraction over block sequences: summaries and FAQ records.

pub mod faq;
pub mod plain_text;

pub use faq::{extract_faq_items, faq_schema, FaqItem};
pub use plain_text::extract_plain_text;
