// src/api/mod.rs
//! Reading block trees saved by the document fetch layer.
//!
//! Fetching itself (pagination, child expansion, retries) happens upstream;
//! this module only turns the saved JSON into the domain model.

pub mod adapter;
pub mod parser;

pub use adapter::{convert_block, convert_rich_text_array};
pub use parser::{parse_block_document, parse_document, parse_document_value, ParsedDocument};
