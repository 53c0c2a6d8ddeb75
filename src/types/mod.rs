// src/types/mod.rs
//! Validated vocabulary shared by parsing, rendering and composition.

use thiserror::Error;

mod colors;
mod domain_types;
mod ids;
mod rich_text;

pub use colors::*;
pub use domain_types::*;
pub use ids::*;
pub use rich_text::*;

/// Rejected input to one of the validated newtypes.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Not a block or page id: {0}")]
    InvalidId(String),

    #[error("Unknown color token: {0}")]
    InvalidColor(String),

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Value out of range: {value}, expected {min}..={max}")]
    OutOfBounds { value: u32, min: u32, max: u32 },
}
