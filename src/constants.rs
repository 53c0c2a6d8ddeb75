// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Markup boundaries
// ---------------------------------------------------------------------------

/// Deepest heading tag the body may use. Source level N maps to tag N+1
/// because `<h1>` belongs to the post title rendered by the blog theme.
pub const MAX_SOURCE_HEADING_LEVEL: u8 = 3;

/// Share of the row a column layout splits among its columns, in percent.
pub const COLUMN_LAYOUT_TOTAL_WIDTH: usize = 100;

/// Embed URL prefix for the recognized video host.
pub const VIDEO_EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

// ---------------------------------------------------------------------------
// Summary extraction
// ---------------------------------------------------------------------------

/// Default character budget for generated excerpts.
pub const DEFAULT_SUMMARY_LENGTH: usize = 160;

/// Appended to a summary that had to be cut.
pub const SUMMARY_ELLIPSIS: &str = "...";

/// Environment variable overriding the summary length.
pub const SUMMARY_LENGTH_ENV: &str = "NOTION2WP_SUMMARY_LENGTH";

// ---------------------------------------------------------------------------
// Post metadata
// ---------------------------------------------------------------------------

/// Maximum characters in a generated slug.
pub const SLUG_MAX_CHARS: usize = 80;

/// Vocabulary root for structured-data payloads.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// File name of the debug log written to the temp directory.
pub const LOG_FILE_NAME: &str = "notion2wp.log";
