// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Original media URL → re-hosted URL, produced by the media upload pipeline.
///
/// Read-only during rendering. A miss is never an error: the original URL is
/// used unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUrlMap(HashMap<String, String>);

impl ImageUrlMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the replacement for an original URL.
    pub fn with_entry(mut self, original: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.0.insert(original.into(), replacement.into());
        self
    }

    /// Returns the replacement URL, or the original when none is mapped.
    pub fn resolve<'a>(&'a self, original: &'a str) -> &'a str {
        match self.0.get(original) {
            Some(replacement) if !replacement.is_empty() => replacement,
            _ => original,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for ImageUrlMap {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, String)> for ImageUrlMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Character budget for generated summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryLength(usize);

impl SummaryLength {
    const MIN: u32 = 1;
    const MAX: u32 = 10_000;

    pub fn new(value: usize) -> Result<Self, ValidationError> {
        if value < Self::MIN as usize || value > Self::MAX as usize {
            return Err(ValidationError::OutOfBounds {
                value: u32::try_from(value).unwrap_or(u32::MAX),
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for SummaryLength {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_SUMMARY_LENGTH)
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post title with validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        Ok(Self(title.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Block-level markup ready to be used as a post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderedHtml(String);

impl RenderedHtml {
    pub fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RenderedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
