use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Source identifier, typed by what it identifies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMarker;

pub type PageId = Id<PageMarker>;
pub type BlockId = Id<BlockMarker>;

impl<T> Id<T> {
    /// Parses a UUID, dashed or not, into 32 lowercase hex digits.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let compact: String = input.trim().chars().filter(|c| *c != '-').collect();

        if compact.len() != 32 {
            return Err(ValidationError::InvalidId(format!(
                "expected 32 hex digits, got {} in '{}'",
                compact.len(),
                input
            )));
        }
        if !compact.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidId(format!(
                "non-hex characters in '{}'",
                input
            )));
        }

        Ok(Self::from_normalized(compact.to_lowercase()))
    }

    /// Keeps an identifier as given by the source, without validation.
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self::from_normalized(value.into())
    }

    fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// A fresh random id, for nodes the source sent without one.
    pub fn new_v4() -> Self {
        Self::from_normalized(Uuid::new_v4().as_simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from_normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_and_compact_forms_agree() {
        let compact = PageId::parse("550E8400E29B41D4A716446655440000").unwrap();
        let dashed = PageId::parse(" 550e8400-e29b-41d4-a716-446655440000 ").unwrap();
        assert_eq!(compact, dashed);
        assert_eq!(dashed.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(PageId::parse("too-short").is_err());
        assert!(PageId::parse("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert!(PageId::parse("").is_err());
    }

    #[test]
    fn test_raw_ids_are_kept_verbatim() {
        assert_eq!(BlockId::from_raw("block-1").as_str(), "block-1");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = BlockId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"550e8400e29b41d4a716446655440000\""
        );
    }
}
