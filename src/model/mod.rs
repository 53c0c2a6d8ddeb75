mod block;
pub mod blocks;
pub mod common;

pub use block::Block;
pub use blocks::*;
pub use common::*;

use crate::types::{PageId, PostTitle};

/// One source page as handed over by the fetch layer: metadata plus a fully
/// populated block tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePage {
    pub id: Option<PageId>,
    pub title: PostTitle,
    /// Explicit slug; derived from the title when absent.
    pub slug: Option<String>,
    /// Explicit excerpt set on the page, if any.
    pub excerpt: Option<String>,
    /// Publish date as the source wrote it.
    pub date: Option<String>,
    /// Cover image URL, published as the featured image.
    pub cover_url: Option<String>,
    pub blocks: Vec<Block>,
}

impl SourcePage {
    pub fn new(title: PostTitle, blocks: Vec<Block>) -> Self {
        Self {
            id: None,
            title,
            slug: None,
            excerpt: None,
            date: None,
            cover_url: None,
            blocks,
        }
    }

    pub fn with_id(mut self, id: PageId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_cover(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = Some(cover_url.into());
        self
    }
}
