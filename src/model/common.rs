use super::Block;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// Fields every node carries.
///
/// `children` holds the subtree the fetch step inlined. `has_children` is
/// the source's own flag and can be true while `children` is empty when the
/// subtree was never fetched; rendering only looks at `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: BlockId,
    pub children: Vec<Block>,
    pub has_children: bool,
    pub archived: bool,
}

impl BlockCommon {
    /// A leaf node with the given id.
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            children: Vec::new(),
            has_children: false,
            archived: false,
        }
    }

    /// Replaces the inlined subtree, keeping the flag in step with it.
    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.has_children = !children.is_empty();
        self.children = children;
        self
    }
}

/// Leaf node with a fresh random id, for builders and tests.
impl Default for BlockCommon {
    fn default() -> Self {
        Self::new(BlockId::new_v4())
    }
}
