// src/formatting/block_renderer.rs
//! Block rendering engine: converts a block sequence to HTML.
//!
//! A single left-to-right pass groups runs of same-kind list items into one
//! list container. Grouping only looks at siblings; nested sequences are
//! grouped independently when an item's children are rendered.

use super::html_renderer::HtmlBlockRenderer;
use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::model::Block;
use crate::types::ImageUrlMap;

/// The three kinds of list item that coalesce into a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bulleted,
    Numbered,
    ToDo,
}

impl ListKind {
    /// The list kind of a block, `None` for non-list blocks.
    pub fn of(block: &Block) -> Option<Self> {
        match block {
            Block::BulletedListItem(_) => Some(ListKind::Bulleted),
            Block::NumberedListItem(_) => Some(ListKind::Numbered),
            Block::ToDo(_) => Some(ListKind::ToDo),
            _ => None,
        }
    }
}

/// Something that turns single blocks and list groups into markup units.
pub trait BlockRenderer {
    /// Renders one non-list block. An empty string contributes nothing.
    fn render_block(&self, block: &Block) -> String;

    /// Renders a run of consecutive same-kind list items as one container.
    fn render_list(&self, kind: ListKind, items: &[&Block]) -> String;
}

/// Grouping state of the sibling scan.
enum GroupState<'b> {
    Scanning,
    InGroup {
        kind: ListKind,
        items: Vec<&'b Block>,
    },
}

// --- Public API ---

/// Renders a block sequence to HTML, resolving images through `images`.
///
/// Non-empty units are joined by a single line break.
pub fn render_blocks(blocks: &[Block], images: &ImageUrlMap) -> String {
    let renderer = HtmlBlockRenderer::new(images);
    let html = render_sequence(&renderer, blocks);
    log::trace!("Rendered {} blocks into {} bytes", blocks.len(), html.len());
    html
}

/// Runs the grouping scan over `blocks`, delegating markup to `renderer`.
pub fn render_sequence<R>(renderer: &R, blocks: &[Block]) -> String
where
    R: BlockRenderer + ?Sized,
{
    let mut output = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);
    let mut state = GroupState::Scanning;

    for block in blocks {
        let kind = ListKind::of(block);
        state = match (state, kind) {
            (GroupState::InGroup { kind: open, mut items }, Some(next)) if open == next => {
                items.push(block);
                GroupState::InGroup { kind: open, items }
            }
            (previous, next) => {
                if let GroupState::InGroup { kind: open, items } = previous {
                    push_unit(&mut output, renderer.render_list(open, &items));
                }
                match next {
                    Some(kind) => GroupState::InGroup {
                        kind,
                        items: vec![block],
                    },
                    None => {
                        push_unit(&mut output, renderer.render_block(block));
                        GroupState::Scanning
                    }
                }
            }
        };
    }

    if let GroupState::InGroup { kind, items } = state {
        push_unit(&mut output, renderer.render_list(kind, &items));
    }

    output
}

fn push_unit(output: &mut String, unit: String) {
    if unit.is_empty() {
        return;
    }
    if !output.is_empty() {
        output.push('\n');
    }
    output.push_str(&unit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;

    /// Records the shape of the scan instead of producing markup.
    struct Recorder;

    impl BlockRenderer for Recorder {
        fn render_block(&self, block: &Block) -> String {
            match block {
                Block::Divider(_) => String::new(),
                other => other.block_type().to_string(),
            }
        }

        fn render_list(&self, kind: ListKind, items: &[&Block]) -> String {
            format!("{:?}x{}", kind, items.len())
        }
    }

    fn bullet() -> Block {
        Block::BulletedListItem(BulletedListItemBlock::default())
    }

    fn numbered() -> Block {
        Block::NumberedListItem(NumberedListItemBlock::default())
    }

    fn todo() -> Block {
        Block::ToDo(ToDoBlock::default())
    }

    fn paragraph() -> Block {
        Block::Paragraph(ParagraphBlock::default())
    }

    #[test]
    fn test_consecutive_items_share_a_container() {
        let blocks = vec![bullet(), bullet(), bullet()];
        assert_eq!(render_sequence(&Recorder, &blocks), "Bulletedx3");
    }

    #[test]
    fn test_kind_change_closes_group() {
        let blocks = vec![bullet(), numbered(), numbered(), todo(), bullet()];
        assert_eq!(
            render_sequence(&Recorder, &blocks),
            "Bulletedx1\nNumberedx2\nToDox1\nBulletedx1"
        );
    }

    #[test]
    fn test_non_list_block_splits_runs() {
        let blocks = vec![bullet(), paragraph(), bullet()];
        assert_eq!(
            render_sequence(&Recorder, &blocks),
            "Bulletedx1\nparagraph\nBulletedx1"
        );
    }

    #[test]
    fn test_empty_units_are_dropped() {
        let blocks = vec![
            paragraph(),
            Block::Divider(DividerBlock::default()),
            paragraph(),
        ];
        assert_eq!(render_sequence(&Recorder, &blocks), "paragraph\nparagraph");
    }

    #[test]
    fn test_grouping_is_repeatable() {
        let blocks = vec![todo(), todo(), paragraph(), numbered()];
        let first = render_sequence(&Recorder, &blocks);
        let second = render_sequence(&Recorder, &blocks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(render_blocks(&[], &ImageUrlMap::new()), "");
    }
}
