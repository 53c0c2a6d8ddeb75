use super::blocks::*;
use crate::types::{BlockId, RichTextItem};
use serde::{Deserialize, Serialize};

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Toggle($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Callout($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Divider($pattern) => $result,
            Block::Breadcrumb($pattern) => $result,
            Block::TableOfContents($pattern) => $result,
            Block::Image($pattern) => $result,
            Block::Video($pattern) => $result,
            Block::Bookmark($pattern) => $result,
            Block::Embed($pattern) => $result,
            Block::ChildPage($pattern) => $result,
            Block::ChildDatabase($pattern) => $result,
            Block::Table($pattern) => $result,
            Block::TableRow($pattern) => $result,
            Block::ColumnList($pattern) => $result,
            Block::Column($pattern) => $result,
            Block::Unsupported($pattern) => $result,
            Block::Other($pattern) => $result,
        }
    };
}

/// Block represents every kind of node in a page's block tree.
///
/// Kinds without a dedicated variant land in [`Block::Other`], so a tree is
/// always traversable no matter what the source sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading1(Heading1Block),
    Heading2(Heading2Block),
    Heading3(Heading3Block),
    BulletedListItem(BulletedListItemBlock),
    NumberedListItem(NumberedListItemBlock),
    ToDo(ToDoBlock),
    Toggle(ToggleBlock),
    Quote(QuoteBlock),
    Callout(CalloutBlock),
    Code(CodeBlock),
    Divider(DividerBlock),
    Breadcrumb(BreadcrumbBlock),
    TableOfContents(TableOfContentsBlock),
    Image(ImageBlock),
    Video(VideoBlock),
    Bookmark(BookmarkBlock),
    Embed(EmbedBlock),
    ChildPage(ChildPageBlock),
    ChildDatabase(ChildDatabaseBlock),
    Table(TableBlock),
    TableRow(TableRowBlock),
    ColumnList(ColumnListBlock),
    Column(ColumnBlock),
    Unsupported(UnsupportedBlock),
    Other(OtherBlock),
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &BlockId {
        match_all_blocks!(self, b => &b.common.id)
    }

    /// Get the block's children
    pub fn children(&self) -> &[Block] {
        match_all_blocks!(self, b => &b.common.children)
    }

    /// Get block type name, as the source spells it
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::ToDo(_) => "to_do",
            Block::Toggle(_) => "toggle",
            Block::Quote(_) => "quote",
            Block::Callout(_) => "callout",
            Block::Code(_) => "code",
            Block::Divider(_) => "divider",
            Block::Breadcrumb(_) => "breadcrumb",
            Block::TableOfContents(_) => "table_of_contents",
            Block::Image(_) => "image",
            Block::Video(_) => "video",
            Block::Bookmark(_) => "bookmark",
            Block::Embed(_) => "embed",
            Block::ChildPage(_) => "child_page",
            Block::ChildDatabase(_) => "child_database",
            Block::Table(_) => "table",
            Block::TableRow(_) => "table_row",
            Block::ColumnList(_) => "column_list",
            Block::Column(_) => "column",
            Block::Unsupported(_) => "unsupported",
            Block::Other(b) => &b.kind,
        }
    }

    /// The rich text stored under the block's own kind, or an empty slice.
    pub fn rich_text(&self) -> &[RichTextItem] {
        match self {
            Block::Paragraph(b) => &b.content.rich_text,
            Block::Heading1(b) => &b.content.rich_text,
            Block::Heading2(b) => &b.content.rich_text,
            Block::Heading3(b) => &b.content.rich_text,
            Block::BulletedListItem(b) => &b.content.rich_text,
            Block::NumberedListItem(b) => &b.content.rich_text,
            Block::ToDo(b) => &b.content.rich_text,
            Block::Toggle(b) => &b.content.rich_text,
            Block::Quote(b) => &b.content.rich_text,
            Block::Callout(b) => &b.content.rich_text,
            Block::Code(b) => match &b.code {
                Some(code) => &code.rich_text,
                None => &[],
            },
            Block::Other(b) => &b.rich_text,
            _ => &[],
        }
    }

    /// Concatenated plain text of [`Block::rich_text`], unstyled.
    pub fn plain_text(&self) -> String {
        self.rich_text()
            .iter()
            .map(|item| item.plain_text.as_str())
            .collect()
    }

    /// Source heading level (1-3) for heading blocks.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Block::Heading1(_) => Some(1),
            Block::Heading2(_) => Some(2),
            Block::Heading3(_) => Some(3),
            _ => None,
        }
    }
}
