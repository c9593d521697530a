use crate::parsing::rope::span::Span;

/// Arena index of a block; equal to its `num`.
pub type BlockNum = usize;

/// One outline node.
///
/// Blocks live in a flat arena owned by [`crate::Document`]; every relation
/// is an index into that arena rather than a pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Discovery order of the block's start line. Unique; names its page.
    pub num: BlockNum,
    /// First source line owned by this block (its bullet line).
    pub start_line: usize,
    /// One past the last source line owned by this block.
    pub end_line: usize,
    /// Byte span of the owned lines, terminators included.
    pub span: Span,
    /// Leading tab count of the bullet line.
    pub indent: usize,
    /// Trimmed non-property lines joined by `\n`. Keeps the leading `- `.
    pub content: String,
    /// Trimmed property lines joined by `\n`.
    pub property_content: String,
    /// Value of the first `id:: <uuid>` found in the block.
    pub id: Option<String>,
    pub parent: Option<BlockNum>,
    /// Direct children in source order.
    pub children: Vec<BlockNum>,
    /// Previous block at the same indent, see [`super::tree::link_tree`].
    pub prev: Option<BlockNum>,
    /// Next block at the same indent.
    pub next: Option<BlockNum>,
}

impl Block {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// The first line of `content`, bullet marker included.
    pub fn first_line(&self) -> &str {
        self.content.split('\n').next().unwrap_or_default()
    }

    /// File name of this block's page, relative to the output directory.
    pub fn page_name(&self) -> String {
        format!("{}.html", self.num)
    }
}
