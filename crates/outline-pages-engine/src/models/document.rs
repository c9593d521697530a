use std::collections::HashMap;

use xi_rope::Rope;

use crate::parsing::{
    ParseError, Properties,
    blocks::{Block, BlockNum},
    extract_properties, parse_document,
};

/// A parsed outline: the block arena, the header and its properties, and
/// the identifier index.
///
/// Built once by [`parse_document`] and read-only afterwards. Renderers take
/// it by shared reference, which is also how they reach the id index.
#[derive(Debug, Clone)]
pub struct Document {
    blocks: Vec<Block>,
    header: String,
    properties: Properties,
    ids: HashMap<String, BlockNum>,
}

impl Document {
    /// Assembles a document from linked blocks.
    ///
    /// Indexes block ids; when two blocks share an id the first one wins.
    pub fn new(header: String, blocks: Vec<Block>) -> Self {
        let properties = extract_properties(&header);

        let mut ids = HashMap::new();
        for b in &blocks {
            if let Some(id) = &b.id {
                ids.entry(id.clone()).or_insert(b.num);
            }
        }

        Self {
            blocks,
            header,
            properties,
            ids,
        }
    }

    /// Parses outline text.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        parse_document(&Rope::from(text))
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, num: BlockNum) -> Option<&Block> {
        self.blocks.get(num)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Source lines before the first bullet.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Properties declared in the header.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Looks up the block carrying `id`. Identifiers compare as written.
    pub fn find_by_id(&self, id: &str) -> Option<&Block> {
        self.ids.get(id).and_then(|&num| self.block(num))
    }

    /// The id index as `(id, block number)` pairs, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = (&str, BlockNum)> {
        self.ids.iter().map(|(id, &num)| (id.as_str(), num))
    }

    /// Blocks without a parent, in source order.
    ///
    /// These are the indent-0 blocks, plus an indented first block, which
    /// has nothing to nest under. Counting it as a root keeps it and its
    /// subtree on the index with pages of their own.
    pub fn roots(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_root())
    }

    pub fn parent_of(&self, block: &Block) -> Option<&Block> {
        block.parent.and_then(|num| self.block(num))
    }

    pub fn children_of<'a>(&'a self, block: &'a Block) -> impl Iterator<Item = &'a Block> {
        block.children.iter().filter_map(|&num| self.block(num))
    }
}
