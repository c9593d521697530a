use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::BlockRef,
    tree::link_tree,
    types::{Block, BlockNum},
};

/// A block whose lines are still being collected.
#[derive(Debug)]
struct OpenBlock {
    start_line: usize,
    indent: usize,
    span: Span,
    content: Vec<String>,
    properties: Vec<String>,
    all: Vec<String>,
}

impl OpenBlock {
    fn new(start_line: usize, indent: usize, span: Span) -> Self {
        Self {
            start_line,
            indent,
            span,
            content: vec![],
            properties: vec![],
            all: vec![],
        }
    }

    fn add_line(&mut self, c: &LineClass) {
        let trimmed = c.text.trim().to_string();
        if c.is_property {
            self.properties.push(trimmed.clone());
        } else {
            self.content.push(trimmed.clone());
        }
        self.all.push(trimmed);
        self.span = self.span.cover(c.line);
    }

    fn close(self, num: BlockNum, end_line: usize) -> Block {
        let id = BlockRef::find_id(&self.all.join("\n")).map(str::to_string);
        Block {
            num,
            start_line: self.start_line,
            end_line,
            span: self.span,
            indent: self.indent,
            content: self.content.join("\n"),
            property_content: self.properties.join("\n"),
            id,
            parent: None,
            children: vec![],
            prev: None,
            next: None,
        }
    }
}

/// Output of [`BlockBuilder::finish`].
#[derive(Debug)]
pub struct BuiltBlocks {
    /// Lines before the first bullet, joined by `\n`.
    pub header: String,
    /// Every block in discovery order, relations linked.
    pub blocks: Vec<Block>,
}

/// Groups classified lines into blocks.
///
/// Lines before the first bullet go to the header; every later line belongs
/// to the most recently opened block until the next bullet.
pub struct BlockBuilder {
    header: Vec<String>,
    open: Option<OpenBlock>,
    out: Vec<Block>,
    line_no: usize,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            header: vec![],
            open: None,
            out: vec![],
            line_no: 0,
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if let Some(indent) = c.bullet_indent {
            self.flush_block();
            self.open = Some(OpenBlock::new(self.line_no, indent, c.line));
        }

        match self.open.as_mut() {
            Some(block) => block.add_line(c),
            None => self.header.push(c.text.clone()),
        }
        self.line_no += 1;
    }

    pub fn finish(mut self) -> BuiltBlocks {
        // EOF flush
        self.flush_block();
        link_tree(&mut self.out);
        BuiltBlocks {
            header: self.header.join("\n"),
            blocks: self.out,
        }
    }

    fn flush_block(&mut self) {
        if let Some(open) = self.open.take() {
            let num = self.out.len();
            self.out.push(open.close(num, self.line_no));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
