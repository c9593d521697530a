use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{Bullet, Property};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Line text without its terminator, untrimmed.
    pub text: String,
    /// Leading tab count if this line opens a new block.
    pub bullet_indent: Option<usize>,
    /// Whether the line carries a `key:: value` property.
    pub is_property: bool,
}

impl LineClass {
    /// Whether this line opens a new block.
    pub fn is_block_start(&self) -> bool {
        self.bullet_indent.is_some()
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct OutlineLineClassifier;

impl OutlineLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        LineClass {
            line: lr.span,
            text: lr.text.clone(),
            bullet_indent: Bullet::indent_of(&lr.text),
            is_property: Property::is_property_line(&lr.text),
        }
    }
}
