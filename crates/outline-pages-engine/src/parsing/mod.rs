pub mod blocks;
pub mod invariants;
pub mod properties;
pub mod rope;

use xi_rope::Rope;

use crate::models::Document;
use blocks::{BlockBuilder, OutlineLineClassifier};
use rope::lines_with_spans;

pub use properties::{Properties, extract_properties};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("No blocks found: the outline has no `- ` bullet lines")]
    EmptyDocument,
}

/// Parses an outline into a [`Document`].
///
/// Fails with [`ParseError::EmptyDocument`] when no line opens a block.
pub fn parse_document(rope: &Rope) -> Result<Document, ParseError> {
    let classifier = OutlineLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let built = builder.finish();
    if built.blocks.is_empty() {
        return Err(ParseError::EmptyDocument);
    }
    log::debug!("parsed {} blocks", built.blocks.len());

    Ok(Document::new(built.header, built.blocks))
}
