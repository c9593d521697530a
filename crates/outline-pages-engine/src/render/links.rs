use regex::Captures;

use super::format::block_title;
use crate::{
    models::Document,
    parsing::blocks::{Block, kinds::BlockRef},
};

/// Anchor pointing at `block`'s page.
///
/// `label` defaults to the block's derived title. A missing block renders
/// the dangling placeholder instead of a link.
pub fn anchor_to_block(block: Option<&Block>, label: Option<&str>) -> String {
    match block {
        Some(block) => {
            let label = match label {
                Some(label) => label.to_string(),
                None => block_title(block),
            };
            format!("<a href=\"{}\">{label}</a>", block.page_name())
        }
        None => BlockRef::DANGLING.to_string(),
    }
}

/// Rewrites block references in already formatted HTML into anchors.
///
/// `[label](((uuid)))` keeps `label` verbatim; `((uuid))` is labelled with
/// the target's title, which is formatted but not scanned for further
/// references. Unknown ids render the `???` placeholder.
pub fn resolve_links(html: &str, doc: &Document) -> String {
    let titled = BlockRef::titled().replace_all(html, |caps: &Captures| {
        let target = lookup(doc, &caps[2]);
        anchor_to_block(target, Some(&caps[1]))
    });
    BlockRef::bare()
        .replace_all(&titled, |caps: &Captures| {
            let target = lookup(doc, &caps[1]);
            anchor_to_block(target, None)
        })
        .into_owned()
}

fn lookup<'a>(doc: &'a Document, id: &str) -> Option<&'a Block> {
    let found = doc.find_by_id(id);
    if found.is_none() {
        log::warn!("dangling block reference (({id}))");
    }
    found
}
