use super::types::{Block, BlockNum};

/// Links parent, child and sibling relations between blocks.
///
/// Runs one pass over the blocks in discovery order with a stack of open
/// blocks. The stack is popped while it holds more entries than the
/// current block's indent; a popped block at the same indent becomes the
/// current block's previous sibling. Whatever is left on top is the
/// parent. Indentation jumps are not validated, so an outline that skips
/// levels still gets a parent from whatever the stack holds.
///
/// When several popped blocks share the current indent, the first one
/// popped (the most recently opened) becomes `prev`; every one of them
/// gets `next` set to the current block.
pub fn link_tree(blocks: &mut [Block]) {
    let mut stack: Vec<BlockNum> = Vec::new();

    for current in 0..blocks.len() {
        let indent = blocks[current].indent;

        while stack.len() > indent {
            let Some(popped) = stack.pop() else { break };
            if blocks[popped].indent == indent {
                blocks[popped].next = Some(current);
                if blocks[current].prev.is_none() {
                    blocks[current].prev = Some(popped);
                }
            }
        }

        blocks[current].parent = stack.last().copied();
        stack.push(current);
    }

    for num in 0..blocks.len() {
        if let Some(parent) = blocks[num].parent {
            blocks[parent].children.push(num);
        }
    }
}
