use crate::models::Document;

/// Validates document structure invariants.
///
/// Asserts that:
/// - Block numbers match arena positions
/// - Parent and children lists agree in both directions
/// - Sibling links join blocks of equal indent and are mutual
/// - Every indexed id points at a block carrying that id
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for (pos, b) in doc.blocks().iter().enumerate() {
        assert_eq!(b.num, pos, "block number {} stored at position {pos}", b.num);

        if let Some(parent) = b.parent {
            let p = &doc.blocks()[parent];
            assert!(
                p.children.contains(&b.num),
                "block {} names parent {parent}, which does not list it",
                b.num
            );
        }
        for &child in &b.children {
            assert_eq!(
                doc.blocks()[child].parent,
                Some(b.num),
                "block {} lists child {child} with a different parent",
                b.num
            );
        }

        if let Some(next) = b.next {
            let n = &doc.blocks()[next];
            assert_eq!(
                n.indent, b.indent,
                "sibling link {} -> {next} crosses indent levels",
                b.num
            );
            assert!(next > b.num, "sibling link {} -> {next} goes backwards", b.num);
        }
        if let Some(prev) = b.prev {
            assert_eq!(
                doc.blocks()[prev].next,
                Some(b.num),
                "block {} has prev {prev} whose next differs",
                b.num
            );
        }
    }

    for (id, num) in doc.ids() {
        assert_eq!(
            doc.blocks()[num].id.as_deref(),
            Some(id),
            "id index entry {id} points at block {num} without that id"
        );
    }
}
