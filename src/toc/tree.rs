use crate::model::{Heading, TocNode};

/// Folds a validated flat heading sequence into a nested tree. Children of a
/// node are the contiguous run of following headings exactly one level deeper;
/// sibling order matches document order. Every input heading appears in the
/// tree exactly once.
///
/// Callers must gate the input through `is_valid_nesting` first; the fold
/// assumes no heading sits above the first one and that nesting deepens one
/// step at a time. The root level is the first heading's level, so both
/// normalized and raw (`--keep-levels`) sequences fold correctly.
pub fn build_tree(headings: &[Heading]) -> Vec<TocNode> {
    let Some(first) = headings.first() else {
        return Vec::new();
    };

    let mut position = 0;
    build_level(headings, &mut position, first.level)
}

fn build_level(headings: &[Heading], position: &mut usize, level: u32) -> Vec<TocNode> {
    let mut siblings = Vec::new();

    while let Some(heading) = headings.get(*position) {
        if heading.level != level {
            // shallower heading: hand control back to the ancestor level
            break;
        }

        *position += 1;
        let mut node = TocNode::from(heading);
        if headings
            .get(*position)
            .is_some_and(|next| next.level > heading.level)
        {
            node.nodes = Some(build_level(headings, position, level + 1));
        }
        siblings.push(node);
    }

    siblings
}
