use crate::model::Heading;

/// Checks that a flat heading sequence forms a legal hierarchy:
///
/// - the sequence is non-empty and every level is a positive integer;
/// - no level sits above the first heading's level;
/// - nesting deepens at most one step between adjacent headings; returning to
///   a shallower ancestor may jump any number of levels.
///
/// This is the gate in front of the tree builder. Validation is all-or-nothing
/// per document: a single malformed heading invalidates the whole sequence.
pub fn is_valid_nesting(headings: &[Heading]) -> bool {
    let Some(first) = headings.first() else {
        return false;
    };
    if first.level == 0 {
        return false;
    }

    let base_level = first.level;

    for (index, heading) in headings.iter().enumerate() {
        if heading.level == 0 {
            return false;
        }
        if heading.level < base_level {
            return false;
        }
        if let Some(next) = headings.get(index + 1) {
            if next.level > heading.level + 1 {
                return false;
            }
        }
    }

    true
}
