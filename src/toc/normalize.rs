use crate::model::Heading;

/// Rebases heading levels so the first heading sits at level 1, preserving
/// relative nesting. A document whose headings start at level 4 gets the same
/// tree shape as one starting at level 2.
pub fn normalize_levels(mut headings: Vec<Heading>) -> Vec<Heading> {
    let Some(first) = headings.first() else {
        return headings;
    };

    let offset = first.level.saturating_sub(1);
    if offset > 0 {
        for heading in &mut headings {
            heading.level = heading.level.saturating_sub(offset);
        }
    }

    headings
}
