use anyhow::Result;

use crate::model::TocNode;

mod extract;
mod normalize;
mod slug;
mod tree;
mod validate;

pub use extract::{extract_headings, headings_from_blocks};
pub use normalize::normalize_levels;
pub use tree::build_tree;
pub use validate::is_valid_nesting;

/// Runs the full pipeline over raw document text: extract, normalize,
/// validate, build. A document whose headings do not form a legal hierarchy
/// yields an empty tree rather than an error.
pub fn table_of_contents(content: &str) -> Result<Vec<TocNode>> {
    let headings = normalize_levels(extract_headings(content)?);

    if !is_valid_nesting(&headings) {
        return Ok(Vec::new());
    }

    Ok(build_tree(&headings))
}
