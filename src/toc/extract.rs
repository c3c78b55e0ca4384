use anyhow::{Context, Result};
use regex::Regex;

use crate::model::{ContentBlock, Heading};

use super::slug::slugify;

/// Scans raw document text for heading lines. A heading line starts with 2–6
/// `#` markers followed by a space; marker runs of 1 (the document title) or
/// 7+ are not headings. Levels are the marker counts as found in the source,
/// before any normalization.
pub fn extract_headings(content: &str) -> Result<Vec<Heading>> {
    let heading_regex =
        Regex::new(r"(?m)^(#{2,6}) (.+)$").context("failed to compile heading marker regex")?;

    let mut headings = Vec::new();
    for captures in heading_regex.captures_iter(content) {
        let marker = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let title = captures
            .get(2)
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        if title.is_empty() {
            continue;
        }

        headings.push(Heading {
            title: title.to_string(),
            slug: slugify(title),
            level: marker.len() as u32,
        });
    }

    Ok(headings)
}

/// The CMS-backed variant: pre-parsed content blocks whose `style` names a
/// heading weight (`h1`–`h6`). The block's child spans are joined into the
/// heading title; blocks without a heading style are skipped.
pub fn headings_from_blocks(blocks: &[ContentBlock]) -> Result<Vec<Heading>> {
    let style_regex =
        Regex::new(r"^h([1-6])$").context("failed to compile heading style regex")?;

    let mut headings = Vec::new();
    for block in blocks {
        let Some(style) = block.style.as_deref() else {
            continue;
        };
        let Some(captures) = style_regex.captures(style) else {
            continue;
        };
        let Some(level) = captures
            .get(1)
            .and_then(|digit| digit.as_str().parse::<u32>().ok())
        else {
            continue;
        };

        let title = block
            .children
            .as_deref()
            .map(|spans| {
                spans
                    .iter()
                    .map(|span| span.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
            .trim()
            .to_string();

        headings.push(Heading {
            slug: slugify(&title),
            title,
            level,
        });
    }

    Ok(headings)
}
