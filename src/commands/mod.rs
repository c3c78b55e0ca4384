use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::SourceFormat;
use crate::model::{ContentBlock, Heading};
use crate::toc;
use crate::util::read_to_string;

pub mod build;
pub mod check;
pub mod extract;

fn load_headings(input: &Path, format: SourceFormat) -> Result<Vec<Heading>> {
    let raw = read_to_string(input)?;

    match format {
        SourceFormat::Markdown => toc::extract_headings(&raw),
        SourceFormat::Blocks => {
            let blocks: Vec<ContentBlock> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse content blocks: {}", input.display()))?;
            toc::headings_from_blocks(&blocks)
        }
    }
}
