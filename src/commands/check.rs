use anyhow::Result;
use tracing::{info, warn};

use crate::cli::CheckArgs;
use crate::toc;

pub fn run(args: CheckArgs) -> Result<()> {
    let headings = toc::normalize_levels(super::load_headings(&args.input, args.format)?);
    let valid = toc::is_valid_nesting(&headings);

    if valid {
        info!(
            path = %args.input.display(),
            headings = headings.len(),
            "heading hierarchy is well nested"
        );
    } else {
        warn!(
            path = %args.input.display(),
            headings = headings.len(),
            "heading hierarchy is not well nested; a build would emit an empty table of contents"
        );
    }

    Ok(())
}
