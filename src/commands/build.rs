use anyhow::Result;
use tracing::{info, warn};

use crate::cli::BuildArgs;
use crate::model::TocManifest;
use crate::toc;
use crate::util::{now_utc_string, print_json_pretty, sha256_file, write_json_pretty};

pub fn run(args: BuildArgs) -> Result<()> {
    let headings = super::load_headings(&args.input, args.format)?;
    let headings = if args.keep_levels {
        headings
    } else {
        toc::normalize_levels(headings)
    };

    let valid = toc::is_valid_nesting(&headings);
    if !valid {
        warn!(
            path = %args.input.display(),
            headings = headings.len(),
            "heading hierarchy is not well nested; emitting empty table of contents"
        );
    }

    let toc_nodes = if valid {
        toc::build_tree(&headings)
    } else {
        Vec::new()
    };

    let manifest = TocManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        source_path: args.input.display().to_string(),
        source_format: args.format.as_str().to_string(),
        source_sha256: sha256_file(&args.input)?,
        heading_count: headings.len(),
        valid,
        toc: toc_nodes,
    };

    match args.output {
        Some(path) => {
            write_json_pretty(&path, &manifest)?;
            info!(
                path = %path.display(),
                headings = manifest.heading_count,
                valid = manifest.valid,
                "wrote table-of-contents manifest"
            );
        }
        None => print_json_pretty(&manifest)?,
    }

    Ok(())
}
