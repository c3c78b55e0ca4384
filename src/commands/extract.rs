use anyhow::Result;
use tracing::info;

use crate::cli::ExtractArgs;
use crate::model::HeadingListManifest;
use crate::util::{now_utc_string, print_json_pretty, write_json_pretty};

pub fn run(args: ExtractArgs) -> Result<()> {
    let headings = super::load_headings(&args.input, args.format)?;

    let manifest = HeadingListManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        source_path: args.input.display().to_string(),
        source_format: args.format.as_str().to_string(),
        heading_count: headings.len(),
        headings,
    };

    match args.output {
        Some(path) => {
            write_json_pretty(&path, &manifest)?;
            info!(
                path = %path.display(),
                headings = manifest.heading_count,
                "wrote heading list manifest"
            );
        }
        None => print_json_pretty(&manifest)?,
    }

    Ok(())
}
