//! Restructure command implementation
//!
//! Loads the grouped document, flattens it and writes the multi-document
//! stream. Nothing is written until the input has been fully parsed.

use tracing::info;

use crate::cli::Cli;
use crate::error::Result;
use crate::flatten::flatten_groups;
use crate::loader::load_grouped;
use crate::progress::ProgressPrinter;
use crate::resource::Resource;
use crate::writer::write_stream_to_path;

/// Run the restructure command, returning the number of resources written
pub fn run(cli: &Cli) -> Result<usize> {
    let document = load_grouped(&cli.input)?;

    let mut progress = ProgressPrinter::new();
    let mut resources: Vec<Resource> = Vec::new();
    let mut dropped = 0;

    for group in flatten_groups(&document) {
        progress.group(&group.key);
        for resource in &group.resources {
            progress.resource(resource);
        }
        dropped += group.dropped;
        resources.extend(group.resources);
    }

    write_stream_to_path(&resources, &cli.output)?;
    progress.finish(&cli.input, &cli.output);

    info!(
        groups = document.len(),
        resources = progress.added(),
        dropped,
        "restructure complete"
    );
    Ok(resources.len())
}
