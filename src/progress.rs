//! Progress lines printed while restructuring
//!
//! Stdout carries one line per group, one per added resource and a final
//! summary. Colour is applied only when stdout is a terminal.

use std::path::Path;

use console::Style;

use crate::resource::Resource;

/// Prints restructuring progress to stdout
#[derive(Debug, Default)]
pub struct ProgressPrinter {
    added: usize,
}

impl ProgressPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce the group about to be processed
    pub fn group(&self, key: &str) {
        println!("{}", group_line(key));
    }

    /// Report a resource taken from the current group
    pub fn resource(&mut self, resource: &Resource) {
        self.added += 1;
        println!("{}", resource_line(resource));
    }

    /// Number of resources reported so far
    pub fn added(&self) -> usize {
        self.added
    }

    /// Final summary, preceded by a blank line
    pub fn finish(&self, input: &Path, output: &Path) {
        println!();
        println!("{}", summary_line(self.added, input, output));
    }
}

fn group_line(key: &str) -> String {
    format!("Processing kind: {}", Style::new().bold().apply_to(key))
}

fn resource_line(resource: &Resource) -> String {
    format!(
        "  Added {}: {}",
        Style::new().cyan().apply_to(resource.kind()),
        resource.name()
    )
}

fn summary_line(count: usize, input: &Path, output: &Path) -> String {
    format!(
        "Restructured {} resources from {} to {}",
        Style::new().bold().green().apply_to(count),
        input.display(),
        output.display()
    )
}
