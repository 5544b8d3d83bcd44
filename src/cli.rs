//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// Exit status for a wrong argument count
pub const USAGE_EXIT_CODE: i32 = 1;

const EXAMPLE_INPUT: &str = "resources_info_example.yaml";
const EXAMPLE_OUTPUT: &str = "resources_restructured.yaml";

/// restructure-resources - flatten Helm resources-by-kind YAML
///
/// Converts a mapping of resource groups into a multi-document YAML stream
/// with one Kubernetes resource per document.
#[derive(Parser, Debug, PartialEq)]
#[command(
    name = "restructure-resources",
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Convert Helm resources-by-kind YAML into a multi-document YAML stream",
    after_help = "EXAMPLES:\n  \
                  restructure-resources resources_info_example.yaml resources_restructured.yaml"
)]
pub struct Cli {
    /// YAML file with resources grouped by kind (e.g. "v1/Pod")
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,

    /// File to create or overwrite with one resource per document
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,
}

/// Outcome of reading the command line
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// Anything other than exactly two paths, `--help` included
    Usage,
}

/// Parse arguments. Every clap error, help and version requests included,
/// ends in the usage message.
pub fn parse_from<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_or(Invocation::Usage, Invocation::Run)
}

/// Usage text with one worked example
pub fn usage() -> String {
    format!(
        "Usage: restructure-resources <input_file> <output_file>\n\
         \n\
         Example:\n  \
         restructure-resources {EXAMPLE_INPUT} {EXAMPLE_OUTPUT}"
    )
}
