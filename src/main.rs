//! restructure-resources - flatten Helm resources-by-kind YAML
//!
//! Usage: `restructure-resources <input_file> <output_file>`

use restructure_resources::cli::{self, Invocation, USAGE_EXIT_CODE};
use restructure_resources::{commands, logging};

fn main() {
    logging::init();

    let args = match cli::parse_from(std::env::args_os()) {
        Invocation::Run(args) => args,
        Invocation::Usage => {
            println!("{}", cli::usage());
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    if let Err(e) = commands::restructure::run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
