//! restructure-resources
//!
//! Converts Helm's resources-by-kind YAML (a mapping of `v1/Pod`-style keys to
//! resources, resource lists or sequences of either) into a multi-document
//! YAML stream with one Kubernetes resource per document.
//!
//! The pipeline is strictly linear: [`loader`] reads the grouped document,
//! [`flatten`](mod@flatten) extracts resources in order, and [`writer`] emits
//! the stream.

pub mod cli;
pub mod commands;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod logging;
pub mod progress;
pub mod resource;
pub mod writer;

pub use error::{RestructureError, Result};
pub use flatten::{ResourceGroup, flatten, flatten_groups};
pub use loader::{GroupedDocument, load_grouped, parse_grouped};
pub use resource::Resource;
pub use writer::{render_stream, write_stream, write_stream_to_path};
